//! Traversal position in the vendor's product taxonomy.

use std::fmt;

use crate::error::ScrapeError;

/// Ordered sequence of taxonomy choices identifying the current crawl
/// position, e.g. `["apple", "iphone", "<model-url>", "<carrier-url>"]`.
///
/// Paths are value types: [`AttributePath::child`] returns a new, extended
/// copy and never mutates the parent, so sibling branches of a depth-first
/// walk cannot observe each other's segments. The maximum depth is fixed at
/// seed time and enforced on every extension.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AttributePath {
    segments: Vec<String>,
    max_depth: usize,
}

impl AttributePath {
    /// Builds the seed path a walk starts from.
    #[must_use]
    pub fn seed<I, S>(segments: I, max_depth: usize) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            segments: segments.into_iter().map(Into::into).collect(),
            max_depth,
        }
    }

    /// Returns a new path extended by one taxonomy choice.
    ///
    /// # Errors
    ///
    /// Returns [`ScrapeError::DepthExceeded`] when extending would pass the
    /// maximum depth. The vendor taxonomy is only a few levels deep in
    /// practice; hitting this guard means the API served a malformed or
    /// cyclic option tree.
    pub fn child(&self, segment: &str) -> Result<Self, ScrapeError> {
        if self.segments.len() >= self.max_depth {
            return Err(ScrapeError::DepthExceeded {
                path: self.to_string(),
                max_depth: self.max_depth,
            });
        }
        let mut segments = self.segments.clone();
        segments.push(segment.to_owned());
        Ok(Self {
            segments,
            max_depth: self.max_depth,
        })
    }

    #[must_use]
    pub fn segments(&self) -> &[String] {
        &self.segments
    }

    #[must_use]
    pub fn depth(&self) -> usize {
        self.segments.len()
    }
}

impl fmt::Display for AttributePath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.segments.join(" > "))
    }
}
