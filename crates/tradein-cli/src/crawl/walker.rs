//! Depth-first walk of the vendor's option tree.
//!
//! Strictly sequential: one request in flight at a time, with a fixed pause
//! before every descent. The sequencing is both the rate-limiting policy
//! toward the vendor and the guarantee that ledger appends never race, so
//! no locking discipline is needed around the file.

use std::future::Future;
use std::pin::Pin;
use std::time::Duration;

use tradein_ledger::Ledger;
use tradein_scraper::{extract_price_records, AttributePath, OptionApiClient};

/// Per-branch accounting, merged upward as the recursion unwinds. Branch
/// failure is a visible value here, not a suppressed exception: every
/// abandoned branch, rejected leaf, and lost write is counted.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub(crate) struct CrawlStats {
    pub records_written: u64,
    pub leaves_extracted: u64,
    pub leaves_rejected: u64,
    pub branches_failed: u64,
    pub writes_failed: u64,
}

impl CrawlStats {
    fn merge(&mut self, other: CrawlStats) {
        self.records_written += other.records_written;
        self.leaves_extracted += other.leaves_extracted;
        self.leaves_rejected += other.leaves_rejected;
        self.branches_failed += other.branches_failed;
        self.writes_failed += other.writes_failed;
    }
}

/// Walks the subtree rooted at `path`, appending extracted records to the
/// ledger as a side effect.
///
/// Failure handling follows the crawl's error taxonomy: a fetch failure
/// abandons this branch, an extraction failure drops this leaf, a write
/// failure loses that one record. All are logged and counted; none touch
/// sibling branches. Depth-limit violations from [`AttributePath::child`]
/// are branch failures too — a cyclic option tree ends in counters, not in
/// a blown stack.
pub(crate) fn walk_branch<'a>(
    client: &'a OptionApiClient,
    ledger: &'a Ledger,
    delay: Duration,
    path: AttributePath,
) -> Pin<Box<dyn Future<Output = CrawlStats> + 'a>> {
    Box::pin(async move {
        let mut stats = CrawlStats::default();

        tracing::info!(path = %path, "fetching option tree node");
        let response = match client.fetch_options(&path).await {
            Ok(response) => response,
            Err(e) => {
                tracing::warn!(path = %path, error = %e, "abandoning branch after fetch failure");
                stats.branches_failed += 1;
                return stats;
            }
        };

        if response.is_leaf() {
            match extract_price_records(&response, &path) {
                Ok(records) => {
                    stats.leaves_extracted += 1;
                    tracing::info!(path = %path, records = records.len(), "extracted quotes from leaf");
                    for record in &records {
                        match ledger.append(record) {
                            Ok(()) => stats.records_written += 1,
                            Err(e) => {
                                tracing::error!(path = %path, error = %e, "record lost: ledger append failed");
                                stats.writes_failed += 1;
                            }
                        }
                    }
                }
                Err(e) => {
                    tracing::warn!(error = %e, "dropping leaf with unusable data");
                    stats.leaves_rejected += 1;
                }
            }
            return stats;
        }

        // Internal node: descend into every child option, in the order the
        // vendor listed them, pausing before each request.
        for option in &response.product_list {
            let Some(url) = option.url.as_deref() else {
                tracing::warn!(path = %path, "child option has no url; skipping");
                continue;
            };
            let child = match path.child(url) {
                Ok(child) => child,
                Err(e) => {
                    tracing::warn!(path = %path, error = %e, "abandoning branch at depth limit");
                    stats.branches_failed += 1;
                    continue;
                }
            };
            if !delay.is_zero() {
                tokio::time::sleep(delay).await;
            }
            let child_stats = walk_branch(client, ledger, delay, child).await;
            stats.merge(child_stats);
        }

        stats
    })
}

#[cfg(test)]
#[path = "walker_test.rs"]
mod tests;
