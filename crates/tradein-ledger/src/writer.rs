//! Append-only dated CSV ledger.
//!
//! One file per calendar day, created with a fixed header row on first
//! write. Rows are never merged or deduplicated — running the same crawl
//! twice appends two identical record sets.

use std::borrow::Cow;
use std::fs::OpenOptions;
use std::io::Write;
use std::path::{Path, PathBuf};

use chrono::NaiveDate;
use tradein_core::PriceRecord;

use crate::error::LedgerError;

/// Header row written once when a day's file is created.
pub const LEDGER_HEADER: &str = "Timestamp,Phone Model,Carrier,Storage,Condition,Price";

/// The ledger file for a calendar day.
///
/// Pure: derived fresh from `date` for every write, never cached process-wide.
#[must_use]
pub fn ledger_path_for(dir: &Path, date: NaiveDate) -> PathBuf {
    dir.join(format!("phone_prices_{}.csv", date.format("%Y-%m-%d")))
}

/// Append-only CSV ledger rooted at a directory.
///
/// Appends are synchronous and unlocked: the crawl visits the option tree
/// strictly sequentially, so two writes can never race.
#[derive(Debug, Clone)]
pub struct Ledger {
    dir: PathBuf,
}

impl Ledger {
    #[must_use]
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// Appends one record to the file for the record's capture date,
    /// creating the ledger directory and the day's file (with header) on
    /// first use.
    ///
    /// # Errors
    ///
    /// Returns [`LedgerError::CreateDir`] if the ledger directory cannot be
    /// created, or [`LedgerError::Write`] if the file cannot be opened or
    /// appended to. The record is lost on error; the caller decides whether
    /// to continue.
    pub fn append(&self, record: &PriceRecord) -> Result<(), LedgerError> {
        std::fs::create_dir_all(&self.dir).map_err(|e| LedgerError::CreateDir {
            path: self.dir.clone(),
            source: e,
        })?;

        let path = ledger_path_for(&self.dir, record.captured_at.date_naive());
        let is_new = !path.exists();

        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&path)
            .map_err(|e| LedgerError::Write {
                path: path.clone(),
                source: e,
            })?;

        // Header and first row go out in one write so a freshly created
        // file can never be observed headerless.
        let mut chunk = String::new();
        if is_new {
            chunk.push_str(LEDGER_HEADER);
            chunk.push('\n');
        }
        chunk.push_str(&format_row(record));
        chunk.push('\n');

        file.write_all(chunk.as_bytes())
            .map_err(|e| LedgerError::Write { path, source: e })
    }
}

/// One CSV row for a record, fields in header order.
fn format_row(record: &PriceRecord) -> String {
    let timestamp = record.captured_at.format("%Y-%m-%d %H:%M:%S").to_string();
    let price = record.price.to_string();
    let fields = [
        timestamp.as_str(),
        record.model.as_str(),
        record.carrier.as_str(),
        record.storage.as_str(),
        record.condition.label(),
        price.as_str(),
    ];
    fields
        .iter()
        .map(|f| csv_field(f))
        .collect::<Vec<_>>()
        .join(",")
}

/// Quotes a field when it contains a separator, quote, or line break.
fn csv_field(field: &str) -> Cow<'_, str> {
    if field.contains(',') || field.contains('"') || field.contains('\n') || field.contains('\r') {
        Cow::Owned(format!("\"{}\"", field.replace('"', "\"\"")))
    } else {
        Cow::Borrowed(field)
    }
}
