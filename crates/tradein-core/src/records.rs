//! The terminal output unit of a crawl: one priced quote for one fully
//! resolved device configuration at one condition tier.

use chrono::{DateTime, Local};
use rust_decimal::Decimal;

use crate::conditions::Condition;

/// A single trade-in price quote. Constructed once by the extractor and
/// appended to the ledger; never updated afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PriceRecord {
    /// Wall-clock time the quote was observed, captured per record.
    pub captured_at: DateTime<Local>,
    /// Fully resolved model name, e.g. `"iPhone 16 Pro Max"`.
    pub model: String,
    /// Carrier the quote applies to, e.g. `"Unlocked"`.
    pub carrier: String,
    /// Storage capacity as displayed by the vendor, e.g. `"128GB"`.
    pub storage: String,
    /// Condition tier this price is quoted at.
    pub condition: Condition,
    /// Quoted buyback price in the vendor's currency.
    pub price: Decimal,
}
