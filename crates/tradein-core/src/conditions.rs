//! Device condition tiers offered by the buyback vendor.
//!
//! The vendor prices every product at up to six condition tiers. Each tier
//! maps to a fixed numeric key in the API's product entries (`price_6` is
//! "Brand New", `price_1` is "Faulty"). The ordering of [`Condition::ALL`]
//! is the ordering quotes are emitted in — best condition first — and is
//! stable for the life of the process.

use std::fmt;

/// One of the vendor's six device condition tiers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Condition {
    BrandNew,
    Flawless,
    Good,
    Average,
    Fair,
    Faulty,
}

impl Condition {
    /// All tiers in emission order: best condition first.
    pub const ALL: [Condition; 6] = [
        Condition::BrandNew,
        Condition::Flawless,
        Condition::Good,
        Condition::Average,
        Condition::Fair,
        Condition::Faulty,
    ];

    /// Human-readable tier name, as written to the ledger.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Condition::BrandNew => "Brand New",
            Condition::Flawless => "Flawless",
            Condition::Good => "Good",
            Condition::Average => "Average",
            Condition::Fair => "Fair",
            Condition::Faulty => "Faulty",
        }
    }

    /// The vendor's price field for this tier in API product entries.
    #[must_use]
    pub fn price_field(self) -> &'static str {
        match self {
            Condition::BrandNew => "price_6",
            Condition::Flawless => "price_5",
            Condition::Good => "price_4",
            Condition::Average => "price_11",
            Condition::Fair => "price_3",
            Condition::Faulty => "price_1",
        }
    }
}

impl fmt::Display for Condition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_is_ordered_best_to_worst() {
        let labels: Vec<&str> = Condition::ALL.iter().map(|c| c.label()).collect();
        assert_eq!(
            labels,
            ["Brand New", "Flawless", "Good", "Average", "Fair", "Faulty"]
        );
    }

    #[test]
    fn price_fields_match_vendor_keys() {
        let fields: Vec<&str> = Condition::ALL.iter().map(|c| c.price_field()).collect();
        assert_eq!(
            fields,
            ["price_6", "price_5", "price_4", "price_11", "price_3", "price_1"]
        );
    }

    #[test]
    fn display_uses_label() {
        assert_eq!(Condition::BrandNew.to_string(), "Brand New");
    }
}
