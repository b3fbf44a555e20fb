//! Vendor API response types for the product-option endpoint.
//!
//! ## Observed shape
//!
//! Every node of the option tree comes back from the same endpoint with the
//! same envelope: a `productList` and a `selectedOptionList`, both of which
//! may be absent (we default them to empty).
//!
//! ### Internal nodes
//! `productList` entries carry a navigable `url` slug and a display `name`
//! for each child option; no price fields are present.
//!
//! ### Leaf nodes
//! `productList` entries carry the per-condition price fields (`price_6`,
//! `price_5`, `price_4`, `price_11`, `price_3`, `price_1`) and the
//! `selectedOptionList` holds the fully resolved attributes (model, carrier,
//! storage) as display names.
//!
//! ### Prices
//! Usually JSON numbers, occasionally numeric strings. Null, empty strings,
//! and anything unparseable are treated as "no quote at this tier" rather
//! than a shape error — an absent price only skips that (product, condition)
//! pair downstream.

use rust_decimal::Decimal;
use serde::{Deserialize, Deserializer};
use tradein_core::Condition;

/// One node of the vendor's option tree.
#[derive(Debug, Default, Deserialize)]
pub struct OptionTreeResponse {
    /// Child options (internal node) or priced products (leaf node).
    #[serde(default, rename = "productList")]
    pub product_list: Vec<ProductEntry>,

    /// Attributes resolved by the path so far. Only meaningful on leaves.
    #[serde(default, rename = "selectedOptionList")]
    pub selected_option_list: Vec<SelectedOption>,
}

impl OptionTreeResponse {
    /// A node is a leaf when its first product exposes a value for the top
    /// price tier; everything else is an unresolved choice point.
    #[must_use]
    pub fn is_leaf(&self) -> bool {
        self.product_list
            .first()
            .is_some_and(|p| p.price_6.is_some())
    }
}

/// A single `productList` entry. On internal nodes only `url`/`name` are
/// set; on leaves only the price fields are.
#[derive(Debug, Default, Deserialize)]
pub struct ProductEntry {
    /// URL slug to append to the attribute path when descending.
    #[serde(default)]
    pub url: Option<String>,

    /// Display name of the child option, e.g. `"iPhone 16 Pro Max"`.
    #[serde(default)]
    pub name: Option<String>,

    #[serde(default, deserialize_with = "lenient_price")]
    pub price_6: Option<Decimal>,

    #[serde(default, deserialize_with = "lenient_price")]
    pub price_5: Option<Decimal>,

    #[serde(default, deserialize_with = "lenient_price")]
    pub price_4: Option<Decimal>,

    #[serde(default, deserialize_with = "lenient_price")]
    pub price_11: Option<Decimal>,

    #[serde(default, deserialize_with = "lenient_price")]
    pub price_3: Option<Decimal>,

    #[serde(default, deserialize_with = "lenient_price")]
    pub price_1: Option<Decimal>,
}

impl ProductEntry {
    /// The quoted price for a condition tier, if the vendor offered one.
    #[must_use]
    pub fn price_for(&self, condition: Condition) -> Option<Decimal> {
        match condition {
            Condition::BrandNew => self.price_6,
            Condition::Flawless => self.price_5,
            Condition::Good => self.price_4,
            Condition::Average => self.price_11,
            Condition::Fair => self.price_3,
            Condition::Faulty => self.price_1,
        }
    }
}

/// A resolved attribute from a leaf's `selectedOptionList`.
#[derive(Debug, Default, Clone, Deserialize)]
pub struct SelectedOption {
    /// Display name of the selected attribute value, e.g. `"128GB"`.
    #[serde(default)]
    pub option_name: String,
}

/// Deserializes a price field that may be a number, a numeric string, null,
/// or junk. Anything that does not parse cleanly becomes `None`.
fn lenient_price<'de, D>(deserializer: D) -> Result<Option<Decimal>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<serde_json::Value>::deserialize(deserializer)?;
    Ok(value.as_ref().and_then(decimal_from_value))
}

fn decimal_from_value(value: &serde_json::Value) -> Option<Decimal> {
    match value {
        serde_json::Value::Number(n) => n.to_string().parse().ok(),
        serde_json::Value::String(s) => {
            let trimmed = s.trim();
            if trimmed.is_empty() {
                None
            } else {
                trimmed.parse().ok()
            }
        }
        _ => None,
    }
}
