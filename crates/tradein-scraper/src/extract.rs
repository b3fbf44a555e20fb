//! Record extraction from leaf responses.
//!
//! A leaf's `selectedOptionList` names the resolved attributes (model,
//! carrier, storage) and its `productList` carries the per-condition
//! quotes. Extraction derives one [`PriceRecord`] per (product, quoted
//! condition) pair, or rejects the whole leaf when the attributes cannot
//! be resolved — there is no partial emission from a half-resolved leaf.

use chrono::Local;
use tradein_core::{Condition, PriceRecord};

use crate::error::ScrapeError;
use crate::path::AttributePath;
use crate::types::{OptionTreeResponse, SelectedOption};

/// Display-name prefix marking a model option in the selected-option list.
const MODEL_FAMILY_PREFIX: &str = "iPhone";

/// Carriers the vendor quotes against. Closed set; matching is exact.
const KNOWN_CARRIERS: [&str; 5] = ["AT&T", "T-Mobile", "Verizon", "Unlocked", "Other"];

/// Derives the price records quoted by a leaf response.
///
/// Fan-out is (product × condition) in [`Condition::ALL`] order; pairs with
/// no quote, or a zero quote, are skipped. Each record captures its own
/// timestamp at derivation time.
///
/// # Errors
///
/// Returns [`ScrapeError::Extraction`] when the model, carrier, or storage
/// attribute cannot be resolved from the selected-option list, or the
/// storage value carries no recognizable capacity unit. The leaf is dropped
/// whole; the caller logs the skip and moves on.
pub fn extract_price_records(
    response: &OptionTreeResponse,
    path: &AttributePath,
) -> Result<Vec<PriceRecord>, ScrapeError> {
    let selected = &response.selected_option_list;

    let model = resolve_model(selected)
        .ok_or_else(|| reject(path, "no model option in the selected-option list"))?;
    let carrier = resolve_carrier(selected)
        .ok_or_else(|| reject(path, "no recognized carrier in the selected-option list"))?;
    let storage = resolve_storage(selected)
        .ok_or_else(|| reject(path, "no storage option with a GB/TB capacity"))?;

    let mut records = Vec::new();
    for product in &response.product_list {
        for condition in Condition::ALL {
            let Some(price) = product.price_for(condition) else {
                tracing::debug!(
                    path = %path,
                    condition = %condition,
                    field = condition.price_field(),
                    "no quote at this tier"
                );
                continue;
            };
            if price.is_zero() {
                tracing::debug!(path = %path, condition = %condition, "zero quote treated as absent");
                continue;
            }
            records.push(PriceRecord {
                captured_at: Local::now(),
                model: model.clone(),
                carrier: carrier.to_owned(),
                storage: storage.to_owned(),
                condition,
                price,
            });
        }
    }
    Ok(records)
}

fn reject(path: &AttributePath, reason: &str) -> ScrapeError {
    ScrapeError::Extraction {
        path: path.to_string(),
        reason: reason.to_owned(),
    }
}

/// Picks the most specific model option: of all options prefixed by the
/// family marker, the one with the longest display name wins ("iPhone 16
/// Pro Max" over a bare "iPhone"). First wins on equal length.
fn resolve_model(selected: &[SelectedOption]) -> Option<String> {
    selected
        .iter()
        .filter(|o| o.option_name.starts_with(MODEL_FAMILY_PREFIX))
        .reduce(|longest, current| {
            if current.option_name.len() > longest.option_name.len() {
                current
            } else {
                longest
            }
        })
        .map(|o| o.option_name.clone())
}

/// First selected option that names a known carrier.
fn resolve_carrier(selected: &[SelectedOption]) -> Option<&str> {
    selected
        .iter()
        .find(|o| KNOWN_CARRIERS.contains(&o.option_name.as_str()))
        .map(|o| o.option_name.as_str())
}

/// First selected option carrying a capacity unit. Options without "GB" or
/// "TB" in the name (including megabyte-era values) never resolve.
fn resolve_storage(selected: &[SelectedOption]) -> Option<&str> {
    selected
        .iter()
        .find(|o| o.option_name.contains("GB") || o.option_name.contains("TB"))
        .map(|o| o.option_name.as_str())
}
