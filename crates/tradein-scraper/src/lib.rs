pub mod client;
pub mod error;
pub mod extract;
pub mod path;
pub mod types;

pub use client::OptionApiClient;
pub use error::ScrapeError;
pub use extract::extract_price_records;
pub use path::AttributePath;
pub use types::{OptionTreeResponse, ProductEntry, SelectedOption};
