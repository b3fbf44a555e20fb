mod error;
mod writer;

pub use error::LedgerError;
pub use writer::{ledger_path_for, Ledger, LEDGER_HEADER};
