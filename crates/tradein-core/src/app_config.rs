use std::path::PathBuf;

/// Runtime configuration for a crawl, loaded from the environment by
/// [`crate::load_app_config`]. Every field has a default, so an empty
/// environment yields a working configuration.
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Vendor API endpoint receiving the option-tree POST requests.
    pub api_endpoint: String,
    /// Product group the crawl enumerates, e.g. `"apple-phone"`.
    pub product_group: String,
    /// Seed attribute path the walk starts from.
    pub seed_path: Vec<String>,
    /// Maximum attribute-path depth before a branch is abandoned.
    pub max_depth: usize,
    pub request_timeout_secs: u64,
    pub user_agent: String,
    /// Pause between consecutive API requests, in milliseconds.
    pub inter_request_delay_ms: u64,
    /// Directory the dated CSV ledger files are written to.
    pub ledger_dir: PathBuf,
    /// Directory the operational and error log files are written to.
    pub log_dir: PathBuf,
    pub log_level: String,
    /// Whether log lines are echoed to stdout in addition to the log files.
    pub log_to_console: bool,
}
