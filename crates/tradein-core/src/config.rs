use std::path::PathBuf;

use crate::app_config::AppConfig;
use crate::ConfigError;

/// Load application configuration from environment variables.
///
/// Calls `dotenvy::dotenv().ok()` to load `.env` files before reading env vars.
///
/// # Errors
///
/// Returns `ConfigError` if a value fails to parse. No variable is required;
/// every setting has a default.
pub fn load_app_config() -> Result<AppConfig, ConfigError> {
    dotenvy::dotenv().ok();
    load_app_config_from_env()
}

/// Load application configuration from environment variables already in the process.
///
/// Unlike [`load_app_config`], this does NOT load `.env` files — useful for testing
/// or when the caller manages env setup.
///
/// # Errors
///
/// Returns `ConfigError` if a value fails to parse.
pub fn load_app_config_from_env() -> Result<AppConfig, ConfigError> {
    build_app_config(|key| std::env::var(key))
}

/// Build application configuration using the provided env-var lookup function.
///
/// This is the core parsing/validation logic, decoupled from the actual environment
/// so it can be tested with a pure `HashMap` lookup — no `set_var`/`remove_var` needed.
fn build_app_config<F>(lookup: F) -> Result<AppConfig, ConfigError>
where
    F: Fn(&str) -> Result<String, std::env::VarError>,
{
    let or_default = |var: &str, default: &str| -> String {
        lookup(var).unwrap_or_else(|_| default.to_string())
    };

    let parse_u64 = |var: &str, default: &str| -> Result<u64, ConfigError> {
        let raw = or_default(var, default);
        raw.parse::<u64>().map_err(|e| ConfigError::InvalidEnvVar {
            var: var.to_string(),
            reason: e.to_string(),
        })
    };

    let parse_usize = |var: &str, default: &str| -> Result<usize, ConfigError> {
        let raw = or_default(var, default);
        raw.parse::<usize>()
            .map_err(|e| ConfigError::InvalidEnvVar {
                var: var.to_string(),
                reason: e.to_string(),
            })
    };

    let parse_bool = |var: &str, default: &str| -> Result<bool, ConfigError> {
        let raw = or_default(var, default);
        raw.parse::<bool>()
            .map_err(|e| ConfigError::InvalidEnvVar {
                var: var.to_string(),
                reason: e.to_string(),
            })
    };

    let api_endpoint = or_default("TRADEIN_API_ENDPOINT", "https://buybackboss.com/api.php");
    let product_group = or_default("TRADEIN_PRODUCT_GROUP", "apple-phone");
    let seed_path = parse_seed_path(&or_default("TRADEIN_SEED_PATH", "apple,iphone"));
    let max_depth = parse_usize("TRADEIN_MAX_DEPTH", "10")?;

    let request_timeout_secs = parse_u64("TRADEIN_REQUEST_TIMEOUT_SECS", "10")?;
    let user_agent = or_default("TRADEIN_USER_AGENT", "tradein/0.1 (price tracking)");
    let inter_request_delay_ms = parse_u64("TRADEIN_INTER_REQUEST_DELAY_MS", "1000")?;

    let ledger_dir = PathBuf::from(or_default("TRADEIN_LEDGER_DIR", "."));
    let log_dir = PathBuf::from(or_default("TRADEIN_LOG_DIR", "./logs"));
    let log_level = or_default("TRADEIN_LOG_LEVEL", "info");
    let log_to_console = parse_bool("TRADEIN_LOG_CONSOLE", "true")?;

    Ok(AppConfig {
        api_endpoint,
        product_group,
        seed_path,
        max_depth,
        request_timeout_secs,
        user_agent,
        inter_request_delay_ms,
        ledger_dir,
        log_dir,
        log_level,
        log_to_console,
    })
}

/// Split a comma-separated seed path into segments, dropping empty entries
/// so trailing commas or doubled separators don't produce blank path steps.
fn parse_seed_path(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_owned)
        .collect()
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;
    use std::env::VarError;

    use super::*;

    fn lookup_from_map<'a>(
        map: &'a HashMap<&'a str, &'a str>,
    ) -> impl Fn(&str) -> Result<String, VarError> + 'a {
        move |key| {
            map.get(key)
                .map(|v| (*v).to_string())
                .ok_or(VarError::NotPresent)
        }
    }

    #[test]
    fn build_app_config_succeeds_with_empty_env() {
        let map: HashMap<&str, &str> = HashMap::new();
        let cfg = build_app_config(lookup_from_map(&map)).unwrap();
        assert_eq!(cfg.api_endpoint, "https://buybackboss.com/api.php");
        assert_eq!(cfg.product_group, "apple-phone");
        assert_eq!(cfg.seed_path, ["apple", "iphone"]);
        assert_eq!(cfg.max_depth, 10);
        assert_eq!(cfg.request_timeout_secs, 10);
        assert_eq!(cfg.inter_request_delay_ms, 1000);
        assert_eq!(cfg.ledger_dir, PathBuf::from("."));
        assert_eq!(cfg.log_dir, PathBuf::from("./logs"));
        assert_eq!(cfg.log_level, "info");
        assert!(cfg.log_to_console);
    }

    #[test]
    fn build_app_config_reads_overrides() {
        let mut map: HashMap<&str, &str> = HashMap::new();
        map.insert("TRADEIN_API_ENDPOINT", "http://localhost:9999/api.php");
        map.insert("TRADEIN_SEED_PATH", "apple, ipad");
        map.insert("TRADEIN_INTER_REQUEST_DELAY_MS", "0");
        map.insert("TRADEIN_MAX_DEPTH", "4");
        map.insert("TRADEIN_LOG_CONSOLE", "false");
        let cfg = build_app_config(lookup_from_map(&map)).unwrap();
        assert_eq!(cfg.api_endpoint, "http://localhost:9999/api.php");
        assert_eq!(cfg.seed_path, ["apple", "ipad"]);
        assert_eq!(cfg.inter_request_delay_ms, 0);
        assert_eq!(cfg.max_depth, 4);
        assert!(!cfg.log_to_console);
    }

    #[test]
    fn build_app_config_fails_with_invalid_delay() {
        let mut map: HashMap<&str, &str> = HashMap::new();
        map.insert("TRADEIN_INTER_REQUEST_DELAY_MS", "not-a-number");
        let result = build_app_config(lookup_from_map(&map));
        assert!(
            matches!(result, Err(ConfigError::InvalidEnvVar { ref var, .. }) if var == "TRADEIN_INTER_REQUEST_DELAY_MS"),
            "expected InvalidEnvVar(TRADEIN_INTER_REQUEST_DELAY_MS), got: {result:?}"
        );
    }

    #[test]
    fn build_app_config_fails_with_invalid_max_depth() {
        let mut map: HashMap<&str, &str> = HashMap::new();
        map.insert("TRADEIN_MAX_DEPTH", "-1");
        let result = build_app_config(lookup_from_map(&map));
        assert!(
            matches!(result, Err(ConfigError::InvalidEnvVar { ref var, .. }) if var == "TRADEIN_MAX_DEPTH"),
            "expected InvalidEnvVar(TRADEIN_MAX_DEPTH), got: {result:?}"
        );
    }

    #[test]
    fn build_app_config_fails_with_invalid_console_toggle() {
        let mut map: HashMap<&str, &str> = HashMap::new();
        map.insert("TRADEIN_LOG_CONSOLE", "yes");
        let result = build_app_config(lookup_from_map(&map));
        assert!(
            matches!(result, Err(ConfigError::InvalidEnvVar { ref var, .. }) if var == "TRADEIN_LOG_CONSOLE"),
            "expected InvalidEnvVar(TRADEIN_LOG_CONSOLE), got: {result:?}"
        );
    }

    #[test]
    fn parse_seed_path_drops_empty_segments() {
        assert_eq!(parse_seed_path("apple,,iphone,"), ["apple", "iphone"]);
        assert_eq!(parse_seed_path(" apple , iphone "), ["apple", "iphone"]);
    }
}
