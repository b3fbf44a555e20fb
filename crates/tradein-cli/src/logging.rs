//! Logging bootstrap: tracing to an operational log, an error log, and
//! optionally the console.

use tracing_appender::non_blocking::WorkerGuard;
use tracing_appender::{non_blocking, rolling};
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::fmt;
use tracing_subscriber::layer::{Layer, SubscriberExt};
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;

use tradein_core::AppConfig;

/// Initializes the global tracing subscriber.
///
/// Two daily-rolling files land under `config.log_dir`: `tradein.log`
/// receives every event passing the configured level, `tradein.error.log`
/// only WARN and above. Console echo is toggled independently of the files.
/// The returned guards must stay alive for the life of the process or
/// buffered lines are dropped on exit.
///
/// # Errors
///
/// Returns an error if the log directory cannot be created.
pub(crate) fn init_logging(config: &AppConfig) -> anyhow::Result<Vec<WorkerGuard>> {
    std::fs::create_dir_all(&config.log_dir)?;

    let (ops_writer, ops_guard) = non_blocking(rolling::daily(&config.log_dir, "tradein.log"));
    let (err_writer, err_guard) =
        non_blocking(rolling::daily(&config.log_dir, "tradein.error.log"));

    let env_filter =
        EnvFilter::try_new(&config.log_level).unwrap_or_else(|_| EnvFilter::new("info"));

    let ops_layer = fmt::layer().with_ansi(false).with_writer(ops_writer);
    let err_layer = fmt::layer()
        .with_ansi(false)
        .with_writer(err_writer)
        .with_filter(LevelFilter::WARN);
    let console_layer = config
        .log_to_console
        .then(|| fmt::layer().with_writer(std::io::stdout));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(ops_layer)
        .with(err_layer)
        .with(console_layer)
        .init();

    Ok(vec![ops_guard, err_guard])
}
