//! The crawl command: seed the walk, drive it to completion, report totals.
//!
//! Branch-level failures (dead subtrees, unusable leaves, lost writes) are
//! logged and counted rather than propagated, so a single bad subtree never
//! aborts the rest of the census. Only setup failures are fatal.

mod walker;

use std::time::{Duration, Instant};

use tradein_core::AppConfig;
use tradein_ledger::Ledger;
use tradein_scraper::{AttributePath, OptionApiClient};

/// Runs one full crawl from the configured seed path.
///
/// # Errors
///
/// Returns an error only for fatal setup failures (invalid endpoint, client
/// construction). Everything below the root is handled per branch and
/// surfaced in the summary.
pub(crate) async fn run(config: &AppConfig) -> anyhow::Result<()> {
    let started = Instant::now();

    let client = OptionApiClient::new(
        &config.api_endpoint,
        &config.product_group,
        config.request_timeout_secs,
        &config.user_agent,
    )?;
    let ledger = Ledger::new(config.ledger_dir.clone());
    let seed = AttributePath::seed(config.seed_path.iter().cloned(), config.max_depth);

    tracing::info!(seed = %seed, endpoint = %config.api_endpoint, "starting option tree crawl");

    let delay = Duration::from_millis(config.inter_request_delay_ms);
    let stats = walker::walk_branch(&client, &ledger, delay, seed).await;

    let elapsed = started.elapsed();
    tracing::info!(
        records_written = stats.records_written,
        leaves_extracted = stats.leaves_extracted,
        leaves_rejected = stats.leaves_rejected,
        branches_failed = stats.branches_failed,
        writes_failed = stats.writes_failed,
        elapsed_secs = elapsed.as_secs_f64(),
        "crawl complete"
    );
    println!(
        "crawl complete in {:.1}s: {} records written, {} leaves rejected, {} branches failed, {} writes failed",
        elapsed.as_secs_f64(),
        stats.records_written,
        stats.leaves_rejected,
        stats.branches_failed,
        stats.writes_failed,
    );
    Ok(())
}
