mod crawl;
mod logging;

use clap::{Parser, Subcommand};

#[derive(Debug, Parser)]
#[command(name = "tradein-cli")]
#[command(about = "Phone trade-in price crawler")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Walk the vendor's option tree once and append quotes to the ledger
    Crawl,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = tradein_core::load_app_config()?;
    let _guards = logging::init_logging(&config)?;

    let cli = Cli::parse();
    match cli.command {
        Some(Commands::Crawl) | None => crawl::run(&config).await,
    }
}
