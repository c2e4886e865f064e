use std::io::{self, Write};

use clap::Parser;
use tracing_subscriber::EnvFilter;

use hermes::cli::Cli;
use hermes::config::DiscoveryConfig;
use hermes::errors::HermesResult;
use hermes::http::HttpFetcher;
use hermes::services::DiscoveryService;

#[tokio::main]
async fn main() {
    // Logs go to stderr so stdout only carries feed lines.
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    if let Err(e) = run().await {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

async fn run() -> HermesResult<()> {
    DiscoveryConfig::load_env();

    let cli = Cli::parse();
    let config = DiscoveryConfig::from_cli(&cli)?;

    let service = DiscoveryService::new(HttpFetcher::new()?);
    let feeds = service.run(&config).await?;

    let mut stdout = io::stdout().lock();
    for feed in &feeds {
        writeln!(stdout, "{}", feed)?;
    }

    Ok(())
}
