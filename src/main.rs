use anyhow::Result;
use clap::Parser;

mod cli;
mod helpers;

use cli::Cli;

fn main() -> Result<()> {
    // Load .env before reading environment-backed arguments
    dotenvy::dotenv().ok();

    // Initialize tracing; the log level is controlled via RUST_LOG
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();
    cli.run()?;

    Ok(())
}
