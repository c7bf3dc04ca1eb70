//! Binary crate for the `nws` command-line tool.
//!
//! This crate focuses on:
//! - Parsing CLI arguments
//! - Wiring the core client to stdout

use clap::Parser;

mod cli;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "nws_core=warn".into()),
        )
        .init();

    let cmd = cli::Cli::parse();
    cmd.run().await
}
