//! Manual webhook probe entry point
//!
//! Runs the three smoke checks (ping, verification handshake, sample event
//! POST) against the configured webhook endpoint and prints the transcript.

use clap::Parser;
use webhook_probe::cli::{run_cli, Cli};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::WARN.into()),
        )
        .with_target(false)
        .init();

    let cli = Cli::parse();
    let exit_code = run_cli(cli).await?;

    std::process::exit(exit_code);
}
