//! Wayfinder CLI binary.

use anyhow::Result;
use tracing_subscriber::EnvFilter;
use wayfinder::cli::Cli;

/// Main entry point for the wayfinder CLI.
///
/// Uses tokio's current_thread runtime: the graph work is synchronous and
/// only file and stdin I/O is async.
#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    // Controlled via RUST_LOG, e.g. RUST_LOG=wayfinder=debug,wayfinder_edgelist=trace
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("wayfinder=info,wayfinder_edgelist=info")),
        )
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();

    tracing::debug!("Starting wayfinder CLI");

    let cli = Cli::parse_args();
    cli.execute().await?;

    tracing::debug!("Wayfinder CLI completed successfully");
    Ok(())
}
