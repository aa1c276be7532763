//! Main entry point for the EcomViz dashboard.

use clap::Parser;
use ecomviz_common::{bootstrap_subscriber, init_logging};
use ecomviz_dashboard::{Args, Dashboard};
use tracing::info;

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let config = tracing::subscriber::with_default(bootstrap_subscriber(args.bootstrap_level()), || {
        args.resolve_config()
    })?;

    init_logging(&config.logging)
        .map_err(|e| anyhow::anyhow!("failed to initialise logging: {e}"))?;

    info!("Starting EcomViz dashboard");

    let dashboard = Dashboard::new(config);
    let path = dashboard.run().await?;
    info!("Dashboard available at {}", path.display());
    Ok(())
}
