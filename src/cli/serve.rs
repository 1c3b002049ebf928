//! Serve command handler
//!
//! Runs the ranking API in the foreground until interrupted.

use crate::config::Config;
use crate::error::Result;
use crate::server;
use clap::Args;
use tracing::info;

/// Serve command arguments
#[derive(Args)]
pub struct ServeArgs {
    /// Bind address, overriding server.host
    #[arg(long)]
    pub host: Option<String>,

    /// Listen port, overriding server.port
    #[arg(long, short = 'p')]
    pub port: Option<u16>,
}

/// Run the serve command
pub async fn run(args: ServeArgs) -> Result<()> {
    super::init_logging("info");

    let config = Config::load()?;
    info!(version = env!("CARGO_PKG_VERSION"), "starting park-radar API");

    server::run_on(config, args.host, args.port).await
}
