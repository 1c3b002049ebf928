//! park-radar CLI entry point
//!
//! Parking proximity ranking - CLI + web API

use park_radar::cli;

#[tokio::main]
async fn main() {
    if let Err(e) = cli::run().await {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
