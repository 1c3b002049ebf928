//! CLI command handlers
//!
//! Each subcommand has its own module with handler functions.

pub mod classify;
pub mod config;
pub mod rank;
pub mod serve;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

/// Proximity ranking for parking candidates
#[derive(Parser)]
#[command(name = "park-radar")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Rank parking candidates around a reference point
    Rank(rank::RankArgs),

    /// Classify availability or probability values
    Classify(classify::ClassifyArgs),

    /// Start web server (foreground)
    Serve(serve::ServeArgs),

    /// Manage configuration
    Config(config::ConfigArgs),
}

/// Install the tracing subscriber; `RUST_LOG` overrides `default_level`
///
/// Logs go to stderr so command output on stdout stays clean.
pub fn init_logging(default_level: &str) {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .with_writer(std::io::stderr)
        .try_init();
}

/// Run the CLI
pub async fn run() -> crate::error::Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Rank(args) => rank::run(args).await,
        Commands::Classify(args) => classify::run(args),
        Commands::Serve(args) => serve::run(args).await,
        Commands::Config(args) => config::run(args),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_rank() {
        let cli = Cli::try_parse_from([
            "park-radar", "rank", "--kind", "free", "--input", "spots.json", "--lat", "18.52",
            "--lng", "73.85", "--limit", "3",
        ])
        .unwrap();

        let Commands::Rank(args) = cli.command else {
            panic!("expected rank command");
        };
        assert_eq!(args.kind.as_deref(), Some("free"));
        assert_eq!(args.limit, Some(3));
        assert_eq!(args.lat, Some(18.52));
    }

    #[test]
    fn test_location_conflicts_with_coordinates() {
        let result = Cli::try_parse_from([
            "park-radar", "rank", "--input", "x.json", "--lat", "1", "--lng", "2", "--location",
            "Pune",
        ]);
        assert!(result.is_err());
    }
}
