//! Classify command handler
//!
//! Runs the tier classifiers on raw values from the command line.

use crate::classify::{classify_availability, classify_probability};
use crate::error::Result;
use clap::{Args, Subcommand};

/// Classify command arguments
#[derive(Args)]
pub struct ClassifyArgs {
    #[command(subcommand)]
    pub target: ClassifyTarget,

    /// Print JSON instead of text
    #[arg(long, global = true)]
    pub json: bool,
}

#[derive(Subcommand)]
pub enum ClassifyTarget {
    /// Slot availability of a paid listing
    Availability {
        /// Free slots
        available: u32,
        /// Total slots
        total: u32,
    },

    /// Predicted probability of a free hotspot
    Probability {
        /// Probability in [0, 1]
        p: f64,
    },
}

/// Run the classify command
pub fn run(args: ClassifyArgs) -> Result<()> {
    println!("{}", render(&args)?);
    Ok(())
}

fn render(args: &ClassifyArgs) -> Result<String> {
    let output = match args.target {
        ClassifyTarget::Availability { available, total } => {
            let class = classify_availability(available, total);
            if args.json {
                serde_json::to_string_pretty(&class)?
            } else {
                format!("{} [{}]", class.label, class.color)
            }
        }
        ClassifyTarget::Probability { p } => {
            let class = classify_probability(p);
            if args.json {
                serde_json::to_string_pretty(&class)?
            } else {
                format!("{} [{}]", class.label, class.tier.color())
            }
        }
    };

    Ok(output)
}
