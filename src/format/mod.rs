//! Output formatters
//!
//! Provides trait-based output formatting for ranking reports.

pub mod json;
pub mod text;

use crate::error::Result;
use crate::view::RankReport;
use serde::{Deserialize, Serialize};

/// Information about an output format
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FormatInfo {
    pub name: String,
    pub description: String,
}

/// Trait for output formatters
pub trait OutputFormatter: Send + Sync {
    /// Get the format name
    fn name(&self) -> &str;

    /// Get the format description
    fn description(&self) -> &str;

    /// Format a ranking report
    fn format(&self, report: &RankReport) -> Result<String>;
}

/// Get a formatter by name
pub fn get_formatter(name: &str) -> Option<Box<dyn OutputFormatter>> {
    match name.to_lowercase().as_str() {
        "json" => Some(Box::new(json::JsonFormatter)),
        "text" => Some(Box::new(text::TextFormatter)),
        _ => None,
    }
}

/// List all available formatters
pub fn available_formats() -> Vec<FormatInfo> {
    [
        &json::JsonFormatter as &dyn OutputFormatter,
        &text::TextFormatter,
    ]
    .iter()
    .map(|f| FormatInfo {
        name: f.name().to_string(),
        description: f.description().to_string(),
    })
    .collect()
}

#[cfg(test)]
pub(crate) mod fixtures {
    use crate::candidate::fixtures::{hotspot, listing};
    use crate::candidate::CandidateKind;
    use crate::coord::Coordinates;
    use crate::rank::RankOptions;
    use crate::view::RankReport;

    pub fn paid_report() -> RankReport {
        RankReport::build(
            CandidateKind::Paid,
            &[
                listing("11", 18.5304, 73.8567, 6, 10),
                listing("12", 18.5254, 73.8567, 1, 10),
            ],
            Some(Coordinates::new(18.5204, 73.8567)),
            &RankOptions {
                limit: 10,
                ..Default::default()
            },
        )
    }

    pub fn free_report() -> RankReport {
        RankReport::build(
            CandidateKind::Free,
            &[hotspot("Deccan", 18.5158, 73.8410, 0.82)],
            None,
            &RankOptions {
                limit: 5,
                ..Default::default()
            },
        )
    }
}
