//! Qualitative tiers for availability and probability
//!
//! Listings are bucketed by free-slot ratio, hotspots by predicted
//! probability. Both produce the same three-tier scale.

pub mod availability;
pub mod probability;

use serde::{Deserialize, Serialize};

pub use availability::{classify_availability, AvailabilityClass};
pub use probability::{classify_probability, ProbabilityClass};

/// Coarse qualitative bucket
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Tier {
    Low,
    Medium,
    High,
}

impl Tier {
    /// Marker colour for this tier
    pub fn color(&self) -> ColorToken {
        match self {
            Self::High => ColorToken::Green,
            Self::Medium => ColorToken::Yellow,
            Self::Low => ColorToken::Red,
        }
    }
}

impl std::fmt::Display for Tier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::High => write!(f, "High"),
            Self::Medium => write!(f, "Medium"),
            Self::Low => write!(f, "Low"),
        }
    }
}

/// Symbolic colour identifier; concrete hex values belong to the renderer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ColorToken {
    Green,
    Yellow,
    Red,
}

impl ColorToken {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Green => "green",
            Self::Yellow => "yellow",
            Self::Red => "red",
        }
    }
}

impl std::fmt::Display for ColorToken {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
