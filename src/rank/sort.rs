//! Re-sorting ranked results by listing attributes
//!
//! Candidates missing the key (no distance, hotspot price or rating)
//! always sort last, whichever direction is requested.

use crate::rank::RankedCandidate;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

/// Attribute to sort by
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortKey {
    Price,
    Distance,
    Availability,
    Rating,
}

impl SortKey {
    fn value(&self, r: &RankedCandidate) -> Option<f64> {
        match self {
            Self::Price => r.candidate.price_per_hour(),
            Self::Distance => r.distance_km,
            Self::Availability => Some(r.candidate.availability_score()),
            Self::Rating => r.candidate.rating(),
        }
    }
}

impl std::str::FromStr for SortKey {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "price" => Ok(Self::Price),
            "distance" => Ok(Self::Distance),
            "availability" => Ok(Self::Availability),
            "rating" => Ok(Self::Rating),
            _ => Err(format!("Unknown sort key: {}", s)),
        }
    }
}

impl std::fmt::Display for SortKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Price => write!(f, "price"),
            Self::Distance => write!(f, "distance"),
            Self::Availability => write!(f, "availability"),
            Self::Rating => write!(f, "rating"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortDirection {
    Asc,
    Desc,
}

impl Default for SortDirection {
    fn default() -> Self {
        Self::Asc
    }
}

impl std::str::FromStr for SortDirection {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "asc" | "ascending" => Ok(Self::Asc),
            "desc" | "descending" => Ok(Self::Desc),
            _ => Err(format!("Unknown sort direction: {}", s)),
        }
    }
}

/// Stable in-place sort of ranked candidates by `key`
pub fn sort_ranked(ranked: &mut [RankedCandidate], key: SortKey, direction: SortDirection) {
    ranked.sort_by(|a, b| match (key.value(a), key.value(b)) {
        (Some(x), Some(y)) => match direction {
            SortDirection::Asc => x.total_cmp(&y),
            SortDirection::Desc => y.total_cmp(&x),
        },
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    });
}
