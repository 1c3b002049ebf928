//! Parking candidates
//!
//! A candidate is either a predicted free-parking hotspot or a paid
//! listing. Both share a coordinate; classifier selection dispatches on
//! the variant.

pub mod wire;

use crate::constants::policy::{FREE_HOTSPOT_LIMIT, PAID_LISTING_LIMIT};
use crate::coord::Coordinates;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// A predicted free-parking likelihood at a point
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FreeHotspot {
    pub label: String,
    pub coords: Coordinates,
    /// Likelihood in [0, 1] that a free spot is available
    pub probability: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub radius_meters: Option<f64>,
}

/// A paid parking facility
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PaidListing {
    pub id: String,
    #[serde(default)]
    pub name: String,
    pub coords: Coordinates,
    pub price_per_hour: f64,
    pub total_slots: u32,
    /// Expected to be `<= total_slots`; not enforced here
    pub available_slots: u32,
    #[serde(default)]
    pub rating: f64,
    #[serde(default)]
    pub amenities: BTreeSet<String>,
}

impl PaidListing {
    /// Share of slots currently free, `0.0` when the facility has no slots
    pub fn availability_ratio(&self) -> f64 {
        if self.total_slots == 0 {
            0.0
        } else {
            f64::from(self.available_slots) / f64::from(self.total_slots)
        }
    }

    /// Whether the listing violates `available_slots <= total_slots`
    pub fn is_overbooked(&self) -> bool {
        self.available_slots > self.total_slots
    }
}

/// A parking option subject to ranking and classification
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Candidate {
    FreeHotspot(FreeHotspot),
    PaidListing(PaidListing),
}

impl Candidate {
    pub fn coordinates(&self) -> Coordinates {
        match self {
            Self::FreeHotspot(h) => h.coords,
            Self::PaidListing(p) => p.coords,
        }
    }

    pub fn kind(&self) -> CandidateKind {
        match self {
            Self::FreeHotspot(_) => CandidateKind::Free,
            Self::PaidListing(_) => CandidateKind::Paid,
        }
    }

    /// Hotspot label or listing id
    pub fn id(&self) -> &str {
        match self {
            Self::FreeHotspot(h) => &h.label,
            Self::PaidListing(p) => &p.id,
        }
    }

    pub fn price_per_hour(&self) -> Option<f64> {
        match self {
            Self::FreeHotspot(_) => None,
            Self::PaidListing(p) => Some(p.price_per_hour),
        }
    }

    pub fn rating(&self) -> Option<f64> {
        match self {
            Self::FreeHotspot(_) => None,
            Self::PaidListing(p) => Some(p.rating),
        }
    }

    /// Availability signal used for sorting: slot ratio for listings,
    /// probability for hotspots
    pub fn availability_score(&self) -> f64 {
        match self {
            Self::FreeHotspot(h) => h.probability,
            Self::PaidListing(p) => p.availability_ratio(),
        }
    }
}

impl From<FreeHotspot> for Candidate {
    fn from(h: FreeHotspot) -> Self {
        Self::FreeHotspot(h)
    }
}

impl From<PaidListing> for Candidate {
    fn from(p: PaidListing) -> Self {
        Self::PaidListing(p)
    }
}

/// Candidate kind (view mode in the map)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CandidateKind {
    /// Free-parking hotspot predictions
    Free,
    /// Paid parking listings
    Paid,
}

impl CandidateKind {
    /// Product result size around a reference point
    pub fn default_limit(&self) -> usize {
        match self {
            Self::Free => FREE_HOTSPOT_LIMIT,
            Self::Paid => PAID_LISTING_LIMIT,
        }
    }
}

impl Default for CandidateKind {
    fn default() -> Self {
        Self::Paid
    }
}

impl std::fmt::Display for CandidateKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Free => write!(f, "free"),
            Self::Paid => write!(f, "paid"),
        }
    }
}

impl std::str::FromStr for CandidateKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "free" | "hotspot" | "hotspots" | "free_hotspot" => Ok(Self::Free),
            "paid" | "listing" | "listings" | "paid_listing" => Ok(Self::Paid),
            _ => Err(format!("Unknown candidate kind: {}", s)),
        }
    }
}


#[cfg(test)]
mod tests {
    use super::fixtures::*;
    use super::*;
    use std::str::FromStr;

    #[test]
    fn test_common_accessors() {
        let h = hotspot("hotspot-0", 18.52, 73.85, 0.9);
        assert_eq!(h.kind(), CandidateKind::Free);
        assert_eq!(h.id(), "hotspot-0");
        assert_eq!(h.coordinates(), Coordinates::new(18.52, 73.85));
        assert_eq!(h.price_per_hour(), None);
        assert_eq!(h.availability_score(), 0.9);

        let p = listing("7", 18.53, 73.86, 3, 10);
        assert_eq!(p.kind(), CandidateKind::Paid);
        assert_eq!(p.id(), "7");
        assert_eq!(p.price_per_hour(), Some(40.0));
        assert_eq!(p.rating(), Some(4.0));
        assert!((p.availability_score() - 0.3).abs() < 1e-12);
    }

    #[test]
    fn test_availability_ratio_zero_total() {
        let Candidate::PaidListing(p) = listing("x", 0.0, 0.0, 0, 0) else {
            unreachable!()
        };
        assert_eq!(p.availability_ratio(), 0.0);
        assert!(!p.is_overbooked());
    }

    #[test]
    fn test_overbooked() {
        let Candidate::PaidListing(p) = listing("x", 0.0, 0.0, 12, 10) else {
            unreachable!()
        };
        assert!(p.is_overbooked());
        assert!(p.availability_ratio() > 1.0);
    }

    #[test]
    fn test_kind_limits() {
        assert_eq!(CandidateKind::Free.default_limit(), 5);
        assert_eq!(CandidateKind::Paid.default_limit(), 10);
    }

    #[test]
    fn test_kind_from_str() {
        assert_eq!(CandidateKind::from_str("free").unwrap(), CandidateKind::Free);
        assert_eq!(CandidateKind::from_str("Listings").unwrap(), CandidateKind::Paid);
        assert!(CandidateKind::from_str("seller").is_err());
    }

    #[test]
    fn test_tagged_serialization() {
        let json = serde_json::to_value(hotspot("h", 1.0, 2.0, 0.7)).unwrap();
        assert_eq!(json["kind"], "free_hotspot");
        assert_eq!(json["coords"]["lat"], 1.0);
        assert!(json.get("radius_meters").is_none());

        let json = serde_json::to_value(listing("p", 1.0, 2.0, 1, 2)).unwrap();
        assert_eq!(json["kind"], "paid_listing");
        assert_eq!(json["total_slots"], 2);
    }
}
