//! Display records for the presentation layer
//!
//! Projects ranked candidates into what a map or list renders: marker
//! colour, tier, label, badge text and a distance string. Original
//! candidate fields are carried untouched.

pub mod report;

use crate::candidate::{Candidate, CandidateKind};
use crate::classify::{classify_availability, classify_probability, ColorToken, Tier};
use crate::constants::policy::DEFAULT_HOTSPOT_RADIUS_METERS;
use crate::coord::Coordinates;
use crate::rank::RankedCandidate;
use serde::{Deserialize, Serialize};

pub use report::RankReport;

/// One renderable marker / list row
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DisplayRecord {
    pub candidate: Candidate,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub distance_km: Option<f64>,

    /// Two-decimal kilometers, e.g. "1.23 km"
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub distance_text: Option<String>,

    pub tier: Tier,
    pub color: ColorToken,
    pub label: String,
    pub badge: String,

    /// Circle radius for hotspots (defaulted when the prediction has none)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub radius_meters: Option<f64>,
}

impl DisplayRecord {
    pub fn coordinates(&self) -> Coordinates {
        self.candidate.coordinates()
    }

    pub fn kind(&self) -> CandidateKind {
        self.candidate.kind()
    }

    /// Classify and decorate a single ranked candidate
    pub fn from_ranked(ranked: &RankedCandidate) -> Self {
        let (tier, color, label, badge, radius_meters) = match &ranked.candidate {
            Candidate::FreeHotspot(h) => {
                let class = classify_probability(h.probability);
                (
                    class.tier,
                    class.tier.color(),
                    class.label.to_string(),
                    format!("{} ({:.0}%)", class.label, h.probability * 100.0),
                    Some(h.radius_meters.unwrap_or(DEFAULT_HOTSPOT_RADIUS_METERS)),
                )
            }
            Candidate::PaidListing(p) => {
                let class = classify_availability(p.available_slots, p.total_slots);
                (
                    class.tier,
                    class.color,
                    class.label.to_string(),
                    format!("{}/{} slots", p.available_slots, p.total_slots),
                    None,
                )
            }
        };

        Self {
            candidate: ranked.candidate.clone(),
            distance_km: ranked.distance_km,
            distance_text: ranked.distance_km.map(format_distance),
            tier,
            color,
            label,
            badge,
            radius_meters,
        }
    }
}

/// Format a distance in kilometers with two decimals
pub fn format_distance(km: f64) -> String {
    format!("{:.2} km", km)
}

/// Project ranked candidates into display records, preserving order
pub fn assemble(ranked: &[RankedCandidate]) -> Vec<DisplayRecord> {
    ranked.iter().map(DisplayRecord::from_ranked).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::candidate::fixtures::{hotspot, listing};
    use crate::candidate::FreeHotspot;
    use crate::rank::rank;

    const PUNE: Coordinates = Coordinates {
        lat: 18.5204,
        lng: 73.8567,
    };

    #[test]
    fn test_empty() {
        assert!(assemble(&[]).is_empty());
    }

    #[test]
    fn test_listing_record() {
        let ranked = RankedCandidate {
            candidate: listing("42", PUNE.lat, PUNE.lng, 3, 10),
            distance_km: Some(1.23456),
        };

        let record = DisplayRecord::from_ranked(&ranked);

        assert_eq!(record.tier, Tier::Medium);
        assert_eq!(record.color, ColorToken::Yellow);
        assert_eq!(record.label, "Medium Availability");
        assert_eq!(record.badge, "3/10 slots");
        assert_eq!(record.distance_text.as_deref(), Some("1.23 km"));
        assert_eq!(record.radius_meters, None);
        assert_eq!(record.candidate, ranked.candidate);
        assert_eq!(record.kind(), CandidateKind::Paid);
    }

    #[test]
    fn test_hotspot_record() {
        let ranked = RankedCandidate::unranked(hotspot("h", PUNE.lat, PUNE.lng, 0.85));

        let record = DisplayRecord::from_ranked(&ranked);

        assert_eq!(record.tier, Tier::High);
        assert_eq!(record.color, ColorToken::Green);
        assert_eq!(record.label, "High");
        assert_eq!(record.badge, "High (85%)");
        assert_eq!(record.distance_km, None);
        assert_eq!(record.distance_text, None);
        assert_eq!(record.radius_meters, Some(100.0));
    }

    #[test]
    fn test_hotspot_keeps_its_radius() {
        let candidate = Candidate::FreeHotspot(FreeHotspot {
            label: "wide".to_string(),
            coords: PUNE,
            probability: 0.3,
            radius_meters: Some(250.0),
        });

        let record = DisplayRecord::from_ranked(&RankedCandidate::unranked(candidate));
        assert_eq!(record.radius_meters, Some(250.0));
        assert_eq!(record.tier, Tier::Low);
        assert_eq!(record.color, ColorToken::Red);
    }

    #[test]
    fn test_zero_slot_listing_is_low() {
        let record =
            DisplayRecord::from_ranked(&RankedCandidate::unranked(listing("z", 0.0, 0.0, 0, 0)));
        assert_eq!(record.tier, Tier::Low);
        assert_eq!(record.badge, "0/0 slots");
    }

    #[test]
    fn test_format_distance() {
        assert_eq!(format_distance(0.0), "0.00 km");
        assert_eq!(format_distance(12.346), "12.35 km");
        assert_eq!(format_distance(7.0), "7.00 km");
    }

    #[test]
    fn test_assembly_is_idempotent() {
        let candidates = vec![
            listing("a", PUNE.lat + 0.02, PUNE.lng, 6, 10),
            hotspot("b", PUNE.lat + 0.01, PUNE.lng, 0.65),
            listing("c", PUNE.lat + 0.05, PUNE.lng, 1, 10),
        ];

        let first = assemble(&rank(&candidates, Some(PUNE), 2));
        let second = assemble(&rank(&candidates, Some(PUNE), 2));

        assert_eq!(first, second);
        assert_eq!(first.len(), 2);
        assert_eq!(first[0].candidate.id(), "b");
        assert_eq!(first[1].candidate.id(), "a");
    }

    #[test]
    fn test_serialized_shape() {
        let ranked = RankedCandidate {
            candidate: listing("9", PUNE.lat, PUNE.lng, 6, 10),
            distance_km: Some(0.5),
        };
        let json = serde_json::to_value(DisplayRecord::from_ranked(&ranked)).unwrap();

        assert_eq!(json["tier"], "high");
        assert_eq!(json["color"], "green");
        assert_eq!(json["distance_text"], "0.50 km");
        assert_eq!(json["candidate"]["kind"], "paid_listing");
        assert_eq!(json["candidate"]["available_slots"], 6);
    }
}
