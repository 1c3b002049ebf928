//! Candidate filtering ahead of ranking
//!
//! Price and amenity criteria only concern paid listings; the probability
//! floor only concerns hotspots. A criterion that does not apply to a
//! candidate's kind is ignored for that candidate.

use crate::candidate::Candidate;
use crate::coord::{is_within_radius_km, Coordinates};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Criteria a candidate must meet to be ranked
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CandidateFilter {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub price_min: Option<f64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub price_max: Option<f64>,

    /// Search radius around the reference point; skipped without one
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub radius_km: Option<f64>,

    /// Every listed amenity must be offered
    #[serde(default, skip_serializing_if = "BTreeSet::is_empty")]
    pub amenities: BTreeSet<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min_probability: Option<f64>,
}

impl CandidateFilter {
    pub fn is_empty(&self) -> bool {
        self == &Self::default()
    }

    /// Whether `candidate` meets every applicable criterion
    pub fn matches(&self, candidate: &Candidate, reference: Option<Coordinates>) -> bool {
        if let (Some(radius), Some(center)) = (self.radius_km, reference) {
            if !is_within_radius_km(center, candidate.coordinates(), radius) {
                return false;
            }
        }

        match candidate {
            Candidate::PaidListing(p) => {
                if self.price_min.is_some_and(|min| p.price_per_hour < min) {
                    return false;
                }
                if self.price_max.is_some_and(|max| p.price_per_hour > max) {
                    return false;
                }
                self.amenities.is_subset(&p.amenities)
            }
            Candidate::FreeHotspot(h) => self
                .min_probability
                .map_or(true, |floor| h.probability >= floor),
        }
    }

    /// Keep matching candidates in input order
    pub fn apply(&self, candidates: &[Candidate], reference: Option<Coordinates>) -> Vec<Candidate> {
        if self.is_empty() {
            return candidates.to_vec();
        }
        candidates
            .iter()
            .filter(|c| self.matches(c, reference))
            .cloned()
            .collect()
    }
}
