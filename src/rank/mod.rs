//! Proximity ranking
//!
//! Attaches distance from a reference point, orders candidates nearest
//! first and keeps the first `limit`. Without a reference point the input
//! passes through untouched.
//!
//! Everything here is pure: inputs are borrowed, nothing is logged, and
//! repeated calls with the same arguments return identical output.

pub mod filter;
pub mod sort;

use crate::candidate::Candidate;
use crate::coord::{distance_km, Coordinates};
use serde::{Deserialize, Serialize};

pub use filter::CandidateFilter;
pub use sort::{sort_ranked, SortDirection, SortKey};

/// A candidate with its distance from the reference point
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RankedCandidate {
    pub candidate: Candidate,

    /// Present only when a reference point was supplied
    #[serde(skip_serializing_if = "Option::is_none")]
    pub distance_km: Option<f64>,
}

impl RankedCandidate {
    /// Wrap a candidate without a distance
    pub fn unranked(candidate: Candidate) -> Self {
        Self {
            candidate,
            distance_km: None,
        }
    }
}

/// Rank candidates by distance from `reference`
///
/// # Arguments
/// * `candidates` - Candidates in caller order
/// * `reference` - Point of interest, or `None` for pass-through
/// * `limit` - Maximum results when a reference is present
///
/// # Returns
/// With a reference: at most `limit` candidates, nearest first, ties in
/// input order. Without one: every candidate in input order, no
/// distances, `limit` ignored.
pub fn rank(
    candidates: &[Candidate],
    reference: Option<Coordinates>,
    limit: usize,
) -> Vec<RankedCandidate> {
    let Some(reference) = reference else {
        return candidates.iter().cloned().map(RankedCandidate::unranked).collect();
    };

    let mut ranked: Vec<RankedCandidate> = candidates
        .iter()
        .map(|c| RankedCandidate {
            distance_km: Some(distance_km(reference, c.coordinates())),
            candidate: c.clone(),
        })
        .collect();

    // sort_by is stable, so equal distances keep input order
    ranked.sort_by(|a, b| {
        let da = a.distance_km.unwrap_or(f64::INFINITY);
        let db = b.distance_km.unwrap_or(f64::INFINITY);
        da.total_cmp(&db)
    });
    ranked.truncate(limit);

    ranked
}

/// Filter, rank and optionally re-sort in one pass
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RankOptions {
    pub limit: usize,
    #[serde(default)]
    pub filter: CandidateFilter,
    #[serde(default)]
    pub sort: Option<(SortKey, SortDirection)>,
}

/// Apply `options.filter`, then [`rank`], then the optional sort
///
/// The sort only reorders the kept set; it never changes which
/// candidates survive truncation.
pub fn rank_with(
    candidates: &[Candidate],
    reference: Option<Coordinates>,
    options: &RankOptions,
) -> Vec<RankedCandidate> {
    let kept = options.filter.apply(candidates, reference);
    let mut ranked = rank(&kept, reference, options.limit);

    if let Some((key, direction)) = options.sort {
        sort_ranked(&mut ranked, key, direction);
    }

    ranked
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::candidate::fixtures::{hotspot, listing};

    const PUNE: Coordinates = Coordinates {
        lat: 18.5204,
        lng: 73.8567,
    };

    /// Degrees of latitude per kilometer on a 6371 km sphere
    const DEG_PER_KM: f64 = 1.0 / 111.195;

    fn north_of_pune(id: &str, km: f64) -> Candidate {
        listing(id, PUNE.lat + km * DEG_PER_KM, PUNE.lng, 5, 10)
    }

    fn ids(ranked: &[RankedCandidate]) -> Vec<&str> {
        ranked.iter().map(|r| r.candidate.id()).collect()
    }

    #[test]
    fn test_two_nearest_in_order() {
        let candidates = vec![
            north_of_pune("ten", 10.0),
            north_of_pune("one", 1.0),
            north_of_pune("five", 5.0),
        ];

        let ranked = rank(&candidates, Some(PUNE), 2);

        assert_eq!(ids(&ranked), vec!["one", "five"]);
        let d0 = ranked[0].distance_km.unwrap();
        let d1 = ranked[1].distance_km.unwrap();
        assert!((d0 - 1.0).abs() < 0.01, "expected ~1 km, got {}", d0);
        assert!((d1 - 5.0).abs() < 0.01, "expected ~5 km, got {}", d1);
    }

    #[test]
    fn test_pass_through_without_reference() {
        let candidates = vec![
            north_of_pune("ten", 10.0),
            north_of_pune("one", 1.0),
            north_of_pune("five", 5.0),
        ];

        let ranked = rank(&candidates, None, 2);

        assert_eq!(ranked.len(), 3);
        assert_eq!(ids(&ranked), vec!["ten", "one", "five"]);
        for (r, c) in ranked.iter().zip(&candidates) {
            assert_eq!(&r.candidate, c);
            assert!(r.distance_km.is_none());
        }
    }

    #[test]
    fn test_never_exceeds_limit() {
        let candidates: Vec<Candidate> = (0..20)
            .map(|i| north_of_pune(&i.to_string(), i as f64 * 0.3))
            .collect();

        for limit in [0, 1, 5, 10, 19, 20, 50] {
            let ranked = rank(&candidates, Some(PUNE), limit);
            assert_eq!(ranked.len(), limit.min(candidates.len()));
        }
    }

    #[test]
    fn test_empty_input() {
        assert!(rank(&[], Some(PUNE), 5).is_empty());
        assert!(rank(&[], None, 5).is_empty());
    }

    #[test]
    fn test_deterministic() {
        let candidates = vec![
            north_of_pune("a", 3.0),
            hotspot("b", PUNE.lat - 0.01, PUNE.lng, 0.9),
            north_of_pune("c", 0.5),
            hotspot("d", PUNE.lat, PUNE.lng + 0.02, 0.4),
        ];

        let first = rank(&candidates, Some(PUNE), 3);
        let second = rank(&candidates, Some(PUNE), 3);
        assert_eq!(first, second);
    }

    #[test]
    fn test_ties_keep_input_order() {
        let candidates = vec![
            north_of_pune("far", 4.0),
            north_of_pune("tie_b", 2.0),
            hotspot("here", PUNE.lat, PUNE.lng, 0.7),
            north_of_pune("tie_a", 2.0),
        ];

        let ranked = rank(&candidates, Some(PUNE), 10);
        assert_eq!(ids(&ranked), vec!["here", "tie_b", "tie_a", "far"]);
    }

    #[test]
    fn test_truncation_keeps_prefix() {
        let candidates: Vec<Candidate> = [4.0, 2.0, 8.0, 1.0, 6.0]
            .iter()
            .enumerate()
            .map(|(i, km)| north_of_pune(&i.to_string(), *km))
            .collect();

        let all = rank(&candidates, Some(PUNE), 5);
        let top = rank(&candidates, Some(PUNE), 3);
        assert_eq!(&all[..3], &top[..]);
    }

    #[test]
    fn test_input_untouched() {
        let candidates = vec![north_of_pune("x", 2.0), north_of_pune("y", 1.0)];
        let before = candidates.clone();
        let _ = rank(&candidates, Some(PUNE), 1);
        assert_eq!(candidates, before);
    }

    #[test]
    fn test_rank_with_filter_then_sort() {
        let mut cheap_far = north_of_pune("cheap_far", 3.0);
        if let Candidate::PaidListing(p) = &mut cheap_far {
            p.price_per_hour = 10.0;
        }
        let mut pricey_near = north_of_pune("pricey_near", 1.0);
        if let Candidate::PaidListing(p) = &mut pricey_near {
            p.price_per_hour = 90.0;
        }
        let mut mid = north_of_pune("mid", 2.0);
        if let Candidate::PaidListing(p) = &mut mid {
            p.price_per_hour = 50.0;
        }

        let options = RankOptions {
            limit: 10,
            filter: CandidateFilter {
                price_max: Some(60.0),
                ..Default::default()
            },
            sort: Some((SortKey::Price, SortDirection::Asc)),
        };

        let ranked = rank_with(&[cheap_far, pricey_near, mid], Some(PUNE), &options);
        assert_eq!(ids(&ranked), vec!["cheap_far", "mid"]);
    }
}
