//! Free-parking probability classification

use crate::classify::Tier;
use crate::constants::thresholds::{PROBABILITY_HIGH, PROBABILITY_MEDIUM};
use serde::Serialize;

/// Classifier output for a free hotspot
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ProbabilityClass {
    pub tier: Tier,
    pub label: &'static str,
}

/// Classify a predicted probability
///
/// p >= 0.8 is High, 0.6 <= p < 0.8 is Medium, anything else (NaN
/// included) is Low. Values outside [0, 1] are not clamped.
pub fn classify_probability(probability: f64) -> ProbabilityClass {
    let tier = if probability >= PROBABILITY_HIGH {
        Tier::High
    } else if probability >= PROBABILITY_MEDIUM {
        Tier::Medium
    } else {
        Tier::Low
    };

    ProbabilityClass {
        tier,
        label: match tier {
            Tier::High => "High",
            Tier::Medium => "Medium",
            Tier::Low => "Low",
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_concrete_tiers() {
        assert_eq!(classify_probability(0.85).tier, Tier::High);
        assert_eq!(classify_probability(0.65).tier, Tier::Medium);
        assert_eq!(classify_probability(0.5).tier, Tier::Low);
    }

    #[test]
    fn test_inclusive_boundaries() {
        assert_eq!(classify_probability(0.8).tier, Tier::High);
        assert_eq!(classify_probability(0.6).tier, Tier::Medium);
        assert_eq!(classify_probability(0.7999999).tier, Tier::Medium);
        assert_eq!(classify_probability(0.5999999).tier, Tier::Low);
    }

    #[test]
    fn test_out_of_range() {
        assert_eq!(classify_probability(1.4).tier, Tier::High);
        assert_eq!(classify_probability(-0.2).tier, Tier::Low);
        assert_eq!(classify_probability(f64::NAN).tier, Tier::Low);
    }

    #[test]
    fn test_labels() {
        assert_eq!(classify_probability(0.9).label, "High");
        assert_eq!(classify_probability(0.7).label, "Medium");
        assert_eq!(classify_probability(0.1).label, "Low");
    }
}
