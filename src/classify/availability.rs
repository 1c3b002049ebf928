//! Slot availability classification

use crate::classify::{ColorToken, Tier};
use crate::constants::thresholds::{AVAILABILITY_HIGH, AVAILABILITY_MEDIUM};
use serde::Serialize;

/// Classifier output for a paid listing
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct AvailabilityClass {
    pub tier: Tier,
    pub color: ColorToken,
    pub label: &'static str,
}

/// Classify free slots against capacity
///
/// ratio > 0.5 is High, 0.2 < ratio <= 0.5 is Medium, anything else Low.
/// A facility with no slots is Low. `available > total` is not corrected
/// and lands in High.
pub fn classify_availability(available: u32, total: u32) -> AvailabilityClass {
    let tier = if total == 0 {
        Tier::Low
    } else {
        let ratio = f64::from(available) / f64::from(total);
        if ratio > AVAILABILITY_HIGH {
            Tier::High
        } else if ratio > AVAILABILITY_MEDIUM {
            Tier::Medium
        } else {
            Tier::Low
        }
    };

    AvailabilityClass {
        tier,
        color: tier.color(),
        label: label(tier),
    }
}

fn label(tier: Tier) -> &'static str {
    match tier {
        Tier::High => "High Availability",
        Tier::Medium => "Medium Availability",
        Tier::Low => "Low Availability",
    }
}
