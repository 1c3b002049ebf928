//! Collaborator record shapes and their mapping into candidates
//!
//! The listings backend sends `location` as `[lng, lat]` and may encode
//! ids and numbers as strings. The prediction service names its fields
//! `systemCode`, `lon` and `availabilityProbability`, and wraps them in a
//! `parking_spots` envelope.

use crate::candidate::{Candidate, FreeHotspot, PaidListing};
use crate::coord::Coordinates;
use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// What to do with slot counts that break `0 <= available <= total`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SlotPolicy {
    /// Keep `available > total` as reported; negatives become 0
    PassThrough,
    /// Clamp `available` into `[0, total]`
    Clamp,
    /// Fail the mapping with `Error::InvalidCandidate`
    Reject,
}

impl Default for SlotPolicy {
    fn default() -> Self {
        Self::PassThrough
    }
}

impl std::fmt::Display for SlotPolicy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::PassThrough => write!(f, "pass_through"),
            Self::Clamp => write!(f, "clamp"),
            Self::Reject => write!(f, "reject"),
        }
    }
}

impl std::str::FromStr for SlotPolicy {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "pass_through" | "pass-through" | "passthrough" => Ok(Self::PassThrough),
            "clamp" => Ok(Self::Clamp),
            "reject" => Ok(Self::Reject),
            _ => Err(format!("Unknown slot policy: {}", s)),
        }
    }
}

impl SlotPolicy {
    /// Resolve raw `(total, available)` counts into the stored pair
    pub fn apply(self, id: &str, total: i64, available: i64) -> Result<(u32, u32)> {
        let violates = total < 0 || available < 0 || available > total;

        if violates && self == Self::Reject {
            return Err(Error::InvalidCandidate(format!(
                "listing {}: available {} outside [0, {}]",
                id, available, total
            )));
        }

        let total = to_count(total);
        let available = match self {
            Self::Clamp => to_count(available).min(total),
            _ => to_count(available),
        };

        Ok((total, available))
    }
}

fn to_count(n: i64) -> u32 {
    n.clamp(0, i64::from(u32::MAX)) as u32
}

/// A JSON value that may arrive as a number or a numeric string
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Lenient {
    Number(f64),
    Text(String),
}

impl Lenient {
    pub fn to_f64(&self, field: &str) -> Result<f64> {
        let value = match self {
            Self::Number(n) => *n,
            Self::Text(s) => s.trim().parse().map_err(|_| {
                Error::InvalidCandidate(format!("{} is not a number: {:?}", field, s))
            })?,
        };
        if value.is_finite() {
            Ok(value)
        } else {
            Err(Error::InvalidCandidate(format!("{} is not finite", field)))
        }
    }

    pub fn to_i64(&self, field: &str) -> Result<i64> {
        let value = self.to_f64(field)?;
        if value.fract() != 0.0 {
            return Err(Error::InvalidCandidate(format!(
                "{} is not an integer: {}",
                field, value
            )));
        }
        Ok(value as i64)
    }
}

impl From<f64> for Lenient {
    fn from(n: f64) -> Self {
        Self::Number(n)
    }
}

/// A record id that may be numeric or textual
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RecordId {
    Int(i64),
    Text(String),
}

impl std::fmt::Display for RecordId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Int(n) => write!(f, "{}", n),
            Self::Text(s) => write!(f, "{}", s),
        }
    }
}

/// Paid listing as returned by the listings backend
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ListingRecord {
    pub id: RecordId,
    #[serde(default)]
    pub name: String,
    /// `[lng, lat]`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<[f64; 2]>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lat: Option<f64>,
    #[serde(default, alias = "lon", skip_serializing_if = "Option::is_none")]
    pub lng: Option<f64>,
    #[serde(alias = "price")]
    pub price_per_hour: Lenient,
    #[serde(alias = "total_slots")]
    pub slots: Lenient,
    #[serde(alias = "available_slots")]
    pub available: Lenient,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rating: Option<Lenient>,
    #[serde(default)]
    pub amenities: Vec<String>,
}

impl ListingRecord {
    fn coordinates(&self) -> Result<Coordinates> {
        match (self.location, self.lat, self.lng) {
            (Some(pair), _, _) => Ok(Coordinates::from_lng_lat(pair)),
            (None, Some(lat), Some(lng)) => Ok(Coordinates::new(lat, lng)),
            _ => Err(Error::InvalidCandidate(format!(
                "listing {} has no location",
                self.id
            ))),
        }
    }

    /// Map into a paid listing, resolving slot counts through `policy`
    pub fn into_listing(self, policy: SlotPolicy) -> Result<PaidListing> {
        let id = self.id.to_string();
        let coords = self.coordinates()?;

        let price_per_hour = self.price_per_hour.to_f64("price_per_hour")?;
        if price_per_hour < 0.0 {
            return Err(Error::InvalidCandidate(format!(
                "listing {}: negative price {}",
                id, price_per_hour
            )));
        }

        let total = self.slots.to_i64("slots")?;
        let available = self.available.to_i64("available")?;
        let (total_slots, available_slots) = policy.apply(&id, total, available)?;

        let rating = match &self.rating {
            Some(r) => r.to_f64("rating")?,
            None => 0.0,
        };

        Ok(PaidListing {
            id,
            name: self.name,
            coords,
            price_per_hour,
            total_slots,
            available_slots,
            rating,
            amenities: self.amenities.into_iter().collect::<BTreeSet<_>>(),
        })
    }
}

/// Free-parking prediction as returned by the prediction service
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PredictionRecord {
    #[serde(default, alias = "systemCode", skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    pub lat: f64,
    #[serde(alias = "lon")]
    pub lng: f64,
    #[serde(alias = "availabilityProbability")]
    pub probability: f64,
    #[serde(default, alias = "radius_meters", skip_serializing_if = "Option::is_none")]
    pub radius: Option<f64>,
}

impl PredictionRecord {
    /// Map into a hotspot; unlabeled records are named by position
    pub fn into_hotspot(self, index: usize) -> FreeHotspot {
        FreeHotspot {
            label: self.label.unwrap_or_else(|| format!("hotspot-{}", index)),
            coords: Coordinates::new(self.lat, self.lng),
            probability: self.probability,
            radius_meters: self.radius,
        }
    }
}

/// Prediction response body: either the service envelope or a bare array
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum PredictionPayload {
    Envelope { parking_spots: Vec<PredictionRecord> },
    Bare(Vec<PredictionRecord>),
}

impl PredictionPayload {
    pub fn into_records(self) -> Vec<PredictionRecord> {
        match self {
            Self::Envelope { parking_spots } => parking_spots,
            Self::Bare(records) => records,
        }
    }
}

/// Map a batch of listing records, failing on the first invalid one
pub fn listings_into_candidates(
    records: Vec<ListingRecord>,
    policy: SlotPolicy,
) -> Result<Vec<Candidate>> {
    records
        .into_iter()
        .map(|r| r.into_listing(policy).map(Candidate::PaidListing))
        .collect()
}

/// Map a batch of prediction records
pub fn predictions_into_candidates(records: Vec<PredictionRecord>) -> Vec<Candidate> {
    records
        .into_iter()
        .enumerate()
        .map(|(i, r)| Candidate::FreeHotspot(r.into_hotspot(i)))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn backend_listing(available: i64, slots: i64) -> ListingRecord {
        serde_json::from_value(serde_json::json!({
            "id": 12,
            "name": "FC Road Parking",
            "location": [73.8412, 18.5236],
            "price_per_hour": "30.00",
            "slots": slots,
            "available": available,
            "amenities": ["CCTV", "Covered", "CCTV"],
            "rating": 4.5
        }))
        .unwrap()
    }

    #[test]
    fn test_listing_from_backend_shape() {
        let listing = backend_listing(4, 20).into_listing(SlotPolicy::PassThrough).unwrap();

        assert_eq!(listing.id, "12");
        assert_eq!(listing.coords, Coordinates::new(18.5236, 73.8412));
        assert_eq!(listing.price_per_hour, 30.0);
        assert_eq!(listing.total_slots, 20);
        assert_eq!(listing.available_slots, 4);
        assert_eq!(listing.rating, 4.5);
        assert_eq!(listing.amenities.len(), 2);
    }

    #[test]
    fn test_listing_from_frontend_shape() {
        let record: ListingRecord = serde_json::from_value(serde_json::json!({
            "id": "p-1",
            "name": "Station Lot",
            "lat": 18.5289,
            "lng": 73.8744,
            "price": 50,
            "slots": 40,
            "available": 10
        }))
        .unwrap();

        let listing = record.into_listing(SlotPolicy::PassThrough).unwrap();
        assert_eq!(listing.coords, Coordinates::new(18.5289, 73.8744));
        assert_eq!(listing.rating, 0.0);
        assert!(listing.amenities.is_empty());
    }

    #[test]
    fn test_listing_without_location() {
        let record: ListingRecord = serde_json::from_value(serde_json::json!({
            "id": 1, "price_per_hour": 10, "slots": 1, "available": 1
        }))
        .unwrap();
        assert!(matches!(
            record.into_listing(SlotPolicy::PassThrough),
            Err(Error::InvalidCandidate(_))
        ));
    }

    #[test]
    fn test_listing_bad_number() {
        let mut record = backend_listing(1, 2);
        record.price_per_hour = Lenient::Text("free".to_string());
        assert!(record.into_listing(SlotPolicy::PassThrough).is_err());

        let mut record = backend_listing(1, 2);
        record.slots = Lenient::Number(2.5);
        assert!(record.into_listing(SlotPolicy::PassThrough).is_err());
    }

    #[test]
    fn test_negative_price_rejected() {
        let mut record = backend_listing(1, 2);
        record.price_per_hour = Lenient::Number(-1.0);
        assert!(record.into_listing(SlotPolicy::PassThrough).is_err());
    }

    #[test]
    fn test_slot_policy_pass_through() {
        assert_eq!(SlotPolicy::PassThrough.apply("a", 10, 12).unwrap(), (10, 12));
        assert_eq!(SlotPolicy::PassThrough.apply("a", 10, -3).unwrap(), (10, 0));
        assert_eq!(SlotPolicy::PassThrough.apply("a", 10, 4).unwrap(), (10, 4));
    }

    #[test]
    fn test_slot_policy_clamp() {
        assert_eq!(SlotPolicy::Clamp.apply("a", 10, 12).unwrap(), (10, 10));
        assert_eq!(SlotPolicy::Clamp.apply("a", -1, 5).unwrap(), (0, 0));
        assert_eq!(SlotPolicy::Clamp.apply("a", 10, 4).unwrap(), (10, 4));
    }

    #[test]
    fn test_slot_policy_reject() {
        assert!(SlotPolicy::Reject.apply("a", 10, 12).is_err());
        assert!(SlotPolicy::Reject.apply("a", 10, -1).is_err());
        assert_eq!(SlotPolicy::Reject.apply("a", 0, 0).unwrap(), (0, 0));
    }

    #[test]
    fn test_slot_policy_from_str() {
        assert_eq!(SlotPolicy::from_str("clamp").unwrap(), SlotPolicy::Clamp);
        assert_eq!(SlotPolicy::from_str("pass-through").unwrap(), SlotPolicy::PassThrough);
        assert!(SlotPolicy::from_str("ignore").is_err());
        assert_eq!(SlotPolicy::Reject.to_string(), "reject");
    }

    #[test]
    fn test_listings_batch_fails_on_first_invalid() {
        let records = vec![backend_listing(1, 2), backend_listing(5, 2)];
        assert!(listings_into_candidates(records.clone(), SlotPolicy::Reject).is_err());
        assert_eq!(
            listings_into_candidates(records, SlotPolicy::Clamp).unwrap().len(),
            2
        );
    }

    #[test]
    fn test_prediction_envelope() {
        let payload: PredictionPayload = serde_json::from_value(serde_json::json!({
            "parking_spots": [
                {"systemCode": "BHMBCCMKT01", "lat": 18.51, "lon": 73.85,
                 "availabilityProbability": 0.82, "radius": 300},
                {"lat": 18.52, "lon": 73.86, "availabilityProbability": 0.4}
            ],
            "count": 2,
            "query": {"lat": 18.5, "lon": 73.8, "radius_meters": 300}
        }))
        .unwrap();

        let candidates = predictions_into_candidates(payload.into_records());
        assert_eq!(candidates.len(), 2);
        assert_eq!(candidates[0].id(), "BHMBCCMKT01");
        assert_eq!(candidates[1].id(), "hotspot-1");

        let Candidate::FreeHotspot(h) = &candidates[0] else {
            panic!("expected hotspot");
        };
        assert_eq!(h.probability, 0.82);
        assert_eq!(h.radius_meters, Some(300.0));
    }

    #[test]
    fn test_prediction_bare_array() {
        let payload: PredictionPayload = serde_json::from_value(serde_json::json!([
            {"label": "Deccan", "lat": 18.51, "lng": 73.84, "probability": 0.65}
        ]))
        .unwrap();

        let records = payload.into_records();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].label.as_deref(), Some("Deccan"));
    }
}
