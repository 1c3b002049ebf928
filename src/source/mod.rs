//! External candidate sources
//!
//! The listings backend and the free-parking prediction service are
//! external collaborators. This module defines their request/response
//! contract, an HTTP client for both, and a file-backed stand-in.

pub mod file;
pub mod http;

use crate::candidate::wire::{
    listings_into_candidates, predictions_into_candidates, ListingRecord, PredictionRecord,
    SlotPolicy,
};
use crate::candidate::Candidate;
use crate::coord::Coordinates;
use crate::error::Result;
use crate::query::QueryTracker;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Listings query around a point
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ListingQuery {
    pub center: Coordinates,
    pub radius_meters: f64,
    pub price_min: f64,
    pub price_max: f64,
}

/// Free-parking prediction query around a point
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PredictionQuery {
    pub center: Coordinates,
    pub radius_meters: f64,
}

/// Trait for paid-listing providers
pub trait ListingSource: Send + Sync {
    /// Fetch listing records for a query; providers may ignore the radius
    fn fetch_listings(
        &self,
        query: &ListingQuery,
    ) -> impl std::future::Future<Output = Result<Vec<ListingRecord>>> + Send;
}

/// Trait for free-parking prediction providers
pub trait PredictionSource: Send + Sync {
    fn fetch_predictions(
        &self,
        query: &PredictionQuery,
    ) -> impl std::future::Future<Output = Result<Vec<PredictionRecord>>> + Send;
}

/// Fetch and map listings, dropping the result if a newer query started
///
/// Returns `Ok(None)` when the response is stale.
pub async fn fetch_listing_candidates<S: ListingSource>(
    source: &S,
    query: &ListingQuery,
    policy: SlotPolicy,
    tracker: &QueryTracker,
) -> Result<Option<Vec<Candidate>>> {
    let ticket = tracker.begin();
    let records = source.fetch_listings(query).await?;
    debug!(count = records.len(), generation = ticket.generation(), "listings received");

    // Stale records are dropped before mapping so they cannot fail the call
    let Some(records) = tracker.resolve(&ticket, records) else {
        return Ok(None);
    };
    listings_into_candidates(records, policy).map(Some)
}

/// Fetch and map predictions, dropping the result if a newer query started
pub async fn fetch_prediction_candidates<S: PredictionSource>(
    source: &S,
    query: &PredictionQuery,
    tracker: &QueryTracker,
) -> Result<Option<Vec<Candidate>>> {
    let ticket = tracker.begin();
    let records = source.fetch_predictions(query).await?;
    debug!(count = records.len(), generation = ticket.generation(), "predictions received");

    Ok(tracker.resolve(&ticket, predictions_into_candidates(records)))
}
