//! HTTP API routes
//!
//! Defines all REST API endpoints for the server.

use crate::candidate::wire::{
    listings_into_candidates, predictions_into_candidates, ListingRecord, PredictionPayload,
    SlotPolicy,
};
use crate::candidate::{Candidate, CandidateKind};
use crate::classify::{
    classify_availability, classify_probability, AvailabilityClass, ProbabilityClass,
};
use crate::coord::Coordinates;
use crate::error::{Error, Result};
use crate::rank::{CandidateFilter, RankOptions, SortDirection, SortKey};
use crate::server::state::AppState;
use crate::view::{DisplayRecord, RankReport};

use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::IntoResponse,
    routing::{get, post},
    Json, Router,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tower_http::trace::TraceLayer;
use tracing::debug;

/// Create the API router
pub fn create_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/api/rank", post(rank_handler))
        .route("/api/classify/availability", get(availability_handler))
        .route("/api/classify/probability", get(probability_handler))
        .route("/api/status", get(status_handler))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Requested re-sort of the kept set
#[derive(Debug, Clone, Copy, Deserialize)]
pub struct SortSpec {
    pub key: SortKey,
    #[serde(default)]
    pub direction: SortDirection,
}

/// Rank request body
///
/// Exactly one of `candidates`, `listings` or `predictions` carries the
/// input. `listings` and `predictions` take the collaborator record shapes.
#[derive(Debug, Deserialize)]
pub struct RankRequest {
    /// Inferred from the payload field when omitted
    pub kind: Option<CandidateKind>,
    pub candidates: Option<Vec<Candidate>>,
    pub listings: Option<Vec<ListingRecord>>,
    pub predictions: Option<PredictionPayload>,
    pub reference: Option<Coordinates>,
    /// Defaults to the configured limit for the kind
    pub limit: Option<usize>,
    pub sort: Option<SortSpec>,
    #[serde(default)]
    pub filter: CandidateFilter,
}

impl RankRequest {
    /// Resolve the candidate kind and map the payload into candidates
    fn into_candidates(
        self,
        policy: SlotPolicy,
    ) -> Result<(CandidateKind, Vec<Candidate>)> {
        let (inferred, candidates) = match (self.candidates, self.listings, self.predictions) {
            (Some(candidates), None, None) => (uniform_kind(&candidates), candidates),
            (None, Some(listings), None) => (
                Some(CandidateKind::Paid),
                listings_into_candidates(listings, policy)?,
            ),
            (None, None, Some(payload)) => (
                Some(CandidateKind::Free),
                predictions_into_candidates(payload.into_records()),
            ),
            (None, None, None) => {
                return Err(Error::InvalidCandidate(
                    "request has no candidates, listings or predictions".to_string(),
                ))
            }
            _ => {
                return Err(Error::InvalidCandidate(
                    "give only one of candidates, listings or predictions".to_string(),
                ))
            }
        };

        let kind = match (self.kind, inferred) {
            (Some(asked), Some(found)) if asked != found => {
                return Err(Error::InvalidCandidate(format!(
                    "kind {} does not match the {} payload",
                    asked, found
                )))
            }
            (asked, found) => asked.or(found).unwrap_or_default(),
        };

        Ok((kind, candidates))
    }
}

/// The kind shared by every candidate, or `None` when empty or mixed
fn uniform_kind(candidates: &[Candidate]) -> Option<CandidateKind> {
    let first = candidates.first()?.kind();
    candidates
        .iter()
        .all(|c| c.kind() == first)
        .then_some(first)
}

/// Rank response: the report with a record count
#[derive(Debug, Serialize, Deserialize)]
pub struct RankResponse {
    pub id: String,
    pub kind: CandidateKind,
    pub reference: Option<Coordinates>,
    pub count: usize,
    pub total_candidates: usize,
    pub records: Vec<DisplayRecord>,
    pub generated_at: String,
}

impl From<RankReport> for RankResponse {
    fn from(report: RankReport) -> Self {
        Self {
            id: report.id,
            kind: report.kind,
            reference: report.reference,
            count: report.records.len(),
            total_candidates: report.total_candidates,
            records: report.records,
            generated_at: report.generated_at,
        }
    }
}

/// API error response
#[derive(Debug, Serialize, Deserialize)]
pub struct ApiError {
    pub error: String,
    pub code: String,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> axum::response::Response {
        let status = match self.code.as_str() {
            "SOURCE_ERROR" => StatusCode::BAD_GATEWAY,
            "INTERNAL_ERROR" => StatusCode::INTERNAL_SERVER_ERROR,
            _ => StatusCode::BAD_REQUEST,
        };
        (status, Json(self)).into_response()
    }
}

impl From<Error> for ApiError {
    fn from(err: Error) -> Self {
        let code = match &err {
            Error::InvalidCoordinates(_) => "INVALID_COORDINATES",
            Error::InvalidCandidate(_) => "INVALID_CANDIDATE",
            Error::InvalidRadius(_) => "INVALID_RADIUS",
            Error::Source(_) | Error::Http(_) => "SOURCE_ERROR",
            Error::Config(_) => "CONFIG_ERROR",
            _ => "INTERNAL_ERROR",
        };
        ApiError {
            error: err.to_string(),
            code: code.to_string(),
        }
    }
}

/// Rank candidates endpoint
///
/// POST /api/rank
async fn rank_handler(
    State(state): State<Arc<AppState>>,
    Json(req): Json<RankRequest>,
) -> std::result::Result<Json<RankResponse>, ApiError> {
    if let Some(reference) = &req.reference {
        reference.validate()?;
    }
    if let Some(radius) = req.filter.radius_km {
        if radius <= 0.0 {
            return Err(Error::InvalidRadius(format!("radius must be positive: {}", radius)).into());
        }
    }

    let reference = req.reference;
    let limit = req.limit;
    let sort = req.sort.map(|s| (s.key, s.direction));
    let filter = req.filter.clone();

    let (kind, candidates) = req.into_candidates(state.slot_policy().await)?;
    let options = RankOptions {
        limit: match limit {
            Some(limit) => limit,
            None => state.limit_for(kind).await,
        },
        filter,
        sort,
    };
    debug!(%kind, count = candidates.len(), ranked = reference.is_some(), "rank request");

    let report = RankReport::build(kind, &candidates, reference, &options);
    Ok(Json(report.into()))
}

#[derive(Debug, Deserialize)]
pub struct AvailabilityParams {
    pub available: u32,
    pub total: u32,
}

/// GET /api/classify/availability?available=&total=
async fn availability_handler(Query(params): Query<AvailabilityParams>) -> Json<AvailabilityClass> {
    Json(classify_availability(params.available, params.total))
}

#[derive(Debug, Deserialize)]
pub struct ProbabilityParams {
    pub p: f64,
}

/// GET /api/classify/probability?p=
async fn probability_handler(Query(params): Query<ProbabilityParams>) -> Json<ProbabilityClass> {
    Json(classify_probability(params.p))
}

/// Status response
#[derive(Debug, Serialize, Deserialize)]
pub struct StatusResponse {
    /// Server is running
    pub running: bool,
    /// Server version
    pub version: String,
    pub hotspot_limit: usize,
    pub listing_limit: usize,
    pub slot_policy: SlotPolicy,
    /// Uptime in seconds
    pub uptime_secs: u64,
}

/// Server status endpoint
///
/// GET /api/status
async fn status_handler(State(state): State<Arc<AppState>>) -> Json<StatusResponse> {
    let config = state.config.read().await;

    Json(StatusResponse {
        running: true,
        version: env!("CARGO_PKG_VERSION").to_string(),
        hotspot_limit: config.ranking.hotspot_limit,
        listing_limit: config.ranking.listing_limit,
        slot_policy: config.ranking.slot_policy,
        uptime_secs: state.uptime_secs(),
    })
}
