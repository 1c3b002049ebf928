//! File-backed candidate source
//!
//! Reads collaborator-shaped JSON from disk: an array of listing records,
//! or a prediction envelope / array. Queries are not applied; ranking and
//! filtering happen downstream.

use crate::candidate::wire::{
    listings_into_candidates, predictions_into_candidates, ListingRecord, PredictionPayload,
    PredictionRecord, SlotPolicy,
};
use crate::candidate::{Candidate, CandidateKind};
use crate::error::Result;
use crate::source::{ListingQuery, ListingSource, PredictionQuery, PredictionSource};
use std::fs;
use std::path::{Path, PathBuf};

/// A JSON file standing in for a collaborator
#[derive(Debug, Clone)]
pub struct FileSource {
    path: PathBuf,
}

impl FileSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read(&self) -> Result<String> {
        Ok(fs::read_to_string(&self.path)?)
    }
}

impl ListingSource for FileSource {
    async fn fetch_listings(&self, _query: &ListingQuery) -> Result<Vec<ListingRecord>> {
        Ok(serde_json::from_str(&self.read()?)?)
    }
}

impl PredictionSource for FileSource {
    async fn fetch_predictions(&self, _query: &PredictionQuery) -> Result<Vec<PredictionRecord>> {
        let payload: PredictionPayload = serde_json::from_str(&self.read()?)?;
        Ok(payload.into_records())
    }
}

/// Load a candidate file of the given kind
pub fn load_candidates(
    path: impl AsRef<Path>,
    kind: CandidateKind,
    policy: SlotPolicy,
) -> Result<Vec<Candidate>> {
    let content = fs::read_to_string(path)?;
    parse_candidates(&content, kind, policy)
}

/// Parse collaborator-shaped JSON of the given kind
pub fn parse_candidates(
    content: &str,
    kind: CandidateKind,
    policy: SlotPolicy,
) -> Result<Vec<Candidate>> {
    match kind {
        CandidateKind::Paid => {
            let records: Vec<ListingRecord> = serde_json::from_str(content)?;
            listings_into_candidates(records, policy)
        }
        CandidateKind::Free => {
            let payload: PredictionPayload = serde_json::from_str(content)?;
            Ok(predictions_into_candidates(payload.into_records()))
        }
    }
}
