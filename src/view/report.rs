//! Ranking report: the full response for one ranking request

use crate::candidate::{Candidate, CandidateKind};
use crate::coord::Coordinates;
use crate::rank::{rank_with, RankOptions};
use crate::view::{assemble, DisplayRecord};
use serde::{Deserialize, Serialize};

/// Display records plus the parameters that produced them
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RankReport {
    /// Unique ID for this report
    pub id: String,

    pub kind: CandidateKind,

    /// `None` when candidates were passed through unranked
    pub reference: Option<Coordinates>,

    /// Applied only when a reference was given
    pub limit: usize,

    /// Candidates before filtering and truncation
    pub total_candidates: usize,

    pub records: Vec<DisplayRecord>,

    /// RFC 3339 timestamp
    pub generated_at: String,
}

impl RankReport {
    /// Filter, rank and assemble `candidates`
    pub fn build(
        kind: CandidateKind,
        candidates: &[Candidate],
        reference: Option<Coordinates>,
        options: &RankOptions,
    ) -> Self {
        let ranked = rank_with(candidates, reference, options);

        Self {
            id: uuid::Uuid::new_v4().to_string(),
            kind,
            reference,
            limit: options.limit,
            total_candidates: candidates.len(),
            records: assemble(&ranked),
            generated_at: chrono::Utc::now().to_rfc3339(),
        }
    }

    pub fn is_ranked(&self) -> bool {
        self.reference.is_some()
    }
}
