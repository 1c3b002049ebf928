//! Server shared state
//!
//! Holds configuration and shared resources for the HTTP server.

use crate::candidate::CandidateKind;
use crate::candidate::wire::SlotPolicy;
use crate::config::Config;
use std::sync::Arc;
use std::time::Instant;
use tokio::sync::RwLock;

/// Shared state for the HTTP server
pub struct AppState {
    /// Configuration
    pub config: Arc<RwLock<Config>>,

    started_at: Instant,
}

impl AppState {
    /// Create new application state
    pub fn new(config: Config) -> Self {
        Self {
            config: Arc::new(RwLock::new(config)),
            started_at: Instant::now(),
        }
    }

    /// Configured result size for `kind`
    pub async fn limit_for(&self, kind: CandidateKind) -> usize {
        self.config.read().await.limit_for(kind)
    }

    pub async fn slot_policy(&self) -> SlotPolicy {
        self.config.read().await.ranking.slot_policy
    }

    /// Seconds since the state was created
    pub fn uptime_secs(&self) -> u64 {
        self.started_at.elapsed().as_secs()
    }
}
