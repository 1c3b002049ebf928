//! Error types for park-radar

use thiserror::Error;

/// Main error type for park-radar operations
///
/// The ranking core never produces these; they come from the wire mapping,
/// configuration, collaborator clients, and the CLI/server surfaces.
#[derive(Error, Debug)]
pub enum Error {
    #[error("Invalid coordinates: {0}")]
    InvalidCoordinates(String),

    #[error("Invalid candidate: {0}")]
    InvalidCandidate(String),

    #[error("Invalid radius: {0}")]
    InvalidRadius(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Server error: {0}")]
    Server(String),

    #[error("Source error: {0}")]
    Source(String),

    #[error("Geocoding error: {0}")]
    Geocoding(String),
}

/// Result type alias for park-radar operations
pub type Result<T> = std::result::Result<T, Error>;
