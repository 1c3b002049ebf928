//! park-radar: proximity ranking for parking candidates
//!
//! A library and CLI tool that orders free-parking hotspots and paid
//! listings by great-circle distance from a reference point, and maps
//! availability figures onto display tiers.
//!
//! ## Features
//!
//! - Haversine distance and nearest-first ranking with a result limit
//! - Slot availability and probability tier classification
//! - Display records ready for a map or list view
//! - Listing and prediction service clients, JSON file input
//! - HTTP API + CLI interface
//!
//! ## Quick Start
//!
//! ```rust
//! use park_radar::candidate::{Candidate, FreeHotspot};
//! use park_radar::coord::Coordinates;
//! use park_radar::rank::rank;
//!
//! let spot = |label: &str, lat: f64, lng: f64| {
//!     Candidate::FreeHotspot(FreeHotspot {
//!         label: label.to_string(),
//!         coords: Coordinates::new(lat, lng),
//!         probability: 0.7,
//!         radius_meters: None,
//!     })
//! };
//! let candidates = vec![spot("far", 18.60, 73.85), spot("near", 18.53, 73.85)];
//!
//! let reference = Coordinates::new(18.5204, 73.8567); // Pune
//! let ranked = rank(&candidates, Some(reference), 5);
//! assert_eq!(ranked[0].candidate.id(), "near");
//!
//! // Without a reference the input passes through in order
//! let unranked = rank(&candidates, None, 1);
//! assert_eq!(unranked.len(), 2);
//! ```

pub mod candidate;
pub mod classify;
pub mod cli;
pub mod config;
pub mod constants;
pub mod coord;
pub mod error;
pub mod format;
pub mod geo;
pub mod query;
pub mod rank;
pub mod server;
pub mod source;
pub mod view;

// Re-export commonly used types
pub use candidate::{Candidate, CandidateKind, FreeHotspot, PaidListing};
pub use classify::{classify_availability, classify_probability, ColorToken, Tier};
pub use config::Config;
pub use coord::{distance_km, Coordinates};
pub use error::{Error, Result};
pub use rank::{rank, RankedCandidate};
pub use view::{assemble, DisplayRecord};
