//! Default configuration values
//!
//! Named constants for all tunable parameters

use crate::constants::policy::{FREE_HOTSPOT_LIMIT, PAID_LISTING_LIMIT};

/// Nearest hotspots kept around a reference point
pub const DEFAULT_HOTSPOT_LIMIT: usize = FREE_HOTSPOT_LIMIT;

/// Nearest listings kept around a reference point
pub const DEFAULT_LISTING_LIMIT: usize = PAID_LISTING_LIMIT;

/// Listings search radius in meters
pub const DEFAULT_LISTING_RADIUS_METERS: f64 = 10_000.0;

/// Prediction search radius in meters
pub const DEFAULT_HOTSPOT_RADIUS_METERS: f64 = 300.0;

/// Lowest hourly price sent to the listings backend
pub const DEFAULT_PRICE_MIN: f64 = 0.0;

/// Highest hourly price sent to the listings backend
pub const DEFAULT_PRICE_MAX: f64 = 99_999.0;

/// Listings backend base URL
pub const DEFAULT_BACKEND_URL: &str = "http://127.0.0.1:8000";

/// Prediction service base URL
pub const DEFAULT_PREDICTION_URL: &str = "http://127.0.0.1:8000";

/// Collaborator request timeout in seconds
pub const DEFAULT_TIMEOUT_SECS: u64 = 10;

/// Default server host
pub const DEFAULT_HOST: &str = "127.0.0.1";

/// Default server port
pub const DEFAULT_PORT: u16 = 7979;

/// Default output format
pub const DEFAULT_FORMAT: &str = "text";

/// Config file name
pub const CONFIG_FILE_NAME: &str = "config.toml";

/// Application directory name (for XDG paths)
pub const APP_DIR_NAME: &str = "park-radar";
