//! Centralized constants for the park-radar crate
//!
//! Values shared across the ranking core, the wire mapping and the
//! collaborator clients live here.

/// Geographic constants
pub mod geo {
    /// Mean Earth radius in kilometers (spherical approximation)
    pub const EARTH_RADIUS_KM: f64 = 6371.0;
}

/// Product policy for result sizes and marker geometry
pub mod policy {
    /// Nearest free hotspots shown around a reference point
    pub const FREE_HOTSPOT_LIMIT: usize = 5;

    /// Nearest paid listings shown around a reference point
    pub const PAID_LISTING_LIMIT: usize = 10;

    /// Circle radius drawn for a hotspot that carries none
    pub const DEFAULT_HOTSPOT_RADIUS_METERS: f64 = 100.0;
}

/// Classification thresholds
pub mod thresholds {
    /// Availability ratio strictly above this is High
    pub const AVAILABILITY_HIGH: f64 = 0.5;

    /// Availability ratio strictly above this (and not High) is Medium
    pub const AVAILABILITY_MEDIUM: f64 = 0.2;

    /// Probability at or above this is High
    pub const PROBABILITY_HIGH: f64 = 0.8;

    /// Probability at or above this (and not High) is Medium
    pub const PROBABILITY_MEDIUM: f64 = 0.6;
}

/// External API endpoints
pub mod api {
    /// OpenStreetMap Nominatim geocoding API
    pub const NOMINATIM_URL: &str = "https://nominatim.openstreetmap.org";

    /// Listings backend path (appended to the configured backend URL)
    pub const PARKINGS_PATH: &str = "/parkings/";

    /// Free-parking prediction path (appended to the configured prediction URL)
    pub const FREE_PARKING_PATH: &str = "/predictions/free-parking";
}
