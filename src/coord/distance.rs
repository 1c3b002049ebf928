//! Haversine great-circle distance
//!
//! Spherical Earth of mean radius 6371 km, no ellipsoidal correction
//! (error stays around 0.5%).

use crate::constants::geo::EARTH_RADIUS_KM;
use crate::coord::Coordinates;

/// Calculate the distance between two points in kilometers (Haversine formula)
///
/// # Arguments
/// * `a` - First point
/// * `b` - Second point
///
/// # Returns
/// Non-negative distance in kilometers. Inputs outside valid lat/lng
/// ranges still produce a number; validating them is the caller's job.
pub fn distance_km(a: Coordinates, b: Coordinates) -> f64 {
    let lat1 = a.lat.to_radians();
    let lat2 = b.lat.to_radians();
    let delta_lat = (b.lat - a.lat).to_radians();
    let delta_lng = (b.lng - a.lng).to_radians();

    let h = (delta_lat / 2.0).sin().powi(2)
        + lat1.cos() * lat2.cos() * (delta_lng / 2.0).sin().powi(2);
    // Rounding can push h past 1 for near-antipodal points
    let h = h.clamp(0.0, 1.0);
    let c = 2.0 * h.sqrt().atan2((1.0 - h).sqrt());

    EARTH_RADIUS_KM * c
}

/// Check if a point lies within `radius_km` of `center`
pub fn is_within_radius_km(center: Coordinates, point: Coordinates, radius_km: f64) -> bool {
    distance_km(center, point) <= radius_km
}
