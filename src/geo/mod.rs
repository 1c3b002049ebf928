//! Reference point resolution
//!
//! A reference point is either explicit coordinates or a place name
//! resolved through a geocoding backend.

pub mod nominatim;

use crate::coord::Coordinates;
use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};

/// A geocoded location result
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeoLocation {
    pub lat: f64,
    pub lng: f64,
    /// Display name (address or description)
    pub display_name: String,
}

impl GeoLocation {
    pub fn coordinates(&self) -> Coordinates {
        Coordinates::new(self.lat, self.lng)
    }
}

/// Trait for geocoding backends
pub trait GeoBackend: Send + Sync {
    /// Geocode a place name to its best match, or None if not found
    fn geocode(
        &self,
        query: &str,
    ) -> impl std::future::Future<Output = Result<Option<GeoLocation>>> + Send;
}

/// Get the default geocoding backend
pub fn get_geocoder() -> Result<nominatim::NominatimBackend> {
    nominatim::NominatimBackend::new()
}

/// Where the reference point comes from
#[derive(Debug, Clone, PartialEq)]
pub enum ReferenceInput {
    /// No reference: candidates pass through unranked
    None,
    Coordinates(Coordinates),
    Place(String),
}

impl ReferenceInput {
    /// Build from optional CLI-style parts; lat and lng must come together
    pub fn from_parts(lat: Option<f64>, lng: Option<f64>, place: Option<String>) -> Result<Self> {
        match (lat, lng, place) {
            (Some(_), _, Some(_)) | (_, Some(_), Some(_)) => Err(Error::InvalidCoordinates(
                "give either coordinates or a place name, not both".to_string(),
            )),
            (Some(lat), Some(lng), None) => Ok(Self::Coordinates(Coordinates::new(lat, lng))),
            (Some(_), None, None) | (None, Some(_), None) => Err(Error::InvalidCoordinates(
                "latitude and longitude must be given together".to_string(),
            )),
            (None, None, Some(place)) => Ok(Self::Place(place)),
            (None, None, None) => Ok(Self::None),
        }
    }

    /// Resolve to an optional validated coordinate
    pub async fn resolve<G: GeoBackend>(self, geocoder: &G) -> Result<Option<Coordinates>> {
        let coords = match self {
            Self::None => return Ok(None),
            Self::Coordinates(coords) => coords,
            Self::Place(place) => geocoder
                .geocode(&place)
                .await?
                .map(|loc| loc.coordinates())
                .ok_or_else(|| Error::Geocoding(format!("Could not geocode '{}'", place)))?,
        };
        coords.validate()?;
        Ok(Some(coords))
    }
}
