//! Nominatim geocoding backend (OpenStreetMap)
//!
//! Resolves place names typed by the user into reference points.
//! Nominatim requires an identifying User-Agent.

use crate::constants::api::NOMINATIM_URL;
use crate::error::{Error, Result};
use crate::geo::{GeoBackend, GeoLocation};
use serde::Deserialize;
use tracing::debug;

const USER_AGENT: &str = concat!("park-radar/", env!("CARGO_PKG_VERSION"));

/// Nominatim geocoding backend
#[derive(Debug, Clone)]
pub struct NominatimBackend {
    client: reqwest::Client,
    base_url: String,
}

/// Nominatim search response item
#[derive(Debug, Deserialize)]
struct NominatimResult {
    lat: String,
    lon: String,
    display_name: String,
}

impl NominatimBackend {
    pub fn new() -> Result<Self> {
        Self::with_base_url(NOMINATIM_URL)
    }

    /// Point at a different Nominatim instance
    pub fn with_base_url(base_url: &str) -> Result<Self> {
        let client = reqwest::Client::builder().user_agent(USER_AGENT).build()?;

        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    fn search_url(&self, query: &str) -> String {
        format!(
            "{}/search?q={}&format=json&limit=1",
            self.base_url,
            urlencoding::encode(query)
        )
    }

    /// Parse lat/lng strings to f64
    fn parse_coords(lat: &str, lng: &str) -> Result<(f64, f64)> {
        let lat: f64 = lat
            .parse()
            .map_err(|_| Error::Geocoding(format!("Invalid latitude: {}", lat)))?;
        let lng: f64 = lng
            .parse()
            .map_err(|_| Error::Geocoding(format!("Invalid longitude: {}", lng)))?;
        Ok((lat, lng))
    }
}

impl GeoBackend for NominatimBackend {
    async fn geocode(&self, query: &str) -> Result<Option<GeoLocation>> {
        debug!(query, "geocoding reference point");

        let response = self
            .client
            .get(self.search_url(query))
            .send()
            .await
            .map_err(|e| Error::Geocoding(format!("Nominatim request failed: {}", e)))?;

        if !response.status().is_success() {
            return Err(Error::Geocoding(format!(
                "Nominatim returned status: {}",
                response.status()
            )));
        }

        let results: Vec<NominatimResult> = response
            .json()
            .await
            .map_err(|e| Error::Geocoding(format!("Failed to parse Nominatim response: {}", e)))?;

        match results.into_iter().next() {
            Some(result) => {
                let (lat, lng) = Self::parse_coords(&result.lat, &result.lon)?;
                Ok(Some(GeoLocation {
                    lat,
                    lng,
                    display_name: result.display_name,
                }))
            }
            None => Ok(None),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_coords() {
        let (lat, lng) = NominatimBackend::parse_coords("18.5204", "73.8567").unwrap();
        assert!((lat - 18.5204).abs() < 0.0001);
        assert!((lng - 73.8567).abs() < 0.0001);
    }

    #[test]
    fn test_parse_coords_invalid() {
        assert!(NominatimBackend::parse_coords("invalid", "0").is_err());
        assert!(NominatimBackend::parse_coords("0", "invalid").is_err());
    }

    #[test]
    fn test_search_url_encodes_query() {
        let backend = NominatimBackend::with_base_url("http://geo.test/").unwrap();
        assert_eq!(
            backend.search_url("FC Road, Pune"),
            "http://geo.test/search?q=FC%20Road%2C%20Pune&format=json&limit=1"
        );
    }
}
