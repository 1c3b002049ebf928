//! HTTP client for the listings backend and the prediction service

use crate::candidate::wire::{ListingRecord, PredictionPayload, PredictionRecord};
use crate::config::ServicesConfig;
use crate::constants::api::{FREE_PARKING_PATH, PARKINGS_PATH};
use crate::error::{Error, Result};
use crate::source::{ListingQuery, ListingSource, PredictionQuery, PredictionSource};
use std::time::Duration;
use tracing::{debug, warn};

const USER_AGENT: &str = concat!("park-radar/", env!("CARGO_PKG_VERSION"));

/// Listings radius bounds accepted by the backend, in meters
const LISTING_RADIUS_RANGE: (f64, f64) = (1.0, 50_000.0);

/// Prediction radius bounds accepted by the prediction service, in meters
const PREDICTION_RADIUS_RANGE: (f64, f64) = (50.0, 5_000.0);

/// REST client for both collaborators
#[derive(Debug, Clone)]
pub struct HttpSource {
    client: reqwest::Client,
    backend_url: String,
    prediction_url: String,
}

impl HttpSource {
    /// Create a client from service settings
    pub fn new(services: &ServicesConfig) -> Result<Self> {
        let client = reqwest::Client::builder()
            .user_agent(USER_AGENT)
            .timeout(Duration::from_secs(services.timeout_secs))
            .build()?;

        Ok(Self {
            client,
            backend_url: services.backend_url.trim_end_matches('/').to_string(),
            prediction_url: services.prediction_url.trim_end_matches('/').to_string(),
        })
    }

    fn listings_request(&self, query: &ListingQuery) -> reqwest::RequestBuilder {
        let radius = query
            .radius_meters
            .clamp(LISTING_RADIUS_RANGE.0, LISTING_RADIUS_RANGE.1)
            .round() as i64;

        // The backend takes `location` twice: longitude first, then latitude
        self.client
            .get(format!("{}{}", self.backend_url, PARKINGS_PATH))
            .query(&[
                ("location", query.center.lng.to_string()),
                ("location", query.center.lat.to_string()),
                ("radius", radius.to_string()),
                ("price_min", query.price_min.to_string()),
                ("price_max", query.price_max.to_string()),
            ])
    }

    fn predictions_request(&self, query: &PredictionQuery) -> reqwest::RequestBuilder {
        let radius = query
            .radius_meters
            .clamp(PREDICTION_RADIUS_RANGE.0, PREDICTION_RADIUS_RANGE.1)
            .round() as i64;

        self.client
            .get(format!("{}{}", self.prediction_url, FREE_PARKING_PATH))
            .query(&[
                ("lat", query.center.lat.to_string()),
                ("lon", query.center.lng.to_string()),
                ("radius_meters", radius.to_string()),
            ])
    }

    async fn send(request: reqwest::RequestBuilder, what: &str) -> Result<reqwest::Response> {
        let response = request
            .send()
            .await
            .map_err(|e| Error::Source(format!("{} request failed: {}", what, e)))?;

        if !response.status().is_success() {
            warn!(status = %response.status(), "{} request rejected", what);
            return Err(Error::Source(format!(
                "{} returned status: {}",
                what,
                response.status()
            )));
        }

        Ok(response)
    }
}

impl ListingSource for HttpSource {
    async fn fetch_listings(&self, query: &ListingQuery) -> Result<Vec<ListingRecord>> {
        debug!(center = %query.center, radius = query.radius_meters, "fetching listings");

        let response = Self::send(self.listings_request(query), "Listings backend").await?;
        response
            .json()
            .await
            .map_err(|e| Error::Source(format!("Failed to parse listings response: {}", e)))
    }
}

impl PredictionSource for HttpSource {
    async fn fetch_predictions(&self, query: &PredictionQuery) -> Result<Vec<PredictionRecord>> {
        debug!(center = %query.center, radius = query.radius_meters, "fetching predictions");

        let response = Self::send(self.predictions_request(query), "Prediction service").await?;
        let payload: PredictionPayload = response
            .json()
            .await
            .map_err(|e| Error::Source(format!("Failed to parse prediction response: {}", e)))?;

        Ok(payload.into_records())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::coord::Coordinates;

    fn source() -> HttpSource {
        HttpSource::new(&ServicesConfig {
            backend_url: "http://backend.test/".to_string(),
            prediction_url: "http://ml.test".to_string(),
            timeout_secs: 5,
        })
        .unwrap()
    }

    #[test]
    fn test_listings_url() {
        let query = ListingQuery {
            center: Coordinates::new(18.5204, 73.8567),
            radius_meters: 120_000.0,
            price_min: 0.0,
            price_max: 250.5,
        };

        let request = source().listings_request(&query).build().unwrap();
        assert_eq!(
            request.url().as_str(),
            "http://backend.test/parkings/?location=73.8567&location=18.5204\
             &radius=50000&price_min=0&price_max=250.5"
        );
    }

    #[test]
    fn test_predictions_url() {
        let query = PredictionQuery {
            center: Coordinates::new(18.5204, 73.8567),
            radius_meters: 10.0,
        };

        let request = source().predictions_request(&query).build().unwrap();
        assert_eq!(
            request.url().as_str(),
            "http://ml.test/predictions/free-parking?lat=18.5204&lon=73.8567&radius_meters=50"
        );
    }

    #[test]
    fn test_source_creation() {
        assert!(format!("{:?}", source()).contains("HttpSource"));
    }
}
