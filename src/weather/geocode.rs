use std::sync::Arc;

use tracing::debug;

use super::error::WeatherError;
use super::models::{GeocodingResponse, Location};
use super::transport::Transport;

pub const GEOCODING_URL: &str = "https://geocoding-api.open-meteo.com/v1/search";

/// Resolves city names to coordinates via the Open-Meteo geocoding API.
pub struct Geocoder {
    transport: Arc<dyn Transport>,
}

impl Geocoder {
    pub fn new(transport: Arc<dyn Transport>) -> Self {
        Self { transport }
    }

    /// Look up a city name and return the best (first) hit. An empty result
    /// set is the unknown-city error; no retry is attempted here.
    pub async fn lookup(&self, name: &str) -> Result<Location, WeatherError> {
        let url = format!(
            "{GEOCODING_URL}?name={}&count=5&language=ro&format=json",
            urlencoding::encode(name)
        );
        let body = self.transport.fetch(&url).await?;
        let response: GeocodingResponse = serde_json::from_str(&body)?;

        let Some(hit) = response
            .results
            .unwrap_or_default()
            .into_iter()
            .next()
        else {
            return Err(WeatherError::UnknownCity(name.to_string()));
        };

        debug!(
            name = %hit.name,
            latitude = hit.latitude,
            longitude = hit.longitude,
            "resolved location"
        );
        Ok(Location::from(hit))
    }
}
