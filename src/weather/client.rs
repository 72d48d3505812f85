use std::sync::Arc;

use tracing::debug;

use super::error::WeatherError;
use super::models::ForecastResponse;
use super::transport::Transport;

pub const FORECAST_URL: &str = "https://api.open-meteo.com/v1/forecast";

/// Current-conditions fields, in the order the report renders them.
const CURRENT_VARIABLES: &[&str] = &[
    "temperature_2m",
    "relative_humidity_2m",
    "apparent_temperature",
    "is_day",
    "precipitation",
    "rain",
    "showers",
    "snowfall",
    "cloud_cover",
    "pressure_msl",
    "surface_pressure",
    "wind_speed_10m",
];

const HOURLY_VARIABLES: &[&str] = &[
    "temperature_2m",
    "relative_humidity_2m",
    "dew_point_2m",
    "apparent_temperature",
    "precipitation_probability",
    "precipitation",
    "rain",
    "showers",
    "snowfall",
    "snow_depth",
    "cloud_cover",
    "visibility",
    "wind_speed_10m",
    "wind_direction_10m",
    "soil_temperature_0cm",
];

const DAILY_VARIABLES: &[&str] = &[
    "weather_code",
    "temperature_2m_max",
    "temperature_2m_min",
    "apparent_temperature_max",
    "apparent_temperature_min",
    "sunrise",
    "sunset",
    "daylight_duration",
    "sunshine_duration",
    "uv_index_max",
    "uv_index_clear_sky_max",
    "precipitation_sum",
    "rain_sum",
    "showers_sum",
    "snowfall_sum",
    "precipitation_hours",
    "precipitation_probability_max",
    "wind_speed_10m_max",
    "wind_gusts_10m_max",
    "wind_direction_10m_dominant",
    "shortwave_radiation_sum",
    "et0_fao_evapotranspiration",
];

/// Open-Meteo forecast client. All requests go through the transport the
/// client was built with, so caching and retry live below this layer.
pub struct WeatherClient {
    transport: Arc<dyn Transport>,
}

impl WeatherClient {
    pub fn new(transport: Arc<dyn Transport>) -> Self {
        Self { transport }
    }

    /// Fetch all three data groups (current, hourly, daily) for a point.
    pub async fn forecast(
        &self,
        latitude: f64,
        longitude: f64,
    ) -> Result<ForecastResponse, WeatherError> {
        let url = format!(
            "{FORECAST_URL}?latitude={latitude}&longitude={longitude}&current={}&hourly={}&daily={}&timezone=auto",
            CURRENT_VARIABLES.join(","),
            HOURLY_VARIABLES.join(","),
            DAILY_VARIABLES.join(","),
        );
        self.request(&url).await
    }

    /// Fetch only the hourly temperature series (the chart's request).
    pub async fn hourly_temperature(
        &self,
        latitude: f64,
        longitude: f64,
    ) -> Result<ForecastResponse, WeatherError> {
        let url = format!(
            "{FORECAST_URL}?latitude={latitude}&longitude={longitude}&hourly=temperature_2m&timezone=auto"
        );
        self.request(&url).await
    }

    async fn request(&self, url: &str) -> Result<ForecastResponse, WeatherError> {
        debug!(url, "forecast request");
        let body = self.transport.fetch(url).await?;
        Ok(serde_json::from_str(&body)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn current_variables_match_report_field_count() {
        assert_eq!(CURRENT_VARIABLES.len(), 12);
    }

    #[test]
    fn hourly_and_daily_variable_sets_are_complete() {
        assert_eq!(HOURLY_VARIABLES.len(), 15);
        assert_eq!(DAILY_VARIABLES.len(), 22);
    }
}
