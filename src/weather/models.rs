//! Open-Meteo API response structures and the resolved-location model.

use serde::Deserialize;

/// A geocoded place: the input to every weather request.
#[derive(Debug, Clone)]
pub struct Location {
    pub name: String,
    pub latitude: f64,
    pub longitude: f64,
    pub country: Option<String>,
    pub region: Option<String>,
    pub timezone: Option<String>,
    pub elevation: Option<f64>,
    pub population: Option<u64>,
}

/// Geocoding response from Open-Meteo. An unknown place comes back with no
/// `results` field at all.
#[derive(Debug, Deserialize)]
pub struct GeocodingResponse {
    pub results: Option<Vec<GeocodingResult>>,
}

#[derive(Debug, Deserialize)]
pub struct GeocodingResult {
    pub name: String,
    pub latitude: f64,
    pub longitude: f64,
    pub country: Option<String>,
    pub admin1: Option<String>,
    pub timezone: Option<String>,
    pub elevation: Option<f64>,
    pub population: Option<u64>,
}

impl From<GeocodingResult> for Location {
    fn from(result: GeocodingResult) -> Self {
        Location {
            name: result.name,
            latitude: result.latitude,
            longitude: result.longitude,
            country: result.country,
            region: result.admin1,
            timezone: result.timezone,
            elevation: result.elevation,
            population: result.population,
        }
    }
}

/// Forecast response from Open-Meteo. The three data groups are optional:
/// each request asks only for the groups it needs.
#[derive(Debug, Clone, Deserialize)]
pub struct ForecastResponse {
    pub latitude: f64,
    pub longitude: f64,
    pub elevation: f64,
    pub utc_offset_seconds: i64,
    pub timezone: String,
    pub timezone_abbreviation: String,
    pub current: Option<CurrentConditions>,
    pub hourly: Option<HourlySeries>,
    pub daily: Option<DailySeries>,
}

/// Current-conditions snapshot: exactly the fields the report renders.
#[derive(Debug, Clone, Deserialize)]
pub struct CurrentConditions {
    pub time: String,
    #[serde(rename = "temperature_2m")]
    pub temperature: f32,
    #[serde(rename = "relative_humidity_2m")]
    pub relative_humidity: f32,
    pub apparent_temperature: f32,
    pub is_day: u8,
    pub precipitation: f32,
    pub rain: f32,
    pub showers: f32,
    pub snowfall: f32,
    pub cloud_cover: f32,
    pub pressure_msl: f32,
    pub surface_pressure: f32,
    #[serde(rename = "wind_speed_10m")]
    pub wind_speed: f32,
}

/// Hourly series: parallel arrays, one entry per timestamp.
#[derive(Debug, Clone, Deserialize)]
pub struct HourlySeries {
    pub time: Vec<String>,
    #[serde(rename = "temperature_2m")]
    pub temperature: Option<Vec<f32>>,
    #[serde(rename = "relative_humidity_2m")]
    pub relative_humidity: Option<Vec<f32>>,
    #[serde(rename = "dew_point_2m")]
    pub dew_point: Option<Vec<f32>>,
    pub apparent_temperature: Option<Vec<f32>>,
    pub precipitation_probability: Option<Vec<f32>>,
    pub precipitation: Option<Vec<f32>>,
    pub rain: Option<Vec<f32>>,
    pub showers: Option<Vec<f32>>,
    pub snowfall: Option<Vec<f32>>,
    pub snow_depth: Option<Vec<f32>>,
    pub cloud_cover: Option<Vec<f32>>,
    pub visibility: Option<Vec<f32>>,
    #[serde(rename = "wind_speed_10m")]
    pub wind_speed: Option<Vec<f32>>,
    #[serde(rename = "wind_direction_10m")]
    pub wind_direction: Option<Vec<f32>>,
    #[serde(rename = "soil_temperature_0cm")]
    pub soil_temperature: Option<Vec<f32>>,
}

/// Daily series. Open-Meteo reports some aggregates as null, so every value
/// slot is optional; sunrise and sunset are ISO timestamps.
#[derive(Debug, Clone, Deserialize)]
pub struct DailySeries {
    pub time: Vec<String>,
    pub weather_code: Option<Vec<Option<f32>>>,
    #[serde(rename = "temperature_2m_max")]
    pub temperature_max: Option<Vec<Option<f32>>>,
    #[serde(rename = "temperature_2m_min")]
    pub temperature_min: Option<Vec<Option<f32>>>,
    pub apparent_temperature_max: Option<Vec<Option<f32>>>,
    pub apparent_temperature_min: Option<Vec<Option<f32>>>,
    pub sunrise: Option<Vec<String>>,
    pub sunset: Option<Vec<String>>,
    pub daylight_duration: Option<Vec<Option<f32>>>,
    pub sunshine_duration: Option<Vec<Option<f32>>>,
    pub uv_index_max: Option<Vec<Option<f32>>>,
    pub uv_index_clear_sky_max: Option<Vec<Option<f32>>>,
    pub precipitation_sum: Option<Vec<Option<f32>>>,
    pub rain_sum: Option<Vec<Option<f32>>>,
    pub showers_sum: Option<Vec<Option<f32>>>,
    pub snowfall_sum: Option<Vec<Option<f32>>>,
    pub precipitation_hours: Option<Vec<Option<f32>>>,
    pub precipitation_probability_max: Option<Vec<Option<f32>>>,
    #[serde(rename = "wind_speed_10m_max")]
    pub wind_speed_max: Option<Vec<Option<f32>>>,
    #[serde(rename = "wind_gusts_10m_max")]
    pub wind_gusts_max: Option<Vec<Option<f32>>>,
    #[serde(rename = "wind_direction_10m_dominant")]
    pub wind_direction_dominant: Option<Vec<Option<f32>>>,
    pub shortwave_radiation_sum: Option<Vec<Option<f32>>>,
    pub et0_fao_evapotranspiration: Option<Vec<Option<f32>>>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn geocoding_response_without_results_decodes_to_none() {
        let response: GeocodingResponse =
            serde_json::from_str(r#"{"generationtime_ms":0.5}"#).unwrap();
        assert!(response.results.is_none());
    }

    #[test]
    fn forecast_with_only_hourly_group_decodes() {
        let body = r#"{
            "latitude": 48.86,
            "longitude": 2.35,
            "elevation": 38.0,
            "utc_offset_seconds": 7200,
            "timezone": "Europe/Paris",
            "timezone_abbreviation": "CEST",
            "hourly": {
                "time": ["2026-08-07T00:00", "2026-08-07T01:00"],
                "temperature_2m": [17.3, 16.9]
            }
        }"#;
        let response: ForecastResponse = serde_json::from_str(body).unwrap();
        let hourly = response.hourly.unwrap();
        assert_eq!(hourly.time.len(), 2);
        assert_eq!(hourly.temperature.unwrap(), vec![17.3, 16.9]);
        assert!(response.current.is_none());
        assert!(response.daily.is_none());
    }
}
