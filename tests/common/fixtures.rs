use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use image::{DynamicImage, GrayImage, Luma};

use atelier::weather::error::WeatherError;
use atelier::weather::transport::Transport;

/// A 64x64 test image: a bright block with a dark hole punched in it, so
/// edge tracing yields both top-level boundaries and nested ones.
pub fn create_shape_image() -> DynamicImage {
    DynamicImage::ImageLuma8(GrayImage::from_fn(64, 64, |x, y| {
        let in_block = (16..48).contains(&x) && (16..48).contains(&y);
        let in_hole = (26..38).contains(&x) && (26..38).contains(&y);
        if in_block && !in_hole {
            Luma([255])
        } else {
            Luma([0])
        }
    }))
}

/// Scripted transport: answers by URL prefix and records every call.
/// Clones share the call log, so a clone can be handed to the code under
/// test while the original is used for assertions.
#[derive(Clone)]
pub struct FakeTransport {
    calls: Arc<Mutex<Vec<String>>>,
    responses: Arc<Vec<(String, String)>>,
}

impl FakeTransport {
    pub fn new(responses: Vec<(&str, String)>) -> Self {
        Self {
            calls: Arc::new(Mutex::new(Vec::new())),
            responses: Arc::new(
                responses
                    .into_iter()
                    .map(|(prefix, body)| (prefix.to_string(), body))
                    .collect(),
            ),
        }
    }

    pub fn call_count(&self) -> usize {
        self.calls.lock().unwrap().len()
    }

    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl Transport for FakeTransport {
    async fn fetch(&self, url: &str) -> Result<String, WeatherError> {
        self.calls.lock().unwrap().push(url.to_string());
        for (prefix, body) in self.responses.iter() {
            if url.starts_with(prefix) {
                return Ok(body.clone());
            }
        }
        Err(WeatherError::Transport(format!("unexpected url: {url}")))
    }
}

pub fn geocode_hit_body(name: &str, latitude: f64, longitude: f64) -> String {
    format!(
        r#"{{"results":[{{"name":"{name}","latitude":{latitude},"longitude":{longitude},"country":"Franța","admin1":"Île-de-France","timezone":"Europe/Paris","elevation":42.0,"population":2138551}}],"generationtime_ms":0.3}}"#
    )
}

pub fn geocode_miss_body() -> String {
    r#"{"generationtime_ms":0.2}"#.to_string()
}

/// A forecast response carrying all three data groups.
pub fn forecast_full_body() -> String {
    r#"{
        "latitude": 48.85,
        "longitude": 2.35,
        "elevation": 42.0,
        "utc_offset_seconds": 7200,
        "timezone": "Europe/Paris",
        "timezone_abbreviation": "CEST",
        "current": {
            "time": "2026-08-07T12:15",
            "temperature_2m": 24.3,
            "relative_humidity_2m": 48.0,
            "apparent_temperature": 23.8,
            "is_day": 1,
            "precipitation": 0.0,
            "rain": 0.0,
            "showers": 0.0,
            "snowfall": 0.0,
            "cloud_cover": 25.0,
            "pressure_msl": 1016.3,
            "surface_pressure": 1011.0,
            "wind_speed_10m": 9.4
        },
        "hourly": {
            "time": ["2026-08-07T00:00", "2026-08-07T01:00", "2026-08-07T02:00"],
            "temperature_2m": [18.1, 17.6, 17.2],
            "relative_humidity_2m": [60.0, 62.0, 63.0],
            "wind_speed_10m": [7.0, 6.5, 6.1]
        },
        "daily": {
            "time": ["2026-08-07", "2026-08-08"],
            "weather_code": [1, 3],
            "temperature_2m_max": [26.0, 24.5],
            "temperature_2m_min": [16.2, 15.8],
            "sunrise": ["2026-08-07T06:31", "2026-08-08T06:32"],
            "sunset": ["2026-08-07T21:12", "2026-08-08T21:10"]
        }
    }"#
    .to_string()
}

/// A chart-request response: hourly temperature only, spanning two days so
/// the first-day selection has something to drop.
pub fn forecast_hourly_body() -> String {
    let mut times = Vec::new();
    let mut temps = Vec::new();
    for hour in 0..24 {
        times.push(format!("\"2026-08-07T{hour:02}:00\""));
        temps.push(format!("{:.1}", 15.0 + hour as f32 * 0.3));
    }
    for hour in 0..6 {
        times.push(format!("\"2026-08-08T{hour:02}:00\""));
        temps.push("14.0".to_string());
    }
    format!(
        r#"{{
            "latitude": 48.85,
            "longitude": 2.35,
            "elevation": 42.0,
            "utc_offset_seconds": 7200,
            "timezone": "Europe/Paris",
            "timezone_abbreviation": "CEST",
            "hourly": {{ "time": [{}], "temperature_2m": [{}] }}
        }}"#,
        times.join(","),
        temps.join(",")
    )
}
