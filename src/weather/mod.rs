pub mod cache;
pub mod chart;
pub mod client;
pub mod error;
pub mod format;
pub mod geocode;
pub mod models;
pub mod transport;

#[cfg(feature = "gui")]
pub mod app;

use std::sync::Arc;
use std::time::Duration;

use self::cache::ResponseCache;
use self::chart::DaySeries;
use self::client::WeatherClient;
use self::geocode::Geocoder;
use self::transport::{CachedTransport, HttpTransport, Transport};

pub use self::error::WeatherError;

/// On-disk location of the HTTP response cache.
pub const CACHE_DIR: &str = ".cache";

/// Response cache expiry.
pub const CACHE_TTL: Duration = Duration::from_secs(3600);

/// The actions behind the three GUI buttons. Every method re-resolves the
/// city and re-fetches data; the response cache below the forecast
/// transport is the only caching layer.
pub struct WeatherService {
    geocoder: Geocoder,
    client: WeatherClient,
}

impl WeatherService {
    /// Production wiring: plain transport for geocoding, cached and
    /// retried transport for forecasts.
    pub fn open_default() -> Result<Self, WeatherError> {
        let cache = ResponseCache::open(CACHE_DIR)?;
        let forecast_transport = CachedTransport::new(HttpTransport::new(), cache, CACHE_TTL);
        Ok(Self::new(
            Arc::new(HttpTransport::new()),
            Arc::new(forecast_transport),
        ))
    }

    pub fn new(
        geocode_transport: Arc<dyn Transport>,
        forecast_transport: Arc<dyn Transport>,
    ) -> Self {
        Self {
            geocoder: Geocoder::new(geocode_transport),
            client: WeatherClient::new(forecast_transport),
        }
    }

    /// The Search action: location header plus the twelve current-condition
    /// lines.
    pub async fn summary(&self, city: &str) -> Result<String, WeatherError> {
        let location = self.geocoder.lookup(city).await?;
        let forecast = self
            .client
            .forecast(location.latitude, location.longitude)
            .await?;
        let current = forecast
            .current
            .as_ref()
            .ok_or(WeatherError::MissingGroup("current"))?;

        let mut text = format::location_header(&forecast);
        text.push('\n');
        text += &format::current_report(current);
        Ok(text)
    }

    /// The Show Details action: location details followed by the hourly and
    /// daily table dumps.
    pub async fn details(&self, city: &str) -> Result<String, WeatherError> {
        let location = self.geocoder.lookup(city).await?;
        let forecast = self
            .client
            .forecast(location.latitude, location.longitude)
            .await?;

        let mut text = format::location_details(&location);
        if let Some(hourly) = &forecast.hourly {
            text.push('\n');
            text += &format::hourly_table(hourly);
        }
        if let Some(daily) = &forecast.daily {
            text.push('\n');
            text += &format::daily_table(daily);
        }
        Ok(text)
    }

    /// The Grafic action: the first calendar day of hourly temperature.
    pub async fn day_chart(&self, city: &str) -> Result<DaySeries, WeatherError> {
        let location = self.geocoder.lookup(city).await?;
        let response = self
            .client
            .hourly_temperature(location.latitude, location.longitude)
            .await?;
        let hourly = response
            .hourly
            .as_ref()
            .ok_or(WeatherError::MissingGroup("hourly"))?;
        chart::first_day_series(hourly)
    }
}
