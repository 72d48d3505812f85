mod common;

use std::sync::Arc;
use std::time::Duration;

use atelier::WeatherService;
use atelier::weather::cache::ResponseCache;
use atelier::weather::client::FORECAST_URL;
use atelier::weather::format::CURRENT_LABELS;
use atelier::weather::geocode::GEOCODING_URL;
use atelier::weather::transport::CachedTransport;

use common::{
    FakeTransport, forecast_full_body, forecast_hourly_body, geocode_hit_body, geocode_miss_body,
};

fn forecast_fake() -> FakeTransport {
    FakeTransport::new(vec![(FORECAST_URL, forecast_full_body())])
}

#[tokio::test]
async fn unknown_city_yields_literal_message_and_no_weather_request() {
    let geocode = FakeTransport::new(vec![(GEOCODING_URL, geocode_miss_body())]);
    let forecast = forecast_fake();
    let service = WeatherService::new(Arc::new(geocode.clone()), Arc::new(forecast.clone()));

    let summary = service.summary("Xyzzyplace123").await.unwrap_err();
    let details = service.details("Xyzzyplace123").await.unwrap_err();
    let chart = service.day_chart("Xyzzyplace123").await.unwrap_err();

    for err in [summary, details, chart] {
        assert_eq!(err.to_string(), "Acest oraș nu există: Xyzzyplace123");
    }
    assert_eq!(forecast.call_count(), 0);
    assert_eq!(geocode.call_count(), 3);
}

#[tokio::test]
async fn summary_contains_each_label_exactly_once() -> anyhow::Result<()> {
    let geocode = FakeTransport::new(vec![(GEOCODING_URL, geocode_hit_body("Paris", 48.85, 2.35))]);
    let forecast = forecast_fake();
    let service = WeatherService::new(Arc::new(geocode), Arc::new(forecast));

    let summary = service.summary("Paris").await?;

    assert!(summary.starts_with("Coordonatele sunt: 48.85°N 2.35°E"));
    for label in CURRENT_LABELS {
        let needle = format!(" {label}:");
        assert_eq!(
            summary.matches(&needle).count(),
            1,
            "label {label:?} should appear exactly once"
        );
    }
    assert!(summary.contains(" is_day: este zi"));
    Ok(())
}

#[tokio::test]
async fn details_include_location_and_both_tables() -> anyhow::Result<()> {
    let geocode = FakeTransport::new(vec![(GEOCODING_URL, geocode_hit_body("Paris", 48.85, 2.35))]);
    let service = WeatherService::new(Arc::new(geocode), Arc::new(forecast_fake()));

    let details = service.details("Paris").await?;

    assert!(details.contains("Localitatea: Paris"));
    assert!(details.contains("temperature_2m"));
    assert!(details.contains("sunrise"));
    Ok(())
}

#[tokio::test]
async fn repeated_fetch_within_expiry_hits_the_network_once() -> anyhow::Result<()> {
    let dir = tempfile::TempDir::new()?;
    let cache = ResponseCache::open(dir.path())?;

    let geocode = FakeTransport::new(vec![(GEOCODING_URL, geocode_hit_body("Paris", 48.85, 2.35))]);
    let forecast = forecast_fake();
    let cached = CachedTransport::new(forecast.clone(), cache, Duration::from_secs(3600));
    let service = WeatherService::new(Arc::new(geocode.clone()), Arc::new(cached));

    let first = service.summary("Paris").await?;
    let second = service.summary("Paris").await?;

    assert_eq!(first, second);
    assert_eq!(forecast.call_count(), 1);
    // the resolved location is never cached across actions
    assert_eq!(geocode.call_count(), 2);
    Ok(())
}

#[tokio::test]
async fn day_chart_keeps_only_the_first_calendar_day() -> anyhow::Result<()> {
    let geocode = FakeTransport::new(vec![(GEOCODING_URL, geocode_hit_body("Paris", 48.85, 2.35))]);
    let forecast = FakeTransport::new(vec![(FORECAST_URL, forecast_hourly_body())]);
    let service = WeatherService::new(Arc::new(geocode), Arc::new(forecast.clone()));

    let series = service.day_chart("Paris").await?;

    assert_eq!(series.date.to_string(), "2026-08-07");
    assert_eq!(series.points.len(), 24);
    let (start, end) = series.range();
    assert_eq!(start.to_string(), "2026-08-07 00:00:00");
    assert_eq!((end - start).num_hours(), 24);
    // the chart issues its own narrower request
    let calls = forecast.calls();
    assert_eq!(calls.len(), 1);
    assert!(calls[0].contains("hourly=temperature_2m"));
    assert!(!calls[0].contains("daily="));
    Ok(())
}
