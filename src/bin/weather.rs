use atelier::WeatherService;
use atelier::weather::app;

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let service = WeatherService::open_default()?;
    let rt = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()?;

    app::run(service, rt).map_err(|e| anyhow::anyhow!("Window error: {e}"))?;
    Ok(())
}
