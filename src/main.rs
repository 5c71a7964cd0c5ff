//! HTTP server for the payroll calendar engine.
//!
//! Usage: `payroll-calendar [CONFIG_PATH]`. The configuration path defaults to
//! `$PAYROLL_CONFIG`, then `./config/payroll.yaml`.

use std::sync::Arc;

use payroll_calendar::api::{AppState, create_router};
use payroll_calendar::calendar::{CalendarSliceProvider, IsDayOffSource, MemoryCache};
use payroll_calendar::config::ConfigLoader;
use tracing::info;
use tracing_subscriber::EnvFilter;

const DEFAULT_CONFIG_PATH: &str = "./config/payroll.yaml";

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config_path = std::env::args()
        .nth(1)
        .or_else(|| std::env::var("PAYROLL_CONFIG").ok())
        .unwrap_or_else(|| DEFAULT_CONFIG_PATH.to_string());
    let config = ConfigLoader::load(&config_path)?;

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.server().log_level));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let source = Arc::new(IsDayOffSource::new(config.calendar()));
    let mut provider = CalendarSliceProvider::new(source);
    if config.calendar().cache_capacity > 0 {
        provider = provider.with_cache(Arc::new(MemoryCache::new(
            config.calendar().cache_capacity,
        )));
    }

    let bind = config.server().bind.clone();
    info!(
        config = %config_path,
        calendar = %config.calendar().base_url,
        bind = %bind,
        "Starting payroll calendar server"
    );

    let router = create_router(AppState::new(config, provider));
    let listener = tokio::net::TcpListener::bind(&bind).await?;
    axum::serve(listener, router).await?;

    Ok(())
}
