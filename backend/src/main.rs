//! Car API entry-point: loads settings, wires adapters and serves HTTP.

mod server;

use std::net::{IpAddr, SocketAddr};
use std::sync::Arc;

use actix_web::web;
use mockable::DefaultClock;
use ortho_config::OrthoConfig;
use tracing::{info, warn};
use tracing_subscriber::{EnvFilter, fmt};

use car_api::domain::CarService;
use car_api::inbound::http::health::HealthState;
use car_api::inbound::http::state::HttpState;
use car_api::outbound::cache::{RedisCache, RedisCacheConfig};
use car_api::outbound::persistence::{DbPool, DieselCarRepository, PoolConfig};
use car_api::settings::AppSettings;
use server::{ServerConfig, create_server};

fn startup_error(context: &str, error: impl std::fmt::Display) -> std::io::Error {
    std::io::Error::other(format!("{context}: {error}"))
}

fn bind_addr(settings: &AppSettings) -> std::io::Result<SocketAddr> {
    let host: IpAddr = settings
        .host()
        .parse()
        .map_err(|e| startup_error("invalid bind host", e))?;
    Ok(SocketAddr::new(host, settings.port()))
}

/// Application bootstrap.
#[actix_web::main]
async fn main() -> std::io::Result<()> {
    if let Err(e) = fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .json()
        .try_init()
    {
        warn!(error = %e, "tracing init failed");
    }

    let settings = AppSettings::load().map_err(|e| startup_error("failed to load settings", e))?;
    let database_url = settings
        .database_url()
        .map_err(|e| startup_error("invalid settings", e))?;
    let cache_url = settings
        .cache_url()
        .map_err(|e| startup_error("invalid settings", e))?;

    let pool = DbPool::new(
        PoolConfig::new(database_url).with_max_size(settings.db_max_connections()),
    )
    .await
    .map_err(|e| startup_error("database pool", e))?;
    let cache = RedisCache::connect(RedisCacheConfig::new(cache_url))
        .await
        .map_err(|e| startup_error("cache pool", e))?;

    let service = CarService::new(
        Arc::new(DieselCarRepository::new(pool)),
        Arc::new(cache),
        Arc::new(DefaultClock),
        settings.service_settings(),
    );
    let config = ServerConfig::new(
        bind_addr(&settings)?,
        HttpState::from_service(Arc::new(service)),
    );

    let health_state = web::Data::new(HealthState::new());
    let server = create_server(health_state, config)?;
    info!(host = settings.host(), port = settings.port(), "car api listening");
    server.await
}
