//! Backend entry-point: loads settings, prepares the asset store, and serves
//! the asset API.

mod server;

use std::net::SocketAddr;
use std::sync::Arc;

use actix_web::web;
use color_eyre::eyre::{Result, WrapErr, eyre};
use ortho_config::OrthoConfig;
use tracing::{info, warn};
use tracing_subscriber::{EnvFilter, fmt};

use server::{ServerConfig, create_server};
use smart_icon_backend::inbound::http::health::HealthState;
use smart_icon_backend::outbound::generation::HttpImageGenerator;
use smart_icon_backend::outbound::persistence::{
    DbPool, DieselAssetRepository, PoolConfig, run_pending_migrations,
};
use smart_icon_backend::settings::AppSettings;

#[actix_web::main]
async fn main() -> Result<()> {
    color_eyre::install()?;
    if let Err(e) = fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .json()
        .try_init()
    {
        warn!(error = %e, "tracing init failed");
    }

    let settings = AppSettings::load_from_iter(std::env::args_os())
        .map_err(|err| eyre!("failed to load settings: {err}"))?;
    info!(settings = ?settings, "settings loaded");

    let generator = HttpImageGenerator::new(
        settings.generation_endpoint()?,
        settings.api_key()?,
        settings.generation_timeout()?,
    )
    .wrap_err("failed to build the generation client")?;

    let database_uri = settings.database_uri()?;
    if settings.run_migrations() {
        run_pending_migrations(database_uri)
            .await
            .wrap_err("failed to apply database migrations")?;
    }
    let mut pool_config = PoolConfig::new(database_uri);
    if let Some(max_size) = settings.db_max_connections() {
        pool_config = pool_config.with_max_size(max_size);
    }
    if let Some(timeout) = settings.db_checkout_timeout()? {
        pool_config = pool_config.with_connection_timeout(timeout);
    }
    let pool = DbPool::new(pool_config)
        .await
        .wrap_err("failed to connect to the asset store")?;

    let (ip, port) = settings.bind_addr()?;
    let config = ServerConfig::new(
        SocketAddr::new(ip, port),
        Arc::new(DieselAssetRepository::new(pool)),
        Arc::new(generator),
    );

    let health_state = web::Data::new(HealthState::new());
    let server = create_server(health_state, config).wrap_err("failed to bind listener")?;
    server.await.wrap_err("server terminated with an error")
}
