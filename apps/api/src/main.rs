//! Employee roster API composition root.

#![forbid(unsafe_code)]

mod api_config;
mod api_router;
mod api_services;
mod dto;
mod error;
mod handlers;
mod state;

use roster_core::AppError;
use tracing::info;

use crate::api_config::{ApiConfig, StoreBackendConfig, init_tracing};
use crate::api_router::build_router;
use crate::api_services::{build_app_state, connect_and_migrate};

#[tokio::main]
async fn main() -> Result<(), AppError> {
    dotenvy::dotenv().ok();
    init_tracing();

    let config = ApiConfig::load()?;

    let pool = match &config.store {
        StoreBackendConfig::Postgres {
            database_url,
            max_connections,
        } => Some(connect_and_migrate(database_url, *max_connections).await?),
        StoreBackendConfig::Memory => {
            info!("using in-memory employee store; records are lost on shutdown");
            None
        }
    };

    if config.migrate_only {
        info!("database migrations applied successfully");
        return Ok(());
    }

    let app = build_router(build_app_state(pool), &config.frontend_url)?;
    let address = config.socket_address()?;

    let listener = tokio::net::TcpListener::bind(address)
        .await
        .map_err(|error| AppError::Internal(format!("failed to bind listener: {error}")))?;

    info!(%address, "roster-api listening");

    axum::serve(listener, app)
        .await
        .map_err(|error| AppError::Internal(format!("api server error: {error}")))
}
