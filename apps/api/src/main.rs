//! Guildhall API composition root.

#![forbid(unsafe_code)]

mod api_config;
mod api_router;
mod api_services;
mod dev_seed;
mod dto;
mod error;
mod handlers;
mod middleware;
mod state;

use std::sync::Arc;

use guildhall_core::AppError;
use guildhall_domain::CapabilityMatrix;
use guildhall_infrastructure::InMemoryMemberDirectory;
use tracing::{info, warn};

use crate::api_config::{ApiConfig, init_tracing};

#[tokio::main]
async fn main() -> Result<(), AppError> {
    dotenvy::dotenv().ok();
    init_tracing();

    let config = ApiConfig::load()?;
    let matrix = Arc::new(CapabilityMatrix::standard());
    let escalation_paths = matrix.escalation_paths();
    if !escalation_paths.is_empty() {
        return Err(AppError::Internal(format!(
            "capability matrix allows assigning roles above the assigner: {escalation_paths:?}"
        )));
    }

    let app_state = match config.database_url.as_deref() {
        Some(database_url) => {
            let pool = api_services::connect_and_migrate(
                database_url,
                config.database_max_connections,
            )
            .await?;

            if config.migrate_only {
                info!("database migrations applied successfully");
                return Ok(());
            }

            api_services::build_postgres_app_state(pool, matrix)
        }
        None => {
            warn!("DATABASE_URL is not set; using in-memory member directory");
            let directory = Arc::new(InMemoryMemberDirectory::with_standard_catalog());
            dev_seed::run(&directory).await?;
            api_services::build_in_memory_app_state(directory, matrix)
        }
    };

    let app = api_router::build_router(app_state);

    let address = config.socket_address()?;
    let listener = tokio::net::TcpListener::bind(address)
        .await
        .map_err(|error| AppError::Internal(format!("failed to bind {address}: {error}")))?;

    info!(%address, "guildhall api listening");

    axum::serve(listener, app)
        .await
        .map_err(|error| AppError::Internal(format!("server error: {error}")))
}
