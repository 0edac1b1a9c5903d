//! syndic-cloud: property-management portal backend
//!
//! Long-running service that:
//! - Provisions and bills syndic (building manager) accounts
//! - Serves the admin, syndic, and resident portal APIs (JWT authenticated)
//! - Owns the SQLite database and its migrations

mod api;
mod auth;
mod config;
mod db;
mod error;
mod state;
mod util;

use config::Config;
use state::AppState;

type BoxError = Box<dyn std::error::Error + Send + Sync>;

#[tokio::main]
async fn main() -> Result<(), BoxError> {
    // Load .env file
    let _ = dotenvy::dotenv();

    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "syndic_cloud=info,tower_http=info".into()),
        )
        .init();

    let config = Config::from_env()?;

    tracing::info!("Starting syndic-cloud (env: {})", config.environment);

    // Initialize application state (pool, migrations, bootstrap admin)
    let state = AppState::new(&config).await?;

    let app = api::create_router(state);

    let http_addr = format!("0.0.0.0:{}", config.http_port);
    let listener = tokio::net::TcpListener::bind(&http_addr).await?;
    tracing::info!("syndic-cloud HTTP listening on {http_addr}");

    axum::serve(listener, app).await?;

    Ok(())
}
