//! Application state for syndic-cloud

use std::str::FromStr;
use std::time::Duration;

use sqlx::SqlitePool;
use sqlx::sqlite::{SqliteConnectOptions, SqliteJournalMode};

use crate::config::Config;
use crate::util::hash_password;

type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    /// SQLite connection pool
    pub pool: SqlitePool,
    /// JWT secret for bearer-token authentication
    pub jwt_secret: String,
}

impl AppState {
    /// Create a new AppState
    pub async fn new(config: &Config) -> Result<Self, BoxError> {
        let opts = SqliteConnectOptions::from_str(&config.database_url)?
            .create_if_missing(true)
            .journal_mode(SqliteJournalMode::Wal)
            .busy_timeout(Duration::from_secs(5))
            .foreign_keys(true);

        let pool = SqlitePool::connect_with(opts).await?;

        sqlx::migrate!("./migrations").run(&pool).await?;

        ensure_bootstrap_admin(&pool, config).await?;
        tracing::info!("Bootstrap admin ready");

        Ok(Self {
            pool,
            jwt_secret: config.jwt_secret.clone(),
        })
    }
}

/// Insert the configured bootstrap admin on first start; no-op afterwards.
async fn ensure_bootstrap_admin(pool: &SqlitePool, config: &Config) -> Result<(), BoxError> {
    let email = config.admin_email.trim().to_lowercase();

    let existing: Option<(i64,)> = sqlx::query_as("SELECT id FROM admin WHERE email = $1")
        .bind(&email)
        .fetch_optional(pool)
        .await?;
    if existing.is_some() {
        return Ok(());
    }

    let hash = hash_password(&config.admin_password)
        .map_err(|e| format!("failed to hash bootstrap admin password: {e}"))?;

    sqlx::query(
        "INSERT INTO admin (full_name, email, password_hash, created_at)
         VALUES ($1, $2, $3, $4)",
    )
    .bind(&config.admin_name)
    .bind(&email)
    .bind(&hash)
    .bind(shared::util::now_millis())
    .execute(pool)
    .await?;

    tracing::info!(email = %email, "Bootstrap admin created");
    Ok(())
}
