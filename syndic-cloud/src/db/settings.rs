//! Site settings key-value store

use sqlx::SqlitePool;

#[derive(Debug, Clone, sqlx::FromRow, serde::Serialize)]
pub struct SettingRow {
    pub key: String,
    pub value: String,
    pub updated_at: i64,
}

pub async fn all(pool: &SqlitePool) -> Result<Vec<SettingRow>, sqlx::Error> {
    sqlx::query_as("SELECT key, value, updated_at FROM site_settings ORDER BY key")
        .fetch_all(pool)
        .await
}

pub async fn upsert(
    pool: &SqlitePool,
    key: &str,
    value: &str,
    now: i64,
) -> Result<(), sqlx::Error> {
    sqlx::query(
        "INSERT INTO site_settings (key, value, updated_at)
         VALUES ($1, $2, $3)
         ON CONFLICT(key) DO UPDATE SET value = $2, updated_at = $3",
    )
    .bind(key)
    .bind(value)
    .bind(now)
    .execute(pool)
    .await?;
    Ok(())
}
