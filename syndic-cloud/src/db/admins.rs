use sqlx::SqlitePool;

#[derive(sqlx::FromRow)]
pub struct AdminRow {
    pub id: i64,
    pub full_name: String,
    pub email: String,
    pub password_hash: String,
    pub created_at: i64,
}

pub async fn find_by_email(pool: &SqlitePool, email: &str) -> Result<Option<AdminRow>, sqlx::Error> {
    sqlx::query_as("SELECT * FROM admin WHERE email = $1")
        .bind(email)
        .fetch_optional(pool)
        .await
}

pub async fn find_by_id(pool: &SqlitePool, id: i64) -> Result<Option<AdminRow>, sqlx::Error> {
    sqlx::query_as("SELECT * FROM admin WHERE id = $1")
        .bind(id)
        .fetch_optional(pool)
        .await
}
