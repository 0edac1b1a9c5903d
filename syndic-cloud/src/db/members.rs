use shared::models::Member;
use sqlx::SqlitePool;

#[derive(sqlx::FromRow)]
pub struct MemberRow {
    pub id: i64,
    pub full_name: String,
    pub email: String,
    pub phone: Option<String>,
    pub password_hash: String,
    pub role: i64,
    pub status: String,
    pub created_at: i64,
    pub updated_at: i64,
}

impl MemberRow {
    /// API view of this row, without the password hash
    pub fn into_member(self) -> Member {
        Member {
            id: self.id,
            full_name: self.full_name,
            email: self.email,
            phone: self.phone,
            role: self.role,
            status: self.status,
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }
}

pub async fn find_by_email(
    pool: &SqlitePool,
    email: &str,
) -> Result<Option<MemberRow>, sqlx::Error> {
    sqlx::query_as("SELECT * FROM member WHERE email = $1")
        .bind(email)
        .fetch_optional(pool)
        .await
}

pub async fn find_by_id(pool: &SqlitePool, id: i64) -> Result<Option<MemberRow>, sqlx::Error> {
    sqlx::query_as("SELECT * FROM member WHERE id = $1")
        .bind(id)
        .fetch_optional(pool)
        .await
}

/// Insert a member row and return its id. The caller maps a UNIQUE violation
/// on email to the duplicate-email code.
#[allow(clippy::too_many_arguments)]
pub async fn create(
    pool: &SqlitePool,
    full_name: &str,
    email: &str,
    phone: Option<&str>,
    password_hash: &str,
    role: i64,
    status: &str,
    now: i64,
) -> Result<i64, sqlx::Error> {
    let (id,): (i64,) = sqlx::query_as(
        "INSERT INTO member (full_name, email, phone, password_hash, role, status, created_at, updated_at)
         VALUES ($1, $2, $3, $4, $5, $6, $7, $7)
         RETURNING id",
    )
    .bind(full_name)
    .bind(email)
    .bind(phone)
    .bind(password_hash)
    .bind(role)
    .bind(status)
    .bind(now)
    .fetch_one(pool)
    .await?;
    Ok(id)
}

/// Partial profile update; None fields keep their current value.
pub async fn update_profile(
    pool: &SqlitePool,
    id: i64,
    full_name: Option<&str>,
    phone: Option<&str>,
    now: i64,
) -> Result<(), sqlx::Error> {
    sqlx::query(
        "UPDATE member
         SET full_name = COALESCE($1, full_name),
             phone = COALESCE($2, phone),
             updated_at = $3
         WHERE id = $4",
    )
    .bind(full_name)
    .bind(phone)
    .bind(now)
    .bind(id)
    .execute(pool)
    .await?;
    Ok(())
}

pub async fn update_password(
    pool: &SqlitePool,
    id: i64,
    password_hash: &str,
    now: i64,
) -> Result<(), sqlx::Error> {
    sqlx::query("UPDATE member SET password_hash = $1, updated_at = $2 WHERE id = $3")
        .bind(password_hash)
        .bind(now)
        .bind(id)
        .execute(pool)
        .await?;
    Ok(())
}
