//! Resident fee payments recorded by syndics

use shared::models::Payment;
use sqlx::SqlitePool;

pub async fn insert(
    pool: &SqlitePool,
    member_id: i64,
    recorded_by: i64,
    amount_cents: i64,
    label: &str,
    paid_at: i64,
    now: i64,
) -> Result<i64, sqlx::Error> {
    let (id,): (i64,) = sqlx::query_as(
        "INSERT INTO member_payments (member_id, recorded_by, amount_cents, label, paid_at, created_at)
         VALUES ($1, $2, $3, $4, $5, $6)
         RETURNING id",
    )
    .bind(member_id)
    .bind(recorded_by)
    .bind(amount_cents)
    .bind(label)
    .bind(paid_at)
    .bind(now)
    .fetch_one(pool)
    .await?;
    Ok(id)
}

/// Payments recorded by a syndic, newest first.
pub async fn by_recorder(
    pool: &SqlitePool,
    recorded_by: i64,
) -> Result<Vec<Payment>, sqlx::Error> {
    sqlx::query_as(
        "SELECT id, member_id, recorded_by, amount_cents, label, paid_at, created_at
         FROM member_payments
         WHERE recorded_by = $1
         ORDER BY paid_at DESC, id DESC",
    )
    .bind(recorded_by)
    .fetch_all(pool)
    .await
}

/// Payments of a single member, newest first.
pub async fn by_member(pool: &SqlitePool, member_id: i64) -> Result<Vec<Payment>, sqlx::Error> {
    sqlx::query_as(
        "SELECT id, member_id, recorded_by, amount_cents, label, paid_at, created_at
         FROM member_payments
         WHERE member_id = $1
         ORDER BY paid_at DESC, id DESC",
    )
    .bind(member_id)
    .fetch_all(pool)
    .await
}
