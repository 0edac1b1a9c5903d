//! Direct messages between members

use shared::models::Message;
use sqlx::SqlitePool;

pub async fn insert(
    pool: &SqlitePool,
    sender_id: i64,
    receiver_id: i64,
    body: &str,
    now: i64,
) -> Result<i64, sqlx::Error> {
    let (id,): (i64,) = sqlx::query_as(
        "INSERT INTO member_messages (sender_id, receiver_id, body, created_at)
         VALUES ($1, $2, $3, $4)
         RETURNING id",
    )
    .bind(sender_id)
    .bind(receiver_id)
    .bind(body)
    .bind(now)
    .fetch_one(pool)
    .await?;
    Ok(id)
}

/// Both directions of a conversation, oldest first. Fetching marks the other
/// party's unread messages as read.
pub async fn conversation(
    pool: &SqlitePool,
    member_id: i64,
    other_id: i64,
    now: i64,
) -> Result<Vec<Message>, sqlx::Error> {
    sqlx::query(
        "UPDATE member_messages SET read_at = $1
         WHERE receiver_id = $2 AND sender_id = $3 AND read_at IS NULL",
    )
    .bind(now)
    .bind(member_id)
    .bind(other_id)
    .execute(pool)
    .await?;

    sqlx::query_as(
        "SELECT id, sender_id, receiver_id, body, created_at, read_at
         FROM member_messages
         WHERE (sender_id = $1 AND receiver_id = $2)
            OR (sender_id = $2 AND receiver_id = $1)
         ORDER BY created_at ASC, id ASC",
    )
    .bind(member_id)
    .bind(other_id)
    .fetch_all(pool)
    .await
}

/// Messages received by a member, newest first. Does not mark anything read.
pub async fn inbox(pool: &SqlitePool, member_id: i64) -> Result<Vec<Message>, sqlx::Error> {
    sqlx::query_as(
        "SELECT id, sender_id, receiver_id, body, created_at, read_at
         FROM member_messages
         WHERE receiver_id = $1
         ORDER BY created_at DESC, id DESC",
    )
    .bind(member_id)
    .fetch_all(pool)
    .await
}
