//! Residence announcements

use shared::models::Announcement;
use sqlx::SqlitePool;

pub async fn insert(
    pool: &SqlitePool,
    author_id: i64,
    residence_id: i64,
    title: &str,
    body: &str,
    now: i64,
) -> Result<i64, sqlx::Error> {
    let (id,): (i64,) = sqlx::query_as(
        "INSERT INTO member_announcements (author_id, residence_id, title, body, created_at)
         VALUES ($1, $2, $3, $4, $5)
         RETURNING id",
    )
    .bind(author_id)
    .bind(residence_id)
    .bind(title)
    .bind(body)
    .bind(now)
    .fetch_one(pool)
    .await?;
    Ok(id)
}

/// Announcements authored by a syndic, newest first.
pub async fn by_author(
    pool: &SqlitePool,
    author_id: i64,
) -> Result<Vec<Announcement>, sqlx::Error> {
    sqlx::query_as(
        "SELECT id, author_id, residence_id, title, body, created_at
         FROM member_announcements
         WHERE author_id = $1
         ORDER BY created_at DESC, id DESC",
    )
    .bind(author_id)
    .fetch_all(pool)
    .await
}

/// Announcements for the residences a member lives in, newest first.
pub async fn for_member(
    pool: &SqlitePool,
    member_id: i64,
) -> Result<Vec<Announcement>, sqlx::Error> {
    sqlx::query_as(
        "SELECT id, author_id, residence_id, title, body, created_at
         FROM member_announcements
         WHERE residence_id IN (SELECT residence_id FROM apartment WHERE member_id = $1)
         ORDER BY created_at DESC, id DESC",
    )
    .bind(member_id)
    .fetch_all(pool)
    .await
}

#[cfg(test)]
mod tests {
    use super::*;
    use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
    use std::str::FromStr;

    async fn test_pool() -> SqlitePool {
        let opts = SqliteConnectOptions::from_str("sqlite::memory:")
            .unwrap()
            .foreign_keys(true);
        let pool = SqlitePoolOptions::new()
            .max_connections(1)
            .idle_timeout(None)
            .max_lifetime(None)
            .connect_with(opts)
            .await
            .unwrap();
        sqlx::migrate!("./migrations").run(&pool).await.unwrap();
        pool
    }

    async fn seed_member(pool: &SqlitePool, email: &str, role: i64) -> i64 {
        let (id,): (i64,) = sqlx::query_as(
            "INSERT INTO member (full_name, email, password_hash, role, status, created_at, updated_at)
             VALUES ('M', $1, 'x', $2, 'active', 0, 0)
             RETURNING id",
        )
        .bind(email)
        .bind(role)
        .fetch_one(pool)
        .await
        .unwrap();
        id
    }

    async fn seed_residence(pool: &SqlitePool, city: &str) -> i64 {
        let (city_id,): (i64,) =
            sqlx::query_as("INSERT INTO city (name) VALUES ($1) RETURNING id")
                .bind(city)
                .fetch_one(pool)
                .await
                .unwrap();
        let (id,): (i64,) = sqlx::query_as(
            "INSERT INTO residence (city_id, name, address, created_at)
             VALUES ($1, 'R', NULL, 0)
             RETURNING id",
        )
        .bind(city_id)
        .fetch_one(pool)
        .await
        .unwrap();
        id
    }

    async fn seed_apartment(pool: &SqlitePool, residence_id: i64, member_id: i64) {
        sqlx::query(
            "INSERT INTO apartment (residence_id, member_id, unit_type, floor, number, created_at)
             VALUES ($1, $2, 'T2', 1, 1, 0)",
        )
        .bind(residence_id)
        .bind(member_id)
        .execute(pool)
        .await
        .unwrap();
    }

    #[tokio::test]
    async fn test_member_sees_only_own_residence_announcements() {
        let pool = test_pool().await;
        let syndic_a = seed_member(&pool, "a@x.com", 2).await;
        let syndic_b = seed_member(&pool, "b@x.com", 2).await;
        let rita = seed_member(&pool, "rita@x.com", 1).await;

        let residence_a = seed_residence(&pool, "Casablanca").await;
        let residence_b = seed_residence(&pool, "Rabat").await;
        seed_apartment(&pool, residence_a, syndic_a).await;
        seed_apartment(&pool, residence_b, syndic_b).await;
        seed_apartment(&pool, residence_a, rita).await;

        insert(&pool, syndic_a, residence_a, "Works", "Elevator down", 1000)
            .await
            .unwrap();
        insert(&pool, syndic_b, residence_b, "Other", "Not for Rita", 2000)
            .await
            .unwrap();

        let visible = for_member(&pool, rita).await.unwrap();
        assert_eq!(visible.len(), 1);
        assert_eq!(visible[0].title, "Works");

        let authored = by_author(&pool, syndic_a).await.unwrap();
        assert_eq!(authored.len(), 1);
        assert_eq!(authored[0].residence_id, residence_a);
    }

    #[tokio::test]
    async fn test_for_member_newest_first() {
        let pool = test_pool().await;
        let syndic = seed_member(&pool, "s@x.com", 2).await;
        let rita = seed_member(&pool, "rita@x.com", 1).await;
        let residence = seed_residence(&pool, "Casablanca").await;
        seed_apartment(&pool, residence, syndic).await;
        seed_apartment(&pool, residence, rita).await;

        insert(&pool, syndic, residence, "Old", "b", 1000).await.unwrap();
        insert(&pool, syndic, residence, "New", "b", 2000).await.unwrap();

        let visible = for_member(&pool, rita).await.unwrap();
        assert_eq!(visible[0].title, "New");
        assert_eq!(visible[1].title, "Old");
    }
}
