//! Residence scoping queries
//!
//! A syndic's scope is the set of residences it holds an apartment in
//! (including the placeholder office row created at provisioning). Every
//! syndic-surface query goes through these helpers.

use shared::models::{MemberRole, ResidenceSummary};
use sqlx::SqlitePool;

/// Residences the syndic manages, with apartment and resident counts.
/// The syndic's own placeholder apartment is not counted.
pub async fn residences_for_syndic(
    pool: &SqlitePool,
    syndic_id: i64,
) -> Result<Vec<ResidenceSummary>, sqlx::Error> {
    sqlx::query_as(
        "SELECT r.id, r.name, r.address, c.name AS city_name,
                (SELECT COUNT(*) FROM apartment a
                 WHERE a.residence_id = r.id AND a.member_id != $1) AS apartment_count,
                (SELECT COUNT(DISTINCT a.member_id) FROM apartment a
                 JOIN member m ON m.id = a.member_id
                 WHERE a.residence_id = r.id AND m.role = $2) AS resident_count
         FROM residence r
         JOIN city c ON c.id = r.city_id
         WHERE r.id IN (SELECT residence_id FROM apartment WHERE member_id = $1)
         ORDER BY r.name",
    )
    .bind(syndic_id)
    .bind(MemberRole::Resident.as_db())
    .fetch_all(pool)
    .await
}

/// Does the syndic hold an apartment in this residence?
pub async fn owns_residence(
    pool: &SqlitePool,
    syndic_id: i64,
    residence_id: i64,
) -> Result<bool, sqlx::Error> {
    let row: Option<(i64,)> = sqlx::query_as(
        "SELECT 1 FROM apartment WHERE member_id = $1 AND residence_id = $2 LIMIT 1",
    )
    .bind(syndic_id)
    .bind(residence_id)
    .fetch_optional(pool)
    .await?;
    Ok(row.is_some())
}
