//! Resident administration (syndic surface)
//!
//! Residents only exist inside a syndic's residences; every operation here is
//! scoped through the caller's apartment rows so one syndic can never touch
//! another's residents.

use shared::error::{AppError, ErrorCode};
use shared::models::{Member, MemberRole, MemberStatus, NewResident};
use sqlx::SqlitePool;

use crate::error::{ServiceError, ServiceResult, is_unique_violation};
use crate::util::hash_password;

/// Residents living in the syndic's residences, newest first.
pub async fn list_for_syndic(
    pool: &SqlitePool,
    syndic_id: i64,
) -> Result<Vec<Member>, sqlx::Error> {
    sqlx::query_as(
        "SELECT DISTINCT m.id, m.full_name, m.email, m.phone, m.role, m.status,
                m.created_at, m.updated_at
         FROM member m
         JOIN apartment a ON a.member_id = m.id
         WHERE m.role = $2
           AND a.residence_id IN (SELECT residence_id FROM apartment WHERE member_id = $1)
         ORDER BY m.created_at DESC",
    )
    .bind(syndic_id)
    .bind(MemberRole::Resident.as_db())
    .fetch_all(pool)
    .await
}

/// Create a resident and their apartment in one transaction. Enforces the
/// residence-ownership guard and the caps of the syndic's latest plan before
/// inserting. Returns the new member id.
pub async fn create_resident(
    pool: &SqlitePool,
    syndic_id: i64,
    input: &NewResident,
    now: i64,
) -> ServiceResult<i64> {
    let mut tx = pool.begin().await?;

    let owns: Option<(i64,)> = sqlx::query_as(
        "SELECT 1 FROM apartment WHERE member_id = $1 AND residence_id = $2 LIMIT 1",
    )
    .bind(syndic_id)
    .bind(input.residence_id)
    .fetch_optional(&mut *tx)
    .await?;
    if owns.is_none() {
        return Err(AppError::new(ErrorCode::ResidenceAccessDenied).into());
    }

    // Caps come from the plan of the syndic's latest purchase.
    let caps: Option<(i64, i64)> = sqlx::query_as(
        "SELECT s.max_residents, s.max_apartments
         FROM admin_member_subscription p
         JOIN subscription s ON s.id = p.subscription_id
         WHERE p.member_id = $1
         ORDER BY p.payment_date DESC, p.id DESC
         LIMIT 1",
    )
    .bind(syndic_id)
    .fetch_optional(&mut *tx)
    .await?;
    let Some((max_residents, max_apartments)) = caps else {
        return Err(AppError::new(ErrorCode::PlanNotFound).into());
    };

    let (resident_count,): (i64,) = sqlx::query_as(
        "SELECT COUNT(DISTINCT a.member_id)
         FROM apartment a
         JOIN member m ON m.id = a.member_id
         WHERE m.role = $2
           AND a.residence_id IN (SELECT residence_id FROM apartment WHERE member_id = $1)",
    )
    .bind(syndic_id)
    .bind(MemberRole::Resident.as_db())
    .fetch_one(&mut *tx)
    .await?;
    if resident_count >= max_residents {
        return Err(AppError::with_message(
            ErrorCode::PlanLimitReached,
            "Resident limit reached for the current plan",
        )
        .into());
    }

    // The syndic's own placeholder rows do not count against the cap.
    let (apartment_count,): (i64,) = sqlx::query_as(
        "SELECT COUNT(*)
         FROM apartment a
         WHERE a.member_id != $1
           AND a.residence_id IN (SELECT residence_id FROM apartment WHERE member_id = $1)",
    )
    .bind(syndic_id)
    .fetch_one(&mut *tx)
    .await?;
    if apartment_count >= max_apartments {
        return Err(AppError::with_message(
            ErrorCode::PlanLimitReached,
            "Apartment limit reached for the current plan",
        )
        .into());
    }

    let password_hash = hash_password(&input.password)
        .map_err(|e| ServiceError::Db(format!("password hash failed: {e}").into()))?;

    let member: Result<(i64,), sqlx::Error> = sqlx::query_as(
        "INSERT INTO member (full_name, email, phone, password_hash, role, status, created_at, updated_at)
         VALUES ($1, $2, $3, $4, $5, $6, $7, $7)
         RETURNING id",
    )
    .bind(input.full_name.trim())
    .bind(&input.email)
    .bind(input.phone.as_deref())
    .bind(&password_hash)
    .bind(MemberRole::Resident.as_db())
    .bind(MemberStatus::Active.as_db())
    .bind(now)
    .fetch_one(&mut *tx)
    .await;
    let (member_id,) = match member {
        Ok(row) => row,
        Err(e) if is_unique_violation(&e) => {
            return Err(AppError::duplicate_email().into());
        }
        Err(e) => return Err(e.into()),
    };

    sqlx::query(
        "INSERT INTO apartment (residence_id, member_id, unit_type, floor, number, created_at)
         VALUES ($1, $2, $3, $4, $5, $6)",
    )
    .bind(input.residence_id)
    .bind(member_id)
    .bind(input.unit_type.trim())
    .bind(input.floor)
    .bind(input.number)
    .bind(now)
    .execute(&mut *tx)
    .await?;

    tx.commit().await?;

    tracing::info!(member_id, syndic_id, "Resident created");
    Ok(member_id)
}

/// Set a resident's status (active/inactive), scoped to the syndic's
/// residences.
pub async fn set_status(
    pool: &SqlitePool,
    syndic_id: i64,
    resident_id: i64,
    status: MemberStatus,
    now: i64,
) -> ServiceResult<()> {
    let result = sqlx::query(
        "UPDATE member SET status = $1, updated_at = $2
         WHERE id = $3 AND role = $4
           AND id IN (SELECT a.member_id FROM apartment a
                      WHERE a.residence_id IN
                          (SELECT residence_id FROM apartment WHERE member_id = $5))",
    )
    .bind(status.as_db())
    .bind(now)
    .bind(resident_id)
    .bind(MemberRole::Resident.as_db())
    .bind(syndic_id)
    .execute(pool)
    .await?;
    if result.rows_affected() == 0 {
        return Err(AppError::new(ErrorCode::MemberNotFound).into());
    }

    tracing::info!(resident_id, status = status.as_db(), "Resident status updated");
    Ok(())
}

/// Cascading deletion of a resident: messages, payments, apartments, then the
/// member row, all in one transaction. Zero rows on the final delete rolls
/// everything back.
pub async fn delete_resident(
    pool: &SqlitePool,
    syndic_id: i64,
    resident_id: i64,
) -> ServiceResult<()> {
    let mut tx = pool.begin().await?;

    let managed: Option<(i64,)> = sqlx::query_as(
        "SELECT 1 FROM apartment a
         JOIN member m ON m.id = a.member_id
         WHERE a.member_id = $2 AND m.role = $3
           AND a.residence_id IN (SELECT residence_id FROM apartment WHERE member_id = $1)
         LIMIT 1",
    )
    .bind(syndic_id)
    .bind(resident_id)
    .bind(MemberRole::Resident.as_db())
    .fetch_optional(&mut *tx)
    .await?;
    if managed.is_none() {
        return Err(AppError::new(ErrorCode::MemberNotFound).into());
    }

    sqlx::query("DELETE FROM member_messages WHERE sender_id = $1 OR receiver_id = $1")
        .bind(resident_id)
        .execute(&mut *tx)
        .await?;

    sqlx::query("DELETE FROM member_payments WHERE member_id = $1 OR recorded_by = $1")
        .bind(resident_id)
        .execute(&mut *tx)
        .await?;

    sqlx::query("DELETE FROM apartment WHERE member_id = $1")
        .bind(resident_id)
        .execute(&mut *tx)
        .await?;

    let result = sqlx::query("DELETE FROM member WHERE id = $1 AND role = $2")
        .bind(resident_id)
        .bind(MemberRole::Resident.as_db())
        .execute(&mut *tx)
        .await?;
    if result.rows_affected() == 0 {
        return Err(AppError::new(ErrorCode::MemberNotFound).into());
    }

    tx.commit().await?;

    tracing::info!(resident_id, syndic_id, "Resident deleted");
    Ok(())
}

/// Does this syndic manage that resident?
pub async fn syndic_manages_resident(
    pool: &SqlitePool,
    syndic_id: i64,
    resident_id: i64,
) -> Result<bool, sqlx::Error> {
    let row: Option<(i64,)> = sqlx::query_as(
        "SELECT 1 FROM apartment a
         JOIN member m ON m.id = a.member_id
         WHERE a.member_id = $2 AND m.role = $3
           AND a.residence_id IN (SELECT residence_id FROM apartment WHERE member_id = $1)
         LIMIT 1",
    )
    .bind(syndic_id)
    .bind(resident_id)
    .bind(MemberRole::Resident.as_db())
    .fetch_optional(pool)
    .await?;
    Ok(row.is_some())
}
