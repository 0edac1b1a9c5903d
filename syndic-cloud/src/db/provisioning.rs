//! Syndic account lifecycle workflows
//!
//! Each workflow runs in a single transaction; any early return drops the
//! transaction and rolls back every statement, so no partial state is ever
//! visible to other connections.

use shared::error::{AppError, ErrorCode};
use shared::models::{MemberRole, MemberStatus, NewSyndic, PurchaseAction, SyndicSummary};
use sqlx::SqlitePool;

use crate::error::{ServiceError, ServiceResult, is_unique_violation};
use crate::util::{DEFAULT_SYNDIC_PASSWORD, hash_password};

/// Provision a syndic account: plan lookup, city reuse-or-create, residence,
/// member (role=2, active, default password), placeholder apartment,
/// admin/member link, purchase record. Returns the new member id.
pub async fn provision_syndic(
    pool: &SqlitePool,
    admin_id: i64,
    input: &NewSyndic,
    now: i64,
) -> ServiceResult<i64> {
    let mut tx = pool.begin().await?;

    // Plan must exist and be active; its current price is captured below.
    let plan: Option<(i64,)> =
        sqlx::query_as("SELECT price_cents FROM subscription WHERE id = $1 AND is_active = 1")
            .bind(input.subscription_id)
            .fetch_optional(&mut *tx)
            .await?;
    let Some((price_cents,)) = plan else {
        return Err(AppError::new(ErrorCode::PlanNotFound).into());
    };

    // City: exact-name reuse, insert on miss.
    let city_name = input.city_name.trim();
    let city: Option<(i64,)> = sqlx::query_as("SELECT id FROM city WHERE name = $1")
        .bind(city_name)
        .fetch_optional(&mut *tx)
        .await?;
    let city_id = match city {
        Some((id,)) => id,
        None => {
            let (id,): (i64,) =
                sqlx::query_as("INSERT INTO city (name) VALUES ($1) RETURNING id")
                    .bind(city_name)
                    .fetch_one(&mut *tx)
                    .await?;
            id
        }
    };

    let (residence_id,): (i64,) = sqlx::query_as(
        "INSERT INTO residence (city_id, name, address, created_at)
         VALUES ($1, $2, $3, $4)
         RETURNING id",
    )
    .bind(city_id)
    .bind(input.residence_name.trim())
    .bind(input.address.as_deref())
    .bind(now)
    .fetch_one(&mut *tx)
    .await?;

    let password_hash = hash_password(DEFAULT_SYNDIC_PASSWORD)
        .map_err(|e| ServiceError::Db(format!("password hash failed: {e}").into()))?;

    // The UNIQUE constraint on member.email is the authoritative duplicate
    // signal; violating it aborts the whole transaction, city and residence
    // rows included.
    let member: Result<(i64,), sqlx::Error> = sqlx::query_as(
        "INSERT INTO member (full_name, email, phone, password_hash, role, status, created_at, updated_at)
         VALUES ($1, $2, $3, $4, $5, $6, $7, $7)
         RETURNING id",
    )
    .bind(input.full_name.trim())
    .bind(&input.email)
    .bind(input.phone.trim())
    .bind(&password_hash)
    .bind(MemberRole::Syndic.as_db())
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

    // Placeholder office apartment linking the syndic to the residence.
    sqlx::query(
        "INSERT INTO apartment (residence_id, member_id, unit_type, floor, number, created_at)
         VALUES ($1, $2, 'office', 0, 0, $3)",
    )
    .bind(residence_id)
    .bind(member_id)
    .bind(now)
    .execute(&mut *tx)
    .await?;

    sqlx::query(
        "INSERT INTO admin_member_link (admin_id, member_id, created_at)
         VALUES ($1, $2, $3)",
    )
    .bind(admin_id)
    .bind(member_id)
    .bind(now)
    .execute(&mut *tx)
    .await?;

    sqlx::query(
        "INSERT INTO admin_member_subscription
             (admin_id, member_id, subscription_id, amount_cents, payment_date, created_at)
         VALUES ($1, $2, $3, $4, $5, $5)",
    )
    .bind(admin_id)
    .bind(member_id)
    .bind(input.subscription_id)
    .bind(price_cents)
    .bind(now)
    .execute(&mut *tx)
    .await?;

    tx.commit().await?;

    tracing::info!(member_id, admin_id, "Syndic provisioned");
    Ok(member_id)
}

/// Cascading deletion of a syndic: every row referencing the member goes in
/// dependency order, then the member row itself, guarded by role=2. If the
/// final delete matches zero rows (unknown id, or a resident id) the whole
/// transaction rolls back and nothing is deleted.
pub async fn delete_syndic(pool: &SqlitePool, member_id: i64) -> ServiceResult<()> {
    let mut tx = pool.begin().await?;

    sqlx::query("DELETE FROM member_messages WHERE sender_id = $1 OR receiver_id = $1")
        .bind(member_id)
        .execute(&mut *tx)
        .await?;

    sqlx::query("DELETE FROM member_announcements WHERE author_id = $1")
        .bind(member_id)
        .execute(&mut *tx)
        .await?;

    sqlx::query("DELETE FROM member_payments WHERE member_id = $1 OR recorded_by = $1")
        .bind(member_id)
        .execute(&mut *tx)
        .await?;

    sqlx::query("DELETE FROM admin_member_subscription WHERE member_id = $1")
        .bind(member_id)
        .execute(&mut *tx)
        .await?;

    sqlx::query("DELETE FROM admin_member_link WHERE member_id = $1")
        .bind(member_id)
        .execute(&mut *tx)
        .await?;

    sqlx::query("DELETE FROM apartment WHERE member_id = $1")
        .bind(member_id)
        .execute(&mut *tx)
        .await?;

    let result = sqlx::query("DELETE FROM member WHERE id = $1 AND role = $2")
        .bind(member_id)
        .bind(MemberRole::Syndic.as_db())
        .execute(&mut *tx)
        .await?;
    if result.rows_affected() == 0 {
        // Dropping the transaction rolls back the dependent deletes above.
        return Err(AppError::new(ErrorCode::MemberNotFound).into());
    }

    tx.commit().await?;

    tracing::info!(member_id, "Syndic deleted");
    Ok(())
}

/// Apply a purchase lifecycle action to a syndic account.
pub async fn transition_purchase(
    pool: &SqlitePool,
    member_id: i64,
    action: PurchaseAction,
    now: i64,
) -> ServiceResult<()> {
    match action {
        // Idempotent: re-activating an active syndic matches the row and
        // leaves it active.
        PurchaseAction::Process => {
            set_syndic_status(pool, member_id, MemberStatus::Active, now).await
        }
        PurchaseAction::Cancel => delete_syndic(pool, member_id).await,
        PurchaseAction::Refund => {
            set_syndic_status(pool, member_id, MemberStatus::Refunded, now).await
        }
    }
}

async fn set_syndic_status(
    pool: &SqlitePool,
    member_id: i64,
    status: MemberStatus,
    now: i64,
) -> ServiceResult<()> {
    let result =
        sqlx::query("UPDATE member SET status = $1, updated_at = $2 WHERE id = $3 AND role = $4")
            .bind(status.as_db())
            .bind(now)
            .bind(member_id)
            .bind(MemberRole::Syndic.as_db())
            .execute(pool)
            .await?;
    if result.rows_affected() == 0 {
        return Err(AppError::new(ErrorCode::MemberNotFound).into());
    }

    tracing::info!(member_id, status = status.as_db(), "Syndic status updated");
    Ok(())
}

/// Does this admin manage that syndic?
pub async fn admin_manages(
    pool: &SqlitePool,
    admin_id: i64,
    member_id: i64,
) -> Result<bool, sqlx::Error> {
    let row: Option<(i64,)> = sqlx::query_as(
        "SELECT 1 FROM admin_member_link WHERE admin_id = $1 AND member_id = $2",
    )
    .bind(admin_id)
    .bind(member_id)
    .fetch_optional(pool)
    .await?;
    Ok(row.is_some())
}

/// Syndics managed by an admin, joined with their residence, city, and
/// latest purchase.
pub async fn list_for_admin(
    pool: &SqlitePool,
    admin_id: i64,
) -> Result<Vec<SyndicSummary>, sqlx::Error> {
    sqlx::query_as(
        "SELECT m.id, m.full_name, m.email, m.phone, m.status,
                r.name AS residence_name, c.name AS city_name,
                s.name AS plan_name, p.amount_cents, p.payment_date
         FROM admin_member_link l
         JOIN member m ON m.id = l.member_id
         LEFT JOIN apartment a ON a.member_id = m.id AND a.unit_type = 'office'
         LEFT JOIN residence r ON r.id = a.residence_id
         LEFT JOIN city c ON c.id = r.city_id
         LEFT JOIN admin_member_subscription p ON p.id =
             (SELECT id FROM admin_member_subscription
              WHERE member_id = m.id
              ORDER BY payment_date DESC, id DESC
              LIMIT 1)
         LEFT JOIN subscription s ON s.id = p.subscription_id
         WHERE l.admin_id = $1 AND m.role = $2
         ORDER BY m.created_at DESC",
    )
    .bind(admin_id)
    .bind(MemberRole::Syndic.as_db())
    .fetch_all(pool)
    .await
}
