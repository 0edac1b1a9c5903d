//! Reporting aggregates for the admin and syndic dashboards

use shared::models::{AdminOverview, MemberRole, RevenueMonth, SyndicOverview};
use sqlx::SqlitePool;

/// Platform overview for one admin: syndic counts by status, residents under
/// management, and total purchase revenue.
pub async fn admin_overview(
    pool: &SqlitePool,
    admin_id: i64,
) -> Result<AdminOverview, sqlx::Error> {
    let (syndics_active, syndics_pending, syndics_refunded): (i64, i64, i64) = sqlx::query_as(
        "SELECT COALESCE(SUM(CASE WHEN m.status = 'active' THEN 1 ELSE 0 END), 0),
                COALESCE(SUM(CASE WHEN m.status = 'pending' THEN 1 ELSE 0 END), 0),
                COALESCE(SUM(CASE WHEN m.status = 'refunded' THEN 1 ELSE 0 END), 0)
         FROM admin_member_link l
         JOIN member m ON m.id = l.member_id
         WHERE l.admin_id = $1 AND m.role = $2",
    )
    .bind(admin_id)
    .bind(MemberRole::Syndic.as_db())
    .fetch_one(pool)
    .await?;

    let (resident_count,): (i64,) = sqlx::query_as(
        "SELECT COUNT(DISTINCT a.member_id)
         FROM apartment a
         JOIN member m ON m.id = a.member_id
         WHERE m.role = $2
           AND a.residence_id IN
               (SELECT residence_id FROM apartment
                WHERE member_id IN
                    (SELECT member_id FROM admin_member_link WHERE admin_id = $1))",
    )
    .bind(admin_id)
    .bind(MemberRole::Resident.as_db())
    .fetch_one(pool)
    .await?;

    let (revenue_cents, purchase_count): (i64, i64) = sqlx::query_as(
        "SELECT COALESCE(SUM(amount_cents), 0), COUNT(*)
         FROM admin_member_subscription
         WHERE admin_id = $1",
    )
    .bind(admin_id)
    .fetch_one(pool)
    .await?;

    Ok(AdminOverview {
        syndics_active,
        syndics_pending,
        syndics_refunded,
        resident_count,
        revenue_cents,
        purchase_count,
    })
}

/// Purchase revenue grouped by calendar month (`YYYY-MM` of payment_date).
pub async fn revenue_by_month(
    pool: &SqlitePool,
    admin_id: i64,
) -> Result<Vec<RevenueMonth>, sqlx::Error> {
    sqlx::query_as(
        "SELECT strftime('%Y-%m', payment_date / 1000, 'unixepoch') AS month,
                COALESCE(SUM(amount_cents), 0) AS total_cents,
                COUNT(*) AS purchase_count
         FROM admin_member_subscription
         WHERE admin_id = $1
         GROUP BY month
         ORDER BY month",
    )
    .bind(admin_id)
    .fetch_all(pool)
    .await
}

/// Dashboard counters for one syndic.
pub async fn syndic_overview(
    pool: &SqlitePool,
    syndic_id: i64,
) -> Result<SyndicOverview, sqlx::Error> {
    let (residence_count,): (i64,) =
        sqlx::query_as("SELECT COUNT(DISTINCT residence_id) FROM apartment WHERE member_id = $1")
            .bind(syndic_id)
            .fetch_one(pool)
            .await?;

    let (apartment_count,): (i64,) = sqlx::query_as(
        "SELECT COUNT(*)
         FROM apartment a
         WHERE a.member_id != $1
           AND a.residence_id IN (SELECT residence_id FROM apartment WHERE member_id = $1)",
    )
    .bind(syndic_id)
    .fetch_one(pool)
    .await?;

    let (resident_count,): (i64,) = sqlx::query_as(
        "SELECT COUNT(DISTINCT a.member_id)
         FROM apartment a
         JOIN member m ON m.id = a.member_id
         WHERE m.role = $2
           AND a.residence_id IN (SELECT residence_id FROM apartment WHERE member_id = $1)",
    )
    .bind(syndic_id)
    .bind(MemberRole::Resident.as_db())
    .fetch_one(pool)
    .await?;

    let (announcement_count,): (i64,) =
        sqlx::query_as("SELECT COUNT(*) FROM member_announcements WHERE author_id = $1")
            .bind(syndic_id)
            .fetch_one(pool)
            .await?;

    let (payments_cents,): (i64,) = sqlx::query_as(
        "SELECT COALESCE(SUM(amount_cents), 0) FROM member_payments WHERE recorded_by = $1",
    )
    .bind(syndic_id)
    .fetch_one(pool)
    .await?;

    Ok(SyndicOverview {
        residence_count,
        apartment_count,
        resident_count,
        announcement_count,
        payments_cents,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::{announcements, payments, provisioning, residents};
    use shared::models::{NewResident, NewSyndic, PurchaseAction};
    use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
    use std::str::FromStr;

    // 2025-01-01T00:00:00Z and 2025-02-01T00:00:00Z in Unix millis.
    const JAN: i64 = 1_735_689_600_000;
    const FEB: i64 = 1_738_368_000_000;

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

    async fn seed_admin(pool: &SqlitePool, email: &str) -> i64 {
        let (id,): (i64,) = sqlx::query_as(
            "INSERT INTO admin (full_name, email, password_hash, created_at)
             VALUES ('Admin', $1, 'x', 0)
             RETURNING id",
        )
        .bind(email)
        .fetch_one(pool)
        .await
        .unwrap();
        id
    }

    async fn seed_plan(pool: &SqlitePool, price_cents: i64) -> i64 {
        let (id,): (i64,) = sqlx::query_as(
            "INSERT INTO subscription
                 (name, description, price_cents, duration_months, max_residents, max_apartments, is_active, created_at)
             VALUES ('Standard', NULL, $1, 12, 50, 60, 1, 0)
             RETURNING id",
        )
        .bind(price_cents)
        .fetch_one(pool)
        .await
        .unwrap();
        id
    }

    async fn provision(
        pool: &SqlitePool,
        admin_id: i64,
        plan_id: i64,
        email: &str,
        now: i64,
    ) -> (i64, i64) {
        let input = NewSyndic {
            full_name: "Sam Syndic".to_string(),
            email: email.to_string(),
            phone: "0600000000".to_string(),
            city_name: "Casablanca".to_string(),
            residence_name: format!("Residence {email}"),
            address: None,
            subscription_id: plan_id,
        };
        let syndic_id = provisioning::provision_syndic(pool, admin_id, &input, now)
            .await
            .unwrap();
        let (residence_id,): (i64,) =
            sqlx::query_as("SELECT residence_id FROM apartment WHERE member_id = $1")
                .bind(syndic_id)
                .fetch_one(pool)
                .await
                .unwrap();
        (syndic_id, residence_id)
    }

    async fn add_resident(pool: &SqlitePool, syndic_id: i64, residence_id: i64, email: &str) -> i64 {
        let input = NewResident {
            full_name: "Rita Resident".to_string(),
            email: email.to_string(),
            phone: None,
            password: "resident-pass".to_string(),
            residence_id,
            unit_type: "T3".to_string(),
            floor: 2,
            number: 14,
        };
        residents::create_resident(pool, syndic_id, &input, 2000)
            .await
            .unwrap()
    }

    #[tokio::test]
    async fn test_admin_overview_scoped_to_one_admin() {
        let pool = test_pool().await;
        let plan = seed_plan(&pool, 29900).await;
        let admin = seed_admin(&pool, "a@x.com").await;
        let other = seed_admin(&pool, "b@x.com").await;

        let (active_id, residence) = provision(&pool, admin, plan, "s1@x.com", JAN).await;
        let (refunded_id, _) = provision(&pool, admin, plan, "s2@x.com", JAN).await;
        provisioning::transition_purchase(&pool, refunded_id, PurchaseAction::Refund, FEB)
            .await
            .unwrap();
        add_resident(&pool, active_id, residence, "r1@x.com").await;

        // Another admin's syndic must not leak into this overview.
        provision(&pool, other, plan, "s3@x.com", JAN).await;

        let overview = admin_overview(&pool, admin).await.unwrap();
        assert_eq!(overview.syndics_active, 1);
        assert_eq!(overview.syndics_pending, 0);
        assert_eq!(overview.syndics_refunded, 1);
        assert_eq!(overview.resident_count, 1);
        assert_eq!(overview.revenue_cents, 59800);
        assert_eq!(overview.purchase_count, 2);
    }

    #[tokio::test]
    async fn test_revenue_grouped_by_calendar_month() {
        let pool = test_pool().await;
        let plan = seed_plan(&pool, 29900).await;
        let admin = seed_admin(&pool, "a@x.com").await;

        provision(&pool, admin, plan, "s1@x.com", JAN).await;
        provision(&pool, admin, plan, "s2@x.com", JAN + 86_400_000).await;
        provision(&pool, admin, plan, "s3@x.com", FEB).await;

        let months = revenue_by_month(&pool, admin).await.unwrap();
        assert_eq!(months.len(), 2);
        assert_eq!(months[0].month, "2025-01");
        assert_eq!(months[0].total_cents, 59800);
        assert_eq!(months[0].purchase_count, 2);
        assert_eq!(months[1].month, "2025-02");
        assert_eq!(months[1].total_cents, 29900);
        assert_eq!(months[1].purchase_count, 1);
    }

    #[tokio::test]
    async fn test_syndic_overview_counts_activity() {
        let pool = test_pool().await;
        let plan = seed_plan(&pool, 29900).await;
        let admin = seed_admin(&pool, "a@x.com").await;
        let (syndic, residence) = provision(&pool, admin, plan, "s1@x.com", JAN).await;

        let rita = add_resident(&pool, syndic, residence, "r1@x.com").await;
        add_resident(&pool, syndic, residence, "r2@x.com").await;
        announcements::insert(&pool, syndic, residence, "Works", "Elevator down", 3000)
            .await
            .unwrap();
        payments::insert(&pool, rita, syndic, 5000, "January fees", 3000, 3000)
            .await
            .unwrap();
        payments::insert(&pool, rita, syndic, 7500, "February fees", 4000, 4000)
            .await
            .unwrap();

        let overview = syndic_overview(&pool, syndic).await.unwrap();
        assert_eq!(overview.residence_count, 1);
        // The syndic's own office unit is not counted as an apartment.
        assert_eq!(overview.apartment_count, 2);
        assert_eq!(overview.resident_count, 2);
        assert_eq!(overview.announcement_count, 1);
        assert_eq!(overview.payments_cents, 12500);
    }
}
