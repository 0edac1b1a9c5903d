use shared::models::{Plan, PlanCreate, PlanUpdate};
use sqlx::SqlitePool;

pub async fn list(pool: &SqlitePool) -> Result<Vec<Plan>, sqlx::Error> {
    sqlx::query_as("SELECT * FROM subscription ORDER BY price_cents, id")
        .fetch_all(pool)
        .await
}

pub async fn find_by_id(pool: &SqlitePool, id: i64) -> Result<Option<Plan>, sqlx::Error> {
    sqlx::query_as("SELECT * FROM subscription WHERE id = $1")
        .bind(id)
        .fetch_optional(pool)
        .await
}

pub async fn create(pool: &SqlitePool, plan: &PlanCreate, now: i64) -> Result<i64, sqlx::Error> {
    let (id,): (i64,) = sqlx::query_as(
        "INSERT INTO subscription
             (name, description, price_cents, duration_months, max_residents, max_apartments, is_active, created_at)
         VALUES ($1, $2, $3, $4, $5, $6, 1, $7)
         RETURNING id",
    )
    .bind(&plan.name)
    .bind(plan.description.as_deref())
    .bind(plan.price_cents)
    .bind(plan.duration_months)
    .bind(plan.max_residents)
    .bind(plan.max_apartments)
    .bind(now)
    .fetch_one(pool)
    .await?;
    Ok(id)
}

/// Partial update; None fields keep their current value. Returns false when
/// the plan does not exist.
pub async fn update(pool: &SqlitePool, id: i64, patch: &PlanUpdate) -> Result<bool, sqlx::Error> {
    let result = sqlx::query(
        "UPDATE subscription
         SET name = COALESCE($1, name),
             description = COALESCE($2, description),
             price_cents = COALESCE($3, price_cents),
             duration_months = COALESCE($4, duration_months),
             max_residents = COALESCE($5, max_residents),
             max_apartments = COALESCE($6, max_apartments),
             is_active = COALESCE($7, is_active)
         WHERE id = $8",
    )
    .bind(patch.name.as_deref())
    .bind(patch.description.as_deref())
    .bind(patch.price_cents)
    .bind(patch.duration_months)
    .bind(patch.max_residents)
    .bind(patch.max_apartments)
    .bind(patch.is_active)
    .bind(id)
    .execute(pool)
    .await?;
    Ok(result.rows_affected() > 0)
}

/// Number of purchase records referencing a plan; deletion is rejected with
/// this count while it is non-zero.
pub async fn purchase_count(pool: &SqlitePool, plan_id: i64) -> Result<i64, sqlx::Error> {
    let (count,): (i64,) =
        sqlx::query_as("SELECT COUNT(*) FROM admin_member_subscription WHERE subscription_id = $1")
            .bind(plan_id)
            .fetch_one(pool)
            .await?;
    Ok(count)
}

/// Returns false when the plan does not exist.
pub async fn delete(pool: &SqlitePool, id: i64) -> Result<bool, sqlx::Error> {
    let result = sqlx::query("DELETE FROM subscription WHERE id = $1")
        .bind(id)
        .execute(pool)
        .await?;
    Ok(result.rows_affected() > 0)
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

    fn basic_plan() -> PlanCreate {
        PlanCreate {
            name: "Basic".to_string(),
            description: Some("Starter tier".to_string()),
            price_cents: 29900,
            duration_months: 12,
            max_residents: 50,
            max_apartments: 60,
        }
    }

    #[tokio::test]
    async fn test_create_and_fetch() {
        let pool = test_pool().await;
        let id = create(&pool, &basic_plan(), 1000).await.unwrap();

        let plan = find_by_id(&pool, id).await.unwrap().unwrap();
        assert_eq!(plan.name, "Basic");
        assert_eq!(plan.price_cents, 29900);
        assert_eq!(plan.max_apartments, 60);
        assert!(plan.is_active);
        assert_eq!(plan.created_at, 1000);
    }

    #[tokio::test]
    async fn test_list_orders_by_price() {
        let pool = test_pool().await;
        let mut premium = basic_plan();
        premium.name = "Premium".to_string();
        premium.price_cents = 59900;
        create(&pool, &premium, 1000).await.unwrap();
        create(&pool, &basic_plan(), 1000).await.unwrap();

        let plans = list(&pool).await.unwrap();
        assert_eq!(plans.len(), 2);
        assert_eq!(plans[0].name, "Basic");
        assert_eq!(plans[1].name, "Premium");
    }

    #[tokio::test]
    async fn test_partial_update_keeps_other_fields() {
        let pool = test_pool().await;
        let id = create(&pool, &basic_plan(), 1000).await.unwrap();

        let patch = PlanUpdate {
            name: None,
            description: None,
            price_cents: Some(34900),
            duration_months: None,
            max_residents: None,
            max_apartments: None,
            is_active: Some(false),
        };
        assert!(update(&pool, id, &patch).await.unwrap());

        let plan = find_by_id(&pool, id).await.unwrap().unwrap();
        assert_eq!(plan.price_cents, 34900);
        assert!(!plan.is_active);
        assert_eq!(plan.name, "Basic");
        assert_eq!(plan.max_residents, 50);
        assert_eq!(plan.duration_months, 12);
    }

    #[tokio::test]
    async fn test_update_missing_plan_returns_false() {
        let pool = test_pool().await;
        let patch = PlanUpdate {
            name: Some("Ghost".to_string()),
            description: None,
            price_cents: None,
            duration_months: None,
            max_residents: None,
            max_apartments: None,
            is_active: None,
        };
        assert!(!update(&pool, 9999, &patch).await.unwrap());
    }

    #[tokio::test]
    async fn test_delete_and_purchase_count() {
        let pool = test_pool().await;
        let id = create(&pool, &basic_plan(), 1000).await.unwrap();
        assert_eq!(purchase_count(&pool, id).await.unwrap(), 0);

        assert!(delete(&pool, id).await.unwrap());
        assert!(!delete(&pool, id).await.unwrap());
        assert!(find_by_id(&pool, id).await.unwrap().is_none());
    }
}
