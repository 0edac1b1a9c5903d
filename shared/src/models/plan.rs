//! Subscription Plan Model
//!
//! The plan catalog (`subscription` table) is admin-managed. Prices are
//! integer cents.

use serde::{Deserialize, Serialize};

/// Subscription plan entity
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "db", derive(sqlx::FromRow))]
pub struct Plan {
    pub id: i64,
    pub name: String,
    pub description: Option<String>,
    /// Price in integer cents (299.00 is stored as 29900)
    pub price_cents: i64,
    pub duration_months: i64,
    /// Cap on residents per syndic under this plan
    pub max_residents: i64,
    /// Cap on apartments per syndic under this plan
    pub max_apartments: i64,
    pub is_active: bool,
    pub created_at: i64,
}

/// Create plan payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlanCreate {
    pub name: String,
    pub description: Option<String>,
    pub price_cents: i64,
    pub duration_months: i64,
    pub max_residents: i64,
    pub max_apartments: i64,
}

/// Update plan payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlanUpdate {
    pub name: Option<String>,
    pub description: Option<String>,
    pub price_cents: Option<i64>,
    pub duration_months: Option<i64>,
    pub max_residents: Option<i64>,
    pub max_apartments: Option<i64>,
    pub is_active: Option<bool>,
}
