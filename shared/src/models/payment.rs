//! Resident Payment Model

use serde::{Deserialize, Serialize};

/// Fee payment recorded by a syndic against a resident
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "db", derive(sqlx::FromRow))]
pub struct Payment {
    pub id: i64,
    pub member_id: i64,
    /// The syndic who recorded the payment
    pub recorded_by: i64,
    /// Amount in integer cents
    pub amount_cents: i64,
    /// Free-text label ("March fees", ...)
    pub label: String,
    pub paid_at: i64,
    pub created_at: i64,
}
