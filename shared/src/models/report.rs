//! Report Models
//!
//! Aggregated views returned by the admin and syndic report endpoints.

use serde::{Deserialize, Serialize};

/// Platform overview for one admin
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AdminOverview {
    pub syndics_active: i64,
    pub syndics_pending: i64,
    pub syndics_refunded: i64,
    pub resident_count: i64,
    /// Total purchase revenue for this admin, integer cents
    pub revenue_cents: i64,
    pub purchase_count: i64,
}

/// One month of purchase revenue
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "db", derive(sqlx::FromRow))]
pub struct RevenueMonth {
    /// Month key in YYYY-MM format
    pub month: String,
    pub total_cents: i64,
    pub purchase_count: i64,
}

/// Activity overview for one syndic
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SyndicOverview {
    pub residence_count: i64,
    pub apartment_count: i64,
    pub resident_count: i64,
    pub announcement_count: i64,
    /// Total resident fees recorded by this syndic, integer cents
    pub payments_cents: i64,
}
