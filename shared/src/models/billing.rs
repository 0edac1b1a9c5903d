//! Billing Models
//!
//! Provisioning input/output and the purchase record written when an admin
//! provisions a syndic.

use serde::{Deserialize, Serialize};

/// Provisioning input for a new syndic account
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewSyndic {
    pub full_name: String,
    pub email: String,
    pub phone: String,
    pub city_name: String,
    pub residence_name: String,
    pub address: Option<String>,
    pub subscription_id: i64,
}

/// Provisioning result; the default password is surfaced exactly once
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProvisionedSyndic {
    pub member_id: i64,
    pub default_password: String,
}

/// Purchase record (`admin_member_subscription` row)
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "db", derive(sqlx::FromRow))]
pub struct PurchaseRecord {
    pub id: i64,
    pub admin_id: i64,
    pub member_id: i64,
    pub subscription_id: i64,
    /// Plan price captured at purchase time, integer cents
    pub amount_cents: i64,
    pub payment_date: i64,
    pub created_at: i64,
}

/// Purchase lifecycle action applied to a syndic account
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PurchaseAction {
    /// Activate the syndic account; idempotent
    Process,
    /// Cascading deletion of the syndic and every row referencing it
    Cancel,
    /// Mark the syndic account refunded; rows remain
    Refund,
}

/// Syndic with residence and latest purchase info (for admin list views)
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "db", derive(sqlx::FromRow))]
pub struct SyndicSummary {
    pub id: i64,
    pub full_name: String,
    pub email: String,
    pub phone: Option<String>,
    pub status: String,
    pub residence_name: Option<String>,
    pub city_name: Option<String>,
    pub plan_name: Option<String>,
    pub amount_cents: Option<i64>,
    pub payment_date: Option<i64>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_purchase_action_serde_lowercase() {
        assert_eq!(
            serde_json::to_string(&PurchaseAction::Process).unwrap(),
            "\"process\""
        );
        assert_eq!(
            serde_json::to_string(&PurchaseAction::Cancel).unwrap(),
            "\"cancel\""
        );
        assert_eq!(
            serde_json::to_string(&PurchaseAction::Refund).unwrap(),
            "\"refund\""
        );

        let action: PurchaseAction = serde_json::from_str("\"refund\"").unwrap();
        assert_eq!(action, PurchaseAction::Refund);
    }

    #[test]
    fn test_purchase_action_rejects_unknown() {
        let result: Result<PurchaseAction, _> = serde_json::from_str("\"suspend\"");
        assert!(result.is_err());
    }
}
