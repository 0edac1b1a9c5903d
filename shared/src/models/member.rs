//! Member Model
//!
//! A member is either a resident (role=1) or a syndic (role=2).

use serde::{Deserialize, Serialize};

/// Member entity as exposed over the API (never carries the password hash)
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "db", derive(sqlx::FromRow))]
pub struct Member {
    pub id: i64,
    pub full_name: String,
    pub email: String,
    pub phone: Option<String>,
    /// 1 = resident, 2 = syndic (see [`MemberRole`])
    pub role: i64,
    /// Lifecycle status string (see [`MemberStatus`])
    pub status: String,
    pub created_at: i64,
    pub updated_at: i64,
}

/// Member role, stored as an INTEGER column
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MemberRole {
    Resident,
    Syndic,
}

impl MemberRole {
    /// Parse from database integer value
    pub fn from_db(v: i64) -> Option<Self> {
        match v {
            1 => Some(Self::Resident),
            2 => Some(Self::Syndic),
            _ => None,
        }
    }

    /// Database integer representation
    pub fn as_db(&self) -> i64 {
        match self {
            Self::Resident => 1,
            Self::Syndic => 2,
        }
    }
}

/// Member lifecycle status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MemberStatus {
    /// Self-registered, awaiting activation by a syndic
    Pending,
    /// Fully active
    Active,
    /// Deactivated by a syndic
    Inactive,
    /// Purchase refunded (syndics only); terminal
    Refunded,
}

impl MemberStatus {
    /// Parse from database string value (lowercase)
    pub fn from_db(s: &str) -> Option<Self> {
        match s {
            "pending" => Some(Self::Pending),
            "active" => Some(Self::Active),
            "inactive" => Some(Self::Inactive),
            "refunded" => Some(Self::Refunded),
            _ => None,
        }
    }

    /// Database string representation (lowercase)
    pub fn as_db(&self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Active => "active",
            Self::Inactive => "inactive",
            Self::Refunded => "refunded",
        }
    }

    /// Can a member with this status log in?
    pub fn can_login(&self) -> bool {
        matches!(self, Self::Active)
    }
}
