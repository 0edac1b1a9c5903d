//! Residence Models
//!
//! City, residence, and apartment rows. A residence belongs to a city; an
//! apartment links a member to a residence.

use serde::{Deserialize, Serialize};

/// City entity, created lazily on first reference during provisioning
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "db", derive(sqlx::FromRow))]
pub struct City {
    pub id: i64,
    pub name: String,
}

/// Residence entity
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "db", derive(sqlx::FromRow))]
pub struct Residence {
    pub id: i64,
    pub city_id: i64,
    pub name: String,
    pub address: Option<String>,
    pub created_at: i64,
}

/// Apartment entity linking a member to a residence
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "db", derive(sqlx::FromRow))]
pub struct Apartment {
    pub id: i64,
    pub residence_id: i64,
    pub member_id: i64,
    /// "office" for the syndic placeholder, caller-provided otherwise
    pub unit_type: String,
    pub floor: i64,
    pub number: i64,
    pub created_at: i64,
}

/// Residence with occupancy counts (for syndic list views)
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "db", derive(sqlx::FromRow))]
pub struct ResidenceSummary {
    pub id: i64,
    pub name: String,
    pub address: Option<String>,
    pub city_name: String,
    pub apartment_count: i64,
    pub resident_count: i64,
}

/// Input for creating a resident together with their apartment
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewResident {
    pub full_name: String,
    pub email: String,
    pub phone: Option<String>,
    pub password: String,
    pub residence_id: i64,
    pub unit_type: String,
    pub floor: i64,
    pub number: i64,
}
