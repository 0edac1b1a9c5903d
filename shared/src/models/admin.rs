//! Admin Model

use serde::{Deserialize, Serialize};

/// Platform administrator as exposed over the API (never carries the password hash)
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "db", derive(sqlx::FromRow))]
pub struct Admin {
    pub id: i64,
    pub full_name: String,
    pub email: String,
    pub created_at: i64,
}
