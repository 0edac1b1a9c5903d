//! Messaging Models

use serde::{Deserialize, Serialize};

/// Directed message between two members
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "db", derive(sqlx::FromRow))]
pub struct Message {
    pub id: i64,
    pub sender_id: i64,
    pub receiver_id: i64,
    pub body: String,
    pub created_at: i64,
    /// Set when the receiver fetches the conversation
    pub read_at: Option<i64>,
}

/// Announcement broadcast by a syndic to one residence
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "db", derive(sqlx::FromRow))]
pub struct Announcement {
    pub id: i64,
    pub author_id: i64,
    pub residence_id: i64,
    pub title: String,
    pub body: String,
    pub created_at: i64,
}
