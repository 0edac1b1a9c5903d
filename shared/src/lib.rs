//! Shared types for the syndic platform
//!
//! Common types used across crates: the error-code system, API response
//! envelope, domain models, and small utilities.

pub mod error;
pub mod models;
pub mod util;

// Re-exports
pub use axum::{Json, body};
pub use http;
pub use serde::{Deserialize, Serialize};
