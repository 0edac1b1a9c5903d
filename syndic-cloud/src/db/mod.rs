//! Database access layer
//!
//! All SQL lives here. Single statements return `Result<_, sqlx::Error>`;
//! multi-table workflows run one transaction each and return `ServiceResult`.

pub mod admins;
pub mod announcements;
pub mod members;
pub mod messages;
pub mod payments;
pub mod plans;
pub mod provisioning;
pub mod reports;
pub mod residents;
pub mod settings;
pub mod tenancy;
