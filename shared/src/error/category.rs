//! Error category classification

use super::codes::ErrorCode;

/// Error category derived from the numeric range of the code
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCategory {
    /// General errors (0xxx)
    General,
    /// Authentication errors (1xxx)
    Auth,
    /// Permission errors (2xxx)
    Permission,
    /// Account errors (3xxx)
    Account,
    /// Tenancy errors (4xxx)
    Tenancy,
    /// Billing errors (5xxx)
    Billing,
    /// Messaging errors (6xxx)
    Messaging,
    /// System errors (9xxx)
    System,
}

impl ErrorCategory {
    /// Classify a raw numeric code into its category
    pub fn from_code(code: u16) -> Self {
        match code {
            0..1000 => ErrorCategory::General,
            1000..2000 => ErrorCategory::Auth,
            2000..3000 => ErrorCategory::Permission,
            3000..4000 => ErrorCategory::Account,
            4000..5000 => ErrorCategory::Tenancy,
            5000..6000 => ErrorCategory::Billing,
            6000..7000 => ErrorCategory::Messaging,
            _ => ErrorCategory::System,
        }
    }

    /// Human-readable category name
    pub fn name(&self) -> &'static str {
        match self {
            ErrorCategory::General => "General",
            ErrorCategory::Auth => "Auth",
            ErrorCategory::Permission => "Permission",
            ErrorCategory::Account => "Account",
            ErrorCategory::Tenancy => "Tenancy",
            ErrorCategory::Billing => "Billing",
            ErrorCategory::Messaging => "Messaging",
            ErrorCategory::System => "System",
        }
    }
}

impl ErrorCode {
    /// Get the category of this error code
    pub fn category(&self) -> ErrorCategory {
        ErrorCategory::from_code(self.code())
    }
}
