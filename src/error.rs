//! Error types for Calorie Counter
//!
//! Only genuine failures live here. An empty query or a query with no
//! matches is a normal search outcome, see [`crate::search::SearchOutcome`].

use thiserror::Error;

/// Main error type for Calorie Counter operations
#[derive(Error, Debug)]
pub enum CalorieError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Failed to parse config '{0}': {1}")]
    ConfigParseError(String, serde_json::Error),

    #[error("Invalid config value for '{field}': {reason}")]
    InvalidConfig { field: &'static str, reason: String },

    #[error("Invalid search pattern '{0}': {1}")]
    PatternError(String, regex::Error),

    #[error("Food id {0} is not a positive integer")]
    InvalidId(u32),

    #[error("Duplicate food id {0} in catalog")]
    DuplicateId(u32),

    #[error("Food {id} has an empty {field}")]
    EmptyField { id: u32, field: &'static str },
}

/// Result type alias for Calorie Counter operations
pub type Result<T> = std::result::Result<T, CalorieError>;

impl CalorieError {
    /// Check if this error only affects a single search (the session can continue)
    pub fn is_recoverable(&self) -> bool {
        matches!(self, CalorieError::PatternError(_, _))
    }
}
