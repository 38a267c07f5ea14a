//! Request field violations.

use thiserror::Error;

/// A single invalid request field
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum InputViolation {
    #[error("{field} must be a positive integer (got {value})")]
    NotPositive { field: &'static str, value: i64 },

    #[error("{field} must be at most {max} (got {value})")]
    TooLarge {
        field: &'static str,
        value: i64,
        max: u32,
    },
}

impl InputViolation {
    /// Name of the offending field.
    pub fn field(&self) -> &'static str {
        match self {
            Self::NotPositive { field, .. } | Self::TooLarge { field, .. } => field,
        }
    }
}
