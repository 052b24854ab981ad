use std::fmt;

/// Result type for value-object factories
pub type Result<T> = std::result::Result<T, ValidationError>;

/// A backend-provided value that does not map to a valid domain value
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// `operationtype` code outside the known set
    UnknownOperationType(i64),

    /// `mode` code outside the known set
    UnknownExecutionMode(i64),

    /// Execution duration below zero milliseconds
    NegativeDuration(i64),

    /// Nesting depth below zero
    NegativeDepth(i64),
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValidationError::UnknownOperationType(code) => {
                write!(f, "Unknown operation type code: {}", code)
            }
            ValidationError::UnknownExecutionMode(code) => {
                write!(f, "Unknown execution mode code: {}", code)
            }
            ValidationError::NegativeDuration(ms) => {
                write!(f, "Duration must not be negative: {}ms", ms)
            }
            ValidationError::NegativeDepth(depth) => {
                write!(f, "Depth must not be negative: {}", depth)
            }
        }
    }
}

impl std::error::Error for ValidationError {}
