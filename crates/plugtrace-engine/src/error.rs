use plugtrace_types::ValidationError;
use std::fmt;

/// Result type for plugtrace-engine operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur in the engine layer
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// A row of the fetched batch failed validation
    InvalidRecord {
        /// Position of the row in the batch as fetched
        index: usize,
        source: ValidationError,
    },
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::InvalidRecord { index, source } => {
                write!(f, "Invalid trace record at row {}: {}", index, source)
            }
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::InvalidRecord { source, .. } => Some(source),
        }
    }
}
