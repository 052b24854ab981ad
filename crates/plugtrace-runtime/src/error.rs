use std::fmt;
use std::path::PathBuf;

/// Result type for plugtrace-runtime operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur in the runtime layer
#[derive(Debug)]
pub enum Error {
    /// Engine layer error (batch decoding)
    Engine(plugtrace_engine::Error),

    /// IO operation failed
    Io(std::io::Error),

    /// Malformed JSON input
    Json(serde_json::Error),

    /// Configuration error
    Config(String),

    /// Trace batch document with an unexpected shape
    MalformedBatch(String),

    /// Input file in a format we cannot read
    UnsupportedFormat(PathBuf),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Engine(err) => write!(f, "{}", err),
            Error::Io(err) => write!(f, "IO error: {}", err),
            Error::Json(err) => write!(f, "JSON error: {}", err),
            Error::Config(msg) => write!(f, "Configuration error: {}", msg),
            Error::MalformedBatch(msg) => write!(f, "Malformed trace batch: {}", msg),
            Error::UnsupportedFormat(path) => write!(
                f,
                "Unsupported file format: {} (expected .json or .toml)",
                path.display()
            ),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Engine(err) => Some(err),
            Error::Io(err) => Some(err),
            Error::Json(err) => Some(err),
            Error::Config(_) | Error::MalformedBatch(_) | Error::UnsupportedFormat(_) => None,
        }
    }
}

impl From<plugtrace_engine::Error> for Error {
    fn from(err: plugtrace_engine::Error) -> Self {
        Error::Engine(err)
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err)
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::Json(err)
    }
}

impl From<toml::de::Error> for Error {
    fn from(err: toml::de::Error) -> Self {
        Error::Config(err.to_string())
    }
}

impl From<toml::ser::Error> for Error {
    fn from(err: toml::ser::Error) -> Self {
        Error::Config(err.to_string())
    }
}
