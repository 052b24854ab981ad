use crate::{Error, Result};
use plugtrace_engine::{DecodePolicy, decode_batch};
use plugtrace_types::{RawTraceRecord, TraceFilter, TraceRecord};
use serde_json::Value;
use std::path::Path;
use tracing::debug;

/// Parse a fetched page: either a bare JSON array of rows or an OData
/// response envelope `{"value": [...]}`.
pub fn parse_rows(content: &str) -> Result<Vec<RawTraceRecord>> {
    let document: Value = serde_json::from_str(content)?;

    let rows = match document {
        Value::Object(mut envelope) => match envelope.remove("value") {
            Some(rows @ Value::Array(_)) => rows,
            _ => {
                return Err(Error::MalformedBatch(
                    "expected a JSON array of trace rows or an object with a 'value' array"
                        .to_string(),
                ));
            }
        },
        rows => rows,
    };

    Ok(serde_json::from_value(rows)?)
}

/// Read and decode one page of trace rows from `path`
pub fn load_batch(path: &Path, policy: DecodePolicy) -> Result<Vec<TraceRecord>> {
    let content = std::fs::read_to_string(path)?;
    let rows = parse_rows(&content)?;
    debug!(path = %path.display(), rows = rows.len(), "loaded trace rows");

    Ok(decode_batch(rows, policy)?)
}

/// Read a `TraceFilter` from a `.json` or `.toml` file
pub fn load_filter(path: &Path) -> Result<TraceFilter> {
    let content = std::fs::read_to_string(path)?;

    match path.extension().and_then(|ext| ext.to_str()) {
        Some("json") => Ok(serde_json::from_str(&content)?),
        Some("toml") => Ok(toml::from_str(&content)?),
        _ => Err(Error::UnsupportedFormat(path.to_path_buf())),
    }
}
