use plugtrace_types::{RawTraceRecord, TraceRecord};
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::error::{Error, Result};

/// What to do with a batch containing a row that fails validation
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DecodePolicy {
    /// Reject the whole batch on the first invalid row
    #[default]
    Abort,
    /// Drop invalid rows and keep the rest
    SkipInvalid,
}

/// Decode a fetched page of raw rows into validated records.
///
/// Row order is preserved. Under `Abort` the first invalid row fails the
/// batch, so no tree is ever built from a guessed classification.
pub fn decode_batch(rows: Vec<RawTraceRecord>, policy: DecodePolicy) -> Result<Vec<TraceRecord>> {
    let total = rows.len();
    let mut records = Vec::with_capacity(total);

    for (index, row) in rows.into_iter().enumerate() {
        let id = row.id;
        match TraceRecord::try_from(row) {
            Ok(record) => records.push(record),
            Err(source) => match policy {
                DecodePolicy::Abort => return Err(Error::InvalidRecord { index, source }),
                DecodePolicy::SkipInvalid => {
                    warn!(index, record_id = %id, error = %source, "skipping invalid trace record");
                }
            },
        }
    }

    debug!(total, decoded = records.len(), "decoded trace batch");
    Ok(records)
}

#[cfg(test)]
mod tests {
    use super::*;
    use plugtrace_types::ValidationError;

    fn row(id: u128, operation_type: i64) -> RawTraceRecord {
        RawTraceRecord {
            id: uuid::Uuid::from_u128(id),
            created_on: chrono::DateTime::from_timestamp_millis(1_700_000_000_000).unwrap(),
            type_name: Some(format!("Plugin{}", id)),
            primary_entity: None,
            message_name: None,
            operation_type,
            mode: 0,
            depth: 0,
            execution_duration: Some(5),
            correlation_id: uuid::Uuid::nil(),
            exception_details: None,
            message_block: None,
        }
    }

    #[test]
    fn test_abort_reports_first_invalid_row() {
        let rows = vec![row(1, 1), row(2, 9), row(3, 42)];

        let err = decode_batch(rows, DecodePolicy::Abort).unwrap_err();
        assert_eq!(
            err,
            Error::InvalidRecord {
                index: 1,
                source: ValidationError::UnknownOperationType(9),
            }
        );
        assert_eq!(
            err.to_string(),
            "Invalid trace record at row 1: Unknown operation type code: 9"
        );
    }

    #[test]
    fn test_skip_invalid_keeps_valid_rows_in_order() {
        let rows = vec![row(1, 1), row(2, 9), row(3, 2)];

        let records = decode_batch(rows, DecodePolicy::SkipInvalid).unwrap();
        let names: Vec<&str> = records.iter().map(|r| r.plugin_name.as_str()).collect();
        assert_eq!(names, vec!["Plugin1", "Plugin3"]);
    }

    #[test]
    fn test_empty_batch() {
        assert!(decode_batch(Vec::new(), DecodePolicy::Abort).unwrap().is_empty());
    }
}
