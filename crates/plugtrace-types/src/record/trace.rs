use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::codes::{ExecutionMode, OperationType};
use super::duration::TraceDuration;
use crate::error::{Result, ValidationError};

/// Backend column names of a plugin trace row, in display order.
/// Used as the default `$select` list.
pub const TRACE_COLUMNS: [&str; 12] = [
    "plugintracelogid",
    "createdon",
    "typename",
    "primaryentity",
    "messagename",
    "operationtype",
    "mode",
    "depth",
    "performanceexecutionduration",
    "correlationid",
    "exceptiondetails",
    "messageblock",
];

/// One execution event, normalized and validated
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TraceRecord {
    pub id: Uuid,

    /// Creation timestamp (UTC, millisecond precision)
    pub created_on: DateTime<Utc>,

    /// Fully qualified plugin type name
    pub plugin_name: String,

    /// Primary entity logical name
    pub entity_name: String,

    /// SDK message (Create, Update, ...)
    pub message_name: String,

    pub operation_type: OperationType,
    pub execution_mode: ExecutionMode,

    /// Nesting level reported by the pipeline. Not a parent reference.
    pub depth: u32,

    pub duration: TraceDuration,

    /// Groups every record of one top-level invocation
    pub correlation_id: Uuid,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub exception_details: Option<String>,

    /// Trace text written by the plugin itself
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message_block: Option<String>,
}

impl TraceRecord {
    /// Timestamp at which execution finished, saturating at `DateTime::<Utc>::MAX_UTC`
    pub fn ended_on(&self) -> DateTime<Utc> {
        chrono::TimeDelta::try_milliseconds(self.duration.as_millis_i64())
            .and_then(|elapsed| self.created_on.checked_add_signed(elapsed))
            .unwrap_or(DateTime::<Utc>::MAX_UTC)
    }

    pub fn has_exception(&self) -> bool {
        self.exception_details
            .as_deref()
            .is_some_and(|details| !details.trim().is_empty())
    }
}

/// Raw trace row as returned by the backend, keyed by backend column names
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RawTraceRecord {
    #[serde(rename = "plugintracelogid")]
    pub id: Uuid,

    #[serde(rename = "createdon")]
    pub created_on: DateTime<Utc>,

    #[serde(rename = "typename", default)]
    pub type_name: Option<String>,

    #[serde(rename = "primaryentity", default)]
    pub primary_entity: Option<String>,

    #[serde(rename = "messagename", default)]
    pub message_name: Option<String>,

    #[serde(rename = "operationtype")]
    pub operation_type: i64,

    #[serde(rename = "mode")]
    pub mode: i64,

    pub depth: i64,

    #[serde(rename = "performanceexecutionduration", default)]
    pub execution_duration: Option<i64>,

    #[serde(rename = "correlationid")]
    pub correlation_id: Uuid,

    #[serde(rename = "exceptiondetails", default)]
    pub exception_details: Option<String>,

    #[serde(rename = "messageblock", default)]
    pub message_block: Option<String>,
}

impl TryFrom<RawTraceRecord> for TraceRecord {
    type Error = ValidationError;

    fn try_from(raw: RawTraceRecord) -> Result<Self> {
        let depth = u32::try_from(raw.depth).map_err(|_| ValidationError::NegativeDepth(raw.depth))?;

        Ok(TraceRecord {
            id: raw.id,
            created_on: raw.created_on,
            plugin_name: raw.type_name.unwrap_or_default(),
            entity_name: raw.primary_entity.unwrap_or_default(),
            message_name: raw.message_name.unwrap_or_default(),
            operation_type: OperationType::from_code(raw.operation_type)?,
            execution_mode: ExecutionMode::from_code(raw.mode)?,
            depth,
            duration: TraceDuration::from_millis(raw.execution_duration.unwrap_or(0))?,
            correlation_id: raw.correlation_id,
            exception_details: raw.exception_details.filter(|s| !s.is_empty()),
            message_block: raw.message_block.filter(|s| !s.is_empty()),
        })
    }
}
