//! Fixtures for trace records and raw backend batches.
//!
//! Record ids are derived from the fixture name so two builds of the same
//! fixture compare equal.

use anyhow::Result;
use chrono::{DateTime, Duration, TimeZone, Utc};
use plugtrace_types::{ExecutionMode, OperationType, TraceDuration, TraceRecord};
use serde_json::{Value, json};
use std::fs;
use std::path::Path;
use uuid::Uuid;

/// Fixed origin for fixture timestamps: 2025-01-01T00:00:00Z
pub fn base_time() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2025, 1, 1, 0, 0, 0).unwrap()
}

fn id_for(name: &str) -> Uuid {
    let seed = name
        .bytes()
        .fold(0xcbf2_9ce4_8422_2325_u128, |acc, byte| {
            (acc ^ u128::from(byte)).wrapping_mul(0x0100_0000_01b3)
        });
    Uuid::from_u128(seed)
}

/// Builder for `TraceRecord` fixtures
#[derive(Debug, Clone)]
pub struct RecordBuilder {
    record: TraceRecord,
}

impl RecordBuilder {
    pub fn new(name: &str) -> Self {
        Self {
            record: TraceRecord {
                id: id_for(name),
                created_on: base_time(),
                plugin_name: name.to_string(),
                entity_name: "account".to_string(),
                message_name: "Create".to_string(),
                operation_type: OperationType::Plugin,
                execution_mode: ExecutionMode::Synchronous,
                depth: 0,
                duration: TraceDuration::ZERO,
                correlation_id: Uuid::nil(),
                exception_details: None,
                message_block: None,
            },
        }
    }

    pub fn depth(mut self, depth: u32) -> Self {
        self.record.depth = depth;
        self
    }

    /// Creation time as milliseconds after `base_time()`
    pub fn at(mut self, offset_ms: i64) -> Self {
        self.record.created_on = base_time() + Duration::milliseconds(offset_ms);
        self
    }

    pub fn duration(mut self, ms: u64) -> Self {
        self.record.duration = TraceDuration::from(ms);
        self
    }

    pub fn correlation(mut self, id: u128) -> Self {
        self.record.correlation_id = Uuid::from_u128(id);
        self
    }

    pub fn message(mut self, message: &str) -> Self {
        self.record.message_name = message.to_string();
        self
    }

    pub fn entity(mut self, entity: &str) -> Self {
        self.record.entity_name = entity.to_string();
        self
    }

    pub fn mode(mut self, mode: ExecutionMode) -> Self {
        self.record.execution_mode = mode;
        self
    }

    pub fn exception(mut self, details: &str) -> Self {
        self.record.exception_details = Some(details.to_string());
        self
    }

    pub fn build(self) -> TraceRecord {
        self.record
    }
}

/// Shorthand for the common depth/time/duration fixture
pub fn record(name: &str, depth: u32, at_ms: i64, duration_ms: u64) -> TraceRecord {
    RecordBuilder::new(name)
        .depth(depth)
        .at(at_ms)
        .duration(duration_ms)
        .build()
}

/// Backend row (column names and numeric codes) for a record
pub fn raw_row(record: &TraceRecord) -> Value {
    json!({
        "plugintracelogid": record.id,
        "createdon": record.created_on,
        "typename": record.plugin_name,
        "primaryentity": record.entity_name,
        "messagename": record.message_name,
        "operationtype": record.operation_type.code(),
        "mode": record.execution_mode.code(),
        "depth": record.depth,
        "performanceexecutionduration": record.duration.as_millis(),
        "correlationid": record.correlation_id,
        "exceptiondetails": record.exception_details,
        "messageblock": record.message_block,
    })
}

/// OData response envelope: `{"value": [rows...]}`
pub fn odata_batch(records: &[TraceRecord]) -> Value {
    json!({ "value": records.iter().map(raw_row).collect::<Vec<_>>() })
}

/// Write a JSON document to `path`
pub fn write_json(path: &Path, value: &Value) -> Result<()> {
    fs::write(path, serde_json::to_string_pretty(value)?)?;
    Ok(())
}

/// The `A(0,t0,100) B(1,t10,50) C(0,t200,30)` batch
pub fn nested_pair() -> Vec<TraceRecord> {
    vec![
        record("A", 0, 0, 100),
        record("B", 1, 10, 50),
        record("C", 0, 200, 30),
    ]
}
