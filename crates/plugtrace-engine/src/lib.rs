// Engine module - Core processing logic (decoding, tree reconstruction, query building)
// This layer sits between validated records (types) and the runtime/CLI layers

pub mod decode;
pub mod error;
pub mod hierarchy;
pub mod query;
pub mod summary;

pub use decode::{DecodePolicy, decode_batch};
pub use error::{Error, Result};
pub use hierarchy::{
    DEGENERATE_START_OFFSET, DEGENERATE_WIDTH, Grouping, HierarchyOptions, Placement,
    TimelineWindow, build_hierarchy, build_hierarchy_with,
};
pub use query::{MAX_TOP, QueryDescriptor, QueryExpressionBuilder};
pub use summary::{TimelineSummary, summarize};

use plugtrace_types::{RawTraceRecord, TimelineNode};

// Façade API - Stable public interface for runtime and CLI layers

/// Decode a fetched page and build its timeline in one step
pub fn timeline_from_rows(
    rows: Vec<RawTraceRecord>,
    policy: DecodePolicy,
    options: &HierarchyOptions,
) -> Result<Vec<TimelineNode>> {
    let records = decode_batch(rows, policy)?;
    Ok(build_hierarchy_with(&records, options))
}
