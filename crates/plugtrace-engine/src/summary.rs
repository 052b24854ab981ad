use plugtrace_types::{TimelineNode, TraceRecord, walk_forest};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

use crate::hierarchy::TimelineWindow;

/// Aggregate figures for one built timeline
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimelineSummary {
    pub record_count: usize,
    pub root_count: usize,

    /// Roots whose own depth is above zero
    pub orphan_count: usize,

    pub max_depth: u32,
    pub correlation_count: usize,
    pub exception_count: usize,

    /// Earliest start to latest end, in milliseconds
    pub span_ms: i64,
}

pub fn summarize(records: &[TraceRecord], roots: &[TimelineNode]) -> TimelineSummary {
    let Some(window) = TimelineWindow::of(records) else {
        return TimelineSummary::default();
    };

    let correlations: HashSet<_> = records.iter().map(|r| r.correlation_id).collect();

    TimelineSummary {
        record_count: walk_forest(roots).count(),
        root_count: roots.len(),
        orphan_count: roots.iter().filter(|root| root.depth > 0).count(),
        max_depth: records.iter().map(|r| r.depth).max().unwrap_or(0),
        correlation_count: correlations.len(),
        exception_count: records.iter().filter(|r| r.has_exception()).count(),
        span_ms: window.total_ms(),
    }
}
