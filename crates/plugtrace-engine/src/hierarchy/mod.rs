//! Call-tree reconstruction from flat trace batches.
//!
//! Records carry only a nesting depth. Parentage is inferred by walking the
//! batch in creation order and attaching each record to the latest record
//! seen one level above it.

mod arena;
mod placement;

pub use placement::{
    DEGENERATE_START_OFFSET, DEGENERATE_WIDTH, Placement, TimelineWindow,
};

use plugtrace_types::{TimelineNode, TraceRecord};
use serde::{Deserialize, Serialize};
use tracing::debug;

use arena::Arena;

/// Scope of the depth stack used to infer parents
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Grouping {
    /// One stack across the whole batch
    #[default]
    Batch,
    /// One stack per correlation id, so interleaved invocations stay apart
    Correlation,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct HierarchyOptions {
    #[serde(default)]
    pub grouping: Grouping,
}

impl HierarchyOptions {
    pub fn grouping(mut self, grouping: Grouping) -> Self {
        self.grouping = grouping;
        self
    }
}

/// Build the timeline forest for a batch with default options.
pub fn build_hierarchy(records: &[TraceRecord]) -> Vec<TimelineNode> {
    build_hierarchy_with(records, &HierarchyOptions::default())
}

/// Build the timeline forest for a batch.
///
/// Records are stable-sorted by `created_on`; ties keep their input order.
/// A record at depth `d > 0` becomes the last child of the latest record at
/// depth `d - 1`, or a root when there is none. Every input record appears
/// exactly once in the result. Roots are returned in chronological order.
pub fn build_hierarchy_with(
    records: &[TraceRecord],
    options: &HierarchyOptions,
) -> Vec<TimelineNode> {
    let Some(window) = TimelineWindow::of(records) else {
        return Vec::new();
    };

    let mut ordered: Vec<&TraceRecord> = records.iter().collect();
    ordered.sort_by_key(|record| record.created_on);

    let arena = Arena::link(&ordered, options.grouping);

    if window.is_degenerate() {
        debug!(
            records = records.len(),
            "timeline spans no time; using fallback placement"
        );
    }

    let roots: Vec<TimelineNode> = arena
        .roots
        .iter()
        .map(|&index| materialize(&arena, index, &window))
        .collect();

    debug!(
        records = records.len(),
        roots = roots.len(),
        span_ms = window.total_ms(),
        "built timeline hierarchy"
    );

    roots
}

fn materialize(arena: &Arena<'_>, index: usize, window: &TimelineWindow) -> TimelineNode {
    let slot = &arena.slots[index];
    let placement = window.place(slot.record);

    TimelineNode {
        record: slot.record.clone(),
        children: slot
            .children
            .iter()
            .map(|&child| materialize(arena, child, window))
            .collect(),
        depth: slot.record.depth,
        start_offset_percent: placement.start_offset_percent,
        width_percent: placement.width_percent,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use plugtrace_testing::assertions::outline;
    use plugtrace_testing::{RecordBuilder, record};

    #[test]
    fn test_empty_batch() {
        assert!(build_hierarchy(&[]).is_empty());
    }

    #[test]
    fn test_input_order_does_not_matter() {
        let records = vec![
            record("C", 0, 200, 30),
            record("B", 1, 10, 50),
            record("A", 0, 0, 100),
        ];

        let roots = build_hierarchy(&records);
        assert_eq!(outline(&roots), "A\n  B\nC\n");
    }

    #[test]
    fn test_ties_keep_input_order() {
        let records = vec![
            record("first", 0, 0, 10),
            record("second", 0, 0, 10),
            record("child", 1, 0, 10),
        ];

        let roots = build_hierarchy(&records);
        assert_eq!(outline(&roots), "first\nsecond\n  child\n");
    }

    #[test]
    fn test_correlation_grouping_separates_interleaved_invocations() {
        let records = vec![
            RecordBuilder::new("A").at(0).duration(100).correlation(1).build(),
            RecordBuilder::new("X").at(5).duration(100).correlation(2).build(),
            RecordBuilder::new("A.child").depth(1).at(10).correlation(1).build(),
            RecordBuilder::new("X.child").depth(1).at(12).correlation(2).build(),
        ];

        let batch = build_hierarchy(&records);
        assert_eq!(outline(&batch), "A\nX\n  A.child\n  X.child\n");

        let options = HierarchyOptions::default().grouping(Grouping::Correlation);
        let grouped = build_hierarchy_with(&records, &options);
        assert_eq!(outline(&grouped), "A\n  A.child\nX\n  X.child\n");
    }

    #[test]
    fn test_depth_mirrors_record_depth_for_orphans() {
        let roots = build_hierarchy(&[record("orphan", 3, 0, 10)]);
        assert_eq!(roots.len(), 1);
        assert_eq!(roots[0].depth, 3);
    }
}
