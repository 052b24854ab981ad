use plugtrace_types::TraceRecord;
use std::collections::{BTreeMap, HashMap};
use tracing::debug;
use uuid::Uuid;

use super::Grouping;

/// Node storage for one build. Parent/child links are arena indices, so
/// attaching a child never rebuilds its ancestors.
pub(super) struct Arena<'a> {
    pub(super) slots: Vec<Slot<'a>>,
    pub(super) roots: Vec<usize>,
}

pub(super) struct Slot<'a> {
    pub(super) record: &'a TraceRecord,
    pub(super) children: Vec<usize>,
}

/// Most recently seen node per nesting depth.
///
/// Keyed by depth so a sparse or very large depth value costs one entry.
#[derive(Default)]
struct DepthStack {
    by_depth: BTreeMap<u32, usize>,
}

impl DepthStack {
    /// Live ancestor one level above `depth`
    fn parent_of(&self, depth: u32) -> Option<usize> {
        let parent_depth = depth.checked_sub(1)?;
        self.by_depth.get(&parent_depth).copied()
    }

    /// Make `index` the candidate parent at `depth` and forget deeper entries
    fn enter(&mut self, depth: u32, index: usize) {
        if let Some(deeper) = depth.checked_add(1) {
            self.by_depth.split_off(&deeper);
        }
        self.by_depth.insert(depth, index);
    }
}

impl<'a> Arena<'a> {
    /// Link `ordered` (already in canonical chronological order) into a forest
    pub(super) fn link(ordered: &[&'a TraceRecord], grouping: Grouping) -> Self {
        let mut arena = Arena {
            slots: Vec::with_capacity(ordered.len()),
            roots: Vec::new(),
        };
        let mut stacks: HashMap<Option<Uuid>, DepthStack> = HashMap::new();

        for &record in ordered {
            let index = arena.slots.len();
            arena.slots.push(Slot {
                record,
                children: Vec::new(),
            });

            let key = match grouping {
                Grouping::Batch => None,
                Grouping::Correlation => Some(record.correlation_id),
            };
            let stack = stacks.entry(key).or_default();

            if record.depth == 0 {
                arena.roots.push(index);
            } else if let Some(parent) = stack.parent_of(record.depth) {
                arena.slots[parent].children.push(index);
            } else {
                debug!(
                    record_id = %record.id,
                    depth = record.depth,
                    "no live ancestor; promoting trace record to root"
                );
                arena.roots.push(index);
            }

            stack.enter(record.depth, index);
        }

        arena
    }
}
