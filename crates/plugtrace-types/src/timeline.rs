use serde::{Deserialize, Serialize};

use crate::record::TraceRecord;

/// A trace record placed in the reconstructed call tree.
///
/// `start_offset_percent` and `width_percent` position the record on a
/// shared 0–100 time axis; `start_offset_percent + width_percent <= 100`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimelineNode {
    pub record: TraceRecord,

    /// Nested calls, in chronological order
    pub children: Vec<TimelineNode>,

    pub depth: u32,
    pub start_offset_percent: f64,
    pub width_percent: f64,
}

impl TimelineNode {
    pub fn end_offset_percent(&self) -> f64 {
        self.start_offset_percent + self.width_percent
    }

    /// Number of nodes in this subtree, including `self`
    pub fn node_count(&self) -> usize {
        1 + self.children.iter().map(TimelineNode::node_count).sum::<usize>()
    }

    /// Pre-order traversal of this subtree
    pub fn iter(&self) -> TimelineIter<'_> {
        TimelineIter { stack: vec![self] }
    }
}

/// Depth-first, pre-order iterator over a subtree
pub struct TimelineIter<'a> {
    stack: Vec<&'a TimelineNode>,
}

impl<'a> Iterator for TimelineIter<'a> {
    type Item = &'a TimelineNode;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        self.stack.extend(node.children.iter().rev());
        Some(node)
    }
}

/// Pre-order traversal across every tree of a forest
pub fn walk_forest(roots: &[TimelineNode]) -> impl Iterator<Item = &TimelineNode> {
    roots.iter().flat_map(TimelineNode::iter)
}
