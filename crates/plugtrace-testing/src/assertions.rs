//! Structural assertions over built timeline forests.

use anyhow::{Result, bail};
use plugtrace_types::{TimelineNode, walk_forest};
use std::fmt::Write;

/// Every input record appears exactly once in the forest.
pub fn assert_count_preserved(input_len: usize, roots: &[TimelineNode]) -> Result<()> {
    let total: usize = roots.iter().map(TimelineNode::node_count).sum();
    if total != input_len {
        bail!("Expected {} nodes in forest, got {}", input_len, total);
    }
    Ok(())
}

/// Every bar lies inside the 0–100 axis.
pub fn assert_placement_bounds(roots: &[TimelineNode]) -> Result<()> {
    const EPSILON: f64 = 1e-9;

    for node in walk_forest(roots) {
        let start = node.start_offset_percent;
        let width = node.width_percent;

        if !start.is_finite() || !width.is_finite() {
            bail!("Non-finite placement for {}: {} / {}", node.record.plugin_name, start, width);
        }
        if !(0.0..=100.0).contains(&start) {
            bail!("Start offset {} out of range for {}", start, node.record.plugin_name);
        }
        if width < 0.0 || start + width > 100.0 + EPSILON {
            bail!(
                "Bar for {} overflows the axis: start {} width {}",
                node.record.plugin_name,
                start,
                width
            );
        }
    }

    Ok(())
}

/// Siblings appear in non-decreasing creation order.
pub fn assert_children_chronological(roots: &[TimelineNode]) -> Result<()> {
    for node in walk_forest(roots) {
        for pair in node.children.windows(2) {
            if pair[0].record.created_on > pair[1].record.created_on {
                bail!(
                    "Children of {} out of order: {} after {}",
                    node.record.plugin_name,
                    pair[1].record.plugin_name,
                    pair[0].record.plugin_name
                );
            }
        }
    }
    Ok(())
}

/// Indented plugin-name outline, two spaces per tree level.
pub fn outline(roots: &[TimelineNode]) -> String {
    fn write_node(out: &mut String, node: &TimelineNode, level: usize) {
        let _ = writeln!(out, "{}{}", "  ".repeat(level), node.record.plugin_name);
        for child in &node.children {
            write_node(out, child, level + 1);
        }
    }

    let mut out = String::new();
    for root in roots {
        write_node(&mut out, root, 0);
    }
    out
}
