use super::FormatOptions;
use owo_colors::OwoColorize;
use plugtrace_engine::TimelineSummary;
use plugtrace_types::{ExecutionMode, TimelineNode};
use serde::Serialize;
use std::fmt::Write;

/// Width of the timeline bar in characters
pub const BAR_COLUMNS: usize = 40;

/// Machine-readable timeline output
#[derive(Debug, Serialize)]
pub struct TimelineView<'a> {
    pub summary: &'a TimelineSummary,
    pub roots: &'a [TimelineNode],
}

/// Text bar covering `[start, start + width)` of a 0–100 axis.
/// Zero-width bars still occupy one cell.
pub fn render_bar(start_percent: f64, width_percent: f64, columns: usize) -> String {
    if columns == 0 {
        return String::new();
    }

    let scale = columns as f64 / 100.0;
    let from = ((start_percent * scale).floor() as usize).min(columns - 1);
    let to = (((start_percent + width_percent) * scale).ceil() as usize).clamp(from + 1, columns);

    (0..columns)
        .map(|i| if (from..to).contains(&i) { '█' } else { '·' })
        .collect()
}

fn render_summary(summary: &TimelineSummary) -> String {
    format!(
        "{} records | {} roots | {} orphans | max depth {} | {} invocations | {} exceptions | span {}ms",
        summary.record_count,
        summary.root_count,
        summary.orphan_count,
        summary.max_depth,
        summary.correlation_count,
        summary.exception_count,
        summary.span_ms,
    )
}

fn render_node(out: &mut String, node: &TimelineNode, level: usize, options: &FormatOptions) {
    let record = &node.record;
    let bar = render_bar(
        node.start_offset_percent,
        node.width_percent,
        options.bar_columns,
    );
    let indent = "  ".repeat(level);

    let (bar, name) = if options.enable_color {
        (bar.cyan().to_string(), record.plugin_name.bold().to_string())
    } else {
        (bar, record.plugin_name.clone())
    };

    let mode = match record.execution_mode {
        ExecutionMode::Asynchronous if options.enable_color => {
            record.execution_mode.display_name().dimmed().to_string()
        }
        mode => mode.display_name().to_string(),
    };

    let _ = write!(
        out,
        "{} {:>5.1}% {:>5.1}%  {}{}  {}/{}  {}  {}",
        bar,
        node.start_offset_percent,
        node.width_percent,
        indent,
        name,
        record.message_name,
        record.entity_name,
        mode,
        record.duration,
    );

    if record.has_exception() {
        if options.enable_color {
            let _ = write!(out, "  {}", "✗ exception".red());
        } else {
            out.push_str("  ✗ exception");
        }
    }
    out.push('\n');

    for child in &node.children {
        render_node(out, child, level + 1, options);
    }
}

/// Summary line, blank line, then one line per node in pre-order
pub fn render_timeline(view: &TimelineView<'_>, options: &FormatOptions) -> String {
    let mut out = render_summary(view.summary);
    out.push('\n');

    if view.roots.is_empty() {
        out.push_str("\nNo trace records.\n");
        return out;
    }

    out.push('\n');
    for root in view.roots {
        render_node(&mut out, root, 0, options);
    }
    out
}
