use crate::presentation::{FormatOptions, TimelineView, render_timeline};
use crate::types::{GroupingArg, OutputFormat};
use anyhow::Result;
use plugtrace_engine::{DecodePolicy, build_hierarchy_with, summarize};
use plugtrace_runtime::{Config, load_batch};
use std::path::Path;
use tracing::debug;

pub fn handle(
    config: &Config,
    file: &Path,
    group_by: Option<GroupingArg>,
    skip_invalid: bool,
    format: OutputFormat,
) -> Result<()> {
    let policy = if skip_invalid {
        DecodePolicy::SkipInvalid
    } else {
        config.decode.on_invalid
    };

    let records = load_batch(file, policy)?;

    let mut options = config.hierarchy_options();
    if let Some(grouping) = group_by {
        options = options.grouping(grouping.into());
    }

    let roots = build_hierarchy_with(&records, &options);
    let summary = summarize(&records, &roots);
    debug!(
        records = summary.record_count,
        roots = summary.root_count,
        orphans = summary.orphan_count,
        "built timeline"
    );

    let view = TimelineView {
        summary: &summary,
        roots: &roots,
    };

    match format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&view)?),
        OutputFormat::Plain => print!("{}", render_timeline(&view, &FormatOptions::for_stdout())),
    }

    Ok(())
}
