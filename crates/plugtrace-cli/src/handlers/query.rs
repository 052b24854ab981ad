use crate::presentation::render_query;
use crate::types::OutputFormat;
use anyhow::Result;
use plugtrace_runtime::{Config, load_filter};
use plugtrace_types::TraceFilter;
use std::path::Path;
use tracing::debug;

pub fn handle(
    config: &Config,
    filter_path: Option<&Path>,
    top: Option<usize>,
    format: OutputFormat,
) -> Result<()> {
    let filter = match filter_path {
        Some(path) => load_filter(path)?,
        None => TraceFilter::new(),
    };
    debug!(
        conditions = filter.conditions.len(),
        enabled = filter.enabled_conditions().count(),
        "loaded filter"
    );

    let mut builder = config.query_builder(&filter)?;
    if let Some(top) = top {
        builder = builder.top(top);
    }
    let descriptor = builder.build();

    match format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&descriptor)?),
        OutputFormat::Plain => print!("{}", render_query(&descriptor)),
    }

    Ok(())
}
