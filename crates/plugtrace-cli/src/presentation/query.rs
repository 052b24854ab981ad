use plugtrace_engine::QueryDescriptor;

/// One `$option=value` per line
pub fn render_query(descriptor: &QueryDescriptor) -> String {
    descriptor
        .query_pairs()
        .into_iter()
        .map(|(key, value)| format!("{}={}\n", key, value))
        .collect()
}
