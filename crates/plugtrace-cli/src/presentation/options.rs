use is_terminal::IsTerminal;

/// Display formatting options
#[derive(Debug, Clone)]
pub struct FormatOptions {
    pub enable_color: bool,
    pub bar_columns: usize,
}

impl Default for FormatOptions {
    fn default() -> Self {
        Self {
            enable_color: false,
            bar_columns: super::BAR_COLUMNS,
        }
    }
}

impl FormatOptions {
    /// Color only when stdout is an interactive terminal
    pub fn for_stdout() -> Self {
        Self {
            enable_color: std::io::stdout().is_terminal(),
            ..Self::default()
        }
    }
}
