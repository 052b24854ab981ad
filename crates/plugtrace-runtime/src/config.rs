use crate::{Error, Result};
use plugtrace_engine::{DecodePolicy, Grouping, HierarchyOptions, QueryExpressionBuilder};
use plugtrace_types::{DEFAULT_TOP, OrderBy, TRACE_COLUMNS, TraceFilter};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Resolve the workspace data directory path based on priority:
/// 1. Explicit path (with tilde expansion)
/// 2. PLUGTRACE_PATH environment variable (with tilde expansion)
/// 3. XDG data directory
/// 4. ~/.plugtrace (fallback for systems without XDG)
pub fn resolve_workspace_path(explicit_path: Option<&str>) -> Result<PathBuf> {
    if let Some(path) = explicit_path {
        return Ok(expand_tilde(path));
    }

    if let Ok(env_path) = std::env::var("PLUGTRACE_PATH") {
        return Ok(expand_tilde(&env_path));
    }

    if let Some(data_dir) = dirs::data_dir() {
        return Ok(data_dir.join("plugtrace"));
    }

    if let Some(home) = std::env::var_os("HOME") {
        return Ok(PathBuf::from(home).join(".plugtrace"));
    }

    Err(Error::Config(
        "Could not determine workspace path: no HOME directory or XDG data directory found"
            .to_string(),
    ))
}

/// Expand tilde (~) in paths to the user's home directory
pub fn expand_tilde(path: &str) -> PathBuf {
    if let Some(stripped) = path.strip_prefix("~/")
        && let Some(home) = std::env::var_os("HOME")
    {
        return PathBuf::from(home).join(stripped);
    }
    PathBuf::from(path)
}

fn default_top() -> usize {
    DEFAULT_TOP
}

fn default_select() -> Vec<String> {
    TRACE_COLUMNS.iter().map(|c| c.to_string()).collect()
}

fn default_order_by() -> Option<String> {
    Some("createdon desc".to_string())
}

/// Defaults applied to every fetch
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QueryConfig {
    #[serde(default = "default_top")]
    pub top: usize,

    #[serde(default = "default_select")]
    pub select: Vec<String>,

    /// `"<column> [asc|desc]"`
    #[serde(default = "default_order_by")]
    pub order_by: Option<String>,
}

impl Default for QueryConfig {
    fn default() -> Self {
        Self {
            top: default_top(),
            select: default_select(),
            order_by: default_order_by(),
        }
    }
}

impl QueryConfig {
    pub fn parsed_order_by(&self) -> Result<Option<OrderBy>> {
        match self.order_by.as_deref() {
            None => Ok(None),
            Some(clause) => OrderBy::parse(clause)
                .map(Some)
                .ok_or_else(|| Error::Config(format!("Invalid order_by clause: '{}'", clause))),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimelineConfig {
    #[serde(default)]
    pub grouping: Grouping,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DecodeConfig {
    #[serde(default)]
    pub on_invalid: DecodePolicy,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub query: QueryConfig,

    #[serde(default)]
    pub timeline: TimelineConfig,

    #[serde(default)]
    pub decode: DecodeConfig,
}

impl Config {
    pub fn load() -> Result<Self> {
        let config_path = Self::default_path()?;
        Self::load_from(&config_path)
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content)?;
        config.query.parsed_order_by()?;
        Ok(config)
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    pub fn default_path() -> Result<PathBuf> {
        Ok(resolve_workspace_path(None)?.join("config.toml"))
    }

    pub fn hierarchy_options(&self) -> HierarchyOptions {
        HierarchyOptions::default().grouping(self.timeline.grouping)
    }

    /// Query builder seeded with the configured selection.
    ///
    /// The configured order and `top` apply only where the filter leaves
    /// them unset.
    pub fn query_builder(&self, filter: &TraceFilter) -> Result<QueryExpressionBuilder> {
        let mut builder = QueryExpressionBuilder::new()
            .select(self.query.select.iter().cloned())
            .filter(filter);

        if filter.order_by.is_none()
            && let Some(order_by) = self.query.parsed_order_by()?
        {
            builder = builder.order_by(order_by);
        }

        if filter.top.is_none() {
            builder = builder.top(self.query.top);
        }

        Ok(builder)
    }
}
