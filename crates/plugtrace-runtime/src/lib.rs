//! Runtime layer: configuration and file-backed inputs for the engine.

pub mod config;
pub mod error;
pub mod loader;

pub use config::{Config, DecodeConfig, QueryConfig, TimelineConfig, resolve_workspace_path};
pub use error::{Error, Result};
pub use loader::{load_batch, load_filter, parse_rows};
