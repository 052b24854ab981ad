pub mod config;
pub mod query;
pub mod timeline;
