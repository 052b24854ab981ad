//! Testing infrastructure for plugtrace.
//!
//! - `fixtures`: trace record builders and raw backend batches
//! - `assertions`: structural checks over built timeline forests

pub mod assertions;
pub mod fixtures;

pub use fixtures::{RecordBuilder, base_time, record};
