//! Value types shared by every plugtrace crate: validated trace records,
//! the filter condition model, and timeline nodes.

pub mod error;
pub mod filter;
pub mod record;
pub mod timeline;

pub use error::{Result, ValidationError};
pub use filter::*;
pub use record::*;
pub use timeline::{TimelineIter, TimelineNode, walk_forest};
