pub mod options;
pub mod query;
pub mod timeline;

pub use options::FormatOptions;
pub use query::render_query;
pub use timeline::{BAR_COLUMNS, TimelineView, render_bar, render_timeline};
