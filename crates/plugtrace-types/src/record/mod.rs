mod codes;
mod duration;
mod trace;

pub use codes::{ExecutionMode, OperationType};
pub use duration::TraceDuration;
pub use trace::{RawTraceRecord, TRACE_COLUMNS, TraceRecord};
