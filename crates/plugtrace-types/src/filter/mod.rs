mod condition;
mod field;
mod operator;
mod trace_filter;
mod value;

pub use condition::{FilterCondition, JoinOperator};
pub use field::{FieldInfo, FilterField, ValueType};
pub use operator::{Arity, FilterOperator};
pub use trace_filter::{DEFAULT_TOP, OrderBy, SortDirection, TraceFilter};
pub use value::FilterValue;
