use serde::{Deserialize, Serialize};
use std::fmt;

/// How a field's values are written into a filter expression
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ValueType {
    /// Quoted string literal
    Text,
    /// Bare integer literal (also used for enum-coded columns)
    Number,
    /// ISO-8601 UTC timestamp
    Date,
    /// Bare GUID literal
    Guid,
}

/// Static metadata attached to every filterable field
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldInfo {
    pub display_name: &'static str,
    pub backend_name: &'static str,
    pub value_type: ValueType,
}

/// Trace columns a condition can be written against
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FilterField {
    PluginName,
    EntityName,
    MessageName,
    OperationType,
    ExecutionMode,
    Depth,
    Duration,
    CorrelationId,
    CreatedOn,
    ExceptionDetails,
}

impl FilterField {
    pub const ALL: [FilterField; 10] = [
        FilterField::PluginName,
        FilterField::EntityName,
        FilterField::MessageName,
        FilterField::OperationType,
        FilterField::ExecutionMode,
        FilterField::Depth,
        FilterField::Duration,
        FilterField::CorrelationId,
        FilterField::CreatedOn,
        FilterField::ExceptionDetails,
    ];

    pub fn info(self) -> FieldInfo {
        let (display_name, backend_name, value_type) = match self {
            FilterField::PluginName => ("Plugin Name", "typename", ValueType::Text),
            FilterField::EntityName => ("Entity", "primaryentity", ValueType::Text),
            FilterField::MessageName => ("Message", "messagename", ValueType::Text),
            FilterField::OperationType => ("Operation Type", "operationtype", ValueType::Number),
            FilterField::ExecutionMode => ("Execution Mode", "mode", ValueType::Number),
            FilterField::Depth => ("Depth", "depth", ValueType::Number),
            FilterField::Duration => (
                "Duration (ms)",
                "performanceexecutionduration",
                ValueType::Number,
            ),
            FilterField::CorrelationId => ("Correlation ID", "correlationid", ValueType::Guid),
            FilterField::CreatedOn => ("Created On", "createdon", ValueType::Date),
            FilterField::ExceptionDetails => ("Exception", "exceptiondetails", ValueType::Text),
        };

        FieldInfo {
            display_name,
            backend_name,
            value_type,
        }
    }

    pub fn display_name(self) -> &'static str {
        self.info().display_name
    }

    pub fn backend_name(self) -> &'static str {
        self.info().backend_name
    }

    pub fn value_type(self) -> ValueType {
        self.info().value_type
    }

    /// Reverse lookup by backend column name
    pub fn from_backend_name(name: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|field| field.backend_name().eq_ignore_ascii_case(name))
    }
}

impl fmt::Display for FilterField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}
