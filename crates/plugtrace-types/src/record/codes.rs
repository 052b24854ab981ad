use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::{Result, ValidationError};

/// Kind of component that produced a trace row (`operationtype` column)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OperationType {
    /// Code 0
    Unknown,
    /// Code 1: registered plugin step
    Plugin,
    /// Code 2: custom workflow activity
    WorkflowActivity,
}

impl OperationType {
    pub const ALL: [OperationType; 3] = [
        OperationType::Unknown,
        OperationType::Plugin,
        OperationType::WorkflowActivity,
    ];

    pub fn from_code(code: i64) -> Result<Self> {
        match code {
            0 => Ok(OperationType::Unknown),
            1 => Ok(OperationType::Plugin),
            2 => Ok(OperationType::WorkflowActivity),
            other => Err(ValidationError::UnknownOperationType(other)),
        }
    }

    pub fn code(self) -> i64 {
        match self {
            OperationType::Unknown => 0,
            OperationType::Plugin => 1,
            OperationType::WorkflowActivity => 2,
        }
    }

    pub fn display_name(self) -> &'static str {
        match self {
            OperationType::Unknown => "Unknown",
            OperationType::Plugin => "Plug-in",
            OperationType::WorkflowActivity => "Workflow Activity",
        }
    }
}

impl fmt::Display for OperationType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

/// Whether the step ran inside the triggering transaction (`mode` column)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ExecutionMode {
    /// Code 0
    Synchronous,
    /// Code 1
    Asynchronous,
}

impl ExecutionMode {
    pub const ALL: [ExecutionMode; 2] = [ExecutionMode::Synchronous, ExecutionMode::Asynchronous];

    pub fn from_code(code: i64) -> Result<Self> {
        match code {
            0 => Ok(ExecutionMode::Synchronous),
            1 => Ok(ExecutionMode::Asynchronous),
            other => Err(ValidationError::UnknownExecutionMode(other)),
        }
    }

    pub fn code(self) -> i64 {
        match self {
            ExecutionMode::Synchronous => 0,
            ExecutionMode::Asynchronous => 1,
        }
    }

    pub fn display_name(self) -> &'static str {
        match self {
            ExecutionMode::Synchronous => "Synchronous",
            ExecutionMode::Asynchronous => "Asynchronous",
        }
    }
}

impl fmt::Display for ExecutionMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}
