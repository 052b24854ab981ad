use serde::{Deserialize, Serialize};
use std::fmt;

use super::field::ValueType;

/// Comparison applied by a filter condition
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FilterOperator {
    Equals,
    Contains,
    StartsWith,
    EndsWith,
    Between,
    IsNull,
    IsNotNull,
    GreaterThan,
    LessThan,
    GreaterOrEqual,
    LessOrEqual,
}

/// Number of operand values an operator consumes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Arity {
    /// `is_null`, `is_not_null`
    None,
    /// Needs `value`
    One,
    /// Needs `value` and `value_to`
    Two,
}

impl FilterOperator {
    pub const ALL: [FilterOperator; 11] = [
        FilterOperator::Equals,
        FilterOperator::Contains,
        FilterOperator::StartsWith,
        FilterOperator::EndsWith,
        FilterOperator::Between,
        FilterOperator::IsNull,
        FilterOperator::IsNotNull,
        FilterOperator::GreaterThan,
        FilterOperator::LessThan,
        FilterOperator::GreaterOrEqual,
        FilterOperator::LessOrEqual,
    ];

    pub fn arity(self) -> Arity {
        match self {
            FilterOperator::IsNull | FilterOperator::IsNotNull => Arity::None,
            FilterOperator::Between => Arity::Two,
            _ => Arity::One,
        }
    }

    /// Whether the operator makes sense for a field of the given value type
    pub fn supports(self, value_type: ValueType) -> bool {
        match self {
            FilterOperator::Equals | FilterOperator::IsNull | FilterOperator::IsNotNull => true,
            FilterOperator::Contains | FilterOperator::StartsWith | FilterOperator::EndsWith => {
                value_type == ValueType::Text
            }
            FilterOperator::Between
            | FilterOperator::GreaterThan
            | FilterOperator::LessThan
            | FilterOperator::GreaterOrEqual
            | FilterOperator::LessOrEqual => {
                matches!(value_type, ValueType::Number | ValueType::Date)
            }
        }
    }

    pub fn display_name(self) -> &'static str {
        match self {
            FilterOperator::Equals => "equals",
            FilterOperator::Contains => "contains",
            FilterOperator::StartsWith => "starts with",
            FilterOperator::EndsWith => "ends with",
            FilterOperator::Between => "between",
            FilterOperator::IsNull => "is empty",
            FilterOperator::IsNotNull => "is not empty",
            FilterOperator::GreaterThan => "greater than",
            FilterOperator::LessThan => "less than",
            FilterOperator::GreaterOrEqual => "greater or equal",
            FilterOperator::LessOrEqual => "less or equal",
        }
    }

    /// Operators offered for a field of the given value type
    pub fn for_value_type(value_type: ValueType) -> Vec<FilterOperator> {
        Self::ALL
            .into_iter()
            .filter(|op| op.supports(value_type))
            .collect()
    }
}

impl fmt::Display for FilterOperator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}
