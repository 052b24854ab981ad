use serde::{Deserialize, Serialize};
use std::fmt;

use super::field::FilterField;
use super::operator::{Arity, FilterOperator};
use super::value::FilterValue;

/// How a condition joins to the previous contributing condition
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum JoinOperator {
    #[default]
    And,
    Or,
}

impl JoinOperator {
    pub fn as_str(self) -> &'static str {
        match self {
            JoinOperator::And => "and",
            JoinOperator::Or => "or",
        }
    }
}

impl fmt::Display for JoinOperator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

fn default_enabled() -> bool {
    true
}

/// One user-defined predicate over a trace column
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FilterCondition {
    pub field: FilterField,
    pub operator: FilterOperator,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<FilterValue>,

    /// Upper bound, only read by `between`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value_to: Option<FilterValue>,

    #[serde(default = "default_enabled")]
    pub enabled: bool,

    /// Ignored on the first contributing condition
    #[serde(default)]
    pub join: JoinOperator,
}

impl FilterCondition {
    pub fn new(field: FilterField, operator: FilterOperator) -> Self {
        Self {
            field,
            operator,
            value: None,
            value_to: None,
            enabled: true,
            join: JoinOperator::And,
        }
    }

    pub fn value(mut self, value: impl Into<FilterValue>) -> Self {
        self.value = Some(value.into());
        self
    }

    pub fn value_to(mut self, value: impl Into<FilterValue>) -> Self {
        self.value_to = Some(value.into());
        self
    }

    pub fn join(mut self, join: JoinOperator) -> Self {
        self.join = join;
        self
    }

    pub fn or(self) -> Self {
        self.join(JoinOperator::Or)
    }

    pub fn disabled(mut self) -> Self {
        self.enabled = false;
        self
    }

    /// Whether every operand the operator needs is present and readable
    pub fn is_complete(&self) -> bool {
        self.build_expression().is_some()
    }

    /// Expression fragment for this condition, without surrounding parentheses.
    ///
    /// `None` while the condition is incomplete: a missing or unreadable
    /// operand, or an operator that does not apply to the field's value type.
    pub fn build_expression(&self) -> Option<String> {
        let info = self.field.info();
        if !self.operator.supports(info.value_type) {
            return None;
        }

        let name = info.backend_name;
        let literal = |value: &Option<FilterValue>| {
            value
                .as_ref()
                .and_then(|value| value.literal(info.value_type))
        };

        let expression = match self.operator.arity() {
            Arity::None => match self.operator {
                FilterOperator::IsNull => format!("{} eq null", name),
                _ => format!("{} ne null", name),
            },
            Arity::One => {
                let value = literal(&self.value)?;
                match self.operator {
                    FilterOperator::Equals => format!("{} eq {}", name, value),
                    FilterOperator::Contains => format!("contains({}, {})", name, value),
                    FilterOperator::StartsWith => format!("startswith({}, {})", name, value),
                    FilterOperator::EndsWith => format!("endswith({}, {})", name, value),
                    FilterOperator::GreaterThan => format!("{} gt {}", name, value),
                    FilterOperator::LessThan => format!("{} lt {}", name, value),
                    FilterOperator::GreaterOrEqual => format!("{} ge {}", name, value),
                    _ => format!("{} le {}", name, value),
                }
            }
            Arity::Two => {
                let from = literal(&self.value)?;
                let to = literal(&self.value_to)?;
                format!("{name} ge {from} and {name} le {to}")
            }
        };

        Some(expression)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};

    #[test]
    fn test_contains_on_plugin_name() {
        let condition =
            FilterCondition::new(FilterField::PluginName, FilterOperator::Contains).value("Foo");
        assert_eq!(
            condition.build_expression().as_deref(),
            Some("contains(typename, 'Foo')")
        );
    }

    #[test]
    fn test_comparison_operators() {
        let cases = [
            (FilterOperator::Equals, "depth eq 2"),
            (FilterOperator::GreaterThan, "depth gt 2"),
            (FilterOperator::LessThan, "depth lt 2"),
            (FilterOperator::GreaterOrEqual, "depth ge 2"),
            (FilterOperator::LessOrEqual, "depth le 2"),
        ];

        for (operator, expected) in cases {
            let condition = FilterCondition::new(FilterField::Depth, operator).value(2_i64);
            assert_eq!(condition.build_expression().as_deref(), Some(expected));
        }
    }

    #[test]
    fn test_string_functions() {
        let starts = FilterCondition::new(FilterField::MessageName, FilterOperator::StartsWith)
            .value("Up");
        let ends =
            FilterCondition::new(FilterField::EntityName, FilterOperator::EndsWith).value("unt");
        assert_eq!(
            starts.build_expression().as_deref(),
            Some("startswith(messagename, 'Up')")
        );
        assert_eq!(
            ends.build_expression().as_deref(),
            Some("endswith(primaryentity, 'unt')")
        );
    }

    #[test]
    fn test_between_dates() {
        let from = Utc.with_ymd_and_hms(2025, 1, 1, 0, 0, 0).unwrap();
        let to = Utc.with_ymd_and_hms(2025, 1, 2, 0, 0, 0).unwrap();
        let condition = FilterCondition::new(FilterField::CreatedOn, FilterOperator::Between)
            .value(from)
            .value_to(to);

        assert_eq!(
            condition.build_expression().as_deref(),
            Some("createdon ge 2025-01-01T00:00:00.000Z and createdon le 2025-01-02T00:00:00.000Z")
        );
    }

    #[test]
    fn test_null_checks_need_no_value() {
        let is_null = FilterCondition::new(FilterField::ExceptionDetails, FilterOperator::IsNull);
        let not_null =
            FilterCondition::new(FilterField::ExceptionDetails, FilterOperator::IsNotNull);
        assert_eq!(
            is_null.build_expression().as_deref(),
            Some("exceptiondetails eq null")
        );
        assert_eq!(
            not_null.build_expression().as_deref(),
            Some("exceptiondetails ne null")
        );
    }

    #[test]
    fn test_incomplete_conditions_yield_none() {
        let missing = FilterCondition::new(FilterField::PluginName, FilterOperator::Equals);
        assert_eq!(missing.build_expression(), None);
        assert!(!missing.is_complete());

        let blank =
            FilterCondition::new(FilterField::PluginName, FilterOperator::Equals).value("");
        assert_eq!(blank.build_expression(), None);

        let half_between = FilterCondition::new(FilterField::Duration, FilterOperator::Between)
            .value(10_i64);
        assert_eq!(half_between.build_expression(), None);

        let unreadable =
            FilterCondition::new(FilterField::Depth, FilterOperator::Equals).value("deep");
        assert_eq!(unreadable.build_expression(), None);

        let unsupported =
            FilterCondition::new(FilterField::Depth, FilterOperator::Contains).value(1_i64);
        assert_eq!(unsupported.build_expression(), None);
    }

    #[test]
    fn test_deserialize_defaults() {
        let json = r#"{"field": "plugin_name", "operator": "contains", "value": "Foo"}"#;
        let condition: FilterCondition = serde_json::from_str(json).unwrap();

        assert!(condition.enabled);
        assert_eq!(condition.join, JoinOperator::And);
        assert_eq!(condition.value, Some(FilterValue::Text("Foo".to_string())));
    }
}
