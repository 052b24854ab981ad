use serde::{Deserialize, Serialize};
use std::fmt;

use super::condition::FilterCondition;
use super::field::FilterField;

/// Default page size when none is given
pub const DEFAULT_TOP: usize = 100;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    Asc,
    #[default]
    Desc,
}

/// Sort clause applied by the backend
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct OrderBy {
    pub field: FilterField,
    #[serde(default)]
    pub direction: SortDirection,
}

impl OrderBy {
    pub fn asc(field: FilterField) -> Self {
        Self {
            field,
            direction: SortDirection::Asc,
        }
    }

    pub fn desc(field: FilterField) -> Self {
        Self {
            field,
            direction: SortDirection::Desc,
        }
    }

    /// Parse `"<column> [asc|desc]"`, e.g. `"createdon desc"`
    pub fn parse(clause: &str) -> Option<Self> {
        let mut parts = clause.split_whitespace();
        let field = FilterField::from_backend_name(parts.next()?)?;
        let direction = match parts.next().map(|s| s.to_ascii_lowercase()).as_deref() {
            None | Some("asc") => SortDirection::Asc,
            Some("desc") => SortDirection::Desc,
            Some(_) => return None,
        };

        if parts.next().is_some() {
            return None;
        }

        Some(Self { field, direction })
    }
}

impl fmt::Display for OrderBy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let direction = match self.direction {
            SortDirection::Asc => "asc",
            SortDirection::Desc => "desc",
        };
        write!(f, "{} {}", self.field.backend_name(), direction)
    }
}

/// Ordered conditions plus paging and sort options for one fetch
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TraceFilter {
    #[serde(default)]
    pub conditions: Vec<FilterCondition>,

    /// Page size; `None` leaves it to the query builder, which falls back
    /// to `DEFAULT_TOP`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub top: Option<usize>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub order_by: Option<OrderBy>,
}

impl TraceFilter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn condition(mut self, condition: FilterCondition) -> Self {
        self.conditions.push(condition);
        self
    }

    pub fn top(mut self, top: usize) -> Self {
        self.top = Some(top);
        self
    }

    pub fn order_by(mut self, order_by: OrderBy) -> Self {
        self.order_by = Some(order_by);
        self
    }

    pub fn enabled_conditions(&self) -> impl Iterator<Item = &FilterCondition> {
        self.conditions.iter().filter(|c| c.enabled)
    }

    /// Combine the enabled conditions, left to right, into one expression.
    ///
    /// Each contributing fragment is parenthesized. The first one carries no
    /// join operator; later ones are prefixed by their own `join`. Incomplete
    /// conditions contribute nothing. Returns `None` when nothing contributes.
    pub fn build_filter_expression(&self) -> Option<String> {
        let mut expression: Option<String> = None;

        for condition in self.enabled_conditions() {
            let Some(fragment) = condition.build_expression() else {
                continue;
            };

            match expression.as_mut() {
                None => expression = Some(format!("({})", fragment)),
                Some(combined) => {
                    combined.push(' ');
                    combined.push_str(condition.join.as_str());
                    combined.push_str(" (");
                    combined.push_str(&fragment);
                    combined.push(')');
                }
            }
        }

        expression
    }
}
