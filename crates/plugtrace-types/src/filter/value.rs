use chrono::{DateTime, NaiveDate, SecondsFormat, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

use super::field::ValueType;

/// Operand of a filter condition.
///
/// Strings in filter documents always deserialize as `Text`, kept verbatim,
/// and are read as the field's value type when the expression is built.
/// `Date` and `Guid` are only produced from typed values in code.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FilterValue {
    Number(i64),
    Text(String),
    Date(DateTime<Utc>),
    Guid(Uuid),
}

impl FilterValue {
    /// True for text that is empty or whitespace only
    pub fn is_blank(&self) -> bool {
        matches!(self, FilterValue::Text(s) if s.trim().is_empty())
    }

    /// Render as an expression literal for a field of `value_type`.
    /// Returns `None` when the value cannot be read as that type.
    pub fn literal(&self, value_type: ValueType) -> Option<String> {
        if self.is_blank() {
            return None;
        }

        match value_type {
            ValueType::Text => Some(quote(&self.to_string())),
            ValueType::Number => match self {
                FilterValue::Number(n) => Some(n.to_string()),
                FilterValue::Text(s) => s.trim().parse::<i64>().ok().map(|n| n.to_string()),
                _ => None,
            },
            ValueType::Date => self.as_date().map(format_date),
            ValueType::Guid => match self {
                FilterValue::Guid(id) => Some(id.to_string()),
                FilterValue::Text(s) => Uuid::parse_str(s.trim()).ok().map(|id| id.to_string()),
                _ => None,
            },
        }
    }

    fn as_date(&self) -> Option<DateTime<Utc>> {
        match self {
            FilterValue::Date(date) => Some(*date),
            FilterValue::Text(s) => parse_date(s.trim()),
            _ => None,
        }
    }
}

/// Accepts RFC 3339 timestamps and plain `YYYY-MM-DD` dates (midnight UTC)
fn parse_date(s: &str) -> Option<DateTime<Utc>> {
    if let Ok(date) = DateTime::parse_from_rfc3339(s) {
        return Some(date.with_timezone(&Utc));
    }

    NaiveDate::parse_from_str(s, "%Y-%m-%d")
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .map(|naive| naive.and_utc())
}

fn format_date(date: DateTime<Utc>) -> String {
    date.to_rfc3339_opts(SecondsFormat::Millis, true)
}

/// Single-quote a string literal, doubling embedded quotes
fn quote(s: &str) -> String {
    format!("'{}'", s.replace('\'', "''"))
}

impl fmt::Display for FilterValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FilterValue::Number(n) => write!(f, "{}", n),
            FilterValue::Date(date) => f.write_str(&format_date(*date)),
            FilterValue::Guid(id) => write!(f, "{}", id),
            FilterValue::Text(s) => f.write_str(s),
        }
    }
}

impl From<&str> for FilterValue {
    fn from(s: &str) -> Self {
        FilterValue::Text(s.to_string())
    }
}

impl From<String> for FilterValue {
    fn from(s: String) -> Self {
        FilterValue::Text(s)
    }
}

impl From<i64> for FilterValue {
    fn from(n: i64) -> Self {
        FilterValue::Number(n)
    }
}

impl From<DateTime<Utc>> for FilterValue {
    fn from(date: DateTime<Utc>) -> Self {
        FilterValue::Date(date)
    }
}

impl From<Uuid> for FilterValue {
    fn from(id: Uuid) -> Self {
        FilterValue::Guid(id)
    }
}
