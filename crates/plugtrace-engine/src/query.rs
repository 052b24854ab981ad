use plugtrace_types::{DEFAULT_TOP, OrderBy, TRACE_COLUMNS, TraceFilter};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Largest page the backend returns in one request
pub const MAX_TOP: usize = 5000;

/// Backend-neutral description of one constrained fetch
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QueryDescriptor {
    /// Columns to return, in request order
    pub select: Vec<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub filter: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub order_by: Option<String>,

    pub top: usize,
}

impl QueryDescriptor {
    /// OData system query options, in `$select`, `$filter`, `$orderby`,
    /// `$top` order. Values are not URL-encoded.
    pub fn query_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = Vec::with_capacity(4);

        if !self.select.is_empty() {
            pairs.push(("$select", self.select.join(",")));
        }
        if let Some(filter) = &self.filter {
            pairs.push(("$filter", filter.clone()));
        }
        if let Some(order_by) = &self.order_by {
            pairs.push(("$orderby", order_by.clone()));
        }
        pairs.push(("$top", self.top.to_string()));

        pairs
    }
}

impl fmt::Display for QueryDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, (key, value)) in self.query_pairs().iter().enumerate() {
            if i > 0 {
                f.write_str("&")?;
            }
            write!(f, "{}={}", key, value)?;
        }
        Ok(())
    }
}

/// Assembles a `QueryDescriptor` from a column selection and a `TraceFilter`.
///
/// `top` and `order_by` default to the filter's own values; explicit calls
/// override them.
#[derive(Debug, Clone, Default)]
pub struct QueryExpressionBuilder {
    select: Vec<String>,
    filter: TraceFilter,
    top: Option<usize>,
    order_by: Option<OrderBy>,
}

impl QueryExpressionBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Select every trace column
    pub fn all_columns(self) -> Self {
        self.select(TRACE_COLUMNS)
    }

    pub fn select<I, S>(mut self, columns: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.select = columns.into_iter().map(Into::into).collect();
        self
    }

    pub fn filter(mut self, filter: &TraceFilter) -> Self {
        self.filter = filter.clone();
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

    pub fn build(&self) -> QueryDescriptor {
        let mut select: Vec<String> = Vec::with_capacity(self.select.len());
        for column in &self.select {
            let column = column.trim();
            if !column.is_empty() && !select.iter().any(|c| c == column) {
                select.push(column.to_string());
            }
        }

        let top = self
            .top
            .or(self.filter.top)
            .unwrap_or(DEFAULT_TOP)
            .clamp(1, MAX_TOP);
        let order_by = self.order_by.or(self.filter.order_by);

        QueryDescriptor {
            select,
            filter: self.filter.build_filter_expression(),
            order_by: order_by.map(|o| o.to_string()),
            top,
        }
    }
}
