//! Query model: select, filter, order
//!
//! Queries are built from typed columns. `Query::parse` builds one from the
//! comma separated text arguments the CLI accepts and rejects anything the
//! engine should never see.

use crate::schema::{normalize_revenue, Column, Event};

use super::errors::{ExecutorError, ExecutorResult};

pub const INVALID_SELECT: &str = "Invalid SELECT argument(s). See --help for help.";
pub const INVALID_ORDER: &str = "Invalid ORDER arguments(s). See --help for help.";
pub const INVALID_FILTER: &str = "Invalid FILTER argument(s). See --help for help.";
pub const INVALID_REV_FILTER: &str = "Invalid number for rev filter.";

/// Exact, case-sensitive equality on one column
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Filter {
    pub column: Column,
    pub value: String,
}

impl Filter {
    pub fn new(column: Column, value: impl Into<String>) -> Self {
        Self {
            column,
            value: value.into(),
        }
    }

    /// Parses `column=value`.
    ///
    /// The column name is case-insensitive, the value is not. A `rev` value
    /// is normalized to two fractional digits so `6` finds `6.00`.
    pub fn parse(expr: &str) -> ExecutorResult<Self> {
        let (key, value) = expr
            .split_once('=')
            .ok_or_else(|| ExecutorError::invalid_query(INVALID_FILTER))?;
        let column: Column = key
            .parse()
            .map_err(|_| ExecutorError::invalid_query(INVALID_FILTER))?;

        let value = match column {
            Column::Rev => normalize_revenue(value)
                .map_err(|_| ExecutorError::invalid_query(INVALID_REV_FILTER))?,
            _ => value.to_string(),
        };

        Ok(Self { column, value })
    }

    /// Returns true if the event's column equals the filter value
    pub fn matches(&self, event: &Event) -> bool {
        event.get(self.column) == self.value
    }
}

/// A select/filter/order query
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Query {
    /// Projected columns, in output order, without duplicates
    pub select: Vec<Column>,
    pub filter: Option<Filter>,
    /// Sort key columns, most significant first
    pub order: Vec<Column>,
}

impl Query {
    /// Creates a query with no filter and no ordering.
    ///
    /// Repeated select columns are kept once, at their first position.
    pub fn new(select: impl IntoIterator<Item = Column>) -> Self {
        let mut columns: Vec<Column> = Vec::new();
        for column in select {
            if !columns.contains(&column) {
                columns.push(column);
            }
        }
        Self {
            select: columns,
            filter: None,
            order: Vec::new(),
        }
    }

    pub fn with_filter(mut self, filter: Filter) -> Self {
        self.filter = Some(filter);
        self
    }

    pub fn with_order(mut self, order: impl IntoIterator<Item = Column>) -> Self {
        self.order = order.into_iter().collect();
        self
    }

    /// Builds a query from CLI text: `stb,rev`, `provider=MGM`, `date,stb`.
    pub fn parse(select: &str, filter: Option<&str>, order: Option<&str>) -> ExecutorResult<Self> {
        let select =
            Column::parse_list(select).map_err(|_| ExecutorError::invalid_query(INVALID_SELECT))?;

        let mut query = Query::new(select);

        if let Some(order) = order {
            let order =
                Column::parse_list(order).map_err(|_| ExecutorError::invalid_query(INVALID_ORDER))?;
            query = query.with_order(order);
        }

        if let Some(filter) = filter {
            query = query.with_filter(Filter::parse(filter)?);
        }

        query.validate()?;
        Ok(query)
    }

    /// Checks the query can be executed
    pub fn validate(&self) -> ExecutorResult<()> {
        if self.select.is_empty() {
            return Err(ExecutorError::invalid_query(INVALID_SELECT));
        }
        Ok(())
    }
}
