//! Declarative table query
//!
//! A [`Query`] names a table, a conjunction of column filters, an ordered list
//! of sort keys and an optional row limit. It is plain data: the REST store
//! encodes it as URL parameters and the in-memory store evaluates it directly.

use serde_json::Value;
use shared::Record;

/// Comparison applied by a [`Filter`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FilterOp {
    Eq,
    Neq,
    Lt,
    Lte,
    Gt,
    Gte,
}

impl FilterOp {
    pub fn as_str(&self) -> &'static str {
        match self {
            FilterOp::Eq => "eq",
            FilterOp::Neq => "neq",
            FilterOp::Lt => "lt",
            FilterOp::Lte => "lte",
            FilterOp::Gt => "gt",
            FilterOp::Gte => "gte",
        }
    }
}

/// `column <op> value`
#[derive(Debug, Clone, PartialEq)]
pub struct Filter {
    pub column: String,
    pub op: FilterOp,
    pub value: Value,
}

impl Filter {
    /// URL parameter value, e.g. `eq.true`, `gte.2025-01-01T00:00:00Z`
    ///
    /// Null comparisons use the `is` operator since `= null` never matches.
    pub fn encode(&self) -> String {
        match (&self.value, self.op) {
            (Value::Null, FilterOp::Eq) => "is.null".to_string(),
            (Value::Null, FilterOp::Neq) => "not.is.null".to_string(),
            (value, op) => format!("{}.{}", op.as_str(), scalar_to_string(value)),
        }
    }
}

fn scalar_to_string(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Null => "null".to_string(),
        other => other.to_string(),
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Asc,
    Desc,
}

/// Where rows with a null sort column go
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Nulls {
    First,
    Last,
}

/// Direction and null placement of one sort key
///
/// The constructors follow the database default: ascending puts nulls last,
/// descending puts them first.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OrderBy {
    pub direction: Direction,
    pub nulls: Nulls,
}

impl OrderBy {
    pub const fn asc() -> Self {
        Self {
            direction: Direction::Asc,
            nulls: Nulls::Last,
        }
    }

    pub const fn desc() -> Self {
        Self {
            direction: Direction::Desc,
            nulls: Nulls::First,
        }
    }

    pub const fn nulls_first(mut self) -> Self {
        self.nulls = Nulls::First;
        self
    }

    pub const fn nulls_last(mut self) -> Self {
        self.nulls = Nulls::Last;
        self
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrderKey {
    pub column: String,
    pub order: OrderBy,
}

impl OrderKey {
    /// `column.asc.nullslast`
    pub fn encode(&self) -> String {
        let direction = match self.order.direction {
            Direction::Asc => "asc",
            Direction::Desc => "desc",
        };
        let nulls = match self.order.nulls {
            Nulls::First => "nullsfirst",
            Nulls::Last => "nullslast",
        };
        format!("{}.{}.{}", self.column, direction, nulls)
    }
}

/// Query against one table
#[derive(Debug, Clone, PartialEq)]
pub struct Query {
    table: String,
    columns: String,
    filters: Vec<Filter>,
    order: Vec<OrderKey>,
    limit: Option<usize>,
}

impl Query {
    /// Select every column of `table`
    pub fn table(table: impl Into<String>) -> Self {
        Self {
            table: table.into(),
            columns: "*".to_string(),
            filters: Vec::new(),
            order: Vec::new(),
            limit: None,
        }
    }

    /// Select every column of the record's table
    pub fn of<T: Record>() -> Self {
        Self::table(T::TABLE)
    }

    /// Restrict the returned columns (comma separated)
    pub fn select(mut self, columns: impl Into<String>) -> Self {
        self.columns = columns.into();
        self
    }

    fn filter(mut self, column: impl Into<String>, op: FilterOp, value: impl Into<Value>) -> Self {
        self.filters.push(Filter {
            column: column.into(),
            op,
            value: value.into(),
        });
        self
    }

    pub fn eq(self, column: impl Into<String>, value: impl Into<Value>) -> Self {
        self.filter(column, FilterOp::Eq, value)
    }

    pub fn neq(self, column: impl Into<String>, value: impl Into<Value>) -> Self {
        self.filter(column, FilterOp::Neq, value)
    }

    pub fn lt(self, column: impl Into<String>, value: impl Into<Value>) -> Self {
        self.filter(column, FilterOp::Lt, value)
    }

    pub fn lte(self, column: impl Into<String>, value: impl Into<Value>) -> Self {
        self.filter(column, FilterOp::Lte, value)
    }

    pub fn gt(self, column: impl Into<String>, value: impl Into<Value>) -> Self {
        self.filter(column, FilterOp::Gt, value)
    }

    pub fn gte(self, column: impl Into<String>, value: impl Into<Value>) -> Self {
        self.filter(column, FilterOp::Gte, value)
    }

    /// Append a sort key; earlier keys take precedence
    pub fn order(mut self, column: impl Into<String>, order: OrderBy) -> Self {
        self.order.push(OrderKey {
            column: column.into(),
            order,
        });
        self
    }

    pub fn limit(mut self, limit: usize) -> Self {
        self.limit = Some(limit);
        self
    }

    pub fn table_name(&self) -> &str {
        &self.table
    }

    pub fn columns(&self) -> &str {
        &self.columns
    }

    pub fn filters(&self) -> &[Filter] {
        &self.filters
    }

    pub fn order_keys(&self) -> &[OrderKey] {
        &self.order
    }

    pub fn limit_value(&self) -> Option<usize> {
        self.limit
    }

    /// URL query parameters for the REST dialect
    pub fn to_params(&self) -> Vec<(String, String)> {
        let mut params = vec![("select".to_string(), self.columns.clone())];
        params.extend(
            self.filters
                .iter()
                .map(|f| (f.column.clone(), f.encode())),
        );
        if !self.order.is_empty() {
            let order = self
                .order
                .iter()
                .map(OrderKey::encode)
                .collect::<Vec<_>>()
                .join(",");
            params.push(("order".to_string(), order));
        }
        if let Some(limit) = self.limit {
            params.push(("limit".to_string(), limit.to_string()));
        }
        params
    }

    /// Parameters for a count: filters only
    pub fn to_count_params(&self) -> Vec<(String, String)> {
        let mut params = vec![("select".to_string(), "*".to_string())];
        params.extend(
            self.filters
                .iter()
                .map(|f| (f.column.clone(), f.encode())),
        );
        params
    }
}
