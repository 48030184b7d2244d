//! INSERT statement builder.

use crate::dialect::Dialect;
use crate::qb::expr::{Columns, Fields};
use crate::qb::traits::Statement;
use crate::value::Value;

/// INSERT statement builder.
///
/// Values are rendered twice on purpose: inlined as quoted literals in the
/// text *and* collected into `values` in the same order. Callers relying
/// on either representation get the same ordering.
#[derive(Clone, Debug)]
pub struct InsertQuery {
    dialect: Dialect,
    table: String,
    columns: Columns,
    returning: Fields,
}

impl InsertQuery {
    pub(crate) fn new(dialect: Dialect, table: &str, columns: Columns) -> Self {
        Self {
            dialect,
            table: table.to_string(),
            columns,
            returning: Fields::default(),
        }
    }

    /// Append ` RETURNING <f1>, ...` after the VALUES clause.
    pub fn returning(mut self, fields: impl Into<Fields>) -> Self {
        self.returning = fields.into();
        self
    }

    /// The dialect captured at construction.
    pub fn dialect(&self) -> Dialect {
        self.dialect
    }

    /// Assemble the statement text and its bound values.
    pub fn build(&self) -> (String, Vec<Value>) {
        let mut values = Vec::new();

        let mut text = if self.columns.is_empty() {
            format!("INSERT INTO {} DEFAULT VALUES", self.table)
        } else {
            let mut cols = Vec::with_capacity(self.columns.len());
            let mut literals = Vec::with_capacity(self.columns.len());
            for (col, value) in self.columns.pairs() {
                cols.push(col.as_str());
                literals.push(value.to_inline());
                values.push(value.clone());
            }
            // Column names are comma-space separated, literals comma only.
            format!(
                "INSERT INTO {} ({}) VALUES ({})",
                self.table,
                cols.join(", "),
                literals.join(",")
            )
        };

        if !self.returning.is_empty() {
            text.push_str(" RETURNING ");
            text.push_str(&self.returning.to_sql());
        }

        crate::qb::trace_built(&text, &values);
        (text, values)
    }

    /// The assembled SQL text.
    pub fn text(&self) -> String {
        self.build().0
    }

    /// The bound values, in column order.
    pub fn values(&self) -> Vec<Value> {
        self.build().1
    }
}

impl Statement for InsertQuery {
    fn dialect(&self) -> Dialect {
        InsertQuery::dialect(self)
    }

    fn build(&self) -> (String, Vec<Value>) {
        InsertQuery::build(self)
    }
}
