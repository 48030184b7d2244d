//! UPDATE statement builder.

use crate::dialect::Dialect;
use crate::qb::expr::{Columns, Fields, ParamStyle, Predicate, WhereExpr};
use crate::qb::traits::Statement;
use crate::value::Value;

/// UPDATE statement builder.
///
/// SET pairs render as inline quoted literals (`f1='2'`), and the WHERE
/// clause uses the same inline style; all values are still collected, SET
/// values first, then WHERE values.
#[derive(Clone, Debug)]
pub struct UpdateQuery {
    dialect: Dialect,
    table: String,
    columns: Columns,
    where_expr: WhereExpr,
    returning: Fields,
}

impl UpdateQuery {
    pub(crate) fn new(dialect: Dialect, table: &str, columns: Columns) -> Self {
        Self {
            dialect,
            table: table.to_string(),
            columns,
            where_expr: WhereExpr::new(),
            returning: Fields::default(),
        }
    }

    /// Add a WHERE condition.
    ///
    /// Mapping predicates render `<col> = '<value>'` per pair,
    /// parenthesized when there is more than one pair; raw strings render
    /// verbatim. Repeated calls AND-join. WHERE values append after the
    /// SET values.
    pub fn filter(mut self, predicate: impl Into<Predicate>) -> Self {
        self.where_expr.and_with(predicate.into());
        self
    }

    /// Append ` RETURNING <f1>, ...`.
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

        let set_parts: Vec<String> = self
            .columns
            .pairs()
            .iter()
            .map(|(col, value)| {
                values.push(value.clone());
                format!("{col}={}", value.to_inline())
            })
            .collect();

        let mut text = format!("UPDATE {} SET {}", self.table, set_parts.join(", "));

        let where_sql = self.where_expr.render(ParamStyle::Inline, &mut values);
        if !where_sql.is_empty() {
            text.push_str(" WHERE ");
            text.push_str(&where_sql);
        }

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

    /// The bound values: SET values first, then WHERE values.
    pub fn values(&self) -> Vec<Value> {
        self.build().1
    }
}

impl Statement for UpdateQuery {
    fn dialect(&self) -> Dialect {
        UpdateQuery::dialect(self)
    }

    fn build(&self) -> (String, Vec<Value>) {
        UpdateQuery::build(self)
    }
}
