//! DELETE statement builder.

use crate::dialect::Dialect;
use crate::qb::expr::{Fields, ParamStyle, Predicate, WhereExpr};
use crate::qb::traits::Statement;
use crate::value::Value;

/// DELETE statement builder.
///
/// Unlike UPDATE, the WHERE clause is parameterized: `<col> = $n` with the
/// value pushed to `values`.
#[derive(Clone, Debug)]
pub struct DeleteQuery {
    dialect: Dialect,
    table: String,
    where_expr: WhereExpr,
    returning: Fields,
}

impl DeleteQuery {
    pub(crate) fn new(dialect: Dialect, table: &str) -> Self {
        Self {
            dialect,
            table: table.to_string(),
            where_expr: WhereExpr::new(),
            returning: Fields::default(),
        }
    }

    /// Add a WHERE condition.
    ///
    /// Mapping predicates render `<col> = $n` per pair, parenthesized when
    /// there is more than one pair, values pushed in pair order; raw
    /// strings render verbatim. Repeated calls AND-join.
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
        let mut text = format!("DELETE FROM {}", self.table);

        let where_sql = self.where_expr.render(ParamStyle::Numbered, &mut values);
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

    /// The bound values, ordered to match the placeholders in the text.
    pub fn values(&self) -> Vec<Value> {
        self.build().1
    }
}

impl Statement for DeleteQuery {
    fn dialect(&self) -> Dialect {
        DeleteQuery::dialect(self)
    }

    fn build(&self) -> (String, Vec<Value>) {
        DeleteQuery::build(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::qb::delete;

    #[test]
    fn plain_delete() {
        let q = delete("table");
        assert_eq!(q.text(), "DELETE FROM table");
        assert!(q.values().is_empty());
    }

    #[test]
    fn where_uses_placeholders() {
        let q = delete("table").filter([("id", 3)]);
        assert_eq!(q.text(), "DELETE FROM table WHERE id = $1");
        assert_eq!(q.values(), vec![Value::Int(3)]);
    }

    #[test]
    fn multi_pair_filter_parenthesizes() {
        let q = delete("table").filter([("a", 1), ("b", 2)]);
        assert_eq!(q.text(), "DELETE FROM table WHERE (a = $1 AND b = $2)");
        assert_eq!(q.values(), vec![Value::Int(1), Value::Int(2)]);
    }

    #[test]
    fn returning_clause() {
        let q = delete("table").filter([("id", 3)]).returning(["id"]);
        assert_eq!(q.text(), "DELETE FROM table WHERE id = $1 RETURNING id");
    }
}
