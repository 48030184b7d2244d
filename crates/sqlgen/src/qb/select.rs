//! SELECT statement builder.

use crate::dialect::Dialect;
use crate::error::{BuildError, BuildResult};
use crate::qb::expr::{Fields, JoinOn, ParamStyle, Predicate, WhereExpr, render_predicate};
use crate::qb::traits::Statement;
use crate::value::Value;

/// SELECT statement builder.
///
/// Created by [`Generator::select`](crate::Generator::select) or the
/// crate-root [`select`](crate::select). Clauses render in the fixed order
/// `SELECT .. FROM .. JOIN .. WHERE .. GROUP BY .. HAVING .. ORDER BY ..
/// LIMIT/OFFSET`, whatever order the chain calls arrive in.
#[derive(Clone, Debug)]
pub struct SelectQuery {
    dialect: Dialect,
    table: String,
    fields: Fields,
    joins: Vec<String>,
    where_expr: WhereExpr,
    group_by: Vec<String>,
    having: Vec<(Predicate, String)>,
    order_by: Vec<String>,
    limit: Option<Value>,
    offset: Option<Value>,
}

impl SelectQuery {
    pub(crate) fn new(dialect: Dialect, table: &str, fields: Fields) -> Self {
        Self {
            dialect,
            table: table.to_string(),
            fields,
            joins: Vec::new(),
            where_expr: WhereExpr::new(),
            group_by: Vec::new(),
            having: Vec::new(),
            order_by: Vec::new(),
            limit: None,
            offset: None,
        }
    }

    /// Append `INNER JOIN <table> ON <left> = <right>`.
    ///
    /// Multiple pairs in `on` are AND-joined.
    pub fn join(mut self, table: &str, on: impl Into<JoinOn>) -> Self {
        let on: JoinOn = on.into();
        self.joins
            .push(format!("INNER JOIN {} ON {}", table, on.to_sql()));
        self
    }

    /// Add a WHERE condition.
    ///
    /// Mapping predicates render `col = $n` per pair, parenthesized when
    /// there is more than one pair, and contribute their values in pair
    /// order. Raw strings render verbatim. Repeated calls AND-join.
    pub fn filter(mut self, predicate: impl Into<Predicate>) -> Self {
        self.where_expr.and_with(predicate.into());
        self
    }

    /// Append ` AND <raw>` to the WHERE clause.
    pub fn and(mut self, raw: impl Into<String>) -> Self {
        self.where_expr.and_with(Predicate::Raw(raw.into()));
        self
    }

    /// Append ` OR <raw>` to the WHERE clause.
    pub fn or(mut self, raw: impl Into<String>) -> Self {
        self.where_expr.or_with(Predicate::Raw(raw.into()));
        self
    }

    /// Append GROUP BY fields.
    pub fn groupby(mut self, fields: impl Into<Fields>) -> Self {
        let fields: Fields = fields.into();
        self.group_by.extend(fields);
        self
    }

    /// Add a HAVING comparison: `<col> <operator> $n` per pair, values
    /// contributed in pair order. Rendered after GROUP BY, before ORDER BY.
    pub fn having(mut self, predicate: impl Into<Predicate>, operator: &str) -> Self {
        self.having.push((predicate.into(), operator.to_string()));
        self
    }

    /// Append ORDER BY fields, rendered verbatim (embedded direction
    /// keywords included).
    pub fn orderby(mut self, fields: impl Into<Fields>) -> Self {
        let fields: Fields = fields.into();
        self.order_by.extend(fields);
        self
    }

    /// Set LIMIT.
    ///
    /// The count is inlined as a literal, never parameterized, so it must
    /// be numeric; anything else is a [`BuildError::InvalidArgument`].
    /// mssql has no LIMIT surface and always fails with
    /// [`BuildError::UnsupportedOperation`].
    pub fn limit(mut self, count: impl Into<Value>) -> BuildResult<Self> {
        if self.dialect == Dialect::Mssql {
            return Err(BuildError::unsupported("LIMIT is not available under mssql"));
        }
        let count: Value = count.into();
        if !count.is_numeric() {
            return Err(BuildError::invalid_argument(format!(
                "LIMIT count must be numeric, got {count:?}"
            )));
        }
        self.limit = Some(count);
        Ok(self)
    }

    /// Set OFFSET. Requires a prior [`limit`](Self::limit).
    ///
    /// Validated like the LIMIT count; under mssql any offset fails with
    /// [`BuildError::UnsupportedOperation`].
    pub fn offset(mut self, offset: impl Into<Value>) -> BuildResult<Self> {
        if self.dialect == Dialect::Mssql {
            return Err(BuildError::unsupported(
                "OFFSET is not available under mssql",
            ));
        }
        let offset: Value = offset.into();
        if !offset.is_numeric() {
            return Err(BuildError::invalid_argument(format!(
                "OFFSET must be numeric, got {offset:?}"
            )));
        }
        if self.limit.is_none() {
            return Err(BuildError::invalid_argument("OFFSET requires a LIMIT"));
        }
        self.offset = Some(offset);
        Ok(self)
    }

    /// The dialect captured at construction.
    pub fn dialect(&self) -> Dialect {
        self.dialect
    }

    /// Assemble the statement text and its bound values.
    pub fn build(&self) -> (String, Vec<Value>) {
        let mut values = Vec::new();
        let mut text = format!("SELECT {} FROM {}", self.fields.to_sql(), self.table);

        for join in &self.joins {
            text.push(' ');
            text.push_str(join);
        }

        let where_sql = self.where_expr.render(ParamStyle::Numbered, &mut values);
        if !where_sql.is_empty() {
            text.push_str(" WHERE ");
            text.push_str(&where_sql);
        }

        if !self.group_by.is_empty() {
            text.push_str(" GROUP BY ");
            text.push_str(&self.group_by.join(", "));
        }

        if !self.having.is_empty() {
            let parts: Vec<String> = self
                .having
                .iter()
                .map(|(predicate, op)| {
                    render_predicate(predicate, op, ParamStyle::Numbered, &mut values)
                })
                .filter(|s| !s.is_empty())
                .collect();
            if !parts.is_empty() {
                text.push_str(" HAVING ");
                text.push_str(&parts.join(" AND "));
            }
        }

        if !self.order_by.is_empty() {
            text.push_str(" ORDER BY ");
            text.push_str(&self.order_by.join(", "));
        }

        match (self.dialect, &self.limit, &self.offset) {
            (Dialect::Mysql, Some(count), Some(offset)) => {
                text.push_str(&format!(" LIMIT {offset}, {count}"));
            }
            (_, Some(count), Some(offset)) => {
                text.push_str(&format!(" LIMIT {count} OFFSET {offset}"));
            }
            (_, Some(count), None) => {
                text.push_str(&format!(" LIMIT {count}"));
            }
            (_, None, _) => {}
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

impl Statement for SelectQuery {
    fn dialect(&self) -> Dialect {
        SelectQuery::dialect(self)
    }

    fn build(&self) -> (String, Vec<Value>) {
        SelectQuery::build(self)
    }
}
