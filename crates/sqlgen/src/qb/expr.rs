//! Clause inputs for the statement builders.
//!
//! [`Fields`], [`Columns`], [`Predicate`] and [`JoinOn`] are the semantic
//! inputs a caller hands to a builder; [`WhereExpr`] is the shared WHERE
//! layer that turns predicates into a clause fragment plus the values it
//! contributes, under one of two parameter styles.

use crate::value::Value;

/// Ordered list of column/expression strings.
///
/// A single string is shorthand for a one-element list. Entries are
/// rendered verbatim, including any embedded direction keyword such as
/// `DESC`.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Fields(Vec<String>);

impl Fields {
    /// Whether the list holds no entries.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub(crate) fn to_sql(&self) -> String {
        self.0.join(", ")
    }
}

impl IntoIterator for Fields {
    type Item = String;
    type IntoIter = std::vec::IntoIter<String>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl From<&str> for Fields {
    fn from(field: &str) -> Self {
        Fields(vec![field.to_string()])
    }
}

impl From<String> for Fields {
    fn from(field: String) -> Self {
        Fields(vec![field])
    }
}

impl<S: Into<String>> From<Vec<S>> for Fields {
    fn from(fields: Vec<S>) -> Self {
        Fields(fields.into_iter().map(Into::into).collect())
    }
}

impl<S: Into<String>, const N: usize> From<[S; N]> for Fields {
    fn from(fields: [S; N]) -> Self {
        Fields(fields.into_iter().map(Into::into).collect())
    }
}

/// Ordered column→value pairs.
///
/// Used both as the assignment map of INSERT/UPDATE and as the mapping
/// form of a [`Predicate`]. Pair order is preserved: it decides the order
/// of columns in the text and of values in the collected list.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Columns(Vec<(String, Value)>);

impl Columns {
    /// Whether the map holds no pairs.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Number of pairs.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub(crate) fn pairs(&self) -> &[(String, Value)] {
        &self.0
    }

    /// Build a column map from anything serializing to a JSON object.
    ///
    /// Key order follows the serialized field order.
    pub fn from_json<T: serde::Serialize>(value: &T) -> serde_json::Result<Self> {
        match serde_json::to_value(value)? {
            serde_json::Value::Object(map) => Ok(Columns(
                map.into_iter().map(|(k, v)| (k, Value::from(v))).collect(),
            )),
            other => Err(serde::ser::Error::custom(format!(
                "expected a JSON object, got {other}"
            ))),
        }
    }
}

impl<K: Into<String>, V: Into<Value>> From<Vec<(K, V)>> for Columns {
    fn from(pairs: Vec<(K, V)>) -> Self {
        Columns(pairs.into_iter().map(|(k, v)| (k.into(), v.into())).collect())
    }
}

impl<K: Into<String>, V: Into<Value>, const N: usize> From<[(K, V); N]> for Columns {
    fn from(pairs: [(K, V); N]) -> Self {
        Columns(pairs.into_iter().map(|(k, v)| (k.into(), v.into())).collect())
    }
}

/// Build a [`Columns`] map from heterogeneous `column => value` pairs.
///
/// ```ignore
/// let q = sqlgen::insert("table", columns! { "f1" => 2, "f2" => "string" });
/// ```
#[macro_export]
macro_rules! columns {
    ($($col:expr => $val:expr),* $(,)?) => {
        $crate::Columns::from(vec![
            $((::std::string::String::from($col), $crate::Value::from($val))),*
        ])
    };
}

/// A WHERE/HAVING input: ordered column→value pairs or a raw SQL fragment.
#[derive(Clone, Debug, PartialEq)]
pub enum Predicate {
    /// One comparison per pair, AND-joined and parenthesized when there is
    /// more than one pair; values contributed in pair order.
    Columns(Columns),
    /// Verbatim fragment, contributes no values.
    Raw(String),
}

impl Predicate {
    /// Build a mapping predicate from anything serializing to a JSON
    /// object.
    pub fn from_json<T: serde::Serialize>(value: &T) -> serde_json::Result<Self> {
        Columns::from_json(value).map(Predicate::Columns)
    }
}

impl From<&str> for Predicate {
    fn from(raw: &str) -> Self {
        Predicate::Raw(raw.to_string())
    }
}

impl From<String> for Predicate {
    fn from(raw: String) -> Self {
        Predicate::Raw(raw)
    }
}

impl From<Columns> for Predicate {
    fn from(columns: Columns) -> Self {
        Predicate::Columns(columns)
    }
}

impl<K: Into<String>, V: Into<Value>> From<Vec<(K, V)>> for Predicate {
    fn from(pairs: Vec<(K, V)>) -> Self {
        Predicate::Columns(pairs.into())
    }
}

impl<K: Into<String>, V: Into<Value>, const N: usize> From<[(K, V); N]> for Predicate {
    fn from(pairs: [(K, V); N]) -> Self {
        Predicate::Columns(pairs.into())
    }
}

/// INNER JOIN ON map: left-qualified column → right-qualified column.
///
/// Multiple pairs are AND-joined.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct JoinOn(Vec<(String, String)>);

impl JoinOn {
    pub(crate) fn to_sql(&self) -> String {
        self.0
            .iter()
            .map(|(left, right)| format!("{left} = {right}"))
            .collect::<Vec<_>>()
            .join(" AND ")
    }
}

impl<L: Into<String>, R: Into<String>> From<Vec<(L, R)>> for JoinOn {
    fn from(pairs: Vec<(L, R)>) -> Self {
        JoinOn(pairs.into_iter().map(|(l, r)| (l.into(), r.into())).collect())
    }
}

impl<L: Into<String>, R: Into<String>, const N: usize> From<[(L, R); N]> for JoinOn {
    fn from(pairs: [(L, R); N]) -> Self {
        JoinOn(pairs.into_iter().map(|(l, r)| (l.into(), r.into())).collect())
    }
}

/// Parameter rendering style for a clause.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum ParamStyle {
    /// `$n` positional placeholders, numbered across the whole statement.
    Numbered,
    /// Single-quoted literals in the text; values are still collected.
    Inline,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum Connective {
    And,
    Or,
}

impl Connective {
    fn as_sql(self) -> &'static str {
        match self {
            Connective::And => " AND ",
            Connective::Or => " OR ",
        }
    }
}

/// Accumulated WHERE terms for a statement.
///
/// Terms are rendered in insertion order, joined by their connective.
#[derive(Clone, Debug, Default)]
pub(crate) struct WhereExpr {
    terms: Vec<(Connective, Predicate)>,
}

impl WhereExpr {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }

    /// Append a predicate joined with AND (no connective for the first).
    pub fn and_with(&mut self, predicate: Predicate) {
        self.terms.push((Connective::And, predicate));
    }

    /// Append a predicate joined with OR.
    pub fn or_with(&mut self, predicate: Predicate) {
        self.terms.push((Connective::Or, predicate));
    }

    /// Render the clause body without the `WHERE` keyword.
    ///
    /// Placeholder numbers continue from `values.len() + 1`; contributed
    /// values are appended to `values` in their left-to-right text order.
    pub fn render(&self, style: ParamStyle, values: &mut Vec<Value>) -> String {
        let mut out = String::new();
        for (connective, predicate) in &self.terms {
            let fragment = render_predicate(predicate, "=", style, values);
            if fragment.is_empty() {
                continue;
            }
            if !out.is_empty() {
                out.push_str(connective.as_sql());
            }
            out.push_str(&fragment);
        }
        out
    }
}

/// Render one predicate with the given comparison operator.
///
/// Mapping predicates emit `<col> <op> <param>` per pair, AND-joined and
/// parenthesized when there is more than one pair. Raw fragments pass
/// through untouched.
pub(crate) fn render_predicate(
    predicate: &Predicate,
    op: &str,
    style: ParamStyle,
    values: &mut Vec<Value>,
) -> String {
    match predicate {
        Predicate::Raw(sql) => sql.clone(),
        Predicate::Columns(columns) => {
            let parts: Vec<String> = columns
                .pairs()
                .iter()
                .map(|(col, value)| {
                    values.push(value.clone());
                    match style {
                        ParamStyle::Numbered => format!("{col} {op} ${}", values.len()),
                        ParamStyle::Inline => format!("{col} {op} {}", value.to_inline()),
                    }
                })
                .collect();
            if parts.len() > 1 {
                format!("({})", parts.join(" AND "))
            } else {
                parts.concat()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fields_from_single_string() {
        assert_eq!(Fields::from("id"), Fields::from(["id"]));
    }

    #[test]
    fn fields_render_comma_separated() {
        assert_eq!(Fields::from(["id", "name"]).to_sql(), "id, name");
    }

    #[test]
    fn single_pair_renders_unparenthesized() {
        let mut values = Vec::new();
        let sql = render_predicate(
            &Predicate::from([("id", 2)]),
            "=",
            ParamStyle::Numbered,
            &mut values,
        );
        assert_eq!(sql, "id = $1");
        assert_eq!(values, vec![Value::Int(2)]);
    }

    #[test]
    fn multi_pair_parenthesizes_and_joins() {
        let mut values = Vec::new();
        let sql = render_predicate(
            &Predicate::from([("a", 1), ("b", 2)]),
            "=",
            ParamStyle::Numbered,
            &mut values,
        );
        assert_eq!(sql, "(a = $1 AND b = $2)");
        assert_eq!(values, vec![Value::Int(1), Value::Int(2)]);
    }

    #[test]
    fn numbering_continues_from_collected_values() {
        let mut values = vec![Value::Int(0)];
        let sql = render_predicate(
            &Predicate::from([("id", 2)]),
            ">",
            ParamStyle::Numbered,
            &mut values,
        );
        assert_eq!(sql, "id > $2");
    }

    #[test]
    fn inline_style_quotes_literals() {
        let mut values = Vec::new();
        let sql = render_predicate(
            &Predicate::from([("f3", "asdf")]),
            "=",
            ParamStyle::Inline,
            &mut values,
        );
        assert_eq!(sql, "f3 = 'asdf'");
        assert_eq!(values, vec![Value::Text("asdf".into())]);
    }

    #[test]
    fn raw_predicate_contributes_no_values() {
        let mut values = Vec::new();
        let sql = render_predicate(
            &Predicate::from("id IS NULL"),
            "=",
            ParamStyle::Numbered,
            &mut values,
        );
        assert_eq!(sql, "id IS NULL");
        assert!(values.is_empty());
    }

    #[test]
    fn where_expr_joins_terms_with_connectives() {
        let mut expr = WhereExpr::new();
        expr.and_with(Predicate::from("id IS NULL"));
        expr.and_with(Predicate::from("name IS NOT NULL"));
        expr.or_with(Predicate::from("age > 10"));

        let mut values = Vec::new();
        let sql = expr.render(ParamStyle::Numbered, &mut values);
        assert_eq!(sql, "id IS NULL AND name IS NOT NULL OR age > 10");
    }

    #[test]
    fn join_on_multi_pair_and_joins() {
        let on = JoinOn::from([("a.id", "b.a_id"), ("a.tenant", "b.tenant")]);
        assert_eq!(on.to_sql(), "a.id = b.a_id AND a.tenant = b.tenant");
    }

    #[test]
    fn columns_macro_preserves_order_and_types() {
        let cols = columns! { "f1" => 2, "f2" => "string" };
        assert_eq!(
            cols.pairs(),
            &[
                ("f1".to_string(), Value::Int(2)),
                ("f2".to_string(), Value::Text("string".into())),
            ]
        );
    }

    #[test]
    fn columns_from_json_object() {
        let cols = Columns::from_json(&serde_json::json!({"id": 3})).unwrap();
        assert_eq!(cols.pairs(), &[("id".to_string(), Value::Int(3))]);
    }

    #[test]
    fn columns_from_json_rejects_non_objects() {
        assert!(Columns::from_json(&serde_json::json!([1, 2])).is_err());
    }
}
