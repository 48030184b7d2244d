//! Bound parameter values.
//!
//! A [`Value`] is what a statement collects into its `values` list. The
//! `Display` impl renders the bare literal body used when a value is
//! inlined into the text as a quoted literal: `Int(2)` prints `2`,
//! `Text("string")` prints `string`.

use std::fmt;

/// A value bound into a statement.
#[derive(Clone, Debug, PartialEq)]
pub enum Value {
    /// SQL NULL
    Null,
    /// Boolean
    Bool(bool),
    /// 64-bit signed integer
    Int(i64),
    /// 64-bit float
    Float(f64),
    /// Text
    Text(String),
}

impl Value {
    /// Whether this value may be inlined into a paging clause.
    ///
    /// Only numeric values qualify; everything else (including
    /// injection-shaped strings) is rejected by `limit`/`offset`.
    pub fn is_numeric(&self) -> bool {
        matches!(self, Value::Int(_) | Value::Float(_))
    }

    /// Render as a single-quoted inline literal: `'2'`, `'string'`.
    pub(crate) fn to_inline(&self) -> String {
        format!("'{self}'")
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Null => f.write_str("null"),
            Value::Bool(b) => write!(f, "{b}"),
            Value::Int(n) => write!(f, "{n}"),
            Value::Float(x) => write!(f, "{x}"),
            Value::Text(s) => f.write_str(s),
        }
    }
}

macro_rules! value_from_int {
    ($($ty:ty),*) => {
        $(
            impl From<$ty> for Value {
                fn from(n: $ty) -> Self {
                    Value::Int(i64::from(n))
                }
            }
        )*
    };
}

value_from_int!(i8, i16, i32, i64, u8, u16, u32);

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}

impl From<f32> for Value {
    fn from(x: f32) -> Self {
        Value::Float(f64::from(x))
    }
}

impl From<f64> for Value {
    fn from(x: f64) -> Self {
        Value::Float(x)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::Text(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::Text(s)
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(opt: Option<T>) -> Self {
        match opt {
            Some(v) => v.into(),
            None => Value::Null,
        }
    }
}

impl From<serde_json::Value> for Value {
    fn from(json: serde_json::Value) -> Self {
        match json {
            serde_json::Value::Null => Value::Null,
            serde_json::Value::Bool(b) => Value::Bool(b),
            serde_json::Value::Number(n) => match n.as_i64() {
                Some(i) => Value::Int(i),
                None => Value::Float(n.as_f64().unwrap_or_default()),
            },
            serde_json::Value::String(s) => Value::Text(s),
            // Arrays and objects keep their JSON text form.
            other => Value::Text(other.to_string()),
        }
    }
}

#[cfg(feature = "chrono")]
impl From<chrono::DateTime<chrono::Utc>> for Value {
    fn from(ts: chrono::DateTime<chrono::Utc>) -> Self {
        Value::Text(ts.to_rfc3339())
    }
}

#[cfg(feature = "chrono")]
impl From<chrono::NaiveDate> for Value {
    fn from(date: chrono::NaiveDate) -> Self {
        Value::Text(date.to_string())
    }
}

#[cfg(feature = "uuid")]
impl From<uuid::Uuid> for Value {
    fn from(id: uuid::Uuid) -> Self {
        Value::Text(id.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_renders_literal_bodies() {
        assert_eq!(Value::Int(2).to_string(), "2");
        assert_eq!(Value::Text("string".into()).to_string(), "string");
        assert_eq!(Value::Bool(true).to_string(), "true");
        assert_eq!(Value::Float(1.5).to_string(), "1.5");
        assert_eq!(Value::Null.to_string(), "null");
    }

    #[test]
    fn inline_form_is_quoted() {
        assert_eq!(Value::Int(2).to_inline(), "'2'");
        assert_eq!(Value::Text("string".into()).to_inline(), "'string'");
    }

    #[test]
    fn numeric_check() {
        assert!(Value::Int(10).is_numeric());
        assert!(Value::Float(0.5).is_numeric());
        assert!(!Value::Text("10".into()).is_numeric());
        assert!(!Value::Bool(true).is_numeric());
        assert!(!Value::Null.is_numeric());
    }

    #[test]
    fn from_option() {
        assert_eq!(Value::from(Some(3i32)), Value::Int(3));
        assert_eq!(Value::from(Option::<i32>::None), Value::Null);
    }

    #[test]
    fn from_json_scalars() {
        assert_eq!(Value::from(serde_json::json!(2)), Value::Int(2));
        assert_eq!(Value::from(serde_json::json!("s")), Value::Text("s".into()));
        assert_eq!(Value::from(serde_json::json!(null)), Value::Null);
        assert_eq!(Value::from(serde_json::json!(2.5)), Value::Float(2.5));
    }
}
