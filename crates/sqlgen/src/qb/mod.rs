//! Statement builders.
//!
//! This module provides the four statement kinds behind a shared surface:
//! a factory call creates a builder, chain methods accumulate clause
//! state, and reading `text()`/`values()` assembles the final statement.
//!
//! # Usage
//!
//! ```ignore
//! use sqlgen::{Dialect, Generator};
//!
//! let pg = Generator::new(Dialect::Postgres);
//!
//! // SELECT
//! let q = pg.select("users", ["id", "name"])
//!     .filter(vec![("status", "active")])
//!     .orderby("created_at DESC")
//!     .limit(20)?;
//! assert_eq!(q.text(), "SELECT id, name FROM users WHERE status = $1 ORDER BY created_at DESC LIMIT 20");
//!
//! // INSERT
//! let q = pg.insert("users", columns! { "name" => "alice" }).returning(["id"]);
//!
//! // UPDATE
//! let q = pg.update("users", columns! { "status" => "inactive" })
//!     .filter(vec![("id", 7)]);
//!
//! // DELETE
//! let q = pg.delete("users").filter(vec![("id", 7)]);
//! ```

mod delete;
mod expr;
mod insert;
mod select;
mod traits;
mod update;

pub use delete::DeleteQuery;
pub use expr::{Columns, Fields, JoinOn, Predicate};
pub use insert::InsertQuery;
pub use select::SelectQuery;
pub use traits::Statement;
pub use update::UpdateQuery;

use crate::dialect::Dialect;
use crate::error::BuildResult;
use crate::value::Value;

/// Statement factory bound to a dialect.
///
/// Construct one per dialect and reuse it for many statements. Each
/// statement captures the generator's dialect at creation time; the
/// generator itself is an immutable `Copy` value, so there is no shared
/// state to race on.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Generator {
    dialect: Dialect,
}

impl Generator {
    /// Create a generator for the given dialect.
    pub fn new(dialect: Dialect) -> Self {
        Self { dialect }
    }

    /// Create a generator from a dialect name.
    ///
    /// Unknown names fail with
    /// [`BuildError::InvalidDialect`](crate::BuildError::InvalidDialect).
    pub fn for_dialect(name: &str) -> BuildResult<Self> {
        Ok(Self::new(name.parse()?))
    }

    /// The dialect every statement from this generator captures.
    pub fn dialect(&self) -> Dialect {
        self.dialect
    }

    /// Create a SELECT statement: `SELECT <fields> FROM <table>`.
    ///
    /// `fields` accepts a single string or an ordered sequence.
    pub fn select(&self, table: &str, fields: impl Into<Fields>) -> SelectQuery {
        SelectQuery::new(self.dialect, table, fields.into())
    }

    /// Create an INSERT statement from ordered column→value pairs.
    pub fn insert(&self, table: &str, columns: impl Into<Columns>) -> InsertQuery {
        InsertQuery::new(self.dialect, table, columns.into())
    }

    /// Create an UPDATE statement from ordered column→value pairs.
    pub fn update(&self, table: &str, columns: impl Into<Columns>) -> UpdateQuery {
        UpdateQuery::new(self.dialect, table, columns.into())
    }

    /// Create a DELETE statement: `DELETE FROM <table>`.
    pub fn delete(&self, table: &str) -> DeleteQuery {
        DeleteQuery::new(self.dialect, table)
    }
}

/// Create a SELECT statement under the default dialect (postgres).
pub fn select(table: &str, fields: impl Into<Fields>) -> SelectQuery {
    Generator::default().select(table, fields)
}

/// Create an INSERT statement under the default dialect (postgres).
pub fn insert(table: &str, columns: impl Into<Columns>) -> InsertQuery {
    Generator::default().insert(table, columns)
}

/// Create an UPDATE statement under the default dialect (postgres).
pub fn update(table: &str, columns: impl Into<Columns>) -> UpdateQuery {
    Generator::default().update(table, columns)
}

/// Create a DELETE statement under the default dialect (postgres).
pub fn delete(table: &str) -> DeleteQuery {
    Generator::default().delete(table)
}

/// Emit the finished statement when the `tracing` feature is enabled.
pub(crate) fn trace_built(text: &str, values: &[Value]) {
    #[cfg(feature = "tracing")]
    tracing::debug!(target: "sqlgen", sql = %text, params = values.len(), "statement built");
    #[cfg(not(feature = "tracing"))]
    let _ = (text, values);
}
