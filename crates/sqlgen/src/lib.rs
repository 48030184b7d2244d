//! # sqlgen
//!
//! A dialect-aware SQL statement generator. Structured inputs — table
//! name, field lists, predicate maps, ordering and paging directives —
//! become a parameterized statement (`text`) plus an ordered list of bound
//! values (`values`). The crate never talks to a database: executing the
//! pair against a driver is the caller's concern.
//!
//! ## Features
//!
//! - **Fluent builders**: `select` / `insert` / `update` / `delete`
//!   factories return chainable, exclusively-owned builders
//! - **Dialect aware**: postgres, mysql and mssql diverge where their
//!   syntax does (LIMIT/OFFSET); placeholders are `$n` everywhere
//! - **Ordering guarantee**: the i-th entry of `values` always matches the
//!   i-th value-bearing position of `text`, across chained clauses
//! - **No global state**: a [`Generator`] captures the dialect once and
//!   hands it to every statement it creates
//!
//! ## Quick start
//!
//! ```
//! use sqlgen::{Dialect, Generator, Value};
//!
//! let pg = Generator::new(Dialect::Postgres);
//! let q = pg
//!     .select("users", ["id", "name"])
//!     .filter(vec![("id", 2)]);
//!
//! assert_eq!(q.text(), "SELECT id, name FROM users WHERE id = $1");
//! assert_eq!(q.values(), vec![Value::Int(2)]);
//! ```
//!
//! INSERT and UPDATE keep the engine's historical dual representation:
//! values are inlined as quoted literals *and* collected into `values` in
//! the same order. SELECT and DELETE parameterize with `$n` placeholders.
//! This asymmetry is part of the contract, not an accident.

pub mod dialect;
pub mod error;
pub mod qb;
pub mod value;

pub use dialect::Dialect;
pub use error::{BuildError, BuildResult};
pub use value::Value;

// Re-export the builder surface for easy access
pub use qb::{
    Columns, DeleteQuery, Fields, Generator, InsertQuery, JoinOn, Predicate, SelectQuery,
    Statement, UpdateQuery, delete, insert, select, update,
};
