//! SQL dialect selection.
//!
//! A [`Dialect`] names a syntax variant. It only affects how LIMIT/OFFSET
//! are rendered; positional placeholders are `$n` under every dialect.

use std::fmt;
use std::str::FromStr;

use crate::error::BuildError;

/// A named SQL syntax variant.
///
/// Every statement captures its dialect at creation time and keeps it for
/// the rest of its life.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Dialect {
    /// PostgreSQL: `LIMIT count [OFFSET offset]`
    #[default]
    Postgres,
    /// MySQL: `LIMIT offset, count` when an offset is present
    Mysql,
    /// Microsoft SQL Server: LIMIT/OFFSET paging is not available
    Mssql,
}

impl Dialect {
    /// The lowercase dialect name.
    pub fn as_str(&self) -> &'static str {
        match self {
            Dialect::Postgres => "postgres",
            Dialect::Mysql => "mysql",
            Dialect::Mssql => "mssql",
        }
    }
}

impl fmt::Display for Dialect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Dialect {
    type Err = BuildError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "postgres" => Ok(Dialect::Postgres),
            "mysql" => Ok(Dialect::Mysql),
            "mssql" => Ok(Dialect::Mssql),
            other => Err(BuildError::InvalidDialect(other.to_string())),
        }
    }
}
