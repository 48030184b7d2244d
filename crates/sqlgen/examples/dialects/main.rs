//! Example showing where the dialects diverge: pagination rendering.
//!
//! Run with:
//!   cargo run --example dialects -p sqlgen

use sqlgen::{Dialect, Generator};

fn main() {
    for dialect in [Dialect::Postgres, Dialect::Mysql] {
        let query = Generator::new(dialect)
            .select("events", ["id", "kind"])
            .orderby("id")
            .limit(50)
            .expect("numeric limit")
            .offset(100)
            .expect("numeric offset");
        println!("{dialect:>8}: {}", query.text());
    }

    // mssql has no LIMIT/OFFSET surface; the chain call fails fast.
    let err = Generator::new(Dialect::Mssql)
        .select("events", ["id"])
        .limit(50)
        .unwrap_err();
    println!("   mssql: {err}");
}
