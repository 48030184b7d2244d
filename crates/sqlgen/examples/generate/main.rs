//! Example demonstrating the four statement builders.
//!
//! Run with:
//!   cargo run --example generate -p sqlgen

use sqlgen::{Dialect, Generator, columns};

fn main() -> Result<(), sqlgen::BuildError> {
    let pg = Generator::new(Dialect::Postgres);

    let list = pg
        .select("users", ["id", "name", "email"])
        .join("orders", [("users.id", "orders.user_id")])
        .filter(vec![("status", "active")])
        .and("deleted_at IS NULL")
        .orderby("created_at DESC")
        .limit(20)?
        .offset(40)?;
    println!("text:   {}", list.text());
    println!("values: {:?}", list.values());

    let create = pg
        .insert("users", columns! { "name" => "alice", "age" => 34 })
        .returning(["id"]);
    println!("text:   {}", create.text());
    println!("values: {:?}", create.values());

    let rename = pg
        .update("users", columns! { "name" => "bob" })
        .filter(vec![("id", 7)]);
    println!("text:   {}", rename.text());
    println!("values: {:?}", rename.values());

    let remove = pg.delete("sessions").filter(vec![("user_id", 7)]);
    println!("text:   {}", remove.text());
    println!("values: {:?}", remove.values());

    Ok(())
}
