//! Rendering a row-oriented table from typed items.
//!
//! Run with: cargo run --example simple

use html_table::{item_key_value, Section, Table, TableConfig};
use serde::Serialize;
use std::error::Error;

#[derive(Debug, Serialize)]
struct User {
    id: u32,
    name: String,
    email: String,
    active: bool,
}

fn main() -> Result<(), Box<dyn Error>> {
    let users = vec![
        User {
            id: 1,
            name: "Alice".to_string(),
            email: "alice@example.com".to_string(),
            active: true,
        },
        User {
            id: 2,
            name: "Bob".to_string(),
            email: "bob@example.com".to_string(),
            active: false,
        },
    ];

    // Plain fields fall back to a key lookup
    let config = TableConfig::new()
        .with_serialized_items(&users)?
        .with_columns([("id", "ID"), ("name", "Name"), ("email", "Email")]);
    println!("Default:\n{}\n", Table::html(config.clone()));

    // Callbacks produce the inner HTML of a cell
    let config = config
        .with_column("active", "Status")
        .with_callback("active", |item, column, _| {
            if item_key_value(item, column) == "1" {
                "<strong>active</strong>".to_string()
            } else {
                "inactive".to_string()
            }
        })
        .with_header_col("id")
        .with_table_attr("class", "users")
        .with_row_attr("class", "{column}-{index}")
        .with_cell_attr("data-column", "{column}");
    println!("With callbacks and attributes:\n{}\n", Table::html(config.clone()));

    // Hide a column by giving it an empty title
    let config = config.with_column("email", "");
    println!("Email hidden:\n{}\n", Table::html(config.clone()));

    // Custom header and footer sections
    let count = users.len();
    let config = config
        .with_show_header(Section::Suppressed)
        .with_show_footer(Section::callback(move |table: &Table, _| {
            format!(
                "<tr><td colspan=\"{}\">{} users</td></tr>",
                table.columns().visible().count(),
                count
            )
        }));
    println!("Footer only:\n{}", Table::html(config));

    Ok(())
}
