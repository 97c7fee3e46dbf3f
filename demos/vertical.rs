//! Rendering a column-oriented table.
//!
//! Run with: cargo run --example vertical

use html_table::{element, item_key_value, value, TableConfig, VerticalTable};
use std::error::Error;

fn main() -> Result<(), Box<dyn Error>> {
    let items = vec![
        value!({ "city": "Oslo", "population": 709037, "note": "capital" }),
        value!({ "city": "Bergen", "population": 291940, "note": "<rain>" }),
        value!({ "city": "Trondheim", "population": 212660 }),
    ];

    // Each column becomes a row; cells come only from callbacks
    let config = TableConfig::new()
        .with_items(items)
        .with_columns([("city", "City"), ("population", "Population"), ("note", "Note")])
        .with_callback("city", |item, column, _| item_key_value(item, column))
        .with_callback("population", |item, column, _| item_key_value(item, column))
        .with_callback("note", |item, column, _| {
            element::escape(&item_key_value(item, column))
        })
        .with_header_col("city")
        .with_table_attr("class", "vertical")
        .with_row_attr("id", "row-{column}")
        .with_cell_attr("class", "{column}-{index}");

    let table = VerticalTable::new(config);
    println!("{}", table);

    Ok(())
}
