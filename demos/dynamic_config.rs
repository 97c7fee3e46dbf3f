//! Building a table from configuration data.
//!
//! Run with: cargo run --example dynamic_config

use html_table::{merge, value, Table, TableConfig, Value};
use std::error::Error;

fn main() -> Result<(), Box<dyn Error>> {
    let data: Value = serde_json::from_str(
        r#"{
            "items": [
                { "sku": "WIDGET-001", "price": 29.99 },
                { "sku": "GADGET-002", "price": 49 }
            ],
            "columns": { "sku": "SKU", "price": "Price" },
            "header_cols": ["sku"],
            "table_attrs": { "class": "products" },
            "show_footer": "<tr><td colspan=\"2\">2 products</td></tr>"
        }"#,
    )?;

    // Strict reading reports malformed fields
    let config = TableConfig::try_from_value(&data)?;
    println!("From JSON:\n{}\n", Table::html(config));

    match TableConfig::try_from_value(&value!({ "columns": 42 })) {
        Ok(_) => println!("Unexpectedly accepted\n"),
        Err(e) => println!("Rejected: {}\n", e),
    }

    // Lenient reading falls back to defaults
    let config = TableConfig::from_value(&value!({ "items": [{ "sku": "X" }], "columns": 42 }));
    println!("Lenient:\n{}\n", Table::html(config));

    // Merging layers of configuration
    let site = value!({ "table_attrs": { "class": "site", "border": "1" } });
    let page = value!({ "table_attrs": { "class": "page" }, "header_cols": ["sku"] });
    let merged = merge(&page, &merge(&site, &TableConfig::default_value(), false), false);
    println!("Merged configuration: {:?}", merged.get("table_attrs"));

    Ok(())
}
