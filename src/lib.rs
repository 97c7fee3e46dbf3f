//! # html_table
//!
//! Render items as HTML tables from a declarative configuration.
//!
//! Two layouts are supported:
//!
//! - **Row-oriented** ([`Table`]): each item is a row, each column a cell, with
//!   an optional `<thead>` (by default a row of column titles) and `<tfoot>`
//! - **Column-oriented** ([`VerticalTable`]): each column is a row that starts
//!   with its title, each item a cell
//!
//! ## Quick Start
//!
//! ```rust
//! use html_table::{value, Table, TableConfig};
//!
//! let config = TableConfig::new()
//!     .with_items(vec![
//!         value!({ "id": 1, "name": "A" }),
//!         value!({ "id": 2, "name": "B" }),
//!     ])
//!     .with_columns([("id", "ID"), ("name", "Name")])
//!     .with_cell_attr("class", "col-{column}");
//!
//! let html = Table::html(config);
//! assert!(html.starts_with("<table><thead><tr><th class=\"col-id\">ID</th>"));
//! assert!(html.contains("<tr><td class=\"col-id\">2</td><td class=\"col-name\">B</td></tr>"));
//! ```
//!
//! ### Callbacks
//!
//! A callback receives the item, the column key and the row index and returns
//! the cell's inner HTML. Content is not escaped for you; use
//! [`element::escape`] for untrusted text.
//!
//! ```rust
//! use html_table::{element, value, TableConfig, VerticalTable};
//!
//! let html = VerticalTable::html(
//!     TableConfig::new()
//!         .with_item(value!({ "note": "<b>bold</b>" }))
//!         .with_column("note", "Note")
//!         .with_callback("note", |item, column, _| {
//!             element::escape(&html_table::item_key_value(item, column))
//!         }),
//! );
//! assert!(html.contains("<td>&lt;b&gt;bold&lt;/b&gt;</td>"));
//! ```
//!
//! ### Typed Items
//!
//! ```rust
//! use html_table::{render_table, Section, TableConfig};
//! use serde::Serialize;
//!
//! #[derive(Serialize)]
//! struct Product { sku: String, price: f64 }
//!
//! let config = TableConfig::new()
//!     .with_serialized_items(&[Product { sku: "A-1".into(), price: 9.5 }])
//!     .unwrap()
//!     .with_columns([("sku", "SKU"), ("price", "Price")])
//!     .with_show_header(Section::Suppressed);
//!
//! assert_eq!(
//!     render_table(config),
//!     "<table><tbody><tr><td>A-1</td><td>9.5</td></tr></tbody></table>"
//! );
//! ```
//!
//! ### Dynamic Configuration
//!
//! Configuration can be read from any serde format through [`Value`]. The data
//! is merged over the defaults with [`merge`]:
//!
//! ```rust
//! use html_table::{Table, TableConfig, Value};
//!
//! let data: Value = serde_json::from_str(r#"{
//!     "items": [{ "id": 1 }],
//!     "columns": { "id": "ID" },
//!     "show_header": false
//! }"#).unwrap();
//!
//! let html = Table::html(TableConfig::from_value(&data));
//! assert_eq!(html, "<table><tbody><tr><td>1</td></tr></tbody></table>");
//! ```
//!
//! ## Failure Behavior
//!
//! Rendering never fails. Missing fields, missing callbacks and nested values
//! without a callback render as empty cells; suppressed sections are omitted.
//! Errors only come from [`to_value`] and [`TableConfig::try_from_value`].

pub mod attributes;
pub mod config;
pub mod element;
pub mod error;
pub mod macros;
pub mod map;
pub mod merge;
pub mod render;
pub mod ser;
pub mod table;
pub mod value;
pub mod vertical;

pub use attributes::{format_attributes, Attributes};
pub use config::{CellCallback, Callbacks, Columns, Section, SectionCallback, TableConfig};
pub use error::{Error, Result};
pub use map::Map;
pub use merge::merge;
pub use render::{item_key_value, render_table, render_vertical_table, HtmlTable};
pub use ser::{to_value, ValueSerializer};
pub use table::Table;
pub use value::{Number, Value};
pub use vertical::VerticalTable;
