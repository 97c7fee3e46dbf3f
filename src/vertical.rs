//! Column-oriented ("vertical") tables: one row per column, one cell per item.
//!
//! Each row starts with a `<th>` holding the column title, followed by one cell
//! per item. Cell content comes only from the column's callback; a column
//! without a callback renders empty cells.
//!
//! ```rust
//! use html_table::{value, TableConfig, VerticalTable};
//!
//! let html = VerticalTable::html(
//!     TableConfig::new()
//!         .with_items(vec![value!({ "id": 1 }), value!({ "id": 2 })])
//!         .with_column("id", "ID")
//!         .with_callback("id", |item, column, _| html_table::item_key_value(item, column)),
//! );
//! assert_eq!(
//!     html,
//!     "<table><tbody><tr><th>ID</th><td>1</td><td>2</td></tr></tbody></table>"
//! );
//! ```
//!
//! There is no `<thead>` or `<tfoot>`; `show_header` and `show_footer` are
//! ignored. Row attributes are formatted with the column key and index 0, item
//! cells with the item index counting from 1.

use crate::element::{self, Tag};
use crate::render::HtmlTable;
use crate::{format_attributes, Attributes, Callbacks, CellCallback, Columns, TableConfig, Value};
use indexmap::IndexSet;
use std::fmt;

/// A column-oriented HTML table.
#[derive(Clone, Debug)]
pub struct VerticalTable {
    items: Vec<Value>,
    columns: Columns,
    callbacks: Callbacks,
    table_attrs: Attributes,
    row_attrs: Attributes,
    cell_attrs: Attributes,
    header_cols: IndexSet<String>,
}

impl VerticalTable {
    #[must_use]
    pub fn new(config: TableConfig) -> Self {
        if !config.show_footer.is_suppressed() {
            log::debug!("vertical tables have no footer; ignoring show_footer");
        }
        VerticalTable {
            items: config.items,
            columns: config.columns,
            callbacks: config.callbacks,
            table_attrs: config.table_attrs,
            row_attrs: config.row_attrs,
            cell_attrs: config.cell_attrs,
            header_cols: config.header_cols,
        }
    }

    #[must_use]
    pub fn html(config: TableConfig) -> String {
        Self::new(config).to_html()
    }

    #[must_use]
    pub fn to_html(&self) -> String {
        element::html(Tag::Table, &self.table_attrs, &self.table_body())
    }

    #[must_use]
    pub fn table_body(&self) -> String {
        element::html(Tag::Tbody, &Attributes::new(), &self.table_rows())
    }

    /// One row per visible column, in column order.
    #[must_use]
    pub fn table_rows(&self) -> String {
        self.columns
            .visible()
            .map(|column| self.table_row(column))
            .collect()
    }

    /// The title cell for `column` followed by one cell per item.
    #[must_use]
    pub fn table_row(&self, column: &str) -> String {
        let is_header = self.is_header_col(column);
        let mut cells = self.column_header(column);
        for (offset, item) in self.items.iter().enumerate() {
            cells.push_str(&self.cell(item, column, offset + 1, is_header));
        }

        element::html(Tag::Tr, &format_attributes(&self.row_attrs, column, 0), &cells)
    }

    #[must_use]
    pub fn cell(&self, item: &Value, column: &str, index: usize, is_header: bool) -> String {
        let attrs = format_attributes(&self.cell_attrs, column, index);
        let tag = if is_header { Tag::Th } else { Tag::Td };
        element::html(tag, &attrs, &self.cell_content(item, column, index))
    }

    /// The column's callback result; empty without a callback.
    #[must_use]
    pub fn cell_content(&self, item: &Value, column: &str, index: usize) -> String {
        self.column_callback(column)
            .map(|callback| callback(item, column, index))
            .unwrap_or_default()
    }

    /// `<th>` holding the column title.
    #[must_use]
    pub fn column_header(&self, column: &str) -> String {
        element::html(
            Tag::Th,
            &format_attributes(&self.cell_attrs, column, 0),
            self.columns.title(column).unwrap_or_default(),
        )
    }

    #[must_use]
    pub fn column_callback(&self, column: &str) -> Option<&CellCallback> {
        self.callbacks.get(column)
    }

    #[must_use]
    pub fn is_header_col(&self, column: &str) -> bool {
        self.header_cols.contains(column)
    }

    pub fn items(&self) -> &[Value] {
        &self.items
    }

    pub fn set_items(&mut self, items: Vec<Value>) -> &mut Self {
        self.items = items;
        self
    }

    pub fn columns(&self) -> &Columns {
        &self.columns
    }

    pub fn set_columns(&mut self, columns: Columns) -> &mut Self {
        self.columns = columns;
        self
    }

    pub fn callbacks(&self) -> &Callbacks {
        &self.callbacks
    }

    pub fn set_callbacks(&mut self, callbacks: Callbacks) -> &mut Self {
        self.callbacks = callbacks;
        self
    }

    pub fn table_attrs(&self) -> &Attributes {
        &self.table_attrs
    }

    pub fn set_table_attrs(&mut self, attrs: Attributes) -> &mut Self {
        self.table_attrs = attrs;
        self
    }

    pub fn row_attrs(&self) -> &Attributes {
        &self.row_attrs
    }

    pub fn set_row_attrs(&mut self, attrs: Attributes) -> &mut Self {
        self.row_attrs = attrs;
        self
    }

    pub fn cell_attrs(&self) -> &Attributes {
        &self.cell_attrs
    }

    pub fn set_cell_attrs(&mut self, attrs: Attributes) -> &mut Self {
        self.cell_attrs = attrs;
        self
    }

    pub fn header_cols(&self) -> &IndexSet<String> {
        &self.header_cols
    }

    pub fn set_header_cols(&mut self, columns: IndexSet<String>) -> &mut Self {
        self.header_cols = columns;
        self
    }
}

impl HtmlTable for VerticalTable {
    fn new(config: TableConfig) -> Self {
        VerticalTable::new(config)
    }

    fn to_html(&self) -> String {
        VerticalTable::to_html(self)
    }
}

impl fmt::Display for VerticalTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_html())
    }
}
