//! Row-oriented tables: one row per item, one cell per column.
//!
//! ```rust
//! use html_table::{value, Table, TableConfig};
//!
//! let table = Table::new(
//!     TableConfig::new()
//!         .with_items(vec![value!({ "id": 1, "name": "A" })])
//!         .with_columns([("id", "ID"), ("name", "Name")]),
//! );
//! assert_eq!(
//!     table.to_html(),
//!     "<table><thead><tr><th>ID</th><th>Name</th></tr></thead>\
//!      <tbody><tr><td>1</td><td>A</td></tr></tbody></table>"
//! );
//! ```
//!
//! ## Sections
//!
//! The `<thead>` comes from `show_header`: by default a row of column titles
//! built by [`Table::headers_row`]. `show_footer` works the same way and is
//! omitted by default.
//!
//! ## Indices
//!
//! The header row is rendered with index 0 and body rows count from 1. Row
//! attributes are formatted with `row` as the `{column}` token.

use crate::element::{self, Tag};
use crate::render::{item_key_value, HtmlTable};
use crate::{
    format_attributes, Attributes, Callbacks, CellCallback, Columns, Section, TableConfig, Value,
};
use indexmap::IndexSet;
use std::fmt;

/// Value substituted for `{column}` in row attributes.
pub const ROW_TOKEN_VALUE: &str = "row";

/// Which columns render as `<th>` in a row.
enum HeaderCells<'a> {
    Listed(&'a IndexSet<String>),
    All,
}

impl HeaderCells<'_> {
    fn contains(&self, column: &str) -> bool {
        match self {
            HeaderCells::Listed(columns) => columns.contains(column),
            HeaderCells::All => true,
        }
    }
}

/// A row-oriented HTML table.
#[derive(Clone, Debug)]
pub struct Table {
    items: Vec<Value>,
    columns: Columns,
    callbacks: Callbacks,
    show_header: Section,
    show_footer: Section,
    table_attrs: Attributes,
    row_attrs: Attributes,
    cell_attrs: Attributes,
    header_cols: IndexSet<String>,
}

impl Table {
    #[must_use]
    pub fn new(config: TableConfig) -> Self {
        Table {
            items: config.items,
            columns: config.columns,
            callbacks: config.callbacks,
            show_header: config.show_header,
            show_footer: config.show_footer,
            table_attrs: config.table_attrs,
            row_attrs: config.row_attrs,
            cell_attrs: config.cell_attrs,
            header_cols: config.header_cols,
        }
    }

    /// Builds a table from `config` and renders it.
    #[must_use]
    pub fn html(config: TableConfig) -> String {
        Self::new(config).to_html()
    }

    /// Renders `<table>` with head, body and foot.
    #[must_use]
    pub fn to_html(&self) -> String {
        let mut content = self.table_header();
        content.push_str(&self.table_body());
        content.push_str(&self.table_footer());
        element::html(Tag::Table, &self.table_attrs, &content)
    }

    /// The default header section: one row holding every visible column title.
    ///
    /// All visible columns render as `<th>` and their content is the title.
    /// The table's own header columns and callbacks are not consulted and are
    /// left untouched.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use html_table::{Table, TableConfig};
    ///
    /// let table = Table::new(
    ///     TableConfig::new()
    ///         .with_columns([("id", "ID"), ("hidden", "")])
    ///         .with_row_attr("class", "{column}-{index}"),
    /// );
    /// assert_eq!(
    ///     Table::headers_row(&table, 0),
    ///     "<tr class=\"row-0\"><th>ID</th></tr>"
    /// );
    /// ```
    #[must_use]
    pub fn headers_row(table: &Table, index: usize) -> String {
        let titles = table.columns.to_value();
        table.render_row(&titles, index, &HeaderCells::All, None)
    }

    /// `<thead>` from `show_header`, or an empty string when suppressed.
    #[must_use]
    pub fn table_header(&self) -> String {
        self.section(Tag::Thead, &self.show_header)
    }

    /// `<tfoot>` from `show_footer`, or an empty string when suppressed.
    #[must_use]
    pub fn table_footer(&self) -> String {
        self.section(Tag::Tfoot, &self.show_footer)
    }

    fn section(&self, tag: Tag, section: &Section) -> String {
        match section {
            Section::Callback(callback) => {
                element::html(tag, &Attributes::new(), &callback(self, 0))
            }
            Section::Literal(html) if !html.is_empty() => {
                element::html(tag, &Attributes::new(), html)
            }
            Section::Literal(_) | Section::Suppressed => String::new(),
        }
    }

    #[must_use]
    pub fn table_body(&self) -> String {
        element::html(Tag::Tbody, &Attributes::new(), &self.table_rows(&self.items, 1))
    }

    /// One row per item, numbered from `start`.
    #[must_use]
    pub fn table_rows(&self, items: &[Value], start: usize) -> String {
        items
            .iter()
            .enumerate()
            .map(|(offset, item)| self.row(item, start + offset))
            .collect()
    }

    /// One `<tr>` with a cell per visible column.
    #[must_use]
    pub fn row(&self, item: &Value, index: usize) -> String {
        self.render_row(
            item,
            index,
            &HeaderCells::Listed(&self.header_cols),
            Some(&self.callbacks),
        )
    }

    fn render_row(
        &self,
        item: &Value,
        index: usize,
        header_cells: &HeaderCells<'_>,
        callbacks: Option<&Callbacks>,
    ) -> String {
        let cells: String = self
            .columns
            .visible()
            .map(|column| {
                let callback = callbacks.and_then(|c| c.get(column));
                let content = content_for(callback, item, column, index);
                self.render_cell(column, index, header_cells.contains(column), &content)
            })
            .collect();

        element::html(
            Tag::Tr,
            &format_attributes(&self.row_attrs, ROW_TOKEN_VALUE, index),
            &cells,
        )
    }

    /// One `<th>` or `<td>` for `item` in `column`.
    #[must_use]
    pub fn cell(&self, item: &Value, column: &str, index: usize) -> String {
        let content = self.cell_content(item, column, index);
        self.render_cell(column, index, self.is_header_col(column), &content)
    }

    fn render_cell(&self, column: &str, index: usize, is_header: bool, content: &str) -> String {
        let attrs = format_attributes(&self.cell_attrs, column, index);
        let tag = if is_header { Tag::Th } else { Tag::Td };
        element::html(tag, &attrs, content)
    }

    /// The column's callback result, or else the item's scalar field.
    #[must_use]
    pub fn cell_content(&self, item: &Value, column: &str, index: usize) -> String {
        content_for(self.column_callback(column), item, column, index)
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

    pub fn show_header(&self) -> &Section {
        &self.show_header
    }

    pub fn set_show_header(&mut self, section: Section) -> &mut Self {
        self.show_header = section;
        self
    }

    pub fn show_footer(&self) -> &Section {
        &self.show_footer
    }

    pub fn set_show_footer(&mut self, section: Section) -> &mut Self {
        self.show_footer = section;
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

fn content_for(
    callback: Option<&CellCallback>,
    item: &Value,
    column: &str,
    index: usize,
) -> String {
    match callback {
        Some(callback) => callback(item, column, index),
        None => item_key_value(item, column),
    }
}

impl HtmlTable for Table {
    fn new(config: TableConfig) -> Self {
        Table::new(config)
    }

    fn to_html(&self) -> String {
        Table::to_html(self)
    }
}

impl fmt::Display for Table {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_html())
    }
}
