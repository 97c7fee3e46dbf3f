//! The contract shared by both table layouts.

use crate::{Table, TableConfig, Value, VerticalTable};

/// A table renderer built from a [`TableConfig`].
///
/// # Examples
///
/// ```rust
/// use html_table::{value, HtmlTable, Table, TableConfig, VerticalTable};
///
/// fn render<T: HtmlTable>(config: TableConfig) -> String {
///     T::html(config)
/// }
///
/// let config = TableConfig::new()
///     .with_item(value!({ "id": 1 }))
///     .with_column("id", "ID");
/// assert!(render::<Table>(config.clone()).starts_with("<table><thead>"));
/// assert!(render::<VerticalTable>(config).starts_with("<table><tbody><tr><th>ID</th>"));
/// ```
pub trait HtmlTable: Sized {
    fn new(config: TableConfig) -> Self;

    fn to_html(&self) -> String;

    /// Builds a renderer from `config` and renders it once.
    fn html(config: TableConfig) -> String {
        Self::new(config).to_html()
    }
}

/// Looks up `key` in `item` and stringifies it if it is a scalar.
///
/// Absent, `Null` and nested values yield an empty string.
///
/// # Examples
///
/// ```rust
/// use html_table::{item_key_value, value};
///
/// let item = value!({ "id": 7, "active": true, "tags": ["a"] });
/// assert_eq!(item_key_value(&item, "id"), "7");
/// assert_eq!(item_key_value(&item, "active"), "1");
/// assert_eq!(item_key_value(&item, "tags"), "");
/// assert_eq!(item_key_value(&item, "missing"), "");
/// ```
#[must_use]
pub fn item_key_value(item: &Value, key: &str) -> String {
    item.get(key)
        .and_then(Value::to_scalar_string)
        .unwrap_or_default()
}

/// Renders `config` as a row-oriented table.
#[must_use]
pub fn render_table(config: TableConfig) -> String {
    Table::html(config)
}

/// Renders `config` as a column-oriented table.
#[must_use]
pub fn render_vertical_table(config: TableConfig) -> String {
    VerticalTable::html(config)
}
