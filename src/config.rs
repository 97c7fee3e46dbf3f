//! Table configuration.
//!
//! [`TableConfig`] carries everything a renderer needs:
//!
//! - `items`: the records to display, as [`Value`]s
//! - `columns`: ordered column key to display title ([`Columns`]); an empty
//!   or `"0"` title hides the column without removing it
//! - `callbacks`: per-column content producers ([`Callbacks`])
//! - `show_header` / `show_footer`: row-oriented head and foot ([`Section`])
//! - `table_attrs`, `row_attrs`, `cell_attrs`: attribute templates
//! - `header_cols`: columns rendered with `<th>` instead of `<td>`
//!
//! ## Building
//!
//! ```rust
//! use html_table::{value, Section, TableConfig};
//!
//! let config = TableConfig::new()
//!     .with_item(value!({ "id": 1, "name": "A" }))
//!     .with_column("id", "ID")
//!     .with_column("name", "Name")
//!     .with_callback("name", |item, column, _| {
//!         item.get(column).and_then(|v| v.as_str()).unwrap_or("").to_uppercase()
//!     })
//!     .with_cell_attr("class", "col-{column}")
//!     .with_show_footer(Section::literal("<tr><td>end</td></tr>"));
//! assert_eq!(config.columns.len(), 2);
//! ```
//!
//! ## From dynamic data
//!
//! A configuration can also be read from a [`Value`] (for instance parsed from
//! JSON). The value is merged over [`TableConfig::default_value`] and then read
//! field by field. [`TableConfig::from_value`] is lenient and falls back to
//! defaults for malformed fields; [`TableConfig::try_from_value`] reports them.

use crate::{merge, value, Attributes, Error, Map, Result, Table, Value};
use indexmap::{IndexMap, IndexSet};
use serde::Serialize;
use std::fmt;
use std::sync::Arc;

/// Produces a cell's inner HTML from `(item, column_key, index)`.
pub type CellCallback = Arc<dyn Fn(&Value, &str, usize) -> String + Send + Sync>;

/// Produces a header or footer section's inner HTML from `(table, index)`.
pub type SectionCallback = Arc<dyn Fn(&Table, usize) -> String + Send + Sync>;

/// Per-column content callbacks, keyed by column.
#[derive(Clone, Default)]
pub struct Callbacks(IndexMap<String, CellCallback>);

impl Callbacks {
    #[must_use]
    pub fn new() -> Self {
        Callbacks(IndexMap::new())
    }

    pub fn insert<F>(&mut self, column: impl Into<String>, callback: F) -> Option<CellCallback>
    where
        F: Fn(&Value, &str, usize) -> String + Send + Sync + 'static,
    {
        self.0.insert(column.into(), Arc::new(callback))
    }

    /// Registers an already shared callback.
    pub fn insert_shared(
        &mut self,
        column: impl Into<String>,
        callback: CellCallback,
    ) -> Option<CellCallback> {
        self.0.insert(column.into(), callback)
    }

    #[must_use]
    pub fn get(&self, column: &str) -> Option<&CellCallback> {
        self.0.get(column)
    }

    #[must_use]
    pub fn contains(&self, column: &str) -> bool {
        self.0.contains_key(column)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn columns(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &CellCallback)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v))
    }
}

impl fmt::Debug for Callbacks {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.0.keys()).finish()
    }
}

/// What a row-oriented table puts in its `<thead>` or `<tfoot>`.
#[derive(Clone)]
pub enum Section {
    /// The section is omitted.
    Suppressed,
    /// Inner HTML used as is. An empty literal omits the section.
    Literal(String),
    /// Inner HTML produced from the table, called with index 0.
    Callback(SectionCallback),
}

impl Section {
    pub fn literal(html: impl Into<String>) -> Self {
        Section::Literal(html.into())
    }

    pub fn callback<F>(callback: F) -> Self
    where
        F: Fn(&Table, usize) -> String + Send + Sync + 'static,
    {
        Section::Callback(Arc::new(callback))
    }

    /// The default header: one row of column titles, see [`Table::headers_row`].
    #[must_use]
    pub fn headers_row() -> Self {
        Section::callback(Table::headers_row)
    }

    #[must_use]
    pub const fn is_suppressed(&self) -> bool {
        matches!(self, Section::Suppressed)
    }
}

impl fmt::Debug for Section {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Section::Suppressed => f.write_str("Suppressed"),
            Section::Literal(html) => f.debug_tuple("Literal").field(html).finish(),
            Section::Callback(_) => f.write_str("Callback(..)"),
        }
    }
}

impl From<&str> for Section {
    fn from(html: &str) -> Self {
        Section::literal(html)
    }
}

impl From<String> for Section {
    fn from(html: String) -> Self {
        Section::Literal(html)
    }
}

/// Ordered column key to display title.
///
/// Order defines layout. A column whose title is `""` or `"0"` is hidden but
/// stays in the mapping, so its title can still be looked up or restored.
///
/// ```rust
/// use html_table::Columns;
///
/// let columns = Columns::from([("id", "ID"), ("secret", ""), ("name", "Name")]);
/// let visible: Vec<_> = columns.visible().collect();
/// assert_eq!(visible, vec!["id", "name"]);
/// assert_eq!(columns.title("secret"), Some(""));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Columns(IndexMap<String, String>);

impl Columns {
    #[must_use]
    pub fn new() -> Self {
        Columns(IndexMap::new())
    }

    pub fn insert(&mut self, key: impl Into<String>, title: impl Into<String>) -> Option<String> {
        self.0.insert(key.into(), title.into())
    }

    #[must_use]
    pub fn title(&self, key: &str) -> Option<&str> {
        self.0.get(key).map(String::as_str)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// All column keys, hidden ones included.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }

    /// Keys of the columns that are rendered, skipping hidden titles.
    pub fn visible(&self) -> impl Iterator<Item = &str> {
        self.0
            .iter()
            .filter(|(_, title)| !Self::is_hidden_title(title))
            .map(|(key, _)| key.as_str())
    }

    /// `""` and `"0"` hide a column.
    #[must_use]
    pub fn is_hidden_title(title: &str) -> bool {
        title.is_empty() || title == "0"
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// The titles as an object item, keyed by column.
    #[must_use]
    pub fn to_value(&self) -> Value {
        Value::Object(
            self.0
                .iter()
                .map(|(k, v)| (k.clone(), Value::String(v.clone())))
                .collect::<Map>(),
        )
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for Columns {
    fn from_iter<T: IntoIterator<Item = (K, V)>>(iter: T) -> Self {
        Columns(
            iter.into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }
}

impl<K: Into<String>, V: Into<String>, const N: usize> From<[(K, V); N]> for Columns {
    fn from(pairs: [(K, V); N]) -> Self {
        pairs.into_iter().collect()
    }
}

/// Configuration shared by [`Table`] and [`VerticalTable`](crate::VerticalTable).
///
/// `show_header` and `show_footer` only apply to the row-oriented [`Table`].
#[derive(Clone, Debug)]
pub struct TableConfig {
    pub items: Vec<Value>,
    pub columns: Columns,
    pub callbacks: Callbacks,
    pub show_header: Section,
    pub show_footer: Section,
    pub table_attrs: Attributes,
    pub row_attrs: Attributes,
    pub cell_attrs: Attributes,
    pub header_cols: IndexSet<String>,
}

impl Default for TableConfig {
    fn default() -> Self {
        TableConfig {
            items: Vec::new(),
            columns: Columns::new(),
            callbacks: Callbacks::new(),
            show_header: Section::headers_row(),
            show_footer: Section::Suppressed,
            table_attrs: Attributes::new(),
            row_attrs: Attributes::new(),
            cell_attrs: Attributes::new(),
            header_cols: IndexSet::new(),
        }
    }
}

impl TableConfig {
    /// Creates the default configuration: no items, no columns, a synthesized
    /// header row and no footer.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_items<I, T>(mut self, items: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<Value>,
    {
        self.items = items.into_iter().map(Into::into).collect();
        self
    }

    #[must_use]
    pub fn with_item(mut self, item: impl Into<Value>) -> Self {
        self.items.push(item.into());
        self
    }

    /// Replaces the items with the serialized form of `items`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use html_table::TableConfig;
    /// use serde::Serialize;
    ///
    /// #[derive(Serialize)]
    /// struct Row { id: u32 }
    ///
    /// let config = TableConfig::new()
    ///     .with_serialized_items(&[Row { id: 1 }, Row { id: 2 }])
    ///     .unwrap();
    /// assert_eq!(config.items.len(), 2);
    /// ```
    ///
    /// # Errors
    ///
    /// Returns an error if an item cannot be converted to a [`Value`].
    pub fn with_serialized_items<T: Serialize>(mut self, items: &[T]) -> Result<Self> {
        self.items = items.iter().map(crate::to_value).collect::<Result<_>>()?;
        Ok(self)
    }

    #[must_use]
    pub fn with_columns(mut self, columns: impl Into<Columns>) -> Self {
        self.columns = columns.into();
        self
    }

    #[must_use]
    pub fn with_column(mut self, key: impl Into<String>, title: impl Into<String>) -> Self {
        self.columns.insert(key, title);
        self
    }

    #[must_use]
    pub fn with_callbacks(mut self, callbacks: Callbacks) -> Self {
        self.callbacks = callbacks;
        self
    }

    #[must_use]
    pub fn with_callback<F>(mut self, column: impl Into<String>, callback: F) -> Self
    where
        F: Fn(&Value, &str, usize) -> String + Send + Sync + 'static,
    {
        self.callbacks.insert(column, callback);
        self
    }

    #[must_use]
    pub fn with_show_header(mut self, section: impl Into<Section>) -> Self {
        self.show_header = section.into();
        self
    }

    #[must_use]
    pub fn with_show_footer(mut self, section: impl Into<Section>) -> Self {
        self.show_footer = section.into();
        self
    }

    #[must_use]
    pub fn with_table_attrs(mut self, attrs: impl Into<Attributes>) -> Self {
        self.table_attrs = attrs.into();
        self
    }

    #[must_use]
    pub fn with_table_attr(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.table_attrs.insert(name, value);
        self
    }

    #[must_use]
    pub fn with_row_attrs(mut self, attrs: impl Into<Attributes>) -> Self {
        self.row_attrs = attrs.into();
        self
    }

    #[must_use]
    pub fn with_row_attr(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.row_attrs.insert(name, value);
        self
    }

    #[must_use]
    pub fn with_cell_attrs(mut self, attrs: impl Into<Attributes>) -> Self {
        self.cell_attrs = attrs.into();
        self
    }

    #[must_use]
    pub fn with_cell_attr(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.cell_attrs.insert(name, value);
        self
    }

    #[must_use]
    pub fn with_header_cols<I, S>(mut self, columns: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.header_cols = columns.into_iter().map(Into::into).collect();
        self
    }

    #[must_use]
    pub fn with_header_col(mut self, column: impl Into<String>) -> Self {
        self.header_cols.insert(column.into());
        self
    }

    /// The defaults tree that dynamic configuration is merged over.
    ///
    /// `show_header` has no entry: only an absent `show_header` yields the
    /// synthesized header row.
    #[must_use]
    pub fn default_value() -> Value {
        value!({
            "items": [],
            "columns": {},
            "callbacks": {},
            "show_footer": false,
            "table_attrs": {},
            "row_attrs": {},
            "cell_attrs": {},
            "header_cols": []
        })
    }

    /// Reads a configuration from dynamic data, falling back to defaults.
    ///
    /// Malformed fields are replaced by their default (or, inside a mapping,
    /// skipped) and logged at debug level. Callbacks cannot be expressed as
    /// data; a `callbacks` entry is ignored.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use html_table::{value, TableConfig};
    ///
    /// let config = TableConfig::from_value(&value!({
    ///     "items": [{ "id": 1 }],
    ///     "columns": { "id": "ID" },
    ///     "table_attrs": 42
    /// }));
    /// assert_eq!(config.items.len(), 1);
    /// assert!(config.table_attrs.is_empty());
    /// ```
    #[must_use]
    pub fn from_value(value: &Value) -> Self {
        let reader = Reader { strict: false };
        // a lenient reader never returns an error
        reader.read(value).unwrap_or_default()
    }

    /// Reads a configuration from dynamic data, rejecting malformed fields.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidField`] naming the first field whose shape does
    /// not match, including a non-empty `callbacks` entry.
    pub fn try_from_value(value: &Value) -> Result<Self> {
        Reader { strict: true }.read(value)
    }
}

struct Reader {
    strict: bool,
}

impl Reader {
    fn reject(&self, field: &str, expected: &str, found: &Value) -> Result<()> {
        if self.strict {
            return Err(Error::invalid_field(field, expected, found.kind()));
        }
        log::debug!(
            "ignoring configuration field `{field}`: expected {expected}, found {}",
            found.kind()
        );
        Ok(())
    }

    fn read(&self, value: &Value) -> Result<TableConfig> {
        if !value.is_object() && !value.is_null() {
            self.reject("configuration", "object", value)?;
        }

        let merged = merge(value, &TableConfig::default_value(), false);
        let field = |name: &str| merged.get(name).unwrap_or(&Value::Null);

        let mut config = TableConfig {
            items: self.items(field("items"))?,
            columns: self.columns(field("columns"))?,
            header_cols: self.header_cols(field("header_cols"))?,
            table_attrs: self.attributes("table_attrs", field("table_attrs"))?,
            row_attrs: self.attributes("row_attrs", field("row_attrs"))?,
            cell_attrs: self.attributes("cell_attrs", field("cell_attrs"))?,
            ..TableConfig::default()
        };
        config.show_header = match merged.get("show_header") {
            Some(value) => self.section("show_header", value)?,
            None => Section::headers_row(),
        };
        config.show_footer = self.section("show_footer", field("show_footer"))?;

        match field("callbacks") {
            Value::Null => {}
            Value::Object(obj) if obj.is_empty() => {}
            Value::Array(arr) if arr.is_empty() => {}
            other => self.reject("callbacks", "callbacks registered in code", other)?,
        }

        Ok(config)
    }

    fn items(&self, value: &Value) -> Result<Vec<Value>> {
        match value {
            Value::Null => Ok(Vec::new()),
            Value::Array(arr) => Ok(arr.clone()),
            Value::Object(obj) => Ok(obj.values().cloned().collect()),
            other => self.reject("items", "array or object", other).map(|_| Vec::new()),
        }
    }

    fn columns(&self, value: &Value) -> Result<Columns> {
        let mut columns = Columns::new();
        for (key, title) in self.entries("columns", value)? {
            if is_falsy(&title) {
                columns.insert(key, "");
                continue;
            }
            match title.to_scalar_string() {
                Some(text) => {
                    columns.insert(key, text);
                }
                None => self.reject(&format!("columns.{key}"), "scalar title", &title)?,
            }
        }
        Ok(columns)
    }

    fn header_cols(&self, value: &Value) -> Result<IndexSet<String>> {
        let mut header_cols = IndexSet::new();
        for (key, column) in self.entries("header_cols", value)? {
            match column.to_scalar_string() {
                Some(text) => {
                    header_cols.insert(text);
                }
                None => self.reject(&format!("header_cols.{key}"), "column key", &column)?,
            }
        }
        Ok(header_cols)
    }

    fn attributes(&self, field: &str, value: &Value) -> Result<Attributes> {
        let mut attrs = Attributes::new();
        if let Some(obj) = value.as_object() {
            for (name, template) in obj.iter() {
                match template.to_scalar_string() {
                    Some(text) => {
                        attrs.insert(name.as_str(), text);
                    }
                    None => self.reject(&format!("{field}.{name}"), "scalar", template)?,
                }
            }
        } else if !value.is_null() {
            self.reject(field, "object", value)?;
        }
        Ok(attrs)
    }

    /// A present section value: a string is a literal, anything else omits
    /// the section.
    fn section(&self, field: &str, value: &Value) -> Result<Section> {
        match value {
            Value::String(html) => Ok(Section::Literal(html.clone())),
            Value::Null | Value::Bool(false) => Ok(Section::Suppressed),
            other => self
                .reject(field, "false or string", other)
                .map(|_| Section::Suppressed),
        }
    }

    /// Key/value pairs of an object or array; arrays are keyed by position.
    fn entries(&self, field: &str, value: &Value) -> Result<Vec<(String, Value)>> {
        match value {
            Value::Null => Ok(Vec::new()),
            Value::Object(obj) => Ok(obj.iter().map(|(k, v)| (k.clone(), v.clone())).collect()),
            Value::Array(arr) => Ok(arr
                .iter()
                .enumerate()
                .map(|(i, v)| (i.to_string(), v.clone()))
                .collect()),
            other => self
                .reject(field, "object or array", other)
                .map(|_| Vec::new()),
        }
    }
}

/// Titles that hide a column: `null`, `false`, zero, `""` and `"0"`.
fn is_falsy(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::Bool(b) => !b,
        Value::Number(n) => n.as_f64() == 0.0,
        Value::String(s) => Columns::is_hidden_title(s),
        Value::Array(arr) => arr.is_empty(),
        Value::Object(obj) => obj.is_empty(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = TableConfig::new();
        assert!(config.items.is_empty());
        assert!(config.columns.is_empty());
        assert!(config.callbacks.is_empty());
        assert!(matches!(config.show_header, Section::Callback(_)));
        assert!(config.show_footer.is_suppressed());
        assert!(config.header_cols.is_empty());
    }

    #[test]
    fn test_builder_chain() {
        let config = TableConfig::new()
            .with_items(vec![value!({ "a": 1 }), value!({ "a": 2 })])
            .with_item(value!({ "a": 3 }))
            .with_column("a", "A")
            .with_callback("a", |_, _, i| i.to_string())
            .with_header_col("a")
            .with_row_attr("class", "r-{index}")
            .with_table_attrs([("id", "t")])
            .with_show_header(Section::Suppressed)
            .with_show_footer("<tr><td>f</td></tr>");

        assert_eq!(config.items.len(), 3);
        assert_eq!(config.columns.title("a"), Some("A"));
        assert!(config.callbacks.contains("a"));
        assert!(config.header_cols.contains("a"));
        assert_eq!(config.row_attrs.get("class"), Some("r-{index}"));
        assert_eq!(config.table_attrs.get("id"), Some("t"));
        assert!(config.show_header.is_suppressed());
        assert!(matches!(
            config.show_footer,
            Section::Literal(ref s) if s == "<tr><td>f</td></tr>"
        ));
    }

    #[test]
    fn test_from_value_reads_every_field() {
        let config = TableConfig::from_value(&value!({
            "items": [{ "id": 1 }, { "id": 2 }],
            "columns": { "id": "ID", "hidden": "" },
            "show_header": "<tr><th>custom</th></tr>",
            "show_footer": "<tr><td>foot</td></tr>",
            "table_attrs": { "class": "grid" },
            "row_attrs": { "data-row": "{index}" },
            "cell_attrs": { "class": "c-{column}" },
            "header_cols": ["id"]
        }));

        assert_eq!(config.items.len(), 2);
        assert_eq!(config.columns.visible().collect::<Vec<_>>(), vec!["id"]);
        assert_eq!(config.columns.title("hidden"), Some(""));
        assert!(matches!(config.show_header, Section::Literal(_)));
        assert!(matches!(config.show_footer, Section::Literal(_)));
        assert_eq!(config.table_attrs.get("class"), Some("grid"));
        assert_eq!(config.row_attrs.get("data-row"), Some("{index}"));
        assert_eq!(config.cell_attrs.get("class"), Some("c-{column}"));
        assert!(config.header_cols.contains("id"));
    }

    #[test]
    fn test_from_value_defaults_missing_fields() {
        let config = TableConfig::from_value(&value!({}));
        assert!(matches!(config.show_header, Section::Callback(_)));
        assert!(config.show_footer.is_suppressed());

        let config = TableConfig::from_value(&Value::Null);
        assert!(config.items.is_empty());
    }

    #[test]
    fn test_show_header_false_suppresses() {
        let config = TableConfig::from_value(&value!({ "show_header": false }));
        assert!(config.show_header.is_suppressed());
    }

    #[test]
    fn test_non_string_sections_are_omitted() {
        for section in [value!(true), value!(null), value!(5)] {
            let mut data = Map::new();
            data.insert("items".to_string(), value!([{ "id": 1 }]));
            data.insert("columns".to_string(), value!({ "id": "ID" }));
            data.insert("show_header".to_string(), section.clone());
            data.insert("show_footer".to_string(), section);
            let config = TableConfig::from_value(&Value::Object(data));

            assert!(config.show_header.is_suppressed());
            assert!(config.show_footer.is_suppressed());
            assert_eq!(
                Table::html(config),
                "<table><tbody><tr><td>1</td></tr></tbody></table>"
            );
        }
    }

    #[test]
    fn test_strict_rejects_non_string_sections() {
        let err = TableConfig::try_from_value(&value!({ "show_header": true })).unwrap_err();
        assert_eq!(err, Error::invalid_field("show_header", "false or string", "bool"));

        let config = TableConfig::try_from_value(&value!({ "show_footer": null })).unwrap();
        assert!(config.show_footer.is_suppressed());
    }

    #[test]
    fn test_falsy_titles_hide_columns() {
        let config = TableConfig::from_value(&value!({
            "columns": {
                "a": 0,
                "b": "B",
                "c": "0",
                "d": false,
                "e": null,
                "f": 0.0,
                "g": ""
            }
        }));

        assert_eq!(config.columns.len(), 7);
        assert_eq!(config.columns.visible().collect::<Vec<_>>(), vec!["b"]);
        assert_eq!(config.columns.title("a"), Some(""));
        assert_eq!(config.columns.title("c"), Some(""));
    }

    #[test]
    fn test_zero_title_from_builder_is_hidden() {
        let columns = Columns::from([("a", "0"), ("b", "B"), ("c", "10")]);
        assert_eq!(columns.visible().collect::<Vec<_>>(), vec!["b", "c"]);
        assert_eq!(columns.title("a"), Some("0"));
    }

    #[test]
    fn test_shared_callbacks() {
        let shared: CellCallback =
            Arc::new(|_: &Value, column: &str, _: usize| column.to_uppercase());
        let mut callbacks = Callbacks::new();
        callbacks.insert_shared("a", Arc::clone(&shared));
        callbacks.insert_shared("b", Arc::clone(&shared));

        assert_eq!(callbacks.columns().collect::<Vec<_>>(), vec!["a", "b"]);
        assert!(Arc::ptr_eq(callbacks.get("b").unwrap(), &shared));
        assert_eq!(callbacks.get("a").unwrap()(&Value::Null, "a", 0), "A");
    }

    #[test]
    fn test_lenient_skips_malformed_fields() {
        let config = TableConfig::from_value(&value!({
            "items": "nope",
            "columns": { "a": "A", "b": { "nested": 1 } },
            "cell_attrs": { "class": "x", "data": [1] },
            "callbacks": { "a": "not callable" }
        }));
        assert!(config.items.is_empty());
        assert_eq!(config.columns.keys().collect::<Vec<_>>(), vec!["a"]);
        assert_eq!(config.cell_attrs.len(), 1);
        assert!(config.callbacks.is_empty());
    }

    #[test]
    fn test_strict_reports_malformed_fields() {
        let err = TableConfig::try_from_value(&value!({ "columns": 5 })).unwrap_err();
        assert_eq!(err, Error::invalid_field("columns", "object or array", "number"));

        let err = TableConfig::try_from_value(&value!({ "cell_attrs": { "data": [1] } }))
            .unwrap_err();
        assert!(err.to_string().contains("cell_attrs.data"));

        let err = TableConfig::try_from_value(&value!({ "callbacks": { "a": "x" } })).unwrap_err();
        assert!(err.to_string().contains("callbacks"));

        assert!(TableConfig::try_from_value(&value!([1])).is_err());

        let err = TableConfig::try_from_value(&value!({ "columns": { "a": [1] } })).unwrap_err();
        assert_eq!(err, Error::invalid_field("columns.a", "scalar title", "array"));

        let err = TableConfig::try_from_value(&value!({ "header_cols": [[1]] })).unwrap_err();
        assert_eq!(err, Error::invalid_field("header_cols.0", "column key", "array"));
    }

    #[test]
    fn test_list_columns_are_keyed_by_position() {
        let config = TableConfig::from_value(&value!({ "columns": ["First", "Second"] }));
        let pairs: Vec<_> = config.columns.iter().collect();
        assert_eq!(pairs, vec![("0", "First"), ("1", "Second")]);
    }

    #[test]
    fn test_columns_to_value() {
        let columns = Columns::from([("id", "ID")]);
        assert_eq!(columns.to_value(), value!({ "id": "ID" }));
    }
}
