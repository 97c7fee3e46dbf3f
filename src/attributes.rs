//! HTML attribute templates and token substitution.
//!
//! Attribute values configured on a table are templates. Before a row or cell
//! is emitted, [`format_attributes`] replaces two tokens in every value:
//!
//! - `{column}` with the column key (or `row` for row attributes in the
//!   row-oriented layout)
//! - `{index}` with the decimal row or item index
//!
//! ```rust
//! use html_table::{format_attributes, Attributes};
//!
//! let templates = Attributes::from([("class", "col-{column}-{index}")]);
//! let resolved = format_attributes(&templates, "price", 3);
//! assert_eq!(resolved.get("class"), Some("col-price-3"));
//! ```

use indexmap::IndexMap;

pub const COLUMN_TOKEN: &str = "{column}";
pub const INDEX_TOKEN: &str = "{index}";

/// An insertion-ordered mapping of attribute name to value (or template).
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Attributes(IndexMap<String, String>);

impl Attributes {
    #[must_use]
    pub fn new() -> Self {
        Attributes(IndexMap::new())
    }

    /// Sets an attribute, keeping the position of an existing name.
    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<String>) -> Option<String> {
        self.0.insert(name.into(), value.into())
    }

    #[must_use]
    pub fn get(&self, name: &str) -> Option<&str> {
        self.0.get(name).map(String::as_str)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for Attributes {
    fn from_iter<T: IntoIterator<Item = (K, V)>>(iter: T) -> Self {
        Attributes(
            iter.into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }
}

impl<K: Into<String>, V: Into<String>, const N: usize> From<[(K, V); N]> for Attributes {
    fn from(pairs: [(K, V); N]) -> Self {
        pairs.into_iter().collect()
    }
}

/// Resolves `{column}` and `{index}` in every template value.
///
/// Names and order are untouched. The function is pure and reads no renderer
/// state.
///
/// # Examples
///
/// ```rust
/// use html_table::{format_attributes, Attributes};
///
/// let templates = Attributes::from([("id", "{column}-{index}"), ("class", "cell")]);
/// let resolved = format_attributes(&templates, "name", 0);
/// assert_eq!(resolved.get("id"), Some("name-0"));
/// assert_eq!(resolved.get("class"), Some("cell"));
/// ```
#[must_use]
pub fn format_attributes(templates: &Attributes, column: &str, index: usize) -> Attributes {
    let index = index.to_string();
    templates
        .iter()
        .map(|(name, template)| {
            let value = template
                .replace(COLUMN_TOKEN, column)
                .replace(INDEX_TOKEN, &index);
            (name, value)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_column_and_index_tokens() {
        let templates = Attributes::from([("class", "col-{column}-{index}")]);
        let resolved = format_attributes(&templates, "price", 3);
        assert_eq!(resolved, Attributes::from([("class", "col-price-3")]));
    }

    #[test]
    fn test_replaces_every_occurrence() {
        let templates = Attributes::from([("data-x", "{index}{column}{index}")]);
        let resolved = format_attributes(&templates, "c", 12);
        assert_eq!(resolved.get("data-x"), Some("12c12"));
    }

    #[test]
    fn test_keys_are_untouched() {
        let templates = Attributes::from([("{column}", "v"), ("b", "w")]);
        let resolved = format_attributes(&templates, "price", 1);
        let names: Vec<_> = resolved.iter().map(|(k, _)| k).collect();
        assert_eq!(names, vec!["{column}", "b"]);
    }

    #[test]
    fn test_column_is_substituted_before_index() {
        let templates = Attributes::from([("class", "{column}")]);
        let resolved = format_attributes(&templates, "{index}", 4);
        assert_eq!(resolved.get("class"), Some("4"));
    }

    #[test]
    fn test_empty_templates() {
        assert!(format_attributes(&Attributes::new(), "a", 1).is_empty());
    }
}
