//! Low-level HTML element emission.
//!
//! Every tag a table produces goes through [`html`]: attribute values are
//! entity-escaped, inner content is written as given. Content escaping is the
//! job of whoever produced the content (callbacks can use [`escape`]).
//!
//! ```rust
//! use html_table::element::{self, Tag};
//! use html_table::Attributes;
//!
//! let attrs = Attributes::from([("title", "a \"quoted\" <b>")]);
//! assert_eq!(
//!     element::html(Tag::Td, &attrs, "<em>raw</em>"),
//!     "<td title=\"a &quot;quoted&quot; &lt;b&gt;\"><em>raw</em></td>"
//! );
//! ```

use crate::Attributes;

/// The table elements this crate emits.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Tag {
    Table,
    Thead,
    Tbody,
    Tfoot,
    Tr,
    Th,
    Td,
}

impl Tag {
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Tag::Table => "table",
            Tag::Thead => "thead",
            Tag::Tbody => "tbody",
            Tag::Tfoot => "tfoot",
            Tag::Tr => "tr",
            Tag::Th => "th",
            Tag::Td => "td",
        }
    }
}

/// Emits `<tag attrs...>content</tag>`.
///
/// Attributes keep their order. Attributes whose name is empty or contains
/// characters not allowed in an attribute name are skipped.
#[must_use]
pub fn html(tag: Tag, attrs: &Attributes, content: &str) -> String {
    let name = tag.as_str();
    let mut output = String::with_capacity(2 * name.len() + content.len() + 5);

    output.push('<');
    output.push_str(name);
    for (attr, value) in attrs.iter() {
        if !is_valid_attribute_name(attr) {
            log::debug!("skipping invalid attribute name {attr:?} on <{name}>");
            continue;
        }
        output.push(' ');
        output.push_str(attr);
        output.push_str("=\"");
        push_escaped(&mut output, value);
        output.push('"');
    }
    output.push('>');
    output.push_str(content);
    output.push_str("</");
    output.push_str(name);
    output.push('>');

    output
}

/// Escapes `&`, `<`, `>`, `"` and `'` as HTML entities.
///
/// # Examples
///
/// ```rust
/// use html_table::element::escape;
///
/// assert_eq!(escape("Tom & Jerry's <show>"), "Tom &amp; Jerry&#039;s &lt;show&gt;");
/// ```
#[must_use]
pub fn escape(text: &str) -> String {
    let mut output = String::with_capacity(text.len());
    push_escaped(&mut output, text);
    output
}

#[inline]
fn push_escaped(output: &mut String, text: &str) {
    for ch in text.chars() {
        match ch {
            '&' => output.push_str("&amp;"),
            '<' => output.push_str("&lt;"),
            '>' => output.push_str("&gt;"),
            '"' => output.push_str("&quot;"),
            '\'' => output.push_str("&#039;"),
            _ => output.push(ch),
        }
    }
}

#[inline]
fn is_valid_attribute_name(name: &str) -> bool {
    !name.is_empty()
        && !name.chars().any(|c| {
            c.is_whitespace() || c.is_control() || matches!(c, '"' | '\'' | '<' | '>' | '/' | '=')
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bare_tag() {
        assert_eq!(html(Tag::Tbody, &Attributes::new(), ""), "<tbody></tbody>");
    }

    #[test]
    fn test_attribute_order_is_kept() {
        let attrs = Attributes::from([("id", "t"), ("class", "wide")]);
        assert_eq!(
            html(Tag::Table, &attrs, "x"),
            "<table id=\"t\" class=\"wide\">x</table>"
        );
    }

    #[test]
    fn test_invalid_attribute_names_are_skipped() {
        let attrs = Attributes::from([("", "a"), ("on click", "b"), ("x\"y", "c"), ("ok", "d")]);
        assert_eq!(html(Tag::Th, &attrs, ""), "<th ok=\"d\"></th>");
    }

    #[test]
    fn test_content_is_raw() {
        assert_eq!(
            html(Tag::Td, &Attributes::new(), "<b>&</b>"),
            "<td><b>&</b></td>"
        );
    }

    #[test]
    fn test_tag_names() {
        let tags = [Tag::Table, Tag::Thead, Tag::Tbody, Tag::Tfoot, Tag::Tr, Tag::Th, Tag::Td];
        let names: Vec<_> = tags.iter().map(Tag::as_str).collect();
        assert_eq!(names, vec!["table", "thead", "tbody", "tfoot", "tr", "th", "td"]);
    }
}
