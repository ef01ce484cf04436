//! Placeholder containers
//!
//! A container accumulates an ordered sequence of fragments (title parts,
//! script tags, meta tags) during a rendering pass and renders them once at
//! the end.

use std::any::Any;
use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

use serde_json::Value;

/// Shared handle to a registered container
///
/// Handles compare by identity with [`Rc::ptr_eq`].
pub type SharedContainer = Rc<RefCell<dyn Container>>;

/// Capability every placeholder container provides
pub trait Container: Any + fmt::Debug {
    /// Build a container seeded with `data` (empty for no payload)
    fn from_data(data: Vec<Value>) -> Self
    where
        Self: Sized;

    /// Stored fragments, in order
    fn data(&self) -> &[Value];

    fn data_mut(&mut self) -> &mut Vec<Value>;

    /// Runtime type access, for `downcast_ref` on handles
    fn as_any(&self) -> &dyn Any;

    /// Render the stored fragments back to back
    fn render(&self) -> String {
        self.data().iter().map(render_item).collect()
    }
}

/// Indentation prepended to rendered output
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Indent(String);

impl Indent {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<usize> for Indent {
    fn from(width: usize) -> Self {
        Indent(" ".repeat(width))
    }
}

impl From<&str> for Indent {
    fn from(indent: &str) -> Self {
        Indent(indent.to_string())
    }
}

impl From<String> for Indent {
    fn from(indent: String) -> Self {
        Indent(indent)
    }
}

/// The default container
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PlaceholderContainer {
    items: Vec<Value>,
    separator: String,
    prefix: String,
    postfix: String,
    indent: Indent,
}

impl PlaceholderContainer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace all fragments with a single value
    pub fn set(&mut self, value: impl Into<Value>) -> &mut Self {
        self.items = vec![value.into()];
        self
    }

    pub fn append(&mut self, value: impl Into<Value>) -> &mut Self {
        self.items.push(value.into());
        self
    }

    pub fn prepend(&mut self, value: impl Into<Value>) -> &mut Self {
        self.items.insert(0, value.into());
        self
    }

    pub fn clear(&mut self) {
        self.items.clear();
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn set_separator(&mut self, separator: impl Into<String>) -> &mut Self {
        self.separator = separator.into();
        self
    }

    pub fn separator(&self) -> &str {
        &self.separator
    }

    pub fn set_prefix(&mut self, prefix: impl Into<String>) -> &mut Self {
        self.prefix = prefix.into();
        self
    }

    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    pub fn set_postfix(&mut self, postfix: impl Into<String>) -> &mut Self {
        self.postfix = postfix.into();
        self
    }

    pub fn postfix(&self) -> &str {
        &self.postfix
    }

    /// Set indentation as a number of spaces or a literal string
    pub fn set_indent(&mut self, indent: impl Into<Indent>) -> &mut Self {
        self.indent = indent.into();
        self
    }

    pub fn indent(&self) -> &str {
        self.indent.as_str()
    }
}

fn render_item(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

impl Container for PlaceholderContainer {
    fn from_data(data: Vec<Value>) -> Self {
        Self {
            items: data,
            ..Self::default()
        }
    }

    fn data(&self) -> &[Value] {
        &self.items
    }

    fn data_mut(&mut self) -> &mut Vec<Value> {
        &mut self.items
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    /// Render `indent + prefix + items joined by separator + postfix`
    ///
    /// An empty container renders to the empty string.
    fn render(&self) -> String {
        if self.items.is_empty() {
            return String::new();
        }

        let indent = self.indent.as_str();
        let separator = format!("{}{}", self.separator, indent);
        let items: Vec<String> = self.items.iter().map(render_item).collect();

        format!(
            "{}{}{}{}",
            indent,
            self.prefix,
            items.join(&separator),
            self.postfix
        )
    }
}

impl fmt::Display for PlaceholderContainer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_from_data() {
        let container = PlaceholderContainer::from_data(vec![json!("foo"), json!("bar")]);
        assert_eq!(container.data(), &[json!("foo"), json!("bar")]);
        assert_eq!(container.len(), 2);
    }

    #[test]
    fn test_set_replaces_items() {
        let mut container = PlaceholderContainer::from_data(vec![json!("a"), json!("b")]);
        container.set("only");
        assert_eq!(container.data(), &[json!("only")]);
    }

    #[test]
    fn test_append_and_prepend_order() {
        let mut container = PlaceholderContainer::new();
        container.append("middle").append("last").prepend("first");
        assert_eq!(container.render(), "firstmiddlelast");
    }

    #[test]
    fn test_render_empty() {
        let mut container = PlaceholderContainer::new();
        container.set_prefix("<title>").set_postfix("</title>");
        assert_eq!(container.render(), "");
        assert!(container.is_empty());
    }

    #[test]
    fn test_render_title() {
        let mut container = PlaceholderContainer::new();
        container
            .set_prefix("<title>")
            .set_postfix("</title>")
            .set_separator(" - ")
            .append("Blog")
            .append("My Site");
        assert_eq!(container.to_string(), "<title>Blog - My Site</title>");
    }

    #[test]
    fn test_render_with_indent() {
        let mut container = PlaceholderContainer::new();
        container.set_indent(4usize).set_separator("\n");
        container.append("<script></script>").append(json!(1));
        assert_eq!(container.indent(), "    ");
        assert_eq!(container.render(), "    <script></script>\n    1");
    }

    #[test]
    fn test_indent_from_string() {
        let mut container = PlaceholderContainer::new();
        container.set_indent("\t");
        assert_eq!(container.indent(), "\t");
    }

    #[test]
    fn test_clear() {
        let mut container = PlaceholderContainer::from_data(vec![json!("x")]);
        container.clear();
        assert!(container.is_empty());
    }
}
