//! # VectorKit Markup
//!
//! Generic hierarchical markup tree for VectorKit.
//!
//! This crate owns the format-agnostic element/attribute/text representation
//! that the SVG layer converts to and from, plus a small reader and writer
//! for the textual form.
//!
//! ## Features
//!
//! - **Tree model**: named elements, ordered attribute lists, optional text
//!   payloads, ordered children
//! - **Reader**: non-validating scanner from markup text to a tree
//! - **Writer**: tree to indented markup text with escaping
//!
//! Attribute lists keep duplicates; lookups return the first match.

pub mod reader;
pub mod writer;

pub use reader::parse;
pub use writer::{document_to_string, element_to_string};

use thiserror::Error;

// ==================== Errors ====================

/// Errors that can occur while reading markup text.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MarkupError {
    #[error("Unexpected end of input")]
    UnexpectedEof,

    #[error("Unexpected character `{found}` at byte {at}")]
    UnexpectedChar { found: char, at: usize },

    #[error("Mismatched closing tag: expected </{expected}>, found </{found}>")]
    MismatchedTag { expected: String, found: String },

    #[error("No root element found")]
    NoRoot,
}

// ==================== Tree model ====================

/// A single name/value attribute.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Attribute {
    pub name: String,
    pub value: String,
}

impl Attribute {
    /// Create a new attribute.
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
        }
    }
}

/// One node in the markup tree.
///
/// An element carries an ordered attribute list, an optional text payload
/// and an ordered child list. Nothing here is SVG-specific.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Element {
    /// Tag name.
    pub name: String,
    /// Ordered attributes; duplicates are kept as written.
    pub attributes: Vec<Attribute>,
    /// Text content, if any.
    pub text: Option<String>,
    /// Ordered child elements.
    pub children: Vec<Element>,
}

impl Element {
    /// Create a new element with the given tag name.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }

    /// Look up an attribute value by name. The first match wins.
    pub fn attr(&self, name: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|a| a.name == name)
            .map(|a| a.value.as_str())
    }

    /// Append an attribute. Existing attributes with the same name are kept.
    pub fn set_attr(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.attributes.push(Attribute::new(name, value));
    }

    /// Append a child element.
    pub fn push_child(&mut self, child: Element) {
        self.children.push(child);
    }

    /// Set the text payload.
    pub fn set_text(&mut self, text: impl Into<String>) {
        self.text = Some(text.into());
    }

    /// Text payload, or the empty string.
    pub fn text(&self) -> &str {
        self.text.as_deref().unwrap_or("")
    }
}

impl std::fmt::Display for Element {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&element_to_string(self))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_attr_first_match_wins() {
        let mut el = Element::new("rect");
        el.set_attr("x", "1");
        el.set_attr("x", "2");
        assert_eq!(el.attr("x"), Some("1"));
        assert_eq!(el.attributes.len(), 2);
    }

    #[test]
    fn test_attr_missing() {
        let el = Element::new("rect");
        assert_eq!(el.attr("x"), None);
    }

    #[test]
    fn test_children_keep_order() {
        let mut el = Element::new("g");
        el.push_child(Element::new("rect"));
        el.push_child(Element::new("circle"));
        assert_eq!(el.children[0].name, "rect");
        assert_eq!(el.children[1].name, "circle");
    }

    #[test]
    fn test_text_default_empty() {
        let mut el = Element::new("text");
        assert_eq!(el.text(), "");
        el.set_text("hello");
        assert_eq!(el.text(), "hello");
    }
}
