//! Markup writer.
//!
//! Serializes an [`Element`] tree back to markup text. Child elements are
//! indented two spaces per level; text payloads are written inline so they
//! survive a read/write cycle byte for byte.

use crate::Element;

/// Serialize a tree as a standalone document, declaration included.
pub fn document_to_string(root: &Element) -> String {
    let mut out = String::from("<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n");
    write_element(root, 0, &mut out);
    out
}

/// Serialize a single element (and its subtree) without a declaration.
pub fn element_to_string(element: &Element) -> String {
    let mut out = String::new();
    write_element(element, 0, &mut out);
    out
}

fn write_element(element: &Element, depth: usize, out: &mut String) {
    for _ in 0..depth {
        out.push_str("  ");
    }
    out.push('<');
    out.push_str(&element.name);
    for attr in &element.attributes {
        out.push(' ');
        out.push_str(&attr.name);
        out.push_str("=\"");
        escape_into(&attr.value, true, out);
        out.push('"');
    }

    let text = element.text.as_deref().unwrap_or("");
    if text.is_empty() && element.children.is_empty() {
        out.push_str("/>\n");
        return;
    }

    out.push('>');
    if !text.is_empty() {
        escape_into(text, false, out);
    }
    if !element.children.is_empty() {
        out.push('\n');
        for child in &element.children {
            write_element(child, depth + 1, out);
        }
        for _ in 0..depth {
            out.push_str("  ");
        }
    }
    out.push_str("</");
    out.push_str(&element.name);
    out.push_str(">\n");
}

fn escape_into(s: &str, in_attribute: bool, out: &mut String) {
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' if in_attribute => out.push_str("&quot;"),
            _ => out.push(c),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parse;

    #[test]
    fn test_self_closing_output() {
        let mut el = Element::new("rect");
        el.set_attr("width", "10");
        assert_eq!(element_to_string(&el), "<rect width=\"10\"/>\n");
    }

    #[test]
    fn test_nested_indentation() {
        let mut root = Element::new("svg");
        let mut g = Element::new("g");
        g.push_child(Element::new("circle"));
        root.push_child(g);
        assert_eq!(
            element_to_string(&root),
            "<svg>\n  <g>\n    <circle/>\n  </g>\n</svg>\n"
        );
    }

    #[test]
    fn test_text_written_inline() {
        let mut el = Element::new("text");
        el.set_text("hello");
        assert_eq!(element_to_string(&el), "<text>hello</text>\n");
    }

    #[test]
    fn test_escaping() {
        let mut el = Element::new("text");
        el.set_attr("a", "x\"<y>\"");
        el.set_text("a & b < c");
        let s = element_to_string(&el);
        assert!(s.contains("a=\"x&quot;&lt;y&gt;&quot;\""));
        assert!(s.contains(">a &amp; b &lt; c<"));
    }

    #[test]
    fn test_write_read_round_trip() {
        let mut root = Element::new("svg");
        root.set_attr("width", "100");
        let mut text = Element::new("text");
        text.set_text("a & b");
        root.push_child(text);
        root.push_child(Element::new("rect"));

        let reparsed = parse(&document_to_string(&root)).unwrap();
        assert_eq!(reparsed, root);
    }
}
