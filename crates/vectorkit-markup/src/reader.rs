//! Markup reader.
//!
//! A small non-validating scanner that turns markup text into an [`Element`]
//! tree. Start/end/self-closing tags, quoted attributes and text content are
//! supported; comments, XML declarations and doctypes are skipped. The five
//! predefined entities and numeric character references are decoded.

use crate::{Attribute, Element, MarkupError};
use tracing::trace;

/// Parse markup text into its root element.
pub fn parse(input: &str) -> Result<Element, MarkupError> {
    let mut reader = Reader::new(input);
    reader.skip_misc();
    if reader.at_eof() {
        return Err(MarkupError::NoRoot);
    }
    let root = reader.parse_element()?;
    reader.skip_misc();
    if !reader.at_eof() {
        return Err(MarkupError::UnexpectedChar {
            found: reader.peek_char().unwrap_or('\0'),
            at: reader.pos,
        });
    }
    Ok(root)
}

struct Reader<'a> {
    input: &'a str,
    bytes: &'a [u8],
    pos: usize,
}

impl<'a> Reader<'a> {
    fn new(input: &'a str) -> Self {
        Self {
            input,
            bytes: input.as_bytes(),
            pos: 0,
        }
    }

    fn at_eof(&self) -> bool {
        self.pos >= self.bytes.len()
    }

    fn peek(&self) -> Option<u8> {
        self.bytes.get(self.pos).copied()
    }

    fn peek_char(&self) -> Option<char> {
        self.input[self.pos..].chars().next()
    }

    fn starts_with(&self, s: &str) -> bool {
        self.input[self.pos..].starts_with(s)
    }

    fn skip_whitespace(&mut self) {
        while matches!(self.peek(), Some(b' ' | b'\t' | b'\r' | b'\n')) {
            self.pos += 1;
        }
    }

    /// Skip whitespace, comments, processing instructions and doctypes
    /// between elements of interest.
    fn skip_misc(&mut self) {
        loop {
            self.skip_whitespace();
            if self.starts_with("<!--") {
                self.skip_past("-->");
            } else if self.starts_with("<?") {
                self.skip_past("?>");
            } else if self.starts_with("<!") {
                self.skip_past(">");
            } else {
                return;
            }
        }
    }

    fn skip_past(&mut self, terminator: &str) {
        match self.input[self.pos..].find(terminator) {
            Some(off) => self.pos += off + terminator.len(),
            None => self.pos = self.bytes.len(),
        }
    }

    fn expect(&mut self, byte: u8) -> Result<(), MarkupError> {
        match self.peek() {
            Some(b) if b == byte => {
                self.pos += 1;
                Ok(())
            }
            Some(_) => Err(MarkupError::UnexpectedChar {
                found: self.peek_char().unwrap_or('\0'),
                at: self.pos,
            }),
            None => Err(MarkupError::UnexpectedEof),
        }
    }

    fn read_name(&mut self) -> Result<String, MarkupError> {
        let start = self.pos;
        while let Some(b) = self.peek() {
            if b.is_ascii_alphanumeric() || matches!(b, b'-' | b'_' | b'.' | b':') {
                self.pos += 1;
            } else {
                break;
            }
        }
        if self.pos == start {
            return match self.peek_char() {
                Some(c) => Err(MarkupError::UnexpectedChar {
                    found: c,
                    at: self.pos,
                }),
                None => Err(MarkupError::UnexpectedEof),
            };
        }
        Ok(self.input[start..self.pos].to_string())
    }

    /// Parse one element, cursor positioned at its `<`.
    fn parse_element(&mut self) -> Result<Element, MarkupError> {
        self.expect(b'<')?;
        let name = self.read_name()?;
        trace!(tag = %name, "open tag");
        let mut element = Element::new(&name);

        self.parse_attributes(&mut element)?;

        if self.starts_with("/>") {
            self.pos += 2;
            return Ok(element);
        }
        self.expect(b'>')?;

        let mut text = String::new();
        loop {
            if self.at_eof() {
                return Err(MarkupError::UnexpectedEof);
            }
            if self.starts_with("</") {
                self.pos += 2;
                let close = self.read_name()?;
                if close != name {
                    return Err(MarkupError::MismatchedTag {
                        expected: name,
                        found: close,
                    });
                }
                self.skip_whitespace();
                self.expect(b'>')?;
                break;
            }
            if self.starts_with("<!--") {
                self.skip_past("-->");
                continue;
            }
            if self.peek() == Some(b'<') {
                element.push_child(self.parse_element()?);
                continue;
            }
            let start = self.pos;
            while !self.at_eof() && self.peek() != Some(b'<') {
                self.pos += 1;
            }
            text.push_str(&decode_entities(&self.input[start..self.pos]));
        }

        // Whitespace between child tags is formatting, not content.
        if element.children.is_empty() {
            if !text.is_empty() {
                element.text = Some(text);
            }
        } else if !text.trim().is_empty() {
            element.text = Some(text);
        }

        Ok(element)
    }

    fn parse_attributes(&mut self, element: &mut Element) -> Result<(), MarkupError> {
        loop {
            self.skip_whitespace();
            match self.peek() {
                None => return Err(MarkupError::UnexpectedEof),
                Some(b'>') | Some(b'/') => return Ok(()),
                _ => {}
            }
            let name = self.read_name()?;
            self.skip_whitespace();
            self.expect(b'=')?;
            self.skip_whitespace();
            let quote = match self.peek() {
                Some(q @ (b'"' | b'\'')) => q,
                Some(_) => {
                    return Err(MarkupError::UnexpectedChar {
                        found: self.peek_char().unwrap_or('\0'),
                        at: self.pos,
                    })
                }
                None => return Err(MarkupError::UnexpectedEof),
            };
            self.pos += 1;
            let start = self.pos;
            while let Some(b) = self.peek() {
                if b == quote {
                    break;
                }
                self.pos += 1;
            }
            if self.at_eof() {
                return Err(MarkupError::UnexpectedEof);
            }
            let value = decode_entities(&self.input[start..self.pos]);
            self.pos += 1;
            element.attributes.push(Attribute::new(name, value));
        }
    }
}

/// Decode the predefined entities and numeric character references.
/// Unrecognized references are kept verbatim.
fn decode_entities(s: &str) -> String {
    if !s.contains('&') {
        return s.to_string();
    }
    let mut out = String::with_capacity(s.len());
    let mut rest = s;
    while let Some(amp) = rest.find('&') {
        out.push_str(&rest[..amp]);
        rest = &rest[amp..];
        let Some(semi) = rest.find(';') else {
            out.push_str(rest);
            return out;
        };
        let entity = &rest[1..semi];
        match entity {
            "amp" => out.push('&'),
            "lt" => out.push('<'),
            "gt" => out.push('>'),
            "quot" => out.push('"'),
            "apos" => out.push('\''),
            _ => {
                let decoded = entity
                    .strip_prefix("#x")
                    .or_else(|| entity.strip_prefix("#X"))
                    .and_then(|h| u32::from_str_radix(h, 16).ok())
                    .or_else(|| entity.strip_prefix('#').and_then(|d| d.parse().ok()))
                    .and_then(char::from_u32);
                match decoded {
                    Some(c) => out.push(c),
                    None => out.push_str(&rest[..=semi]),
                }
            }
        }
        rest = &rest[semi + 1..];
    }
    out.push_str(rest);
    out
}
