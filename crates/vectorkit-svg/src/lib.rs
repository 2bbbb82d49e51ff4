//! # VectorKit SVG
//!
//! In-memory SVG document model and bidirectional markup codec for
//! VectorKit.
//!
//! ## Features
//!
//! - **Document model**: typed elements (rect, circle, ellipse, line,
//!   polygon, polyline, path, text, textpath, link, image, marker, group)
//!   with shared `id`/`class`/`style`/`transform` attributes
//! - **Styles**: fill, stroke, font and dash properties with a CSS-like
//!   declaration grammar
//! - **Transforms**: ordered transform function lists (matrix, translate,
//!   scale, rotate, skewX, skewY)
//! - **Codec**: serialize to a [`vectorkit_markup`] tree and parse back,
//!   plus string and file conveniences
//!
//! ## Architecture
//!
//! ```text
//! SvgDocument
//!    └── SvgElement (kind + id/class/style/transforms)
//!           ├── Shapes (rect, circle, ellipse, line, polygon, polyline, path)
//!           ├── Text (text, textpath)
//!           └── Containers (a, marker, g)
//!              └── child SvgElements
//! ```
//!
//! Parsing is deliberately forgiving: only a missing or misnamed root is an
//! error, everything else degrades to defaults (see [`parser`] for the
//! exact rules).

mod scan;

pub mod element;
pub mod parser;
pub mod style;
pub mod transform;
pub mod types;
pub mod writer;

pub use element::{
    LengthAdjust, SvgCircle, SvgElement, SvgElementKind, SvgEllipse, SvgGroup, SvgImage, SvgLine,
    SvgLink, SvgMarker, SvgPath, SvgPolygon, SvgPolyline, SvgRect, SvgText, SvgTextPath,
    TextPathMethod, TextPathSpacing,
};
pub use style::{FillRule, FontStretch, FontStyle, FontWeight, LineCap, LineJoin, SvgStyle};
pub use transform::{
    format_transform_list, parse_transform_list, SvgMatrix, SvgRotate, SvgScale, SvgTransform,
    SvgTranslate,
};
pub use types::{
    format_points, parse_points, LengthUnit, SvgLength, SvgOrient, SvgPoint,
};

use std::path::Path;
use thiserror::Error;
use vectorkit_markup::{Element as MarkupElement, MarkupError};

/// The default `xmlns` value on new documents.
pub const SVG_NAMESPACE: &str = "http://www.w3.org/2000/svg";

// ==================== Errors ====================

/// Errors that can occur in SVG operations.
#[derive(Error, Debug)]
pub enum SvgError {
    #[error("Root element is <{0}>, expected <svg>")]
    NotSvg(String),

    #[error("Markup error: {0}")]
    Markup(#[from] MarkupError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

// ==================== Document ====================

/// A complete SVG document: canvas size, namespace, root style and the
/// top-level element list.
#[derive(Debug, Clone, PartialEq)]
pub struct SvgDocument {
    pub width: i32,
    pub height: i32,
    pub xmlns: String,
    /// Root style. Only `background-color` survives serialization here.
    pub style: Option<SvgStyle>,
    pub elements: Vec<SvgElement>,
}

impl SvgDocument {
    /// Create an empty document with the standard namespace.
    pub fn new() -> Self {
        Self {
            width: 0,
            height: 0,
            xmlns: SVG_NAMESPACE.to_string(),
            style: None,
            elements: Vec::new(),
        }
    }

    /// Build a document from a materialized markup tree.
    ///
    /// The root element must be named `svg`; anything else fails the whole
    /// parse. Children parse per the forgiving rules in [`parser`].
    pub fn from_markup(root: &MarkupElement) -> Result<Self, SvgError> {
        parser::document_from_markup(root)
    }

    /// Serialize into a markup tree.
    pub fn to_markup(&self) -> MarkupElement {
        writer::document_to_markup(self)
    }

    /// Parse SVG text.
    pub fn parse(text: &str) -> Result<Self, SvgError> {
        let root = vectorkit_markup::parse(text)?;
        Self::from_markup(&root)
    }

    /// Render as a standalone SVG document string.
    pub fn to_svg_string(&self) -> String {
        vectorkit_markup::document_to_string(&self.to_markup())
    }

    /// Read and parse an SVG file.
    pub fn read(path: impl AsRef<Path>) -> Result<Self, SvgError> {
        let text = std::fs::read_to_string(path)?;
        Self::parse(&text)
    }

    /// Serialize and write to an SVG file.
    pub fn write(&self, path: impl AsRef<Path>) -> Result<(), SvgError> {
        std::fs::write(path, self.to_svg_string())?;
        Ok(())
    }

    /// First element carrying `id`, searching containers depth first in
    /// document order.
    pub fn element_by_id(&self, id: &str) -> Option<&SvgElement> {
        element::find_by_id(&self.elements, id)
    }

    /// Mutable variant of [`element_by_id`](Self::element_by_id).
    pub fn element_by_id_mut(&mut self, id: &str) -> Option<&mut SvgElement> {
        element::find_by_id_mut(&mut self.elements, id)
    }
}

impl Default for SvgDocument {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for SvgDocument {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&vectorkit_markup::element_to_string(&self.to_markup()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_document_defaults() {
        let doc = SvgDocument::new();
        assert_eq!(doc.width, 0);
        assert_eq!(doc.height, 0);
        assert_eq!(doc.xmlns, SVG_NAMESPACE);
        assert!(doc.style.is_none());
        assert!(doc.elements.is_empty());
    }

    #[test]
    fn test_parse_minimal_document() {
        let doc = SvgDocument::parse(r#"<svg width="100" height="100"></svg>"#).unwrap();
        assert_eq!(doc.width, 100);
        assert_eq!(doc.height, 100);
    }

    #[test]
    fn test_parse_rejects_wrong_root() {
        let err = SvgDocument::parse("<notsvg/>").unwrap_err();
        assert!(matches!(err, SvgError::NotSvg(_)));
    }

    #[test]
    fn test_parse_propagates_markup_errors() {
        let err = SvgDocument::parse("<svg><rect</svg>").unwrap_err();
        assert!(matches!(err, SvgError::Markup(_)));
    }

    #[test]
    fn test_string_round_trip() {
        let doc = SvgDocument::parse(
            r#"<svg width="20" height="10"><rect width="5" height="5" x="1" y="2"/></svg>"#,
        )
        .unwrap();
        let reparsed = SvgDocument::parse(&doc.to_svg_string()).unwrap();
        assert_eq!(reparsed, doc);
    }

    #[test]
    fn test_file_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.svg");

        let mut doc = SvgDocument::new();
        doc.width = 16;
        doc.height = 16;
        doc.elements.push(SvgElement::new(SvgElementKind::Circle(
            SvgCircle {
                r: 8.0,
                center: SvgPoint::new(8.0, 8.0),
            },
        )));
        doc.write(&path).unwrap();

        let loaded = SvgDocument::read(&path).unwrap();
        assert_eq!(loaded, doc);
    }

    #[test]
    fn test_element_by_id_searches_containers() {
        let mut doc = SvgDocument::parse(
            r##"<svg><g><a href="#x"><circle r="1" id="dot"/></a></g><rect width="1" height="1" id="box"/></svg>"##,
        )
        .unwrap();

        assert!(doc.element_by_id("dot").unwrap().as_circle().is_some());
        assert!(doc.element_by_id("box").unwrap().as_rect().is_some());
        assert!(doc.element_by_id("missing").is_none());

        doc.element_by_id_mut("dot")
            .unwrap()
            .as_circle_mut()
            .unwrap()
            .r = 9.0;
        assert_eq!(doc.element_by_id("dot").unwrap().as_circle().unwrap().r, 9.0);
    }

    #[test]
    fn test_clone_is_deep() {
        let mut doc = SvgDocument::parse(
            r#"<svg><g><rect width="1" height="1"/></g></svg>"#,
        )
        .unwrap();
        let copy = doc.clone();
        doc.elements[0]
            .children_mut()
            .unwrap()
            .clear();
        assert_eq!(copy.elements[0].children().unwrap().len(), 1);
    }
}
