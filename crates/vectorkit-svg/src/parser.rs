//! Parser: markup tree to document model.
//!
//! Parsing is best-effort. The only hard failure is a root element that is
//! not `<svg>`. Unknown child tags are skipped, malformed attribute values
//! degrade to defaults, and a malformed transform list costs exactly that
//! one attribute.

use crate::element::{
    LengthAdjust, SvgCircle, SvgElement, SvgElementKind, SvgEllipse, SvgGroup, SvgImage, SvgLine,
    SvgLink, SvgMarker, SvgPath, SvgPolygon, SvgPolyline, SvgRect, SvgText, SvgTextPath,
    TextPathMethod, TextPathSpacing,
};
use crate::scan::{integer_prefix, number_token};
use crate::style::SvgStyle;
use crate::transform::parse_transform_list;
use crate::types::{parse_points, SvgLength, SvgOrient, SvgPoint};
use crate::{SvgDocument, SvgError};
use tracing::{debug, trace};
use vectorkit_markup::Element as MarkupElement;

pub(crate) fn document_from_markup(root: &MarkupElement) -> Result<SvgDocument, SvgError> {
    if root.name != "svg" {
        return Err(SvgError::NotSvg(root.name.clone()));
    }

    let mut doc = SvgDocument::new();
    if let Some(width) = root.attr("width") {
        doc.width = integer_prefix(width);
    }
    if let Some(height) = root.attr("height") {
        doc.height = integer_prefix(height);
    }
    if let Some(xmlns) = root.attr("xmlns") {
        doc.xmlns = xmlns.to_string();
    }
    if let Some(style) = root.attr("style") {
        doc.style = Some(SvgStyle::parse(style));
    }
    doc.elements = parse_elements(&root.children);
    trace!(elements = doc.elements.len(), "parsed document");
    Ok(doc)
}

fn parse_elements(children: &[MarkupElement]) -> Vec<SvgElement> {
    children.iter().filter_map(parse_element).collect()
}

fn parse_element(e: &MarkupElement) -> Option<SvgElement> {
    let kind = match e.name.as_str() {
        "rect" => SvgElementKind::Rect(parse_rect(e)),
        "circle" => SvgElementKind::Circle(parse_circle(e)),
        "ellipse" => SvgElementKind::Ellipse(parse_ellipse(e)),
        "line" => SvgElementKind::Line(parse_line(e)),
        "polygon" => SvgElementKind::Polygon(SvgPolygon {
            points: points_of(e),
        }),
        "polyline" => SvgElementKind::Polyline(SvgPolyline {
            points: points_of(e),
        }),
        "path" => SvgElementKind::Path(SvgPath {
            d: e.attr("d").unwrap_or_default().to_string(),
        }),
        "text" => SvgElementKind::Text(parse_text(e)),
        "textpath" => SvgElementKind::TextPath(parse_textpath(e)),
        "a" => SvgElementKind::Link(parse_link(e)),
        "image" => SvgElementKind::Image(parse_image(e)),
        "marker" => SvgElementKind::Marker(parse_marker(e)),
        "g" => SvgElementKind::Group(SvgGroup {
            children: parse_elements(&e.children),
        }),
        other => {
            debug!(tag = %other, "skipping unknown element");
            return None;
        }
    };

    let mut element = SvgElement::new(kind);
    element.id = e.attr("id").map(str::to_string);
    if let Some(style) = e.attr("style") {
        element.style = Some(SvgStyle::parse(style));
    }
    if let Some(transform) = e.attr("transform") {
        element.transforms = parse_transform_list(transform);
    }
    Some(element)
}

/// Numeric attribute coercion: leading numeric prefix, zero when missing
/// or malformed.
fn num(e: &MarkupElement, name: &str) -> f64 {
    e.attr(name).map(|v| number_token(v).0).unwrap_or(0.0)
}

fn points_of(e: &MarkupElement) -> Vec<SvgPoint> {
    e.attr("points").map(parse_points).unwrap_or_default()
}

fn parse_rect(e: &MarkupElement) -> SvgRect {
    SvgRect {
        width: num(e, "width"),
        height: num(e, "height"),
        p: SvgPoint::new(num(e, "x"), num(e, "y")),
        rx: num(e, "rx"),
        ry: num(e, "ry"),
    }
}

fn parse_circle(e: &MarkupElement) -> SvgCircle {
    SvgCircle {
        r: num(e, "r"),
        center: SvgPoint::new(num(e, "cx"), num(e, "cy")),
    }
}

fn parse_ellipse(e: &MarkupElement) -> SvgEllipse {
    SvgEllipse {
        rx: num(e, "rx"),
        ry: num(e, "ry"),
        center: SvgPoint::new(num(e, "cx"), num(e, "cy")),
    }
}

fn parse_line(e: &MarkupElement) -> SvgLine {
    SvgLine {
        p1: SvgPoint::new(num(e, "x1"), num(e, "y1")),
        p2: SvgPoint::new(num(e, "x2"), num(e, "y2")),
    }
}

fn parse_text(e: &MarkupElement) -> SvgText {
    SvgText {
        p: SvgPoint::new(num(e, "x"), num(e, "y")),
        dx: num(e, "dx"),
        dy: num(e, "dy"),
        rotate: num(e, "rotate"),
        text_length: e
            .attr("textLength")
            .map(SvgLength::parse)
            .unwrap_or_default(),
        length_adjust: e.attr("lengthAdjust").map(LengthAdjust::from_keyword),
        contents: e.text().to_string(),
    }
}

fn parse_textpath(e: &MarkupElement) -> SvgTextPath {
    SvgTextPath {
        href: e.attr("href").map(str::to_string),
        length_adjust: e.attr("lengthAdjust").map(LengthAdjust::from_keyword),
        method: e.attr("method").map(TextPathMethod::from_keyword),
        spacing: e.attr("spacing").map(TextPathSpacing::from_keyword),
        start_offset: e
            .attr("startOffset")
            .map(SvgLength::parse)
            .unwrap_or_default(),
        text_length: e
            .attr("textLength")
            .map(SvgLength::parse)
            .unwrap_or_default(),
        contents: e.text().to_string(),
    }
}

fn parse_link(e: &MarkupElement) -> SvgLink {
    SvgLink {
        href: e.attr("href").map(str::to_string),
        download: e.attr("download").map(str::to_string),
        hreflang: e.attr("hreflang").map(str::to_string),
        referrer_policy: e.attr("referrerpolicy").map(str::to_string),
        rel: e.attr("rel").map(str::to_string),
        target: e.attr("target").map(str::to_string),
        mime_type: e.attr("type").map(str::to_string),
        children: parse_elements(&e.children),
    }
}

fn parse_image(e: &MarkupElement) -> SvgImage {
    SvgImage {
        width: num(e, "width"),
        height: num(e, "height"),
        href: e.attr("href").map(str::to_string),
        p: SvgPoint::new(num(e, "x"), num(e, "y")),
    }
}

fn parse_marker(e: &MarkupElement) -> SvgMarker {
    SvgMarker {
        marker_width: num(e, "markerWidth"),
        marker_height: num(e, "markerHeight"),
        ref_point: SvgPoint::new(num(e, "refX"), num(e, "refY")),
        orient: e.attr("orient").map(SvgOrient::parse),
        children: parse_elements(&e.children),
    }
}
