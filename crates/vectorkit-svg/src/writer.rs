//! Serializer: document model to markup tree.
//!
//! Each element kind emits a fixed tag name and a fixed attribute order,
//! type-specific attributes first, then `id`, `class`, `transform` and
//! `style` when present. Containers recurse into their child lists.

use crate::element::{
    SvgCircle, SvgElement, SvgElementKind, SvgEllipse, SvgGroup, SvgImage, SvgLine, SvgLink,
    SvgMarker, SvgPath, SvgPolygon, SvgPolyline, SvgRect, SvgText, SvgTextPath,
};
use crate::scan::format_number;
use crate::transform::format_transform_list;
use crate::types::{format_points, SvgLength};
use crate::SvgDocument;
use vectorkit_markup::Element as MarkupElement;

pub(crate) fn document_to_markup(doc: &SvgDocument) -> MarkupElement {
    let mut root = MarkupElement::new("svg");
    root.set_attr("width", doc.width.to_string());
    root.set_attr("height", doc.height.to_string());
    root.set_attr("xmlns", &doc.xmlns);
    // Only background-color surfaces on the root style.
    if let Some(bg) = doc
        .style
        .as_ref()
        .and_then(|s| s.background_color.as_deref())
    {
        root.set_attr("style", format!("background-color: {bg}"));
    }
    for element in &doc.elements {
        root.push_child(element_to_markup(element));
    }
    root
}

pub(crate) fn element_to_markup(element: &SvgElement) -> MarkupElement {
    let mut out = match &element.kind {
        SvgElementKind::Rect(r) => rect_to_markup(r),
        SvgElementKind::Circle(c) => circle_to_markup(c),
        SvgElementKind::Ellipse(e) => ellipse_to_markup(e),
        SvgElementKind::Line(l) => line_to_markup(l),
        SvgElementKind::Polygon(p) => polygon_to_markup(p),
        SvgElementKind::Polyline(p) => polyline_to_markup(p),
        SvgElementKind::Path(p) => path_to_markup(p),
        SvgElementKind::Text(t) => text_to_markup(t),
        SvgElementKind::TextPath(t) => textpath_to_markup(t),
        SvgElementKind::Link(l) => link_to_markup(l),
        SvgElementKind::Image(i) => image_to_markup(i),
        SvgElementKind::Marker(m) => marker_to_markup(m),
        SvgElementKind::Group(g) => group_to_markup(g),
    };

    if let Some(id) = &element.id {
        out.set_attr("id", id);
    }
    if let Some(class) = &element.class {
        out.set_attr("class", class);
    }
    if !element.transforms.is_empty() {
        out.set_attr("transform", format_transform_list(&element.transforms));
    }
    if let Some(style) = &element.style {
        let css = style.to_css();
        if !css.is_empty() {
            out.set_attr("style", css);
        }
    }

    out
}

fn num_attr(out: &mut MarkupElement, name: &str, value: f64) {
    out.set_attr(name, format_number(value));
}

fn length_attr(out: &mut MarkupElement, name: &str, length: &SvgLength) {
    out.set_attr(name, length.to_string());
}

fn rect_to_markup(r: &SvgRect) -> MarkupElement {
    let mut out = MarkupElement::new("rect");
    num_attr(&mut out, "width", r.width);
    num_attr(&mut out, "height", r.height);
    num_attr(&mut out, "x", r.p.x);
    num_attr(&mut out, "y", r.p.y);
    if r.rx != 0.0 {
        num_attr(&mut out, "rx", r.rx);
    }
    if r.ry != 0.0 {
        num_attr(&mut out, "ry", r.ry);
    }
    out
}

fn circle_to_markup(c: &SvgCircle) -> MarkupElement {
    let mut out = MarkupElement::new("circle");
    num_attr(&mut out, "r", c.r);
    num_attr(&mut out, "cx", c.center.x);
    num_attr(&mut out, "cy", c.center.y);
    out
}

fn ellipse_to_markup(e: &SvgEllipse) -> MarkupElement {
    let mut out = MarkupElement::new("ellipse");
    num_attr(&mut out, "rx", e.rx);
    num_attr(&mut out, "ry", e.ry);
    num_attr(&mut out, "cx", e.center.x);
    num_attr(&mut out, "cy", e.center.y);
    out
}

fn line_to_markup(l: &SvgLine) -> MarkupElement {
    let mut out = MarkupElement::new("line");
    num_attr(&mut out, "x1", l.p1.x);
    num_attr(&mut out, "y1", l.p1.y);
    num_attr(&mut out, "x2", l.p2.x);
    num_attr(&mut out, "y2", l.p2.y);
    out
}

fn polygon_to_markup(p: &SvgPolygon) -> MarkupElement {
    let mut out = MarkupElement::new("polygon");
    out.set_attr("points", format_points(&p.points));
    out
}

fn polyline_to_markup(p: &SvgPolyline) -> MarkupElement {
    let mut out = MarkupElement::new("polyline");
    out.set_attr("points", format_points(&p.points));
    out
}

fn path_to_markup(p: &SvgPath) -> MarkupElement {
    let mut out = MarkupElement::new("path");
    out.set_attr("d", &p.d);
    out
}

fn text_to_markup(t: &SvgText) -> MarkupElement {
    let mut out = MarkupElement::new("text");
    num_attr(&mut out, "x", t.p.x);
    num_attr(&mut out, "y", t.p.y);
    if t.dx != 0.0 {
        num_attr(&mut out, "dx", t.dx);
    }
    if t.dy != 0.0 {
        num_attr(&mut out, "dy", t.dy);
    }
    if t.rotate != 0.0 {
        num_attr(&mut out, "rotate", t.rotate);
    }
    if t.text_length.has_unit() {
        length_attr(&mut out, "textLength", &t.text_length);
        out.set_attr(
            "lengthAdjust",
            t.length_adjust.unwrap_or_default().keyword(),
        );
    }
    if !t.contents.is_empty() {
        out.set_text(&t.contents);
    }
    out
}

fn textpath_to_markup(t: &SvgTextPath) -> MarkupElement {
    let mut out = MarkupElement::new("textpath");
    if let Some(href) = &t.href {
        out.set_attr("href", href);
    }
    if let Some(adjust) = t.length_adjust {
        out.set_attr("lengthAdjust", adjust.keyword());
    }
    if let Some(method) = t.method {
        out.set_attr("method", method.keyword());
    }
    if let Some(spacing) = t.spacing {
        out.set_attr("spacing", spacing.keyword());
    }
    if t.start_offset.has_unit() {
        length_attr(&mut out, "startOffset", &t.start_offset);
    }
    if t.text_length.has_unit() {
        length_attr(&mut out, "textLength", &t.text_length);
    }
    if !t.contents.is_empty() {
        out.set_text(&t.contents);
    }
    out
}

fn link_to_markup(l: &SvgLink) -> MarkupElement {
    let mut out = MarkupElement::new("a");
    if let Some(href) = &l.href {
        out.set_attr("href", href);
    }
    if let Some(download) = &l.download {
        out.set_attr("download", download);
    }
    if let Some(hreflang) = &l.hreflang {
        out.set_attr("hreflang", hreflang);
    }
    if let Some(policy) = &l.referrer_policy {
        out.set_attr("referrerpolicy", policy);
    }
    if let Some(rel) = &l.rel {
        out.set_attr("rel", rel);
    }
    if let Some(target) = &l.target {
        out.set_attr("target", target);
    }
    if let Some(mime) = &l.mime_type {
        out.set_attr("type", mime);
    }
    for child in &l.children {
        out.push_child(element_to_markup(child));
    }
    out
}

fn image_to_markup(i: &SvgImage) -> MarkupElement {
    let mut out = MarkupElement::new("image");
    num_attr(&mut out, "width", i.width);
    num_attr(&mut out, "height", i.height);
    num_attr(&mut out, "x", i.p.x);
    num_attr(&mut out, "y", i.p.y);
    if let Some(href) = &i.href {
        out.set_attr("href", href);
    }
    out
}

fn marker_to_markup(m: &SvgMarker) -> MarkupElement {
    let mut out = MarkupElement::new("marker");
    num_attr(&mut out, "markerWidth", m.marker_width);
    num_attr(&mut out, "markerHeight", m.marker_height);
    num_attr(&mut out, "refX", m.ref_point.x);
    num_attr(&mut out, "refY", m.ref_point.y);
    if let Some(orient) = &m.orient {
        out.set_attr("orient", orient.to_string());
    }
    for child in &m.children {
        out.push_child(element_to_markup(child));
    }
    out
}

fn group_to_markup(g: &SvgGroup) -> MarkupElement {
    let mut out = MarkupElement::new("g");
    for child in &g.children {
        out.push_child(element_to_markup(child));
    }
    out
}
