//! Document elements: the tagged element wrapper and its thirteen
//! payload kinds.
//!
//! An element owns exactly one payload plus the attributes every kind
//! shares (`id`, `class`, `style`, `transform`). The container kinds —
//! link, marker, group — own child element lists, which is how the
//! document forms a tree.

use crate::style::SvgStyle;
use crate::transform::SvgTransform;
use crate::types::{SvgLength, SvgOrient, SvgPoint};

// ==================== Text enums ====================

/// `lengthAdjust` keywords for text and textpath.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum LengthAdjust {
    #[default]
    Spacing,
    SpacingAndGlyphs,
}

impl LengthAdjust {
    pub fn keyword(&self) -> &'static str {
        match self {
            LengthAdjust::Spacing => "spacing",
            LengthAdjust::SpacingAndGlyphs => "spacingAndGlyphs",
        }
    }

    /// Keyword table with the spacing fallback.
    pub fn from_keyword(s: &str) -> Self {
        match s {
            "spacingAndGlyphs" => LengthAdjust::SpacingAndGlyphs,
            _ => LengthAdjust::Spacing,
        }
    }
}

/// `method` keywords for textpath.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum TextPathMethod {
    #[default]
    Align,
    Stretch,
}

impl TextPathMethod {
    pub fn keyword(&self) -> &'static str {
        match self {
            TextPathMethod::Align => "align",
            TextPathMethod::Stretch => "stretch",
        }
    }

    pub fn from_keyword(s: &str) -> Self {
        match s {
            "stretch" => TextPathMethod::Stretch,
            _ => TextPathMethod::Align,
        }
    }
}

/// `spacing` keywords for textpath.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum TextPathSpacing {
    #[default]
    Auto,
    Exact,
}

impl TextPathSpacing {
    pub fn keyword(&self) -> &'static str {
        match self {
            TextPathSpacing::Auto => "auto",
            TextPathSpacing::Exact => "exact",
        }
    }

    pub fn from_keyword(s: &str) -> Self {
        match s {
            "exact" => TextPathSpacing::Exact,
            _ => TextPathSpacing::Auto,
        }
    }
}

// ==================== Payloads ====================

/// `<rect>` data.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct SvgRect {
    pub width: f64,
    pub height: f64,
    pub p: SvgPoint,
    pub rx: f64,
    pub ry: f64,
}

/// `<circle>` data.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct SvgCircle {
    pub r: f64,
    pub center: SvgPoint,
}

/// `<ellipse>` data.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct SvgEllipse {
    pub rx: f64,
    pub ry: f64,
    pub center: SvgPoint,
}

/// `<line>` data.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct SvgLine {
    pub p1: SvgPoint,
    pub p2: SvgPoint,
}

/// `<polygon>` data.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SvgPolygon {
    pub points: Vec<SvgPoint>,
}

/// `<polyline>` data.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SvgPolyline {
    pub points: Vec<SvgPoint>,
}

/// `<path>` data. The path data string is carried verbatim; path commands
/// are not interpreted here.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SvgPath {
    pub d: String,
}

/// `<text>` data.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SvgText {
    pub p: SvgPoint,
    pub dx: f64,
    pub dy: f64,
    pub rotate: f64,
    /// Serialized only when a unit suffix is set.
    pub text_length: SvgLength,
    pub length_adjust: Option<LengthAdjust>,
    pub contents: String,
}

/// `<textpath>` data.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SvgTextPath {
    pub href: Option<String>,
    pub length_adjust: Option<LengthAdjust>,
    pub method: Option<TextPathMethod>,
    pub spacing: Option<TextPathSpacing>,
    pub start_offset: SvgLength,
    pub text_length: SvgLength,
    pub contents: String,
}

/// `<a>` data: a link wrapping the elements that draw it.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SvgLink {
    pub href: Option<String>,
    /// None = no download attribute, empty string = bare `download`.
    pub download: Option<String>,
    pub hreflang: Option<String>,
    pub referrer_policy: Option<String>,
    pub rel: Option<String>,
    pub target: Option<String>,
    /// MIME type of the link target.
    pub mime_type: Option<String>,
    pub children: Vec<SvgElement>,
}

/// `<image>` data.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SvgImage {
    pub width: f64,
    pub height: f64,
    pub href: Option<String>,
    pub p: SvgPoint,
}

/// `<marker>` data.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SvgMarker {
    pub marker_width: f64,
    pub marker_height: f64,
    pub ref_point: SvgPoint,
    pub orient: Option<SvgOrient>,
    pub children: Vec<SvgElement>,
}

/// `<g>` data: nothing of its own, just children.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SvgGroup {
    pub children: Vec<SvgElement>,
}

// ==================== Element ====================

/// The payload of an element. Exactly one kind is active; swapping the
/// kind drops the previous payload with it.
#[derive(Debug, Clone, PartialEq)]
pub enum SvgElementKind {
    Rect(SvgRect),
    Circle(SvgCircle),
    Ellipse(SvgEllipse),
    Line(SvgLine),
    Polygon(SvgPolygon),
    Polyline(SvgPolyline),
    Path(SvgPath),
    Text(SvgText),
    TextPath(SvgTextPath),
    Link(SvgLink),
    Image(SvgImage),
    Marker(SvgMarker),
    Group(SvgGroup),
}

impl SvgElementKind {
    /// The markup tag this kind serializes as.
    pub fn tag_name(&self) -> &'static str {
        match self {
            SvgElementKind::Rect(_) => "rect",
            SvgElementKind::Circle(_) => "circle",
            SvgElementKind::Ellipse(_) => "ellipse",
            SvgElementKind::Line(_) => "line",
            SvgElementKind::Polygon(_) => "polygon",
            SvgElementKind::Polyline(_) => "polyline",
            SvgElementKind::Path(_) => "path",
            SvgElementKind::Text(_) => "text",
            SvgElementKind::TextPath(_) => "textpath",
            SvgElementKind::Link(_) => "a",
            SvgElementKind::Image(_) => "image",
            SvgElementKind::Marker(_) => "marker",
            SvgElementKind::Group(_) => "g",
        }
    }
}

/// One element of the document: an active payload plus the attributes
/// common to every kind.
#[derive(Debug, Clone, PartialEq)]
pub struct SvgElement {
    pub kind: SvgElementKind,
    pub id: Option<String>,
    pub class: Option<String>,
    pub style: Option<SvgStyle>,
    /// Empty list means no transform attribute.
    pub transforms: Vec<SvgTransform>,
}

impl SvgElement {
    /// Create an element around a payload, common attributes unset.
    pub fn new(kind: SvgElementKind) -> Self {
        Self {
            kind,
            id: None,
            class: None,
            style: None,
            transforms: Vec::new(),
        }
    }

    /// The markup tag this element serializes as.
    pub fn tag_name(&self) -> &'static str {
        self.kind.tag_name()
    }

    /// Child list of a container kind; `None` for leaf kinds.
    pub fn children(&self) -> Option<&Vec<SvgElement>> {
        match &self.kind {
            SvgElementKind::Link(l) => Some(&l.children),
            SvgElementKind::Marker(m) => Some(&m.children),
            SvgElementKind::Group(g) => Some(&g.children),
            _ => None,
        }
    }

    /// Mutable child list of a container kind; `None` for leaf kinds.
    pub fn children_mut(&mut self) -> Option<&mut Vec<SvgElement>> {
        match &mut self.kind {
            SvgElementKind::Link(l) => Some(&mut l.children),
            SvgElementKind::Marker(m) => Some(&mut m.children),
            SvgElementKind::Group(g) => Some(&mut g.children),
            _ => None,
        }
    }

    pub fn as_rect(&self) -> Option<&SvgRect> {
        match &self.kind {
            SvgElementKind::Rect(r) => Some(r),
            _ => None,
        }
    }

    pub fn as_rect_mut(&mut self) -> Option<&mut SvgRect> {
        match &mut self.kind {
            SvgElementKind::Rect(r) => Some(r),
            _ => None,
        }
    }

    pub fn as_circle(&self) -> Option<&SvgCircle> {
        match &self.kind {
            SvgElementKind::Circle(c) => Some(c),
            _ => None,
        }
    }

    pub fn as_circle_mut(&mut self) -> Option<&mut SvgCircle> {
        match &mut self.kind {
            SvgElementKind::Circle(c) => Some(c),
            _ => None,
        }
    }

    pub fn as_ellipse(&self) -> Option<&SvgEllipse> {
        match &self.kind {
            SvgElementKind::Ellipse(e) => Some(e),
            _ => None,
        }
    }

    pub fn as_ellipse_mut(&mut self) -> Option<&mut SvgEllipse> {
        match &mut self.kind {
            SvgElementKind::Ellipse(e) => Some(e),
            _ => None,
        }
    }

    pub fn as_line(&self) -> Option<&SvgLine> {
        match &self.kind {
            SvgElementKind::Line(l) => Some(l),
            _ => None,
        }
    }

    pub fn as_line_mut(&mut self) -> Option<&mut SvgLine> {
        match &mut self.kind {
            SvgElementKind::Line(l) => Some(l),
            _ => None,
        }
    }

    pub fn as_polygon(&self) -> Option<&SvgPolygon> {
        match &self.kind {
            SvgElementKind::Polygon(p) => Some(p),
            _ => None,
        }
    }

    pub fn as_polygon_mut(&mut self) -> Option<&mut SvgPolygon> {
        match &mut self.kind {
            SvgElementKind::Polygon(p) => Some(p),
            _ => None,
        }
    }

    pub fn as_polyline(&self) -> Option<&SvgPolyline> {
        match &self.kind {
            SvgElementKind::Polyline(p) => Some(p),
            _ => None,
        }
    }

    pub fn as_polyline_mut(&mut self) -> Option<&mut SvgPolyline> {
        match &mut self.kind {
            SvgElementKind::Polyline(p) => Some(p),
            _ => None,
        }
    }

    pub fn as_path(&self) -> Option<&SvgPath> {
        match &self.kind {
            SvgElementKind::Path(p) => Some(p),
            _ => None,
        }
    }

    pub fn as_path_mut(&mut self) -> Option<&mut SvgPath> {
        match &mut self.kind {
            SvgElementKind::Path(p) => Some(p),
            _ => None,
        }
    }

    pub fn as_text(&self) -> Option<&SvgText> {
        match &self.kind {
            SvgElementKind::Text(t) => Some(t),
            _ => None,
        }
    }

    pub fn as_text_mut(&mut self) -> Option<&mut SvgText> {
        match &mut self.kind {
            SvgElementKind::Text(t) => Some(t),
            _ => None,
        }
    }

    pub fn as_textpath(&self) -> Option<&SvgTextPath> {
        match &self.kind {
            SvgElementKind::TextPath(t) => Some(t),
            _ => None,
        }
    }

    pub fn as_textpath_mut(&mut self) -> Option<&mut SvgTextPath> {
        match &mut self.kind {
            SvgElementKind::TextPath(t) => Some(t),
            _ => None,
        }
    }

    pub fn as_link(&self) -> Option<&SvgLink> {
        match &self.kind {
            SvgElementKind::Link(l) => Some(l),
            _ => None,
        }
    }

    pub fn as_link_mut(&mut self) -> Option<&mut SvgLink> {
        match &mut self.kind {
            SvgElementKind::Link(l) => Some(l),
            _ => None,
        }
    }

    pub fn as_image(&self) -> Option<&SvgImage> {
        match &self.kind {
            SvgElementKind::Image(i) => Some(i),
            _ => None,
        }
    }

    pub fn as_image_mut(&mut self) -> Option<&mut SvgImage> {
        match &mut self.kind {
            SvgElementKind::Image(i) => Some(i),
            _ => None,
        }
    }

    pub fn as_marker(&self) -> Option<&SvgMarker> {
        match &self.kind {
            SvgElementKind::Marker(m) => Some(m),
            _ => None,
        }
    }

    pub fn as_marker_mut(&mut self) -> Option<&mut SvgMarker> {
        match &mut self.kind {
            SvgElementKind::Marker(m) => Some(m),
            _ => None,
        }
    }

    pub fn as_group(&self) -> Option<&SvgGroup> {
        match &self.kind {
            SvgElementKind::Group(g) => Some(g),
            _ => None,
        }
    }

    pub fn as_group_mut(&mut self) -> Option<&mut SvgGroup> {
        match &mut self.kind {
            SvgElementKind::Group(g) => Some(g),
            _ => None,
        }
    }

    /// This element if it carries `id`, else the first matching descendant
    /// in document order.
    pub fn find_by_id(&self, id: &str) -> Option<&SvgElement> {
        if self.id.as_deref() == Some(id) {
            return Some(self);
        }
        self.children().and_then(|c| find_by_id(c, id))
    }

    /// Mutable variant of [`find_by_id`](Self::find_by_id).
    pub fn find_by_id_mut(&mut self, id: &str) -> Option<&mut SvgElement> {
        if self.id.as_deref() == Some(id) {
            return Some(self);
        }
        self.children_mut().and_then(|c| find_by_id_mut(c, id))
    }
}

/// First element in document order carrying `id`, searching containers
/// depth first.
pub fn find_by_id<'a>(elements: &'a [SvgElement], id: &str) -> Option<&'a SvgElement> {
    for element in elements {
        if let Some(found) = element.find_by_id(id) {
            return Some(found);
        }
    }
    None
}

/// Mutable variant of [`find_by_id`].
pub fn find_by_id_mut<'a>(
    elements: &'a mut [SvgElement],
    id: &str,
) -> Option<&'a mut SvgElement> {
    for element in elements {
        if let Some(found) = element.find_by_id_mut(id) {
            return Some(found);
        }
    }
    None
}

impl From<SvgElementKind> for SvgElement {
    fn from(kind: SvgElementKind) -> Self {
        SvgElement::new(kind)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_variant_accessors_check_active_kind() {
        let el = SvgElement::new(SvgElementKind::Rect(SvgRect {
            width: 10.0,
            ..Default::default()
        }));
        assert_eq!(el.as_rect().unwrap().width, 10.0);
        assert!(el.as_circle().is_none());
        assert!(el.children().is_none());
    }

    #[test]
    fn test_replacing_kind_drops_old_payload() {
        let mut el = SvgElement::new(SvgElementKind::Rect(SvgRect::default()));
        el.kind = SvgElementKind::Circle(SvgCircle {
            r: 5.0,
            ..Default::default()
        });
        assert!(el.as_rect().is_none());
        assert_eq!(el.as_circle().unwrap().r, 5.0);
    }

    #[test]
    fn test_container_children() {
        let mut group = SvgElement::new(SvgElementKind::Group(SvgGroup::default()));
        group
            .children_mut()
            .unwrap()
            .push(SvgElement::new(SvgElementKind::Line(SvgLine::default())));
        assert_eq!(group.children().unwrap().len(), 1);
        assert_eq!(group.tag_name(), "g");
    }

    #[test]
    fn test_list_remove_preserves_order() {
        let mut group = SvgGroup::default();
        for r in [1.0, 2.0, 3.0] {
            group.children.push(SvgElement::new(SvgElementKind::Circle(
                SvgCircle {
                    r,
                    ..Default::default()
                },
            )));
        }
        group.children.remove(1);
        assert_eq!(group.children.len(), 2);
        assert_eq!(group.children[0].as_circle().unwrap().r, 1.0);
        assert_eq!(group.children[1].as_circle().unwrap().r, 3.0);
    }

    #[test]
    fn test_clone_isolation() {
        let mut style = SvgStyle::new();
        style.fill = Some("red".to_string());

        let mut el = SvgElement::new(SvgElementKind::Rect(SvgRect::default()));
        el.style = Some(style.clone());

        style.fill = Some("blue".to_string());
        assert_eq!(el.style.as_ref().unwrap().fill.as_deref(), Some("red"));
    }

    #[test]
    fn test_tag_names() {
        let cases: &[(SvgElementKind, &str)] = &[
            (SvgElementKind::Rect(SvgRect::default()), "rect"),
            (SvgElementKind::TextPath(SvgTextPath::default()), "textpath"),
            (SvgElementKind::Link(SvgLink::default()), "a"),
            (SvgElementKind::Group(SvgGroup::default()), "g"),
        ];
        for (kind, expected) in cases {
            assert_eq!(kind.tag_name(), *expected);
        }
    }
}
