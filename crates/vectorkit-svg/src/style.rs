//! Presentation style: the `style` attribute model, its declaration
//! grammar and its printer.
//!
//! Unset optional fields are the printer's only signal to omit a
//! declaration; parsing never fails, unknown properties are skipped.

use crate::scan::{format_number, number_token};

// ==================== Keyword enums ====================

/// Fill rule. Only `evenodd` is ever written out.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum FillRule {
    #[default]
    NonZero,
    EvenOdd,
}

/// Stroke line cap. `butt` is the initial value and is not written out.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum LineCap {
    #[default]
    Butt,
    Round,
    Square,
}

impl LineCap {
    fn keyword(&self) -> &'static str {
        match self {
            LineCap::Butt => "butt",
            LineCap::Round => "round",
            LineCap::Square => "square",
        }
    }

    fn from_keyword(s: &str) -> Self {
        match s {
            "round" => LineCap::Round,
            "square" => LineCap::Square,
            _ => LineCap::Butt,
        }
    }
}

/// Stroke line join.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineJoin {
    Arcs,
    Bevel,
    Miter,
    MiterClip,
    Round,
}

impl LineJoin {
    fn keyword(&self) -> &'static str {
        match self {
            LineJoin::Arcs => "arcs",
            LineJoin::Bevel => "bevel",
            LineJoin::Miter => "miter",
            LineJoin::MiterClip => "miter-clip",
            LineJoin::Round => "round",
        }
    }

    fn from_keyword(s: &str) -> Self {
        match s {
            "arcs" => LineJoin::Arcs,
            "bevel" => LineJoin::Bevel,
            "miter-clip" => LineJoin::MiterClip,
            "round" => LineJoin::Round,
            _ => LineJoin::Miter,
        }
    }
}

/// Font weight keywords and the nine numeric weights.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum FontWeight {
    #[default]
    Normal,
    Bolder,
    Bold,
    Lighter,
    W100,
    W200,
    W300,
    W400,
    W500,
    W600,
    W700,
    W800,
    W900,
}

impl FontWeight {
    fn keyword(&self) -> &'static str {
        match self {
            FontWeight::Normal => "normal",
            FontWeight::Bolder => "bolder",
            FontWeight::Bold => "bold",
            FontWeight::Lighter => "lighter",
            FontWeight::W100 => "100",
            FontWeight::W200 => "200",
            FontWeight::W300 => "300",
            FontWeight::W400 => "400",
            FontWeight::W500 => "500",
            FontWeight::W600 => "600",
            FontWeight::W700 => "700",
            FontWeight::W800 => "800",
            FontWeight::W900 => "900",
        }
    }

    fn from_keyword(s: &str) -> Self {
        match s {
            "bolder" => FontWeight::Bolder,
            "bold" => FontWeight::Bold,
            "lighter" => FontWeight::Lighter,
            "100" => FontWeight::W100,
            "200" => FontWeight::W200,
            "300" => FontWeight::W300,
            "400" => FontWeight::W400,
            "500" => FontWeight::W500,
            "600" => FontWeight::W600,
            "700" => FontWeight::W700,
            "800" => FontWeight::W800,
            "900" => FontWeight::W900,
            _ => FontWeight::Normal,
        }
    }
}

/// Font stretch keywords.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum FontStretch {
    #[default]
    Normal,
    UltraCondensed,
    ExtraCondensed,
    Condensed,
    SemiCondensed,
    SemiExpanded,
    Expanded,
    ExtraExpanded,
    UltraExpanded,
}

impl FontStretch {
    fn keyword(&self) -> &'static str {
        match self {
            FontStretch::Normal => "normal",
            FontStretch::UltraCondensed => "ultra-condensed",
            FontStretch::ExtraCondensed => "extra-condensed",
            FontStretch::Condensed => "condensed",
            FontStretch::SemiCondensed => "semi-condensed",
            FontStretch::SemiExpanded => "semi-expanded",
            FontStretch::Expanded => "expanded",
            FontStretch::ExtraExpanded => "extra-expanded",
            FontStretch::UltraExpanded => "ultra-expanded",
        }
    }

    fn from_keyword(s: &str) -> Self {
        match s {
            "ultra-condensed" => FontStretch::UltraCondensed,
            "extra-condensed" => FontStretch::ExtraCondensed,
            "condensed" => FontStretch::Condensed,
            "semi-condensed" => FontStretch::SemiCondensed,
            "semi-expanded" => FontStretch::SemiExpanded,
            "expanded" => FontStretch::Expanded,
            "extra-expanded" => FontStretch::ExtraExpanded,
            "ultra-expanded" => FontStretch::UltraExpanded,
            _ => FontStretch::Normal,
        }
    }
}

/// Font style keywords.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum FontStyle {
    #[default]
    Normal,
    Italic,
    Oblique,
}

impl FontStyle {
    fn keyword(&self) -> &'static str {
        match self {
            FontStyle::Normal => "normal",
            FontStyle::Italic => "italic",
            FontStyle::Oblique => "oblique",
        }
    }

    fn from_keyword(s: &str) -> Self {
        match s {
            "italic" => FontStyle::Italic,
            "oblique" => FontStyle::Oblique,
            _ => FontStyle::Normal,
        }
    }
}

// ==================== Style ====================

/// Presentation properties attachable to any element or the document root.
///
/// Color and font-size strings are stored verbatim; no color parsing or
/// cascade resolution happens here.
#[derive(Debug, Clone, PartialEq)]
pub struct SvgStyle {
    pub fill: Option<String>,
    /// Serialized only when inside [0, 1].
    pub fill_opacity: Option<f64>,
    pub fill_rule: FillRule,
    pub stroke: Option<String>,
    /// 1 is the SVG initial value and is not serialized.
    pub stroke_width: f64,
    /// Serialized only when inside [0, 1].
    pub stroke_opacity: Option<f64>,
    pub stroke_linecap: LineCap,
    pub stroke_dasharray: Option<String>,
    pub stroke_linejoin: Option<LineJoin>,
    /// Surfaces only on the document root, as a `background-color`
    /// style attribute.
    pub background_color: Option<String>,
    pub font_family: Option<String>,
    pub font_weight: Option<FontWeight>,
    pub font_stretch: Option<FontStretch>,
    pub font_style: Option<FontStyle>,
    pub font_size: Option<String>,
}

impl Default for SvgStyle {
    fn default() -> Self {
        Self::new()
    }
}

impl SvgStyle {
    /// Create a style with everything unset.
    pub fn new() -> Self {
        Self {
            fill: None,
            fill_opacity: None,
            fill_rule: FillRule::NonZero,
            stroke: None,
            stroke_width: 1.0,
            stroke_opacity: None,
            stroke_linecap: LineCap::Butt,
            stroke_dasharray: None,
            stroke_linejoin: None,
            background_color: None,
            font_family: None,
            font_weight: None,
            font_stretch: None,
            font_style: None,
            font_size: None,
        }
    }

    /// Parse a `style` attribute value.
    ///
    /// Declarations split on `;`, property and value split on the first
    /// `:` and trimmed. Unknown properties are skipped. Never fails.
    pub fn parse(s: &str) -> Self {
        let mut style = Self::new();
        for declaration in s.split(';') {
            let Some((property, value)) = declaration.split_once(':') else {
                continue;
            };
            let property = property.trim();
            let value = value.trim();
            if property.is_empty() || value.is_empty() {
                continue;
            }
            style.apply(property, value);
        }
        style
    }

    fn apply(&mut self, property: &str, value: &str) {
        match property {
            "fill" => self.fill = Some(value.to_string()),
            "fill-opacity" => self.fill_opacity = Some(number_token(value).0),
            "fill-rule" => {
                self.fill_rule = if value == "evenodd" {
                    FillRule::EvenOdd
                } else {
                    FillRule::NonZero
                };
            }
            "stroke" => self.stroke = Some(value.to_string()),
            "stroke-width" => self.stroke_width = number_token(value).0,
            "stroke-opacity" => self.stroke_opacity = Some(number_token(value).0),
            "stroke-linecap" => self.stroke_linecap = LineCap::from_keyword(value),
            "stroke-dasharray" => self.stroke_dasharray = Some(value.to_string()),
            "stroke-linejoin" => self.stroke_linejoin = Some(LineJoin::from_keyword(value)),
            "background-color" => self.background_color = Some(value.to_string()),
            "font-family" => self.font_family = Some(value.to_string()),
            "font-weight" => self.font_weight = Some(FontWeight::from_keyword(value)),
            "font-stretch" => self.font_stretch = Some(FontStretch::from_keyword(value)),
            "font-style" => self.font_style = Some(FontStyle::from_keyword(value)),
            "font-size" => self.font_size = Some(value.to_string()),
            _ => {}
        }
    }

    /// Render as a `style` attribute value. Unset fields emit nothing;
    /// an all-default style renders as the empty string.
    pub fn to_css(&self) -> String {
        let mut out = String::new();
        if let Some(fill) = &self.fill {
            push_decl(&mut out, "fill", fill);
        }
        if let Some(op) = self.fill_opacity {
            if (0.0..=1.0).contains(&op) {
                push_decl(&mut out, "fill-opacity", &format_number(op));
            }
        }
        if self.fill_rule == FillRule::EvenOdd {
            push_decl(&mut out, "fill-rule", "evenodd");
        }
        if let Some(stroke) = &self.stroke {
            push_decl(&mut out, "stroke", stroke);
        }
        if self.stroke_width != 1.0 {
            push_decl(&mut out, "stroke-width", &format_number(self.stroke_width));
        }
        if let Some(op) = self.stroke_opacity {
            if (0.0..=1.0).contains(&op) {
                push_decl(&mut out, "stroke-opacity", &format_number(op));
            }
        }
        if self.stroke_linecap != LineCap::Butt {
            push_decl(&mut out, "stroke-linecap", self.stroke_linecap.keyword());
        }
        if let Some(dash) = &self.stroke_dasharray {
            push_decl(&mut out, "stroke-dasharray", dash);
        }
        if let Some(join) = self.stroke_linejoin {
            push_decl(&mut out, "stroke-linejoin", join.keyword());
        }
        if let Some(family) = &self.font_family {
            push_decl(&mut out, "font-family", family);
        }
        if let Some(weight) = self.font_weight {
            push_decl(&mut out, "font-weight", weight.keyword());
        }
        if let Some(stretch) = self.font_stretch {
            push_decl(&mut out, "font-stretch", stretch.keyword());
        }
        if let Some(font_style) = self.font_style {
            push_decl(&mut out, "font-style", font_style.keyword());
        }
        if let Some(size) = &self.font_size {
            push_decl(&mut out, "font-size", size);
        }
        out
    }
}

fn push_decl(out: &mut String, property: &str, value: &str) {
    out.push_str(property);
    out.push(':');
    out.push_str(value);
    out.push(';');
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_style_emits_nothing() {
        assert_eq!(SvgStyle::new().to_css(), "");
    }

    #[test]
    fn test_omission_rules() {
        let mut style = SvgStyle::new();
        // Unset opacity and initial stroke width stay silent.
        assert!(!style.to_css().contains("fill-opacity"));
        assert!(!style.to_css().contains("stroke-width"));

        style.fill_opacity = Some(0.5);
        assert!(style.to_css().contains("fill-opacity:0.5;"));

        style.stroke_width = 2.0;
        assert!(style.to_css().contains("stroke-width:2;"));
    }

    #[test]
    fn test_opacity_out_of_range_is_unset() {
        let mut style = SvgStyle::new();
        style.fill_opacity = Some(1.5);
        style.stroke_opacity = Some(-1.0);
        assert_eq!(style.to_css(), "");
    }

    #[test]
    fn test_parse_basic_declarations() {
        let style = SvgStyle::parse("fill: red; stroke :blue;stroke-width: 3");
        assert_eq!(style.fill.as_deref(), Some("red"));
        assert_eq!(style.stroke.as_deref(), Some("blue"));
        assert_eq!(style.stroke_width, 3.0);
    }

    #[test]
    fn test_parse_puts_stroke_values_in_stroke_fields() {
        let style = SvgStyle::parse("stroke-width:4;stroke-opacity:0.25");
        assert_eq!(style.stroke_width, 4.0);
        assert_eq!(style.stroke_opacity, Some(0.25));
        assert_eq!(style.fill_opacity, None);
    }

    #[test]
    fn test_parse_keyword_tables() {
        let style = SvgStyle::parse(
            "fill-rule:evenodd;stroke-linecap:square;stroke-linejoin:miter-clip;\
             font-weight:700;font-stretch:semi-expanded;font-style:oblique",
        );
        assert_eq!(style.fill_rule, FillRule::EvenOdd);
        assert_eq!(style.stroke_linecap, LineCap::Square);
        assert_eq!(style.stroke_linejoin, Some(LineJoin::MiterClip));
        assert_eq!(style.font_weight, Some(FontWeight::W700));
        assert_eq!(style.font_stretch, Some(FontStretch::SemiExpanded));
        assert_eq!(style.font_style, Some(FontStyle::Oblique));
    }

    #[test]
    fn test_parse_keyword_fallbacks() {
        let style = SvgStyle::parse("stroke-linejoin:zigzag;font-weight:heavy");
        assert_eq!(style.stroke_linejoin, Some(LineJoin::Miter));
        assert_eq!(style.font_weight, Some(FontWeight::Normal));
    }

    #[test]
    fn test_unknown_property_does_not_stop_scan() {
        let style = SvgStyle::parse("sparkle:lots;fill:green");
        assert_eq!(style.fill.as_deref(), Some("green"));
    }

    #[test]
    fn test_background_color_not_in_css_output() {
        let mut style = SvgStyle::new();
        style.background_color = Some("white".to_string());
        assert_eq!(style.to_css(), "");
        // But it parses into the field for the document root to use.
        let parsed = SvgStyle::parse("background-color: white");
        assert_eq!(parsed.background_color.as_deref(), Some("white"));
    }

    #[test]
    fn test_css_round_trip() {
        let mut style = SvgStyle::new();
        style.fill = Some("#ff0000".to_string());
        style.fill_opacity = Some(0.5);
        style.stroke = Some("black".to_string());
        style.stroke_width = 2.0;
        style.stroke_linejoin = Some(LineJoin::Round);
        style.font_weight = Some(FontWeight::Bold);
        assert_eq!(SvgStyle::parse(&style.to_css()), style);
    }
}
