//! Geometric transforms: the `transform` attribute model, its function-list
//! grammar and its printer.
//!
//! A transform list keeps the textual order of the attribute; SVG applies
//! entries left to right (post-multiplication), so order is meaning.

use crate::scan::{format_number, Scanner};
use std::fmt;
use tracing::debug;

// ==================== Payloads ====================

/// `matrix(a,b,c,d,e,f)` coefficients, column-major 2x3.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct SvgMatrix {
    pub a: f64,
    pub b: f64,
    pub c: f64,
    pub d: f64,
    pub e: f64,
    pub f: f64,
}

impl SvgMatrix {
    pub fn new(a: f64, b: f64, c: f64, d: f64, e: f64, f: f64) -> Self {
        Self { a, b, c, d, e, f }
    }
}

/// `translate(x,y)` offsets.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct SvgTranslate {
    pub x: f64,
    pub y: f64,
}

impl SvgTranslate {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// `scale(x,y)` factors.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct SvgScale {
    pub x: f64,
    pub y: f64,
}

impl SvgScale {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// `rotate(a,x,y)`: angle in degrees around an optional center.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct SvgRotate {
    pub a: f64,
    pub x: f64,
    pub y: f64,
}

impl SvgRotate {
    pub fn new(a: f64, x: f64, y: f64) -> Self {
        Self { a, x, y }
    }
}

// ==================== Transform ====================

/// One transform function call. Exactly one payload is active.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SvgTransform {
    Matrix(SvgMatrix),
    Translate(SvgTranslate),
    Scale(SvgScale),
    Rotate(SvgRotate),
    SkewX(f64),
    SkewY(f64),
}

impl SvgTransform {
    /// Matrix payload, if that is the active variant.
    pub fn as_matrix(&self) -> Option<&SvgMatrix> {
        match self {
            SvgTransform::Matrix(m) => Some(m),
            _ => None,
        }
    }

    pub fn as_matrix_mut(&mut self) -> Option<&mut SvgMatrix> {
        match self {
            SvgTransform::Matrix(m) => Some(m),
            _ => None,
        }
    }

    /// Translate payload, if that is the active variant.
    pub fn as_translate(&self) -> Option<&SvgTranslate> {
        match self {
            SvgTransform::Translate(t) => Some(t),
            _ => None,
        }
    }

    pub fn as_translate_mut(&mut self) -> Option<&mut SvgTranslate> {
        match self {
            SvgTransform::Translate(t) => Some(t),
            _ => None,
        }
    }

    /// Scale payload, if that is the active variant.
    pub fn as_scale(&self) -> Option<&SvgScale> {
        match self {
            SvgTransform::Scale(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_scale_mut(&mut self) -> Option<&mut SvgScale> {
        match self {
            SvgTransform::Scale(s) => Some(s),
            _ => None,
        }
    }

    /// Rotate payload, if that is the active variant.
    pub fn as_rotate(&self) -> Option<&SvgRotate> {
        match self {
            SvgTransform::Rotate(r) => Some(r),
            _ => None,
        }
    }

    pub fn as_rotate_mut(&mut self) -> Option<&mut SvgRotate> {
        match self {
            SvgTransform::Rotate(r) => Some(r),
            _ => None,
        }
    }

    /// Skew-X angle, if that is the active variant.
    pub fn as_skew_x(&self) -> Option<f64> {
        match self {
            SvgTransform::SkewX(a) => Some(*a),
            _ => None,
        }
    }

    /// Skew-Y angle, if that is the active variant.
    pub fn as_skew_y(&self) -> Option<f64> {
        match self {
            SvgTransform::SkewY(a) => Some(*a),
            _ => None,
        }
    }
}

impl fmt::Display for SvgTransform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SvgTransform::Matrix(m) => write!(
                f,
                "matrix({},{},{},{},{},{})",
                format_number(m.a),
                format_number(m.b),
                format_number(m.c),
                format_number(m.d),
                format_number(m.e),
                format_number(m.f),
            ),
            SvgTransform::Translate(t) => {
                write!(f, "translate({},{})", format_number(t.x), format_number(t.y))
            }
            SvgTransform::Scale(s) => {
                write!(f, "scale({},{})", format_number(s.x), format_number(s.y))
            }
            SvgTransform::Rotate(r) => write!(
                f,
                "rotate({},{},{})",
                format_number(r.a),
                format_number(r.x),
                format_number(r.y),
            ),
            SvgTransform::SkewX(a) => write!(f, "skewX({})", format_number(*a)),
            SvgTransform::SkewY(a) => write!(f, "skewY({})", format_number(*a)),
        }
    }
}

// ==================== List grammar ====================

/// Parse a `transform` attribute into its function list.
///
/// Any syntax error — unknown keyword, missing paren, junk between
/// functions — discards the entire list, not just the failing entry.
pub fn parse_transform_list(s: &str) -> Vec<SvgTransform> {
    let mut scanner = Scanner::new(s);
    let mut list = Vec::new();
    loop {
        scanner.skip_whitespace();
        if scanner.is_empty() {
            return list;
        }
        match parse_function(&mut scanner) {
            Some(transform) => list.push(transform),
            None => {
                debug!(attribute = %s, "malformed transform list discarded");
                return Vec::new();
            }
        }
    }
}

/// Render a transform list as the `transform` attribute value.
pub fn format_transform_list(transforms: &[SvgTransform]) -> String {
    let mut out = String::new();
    for (i, t) in transforms.iter().enumerate() {
        if i > 0 {
            out.push(' ');
        }
        out.push_str(&t.to_string());
    }
    out
}

fn parse_function(scanner: &mut Scanner) -> Option<SvgTransform> {
    let name = scanner.keyword();
    let max_args = match name {
        "matrix" => 6,
        "translate" | "scale" => 2,
        "rotate" => 3,
        "skewX" | "skewY" => 1,
        _ => return None,
    };

    scanner.skip_whitespace();
    if !scanner.eat(b'(') {
        return None;
    }

    // Missing trailing arguments default to zero, matching the printers
    // which always write every slot.
    let mut args = [0.0f64; 6];
    let mut count = 0;
    loop {
        scanner.skip_argument_separators();
        if scanner.eat(b')') {
            break;
        }
        if count == max_args {
            return None;
        }
        args[count] = scanner.number()?;
        count += 1;
    }
    if count == 0 {
        return None;
    }

    Some(match name {
        "matrix" => SvgTransform::Matrix(SvgMatrix::new(
            args[0], args[1], args[2], args[3], args[4], args[5],
        )),
        "translate" => SvgTransform::Translate(SvgTranslate::new(args[0], args[1])),
        "scale" => SvgTransform::Scale(SvgScale::new(args[0], args[1])),
        "rotate" => SvgTransform::Rotate(SvgRotate::new(args[0], args[1], args[2])),
        "skewX" => SvgTransform::SkewX(args[0]),
        _ => SvgTransform::SkewY(args[0]),
    })
}
