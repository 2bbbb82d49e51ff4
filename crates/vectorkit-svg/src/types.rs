//! Primitive value types: points, unit lengths and orientation values.

use crate::scan::{format_number, number_token};
use std::fmt;

// ==================== Point ====================

/// A coordinate pair. Plain value type, copied wherever it is embedded.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct SvgPoint {
    pub x: f64,
    pub y: f64,
}

impl SvgPoint {
    /// Create a point.
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Parse a `points` attribute into a point list.
///
/// Tokens are whitespace-separated `x,y` pairs. The first token without a
/// comma ends the scan, silently truncating the list; malformed halves
/// coerce to zero.
pub fn parse_points(s: &str) -> Vec<SvgPoint> {
    let mut points = Vec::new();
    for token in s.split_ascii_whitespace() {
        let Some((x_part, y_part)) = token.split_once(',') else {
            break;
        };
        points.push(SvgPoint::new(
            number_token(x_part).0,
            number_token(y_part).0,
        ));
    }
    points
}

/// Render a point list as the `points` attribute value.
pub fn format_points(points: &[SvgPoint]) -> String {
    let mut out = String::new();
    for (i, pt) in points.iter().enumerate() {
        if i > 0 {
            out.push(' ');
        }
        out.push_str(&format_number(pt.x));
        out.push(',');
        out.push_str(&format_number(pt.y));
    }
    out
}

// ==================== Length ====================

/// Unit suffix of a length value.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum LengthUnit {
    /// Bare number, no unit written.
    #[default]
    None,
    Ems,
    Exs,
    Px,
    Cm,
    Mm,
    In,
    Pc,
    Pt,
    Percentage,
}

impl LengthUnit {
    /// The attribute suffix for this unit.
    pub fn suffix(&self) -> &'static str {
        match self {
            LengthUnit::None => "",
            LengthUnit::Ems => "ems",
            LengthUnit::Exs => "exs",
            LengthUnit::Px => "px",
            LengthUnit::Cm => "cm",
            LengthUnit::Mm => "mm",
            LengthUnit::In => "in",
            LengthUnit::Pc => "pc",
            LengthUnit::Pt => "pt",
            LengthUnit::Percentage => "%",
        }
    }

    fn from_suffix(s: &str) -> Self {
        match s {
            "%" => LengthUnit::Percentage,
            "ems" => LengthUnit::Ems,
            "exs" => LengthUnit::Exs,
            "px" => LengthUnit::Px,
            "cm" => LengthUnit::Cm,
            "mm" => LengthUnit::Mm,
            "in" => LengthUnit::In,
            "pc" => LengthUnit::Pc,
            "pt" => LengthUnit::Pt,
            _ => LengthUnit::None,
        }
    }
}

/// A numeric value with a unit suffix, as used by `textLength`,
/// `startOffset` and friends.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct SvgLength {
    pub value: f64,
    pub unit: LengthUnit,
}

impl SvgLength {
    /// Create a length.
    pub fn new(value: f64, unit: LengthUnit) -> Self {
        Self { value, unit }
    }

    /// Parse a length: numeric token, then the entire remaining suffix
    /// matched against the unit table. An unknown suffix means no unit.
    pub fn parse(s: &str) -> Self {
        let (value, consumed) = number_token(s);
        Self {
            value,
            unit: LengthUnit::from_suffix(&s[consumed..]),
        }
    }

    /// Whether a unit suffix was written. Unitless lengths are treated as
    /// unset by the serializer.
    pub fn has_unit(&self) -> bool {
        self.unit != LengthUnit::None
    }
}

impl fmt::Display for SvgLength {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", format_number(self.value), self.unit.suffix())
    }
}

// ==================== Orient ====================

/// Marker orientation: a keyword or an angle in one of four units.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SvgOrient {
    Auto,
    AutoStartReverse,
    Degrees(f64),
    Radians(f64),
    Gradians(f64),
    Turns(f64),
}

impl SvgOrient {
    /// Parse an `orient` attribute value.
    ///
    /// Keyword forms are matched whole; otherwise a numeric token followed
    /// by an angle unit. Anything else degrades to `Auto`.
    pub fn parse(s: &str) -> Self {
        match s {
            "auto" => return SvgOrient::Auto,
            "auto-start-reverse" => return SvgOrient::AutoStartReverse,
            _ => {}
        }
        let (value, consumed) = number_token(s);
        match &s[consumed..] {
            "deg" => SvgOrient::Degrees(value),
            "rad" => SvgOrient::Radians(value),
            "grad" => SvgOrient::Gradians(value),
            "turn" => SvgOrient::Turns(value),
            _ => SvgOrient::Auto,
        }
    }
}

impl fmt::Display for SvgOrient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SvgOrient::Auto => f.write_str("auto"),
            SvgOrient::AutoStartReverse => f.write_str("auto-start-reverse"),
            SvgOrient::Degrees(v) => write!(f, "{}deg", format_number(*v)),
            SvgOrient::Radians(v) => write!(f, "{}rad", format_number(*v)),
            SvgOrient::Gradians(v) => write!(f, "{}grad", format_number(*v)),
            SvgOrient::Turns(v) => write!(f, "{}turn", format_number(*v)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_points() {
        let pts = parse_points("10,20 30,40 50,60");
        assert_eq!(pts.len(), 3);
        assert_eq!(pts[0], SvgPoint::new(10.0, 20.0));
        assert_eq!(pts[2], SvgPoint::new(50.0, 60.0));
    }

    #[test]
    fn test_parse_points_truncates_on_missing_comma() {
        let pts = parse_points("0,0 10,10 20");
        assert_eq!(pts.len(), 2);
        assert_eq!(pts[1], SvgPoint::new(10.0, 10.0));
    }

    #[test]
    fn test_parse_points_first_token_bad() {
        assert!(parse_points("20 0,0").is_empty());
    }

    #[test]
    fn test_points_round_trip() {
        let pts = vec![SvgPoint::new(0.0, 0.5), SvgPoint::new(-3.0, 4.0)];
        let s = format_points(&pts);
        assert_eq!(s, "0,0.5 -3,4");
        assert_eq!(parse_points(&s), pts);
    }

    #[test]
    fn test_length_parse_units() {
        assert_eq!(SvgLength::parse("30px"), SvgLength::new(30.0, LengthUnit::Px));
        assert_eq!(
            SvgLength::parse("50%"),
            SvgLength::new(50.0, LengthUnit::Percentage)
        );
        assert_eq!(
            SvgLength::parse("1.5ems"),
            SvgLength::new(1.5, LengthUnit::Ems)
        );
        assert_eq!(SvgLength::parse("12"), SvgLength::new(12.0, LengthUnit::None));
    }

    #[test]
    fn test_length_unknown_suffix_means_no_unit() {
        assert_eq!(SvgLength::parse("10furlong").unit, LengthUnit::None);
        assert_eq!(SvgLength::parse("10pxx").unit, LengthUnit::None);
    }

    #[test]
    fn test_length_display() {
        assert_eq!(SvgLength::new(30.0, LengthUnit::Px).to_string(), "30px");
        assert_eq!(
            SvgLength::new(12.5, LengthUnit::Percentage).to_string(),
            "12.5%"
        );
        assert_eq!(SvgLength::new(7.0, LengthUnit::None).to_string(), "7");
    }

    #[test]
    fn test_orient_keywords() {
        assert_eq!(SvgOrient::parse("auto"), SvgOrient::Auto);
        assert_eq!(
            SvgOrient::parse("auto-start-reverse"),
            SvgOrient::AutoStartReverse
        );
    }

    #[test]
    fn test_orient_angles() {
        assert_eq!(SvgOrient::parse("45deg"), SvgOrient::Degrees(45.0));
        assert_eq!(SvgOrient::parse("1.5rad"), SvgOrient::Radians(1.5));
        assert_eq!(SvgOrient::parse("100grad"), SvgOrient::Gradians(100.0));
        assert_eq!(SvgOrient::parse("0.25turn"), SvgOrient::Turns(0.25));
    }

    #[test]
    fn test_orient_fallback_is_auto() {
        assert_eq!(SvgOrient::parse("45"), SvgOrient::Auto);
        assert_eq!(SvgOrient::parse("sideways"), SvgOrient::Auto);
    }

    #[test]
    fn test_orient_round_trip() {
        for s in ["auto", "auto-start-reverse", "45deg", "0.25turn"] {
            assert_eq!(SvgOrient::parse(s).to_string(), s);
        }
    }
}
