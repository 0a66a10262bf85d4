//! CSS color string parsing
//!
//! Hex and functional notations are tokenized with `nom`; named colors are a
//! table lookup. Parse failures are reported as [`ColorParseError`].

use nom::branch::alt;
use nom::bytes::complete::{tag_no_case, take_while1};
use nom::character::complete::{char, multispace0, multispace1, one_of};
use nom::combinator::{all_consuming, map_opt, opt, success, value};
use nom::multi::separated_list1;
use nom::number::complete::double;
use nom::sequence::{delimited, pair, preceded, terminated};
use nom::IResult;
use thiserror::Error;

use crate::color::Color;
use crate::hsl::Hsl;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ColorParseError {
    #[error("empty color string")]
    Empty,

    #[error("invalid hex color `{0}` (expected 3, 4, 6 or 8 hex digits)")]
    InvalidHex(String),

    #[error("invalid color function `{0}`")]
    InvalidFunction(String),

    #[error("unknown color name `{0}`")]
    UnknownName(String),
}

/// CSS named colors, sorted by name
const NAMED_COLORS: &[(&str, u32)] = &[
    ("aliceblue", 0xF0F8FF),
    ("antiquewhite", 0xFAEBD7),
    ("aqua", 0x00FFFF),
    ("aquamarine", 0x7FFFD4),
    ("azure", 0xF0FFFF),
    ("beige", 0xF5F5DC),
    ("bisque", 0xFFE4C4),
    ("black", 0x000000),
    ("blanchedalmond", 0xFFEBCD),
    ("blue", 0x0000FF),
    ("blueviolet", 0x8A2BE2),
    ("brown", 0xA52A2A),
    ("burlywood", 0xDEB887),
    ("cadetblue", 0x5F9EA0),
    ("chartreuse", 0x7FFF00),
    ("chocolate", 0xD2691E),
    ("coral", 0xFF7F50),
    ("cornflowerblue", 0x6495ED),
    ("cornsilk", 0xFFF8DC),
    ("crimson", 0xDC143C),
    ("cyan", 0x00FFFF),
    ("darkblue", 0x00008B),
    ("darkcyan", 0x008B8B),
    ("darkgoldenrod", 0xB8860B),
    ("darkgray", 0xA9A9A9),
    ("darkgreen", 0x006400),
    ("darkgrey", 0xA9A9A9),
    ("darkkhaki", 0xBDB76B),
    ("darkmagenta", 0x8B008B),
    ("darkolivegreen", 0x556B2F),
    ("darkorange", 0xFF8C00),
    ("darkorchid", 0x9932CC),
    ("darkred", 0x8B0000),
    ("darksalmon", 0xE9967A),
    ("darkseagreen", 0x8FBC8F),
    ("darkslateblue", 0x483D8B),
    ("darkslategray", 0x2F4F4F),
    ("darkslategrey", 0x2F4F4F),
    ("darkturquoise", 0x00CED1),
    ("darkviolet", 0x9400D3),
    ("deeppink", 0xFF1493),
    ("deepskyblue", 0x00BFFF),
    ("dimgray", 0x696969),
    ("dimgrey", 0x696969),
    ("dodgerblue", 0x1E90FF),
    ("firebrick", 0xB22222),
    ("floralwhite", 0xFFFAF0),
    ("forestgreen", 0x228B22),
    ("fuchsia", 0xFF00FF),
    ("gainsboro", 0xDCDCDC),
    ("ghostwhite", 0xF8F8FF),
    ("gold", 0xFFD700),
    ("goldenrod", 0xDAA520),
    ("gray", 0x808080),
    ("green", 0x008000),
    ("greenyellow", 0xADFF2F),
    ("grey", 0x808080),
    ("honeydew", 0xF0FFF0),
    ("hotpink", 0xFF69B4),
    ("indianred", 0xCD5C5C),
    ("indigo", 0x4B0082),
    ("ivory", 0xFFFFF0),
    ("khaki", 0xF0E68C),
    ("lavender", 0xE6E6FA),
    ("lavenderblush", 0xFFF0F5),
    ("lawngreen", 0x7CFC00),
    ("lemonchiffon", 0xFFFACD),
    ("lightblue", 0xADD8E6),
    ("lightcoral", 0xF08080),
    ("lightcyan", 0xE0FFFF),
    ("lightgoldenrodyellow", 0xFAFAD2),
    ("lightgray", 0xD3D3D3),
    ("lightgreen", 0x90EE90),
    ("lightgrey", 0xD3D3D3),
    ("lightpink", 0xFFB6C1),
    ("lightsalmon", 0xFFA07A),
    ("lightseagreen", 0x20B2AA),
    ("lightskyblue", 0x87CEFA),
    ("lightslategray", 0x778899),
    ("lightslategrey", 0x778899),
    ("lightsteelblue", 0xB0C4DE),
    ("lightyellow", 0xFFFFE0),
    ("lime", 0x00FF00),
    ("limegreen", 0x32CD32),
    ("linen", 0xFAF0E6),
    ("magenta", 0xFF00FF),
    ("maroon", 0x800000),
    ("mediumaquamarine", 0x66CDAA),
    ("mediumblue", 0x0000CD),
    ("mediumorchid", 0xBA55D3),
    ("mediumpurple", 0x9370DB),
    ("mediumseagreen", 0x3CB371),
    ("mediumslateblue", 0x7B68EE),
    ("mediumspringgreen", 0x00FA9A),
    ("mediumturquoise", 0x48D1CC),
    ("mediumvioletred", 0xC71585),
    ("midnightblue", 0x191970),
    ("mintcream", 0xF5FFFA),
    ("mistyrose", 0xFFE4E1),
    ("moccasin", 0xFFE4B5),
    ("navajowhite", 0xFFDEAD),
    ("navy", 0x000080),
    ("oldlace", 0xFDF5E6),
    ("olive", 0x808000),
    ("olivedrab", 0x6B8E23),
    ("orange", 0xFFA500),
    ("orangered", 0xFF4500),
    ("orchid", 0xDA70D6),
    ("palegoldenrod", 0xEEE8AA),
    ("palegreen", 0x98FB98),
    ("paleturquoise", 0xAFEEEE),
    ("palevioletred", 0xDB7093),
    ("papayawhip", 0xFFEFD5),
    ("peachpuff", 0xFFDAB9),
    ("peru", 0xCD853F),
    ("pink", 0xFFC0CB),
    ("plum", 0xDDA0DD),
    ("powderblue", 0xB0E0E6),
    ("purple", 0x800080),
    ("rebeccapurple", 0x663399),
    ("red", 0xFF0000),
    ("rosybrown", 0xBC8F8F),
    ("royalblue", 0x4169E1),
    ("saddlebrown", 0x8B4513),
    ("salmon", 0xFA8072),
    ("sandybrown", 0xF4A460),
    ("seagreen", 0x2E8B57),
    ("seashell", 0xFFF5EE),
    ("sienna", 0xA0522D),
    ("silver", 0xC0C0C0),
    ("skyblue", 0x87CEEB),
    ("slateblue", 0x6A5ACD),
    ("slategray", 0x708090),
    ("slategrey", 0x708090),
    ("snow", 0xFFFAFA),
    ("springgreen", 0x00FF7F),
    ("steelblue", 0x4682B4),
    ("tan", 0xD2B48C),
    ("teal", 0x008080),
    ("thistle", 0xD8BFD8),
    ("tomato", 0xFF6347),
    ("turquoise", 0x40E0D0),
    ("violet", 0xEE82EE),
    ("wheat", 0xF5DEB3),
    ("white", 0xFFFFFF),
    ("whitesmoke", 0xF5F5F5),
    ("yellow", 0xFFFF00),
    ("yellowgreen", 0x9ACD32),
];

pub(crate) fn parse_css_color(input: &str) -> Result<Color, ColorParseError> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Err(ColorParseError::Empty);
    }

    if trimmed.eq_ignore_ascii_case("transparent") {
        return Ok(Color::TRANSPARENT);
    }
    if let Some(color) = named_color(trimmed) {
        return Ok(color);
    }
    if let Ok((_, color)) = all_consuming(hex_color)(trimmed) {
        return Ok(color);
    }
    if let Ok((_, (function, args))) = all_consuming(color_function)(trimmed) {
        return function
            .to_color(&args)
            .ok_or_else(|| ColorParseError::InvalidFunction(trimmed.to_string()));
    }

    if trimmed.starts_with('#') || trimmed.chars().all(|c| c.is_ascii_hexdigit()) {
        Err(ColorParseError::InvalidHex(trimmed.to_string()))
    } else if function_open(trimmed).is_ok() {
        Err(ColorParseError::InvalidFunction(trimmed.to_string()))
    } else {
        Err(ColorParseError::UnknownName(trimmed.to_string()))
    }
}

fn named_color(name: &str) -> Option<Color> {
    let name = name.to_ascii_lowercase();
    NAMED_COLORS
        .binary_search_by(|(candidate, _)| (*candidate).cmp(name.as_str()))
        .ok()
        .map(|index| Color::from_hex(NAMED_COLORS[index].1))
}

/// `#rgb`, `#rgba`, `#rrggbb` or `#rrggbbaa`; the `#` is optional
fn hex_color(input: &str) -> IResult<&str, Color> {
    map_opt(
        preceded(opt(char('#')), take_while1(|c: char| c.is_ascii_hexdigit())),
        color_from_hex_digits,
    )(input)
}

fn color_from_hex_digits(digits: &str) -> Option<Color> {
    let nibble = |i: usize| u8::from_str_radix(&digits[i..=i], 16).ok().map(|n| n * 17);
    let byte = |i: usize| u8::from_str_radix(&digits[i..i + 2], 16).ok();

    match digits.len() {
        3 => Some(Color::from_rgba8(nibble(0)?, nibble(1)?, nibble(2)?, 255)),
        4 => Some(Color::from_rgba8(nibble(0)?, nibble(1)?, nibble(2)?, nibble(3)?)),
        6 => Some(Color::from_rgba8(byte(0)?, byte(2)?, byte(4)?, 255)),
        8 => Some(Color::from_rgba8(byte(0)?, byte(2)?, byte(4)?, byte(6)?)),
        _ => None,
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum ColorFunction {
    Rgb,
    Hsl,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Unit {
    Number,
    Percent,
    Degrees,
}

/// One numeric argument of a color function
#[derive(Clone, Copy, Debug, PartialEq)]
struct Argument {
    value: f64,
    unit: Unit,
}

fn function_name(input: &str) -> IResult<&str, ColorFunction> {
    alt((
        value(ColorFunction::Rgb, alt((tag_no_case("rgba"), tag_no_case("rgb")))),
        value(ColorFunction::Hsl, alt((tag_no_case("hsla"), tag_no_case("hsl")))),
    ))(input)
}

fn function_open(input: &str) -> IResult<&str, ColorFunction> {
    terminated(function_name, pair(multispace0, char('(')))(input)
}

fn argument(input: &str) -> IResult<&str, Argument> {
    let (input, number) = double(input)?;
    let (input, unit) = alt((
        value(Unit::Percent, char('%')),
        value(Unit::Degrees, tag_no_case("deg")),
        success(Unit::Number),
    ))(input)?;
    Ok((
        input,
        Argument {
            value: number,
            unit,
        },
    ))
}

/// Legacy commas, CSS4 spaces, or the `/` before alpha
fn separator(input: &str) -> IResult<&str, ()> {
    alt((
        value((), delimited(multispace0, one_of(",/"), multispace0)),
        value((), multispace1),
    ))(input)
}

/// `rgb(...)`, `rgba(...)`, `hsl(...)` or `hsla(...)` with its arguments
fn color_function(input: &str) -> IResult<&str, (ColorFunction, Vec<Argument>)> {
    pair(
        function_open,
        terminated(
            delimited(multispace0, separated_list1(separator, argument), multispace0),
            char(')'),
        ),
    )(input)
}

impl ColorFunction {
    /// Both spellings accept three channels and an optional alpha.
    fn to_color(self, args: &[Argument]) -> Option<Color> {
        let ([x, y, z], a) = match *args {
            [x, y, z] => ([x, y, z], 1.0),
            [x, y, z, a] => ([x, y, z], a.alpha()?),
            _ => return None,
        };
        match self {
            Self::Rgb => Some(Color::rgba(x.channel()?, y.channel()?, z.channel()?, a)),
            Self::Hsl => Some(Color::from_hsl(Hsl {
                h: x.hue()?,
                s: y.fraction()?,
                l: z.fraction()?,
                a,
            })),
        }
    }
}

impl Argument {
    fn channel(self) -> Option<f64> {
        let value = match self.unit {
            Unit::Number => self.value,
            Unit::Percent => self.value * 255.0 / 100.0,
            Unit::Degrees => return None,
        };
        clamped(value, 255.0)
    }

    fn alpha(self) -> Option<f64> {
        let value = match self.unit {
            Unit::Number => self.value,
            Unit::Percent => self.value / 100.0,
            Unit::Degrees => return None,
        };
        clamped(value, 1.0)
    }

    fn hue(self) -> Option<f64> {
        match self.unit {
            Unit::Number | Unit::Degrees if self.value.is_finite() => {
                Some(self.value.rem_euclid(360.0))
            }
            _ => None,
        }
    }

    // Saturation and lightness; bare numbers are read as percentages.
    fn fraction(self) -> Option<f64> {
        match self.unit {
            Unit::Number | Unit::Percent => clamped(self.value / 100.0, 1.0),
            Unit::Degrees => None,
        }
    }
}

fn clamped(value: f64, max: f64) -> Option<f64> {
    value.is_finite().then(|| value.clamp(0.0, max))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hex_forms() {
        assert_eq!(parse_css_color("#fff"), Ok(Color::WHITE));
        assert_eq!(parse_css_color("FFFFFF"), Ok(Color::WHITE));
        assert_eq!(parse_css_color(" #03B365 "), Ok(Color::from_hex(0x03B365)));
        assert_eq!(
            parse_css_color("#03b36580").map(|c| c.to_rgba8()),
            Ok([3, 179, 101, 128])
        );
        assert_eq!(
            parse_css_color("#0008").map(|c| c.to_rgba8()),
            Ok([0, 0, 0, 136])
        );
    }

    #[test]
    fn bad_hex_is_rejected() {
        assert!(matches!(
            parse_css_color("#12345"),
            Err(ColorParseError::InvalidHex(_))
        ));
        assert!(matches!(
            parse_css_color("#zzz"),
            Err(ColorParseError::InvalidHex(_))
        ));
        assert!(matches!(
            parse_css_color("#fff0000ff"),
            Err(ColorParseError::InvalidHex(_))
        ));
    }

    #[test]
    fn rgb_functions() {
        assert_eq!(
            parse_css_color("rgb(3, 179, 101)"),
            Ok(Color::from_hex(0x03B365))
        );
        assert_eq!(
            parse_css_color("RGBA(255, 255, 255, 0.5)"),
            Ok(Color::WHITE.with_alpha(0.5))
        );
        assert_eq!(
            parse_css_color("rgb(100% 0% 0%)"),
            Ok(Color::from_hex(0xFF0000))
        );
        assert_eq!(
            parse_css_color("rgb( 0 0 255 / 50% )"),
            Ok(Color::rgba(0.0, 0.0, 255.0, 0.5))
        );
        assert!(matches!(
            parse_css_color("rgb(1, 2)"),
            Err(ColorParseError::InvalidFunction(_))
        ));
        assert!(matches!(
            parse_css_color("rgb(1, 2, 3"),
            Err(ColorParseError::InvalidFunction(_))
        ));
    }

    #[test]
    fn hsl_functions() {
        assert_eq!(parse_css_color("hsl(0, 0%, 100%)"), Ok(Color::WHITE));
        assert_eq!(
            parse_css_color("hsl(120deg 100% 25%)").map(|c| c.to_rgba8()),
            Ok([0, 128, 0, 255])
        );
        assert_eq!(
            parse_css_color("hsla(240, 100%, 50%, 0.25)").map(|c| c.to_rgba8()),
            Ok([0, 0, 255, 64])
        );
        assert!(matches!(
            parse_css_color("hsl(10%, 50%, 50%)"),
            Err(ColorParseError::InvalidFunction(_))
        ));
    }

    #[test]
    fn names_and_keywords() {
        assert_eq!(parse_css_color("White"), Ok(Color::WHITE));
        assert_eq!(parse_css_color("lightblue"), Ok(Color::from_hex(0xADD8E6)));
        assert_eq!(
            parse_css_color("RebeccaPurple"),
            Ok(Color::from_hex(0x663399))
        );
        assert_eq!(parse_css_color("transparent"), Ok(Color::TRANSPARENT));
        assert_eq!(parse_css_color(""), Err(ColorParseError::Empty));
        assert_eq!(
            parse_css_color("none"),
            Err(ColorParseError::UnknownName("none".to_string()))
        );
    }

    #[test]
    fn named_colors_are_sorted() {
        assert_eq!(NAMED_COLORS.len(), 148);
        assert!(NAMED_COLORS.windows(2).all(|pair| pair[0].0 < pair[1].0));
    }
}
