//! Color type and shade utilities

use std::fmt::{Display, Formatter};
use std::str::FromStr;

use crate::hsl::Hsl;
use crate::parse::{parse_css_color, ColorParseError};

/// Brightness below which a color counts as dark (YIQ scale, 0-255).
const DARK_THRESHOLD: f64 = 128.0;

/// RGBA color with `r/g/b` in `0.0..=255.0` and alpha in `0.0..=1.0`
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Color {
    pub r: f64,
    pub g: f64,
    pub b: f64,
    pub a: f64,
}

impl Color {
    pub const WHITE: Color = Color::rgb(255.0, 255.0, 255.0);
    pub const BLACK: Color = Color::rgb(0.0, 0.0, 0.0);
    pub const TRANSPARENT: Color = Color::rgba(0.0, 0.0, 0.0, 0.0);

    pub const fn rgb(r: f64, g: f64, b: f64) -> Self {
        Self { r, g, b, a: 1.0 }
    }

    pub const fn rgba(r: f64, g: f64, b: f64, a: f64) -> Self {
        Self { r, g, b, a }
    }

    /// Create from u8 components (0-255)
    pub fn from_rgba8(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self {
            r: f64::from(r),
            g: f64::from(g),
            b: f64::from(b),
            a: f64::from(a) / 255.0,
        }
    }

    /// Create from hex value (0xRRGGBB)
    pub fn from_hex(hex: u32) -> Self {
        Self::from_rgba8(
            ((hex >> 16) & 0xFF) as u8,
            ((hex >> 8) & 0xFF) as u8,
            (hex & 0xFF) as u8,
            255,
        )
    }

    /// Parse a CSS color string (hex, `rgb()`/`rgba()`, `hsl()`/`hsla()`, or a named color)
    pub fn parse(input: &str) -> Result<Self, ColorParseError> {
        parse_css_color(input)
    }

    /// Parse a CSS color string, falling back to black when it is invalid.
    ///
    /// Widget properties are free-form user input, so callers that must
    /// always produce a color use this instead of [`Color::parse`].
    pub fn parse_lossy(input: &str) -> Self {
        match parse_css_color(input) {
            Ok(color) => color,
            Err(err) => {
                tracing::debug!(input, %err, "unparsable color, using black");
                Self::BLACK
            }
        }
    }

    /// Set alpha and return new color
    pub fn with_alpha(self, alpha: f64) -> Self {
        Self {
            a: alpha.clamp(0.0, 1.0),
            ..self
        }
    }

    /// Perceived brightness (YIQ), 0 for black up to 255 for white
    pub fn brightness(&self) -> f64 {
        (self.r * 299.0 + self.g * 587.0 + self.b * 114.0) / 1000.0
    }

    pub fn is_dark(&self) -> bool {
        self.brightness() < DARK_THRESHOLD
    }

    pub fn is_light(&self) -> bool {
        !self.is_dark()
    }

    pub fn to_hsl(&self) -> Hsl {
        Hsl::from_rgb(self.r, self.g, self.b, self.a)
    }

    pub fn from_hsl(hsl: Hsl) -> Self {
        let (r, g, b) = hsl.to_rgb();
        Self::rgba(r, g, b, hsl.a)
    }

    /// Darken by `amount` percent of HSL lightness
    pub fn darken(self, amount: f64) -> Self {
        let mut hsl = self.to_hsl();
        hsl.l = (hsl.l - amount / 100.0).clamp(0.0, 1.0);
        Self::from_hsl(hsl)
    }

    /// Lighten by `amount` percent of HSL lightness
    pub fn lighten(self, amount: f64) -> Self {
        let mut hsl = self.to_hsl();
        hsl.l = (hsl.l + amount / 100.0).clamp(0.0, 1.0);
        Self::from_hsl(hsl)
    }

    /// Drop all saturation, keeping lightness
    pub fn greyscale(self) -> Self {
        let mut hsl = self.to_hsl();
        hsl.s = 0.0;
        Self::from_hsl(hsl)
    }

    /// Convert to u8 array [r, g, b, a], rounding each channel
    pub fn to_rgba8(&self) -> [u8; 4] {
        [
            round_channel(self.r),
            round_channel(self.g),
            round_channel(self.b),
            round_channel(self.a * 255.0),
        ]
    }

    /// Lowercase `#rrggbb` (alpha is dropped)
    pub fn to_hex_string(&self) -> String {
        let [r, g, b, _] = self.to_rgba8();
        format!("#{r:02x}{g:02x}{b:02x}")
    }

    /// CSS value that keeps alpha: `#rrggbb` when opaque, `rgba(r, g, b, a)`
    /// when translucent and `transparent` when fully clear.
    ///
    /// Alpha is rounded to two decimals first.
    pub fn to_css_string(&self) -> String {
        let alpha = (self.a.clamp(0.0, 1.0) * 100.0).round() / 100.0;
        if alpha <= 0.0 {
            return "transparent".to_string();
        }
        if alpha >= 1.0 {
            return self.to_hex_string();
        }
        let [r, g, b, _] = self.to_rgba8();
        format!("rgba({r}, {g}, {b}, {alpha})")
    }
}

fn round_channel(value: f64) -> u8 {
    value.clamp(0.0, 255.0).round() as u8
}

impl Default for Color {
    fn default() -> Self {
        Self::BLACK
    }
}

impl FromStr for Color {
    type Err = ColorParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl Display for Color {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.to_hex_string())
    }
}
