//! Forma Color Primitives
//!
//! Color values as they appear in widget properties: CSS strings typed by
//! users or stored in themes. This crate parses them, derives related shades
//! and serializes the result back to CSS hex.
//!
//! # Quick Start
//!
//! ```rust
//! use forma_color::Color;
//!
//! let green = Color::parse("#03b365").unwrap();
//! assert_eq!(green.darken(10.0).to_hex_string(), "#028149");
//! assert_eq!(green.lighten(40.0).to_hex_string(), "#85fdc8");
//! assert!(green.is_dark());
//! ```
//!
//! # Model
//!
//! - [`Color`]: RGBA with `r/g/b` in `0.0..=255.0` and alpha in `0.0..=1.0`
//! - [`Hsl`]: hue/saturation/lightness view used by `darken`/`lighten`
//! - [`ColorParseError`]: why a CSS string was rejected
//!
//! Shade adjustments work in HSL space and keep fractional channels until
//! the color is serialized, so chained adjustments do not accumulate
//! rounding error.

mod color;
mod hsl;
mod parse;

pub use color::Color;
pub use hsl::Hsl;
pub use parse::ColorParseError;
