//! Forma Theme System
//!
//! Button color tokens for Forma widgets, the built-in light and dark themes,
//! and the helpers that derive widget colors from a user-picked background.
//!
//! # Quick Start
//!
//! ```rust
//! use forma_theme::{custom_hover_color, custom_text_color, get_theme, ButtonVariant, ThemeMode};
//!
//! let theme = get_theme(ThemeMode::Light);
//!
//! // No custom background: fall back to theme defaults
//! assert_eq!(custom_text_color(&theme, None), "#FFFFFF");
//! assert_eq!(custom_hover_color(&theme, None, None), "#00693B");
//!
//! // Custom background: derive from it
//! assert_eq!(
//!     custom_hover_color(&theme, Some(ButtonVariant::Primary), Some("#03b365")),
//!     "#028149"
//! );
//! ```
//!
//! # Tokens
//!
//! Button colors are addressed by intent, then variant, then token:
//!
//! - [`ButtonIntent`]: semantic family (primary, warning, danger, info, secondary)
//! - [`ButtonVariant`]: visual style (primary = solid, secondary = outline,
//!   tertiary = text only)
//! - [`ButtonColorToken`]: background, hover, text or border color
//!
//! Token values are CSS color strings; `"none"` means transparent.
//!
//! # Configuration
//!
//! [`ThemeConfig`] loads overrides from TOML on top of a built-in theme:
//!
//! ```toml
//! mode = "dark"
//!
//! [button.primary.primary]
//! hover_color = "#026B3D"
//! ```

mod config;
mod custom;
mod error;
mod theme;
pub mod themes;
pub mod tokens;

pub use config::{
    ButtonOverrides, CustomOverrides, IntentOverrides, ThemeConfig, VariantOverrides,
};
pub use custom::{
    complementary_grayscale_color, custom_background_color, custom_border_color,
    custom_hover_color, custom_text_color, TRANSPARENT,
};
pub use error::ThemeError;
pub use theme::{get_theme, Theme, ThemeColors, ThemeMode};
pub use tokens::*;
