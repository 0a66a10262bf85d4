//! Colors for buttons with a user-picked background
//!
//! Widgets let users override the background of a button. The remaining
//! colors (text, border, hover fill) are derived here so the button stays
//! legible. Missing or empty backgrounds fall back to theme defaults; these
//! helpers never fail.

use forma_color::Color;

use crate::theme::Theme;
use crate::tokens::{ButtonState, ButtonVariant};

/// CSS value for a transparent fill or border
pub const TRANSPARENT: &str = "none";

/// HSL lightness percent removed from a solid background on hover
const SOLID_HOVER_DARKEN: f64 = 10.0;

/// HSL lightness percent added to an outline/text tint on hover
const TINT_HOVER_LIGHTEN: f64 = 40.0;

/// Brightness above which the complementary grayscale is black (YIQ scale)
const GRAYSCALE_THRESHOLD: f64 = 125.0;

fn custom_background(background_color: Option<&str>) -> Option<&str> {
    background_color.filter(|c| !c.trim().is_empty())
}

/// Text color that stays readable on `background_color`.
///
/// Without a background this is the theme's primary button text color.
pub fn custom_text_color(theme: &Theme, background_color: Option<&str>) -> String {
    let custom = &theme.colors.button.custom;
    let Some(background) = custom_background(background_color) else {
        return theme.colors.button.primary.primary.text_color.clone();
    };

    if Color::parse_lossy(background).is_dark() {
        custom.text_on_dark.clone()
    } else {
        custom.text_on_light.clone()
    }
}

/// Fill color; only solid (primary) buttons are filled.
pub fn custom_background_color(
    variant: Option<ButtonVariant>,
    background_color: Option<&str>,
) -> String {
    match (variant, custom_background(background_color)) {
        (Some(ButtonVariant::Primary), Some(background)) => background.to_string(),
        _ => TRANSPARENT.to_string(),
    }
}

/// Border color; only outline (secondary) buttons draw one.
pub fn custom_border_color(
    variant: Option<ButtonVariant>,
    background_color: Option<&str>,
) -> String {
    match (variant, custom_background(background_color)) {
        (Some(ButtonVariant::Secondary), Some(background)) => background.to_string(),
        _ => TRANSPARENT.to_string(),
    }
}

/// Hover fill color.
///
/// Solid buttons darken their background. Outline and text buttons have a
/// transparent fill, so they hover with a light tint of the background
/// instead. The derived color keeps the background's alpha. Without a
/// background the theme's hover color for the variant is used; a missing
/// variant counts as primary.
pub fn custom_hover_color(
    theme: &Theme,
    variant: Option<ButtonVariant>,
    background_color: Option<&str>,
) -> String {
    let variant = variant.unwrap_or_default();
    let Some(background) = custom_background(background_color) else {
        return theme
            .colors
            .button
            .primary
            .variant(variant)
            .fill(ButtonState::Hover)
            .to_string();
    };

    let color = Color::parse_lossy(background);
    let hover = match variant {
        ButtonVariant::Primary => color.darken(SOLID_HOVER_DARKEN),
        ButtonVariant::Secondary | ButtonVariant::Tertiary => color.lighten(TINT_HOVER_LIGHTEN),
    };
    tracing::trace!(%variant, background, hover = %hover, "derived custom hover color");
    hover.to_css_string()
}

/// `"black"` or `"white"`, whichever contrasts with `color`
pub fn complementary_grayscale_color(color: &str) -> &'static str {
    let brightness = Color::parse_lossy(color).brightness().round();
    if brightness > GRAYSCALE_THRESHOLD {
        "black"
    } else {
        "white"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::theme::{get_theme, ThemeMode};

    #[test]
    fn blank_background_counts_as_missing() {
        let theme = get_theme(ThemeMode::Light);
        assert_eq!(custom_text_color(&theme, Some("   ")), "#FFFFFF");
        assert_eq!(
            custom_background_color(Some(ButtonVariant::Primary), Some("")),
            TRANSPARENT
        );
        assert_eq!(custom_hover_color(&theme, None, Some("")), "#00693B");
    }

    #[test]
    fn primary_without_background_is_transparent() {
        assert_eq!(
            custom_background_color(Some(ButtonVariant::Primary), None),
            TRANSPARENT
        );
    }

    #[test]
    fn unparsable_background_is_treated_as_black() {
        let theme = get_theme(ThemeMode::Light);
        assert_eq!(custom_text_color(&theme, Some("chartreuse-ish")), "#FFFFFF");
        assert_eq!(
            custom_hover_color(&theme, Some(ButtonVariant::Primary), Some("???")),
            "#000000"
        );
        assert_eq!(
            custom_hover_color(&theme, Some(ButtonVariant::Tertiary), Some("???")),
            "#666666"
        );
    }

    #[test]
    fn grayscale_complement() {
        assert_eq!(complementary_grayscale_color("#fff"), "black");
        assert_eq!(complementary_grayscale_color("#000000"), "white");
        assert_eq!(complementary_grayscale_color("#FFC13D"), "black");
        assert_eq!(complementary_grayscale_color("#3366FF"), "white");
    }
}
