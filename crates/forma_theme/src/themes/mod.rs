//! Built-in Forma themes
//!
//! Both themes share the Forma green brand color. The light theme darkens it
//! on hover and tints outline/text buttons with pale washes; the dark theme
//! brightens on hover and uses deep washes instead.

use crate::theme::{Theme, ThemeColors, ThemeMode};
use crate::tokens::{ButtonIntentColors, ButtonTokens, ButtonVariantColors, CustomButtonColors};

/// Light palette
pub mod light {
    pub const GREEN: &str = "#03B365";
    pub const GREEN_HOVER: &str = "#00693B";
    pub const GREEN_WASH: &str = "#D9FDED";

    pub const AMBER: &str = "#FEB811";
    pub const AMBER_HOVER: &str = "#EFA903";
    pub const AMBER_WASH: &str = "#FFF4D6";

    pub const RED: &str = "#F22B2B";
    pub const RED_HOVER: &str = "#B90707";
    pub const RED_WASH: &str = "#FDE4E4";

    pub const BLUE: &str = "#6698FF";
    pub const BLUE_HOVER: &str = "#1A65FF";
    pub const BLUE_WASH: &str = "#E0EAFF";

    pub const GRAY: &str = "#858282";
    pub const GRAY_HOVER: &str = "#4B4848";
    pub const GRAY_WASH: &str = "#EBEBEB";

    pub const WHITE: &str = "#FFFFFF";
    pub const CHARCOAL: &str = "#333";
}

/// Dark palette
pub mod dark {
    pub const GREEN: &str = "#03B365";
    pub const GREEN_HOVER: &str = "#1BD17E";
    pub const GREEN_WASH: &str = "#0C3B26";

    pub const AMBER: &str = "#FEB811";
    pub const AMBER_HOVER: &str = "#FFCB4D";
    pub const AMBER_WASH: &str = "#3D2E06";

    pub const RED: &str = "#F22B2B";
    pub const RED_HOVER: &str = "#F76464";
    pub const RED_WASH: &str = "#431010";

    pub const BLUE: &str = "#6698FF";
    pub const BLUE_HOVER: &str = "#94B8FF";
    pub const BLUE_WASH: &str = "#15264A";

    pub const GRAY: &str = "#A9A7A7";
    pub const GRAY_HOVER: &str = "#CFCDCD";
    pub const GRAY_WASH: &str = "#2B2A2A";

    pub const WHITE: &str = "#FFFFFF";
    pub const CHARCOAL: &str = "#333";
}

const NONE: &str = "none";

/// Built-in light theme
pub fn light() -> Theme {
    use self::light::*;

    Theme {
        name: "Forma Light".to_string(),
        mode: ThemeMode::Light,
        colors: ThemeColors {
            button: ButtonTokens {
                primary: intent(GREEN, GREEN_HOVER, GREEN_WASH, WHITE),
                warning: intent(AMBER, AMBER_HOVER, AMBER_WASH, WHITE),
                danger: intent(RED, RED_HOVER, RED_WASH, WHITE),
                info: intent(BLUE, BLUE_HOVER, BLUE_WASH, WHITE),
                secondary: intent(GRAY, GRAY_HOVER, GRAY_WASH, WHITE),
                custom: CustomButtonColors {
                    text_on_dark: WHITE.to_string(),
                    text_on_light: CHARCOAL.to_string(),
                },
            },
        },
    }
}

/// Built-in dark theme
pub fn dark() -> Theme {
    use self::dark::*;

    Theme {
        name: "Forma Dark".to_string(),
        mode: ThemeMode::Dark,
        colors: ThemeColors {
            button: ButtonTokens {
                primary: intent(GREEN, GREEN_HOVER, GREEN_WASH, WHITE),
                warning: intent(AMBER, AMBER_HOVER, AMBER_WASH, CHARCOAL),
                danger: intent(RED, RED_HOVER, RED_WASH, WHITE),
                info: intent(BLUE, BLUE_HOVER, BLUE_WASH, WHITE),
                secondary: intent(GRAY, GRAY_HOVER, GRAY_WASH, CHARCOAL),
                custom: CustomButtonColors {
                    text_on_dark: WHITE.to_string(),
                    text_on_light: CHARCOAL.to_string(),
                },
            },
        },
    }
}

/// Solid, outline and text variants of one brand color.
///
/// Outline and text buttons draw in the brand color on a transparent fill
/// and show the wash on hover; only the outline keeps a border.
fn intent(base: &str, hover: &str, wash: &str, on_base: &str) -> ButtonIntentColors {
    ButtonIntentColors {
        primary: ButtonVariantColors::new(base, hover, on_base, base),
        secondary: ButtonVariantColors::new(NONE, wash, base, base),
        tertiary: ButtonVariantColors::new(NONE, wash, base, NONE),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tokens::{ButtonColorToken, ButtonIntent, ButtonVariant};
    use forma_color::Color;

    #[test]
    fn light_primary_defaults() {
        let theme = light();
        let primary = &theme.colors.button.primary;
        assert_eq!(primary.primary.bg_color, "#03B365");
        assert_eq!(primary.primary.hover_color, "#00693B");
        assert_eq!(primary.primary.text_color, "#FFFFFF");
        assert_eq!(primary.secondary.hover_color, "#D9FDED");
        assert_eq!(primary.tertiary.hover_color, "#D9FDED");
    }

    #[test]
    fn every_token_is_a_color_or_none() {
        for theme in [light(), dark()] {
            for intent in ButtonIntent::all() {
                for variant in ButtonVariant::all() {
                    for token in ButtonColorToken::all() {
                        let value = theme.colors.button.get(*intent, *variant, *token);
                        assert!(
                            value == NONE || Color::parse(value).is_ok(),
                            "theme={} intent={intent} variant={variant} token={} value={value}",
                            theme.name,
                            token.id()
                        );
                    }
                }
            }
        }
    }

    #[test]
    fn themes_differ_on_hover() {
        assert_ne!(
            light().colors.button.primary.primary.hover_color,
            dark().colors.button.primary.primary.hover_color
        );
    }
}
