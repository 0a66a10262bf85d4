//! Button color tokens

use std::fmt::{Display, Formatter};
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Visual style of a button-like widget
#[derive(Clone, Copy, Debug, Default, Hash, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ButtonVariant {
    /// Solid fill
    #[default]
    Primary,
    /// Outline
    Secondary,
    /// Text only
    Tertiary,
}

impl ButtonVariant {
    /// Stable id, as stored in widget properties.
    pub fn id(self) -> &'static str {
        match self {
            Self::Primary => "PRIMARY",
            Self::Secondary => "SECONDARY",
            Self::Tertiary => "TERTIARY",
        }
    }

    /// Lowercase key used for variant tables in theme config files.
    pub fn config_key(self) -> &'static str {
        match self {
            Self::Primary => "primary",
            Self::Secondary => "secondary",
            Self::Tertiary => "tertiary",
        }
    }

    pub fn all() -> &'static [ButtonVariant] {
        const VARIANTS: [ButtonVariant; 3] = [
            ButtonVariant::Primary,
            ButtonVariant::Secondary,
            ButtonVariant::Tertiary,
        ];
        &VARIANTS
    }
}

impl Display for ButtonVariant {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.id())
    }
}

impl FromStr for ButtonVariant {
    type Err = UnknownTokenName;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::all()
            .iter()
            .copied()
            .find(|v| v.id().eq_ignore_ascii_case(s))
            .ok_or_else(|| UnknownTokenName(s.to_string()))
    }
}

/// Semantic color family of a button
#[derive(Clone, Copy, Debug, Default, Hash, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ButtonIntent {
    #[default]
    Primary,
    Warning,
    Danger,
    Info,
    Secondary,
}

impl ButtonIntent {
    pub fn id(self) -> &'static str {
        match self {
            Self::Primary => "primary",
            Self::Warning => "warning",
            Self::Danger => "danger",
            Self::Info => "info",
            Self::Secondary => "secondary",
        }
    }

    pub fn all() -> &'static [ButtonIntent] {
        const INTENTS: [ButtonIntent; 5] = [
            ButtonIntent::Primary,
            ButtonIntent::Warning,
            ButtonIntent::Danger,
            ButtonIntent::Info,
            ButtonIntent::Secondary,
        ];
        &INTENTS
    }
}

impl Display for ButtonIntent {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.id())
    }
}

impl FromStr for ButtonIntent {
    type Err = UnknownTokenName;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::all()
            .iter()
            .copied()
            .find(|i| i.id().eq_ignore_ascii_case(s))
            .ok_or_else(|| UnknownTokenName(s.to_string()))
    }
}

/// Interaction state of a button
#[derive(Clone, Copy, Debug, Default, Hash, Eq, PartialEq)]
pub enum ButtonState {
    #[default]
    Default,
    Hover,
}

/// Color token keys for dynamic access
#[derive(Clone, Copy, Debug, Hash, Eq, PartialEq)]
pub enum ButtonColorToken {
    BgColor,
    HoverColor,
    TextColor,
    BorderColor,
}

impl ButtonColorToken {
    pub fn id(self) -> &'static str {
        match self {
            Self::BgColor => "bg_color",
            Self::HoverColor => "hover_color",
            Self::TextColor => "text_color",
            Self::BorderColor => "border_color",
        }
    }

    pub fn all() -> &'static [ButtonColorToken] {
        const TOKENS: [ButtonColorToken; 4] = [
            ButtonColorToken::BgColor,
            ButtonColorToken::HoverColor,
            ButtonColorToken::TextColor,
            ButtonColorToken::BorderColor,
        ];
        &TOKENS
    }
}

/// Returned when a variant or intent id is not recognized
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("unknown token name `{0}`")]
pub struct UnknownTokenName(pub String);

/// Colors of one variant within an intent
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ButtonVariantColors {
    pub bg_color: String,
    pub hover_color: String,
    pub text_color: String,
    pub border_color: String,
}

impl ButtonVariantColors {
    pub fn new(
        bg_color: impl Into<String>,
        hover_color: impl Into<String>,
        text_color: impl Into<String>,
        border_color: impl Into<String>,
    ) -> Self {
        Self {
            bg_color: bg_color.into(),
            hover_color: hover_color.into(),
            text_color: text_color.into(),
            border_color: border_color.into(),
        }
    }

    /// Get a color by token key
    pub fn get(&self, token: ButtonColorToken) -> &str {
        match token {
            ButtonColorToken::BgColor => &self.bg_color,
            ButtonColorToken::HoverColor => &self.hover_color,
            ButtonColorToken::TextColor => &self.text_color,
            ButtonColorToken::BorderColor => &self.border_color,
        }
    }

    pub fn set(&mut self, token: ButtonColorToken, value: impl Into<String>) {
        let slot = match token {
            ButtonColorToken::BgColor => &mut self.bg_color,
            ButtonColorToken::HoverColor => &mut self.hover_color,
            ButtonColorToken::TextColor => &mut self.text_color,
            ButtonColorToken::BorderColor => &mut self.border_color,
        };
        *slot = value.into();
    }

    /// Fill color for the given interaction state
    pub fn fill(&self, state: ButtonState) -> &str {
        match state {
            ButtonState::Default => &self.bg_color,
            ButtonState::Hover => &self.hover_color,
        }
    }
}

/// Colors of every variant within one intent
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ButtonIntentColors {
    pub primary: ButtonVariantColors,
    pub secondary: ButtonVariantColors,
    pub tertiary: ButtonVariantColors,
}

impl ButtonIntentColors {
    pub fn variant(&self, variant: ButtonVariant) -> &ButtonVariantColors {
        match variant {
            ButtonVariant::Primary => &self.primary,
            ButtonVariant::Secondary => &self.secondary,
            ButtonVariant::Tertiary => &self.tertiary,
        }
    }

    pub fn variant_mut(&mut self, variant: ButtonVariant) -> &mut ButtonVariantColors {
        match variant {
            ButtonVariant::Primary => &mut self.primary,
            ButtonVariant::Secondary => &mut self.secondary,
            ButtonVariant::Tertiary => &mut self.tertiary,
        }
    }
}

/// Text colors used on top of a user-picked background
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CustomButtonColors {
    /// Text on a dark custom background
    pub text_on_dark: String,
    /// Text on a light custom background
    pub text_on_light: String,
}

/// Complete set of button color tokens
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ButtonTokens {
    pub primary: ButtonIntentColors,
    pub warning: ButtonIntentColors,
    pub danger: ButtonIntentColors,
    pub info: ButtonIntentColors,
    pub secondary: ButtonIntentColors,
    pub custom: CustomButtonColors,
}

impl ButtonTokens {
    pub fn intent(&self, intent: ButtonIntent) -> &ButtonIntentColors {
        match intent {
            ButtonIntent::Primary => &self.primary,
            ButtonIntent::Warning => &self.warning,
            ButtonIntent::Danger => &self.danger,
            ButtonIntent::Info => &self.info,
            ButtonIntent::Secondary => &self.secondary,
        }
    }

    pub fn intent_mut(&mut self, intent: ButtonIntent) -> &mut ButtonIntentColors {
        match intent {
            ButtonIntent::Primary => &mut self.primary,
            ButtonIntent::Warning => &mut self.warning,
            ButtonIntent::Danger => &mut self.danger,
            ButtonIntent::Info => &mut self.info,
            ButtonIntent::Secondary => &mut self.secondary,
        }
    }

    /// Get a color by intent, variant and token key
    pub fn get(
        &self,
        intent: ButtonIntent,
        variant: ButtonVariant,
        token: ButtonColorToken,
    ) -> &str {
        self.intent(intent).variant(variant).get(token)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn variant_ids_round_trip() {
        for variant in ButtonVariant::all() {
            assert_eq!(variant.id().parse::<ButtonVariant>(), Ok(*variant));
        }
        assert_eq!("secondary".parse::<ButtonVariant>(), Ok(ButtonVariant::Secondary));
        assert!("ghost".parse::<ButtonVariant>().is_err());
    }

    #[test]
    fn config_keys_are_lowercase_ids() {
        for variant in ButtonVariant::all() {
            assert_eq!(variant.config_key(), variant.id().to_ascii_lowercase());
            assert_eq!(variant.config_key().parse::<ButtonVariant>(), Ok(*variant));
        }
    }

    #[test]
    fn intent_ids_round_trip() {
        for intent in ButtonIntent::all() {
            assert_eq!(intent.id().parse::<ButtonIntent>(), Ok(*intent));
        }
    }

    #[test]
    fn set_then_get() {
        let mut colors = ButtonVariantColors::new("#000", "#111", "#222", "none");
        colors.set(ButtonColorToken::HoverColor, "#abcdef");
        assert_eq!(colors.get(ButtonColorToken::HoverColor), "#abcdef");
        assert_eq!(colors.fill(ButtonState::Hover), "#abcdef");
        assert_eq!(colors.fill(ButtonState::Default), "#000");
        assert_eq!(colors.get(ButtonColorToken::BorderColor), "none");
    }
}
