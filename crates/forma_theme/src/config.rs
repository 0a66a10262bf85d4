//! TOML theme configuration
//!
//! A config picks a built-in theme by mode and overrides individual button
//! tokens. Unset tokens keep the built-in value.

use forma_color::Color;
use serde::Deserialize;

use crate::custom::TRANSPARENT;
use crate::error::ThemeError;
use crate::theme::{get_theme, Theme, ThemeMode};
use crate::tokens::{ButtonColorToken, ButtonIntent, ButtonVariant, ButtonVariantColors};

#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ThemeConfig {
    pub name: Option<String>,
    pub mode: ThemeMode,
    pub button: ButtonOverrides,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ButtonOverrides {
    pub primary: IntentOverrides,
    pub warning: IntentOverrides,
    pub danger: IntentOverrides,
    pub info: IntentOverrides,
    pub secondary: IntentOverrides,
    pub custom: CustomOverrides,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct IntentOverrides {
    pub primary: VariantOverrides,
    pub secondary: VariantOverrides,
    pub tertiary: VariantOverrides,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct VariantOverrides {
    pub bg_color: Option<String>,
    pub hover_color: Option<String>,
    pub text_color: Option<String>,
    pub border_color: Option<String>,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CustomOverrides {
    pub text_on_dark: Option<String>,
    pub text_on_light: Option<String>,
}

impl ThemeConfig {
    pub fn from_toml_str(src: &str) -> Result<Self, ThemeError> {
        Ok(toml::from_str(src)?)
    }

    /// Apply the overrides to the built-in theme for `mode`
    pub fn build(&self) -> Result<Theme, ThemeError> {
        let mut theme = get_theme(self.mode);
        if let Some(name) = &self.name {
            theme.name = name.clone();
        }

        let button = &mut theme.colors.button;
        for &intent in ButtonIntent::all() {
            for &variant in ButtonVariant::all() {
                let overrides = self.button.intent(intent).variant(variant);
                let colors = button.intent_mut(intent).variant_mut(variant);
                let prefix = format!("button.{intent}.{}", variant.config_key());
                overrides.apply(colors, &prefix)?;
            }
        }

        let custom = &self.button.custom;
        if let Some(value) = &custom.text_on_dark {
            button.custom.text_on_dark = validated("button.custom.text_on_dark", value)?;
        }
        if let Some(value) = &custom.text_on_light {
            button.custom.text_on_light = validated("button.custom.text_on_light", value)?;
        }

        tracing::debug!(name = %theme.name, mode = %theme.mode, "built theme from config");
        Ok(theme)
    }
}

impl ButtonOverrides {
    pub fn intent(&self, intent: ButtonIntent) -> &IntentOverrides {
        match intent {
            ButtonIntent::Primary => &self.primary,
            ButtonIntent::Warning => &self.warning,
            ButtonIntent::Danger => &self.danger,
            ButtonIntent::Info => &self.info,
            ButtonIntent::Secondary => &self.secondary,
        }
    }
}

impl IntentOverrides {
    pub fn variant(&self, variant: ButtonVariant) -> &VariantOverrides {
        match variant {
            ButtonVariant::Primary => &self.primary,
            ButtonVariant::Secondary => &self.secondary,
            ButtonVariant::Tertiary => &self.tertiary,
        }
    }
}

impl VariantOverrides {
    pub fn get(&self, token: ButtonColorToken) -> Option<&str> {
        match token {
            ButtonColorToken::BgColor => self.bg_color.as_deref(),
            ButtonColorToken::HoverColor => self.hover_color.as_deref(),
            ButtonColorToken::TextColor => self.text_color.as_deref(),
            ButtonColorToken::BorderColor => self.border_color.as_deref(),
        }
    }

    fn apply(&self, colors: &mut ButtonVariantColors, prefix: &str) -> Result<(), ThemeError> {
        for &token in ButtonColorToken::all() {
            if let Some(value) = self.get(token) {
                let path = format!("{prefix}.{}", token.id());
                colors.set(token, validated(&path, value)?);
            }
        }
        Ok(())
    }
}

fn validated(path: &str, value: &str) -> Result<String, ThemeError> {
    if value.trim().eq_ignore_ascii_case(TRANSPARENT) {
        return Ok(TRANSPARENT.to_string());
    }
    Color::parse(value).map_err(|source| ThemeError::InvalidColor {
        path: path.to_string(),
        source,
    })?;
    Ok(value.trim().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_config_is_the_light_theme() {
        let config = ThemeConfig::from_toml_str("").unwrap();
        assert_eq!(config, ThemeConfig::default());
        assert_eq!(config.build().unwrap(), get_theme(ThemeMode::Light));
    }

    #[test]
    fn none_is_accepted_as_transparent() {
        assert_eq!(validated("x", " None ").unwrap(), "none");
    }

    #[test]
    fn invalid_override_reports_its_path() {
        let config = ThemeConfig::from_toml_str(
            r##"
            [button.danger.tertiary]
            hover_color = "#ggg"
            "##,
        )
        .unwrap();
        let err = config.build().unwrap_err();
        let ThemeError::InvalidColor { path, .. } = &err else {
            panic!("unexpected error: {err}");
        };
        assert_eq!(path, "button.danger.tertiary.hover_color");
    }
}
