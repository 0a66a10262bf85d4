//! Theme type and built-in theme selection

use std::fmt::{Display, Formatter};
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::themes;
use crate::tokens::{ButtonTokens, UnknownTokenName};

/// Light or dark appearance
#[derive(Clone, Copy, Debug, Default, Hash, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ThemeMode {
    #[default]
    Light,
    Dark,
}

impl ThemeMode {
    /// Stable mode id for config/serialization.
    pub fn id(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    pub fn all() -> &'static [ThemeMode] {
        const MODES: [ThemeMode; 2] = [ThemeMode::Light, ThemeMode::Dark];
        &MODES
    }
}

impl Display for ThemeMode {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.id())
    }
}

impl FromStr for ThemeMode {
    type Err = UnknownTokenName;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::all()
            .iter()
            .copied()
            .find(|m| m.id().eq_ignore_ascii_case(s))
            .ok_or_else(|| UnknownTokenName(s.to_string()))
    }
}

/// Color groups of a theme
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ThemeColors {
    pub button: ButtonTokens,
}

/// A complete theme. Widgets only read from it.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Theme {
    pub name: String,
    pub mode: ThemeMode,
    pub colors: ThemeColors,
}

/// Built-in theme for the given mode
pub fn get_theme(mode: ThemeMode) -> Theme {
    match mode {
        ThemeMode::Light => themes::light(),
        ThemeMode::Dark => themes::dark(),
    }
}
