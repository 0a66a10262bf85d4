use forma_color::ColorParseError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ThemeError {
    #[error(transparent)]
    Toml(#[from] toml::de::Error),

    #[error("invalid color at `{path}`: {source}")]
    InvalidColor {
        path: String,
        #[source]
        source: ColorParseError,
    },
}
