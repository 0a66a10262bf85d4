use thiserror::Error;

use crate::punycode::PunycodeError;

#[derive(Debug, Error)]
pub enum KeyError {
    #[error("cannot encode label `{label}`: {source}")]
    Punycode {
        label: String,
        #[source]
        source: PunycodeError,
    },

    #[error(transparent)]
    Config(#[from] toml::de::Error),
}
