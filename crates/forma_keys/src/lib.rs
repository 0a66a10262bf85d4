//! Forma key sanitizing
//!
//! Form fields, table columns and other user-named widget children are
//! addressed by keys in bindings (`{{form.data.first_name}}`), so every key
//! must be a valid identifier and unique among its siblings. This crate turns
//! whatever the user typed into such a key.
//!
//! - [`sanitize_key`] / [`sanitize_key_with`]: the full pipeline
//! - [`to_ascii`]: IDNA-style transliteration of non-ASCII labels
//! - [`punycode`]: the RFC 3492 encoder behind it
//! - [`escape_special_chars`]: protect escapes in stringified JSON
//!
//! ```rust
//! use forma_keys::{sanitize_key, sanitize_key_with, SanitizeOptions};
//!
//! assert_eq!(sanitize_key("lower-kebab-case"), "lower_kebab_case");
//! assert_eq!(sanitize_key("😃"), "xn__h28h");
//!
//! let options = SanitizeOptions::new().existing_keys(["poll123", "poll124", "poll125"]);
//! assert_eq!(sanitize_key_with("poll124", &options), "poll126");
//! ```

mod error;
mod escape;
mod idna;
pub mod punycode;
mod reserved;
mod sanitize;

pub use error::KeyError;
pub use escape::escape_special_chars;
pub use idna::{to_ascii, try_to_ascii};
pub use punycode::PunycodeError;
pub use reserved::{is_reserved, RESERVED_KEYS};
pub use sanitize::{sanitize_key, sanitize_key_with, SanitizeOptions};
