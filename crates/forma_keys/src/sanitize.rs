//! Key sanitizing and deduplication

use rustc_hash::FxHashSet;
use serde::Deserialize;

use crate::error::KeyError;
use crate::idna::to_ascii;
use crate::reserved::is_reserved;

/// Keys a sanitized key must not collide with
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SanitizeOptions {
    /// Keys already in use by siblings
    pub existing_keys: FxHashSet<String>,
    /// Extra reserved words on top of [`RESERVED_KEYS`](crate::RESERVED_KEYS)
    pub reserved_keys: FxHashSet<String>,
}

impl SanitizeOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn existing_keys<I, S>(mut self, keys: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.existing_keys.extend(keys.into_iter().map(Into::into));
        self
    }

    pub fn reserved_keys<I, S>(mut self, keys: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.reserved_keys.extend(keys.into_iter().map(Into::into));
        self
    }

    /// Record a key as used, e.g. after generating it
    pub fn insert_existing(&mut self, key: impl Into<String>) {
        self.existing_keys.insert(key.into());
    }

    pub fn from_toml_str(src: &str) -> Result<Self, KeyError> {
        Ok(toml::from_str(src)?)
    }

    pub fn is_taken(&self, key: &str) -> bool {
        is_reserved(key) || self.reserved_keys.contains(key) || self.existing_keys.contains(key)
    }
}

/// Sanitize `input` into an identifier that avoids reserved words
pub fn sanitize_key(input: &str) -> String {
    sanitize_key_with(input, &SanitizeOptions::default())
}

/// Sanitize `input` into an identifier that avoids reserved words and
/// `options`.
///
/// Non-ASCII text is transliterated to Punycode, every character outside
/// `[A-Za-z0-9_]` becomes `_`, and a leading digit gets a `_` prefix. A
/// taken key gets a numeric suffix, or its existing trailing number is
/// incremented, until it is free.
pub fn sanitize_key_with(input: &str, options: &SanitizeOptions) -> String {
    let candidate = identifier_from(&to_ascii(input));
    if !options.is_taken(&candidate) {
        return candidate;
    }

    let (stem, start) = split_numeric_suffix(&candidate);
    let mut n = u128::from(start);
    loop {
        n += 1;
        let next = format!("{stem}{n}");
        if !options.is_taken(&next) {
            tracing::trace!(input, taken = %candidate, key = %next, "deduplicated key");
            return next;
        }
    }
}

fn identifier_from(ascii: &str) -> String {
    let mut key: String = ascii
        .chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() || c == '_' {
                c
            } else {
                '_'
            }
        })
        .collect();

    if key.starts_with(|c: char| c.is_ascii_digit()) {
        key.insert(0, '_');
    }
    if key.is_empty() {
        key.push('_');
    }
    key
}

/// Split `poll124` into (`poll`, 124). Keys without a trailing number, or
/// with one too large for `u64`, are all stem.
fn split_numeric_suffix(key: &str) -> (&str, u64) {
    let stem = key.trim_end_matches(|c: char| c.is_ascii_digit());
    match key[stem.len()..].parse::<u64>() {
        Ok(n) => (stem, n),
        Err(_) => (key, 0),
    }
}
