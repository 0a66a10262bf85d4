//! IDNA-style ASCII transliteration
//!
//! Mirrors the label handling of IDNA `ToASCII` without its case folding or
//! validity checks: labels are split on the full-stop characters IDNA
//! recognizes, labels containing non-ASCII become `xn--` + Punycode, and
//! ASCII labels are copied untouched. Text before the first `@` is kept
//! as-is, as in an email address.

use std::convert::Infallible;

use crate::error::KeyError;
use crate::punycode;

const ACE_PREFIX: &str = "xn--";

/// Full stop, ideographic full stop, fullwidth full stop, halfwidth ideographic full stop
const LABEL_SEPARATORS: [char; 4] = ['.', '\u{3002}', '\u{FF0E}', '\u{FF61}'];

/// Transliterate `input` to ASCII.
///
/// A label that cannot be encoded is copied unchanged; sanitizing replaces
/// its non-ASCII characters later.
pub fn to_ascii(input: &str) -> String {
    let result = map_labels(input, |label| {
        Ok::<_, Infallible>(match punycode::encode(label) {
            Ok(encoded) => format!("{ACE_PREFIX}{encoded}"),
            Err(err) => {
                tracing::warn!(label, %err, "leaving label unencoded");
                label.to_string()
            }
        })
    });
    match result {
        Ok(ascii) => ascii,
        Err(never) => match never {},
    }
}

/// Like [`to_ascii`], but fails on labels that cannot be encoded
pub fn try_to_ascii(input: &str) -> Result<String, KeyError> {
    map_labels(input, |label| {
        punycode::encode(label)
            .map(|encoded| format!("{ACE_PREFIX}{encoded}"))
            .map_err(|source| KeyError::Punycode {
                label: label.to_string(),
                source,
            })
    })
}

fn map_labels<E>(
    input: &str,
    mut encode_label: impl FnMut(&str) -> Result<String, E>,
) -> Result<String, E> {
    let mut out = String::with_capacity(input.len());
    let domain = match input.split_once('@') {
        Some((local, domain)) => {
            out.push_str(local);
            out.push('@');
            domain
        }
        None => input,
    };

    for (i, label) in domain.split(LABEL_SEPARATORS).enumerate() {
        if i > 0 {
            out.push('.');
        }
        if label.is_ascii() {
            out.push_str(label);
        } else {
            out.push_str(&encode_label(label)?);
        }
    }
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ascii_passes_through() {
        assert_eq!(to_ascii("UPPER_KEBAB-CASE"), "UPPER_KEBAB-CASE");
        assert_eq!(to_ascii("with%$multiple_spl.)characters"), "with%$multiple_spl.)characters");
        assert_eq!(to_ascii(""), "");
    }

    #[test]
    fn non_ascii_labels_are_encoded() {
        assert_eq!(to_ascii("😃"), "xn--h28h");
        assert_eq!(to_ascii("mañana.com"), "xn--maana-pta.com");
    }

    #[test]
    fn ideographic_full_stop_separates_labels() {
        assert_eq!(to_ascii("a\u{3002}b"), "a.b");
    }

    #[test]
    fn local_part_is_kept() {
        assert_eq!(to_ascii("josé@bücher"), "josé@xn--bcher-kva");
    }

    #[test]
    fn try_variant_agrees() {
        assert_eq!(try_to_ascii("bücher.de").unwrap(), "xn--bcher-kva.de");
    }
}
