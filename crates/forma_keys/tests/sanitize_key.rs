use forma_keys::{escape_special_chars, sanitize_key, sanitize_key_with, SanitizeOptions};
use pretty_assertions::assert_eq;

const VALID_INPUTS: &[(&str, &str)] = &[
    ("lowercase", "lowercase"),
    ("__abc__", "__abc__"),
    ("lower_snake_case", "lower_snake_case"),
    ("UPPER_SNAKE_CASE", "UPPER_SNAKE_CASE"),
    ("PascalCase", "PascalCase"),
    ("camelCase", "camelCase"),
    ("lower-kebab-case", "lower_kebab_case"),
    ("UPPER_KEBAB-CASE", "UPPER_KEBAB_CASE"),
    ("Sentencecase", "Sentencecase"),
    ("", "_"),
    ("with space", "with_space"),
    ("with multiple  spaces", "with_multiple__spaces"),
    ("with%special)characters", "with_special_characters"),
    ("with%$multiple_spl.)characters", "with__multiple_spl__characters"),
    ("1startingWithNumber", "_1startingWithNumber"),
];

fn existing() -> SanitizeOptions {
    SanitizeOptions::new().existing_keys([
        "__id",
        "__restricted__",
        "firstName1",
        "_1age",
        "gender",
        "poll123",
        "poll124",
        "poll125",
        "address_",
    ])
}

#[test]
fn sanitizes_without_existing_keys() {
    for (input, expected) in VALID_INPUTS {
        assert_eq!(sanitize_key(input), *expected, "input={input:?}");
    }
}

#[test]
fn sanitizes_with_existing_keys() {
    let options = existing();
    let collisions = [
        ("1startingWithNumber", "_1startingWithNumber"),
        ("firstName", "firstName"),
        ("firstName1", "firstName2"),
        ("1age", "_1age1"),
        ("address&", "address_1"),
        ("%&id", "__id1"),
        ("%&restricted*(", "__restricted__1"),
        ("poll130", "poll130"),
        ("poll124", "poll126"),
        ("हिन्दि", "xn__j2bd4cyac6f"),
        ("😃", "xn__h28h"),
    ];

    for (input, expected) in VALID_INPUTS.iter().copied().chain(collisions) {
        assert_eq!(
            sanitize_key_with(input, &options),
            expected,
            "input={input:?}"
        );
    }
}

#[test]
fn valid_identifiers_are_fixed_points() {
    for (input, _) in VALID_INPUTS {
        let once = sanitize_key(input);
        assert_eq!(sanitize_key(&once), once, "input={input:?}");
    }
    for input in ["😃", "हिन्दि", "mañana.com", "class"] {
        let once = sanitize_key(input);
        assert_eq!(sanitize_key(&once), once, "input={input:?}");
    }
}

#[test]
fn output_is_always_an_identifier() {
    for input in ["", " ", "--", "0", "٣", "a.b.c", "x@y", "🙂🙃", "tab\there"] {
        let key = sanitize_key(input);
        let mut chars = key.chars();
        let first = chars.next().unwrap();
        assert!(first == '_' || first.is_ascii_alphabetic(), "{input:?} -> {key}");
        assert!(
            chars.all(|c| c == '_' || c.is_ascii_alphanumeric()),
            "{input:?} -> {key}"
        );
    }
}

#[test]
fn options_load_from_toml() {
    let options = SanitizeOptions::from_toml_str(
        r#"
        existing_keys = ["email", "email1"]
        reserved_keys = ["data"]
        "#,
    )
    .unwrap();
    assert_eq!(sanitize_key_with("email", &options), "email2");
    assert_eq!(sanitize_key_with("data", &options), "data1");
    assert!(SanitizeOptions::from_toml_str("unknown = 1").is_err());
}

#[test]
fn options_load_from_json() {
    let options: SanitizeOptions =
        serde_json::from_str(r#"{"existing_keys": ["gender"]}"#).unwrap();
    assert_eq!(sanitize_key_with("gender", &options), "gender1");
    assert!(options.reserved_keys.is_empty());
}

#[test]
fn escaping_leaves_plain_text_alone() {
    let text = "a\nb\nc
hello! how are you?
";
    assert_eq!(escape_special_chars(text), "a\nb\nc\nhello! how are you?\n");
}
