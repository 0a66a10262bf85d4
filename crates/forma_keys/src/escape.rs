/// Double every backslash so escape sequences in stringified JSON (`\n`,
/// `\t`, `\"`, ...) survive being parsed a second time. Raw control
/// characters, such as real newlines, are left alone.
pub fn escape_special_chars(input: &str) -> String {
    input.replace('\\', "\\\\")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn real_newlines_are_untouched() {
        let text = "a\nb\nc
hello! how are you?
";
        assert_eq!(escape_special_chars(text), "a\nb\nc\nhello! how are you?\n");
    }

    #[test]
    fn escape_sequences_are_doubled() {
        assert_eq!(escape_special_chars(r"line\nbreak"), r"line\\nbreak");
        assert_eq!(escape_special_chars(r#"{"a":"\t\r\f\b"}"#), r#"{"a":"\\t\\r\\f\\b"}"#);
        assert_eq!(escape_special_chars(r"\\"), r"\\\\");
    }
}
