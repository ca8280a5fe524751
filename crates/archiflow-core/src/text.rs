//! Label escaping for the DOT language.

/// Wraps `input` in double quotes, escaping characters that would otherwise
/// terminate or reinterpret the quoted string.
///
/// # Examples
///
/// ```
/// use archiflow_core::text::quote;
///
/// assert_eq!(quote("grpc"), "\"grpc\"");
/// assert_eq!(quote("say \"hi\""), "\"say \\\"hi\\\"\"");
/// ```
pub fn quote(input: &str) -> String {
    let mut quoted = String::with_capacity(input.len() + 2);
    quoted.push('"');
    for ch in input.chars() {
        match ch {
            '\\' => quoted.push_str("\\\\"),
            '"' => quoted.push_str("\\\""),
            '\n' => quoted.push_str("\\n"),
            '\r' => {}
            other => quoted.push(other),
        }
    }
    quoted.push('"');
    quoted
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;

    /// True if every `"` strictly inside the quotes is escaped.
    fn interior_quotes_escaped(quoted: &str) -> bool {
        let inner = &quoted[1..quoted.len() - 1];
        let mut escaped = false;
        for ch in inner.chars() {
            match (ch, escaped) {
                ('"', false) => return false,
                ('\\', false) => escaped = true,
                _ => escaped = false,
            }
        }
        !escaped
    }

    #[test]
    fn test_quote_plain() {
        assert_eq!(quote("HelloWorld"), "\"HelloWorld\"");
        assert_eq!(quote(""), "\"\"");
    }

    #[test]
    fn test_quote_newline() {
        assert_eq!(quote("hello\nworld"), "\"hello\\nworld\"");
    }

    proptest! {
        #[test]
        fn quote_never_leaks_a_bare_quote(input in ".*") {
            let quoted = quote(&input);
            prop_assert!(quoted.starts_with('"'));
            prop_assert!(quoted.ends_with('"'));
            prop_assert!(quoted.len() >= 2);
            prop_assert!(interior_quotes_escaped(&quoted));
        }
    }
}
