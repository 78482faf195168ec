//! File-name sanitization for user-supplied record names.

/// Replace characters that are reserved on common filesystems with `_`.
/// The record's real name lives inside the JSON, so this mapping does not
/// need to be reversible, only stable.
pub fn sanitize(name: &str) -> String {
    name.chars()
        .map(|c| match c {
            '/' | '\\' | '?' | '%' | '*' | ':' | '|' | '"' | '<' | '>' => '_',
            other => other,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reserved_characters_replaced() {
        assert_eq!(sanitize("My/Setting: Redux?"), "My_Setting_ Redux_");
        assert_eq!(sanitize(r#"a\b|c"d"#), "a_b_c_d");
    }

    #[test]
    fn plain_names_unchanged() {
        assert_eq!(sanitize("Kara of the Marsh"), "Kara of the Marsh");
    }

    #[test]
    fn stable_for_repeated_calls() {
        assert_eq!(sanitize("x:y"), sanitize("x:y"));
    }
}
