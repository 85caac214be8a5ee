/// What the user asked for on the command line
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParsedArgs {
    /// Starting directory override from `--dir`
    pub dir: Option<String>,

    /// File to print without the file prompt
    pub file_name: Option<String>,

    /// `--change`: ignore the remembered directory
    pub change_dir: bool,
}

impl ParsedArgs {
    /// Scan raw tokens left to right. Never fails: anything unrecognized is ignored.
    pub fn parse<S: AsRef<str>>(tokens: &[S]) -> Self {
        let mut parsed = Self::default();
        let mut iter = tokens.iter().map(AsRef::as_ref);

        while let Some(token) = iter.next() {
            match token {
                "--dir" => {
                    // takes the next token verbatim, even if it looks like a flag
                    if let Some(value) = iter.next() {
                        parsed.dir = Some(value.to_string());
                    }
                }
                "--change" => parsed.change_dir = true,
                _ if token.is_empty() || token.starts_with("--") => {}
                _ if parsed.file_name.is_none() => parsed.file_name = Some(token.to_string()),
                _ => {}
            }
        }

        parsed
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_empty() {
        let parsed = ParsedArgs::parse::<&str>(&[]);
        assert_eq!(parsed, ParsedArgs::default());
    }

    #[test]
    fn test_parse_all_options() {
        let parsed = ParsedArgs::parse(&["notes", "--dir", "/docs", "--change"]);
        assert_eq!(parsed.file_name.as_deref(), Some("notes"));
        assert_eq!(parsed.dir.as_deref(), Some("/docs"));
        assert!(parsed.change_dir);
    }

    #[test]
    fn test_dir_without_value() {
        let parsed = ParsedArgs::parse(&["--dir"]);
        assert_eq!(parsed.dir, None);
        assert_eq!(parsed.file_name, None);
    }

    #[test]
    fn test_dir_consumes_flag_like_value() {
        let parsed = ParsedArgs::parse(&["--dir", "--change"]);
        assert_eq!(parsed.dir.as_deref(), Some("--change"));
        assert!(!parsed.change_dir);
    }

    #[test]
    fn test_first_positional_wins() {
        let parsed = ParsedArgs::parse(&["first", "second", "third"]);
        assert_eq!(parsed.file_name.as_deref(), Some("first"));
    }

    #[test]
    fn test_dir_value_is_not_file_name() {
        let parsed = ParsedArgs::parse(&["--dir", "docs", "readme"]);
        assert_eq!(parsed.dir.as_deref(), Some("docs"));
        assert_eq!(parsed.file_name.as_deref(), Some("readme"));
    }

    #[test]
    fn test_unknown_flags_ignored() {
        let parsed = ParsedArgs::parse(&["--verbose", "--", "todo"]);
        assert_eq!(parsed.file_name.as_deref(), Some("todo"));
        assert!(!parsed.change_dir);
    }

    #[test]
    fn test_change_detected_anywhere() {
        let inputs: [&[&str]; 5] = [
            &["--change"],
            &["a", "--change"],
            &["--change", "a", "b"],
            &["--dir", "x", "--change"],
            &["-", "", "--change", "--dir"],
        ];
        for tokens in inputs {
            assert!(ParsedArgs::parse(tokens).change_dir, "{:?}", tokens);
        }

        let without: [&[&str]; 3] = [&[], &["--changes"], &["change", "-change"]];
        for tokens in without {
            assert!(!ParsedArgs::parse(tokens).change_dir, "{:?}", tokens);
        }
    }

    #[test]
    fn test_empty_token_is_not_a_file_name() {
        let parsed = ParsedArgs::parse(&["", "todo"]);
        assert_eq!(parsed.file_name.as_deref(), Some("todo"));
    }

    #[test]
    fn test_single_dash_is_positional() {
        let parsed = ParsedArgs::parse(&["-x"]);
        assert_eq!(parsed.file_name.as_deref(), Some("-x"));
    }
}
