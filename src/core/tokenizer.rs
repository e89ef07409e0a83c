/// Splits a raw input line on every single space.
///
/// Runs of spaces are not collapsed: `"a  b"` yields `["a", "", "b"]` and a
/// trailing space yields a trailing empty token. An empty line yields `None`.
pub fn tokenize(line: &str) -> Option<Vec<String>> {
    if line.is_empty() {
        return None;
    }
    Some(line.split(' ').map(String::from).collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_line() {
        assert_eq!(tokenize(""), None);
    }

    #[test]
    fn test_simple_command() {
        assert_eq!(
            tokenize("git status"),
            Some(vec!["git".to_string(), "status".to_string()])
        );
    }

    #[test]
    fn test_consecutive_spaces_keep_empty_tokens() {
        assert_eq!(
            tokenize("SETSHELLNAME  box"),
            Some(vec![
                "SETSHELLNAME".to_string(),
                String::new(),
                "box".to_string()
            ])
        );
    }

    #[test]
    fn test_trailing_and_whitespace_only() {
        assert_eq!(
            tokenize("ls "),
            Some(vec!["ls".to_string(), String::new()])
        );
        assert_eq!(tokenize(" "), Some(vec![String::new(), String::new()]));
        assert_eq!(tokenize("\t"), Some(vec!["\t".to_string()]));
    }
}
