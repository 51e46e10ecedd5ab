use std::sync::LazyLock;

use regex::Regex;

/// A `<`, one or more non-`>` characters (newlines included), then `>`
static TAG_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"<[^>]+>").expect("tag pattern is valid"));

/// Remove every markup tag from `text`
pub fn strip_tags(text: &str) -> String {
    TAG_PATTERN.replace_all(text, "").into_owned()
}

/// Collapse each run of whitespace into one ASCII space and trim both ends
pub fn collapse_whitespace(text: &str) -> String {
    let mut collapsed = String::with_capacity(text.len());
    for word in text.split_whitespace() {
        if !collapsed.is_empty() {
            collapsed.push(' ');
        }
        collapsed.push_str(word);
    }
    collapsed
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strip_tags() {
        assert_eq!(strip_tags("<p>Hello <b>world</b></p>"), "Hello world");
        assert_eq!(strip_tags(r#"<a href="x.html">link</a>"#), "link");
    }

    #[test]
    fn test_strip_tags_spanning_lines() {
        assert_eq!(strip_tags("before<div\n class=\"x\">after"), "beforeafter");
    }

    #[test]
    fn test_empty_angle_brackets_are_not_tags() {
        assert_eq!(strip_tags("a <> b"), "a <> b");
        assert_eq!(strip_tags("3 < 4"), "3 < 4");
    }

    #[test]
    fn test_collapse_whitespace() {
        assert_eq!(collapse_whitespace("  a \n\n b\t\tc  "), "a b c");
        assert_eq!(collapse_whitespace("a\u{00a0}\u{00a0}b"), "a b");
        assert_eq!(collapse_whitespace(" \n\t "), "");
    }
}
