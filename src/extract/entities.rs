use std::sync::LazyLock;

use regex::{Captures, Regex};

/// Named character entities decoded by the extractor, with their replacements
pub const ENTITIES: &[(&str, &str)] = &[
    ("&amp;", "&"),
    ("&lt;", "<"),
    ("&gt;", ">"),
    ("&quot;", "\""),
    ("&apos;", "'"),
    ("&nbsp;", " "),
    ("&#39;", "'"),
    ("&hellip;", "..."),
    ("&mdash;", "\u{2014}"),
    ("&ndash;", "\u{2013}"),
    ("&rsquo;", "'"),
    ("&lsquo;", "'"),
    ("&rdquo;", "\""),
    ("&ldquo;", "\""),
];

/// One alternation over every entity code, so a single pass decodes them all
static ENTITY_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    let alternation = ENTITIES
        .iter()
        .map(|(code, _)| regex::escape(code))
        .collect::<Vec<_>>()
        .join("|");
    Regex::new(&alternation).expect("entity alternation is a valid pattern")
});

/// Look up the replacement for a single entity code
pub fn entity_replacement(code: &str) -> Option<&'static str> {
    ENTITIES
        .iter()
        .find(|(candidate, _)| *candidate == code)
        .map(|(_, replacement)| *replacement)
}

/// Decode every known entity in `text`.
///
/// Replacements are never re-scanned, so `&amp;lt;` decodes to `&lt;`.
/// Entities outside the table are left as they are.
pub fn decode_entities(text: &str) -> String {
    ENTITY_PATTERN
        .replace_all(text, |caps: &Captures| {
            let code = &caps[0];
            entity_replacement(code).unwrap_or(code).to_string()
        })
        .into_owned()
}
