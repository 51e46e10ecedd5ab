use std::sync::LazyLock;

use regex::Regex;

/// `M:SS`, `MM:SS` or `H:MM:SS` timestamp, whitespace, a colon-free name, then `:`
static SPEAKER_PREFIX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\d{1,2}:\d{2}(?::\d{2})?\s+[^:]+:").expect("speaker prefix pattern is valid")
});

/// A piece of one physical transcript line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Segment<'a> {
    /// Timestamp + speaker name + colon, e.g. `0:05 Alice:`
    Prefix(&'a str),
    /// Any text between or around prefixes
    Text(&'a str),
}

/// Whether `text` (ignoring surrounding whitespace) begins with a speaker prefix
pub fn is_speaker_prefix(text: &str) -> bool {
    SPEAKER_PREFIX
        .find(text.trim())
        .is_some_and(|m| m.start() == 0)
}

/// Split a line into alternating prefix and text segments, in order.
///
/// Text segments that are empty or whitespace-only are dropped.
pub fn segment_line(line: &str) -> Vec<Segment<'_>> {
    let mut segments = Vec::new();
    let mut last_end = 0;

    for m in SPEAKER_PREFIX.find_iter(line) {
        push_text(&mut segments, &line[last_end..m.start()]);
        segments.push(Segment::Prefix(m.as_str()));
        last_end = m.end();
    }
    push_text(&mut segments, &line[last_end..]);

    segments
}

fn push_text<'a>(segments: &mut Vec<Segment<'a>>, text: &'a str) {
    if !text.trim().is_empty() {
        segments.push(Segment::Text(text));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_timestamp_forms() {
        assert!(is_speaker_prefix("0:05 Alice:"));
        assert!(is_speaker_prefix("12:30 Bob Smith: hello"));
        assert!(is_speaker_prefix("1:02:03 Carol:"));
        assert!(is_speaker_prefix("  01:02:03\tDr. Who: yes"));
    }

    #[test]
    fn test_not_a_prefix() {
        // Timestamp without a name and colon
        assert!(!is_speaker_prefix("0:05 and then nothing"));
        // No whitespace between timestamp and name
        assert!(!is_speaker_prefix("0:05Alice: hi"));
        // Single-digit seconds
        assert!(!is_speaker_prefix("0:5 Alice: hi"));
        // Prefix present but not at the start
        assert!(!is_speaker_prefix("said 0:05 Alice: hi"));
    }

    #[test]
    fn test_segment_two_speakers() {
        let segments = segment_line("0:05 Alice: Hello there 0:10 Bob: Hi Alice");
        assert_eq!(
            segments,
            vec![
                Segment::Prefix("0:05 Alice:"),
                Segment::Text(" Hello there "),
                Segment::Prefix("0:10 Bob:"),
                Segment::Text(" Hi Alice"),
            ]
        );
    }

    #[test]
    fn test_segment_leading_text_and_adjacent_prefixes() {
        let segments = segment_line("intro 0:01 A: 0:02 B: go");
        assert_eq!(
            segments,
            vec![
                Segment::Text("intro "),
                Segment::Prefix("0:01 A:"),
                Segment::Prefix("0:02 B:"),
                Segment::Text(" go"),
            ]
        );
    }

    #[test]
    fn test_segment_without_prefix() {
        assert_eq!(
            segment_line("just some text"),
            vec![Segment::Text("just some text")]
        );
        assert!(segment_line("   ").is_empty());
    }
}
