use tracing::debug;

use super::prefix::{Segment, segment_line};

/// Text accumulated for the turn currently being built
#[derive(Debug, Default)]
struct TurnBuffer {
    text: String,
}

impl TurnBuffer {
    /// Start a new turn with `prefix`, handing back the previous one if it had content
    fn start(&mut self, prefix: &str) -> Option<String> {
        let previous = self.take();
        self.text.push_str(prefix);
        previous
    }

    fn append(&mut self, text: &str) {
        self.text.push(' ');
        self.text.push_str(text.trim());
    }

    fn take(&mut self) -> Option<String> {
        let turn = std::mem::take(&mut self.text);
        let trimmed = turn.trim();
        (!trimmed.is_empty()).then(|| trimmed.to_string())
    }
}

/// Regroup transcript text into one entry per speaker turn
///
/// Each physical line is handled on its own:
/// 1. Blank lines are skipped
/// 2. Every speaker prefix on the line starts a new turn
/// 3. Text before the first prefix, or on a line with no prefix at all,
///    is kept as its own entry rather than merged into a neighbour
pub fn format_turns(text: &str) -> Vec<String> {
    let mut turns = Vec::new();
    let mut physical_lines = 0;
    let mut kept_lines = 0;

    for line in text.lines() {
        physical_lines += 1;
        if line.trim().is_empty() {
            continue;
        }
        kept_lines += 1;

        let mut buffer = TurnBuffer::default();
        for segment in segment_line(line) {
            match segment {
                Segment::Prefix(prefix) => turns.extend(buffer.start(prefix)),
                Segment::Text(body) => buffer.append(body),
            }
        }
        turns.extend(buffer.take());
    }

    debug!(
        "Formatted {} turns from {} lines ({} blank lines skipped)",
        turns.len(),
        kept_lines,
        physical_lines - kept_lines
    );

    turns
}

/// Regroup transcript text so each speaker turn sits on exactly one line
pub fn format_speakers(text: &str) -> String {
    format_turns(text).join("\n")
}
