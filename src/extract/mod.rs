pub mod entities;
pub mod markup;

pub use entities::*;
pub use markup::*;

use tracing::debug;

/// Convert a markup document into normalized plain text
///
/// Steps:
/// 1. Strip tags
/// 2. Decode the fixed entity table
/// 3. Strip tags revealed by decoding (`&lt;b&gt;`)
/// 4. Collapse whitespace runs into single spaces and trim
pub fn extract_text(raw: &str) -> String {
    let untagged = strip_tags(raw);
    let decoded = decode_entities(&untagged);
    let text = collapse_whitespace(&strip_tags(&decoded));

    debug!("Extracted {} chars of text from {} chars of markup", text.len(), raw.len());

    text
}
