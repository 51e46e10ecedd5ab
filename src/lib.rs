pub mod cli;
pub mod error;
pub mod extract;
pub mod io;
pub mod speakers;

pub use cli::{EXTRACT_TEXT, FORMAT_SPEAKERS, Tool, execute, run_tool, setup_logging};
pub use error::PrepError;
pub use extract::{decode_entities, extract_text, strip_tags};
pub use io::{formatted_output_path, read_document, text_output_path, write_output};
pub use speakers::{Segment, format_speakers, format_turns, is_speaker_prefix, segment_line};
