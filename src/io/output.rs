use std::ffi::OsString;
use std::io::Write;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::error::PrepError;

/// Output path for extracted text: the input with its extension replaced by `.txt`
pub fn text_output_path(input: &Path) -> PathBuf {
    input.with_extension("txt")
}

/// Output path for a formatted transcript: `<stem>_formatted<.ext>` beside the input
pub fn formatted_output_path(input: &Path) -> PathBuf {
    let mut name = OsString::new();
    if let Some(stem) = input.file_stem() {
        name.push(stem);
    }
    name.push("_formatted");
    if let Some(extension) = input.extension() {
        name.push(".");
        name.push(extension);
    }
    input.with_file_name(name)
}

/// Create (or truncate) `path` and write `content` to it.
///
/// The write is not atomic: a failure part-way may leave a truncated file.
pub fn write_output(path: &Path, content: &str) -> Result<(), PrepError> {
    let to_write_error = |source: std::io::Error| PrepError::Write {
        path: path.to_path_buf(),
        source,
    };

    let mut file = std::fs::File::create(path).map_err(to_write_error)?;
    file.write_all(content.as_bytes()).map_err(to_write_error)?;
    debug!("Wrote {} bytes to {:?}", content.len(), path);

    Ok(())
}
