use std::path::PathBuf;

use thiserror::Error;

/// Failures surfaced by the file shell around the text transforms
#[derive(Error, Debug)]
pub enum PrepError {
    #[error("File '{}' not found.", .0.display())]
    NotFound(PathBuf),

    #[error("failed to read {}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to write {}", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl PrepError {
    /// Whether the input path was missing (as opposed to a processing failure)
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound(_))
    }
}
