use std::path::Path;

use tracing::debug;

use crate::error::PrepError;

/// Read the whole input document as UTF-8 text
pub fn read_document(path: &Path) -> Result<String, PrepError> {
    if !path.exists() {
        return Err(PrepError::NotFound(path.to_path_buf()));
    }

    let content = std::fs::read_to_string(path).map_err(|source| PrepError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    debug!("Read {} bytes from {:?}", content.len(), path);

    Ok(content)
}
