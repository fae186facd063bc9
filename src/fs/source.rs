//! Loading the file to rewrite.

use crate::error::{RenameError, Result};
use std::fs;
use std::path::Path;

/// Reads `path` fully and decodes it as UTF-8.
///
/// Missing files become [`RenameError::FileNotFound`], unreadable ones
/// [`RenameError::PermissionDenied`], and undecodable bytes
/// [`RenameError::Encoding`].
pub fn read_source(path: &Path) -> Result<String> {
    log::debug!("Reading: {}", path.display());

    let bytes = fs::read(path).map_err(|e| RenameError::from_io(path, e))?;
    let len = bytes.len();

    let text = String::from_utf8(bytes).map_err(|source| RenameError::Encoding {
        path: path.to_path_buf(),
        source,
    })?;

    log::debug!("Read {} bytes from {}", len, path.display());
    Ok(text)
}
