//! Error types for prefix-rename.
//!
//! All operations return `Result<T>` which aliases `Result<T, RenameError>`.

use std::path::PathBuf;
use thiserror::Error;

/// Errors from rename operations.
#[derive(Debug, Error)]
pub enum RenameError {
    /// Source file does not exist.
    #[error("File not found: {0}")]
    FileNotFound(PathBuf),

    /// Source file is not valid UTF-8.
    #[error("File is not valid UTF-8: {path}")]
    Encoding {
        path: PathBuf,
        #[source]
        source: std::string::FromUtf8Error,
    },

    /// Source file cannot be read or written.
    #[error("Permission denied: {0}")]
    PermissionDenied(PathBuf),

    /// Invalid target word.
    #[error("Invalid word '{0}': {1}")]
    InvalidWord(String, String),

    /// Invalid prefix.
    #[error("Invalid prefix '{0}': {1}")]
    InvalidPrefix(String, String),

    /// File system operation failed.
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// Regex compilation failed (indicates bug).
    #[error("Regex error: {0}")]
    Regex(#[from] regex::Error),

    /// Unexpected error.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl RenameError {
    /// Classifies an I/O error raised while touching `path`.
    ///
    /// `NotFound` and `PermissionDenied` get their own variants; everything
    /// else stays a plain `Io` error with the path folded into the message.
    pub fn from_io(path: impl Into<PathBuf>, err: std::io::Error) -> Self {
        let path = path.into();
        match err.kind() {
            std::io::ErrorKind::NotFound => RenameError::FileNotFound(path),
            std::io::ErrorKind::PermissionDenied => RenameError::PermissionDenied(path),
            kind => RenameError::Io(std::io::Error::new(
                kind,
                format!("{}: {}", path.display(), err),
            )),
        }
    }
}

/// Result type alias for prefix-rename operations.
pub type Result<T> = std::result::Result<T, RenameError>;

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::{Error, ErrorKind};
    use std::path::Path;

    #[test]
    fn test_from_io_not_found() {
        let err = RenameError::from_io("missing.ino", Error::from(ErrorKind::NotFound));
        assert!(matches!(err, RenameError::FileNotFound(p) if p == Path::new("missing.ino")));
    }

    #[test]
    fn test_from_io_permission_denied() {
        let err = RenameError::from_io("locked.ino", Error::from(ErrorKind::PermissionDenied));
        assert!(matches!(err, RenameError::PermissionDenied(_)));
    }

    #[test]
    fn test_from_io_other_keeps_path_in_message() {
        let err = RenameError::from_io("weird.ino", Error::other("disk on fire"));
        assert!(matches!(err, RenameError::Io(_)));
        let msg = err.to_string();
        assert!(msg.contains("weird.ino"), "{msg}");
        assert!(msg.contains("disk on fire"), "{msg}");
    }

    #[test]
    fn test_display_messages() {
        assert_eq!(
            RenameError::FileNotFound(PathBuf::from("pixel_war.ino")).to_string(),
            "File not found: pixel_war.ino"
        );
        assert_eq!(
            RenameError::InvalidWord("".into(), "cannot be empty".into()).to_string(),
            "Invalid word '': cannot be empty"
        );
    }
}
