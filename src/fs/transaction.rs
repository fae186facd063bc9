//! Staged file writes.
//!
//! New file contents are computed in full, staged here, and only written on
//! `commit()`. Anything that fails before the commit leaves the disk untouched.
//!
//! ## Phases
//!
//! 1. **Build**: Stage writes via `update_file()`
//! 2. **Validate**: Check staged paths still exist and are writable
//! 3. **Execute**: Write every staged file
//!
//! Every staged write is executed, even when the new content equals what is
//! already on disk, so an unwritable file is always reported.
//!
//! ## Example
//!
//! ```no_run
//! # use prefix_rename::fs::Transaction;
//! # use std::path::PathBuf;
//! # fn example() -> prefix_rename::error::Result<()> {
//! let mut txn = Transaction::new();
//!
//! txn.update_file(PathBuf::from("pixel_war.ino"), "lightBeam_initGame();".into())?;
//!
//! txn.commit()?;
//! # Ok(())
//! # }
//! ```

use crate::error::{RenameError, Result};

use std::fs;
use std::path::PathBuf;

/// A file and the content it will be overwritten with.
#[derive(Debug, Clone)]
struct StagedWrite {
    path: PathBuf,
    content: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum TransactionState {
    /// Staging writes.
    Building,
    /// All writes succeeded.
    Committed,
    /// Validation or a write failed.
    Failed,
}

/// Set of writes applied together on `commit()`.
///
/// If dropped without committing, logs a warning; nothing was written.
#[must_use = "Transaction must be committed"]
pub struct Transaction {
    writes: Vec<StagedWrite>,
    state: TransactionState,
}

impl Default for Transaction {
    fn default() -> Self {
        Self::new()
    }
}

impl Transaction {
    /// Creates a new transaction.
    pub fn new() -> Self {
        Self {
            writes: Vec::new(),
            state: TransactionState::Building,
        }
    }

    /// Validates all staged writes.
    ///
    /// Checks:
    /// - Files still exist
    /// - Files are writable
    fn validate(&self) -> Result<()> {
        for write in &self.writes {
            let path = &write.path;
            let metadata = fs::metadata(path).map_err(|e| RenameError::from_io(path, e))?;

            if metadata.permissions().readonly() {
                log::debug!("Refusing to write read-only file: {}", path.display());
                return Err(RenameError::PermissionDenied(path.clone()));
            }
        }

        Ok(())
    }

    pub fn len(&self) -> usize {
        self.writes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.writes.is_empty()
    }

    /// Returns true if successfully committed.
    pub fn is_committed(&self) -> bool {
        self.state == TransactionState::Committed
    }

    /// Stages a write of `content` to `path`.
    pub fn update_file(&mut self, path: PathBuf, content: String) -> Result<()> {
        if self.state != TransactionState::Building {
            return Err(RenameError::Other(anyhow::anyhow!(
                "Cannot modify transaction after commit"
            )));
        }

        log::debug!("Staging update for: {}", path.display());
        self.writes.push(StagedWrite { path, content });

        Ok(())
    }

    /// Validates, then writes every staged file.
    pub fn commit(&mut self) -> Result<()> {
        if self.state != TransactionState::Building {
            return Err(RenameError::Other(anyhow::anyhow!(
                "Transaction already committed"
            )));
        }

        if let Err(e) = self.validate() {
            self.state = TransactionState::Failed;
            return Err(e);
        }

        for write in &self.writes {
            if let Err(e) = fs::write(&write.path, &write.content) {
                self.state = TransactionState::Failed;
                return Err(RenameError::from_io(&write.path, e));
            }
            log::debug!(
                "Updated: {} ({} bytes)",
                write.path.display(),
                write.content.len()
            );
        }

        self.state = TransactionState::Committed;
        Ok(())
    }
}

impl Drop for Transaction {
    fn drop(&mut self) {
        if self.state == TransactionState::Building && !self.writes.is_empty() {
            log::warn!("Transaction dropped without commit");
        }
    }
}
