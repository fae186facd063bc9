//! The ordered list of renames to apply.

use crate::error::Result;
use crate::verify::{validate_prefix, validate_words};

/// File rewritten when no path is given.
pub const DEFAULT_FILE: &str = "pixel_war.ino";

/// Prefix prepended to every target word.
pub const DEFAULT_PREFIX: &str = "lightBeam_";

/// Built-in target words, in application order.
pub const DEFAULT_WORDS: &[&str] = &[
    "initGame",
    "spawnEnemy",
    "spawnBullet",
    "checkCollisions",
    "updateEnemies",
    "updateBullets",
    "drawLEDs",
    "drawIdleScreen",
    "drawGameOver",
    "handleButtons",
];

/// A single `old → new` rename.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rename {
    pub old_name: String,
    pub new_name: String,
}

/// Ordered sequence of renames, each `new_name` being `prefix + old_name`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenameList {
    prefix: String,
    renames: Vec<Rename>,
}

impl RenameList {
    /// Builds the list after validating the prefix and every word.
    pub fn with_prefix<S: AsRef<str>>(prefix: &str, words: &[S]) -> Result<Self> {
        validate_prefix(prefix)?;
        validate_words(words)?;

        let renames = words
            .iter()
            .map(|w| Rename {
                old_name: w.as_ref().to_string(),
                new_name: format!("{}{}", prefix, w.as_ref()),
            })
            .collect();

        Ok(Self {
            prefix: prefix.to_string(),
            renames,
        })
    }

    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    pub fn iter(&self) -> impl Iterator<Item = &Rename> {
        self.renames.iter()
    }

    pub fn len(&self) -> usize {
        self.renames.len()
    }

    pub fn is_empty(&self) -> bool {
        self.renames.is_empty()
    }
}

impl Default for RenameList {
    fn default() -> Self {
        Self {
            prefix: DEFAULT_PREFIX.to_string(),
            renames: DEFAULT_WORDS
                .iter()
                .map(|w| Rename {
                    old_name: (*w).to_string(),
                    new_name: format!("{}{}", DEFAULT_PREFIX, w),
                })
                .collect(),
        }
    }
}
