//! Whole-word prefix rewriting.
//!
//! Every target word is wrapped in `\b…\b` so only standalone occurrences are
//! touched. Text is not tokenized: matches inside comments and string literals
//! are renamed like any other.
//!
//! ```text
//! void initGame() { spawnEnemy(); }      // both renamed
//! // initGameLoop is unrelated           // untouched, not a whole word
//! lightBeam_initGame();                  // untouched, `_` is a word character
//! ```

use crate::error::Result;
use crate::rewrite::list::{Rename, RenameList};
use regex::{NoExpand, Regex};

/// Compiled word-boundary patterns, one per rename, in list order.
pub struct WordRenamer {
    replacements: Vec<(Regex, Rename)>,
}

/// Replacement count for a single target word.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WordCount {
    pub word: String,
    pub count: usize,
}

/// What a rewrite pass changed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RenameReport {
    pub counts: Vec<WordCount>,
}

impl RenameReport {
    /// Total number of replacements across all words.
    pub fn total(&self) -> usize {
        self.counts.iter().map(|c| c.count).sum()
    }

    pub fn is_unchanged(&self) -> bool {
        self.total() == 0
    }
}

/// Rewritten text plus the counts that produced it.
#[derive(Debug, Clone)]
pub struct Renamed {
    pub content: String,
    pub report: RenameReport,
}

impl WordRenamer {
    /// Compiles one pattern per rename in `list`.
    pub fn new(list: &RenameList) -> Result<Self> {
        let replacements = list
            .iter()
            .map(|r| -> Result<(Regex, Rename)> {
                let pattern = Regex::new(&format!(r"\b{}\b", regex::escape(&r.old_name)))?;
                Ok((pattern, r.clone()))
            })
            .collect::<Result<Vec<_>>>()?;

        Ok(Self { replacements })
    }

    /// Applies every pattern in order.
    ///
    /// Substitution cannot fail; text with no matches comes back unchanged
    /// with an all-zero report.
    pub fn apply(&self, content: &str) -> Renamed {
        let mut result = content.to_string();
        let mut report = RenameReport::default();

        for (pattern, rename) in &self.replacements {
            let count = pattern.find_iter(&result).count();
            if count > 0 {
                result = pattern
                    .replace_all(&result, NoExpand(&rename.new_name))
                    .into_owned();
            }

            log::trace!("{} → {}: {} match(es)", rename.old_name, rename.new_name, count);
            report.counts.push(WordCount {
                word: rename.old_name.clone(),
                count,
            });
        }

        Renamed {
            content: result,
            report,
        }
    }
}
