//! Orchestration of a prefix rename: read, rewrite, write, report.
//!
//! The new content is computed in full before the single write is committed
//! through a `Transaction`, so a failure at any step leaves the file as it was.

use crate::error::Result;
use crate::fs::{Transaction, read_source};
use crate::rewrite::{DEFAULT_FILE, DEFAULT_PREFIX, DEFAULT_WORDS, RenameList, WordRenamer};

use clap::Parser;
use std::path::PathBuf;

/// Printed to stdout after a successful run.
pub const FINISHED_MESSAGE: &str = "Finished renaming prefix.";

/// Arguments for a rename run.
///
/// Every argument has a default, so a bare invocation rewrites
/// `pixel_war.ino` with the built-in word list.
#[derive(Parser, Debug, Clone)]
pub struct RenameArgs {
    /// File to rewrite in place
    #[arg(value_name = "FILE", default_value = DEFAULT_FILE)]
    pub file: PathBuf,

    /// Literal prefix prepended to every target word
    #[arg(long, value_name = "PREFIX", default_value = DEFAULT_PREFIX)]
    pub prefix: String,

    /// Target word to prefix (repeatable; replaces the built-in list)
    #[arg(long = "word", short = 'w', value_name = "WORD")]
    pub words: Vec<String>,
}

impl RenameArgs {
    /// Builds the rename list from the prefix and either the given words or
    /// the built-in ones.
    pub fn rename_list(&self) -> Result<RenameList> {
        if self.words.is_empty() {
            RenameList::with_prefix(&self.prefix, DEFAULT_WORDS)
        } else {
            RenameList::with_prefix(&self.prefix, self.words.as_slice())
        }
    }
}

pub fn execute(args: RenameArgs) -> Result<()> {
    // Validate and compile before touching the file
    let list = args.rename_list()?;
    let renamer = WordRenamer::new(&list)?;

    log::debug!(
        "Prefixing {} word(s) with '{}' in {}",
        list.len(),
        list.prefix(),
        args.file.display()
    );

    let original = read_source(&args.file)?;
    let renamed = renamer.apply(&original);

    for count in &renamed.report.counts {
        log::debug!("  {}: {}", count.word, count.count);
    }
    log::info!(
        "{} replacement(s) in {}",
        renamed.report.total(),
        args.file.display()
    );

    let mut txn = Transaction::new();
    txn.update_file(args.file.clone(), renamed.content)?;
    txn.commit()?;

    println!("{}", FINISHED_MESSAGE);

    Ok(())
}
