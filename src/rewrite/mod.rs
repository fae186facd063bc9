//! Text rewriting for prefix renames.

pub mod list;
pub mod words;

pub use list::{DEFAULT_FILE, DEFAULT_PREFIX, DEFAULT_WORDS, Rename, RenameList};
pub use words::{RenameReport, Renamed, WordCount, WordRenamer};
