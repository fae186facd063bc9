//! File system access: reading the source file and staging its rewrite.

pub mod source;
pub mod transaction;

pub use source::read_source;
pub use transaction::Transaction;
