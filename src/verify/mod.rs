//! Validation of the rename configuration.

pub mod rules;

pub use rules::{validate_prefix, validate_word, validate_words};
