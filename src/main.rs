//! Binary entry point for `prefix-rename`.

use colored::Colorize;
use std::process;

fn main() {
    if let Err(e) = prefix_rename::run() {
        eprintln!("{} {}", "Error:".red().bold(), e);
        process::exit(1);
    }
}
