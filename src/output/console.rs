//! Console output utilities.
//!
//! Status lines go to stderr; stdout carries only listings and documents.

use console::{style, StyledObject};

fn status(tag: StyledObject<&str>, message: &str) {
    eprintln!("{} {}", tag.bold(), message);
}

pub fn print_info(message: &str) {
    status(style("INFO").cyan(), message);
}

pub fn print_success(message: &str) {
    status(style("OK").green(), message);
}

pub fn print_warning(message: &str) {
    status(style("WARN").yellow(), message);
}

pub fn print_error(message: &str) {
    status(style("ERROR").red(), message);
}

/// Print directory entries to stdout, one per line.
pub fn print_listing(entries: &[String]) {
    print!("{}", format_listing(entries));
}

fn format_listing(entries: &[String]) -> String {
    entries.iter().map(|entry| format!("{}\n", entry)).collect()
}

/// Print a document body to stdout as-is, ending with a newline.
pub fn print_document(body: &str) {
    print!("{}", body);
    if !body.is_empty() && !body.ends_with('\n') {
        println!();
    }
}
