//! Output module for console output.
//!
//! Provides:
//! - Colored status messages
//! - Listing and document printing for the CLI

pub mod console;

pub use console::{print_document, print_error, print_info, print_listing, print_success, print_warning};
