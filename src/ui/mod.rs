//! Terminal output for the encode run.
//!
//! Success lines are green, failures and deletions red, and paths blue.
//! Failures go to stderr, everything else to stdout.
//!
//! # Modules
//!
//! - [`display`]: status lines and the end-of-run summary table

pub mod display;

pub use display::{show_cleared, show_deleted, show_encoded, show_failure, show_folder_ready, show_no_files, show_not_found, show_revealed, show_summary};
