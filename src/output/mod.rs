//! Report output: JSON files and terminal summary.

pub mod json;
pub mod schema;
pub mod summary;

// Re-export main types and functions
pub use json::{read_report, write_report};
pub use schema::Report;
pub use summary::{format_chz, format_number, render_summary};
