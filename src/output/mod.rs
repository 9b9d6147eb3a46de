//! Reading input documents and writing reports to disk.
//!
//! This module handles:
//! - Loading JSON documents from files or stdin
//! - Writing comparison reports and canonicalized documents as pretty JSON

pub mod json;

// Re-export main functions
pub use json::{parse_value, read_value, validate_path, write_report, write_value};
