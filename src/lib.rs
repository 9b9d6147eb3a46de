//! Structure Match
//!
//! Order-insensitive structural comparison of JSON payloads. Two documents
//! match when they share key sets, node kinds and array lengths, regardless
//! of array element order or primitive values.
//!
//! This crate provides the comparison core and the implementation of the
//! `structure-match` CLI tool.
//!
//! ## Getting Started
//!
//! ```
//! use serde_json::json;
//! use structure_match::compare_structures;
//!
//! let result = compare_structures(
//!     &json!({"id": 1, "tags": ["a", "b"]}),
//!     &json!({"id": 2, "tags": ["b", "a"]}),
//! );
//! assert!(result.structure_is_identical);
//! assert_eq!(result.changed_properties(), ["id"]);
//! ```

pub mod commands;
pub mod output;
pub mod report;
pub mod structure;
pub mod utils;

pub use structure::{compare_structures, ComparisonResult};
