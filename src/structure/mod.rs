//! Order-insensitive structural comparison.
//!
//! Two values are structurally identical when their key sets, node kinds and
//! array lengths line up after every nested array has been canonicalized.
//! Primitive values only matter for reporting which mapping fields changed.
//!
//! # Example
//! ```
//! use serde_json::json;
//! use structure_match::structure::compare_structures;
//!
//! let result = compare_structures(&json!({"a": [1, 2]}), &json!({"a": [2, 1]}));
//! assert!(result.structure_is_identical);
//!
//! let result = compare_structures(&json!({"a": 1}), &json!({"a": "1"}));
//! assert_eq!(result.divergence(), Some("a"));
//! ```

mod canonicalizer;
mod comparator;
mod kind;
mod path;
mod schema;

// Public API exports
pub use canonicalizer::{canonical_json, canonicalize, shape_signature, Canonicalizer, DeepSort};
pub use comparator::{compare_structures, compare_structures_with};
pub use kind::{NodeKind, PrimitiveKind};
pub use path::{FieldPath, Segment};
pub use schema::ComparisonResult;
