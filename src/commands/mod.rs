//! CLI command implementations.
//!
//! Each command is implemented in its own module.
//! Commands orchestrate the various library components to perform user tasks.

pub mod canonicalize;
pub mod compare;
pub mod models;
pub mod utils;

// Re-export main command functions
pub use canonicalize::execute_canonicalize;
pub use compare::{execute_compare, validate_args};
pub use models::{CanonicalizeArgs, CompareArgs};
pub use utils::{display_schema, display_version};
