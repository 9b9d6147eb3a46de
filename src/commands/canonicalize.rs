//! Canonicalize command implementation.
//! Prints or writes a document with every nested array deep-sorted.

use super::compare::validate_input;
use super::models::CanonicalizeArgs;
use crate::output::{read_value, write_value};
use crate::structure::canonicalize;
use anyhow::{Context, Result};
use log::info;
use serde_json::Value;

/// Execute the canonicalize command
pub fn execute_canonicalize(args: CanonicalizeArgs) -> Result<Value> {
    validate_input(&args.input, "Input")?;

    let value = read_value(&args.input).context("Failed to read input document")?;
    let canonical = canonicalize(&value);

    match &args.output {
        Some(path) => {
            write_value(&canonical, path).context("Failed to write canonical document")?;
            info!("Canonical document written to: {}", path.display());
        }
        None => println!("{}", serde_json::to_string_pretty(&canonical)?),
    }

    Ok(canonical)
}
