//! JSON document reader and report writer.

use crate::report::CompareReport;
use crate::utils::config::STDIN_MARKER;
use crate::utils::error::{InputError, OutputError};
use log::{debug, info};
use serde::Serialize;
use serde_json::Value;
use std::fs::File;
use std::io::{BufReader, BufWriter, Read, Write};
use std::path::Path;

/// Read a JSON document from a file, or from stdin when the path is `-`
///
/// # Errors
/// * `InputError::InvalidSource` - Path is empty
/// * `InputError::ReadFailed` - File or stdin cannot be read
/// * `InputError::ParseFailed` - Content is not valid JSON
///
/// # Example
/// ```ignore
/// let baseline = read_value("baseline.json")?;
/// ```
pub fn read_value(input_path: impl AsRef<Path>) -> Result<Value, InputError> {
    let input_path = input_path.as_ref();

    if input_path.as_os_str().is_empty() {
        return Err(InputError::InvalidSource("Path is empty".to_string()));
    }

    if input_path.as_os_str() == STDIN_MARKER {
        debug!("Reading document from stdin");
        let mut contents = String::new();
        std::io::stdin().read_to_string(&mut contents)?;
        return parse_value(&contents);
    }

    debug!("Reading document from: {}", input_path.display());

    let file = File::open(input_path)?;
    let value: Value = serde_json::from_reader(BufReader::new(file))?;

    Ok(value)
}

/// Parse a JSON document from a string
pub fn parse_value(contents: &str) -> Result<Value, InputError> {
    Ok(serde_json::from_str(contents)?)
}

/// Write a comparison report to a JSON file
///
/// # Errors
/// * `OutputError::WriteFailed` - I/O error during write
/// * `OutputError::SerializationFailed` - JSON serialization error
/// * `OutputError::InvalidPath` - Path cannot be created or is invalid
pub fn write_report(report: &CompareReport, output_path: impl AsRef<Path>) -> Result<(), OutputError> {
    write_value(report, output_path)
}

/// Write any serializable value as pretty JSON, creating parent directories
pub fn write_value<T: Serialize + ?Sized>(
    value: &T,
    output_path: impl AsRef<Path>,
) -> Result<(), OutputError> {
    let output_path = output_path.as_ref();

    info!("Writing JSON to: {}", output_path.display());

    validate_path(output_path)?;

    if let Some(parent) = output_path.parent() {
        if !parent.as_os_str().is_empty() && !parent.exists() {
            debug!("Creating parent directories: {}", parent.display());
            std::fs::create_dir_all(parent).map_err(|e| {
                OutputError::InvalidPath(format!(
                    "Cannot create directory {}: {}",
                    parent.display(),
                    e
                ))
            })?;
        }
    }

    let file = File::create(output_path).map_err(OutputError::WriteFailed)?;
    let mut writer = BufWriter::new(file);

    serde_json::to_writer_pretty(&mut writer, value).map_err(OutputError::SerializationFailed)?;
    writer.flush().map_err(OutputError::WriteFailed)?;

    debug!("Wrote {} bytes", calculate_file_size(output_path));

    Ok(())
}

/// Validate that an output path is writable
pub fn validate_path(path: &Path) -> Result<(), OutputError> {
    if path.as_os_str().is_empty() {
        return Err(OutputError::InvalidPath("Path is empty".to_string()));
    }

    // Check if we're trying to overwrite a directory
    if path.is_dir() {
        return Err(OutputError::InvalidPath(format!(
            "Path is a directory: {}",
            path.display()
        )));
    }

    Ok(())
}

fn calculate_file_size(path: &Path) -> u64 {
    std::fs::metadata(path).map(|m| m.len()).unwrap_or(0)
}
