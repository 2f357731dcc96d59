//! Write a JSON index of audio filenames in a directory.

use std::collections::BTreeMap;
use std::fs;

use serde::Serialize;
use serde_json::ser::PrettyFormatter;

use crate::domain::{AppError, IndexConfig};

/// Output shape of the index document.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IndexFormat {
    /// JSON array of filenames.
    Array,
    /// JSON object keyed by file stem (everything before the first dot).
    Map,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IndexOutcome {
    pub count: usize,
}

/// Snapshot the directory listing and serialize it to the output path.
///
/// The document is rendered in memory first and written in one call, so a
/// failing run leaves no partial output behind.
pub fn execute(config: &IndexConfig, format: IndexFormat) -> Result<IndexOutcome, AppError> {
    if !config.dir.is_dir() {
        return Err(AppError::InputDirMissing(config.dir.display().to_string()));
    }

    let names = matching_names(config)?;
    let document = match format {
        IndexFormat::Array => render(&names)?,
        IndexFormat::Map => {
            let map: BTreeMap<&str, &String> =
                names.iter().map(|name| (stem(name), name)).collect();
            render(&map)?
        }
    };
    fs::write(&config.out, document)?;

    Ok(IndexOutcome { count: names.len() })
}

/// Sorted filenames in the directory carrying the configured extension.
fn matching_names(config: &IndexConfig) -> Result<Vec<String>, AppError> {
    let suffix = config.suffix();
    let mut names = Vec::new();
    for entry in fs::read_dir(&config.dir)? {
        let entry = entry?;
        if !entry.file_type()?.is_file() {
            continue;
        }
        let name = entry.file_name().to_string_lossy().into_owned();
        if name.ends_with(&suffix) {
            names.push(name);
        }
    }
    names.sort();
    Ok(names)
}

fn stem(name: &str) -> &str {
    name.split('.').next().unwrap_or(name)
}

/// Serialize with 4-space indentation, trailing newline included.
fn render<T: Serialize>(value: &T) -> Result<Vec<u8>, AppError> {
    let mut buf = Vec::new();
    let formatter = PrettyFormatter::with_indent(b"    ");
    let mut serializer = serde_json::Serializer::with_formatter(&mut buf, formatter);
    value.serialize(&mut serializer).map_err(|e| {
        AppError::config_error(format!("Failed to serialize index document: {}", e))
    })?;
    buf.push(b'\n');
    Ok(buf)
}
