//! Trace file loading.
//!
//! Resolves a literal path or a glob pattern (picking the
//! most-recently-modified match) and parses the file into a validated
//! trace document. This is the input boundary; the analysis core never
//! touches the filesystem.

use crate::parser::{parse_document, TraceFile};
use crate::utils::error::LoadError;
use log::{debug, info};
use std::fs;
use std::path::PathBuf;
use std::time::SystemTime;

/// Resolve an input argument to a concrete trace file path
///
/// **Public** - a plain path passes through untouched; a glob pattern
/// resolves to the most-recently-modified matching file.
///
/// # Errors
/// * `LoadError::InvalidPattern` - malformed glob pattern
/// * `LoadError::NoMatches` - pattern matched no files
pub fn resolve_input(input: &str) -> Result<PathBuf, LoadError> {
    if !is_glob_pattern(input) {
        return Ok(PathBuf::from(input));
    }

    let mut newest: Option<(PathBuf, SystemTime)> = None;
    for entry in glob::glob(input)? {
        let Ok(path) = entry else {
            continue;
        };
        let Ok(modified) = fs::metadata(&path).and_then(|m| m.modified()) else {
            continue;
        };
        if newest.as_ref().is_none_or(|(_, t)| modified > *t) {
            newest = Some((path, modified));
        }
    }

    match newest {
        Some((path, _)) => {
            info!("Analyzing most recent trace: {}", path.display());
            Ok(path)
        }
        None => Err(LoadError::NoMatches(input.to_string())),
    }
}

fn is_glob_pattern(input: &str) -> bool {
    input.contains(['*', '?', '['])
}

/// Read and parse a trace file
///
/// **Public** - used by the analyze command after input resolution
///
/// # Errors
/// * `LoadError::ReadFailed` - file cannot be read
/// * `LoadError::JsonError` - file is not valid JSON
/// * `LoadError::InvalidDocument` - missing the top-level trace wrapper
pub fn load_document(path: &PathBuf) -> Result<TraceFile, LoadError> {
    debug!("Loading trace file: {}", path.display());

    let contents = fs::read_to_string(path)?;
    let raw: serde_json::Value = serde_json::from_str(&contents)?;

    Ok(parse_document(&raw)?)
}
