//! # Dataset Error Types Module
//!
//! This module defines the error type for reading and rewriting the recipe dataset file.
//! Classification and unit conversion never fail; only file I/O and JSON decoding do.

use std::path::PathBuf;

/// Custom error types for dataset operations
#[derive(Debug)]
pub enum DatasetError {
    /// The file could not be read
    Read { path: PathBuf, source: std::io::Error },
    /// The temporary output file could not be created or written
    Write { path: PathBuf, source: std::io::Error },
    /// The file is not a valid JSON document of the expected shape
    Parse { path: PathBuf, source: serde_json::Error },
    /// Records could not be encoded
    Serialize(serde_json::Error),
    /// The finished temporary file could not replace the target
    Persist { path: PathBuf, source: std::io::Error },
    /// A seed run produced no recipes
    EmptyInput,
}

impl std::fmt::Display for DatasetError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DatasetError::Read { path, source } => {
                write!(f, "Read error for {}: {source}", path.display())
            }
            DatasetError::Write { path, source } => {
                write!(f, "Write error for {}: {source}", path.display())
            }
            DatasetError::Parse { path, source } => {
                write!(f, "Parse error in {}: {source}", path.display())
            }
            DatasetError::Serialize(source) => write!(f, "Serialization error: {source}"),
            DatasetError::Persist { path, source } => {
                write!(f, "Could not replace {}: {source}", path.display())
            }
            DatasetError::EmptyInput => write!(f, "No recipes found in input"),
        }
    }
}

impl std::error::Error for DatasetError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            DatasetError::Read { source, .. }
            | DatasetError::Write { source, .. }
            | DatasetError::Persist { source, .. } => Some(source),
            DatasetError::Parse { source, .. } => Some(source),
            DatasetError::Serialize(source) => Some(source),
            DatasetError::EmptyInput => None,
        }
    }
}

impl From<serde_json::Error> for DatasetError {
    fn from(err: serde_json::Error) -> Self {
        DatasetError::Serialize(err)
    }
}
