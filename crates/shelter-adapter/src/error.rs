//! Error types for the persistence adapter

use std::path::PathBuf;

use shelter_domain::{ShelterError, ValidationError};
use thiserror::Error;

/// Errors that can occur while reading or writing persisted state
#[derive(Debug, Error)]
pub enum StorageError {
    /// The backing file for a key does not exist
    #[error("File {} not found", path.display())]
    NotFound { path: PathBuf },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("XML error: {0}")]
    Xml(#[from] quick_xml::DeError),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// A persisted record violates a constructor invariant
    #[error("Invalid record: {0}")]
    InvalidRecord(#[from] ValidationError),

    /// Persisted animals do not fit their shelter
    #[error("Inconsistent shelter: {0}")]
    Inconsistent(#[from] ShelterError),

    #[error("Unknown report format '{format}'")]
    UnknownFormat { format: String },

    #[error("Invalid file pattern: {0}")]
    Pattern(#[from] glob::PatternError),

    #[error("Invalid name pattern: {0}")]
    Regex(#[from] regex::Error),
}

impl StorageError {
    pub fn is_not_found(&self) -> bool {
        matches!(self, StorageError::NotFound { .. })
    }
}

pub type Result<T> = std::result::Result<T, StorageError>;
