//! Key-addressed file store
//!
//! A key is a file name without extension. The store appends the extension
//! of its format and keeps every file directly under one base directory.

mod format;

pub use format::ReportFormat;

use std::path::{Path, PathBuf};

use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::debug;

use crate::error::{Result, StorageError};

/// File store bound to one directory and one encoding
#[derive(Debug, Clone)]
pub struct FileStore {
    base_dir: PathBuf,
    format: ReportFormat,
}

impl FileStore {
    /// Open a store, creating the base directory if needed
    pub fn new(base_dir: impl Into<PathBuf>, format: ReportFormat) -> Result<Self> {
        let base_dir = base_dir.into();
        std::fs::create_dir_all(&base_dir)?;
        Ok(Self { base_dir, format })
    }

    pub fn base_dir(&self) -> &Path {
        &self.base_dir
    }

    pub fn format(&self) -> ReportFormat {
        self.format
    }

    /// Same directory, other encoding
    pub fn with_format(&self, format: ReportFormat) -> Self {
        Self {
            base_dir: self.base_dir.clone(),
            format,
        }
    }

    pub fn path_for(&self, key: &str) -> PathBuf {
        self.base_dir
            .join(format!("{}.{}", key, self.format.extension()))
    }

    pub fn exists(&self, key: &str) -> bool {
        self.path_for(key).is_file()
    }

    /// Serialize `data` under `key`, replacing any previous file
    pub fn save<T: Serialize + ?Sized>(&self, key: &str, data: &T) -> Result<PathBuf> {
        let path = self.path_for(key);
        let text = self.format.encode(data)?;
        std::fs::write(&path, text)?;
        debug!(path = %path.display(), "saved");
        Ok(path)
    }

    /// Deserialize the value stored under `key`
    pub fn load<T: DeserializeOwned>(&self, key: &str) -> Result<T> {
        let path = self.path_for(key);
        if !path.is_file() {
            return Err(StorageError::NotFound { path });
        }

        let text = std::fs::read_to_string(&path)?;
        let value = self.format.decode(&text)?;
        debug!(path = %path.display(), "loaded");
        Ok(value)
    }

    /// Keys whose file name matches `pattern` (a glob without extension),
    /// sorted by name
    pub fn keys_matching(&self, pattern: &str) -> Result<Vec<String>> {
        let full = format!(
            "{}/{}.{}",
            glob::Pattern::escape(&self.base_dir.to_string_lossy()),
            pattern,
            self.format.extension()
        );

        let mut keys = Vec::new();
        for entry in glob::glob(&full)? {
            let path = entry.map_err(|e| StorageError::Io(e.into()))?;
            if let Some(stem) = path.file_stem().and_then(|s| s.to_str()) {
                keys.push(stem.to_string());
            }
        }
        keys.sort();
        Ok(keys)
    }
}
