//! Application configuration

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::archive::FileArchive;
use crate::catalog::{Catalog, DEFAULT_CATALOG_KEY};
use crate::error::{Result, StorageError};
use crate::report::Reports;
use crate::storage::{FileStore, ReportFormat};

/// File names probed by [`AppConfig::discover`], in order
pub const CONFIG_FILE_NAMES: [&str; 3] = ["shelter.yaml", "shelter.yml", "shelter.json"];

/// Settings file format (`shelter.json` / `shelter.yaml`)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AppConfig {
    /// Directory holding the catalog, archived animals and reports
    pub data_dir: PathBuf,

    /// Format of new reports
    pub report_format: ReportFormat,

    /// Key of the shelter set inside `data_dir`
    pub catalog_key: String,

    /// Format of the shelter set file; independent of `report_format`
    pub catalog_format: ReportFormat,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from("Data"),
            report_format: ReportFormat::Json,
            catalog_key: DEFAULT_CATALOG_KEY.to_string(),
            catalog_format: ReportFormat::Json,
        }
    }
}

impl AppConfig {
    /// Load configuration from a JSON or YAML file, chosen by extension
    pub fn from_file(path: &Path) -> Result<Self> {
        if !path.is_file() {
            return Err(StorageError::NotFound {
                path: path.to_path_buf(),
            });
        }

        let content = std::fs::read_to_string(path)?;
        let config: Self = match path.extension().and_then(|e| e.to_str()) {
            Some("yaml") | Some("yml") => serde_yaml::from_str(&content)?,
            _ => serde_json::from_str(&content)?,
        };
        debug!(path = %path.display(), "configuration loaded");
        Ok(config)
    }

    /// Look for a configuration file in `dir`, falling back to defaults
    pub fn discover(dir: &Path) -> Result<Self> {
        match CONFIG_FILE_NAMES
            .iter()
            .map(|name| dir.join(name))
            .find(|path| path.is_file())
        {
            Some(path) => Self::from_file(&path),
            None => Ok(Self::default()),
        }
    }

    pub fn catalog(&self) -> Result<Catalog> {
        let store = FileStore::new(&self.data_dir, self.catalog_format)?;
        Ok(Catalog::new(store, self.catalog_key.clone()))
    }

    pub fn archive(&self) -> Result<FileArchive> {
        FileArchive::new(&self.data_dir)
    }

    pub fn reports(&self) -> Result<Reports> {
        Reports::new(&self.data_dir)
    }
}
