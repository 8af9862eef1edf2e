//! FileArchive - Mirrors every newly admitted animal to disk
//!
//! Each animal is written twice, once per format, under
//! `pet_<Kind>_<yyyyMMddHHmmss>`. A second animal of the same kind archived
//! within the same second gets a `_<n>` suffix instead of replacing the
//! first one's files.

use std::path::PathBuf;

use chrono::Local;
use shelter_domain::{Animal, AnimalArchive, ArchiveError};
use tracing::debug;

use crate::error::Result;
use crate::record::AnimalRecord;
use crate::storage::{FileStore, ReportFormat};

/// Archive writing JSON and XML copies into one directory
#[derive(Debug, Clone)]
pub struct FileArchive {
    stores: [FileStore; 2],
}

impl FileArchive {
    pub fn new(base_dir: impl Into<PathBuf>) -> Result<Self> {
        let json = FileStore::new(base_dir, ReportFormat::Json)?;
        let xml = json.with_format(ReportFormat::Xml);
        Ok(Self { stores: [json, xml] })
    }

    pub fn key_for(animal: &Animal) -> String {
        format!(
            "pet_{}_{}",
            animal.kind(),
            Local::now().format("%Y%m%d%H%M%S")
        )
    }

    /// `base`, or `base_<n>` with the lowest `n` not used in any format
    fn free_key(&self, base: String) -> String {
        let taken = |key: &str| self.stores.iter().any(|store| store.exists(key));
        if !taken(&base) {
            return base;
        }
        let mut n = 1;
        loop {
            let key = format!("{base}_{n}");
            if !taken(&key) {
                return key;
            }
            n += 1;
        }
    }
}

impl AnimalArchive for FileArchive {
    fn archive(&self, animal: &Animal) -> std::result::Result<(), ArchiveError> {
        let key = self.free_key(Self::key_for(animal));
        let record = AnimalRecord::from(animal);

        for store in &self.stores {
            let path = store
                .save(&key, &record)
                .map_err(|e| ArchiveError::new(animal, e.to_string()))?;
            debug!(path = %path.display(), "animal archived");
        }
        Ok(())
    }
}
