//! Catalog - Persisted set of shelters
//!
//! Startup loads the catalog key; when that fails for any reason the seed
//! data is regenerated and written back.

use std::path::PathBuf;

use shelter_domain::ShelterDirectory;
use tracing::{info, warn};

use crate::error::Result;
use crate::record::ShelterSet;
use crate::seed::seed_directory;
use crate::storage::FileStore;

/// Default key of the shelter set
pub const DEFAULT_CATALOG_KEY: &str = "shelters";

#[derive(Debug, Clone)]
pub struct Catalog {
    store: FileStore,
    key: String,
}

impl Catalog {
    pub fn new(store: FileStore, key: impl Into<String>) -> Self {
        Self {
            store,
            key: key.into(),
        }
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn path(&self) -> PathBuf {
        self.store.path_for(&self.key)
    }

    /// Load the persisted shelters
    pub fn load(&self) -> Result<ShelterDirectory> {
        let set: ShelterSet = self.store.load(&self.key)?;
        let directory = ShelterDirectory::try_from(set)?;
        info!(shelters = directory.len(), key = %self.key, "catalog loaded");
        Ok(directory)
    }

    /// Load the persisted shelters, falling back to seed data
    ///
    /// A failure to write the regenerated seed data is logged; the seed
    /// data is returned either way.
    pub fn load_or_seed(&self) -> Result<ShelterDirectory> {
        match self.load() {
            Ok(directory) => Ok(directory),
            Err(e) => {
                warn!(error = %e, "catalog unavailable, regenerating seed data");
                let directory = seed_directory()?;
                if let Err(e) = self.save(&directory) {
                    warn!(error = %e, "failed to persist seed data");
                }
                Ok(directory)
            }
        }
    }

    /// Replace the persisted shelters with fresh seed data
    pub fn reseed(&self) -> Result<ShelterDirectory> {
        let directory = seed_directory()?;
        self.save(&directory)?;
        Ok(directory)
    }

    pub fn save(&self, directory: &ShelterDirectory) -> Result<PathBuf> {
        self.store.save(&self.key, &ShelterSet::from(directory))
    }
}
