//! Reports - Exported selections of animals
//!
//! Two kinds of report files live next to the catalog:
//!
//! - `selection_<n>_<yyyy_MM_dd_HH_mm_ss>`: a numbered export of whatever
//!   the user filtered; `n` keeps increasing across runs
//! - `report_<shelter>_<yyyy_MM_dd_HH_mm_ss>`: the animals shown for one
//!   shelter
//!
//! Selections can be converted in bulk from one format to the other.

use std::path::{Path, PathBuf};

use chrono::Local;
use regex::Regex;
use shelter_domain::Animal;
use tracing::{debug, info, warn};

use crate::error::Result;
use crate::record::AnimalReport;
use crate::storage::{FileStore, ReportFormat};

const SELECTION_PREFIX: &str = "selection_";
const TIMESTAMP_FORMAT: &str = "%Y_%m_%d_%H_%M_%S";

/// Report files under one directory
#[derive(Debug, Clone)]
pub struct Reports {
    store: FileStore,
    selection_number: Regex,
}

impl Reports {
    pub fn new(base_dir: impl Into<PathBuf>) -> Result<Self> {
        Ok(Self {
            store: FileStore::new(base_dir, ReportFormat::Json)?,
            selection_number: Regex::new(r"^selection_(\d+)_")?,
        })
    }

    pub fn base_dir(&self) -> &Path {
        self.store.base_dir()
    }

    fn store(&self, format: ReportFormat) -> FileStore {
        self.store.with_format(format)
    }

    /// Keys of every selection report stored in `format`, in selection
    /// number order
    pub fn selection_keys(&self, format: ReportFormat) -> Result<Vec<String>> {
        let mut keys = self
            .store(format)
            .keys_matching(&format!("{SELECTION_PREFIX}*"))?;
        keys.sort_by_cached_key(|key| (self.number_of(key), key.clone()));
        Ok(keys)
    }

    fn number_of(&self, key: &str) -> Option<u64> {
        self.selection_number
            .captures(key)
            .and_then(|c| c[1].parse::<u64>().ok())
    }

    /// Number the next selection report will get
    pub fn next_selection_number(&self) -> Result<u64> {
        let mut highest = 0;
        for format in ReportFormat::ALL {
            for key in self.selection_keys(format)? {
                if let Some(n) = self.number_of(&key) {
                    highest = highest.max(n);
                }
            }
        }
        Ok(highest + 1)
    }

    /// Export a filtered list of animals as the next numbered selection
    ///
    /// Returns the key the report was written under.
    pub fn save_selection<'a>(
        &self,
        format: ReportFormat,
        animals: impl IntoIterator<Item = &'a Animal>,
    ) -> Result<String> {
        let key = format!(
            "{SELECTION_PREFIX}{}_{}",
            self.next_selection_number()?,
            Local::now().format(TIMESTAMP_FORMAT)
        );
        self.write(format, &key, animals)?;
        Ok(key)
    }

    /// Export the animals shown for one shelter
    pub fn save_shelter_report<'a>(
        &self,
        format: ReportFormat,
        shelter_name: &str,
        animals: impl IntoIterator<Item = &'a Animal>,
    ) -> Result<String> {
        let key = format!(
            "report_{}_{}",
            sanitize(shelter_name),
            Local::now().format(TIMESTAMP_FORMAT)
        );
        self.write(format, &key, animals)?;
        Ok(key)
    }

    fn write<'a>(
        &self,
        format: ReportFormat,
        key: &str,
        animals: impl IntoIterator<Item = &'a Animal>,
    ) -> Result<PathBuf> {
        let report = AnimalReport::from_animals(animals);
        let path = self.store(format).save(key, &report)?;
        info!(path = %path.display(), animals = report.animals.len(), "report saved");
        Ok(path)
    }

    /// Read a report back into domain animals
    pub fn load(&self, format: ReportFormat, key: &str) -> Result<Vec<Animal>> {
        let report: AnimalReport = self.store(format).load(key)?;
        Ok(report.into_animals()?)
    }

    /// Convert one report from `from` to `to`, keeping its key
    pub fn convert_one(&self, key: &str, from: ReportFormat, to: ReportFormat) -> Result<PathBuf> {
        let report: AnimalReport = self.store(from).load(key)?;
        let path = self.store(to).save(key, &report)?;
        debug!(key, %from, %to, "report converted");
        Ok(path)
    }

    /// Convert every selection report from `from` to `to`
    ///
    /// `on_converted` is called with each converted key. Converting a format
    /// into itself does nothing and returns 0.
    pub fn convert_all(
        &self,
        from: ReportFormat,
        to: ReportFormat,
        mut on_converted: impl FnMut(&str),
    ) -> Result<usize> {
        if from == to {
            warn!(%from, "source and target formats are the same, nothing to convert");
            return Ok(0);
        }

        let keys = self.selection_keys(from)?;
        for key in &keys {
            self.convert_one(key, from, to)?;
            on_converted(key);
        }

        info!(converted = keys.len(), %from, %to, "reports converted");
        Ok(keys.len())
    }
}

/// Keep a shelter name usable as part of a file name
fn sanitize(name: &str) -> String {
    name.trim()
        .chars()
        .map(|c| {
            if c.is_alphanumeric() || c == '-' {
                c
            } else {
                '_'
            }
        })
        .collect()
}
