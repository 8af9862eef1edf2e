//! Session - The loaded catalog plus the adapters commands need

use anyhow::{anyhow, Context};
use shelter_adapter::{AppConfig, Catalog, FileArchive, Reports};
use shelter_domain::{Shelter, ShelterDirectory};
use tracing::debug;

/// State shared by one invocation of the CLI
#[derive(Debug)]
pub struct Session {
    pub config: AppConfig,
    pub catalog: Catalog,
    pub directory: ShelterDirectory,
}

impl Session {
    /// Load the catalog (or seed it) for `config`
    pub fn open(config: AppConfig) -> anyhow::Result<Self> {
        let catalog = config
            .catalog()
            .with_context(|| format!("cannot open data directory {}", config.data_dir.display()))?;
        let directory = catalog.load_or_seed()?;
        debug!(shelters = directory.len(), "session opened");

        Ok(Self {
            config,
            catalog,
            directory,
        })
    }

    pub fn shelter(&self, name: &str) -> anyhow::Result<&Shelter> {
        self.directory
            .get(name)
            .ok_or_else(|| self.unknown_shelter(name))
    }

    pub fn shelter_mut(&mut self, name: &str) -> anyhow::Result<&mut Shelter> {
        let error = self.unknown_shelter(name);
        self.directory.get_mut(name).ok_or(error)
    }

    fn unknown_shelter(&self, name: &str) -> anyhow::Error {
        let available: Vec<&str> = self.directory.iter().map(|s| s.name()).collect();
        anyhow!(
            "Shelter '{}' not found. Available shelters: {}",
            name,
            available.join(", ")
        )
    }

    /// Write the catalog back after a mutation
    pub fn save(&self) -> anyhow::Result<()> {
        let path = self.catalog.save(&self.directory)?;
        debug!(path = %path.display(), "catalog saved");
        Ok(())
    }

    pub fn archive(&self) -> anyhow::Result<FileArchive> {
        Ok(self.config.archive()?)
    }

    pub fn reports(&self) -> anyhow::Result<Reports> {
        Ok(self.config.reports()?)
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use tempfile::TempDir;

    /// Session over seed data in a fresh temporary directory
    pub(crate) fn seeded_session(tmp: &TempDir) -> Session {
        let config = AppConfig {
            data_dir: tmp.path().to_path_buf(),
            ..AppConfig::default()
        };
        Session::open(config).unwrap()
    }

    #[test]
    fn test_open_seeds_catalog() {
        let tmp = TempDir::new().unwrap();
        let session = seeded_session(&tmp);

        assert_eq!(session.directory.len(), 4);
        assert!(session.catalog.path().is_file());
    }

    #[test]
    fn test_unknown_shelter_lists_names() {
        let tmp = TempDir::new().unwrap();
        let session = seeded_session(&tmp);

        let err = session.shelter("Нет такого").unwrap_err();
        assert!(err.to_string().contains("Надежда"));
    }

    #[test]
    fn test_shelter_lookup_ignores_case() {
        let tmp = TempDir::new().unwrap();
        let mut session = seeded_session(&tmp);

        assert!(session.shelter("надежда").is_ok());
        assert!(session.shelter_mut("ЛЮБИМЕЦ").is_ok());
    }

    #[test]
    fn test_report_format_does_not_switch_catalog() {
        let tmp = TempDir::new().unwrap();
        let mut session = seeded_session(&tmp);
        session
            .shelter_mut("Надежда")
            .unwrap()
            .add_pet(shelter_domain::Animal::dog("Рекс", 3, 15.5, false, true, "Сухой корм").unwrap())
            .unwrap();
        session.save().unwrap();

        let xml_reports = AppConfig {
            report_format: shelter_adapter::ReportFormat::Xml,
            ..session.config.clone()
        };
        let reopened = Session::open(xml_reports).unwrap();
        assert_eq!(reopened.shelter("Надежда").unwrap().count(), 7);
        assert_eq!(reopened.catalog.path(), session.catalog.path());
    }
}
