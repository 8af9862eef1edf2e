//! Shared command-line arguments

use std::path::{Path, PathBuf};

use clap::{Args, ValueEnum};
use shelter_adapter::{AppConfig, ReportFormat};
use shelter_domain::{AnimalKind, KindFilter, YardFilter};

/// Options accepted by every subcommand
#[derive(Debug, Clone, Default, Args)]
pub struct GlobalArgs {
    /// Configuration file (JSON or YAML); defaults to ./shelter.{yaml,yml,json}
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Directory holding the catalog and reports
    #[arg(short, long, global = true)]
    pub data_dir: Option<PathBuf>,

    /// Report format
    #[arg(short, long, global = true, value_enum)]
    pub format: Option<FormatArg>,
}

impl GlobalArgs {
    /// Configuration file values with command-line overrides applied
    pub fn resolve(&self, cwd: &Path) -> anyhow::Result<AppConfig> {
        let mut config = match &self.config {
            Some(path) => AppConfig::from_file(path)?,
            None => AppConfig::discover(cwd)?,
        };

        if let Some(dir) = &self.data_dir {
            config.data_dir = dir.clone();
        }
        if let Some(format) = self.format {
            config.report_format = format.into();
        }
        Ok(config)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum KindArg {
    Dog,
    Cat,
    Rabbit,
}

impl From<KindArg> for AnimalKind {
    fn from(kind: KindArg) -> Self {
        match kind {
            KindArg::Dog => AnimalKind::Dog,
            KindArg::Cat => AnimalKind::Cat,
            KindArg::Rabbit => AnimalKind::Rabbit,
        }
    }
}

/// No kind means every kind
pub fn kind_filter(kind: Option<KindArg>) -> KindFilter {
    KindFilter::from(kind.map(AnimalKind::from))
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum FormatArg {
    Json,
    Xml,
}

impl From<FormatArg> for ReportFormat {
    fn from(format: FormatArg) -> Self {
        match format {
            FormatArg::Json => ReportFormat::Json,
            FormatArg::Xml => ReportFormat::Xml,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum YardArg {
    /// Every animal
    #[default]
    Any,
    /// Only animals that need an open yard
    RequiresOpenYard,
    /// Only animals the shelter can house
    Compatible,
}

impl From<YardArg> for YardFilter {
    fn from(yard: YardArg) -> Self {
        match yard {
            YardArg::Any => YardFilter::Any,
            YardArg::RequiresOpenYard => YardFilter::RequiresOpenYard,
            YardArg::Compatible => YardFilter::HousingCompatible,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_kind_filter() {
        assert_eq!(kind_filter(None), KindFilter::All);
        assert_eq!(
            kind_filter(Some(KindArg::Rabbit)),
            KindFilter::Only(AnimalKind::Rabbit)
        );
    }

    #[test]
    fn test_resolve_defaults() {
        let tmp = TempDir::new().unwrap();
        let config = GlobalArgs::default().resolve(tmp.path()).unwrap();
        assert_eq!(config, AppConfig::default());
    }

    #[test]
    fn test_resolve_overrides_file() {
        let tmp = TempDir::new().unwrap();
        std::fs::write(
            tmp.path().join("shelter.json"),
            r#"{"dataDir":"from-file","reportFormat":"json"}"#,
        )
        .unwrap();

        let args = GlobalArgs {
            config: None,
            data_dir: Some(PathBuf::from("from-flag")),
            format: Some(FormatArg::Xml),
        };
        let config = args.resolve(tmp.path()).unwrap();

        assert_eq!(config.data_dir, PathBuf::from("from-flag"));
        assert_eq!(config.report_format, ReportFormat::Xml);
    }

    #[test]
    fn test_explicit_missing_config_fails() {
        let tmp = TempDir::new().unwrap();
        let args = GlobalArgs {
            config: Some(tmp.path().join("missing.yaml")),
            ..Default::default()
        };
        assert!(args.resolve(tmp.path()).is_err());
    }
}
