//! # Shelter Adapter Layer
//!
//! Everything that touches the file system (Hexagonal Architecture adapters).
//!
//! ## Structure
//!
//! - `record`  - Serialized forms and their conversion to domain types
//! - `storage` - Key-addressed file store in JSON or XML
//! - `archive` - `AnimalArchive` implementation mirroring new animals
//! - `catalog` - Shelter set persistence with seed fallback
//! - `report`  - Selection reports and format conversion
//! - `seed`    - Initial shelters and animals
//! - `config`  - Application configuration

pub mod archive;
pub mod catalog;
pub mod config;
pub mod error;
pub mod record;
pub mod report;
pub mod seed;
pub mod storage;

pub use archive::FileArchive;
pub use catalog::Catalog;
pub use config::AppConfig;
pub use error::{Result, StorageError};
pub use report::Reports;
pub use storage::{FileStore, ReportFormat};
