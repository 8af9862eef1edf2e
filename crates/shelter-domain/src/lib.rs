//! # Shelter Domain Layer
//!
//! Pure business logic for the pet shelter registry.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────┐
//! │                    Domain Layer (This Crate)                     │
//! │  ┌─────────────────────────────────────────────────────────────┐│
//! │  │  model/     - Animal, AnimalKind, Shelter                   ││
//! │  │  repository/- Port traits (not implementations)             ││
//! │  │  service/   - Statistics, shelter directory                 ││
//! │  └─────────────────────────────────────────────────────────────┘│
//! └─────────────────────────────────────────────────────────────────┘
//! ```
//!
//! No file formats, no file system. The archive that mirrors new animals
//! to disk is reached through [`AnimalArchive`] only.

pub mod model;
pub mod repository;
pub mod service;

// Re-export commonly used types
pub use model::{
    animal::{Animal, AnimalDetails, ValidationError},
    kind::{AnimalKind, KindFilter, YardFilter},
    shelter::{Shelter, ShelterError},
};

pub use repository::archive::{AnimalArchive, ArchiveError, NoArchive};

pub use service::{directory::ShelterDirectory, statistics::ShelterStatistics};
