//! Shelter - A capacity-bounded home for animals
//!
//! Shelter is an Entity. It owns its animals and guards three rules:
//!
//! - never more animals than `capacity`
//! - a claustrophobic animal only lives where there is an open yard
//! - `add` refuses an animal equivalent to one already present
//!
//! `add_pet` is the plain admission path used for seeding and restoring
//! persisted state: it checks the first two rules only and never touches
//! the archive.

use thiserror::Error;
use tracing::{debug, info, warn};

use super::animal::{names_match, Animal, ValidationError};
use super::kind::{AnimalKind, KindFilter, YardFilter};
use crate::repository::archive::AnimalArchive;

/// Errors raised by registry mutations
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ShelterError {
    #[error("shelter '{shelter}' is full (capacity {capacity})")]
    CapacityExceeded { shelter: String, capacity: usize },

    #[error("'{animal}' is claustrophobic and shelter '{shelter}' has no open yard")]
    IncompatibleHousing { shelter: String, animal: String },

    #[error("an animal like '{animal}' already lives in shelter '{shelter}'")]
    DuplicateAnimal { shelter: String, animal: String },

    #[error("'{animal}' was not found in shelter '{shelter}'")]
    NotFound { shelter: String, animal: String },
}

/// A shelter and the animals it houses
#[derive(Debug, Clone, PartialEq)]
pub struct Shelter {
    name: String,
    capacity: usize,
    has_open_yard: bool,
    animals: Vec<Animal>,
}

impl Shelter {
    /// Create an empty shelter
    pub fn new(
        name: impl Into<String>,
        capacity: usize,
        has_open_yard: bool,
    ) -> Result<Self, ValidationError> {
        let name: String = name.into();
        let name = name.trim().to_string();
        if name.is_empty() {
            return Err(ValidationError::EmptyName);
        }
        if capacity == 0 {
            return Err(ValidationError::NonPositiveCapacity { capacity: 0 });
        }

        Ok(Self {
            name,
            capacity,
            has_open_yard,
            animals: Vec::new(),
        })
    }

    // ========== Getters ==========

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Case-insensitive name comparison, ignoring surrounding whitespace
    pub fn has_name(&self, name: &str) -> bool {
        names_match(&self.name, name)
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn has_open_yard(&self) -> bool {
        self.has_open_yard
    }

    pub fn animals(&self) -> &[Animal] {
        &self.animals
    }

    pub fn is_full(&self) -> bool {
        self.animals.len() >= self.capacity
    }

    pub fn available_space(&self) -> usize {
        self.capacity.saturating_sub(self.animals.len())
    }

    // ========== Mutations ==========

    /// Admit an animal, checking capacity and housing only
    pub fn add_pet(&mut self, animal: Animal) -> Result<&Animal, ShelterError> {
        self.check_admission(&animal)?;
        Ok(self.push(animal))
    }

    /// Admit an animal with duplicate detection, then mirror it to `archive`
    ///
    /// An archive failure is logged and swallowed: the animal stays admitted.
    pub fn add(
        &mut self,
        animal: Animal,
        archive: &dyn AnimalArchive,
    ) -> Result<&Animal, ShelterError> {
        self.check_admission(&animal)?;

        if self.animals.iter().any(|a| a.is_equivalent(&animal)) {
            return Err(ShelterError::DuplicateAnimal {
                shelter: self.name.clone(),
                animal: animal.name().to_string(),
            });
        }

        if let Err(e) = archive.archive(&animal) {
            warn!(shelter = %self.name, error = %e, "archiving new animal failed");
        }

        Ok(self.push(animal))
    }

    /// Remove the first record equal to `animal`
    pub fn remove(&mut self, animal: &Animal) -> Result<Animal, ShelterError> {
        let index = self
            .animals
            .iter()
            .position(|a| a == animal)
            .ok_or_else(|| ShelterError::NotFound {
                shelter: self.name.clone(),
                animal: animal.name().to_string(),
            })?;

        let removed = self.animals.remove(index);
        info!(shelter = %self.name, animal = %removed.name(), "animal removed");
        Ok(removed)
    }

    fn check_admission(&self, animal: &Animal) -> Result<(), ShelterError> {
        if self.is_full() {
            return Err(ShelterError::CapacityExceeded {
                shelter: self.name.clone(),
                capacity: self.capacity,
            });
        }
        if animal.claustrophobic() && !self.has_open_yard {
            return Err(ShelterError::IncompatibleHousing {
                shelter: self.name.clone(),
                animal: animal.name().to_string(),
            });
        }
        Ok(())
    }

    fn push(&mut self, animal: Animal) -> &Animal {
        info!(
            shelter = %self.name,
            animal = %animal.name(),
            kind = %animal.kind(),
            "animal admitted"
        );
        self.animals.push(animal);
        &self.animals[self.animals.len() - 1]
    }

    // ========== Queries ==========

    pub fn count(&self) -> usize {
        self.animals.len()
    }

    pub fn count_kind(&self, kind: AnimalKind) -> usize {
        self.animals.iter().filter(|a| a.kind() == kind).count()
    }

    /// Integer share of `kind` among all animals; 0 for an empty shelter
    pub fn percentage(&self, kind: AnimalKind) -> u32 {
        match self.count() {
            0 => 0,
            total => (self.count_kind(kind) * 100 / total) as u32,
        }
    }

    pub fn filter(&self, kind: impl Into<KindFilter>) -> Vec<&Animal> {
        let kind = kind.into();
        let found: Vec<&Animal> = self.animals.iter().filter(|a| kind.matches(a)).collect();
        debug!(shelter = %self.name, ?kind, found = found.len(), "filter");
        found
    }

    pub fn filter_with(&self, kind: impl Into<KindFilter>, yard: YardFilter) -> Vec<&Animal> {
        self.filter(kind)
            .into_iter()
            .filter(|a| yard.matches(a, self.has_open_yard))
            .collect()
    }

    /// First animal with the given name (case-insensitive) matching `kind`
    pub fn find(&self, name: &str, kind: impl Into<KindFilter>) -> Option<&Animal> {
        let kind = kind.into();
        self.animals
            .iter()
            .find(|a| a.has_name(name) && kind.matches(a))
    }
}
