//! Animal Archive - Where newly admitted animals get mirrored
//!
//! The in-memory shelter is authoritative. The archive is an advisory copy,
//! so its failures are reported to the caller of `archive()` but never undo
//! a registry mutation.

use thiserror::Error;

use crate::model::animal::Animal;

/// Error reported by an archive implementation
#[derive(Debug, Error)]
#[error("failed to archive '{animal}': {message}")]
pub struct ArchiveError {
    pub animal: String,
    pub message: String,
}

impl ArchiveError {
    pub fn new(animal: &Animal, message: impl Into<String>) -> Self {
        Self {
            animal: animal.name().to_string(),
            message: message.into(),
        }
    }
}

/// Archive Port
///
/// Called by `Shelter::add` after an animal has been admitted.
pub trait AnimalArchive {
    fn archive(&self, animal: &Animal) -> Result<(), ArchiveError>;
}

/// Archive that keeps nothing
#[derive(Debug, Clone, Copy, Default)]
pub struct NoArchive;

impl AnimalArchive for NoArchive {
    fn archive(&self, _animal: &Animal) -> Result<(), ArchiveError> {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;

    struct RecordingArchive {
        names: RefCell<Vec<String>>,
    }

    impl AnimalArchive for RecordingArchive {
        fn archive(&self, animal: &Animal) -> Result<(), ArchiveError> {
            self.names.borrow_mut().push(animal.name().to_string());
            Ok(())
        }
    }

    #[test]
    fn test_archive_through_trait_object() {
        let recording = RecordingArchive {
            names: RefCell::new(Vec::new()),
        };
        let archive: &dyn AnimalArchive = &recording;

        let rex = Animal::dog("Рекс", 3, 15.5, false, true, "Сухой корм").unwrap();
        archive.archive(&rex).unwrap();
        NoArchive.archive(&rex).unwrap();

        assert_eq!(recording.names.borrow().as_slice(), ["Рекс"]);
    }

    #[test]
    fn test_error_message() {
        let rex = Animal::dog("Рекс", 3, 15.5, false, true, "Сухой корм").unwrap();
        let err = ArchiveError::new(&rex, "disk full");
        assert_eq!(err.to_string(), "failed to archive 'Рекс': disk full");
    }
}
