//! Serialized forms of domain types
//!
//! Records are plain data with public fields so both encoders can walk
//! them. Turning a record into a domain value re-checks every invariant;
//! the other direction cannot fail.
//!
//! The XML layout of a report looks like:
//!
//! ```xml
//! <report>
//!   <animal>
//!     <kind>Dog</kind>
//!     <name>Рекс</name>
//!     <age>3</age>
//!     <weight>15.5</weight>
//!     <claustrophobic>false</claustrophobic>
//!     <trained>true</trained>
//!     <foodType>Сухой корм</foodType>
//!   </animal>
//! </report>
//! ```

use serde::{Deserialize, Serialize};
use shelter_domain::{
    Animal, AnimalDetails, AnimalKind, Shelter, ShelterDirectory, ValidationError,
};

use crate::error::StorageError;

/// One animal, flattened: the kind tag plus the fields of every kind
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename = "animal", rename_all = "camelCase")]
pub struct AnimalRecord {
    pub kind: String,
    pub name: String,
    pub age: i64,
    pub weight: f64,
    #[serde(default)]
    pub claustrophobic: bool,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub trained: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub food_type: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub vaccinated: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub adoption_status: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ear_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub giant: Option<bool>,
}

impl From<&Animal> for AnimalRecord {
    fn from(animal: &Animal) -> Self {
        let mut record = AnimalRecord {
            kind: animal.kind().to_string(),
            name: animal.name().to_string(),
            age: i64::from(animal.age()),
            weight: animal.weight(),
            claustrophobic: animal.claustrophobic(),
            trained: None,
            food_type: None,
            vaccinated: None,
            adoption_status: None,
            ear_type: None,
            giant: None,
        };

        match animal.details() {
            AnimalDetails::Dog { trained, food_type } => {
                record.trained = Some(*trained);
                record.food_type = Some(food_type.clone());
            }
            AnimalDetails::Cat {
                vaccinated,
                adoption_status,
            } => {
                record.vaccinated = Some(*vaccinated);
                record.adoption_status = Some(adoption_status.clone());
            }
            AnimalDetails::Rabbit { ear_type, giant } => {
                record.ear_type = Some(ear_type.clone());
                record.giant = Some(*giant);
            }
        }

        record
    }
}

impl TryFrom<AnimalRecord> for Animal {
    type Error = ValidationError;

    fn try_from(record: AnimalRecord) -> Result<Self, Self::Error> {
        let kind: AnimalKind = record.kind.parse()?;
        let age = u32::try_from(record.age)
            .ok()
            .filter(|age| *age > 0)
            .ok_or(ValidationError::NonPositiveAge { age: record.age })?;

        let required = |flag: Option<bool>, field: &'static str| {
            flag.ok_or(ValidationError::MissingField { kind, field })
        };

        let details = match kind {
            AnimalKind::Dog => AnimalDetails::Dog {
                trained: required(record.trained, "trained")?,
                food_type: record.food_type.unwrap_or_default(),
            },
            AnimalKind::Cat => AnimalDetails::Cat {
                vaccinated: required(record.vaccinated, "vaccinated")?,
                adoption_status: record.adoption_status.unwrap_or_default(),
            },
            AnimalKind::Rabbit => AnimalDetails::Rabbit {
                ear_type: record.ear_type.unwrap_or_default(),
                giant: required(record.giant, "giant")?,
            },
        };

        Animal::new(record.name, age, record.weight, record.claustrophobic, details)
    }
}

/// A shelter with its animals
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename = "shelter", rename_all = "camelCase")]
pub struct ShelterRecord {
    pub name: String,
    pub capacity: i64,
    pub has_open_yard: bool,
    #[serde(rename = "animal", default)]
    pub animals: Vec<AnimalRecord>,
}

impl From<&Shelter> for ShelterRecord {
    fn from(shelter: &Shelter) -> Self {
        Self {
            name: shelter.name().to_string(),
            capacity: shelter.capacity() as i64,
            has_open_yard: shelter.has_open_yard(),
            animals: shelter.animals().iter().map(AnimalRecord::from).collect(),
        }
    }
}

impl TryFrom<ShelterRecord> for Shelter {
    type Error = StorageError;

    /// Animals are re-admitted one by one, so a file that breaks the
    /// capacity or housing rule is rejected rather than loaded.
    fn try_from(record: ShelterRecord) -> Result<Self, Self::Error> {
        let capacity = usize::try_from(record.capacity)
            .ok()
            .filter(|capacity| *capacity > 0)
            .ok_or(ValidationError::NonPositiveCapacity {
                capacity: record.capacity,
            })?;

        let mut shelter = Shelter::new(record.name, capacity, record.has_open_yard)?;
        for animal in record.animals {
            shelter.add_pet(Animal::try_from(animal)?)?;
        }
        Ok(shelter)
    }
}

/// Root of the catalog file: every shelter
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename = "shelters")]
pub struct ShelterSet {
    #[serde(rename = "shelter", default)]
    pub shelters: Vec<ShelterRecord>,
}

impl From<&ShelterDirectory> for ShelterSet {
    fn from(directory: &ShelterDirectory) -> Self {
        Self {
            shelters: directory.iter().map(ShelterRecord::from).collect(),
        }
    }
}

impl TryFrom<ShelterSet> for ShelterDirectory {
    type Error = StorageError;

    fn try_from(set: ShelterSet) -> Result<Self, Self::Error> {
        let shelters = set
            .shelters
            .into_iter()
            .map(Shelter::try_from)
            .collect::<Result<Vec<_>, _>>()?;
        Ok(ShelterDirectory::new(shelters))
    }
}

/// Root of a report file: a list of animals
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename = "report")]
pub struct AnimalReport {
    #[serde(rename = "animal", default)]
    pub animals: Vec<AnimalRecord>,
}

impl AnimalReport {
    pub fn from_animals<'a>(animals: impl IntoIterator<Item = &'a Animal>) -> Self {
        Self {
            animals: animals.into_iter().map(AnimalRecord::from).collect(),
        }
    }

    pub fn into_animals(self) -> Result<Vec<Animal>, ValidationError> {
        self.animals.into_iter().map(Animal::try_from).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dog_record() -> AnimalRecord {
        AnimalRecord {
            kind: "Dog".to_string(),
            name: "Барон".to_string(),
            age: 5,
            weight: 20.0,
            claustrophobic: true,
            trained: Some(true),
            food_type: Some("Натуральный корм".to_string()),
            vaccinated: None,
            adoption_status: None,
            ear_type: None,
            giant: None,
        }
    }

    #[test]
    fn test_record_from_animal_only_fills_own_fields() {
        let rabbit = Animal::rabbit("Пушистик", 2, 3.5, true, "Прямоухий", true).unwrap();
        let record = AnimalRecord::from(&rabbit);

        assert_eq!(record.kind, "Rabbit");
        assert_eq!(record.ear_type.as_deref(), Some("Прямоухий"));
        assert_eq!(record.giant, Some(true));
        assert_eq!(record.trained, None);
        assert_eq!(record.vaccinated, None);
    }

    #[test]
    fn test_record_to_animal() {
        let animal = Animal::try_from(dog_record()).unwrap();

        assert_eq!(animal.kind(), AnimalKind::Dog);
        assert_eq!(animal.name(), "Барон");
        assert!(animal.claustrophobic());
    }

    #[test]
    fn test_record_validation() {
        let mut negative = dog_record();
        negative.age = -2;
        assert_eq!(
            Animal::try_from(negative),
            Err(ValidationError::NonPositiveAge { age: -2 })
        );

        let mut missing = dog_record();
        missing.trained = None;
        assert_eq!(
            Animal::try_from(missing),
            Err(ValidationError::MissingField {
                kind: AnimalKind::Dog,
                field: "trained"
            })
        );

        let mut unknown = dog_record();
        unknown.kind = "Parrot".to_string();
        assert!(matches!(
            Animal::try_from(unknown),
            Err(ValidationError::UnknownKind { .. })
        ));
    }

    #[test]
    fn test_shelter_record_enforces_housing() {
        let record = ShelterRecord {
            name: "Любимец".to_string(),
            capacity: 12,
            has_open_yard: false,
            animals: vec![dog_record()],
        };

        assert!(matches!(
            Shelter::try_from(record),
            Err(StorageError::Inconsistent(_))
        ));
    }

    #[test]
    fn test_shelter_record_rejects_zero_capacity() {
        let record = ShelterRecord {
            name: "Пусто".to_string(),
            capacity: 0,
            has_open_yard: true,
            animals: Vec::new(),
        };

        assert!(matches!(
            Shelter::try_from(record),
            Err(StorageError::InvalidRecord(ValidationError::NonPositiveCapacity { .. }))
        ));
    }

    #[test]
    fn test_directory_through_shelter_set() {
        let mut shelter = Shelter::new("Надежда", 20, true).unwrap();
        shelter.add_pet(Animal::try_from(dog_record()).unwrap()).unwrap();
        let directory = ShelterDirectory::new(vec![shelter]);

        let set = ShelterSet::from(&directory);
        assert_eq!(set.shelters.len(), 1);
        assert_eq!(set.shelters[0].animals.len(), 1);

        let restored = ShelterDirectory::try_from(set).unwrap();
        assert_eq!(restored, directory);
    }
}
