//! Animal - A record of one animal living in a shelter
//!
//! Animal is a Value Object: two records with the same fields are the same
//! animal as far as the registry is concerned. All invariants are checked
//! once, at construction; there are no setters.

use thiserror::Error;

use super::kind::AnimalKind;

/// Weights closer than this are considered equal when looking for duplicates
pub const WEIGHT_EPSILON: f64 = 0.01;

/// Errors raised when constructing domain values from raw input
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ValidationError {
    #[error("name must not be empty")]
    EmptyName,

    #[error("age must be positive, got {age}")]
    NonPositiveAge { age: i64 },

    #[error("weight must be a positive number, got {weight}")]
    NonPositiveWeight { weight: f64 },

    #[error("capacity must be positive, got {capacity}")]
    NonPositiveCapacity { capacity: i64 },

    #[error("unknown animal kind '{kind}'")]
    UnknownKind { kind: String },

    #[error("missing field '{field}' for {kind}")]
    MissingField { kind: AnimalKind, field: &'static str },
}

/// Kind-specific part of an animal record
#[derive(Debug, Clone, PartialEq)]
pub enum AnimalDetails {
    Dog { trained: bool, food_type: String },
    Cat { vaccinated: bool, adoption_status: String },
    Rabbit { ear_type: String, giant: bool },
}

impl AnimalDetails {
    /// Free-text fields with surrounding whitespace removed
    fn trimmed(self) -> Self {
        match self {
            AnimalDetails::Dog { trained, food_type } => AnimalDetails::Dog {
                trained,
                food_type: food_type.trim().to_string(),
            },
            AnimalDetails::Cat {
                vaccinated,
                adoption_status,
            } => AnimalDetails::Cat {
                vaccinated,
                adoption_status: adoption_status.trim().to_string(),
            },
            AnimalDetails::Rabbit { ear_type, giant } => AnimalDetails::Rabbit {
                ear_type: ear_type.trim().to_string(),
                giant,
            },
        }
    }

    pub fn kind(&self) -> AnimalKind {
        match self {
            AnimalDetails::Dog { .. } => AnimalKind::Dog,
            AnimalDetails::Cat { .. } => AnimalKind::Cat,
            AnimalDetails::Rabbit { .. } => AnimalKind::Rabbit,
        }
    }
}

/// An animal record
#[derive(Debug, Clone, PartialEq)]
pub struct Animal {
    name: String,
    age: u32,
    weight: f64,
    claustrophobic: bool,
    details: AnimalDetails,
}

impl Animal {
    /// Create a new Animal, validating the common fields
    ///
    /// The name and the free-text details are stored trimmed.
    pub fn new(
        name: impl Into<String>,
        age: u32,
        weight: f64,
        claustrophobic: bool,
        details: AnimalDetails,
    ) -> Result<Self, ValidationError> {
        let name: String = name.into();
        let name = name.trim().to_string();
        if name.is_empty() {
            return Err(ValidationError::EmptyName);
        }
        if age == 0 {
            return Err(ValidationError::NonPositiveAge { age: 0 });
        }
        if !weight.is_finite() || weight <= 0.0 {
            return Err(ValidationError::NonPositiveWeight { weight });
        }

        Ok(Self {
            name,
            age,
            weight,
            claustrophobic,
            details: details.trimmed(),
        })
    }

    pub fn dog(
        name: impl Into<String>,
        age: u32,
        weight: f64,
        claustrophobic: bool,
        trained: bool,
        food_type: impl Into<String>,
    ) -> Result<Self, ValidationError> {
        Self::new(
            name,
            age,
            weight,
            claustrophobic,
            AnimalDetails::Dog {
                trained,
                food_type: food_type.into(),
            },
        )
    }

    pub fn cat(
        name: impl Into<String>,
        age: u32,
        weight: f64,
        claustrophobic: bool,
        vaccinated: bool,
        adoption_status: impl Into<String>,
    ) -> Result<Self, ValidationError> {
        Self::new(
            name,
            age,
            weight,
            claustrophobic,
            AnimalDetails::Cat {
                vaccinated,
                adoption_status: adoption_status.into(),
            },
        )
    }

    pub fn rabbit(
        name: impl Into<String>,
        age: u32,
        weight: f64,
        claustrophobic: bool,
        ear_type: impl Into<String>,
        giant: bool,
    ) -> Result<Self, ValidationError> {
        Self::new(
            name,
            age,
            weight,
            claustrophobic,
            AnimalDetails::Rabbit {
                ear_type: ear_type.into(),
                giant,
            },
        )
    }

    // ========== Getters ==========

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn age(&self) -> u32 {
        self.age
    }

    pub fn weight(&self) -> f64 {
        self.weight
    }

    pub fn claustrophobic(&self) -> bool {
        self.claustrophobic
    }

    pub fn details(&self) -> &AnimalDetails {
        &self.details
    }

    pub fn kind(&self) -> AnimalKind {
        self.details.kind()
    }

    /// Case-insensitive name comparison, ignoring surrounding whitespace
    pub fn has_name(&self, name: &str) -> bool {
        names_match(&self.name, name)
    }

    /// Whether `other` describes the same animal for duplicate detection:
    /// same name ignoring case, same age, weight within [`WEIGHT_EPSILON`]
    /// and same kind.
    pub fn is_equivalent(&self, other: &Animal) -> bool {
        self.has_name(&other.name)
            && self.age == other.age
            && (self.weight - other.weight).abs() < WEIGHT_EPSILON
            && self.kind() == other.kind()
    }
}

impl core::fmt::Display for Animal {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(
            f,
            "{} {}, age {}, weight {} kg, claustrophobic: {}",
            self.kind(),
            self.name,
            self.age,
            self.weight,
            if self.claustrophobic { "yes" } else { "no" }
        )?;
        match &self.details {
            AnimalDetails::Dog { trained, food_type } => {
                write!(f, ", trained: {}, food: {}", yes_no(*trained), food_type)
            }
            AnimalDetails::Cat {
                vaccinated,
                adoption_status,
            } => write!(
                f,
                ", vaccinated: {}, status: {}",
                yes_no(*vaccinated),
                adoption_status
            ),
            AnimalDetails::Rabbit { ear_type, giant } => {
                write!(f, ", ears: {}, giant: {}", ear_type, yes_no(*giant))
            }
        }
    }
}

/// Name equality used for lookups and duplicate detection
pub(crate) fn names_match(a: &str, b: &str) -> bool {
    a.trim().to_lowercase() == b.trim().to_lowercase()
}

fn yes_no(flag: bool) -> &'static str {
    if flag {
        "yes"
    } else {
        "no"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_animal_creation() {
        let rex = Animal::dog("Рекс", 3, 15.5, false, true, "Сухой корм").unwrap();

        assert_eq!(rex.name(), "Рекс");
        assert_eq!(rex.age(), 3);
        assert_eq!(rex.weight(), 15.5);
        assert!(!rex.claustrophobic());
        assert_eq!(rex.kind(), AnimalKind::Dog);
        assert_eq!(
            rex.details(),
            &AnimalDetails::Dog {
                trained: true,
                food_type: "Сухой корм".to_string()
            }
        );
    }

    #[test]
    fn test_validation() {
        assert_eq!(
            Animal::cat("  ", 1, 3.0, false, true, "Ищет дом"),
            Err(ValidationError::EmptyName)
        );
        assert_eq!(
            Animal::cat("Васька", 0, 3.0, false, true, "Ищет дом"),
            Err(ValidationError::NonPositiveAge { age: 0 })
        );
        assert!(matches!(
            Animal::rabbit("Хлопок", 1, 0.0, false, "Вислоухий", false),
            Err(ValidationError::NonPositiveWeight { .. })
        ));
        assert!(matches!(
            Animal::rabbit("Хлопок", 1, f64::NAN, false, "Вислоухий", false),
            Err(ValidationError::NonPositiveWeight { .. })
        ));
    }

    #[test]
    fn test_equivalence_ignores_case_and_tiny_weight_drift() {
        let a = Animal::dog("Барон", 5, 20.0, true, true, "Натуральный корм").unwrap();
        let b = Animal::dog("БАРОН", 5, 20.005, false, false, "Сухой корм").unwrap();
        let heavier = Animal::dog("Барон", 5, 20.5, true, true, "Натуральный корм").unwrap();
        let cat = Animal::cat("Барон", 5, 20.0, true, true, "Ищет дом").unwrap();

        assert!(a.is_equivalent(&b));
        assert!(!a.is_equivalent(&heavier));
        assert!(!a.is_equivalent(&cat));
    }

    #[test]
    fn test_value_equality() {
        let a = Animal::rabbit("Ушастик", 1, 2.0, false, "Вислоухий", false).unwrap();
        let b = Animal::rabbit("Ушастик", 1, 2.0, false, "Вислоухий", false).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_display() {
        let cat = Animal::cat("Мурка", 2, 4.5, false, true, "Ищет дом").unwrap();
        assert_eq!(
            cat.to_string(),
            "Cat Мурка, age 2, weight 4.5 kg, claustrophobic: no, vaccinated: yes, status: Ищет дом"
        );
    }

    #[test]
    fn test_text_fields_are_trimmed() {
        let rex = Animal::dog(" Rex ", 3, 15.5, false, true, " dry ").unwrap();
        assert_eq!(rex.name(), "Rex");
        assert_eq!(
            rex.details(),
            &AnimalDetails::Dog {
                trained: true,
                food_type: "dry".to_string()
            }
        );

        let cat = Animal::cat("Мурка", 2, 4.5, false, true, "  Ищет дом").unwrap();
        assert_eq!(
            cat.details(),
            &AnimalDetails::Cat {
                vaccinated: true,
                adoption_status: "Ищет дом".to_string()
            }
        );
    }

    #[test]
    fn test_has_name_ignores_padding_and_case() {
        let rex = Animal::dog("Rex ", 3, 15.5, false, true, "dry").unwrap();
        assert!(rex.has_name("rex"));
        assert!(rex.has_name("  REX "));
        assert!(!rex.has_name("Rexy"));
        assert!(rex.is_equivalent(&Animal::dog(" rex", 3, 15.5, false, false, "").unwrap()));
    }
}
