//! AnimalKind - The fixed set of animal kinds a shelter takes in
//!
//! Filtering compares the declared kind tag of each record. Records that
//! were rehydrated from a file carry the same tag as live ones, so a query
//! never depends on how a record was produced.

use super::animal::{Animal, ValidationError};

/// Logical kind tag of an animal record
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum AnimalKind {
    Dog,
    Cat,
    Rabbit,
}

impl AnimalKind {
    /// Every kind, in display order
    pub const ALL: [AnimalKind; 3] = [AnimalKind::Dog, AnimalKind::Cat, AnimalKind::Rabbit];

    pub fn as_str(&self) -> &'static str {
        match self {
            AnimalKind::Dog => "Dog",
            AnimalKind::Cat => "Cat",
            AnimalKind::Rabbit => "Rabbit",
        }
    }
}

impl core::fmt::Display for AnimalKind {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl core::str::FromStr for AnimalKind {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        AnimalKind::ALL
            .into_iter()
            .find(|kind| kind.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| ValidationError::UnknownKind {
                kind: s.to_string(),
            })
    }
}

/// Kind selector for queries
///
/// `All` stands for the common supertype: no kind restriction at all.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum KindFilter {
    #[default]
    All,
    Only(AnimalKind),
}

impl KindFilter {
    pub fn matches(&self, animal: &Animal) -> bool {
        match self {
            KindFilter::All => true,
            KindFilter::Only(kind) => animal.kind() == *kind,
        }
    }
}

impl From<AnimalKind> for KindFilter {
    fn from(kind: AnimalKind) -> Self {
        KindFilter::Only(kind)
    }
}

impl From<Option<AnimalKind>> for KindFilter {
    fn from(kind: Option<AnimalKind>) -> Self {
        kind.map_or(KindFilter::All, KindFilter::Only)
    }
}

/// Yard predicate applied on top of a kind filter
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum YardFilter {
    /// No restriction
    #[default]
    Any,
    /// Only animals that need an open yard (claustrophobic ones)
    RequiresOpenYard,
    /// Only animals the shelter can house: not claustrophobic, or the
    /// shelter has an open yard
    HousingCompatible,
}

impl YardFilter {
    pub fn matches(&self, animal: &Animal, has_open_yard: bool) -> bool {
        match self {
            YardFilter::Any => true,
            YardFilter::RequiresOpenYard => animal.claustrophobic(),
            YardFilter::HousingCompatible => !animal.claustrophobic() || has_open_yard,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_parse_is_case_insensitive() {
        assert_eq!("dog".parse::<AnimalKind>().unwrap(), AnimalKind::Dog);
        assert_eq!(" RABBIT ".parse::<AnimalKind>().unwrap(), AnimalKind::Rabbit);
        assert!(matches!(
            "hamster".parse::<AnimalKind>(),
            Err(ValidationError::UnknownKind { .. })
        ));
    }

    #[test]
    fn test_kind_filter_from_option() {
        assert_eq!(KindFilter::from(None::<AnimalKind>), KindFilter::All);
        assert_eq!(
            KindFilter::from(Some(AnimalKind::Cat)),
            KindFilter::Only(AnimalKind::Cat)
        );
    }

    #[test]
    fn test_yard_filter() {
        let calm = Animal::cat("Мурка", 2, 4.5, false, true, "Ищет дом").unwrap();
        let nervous = Animal::cat("Пушок", 3, 5.2, true, true, "На карантине").unwrap();

        assert!(YardFilter::Any.matches(&nervous, false));

        assert!(YardFilter::RequiresOpenYard.matches(&nervous, false));
        assert!(!YardFilter::RequiresOpenYard.matches(&calm, true));

        assert!(YardFilter::HousingCompatible.matches(&calm, false));
        assert!(YardFilter::HousingCompatible.matches(&nervous, true));
        assert!(!YardFilter::HousingCompatible.matches(&nervous, false));
    }
}
