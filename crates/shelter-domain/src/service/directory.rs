//! ShelterDirectory - The list of shelters the user picks from

use tracing::debug;

use crate::model::kind::KindFilter;
use crate::model::shelter::Shelter;

/// All shelters known to the application, in load order
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ShelterDirectory {
    shelters: Vec<Shelter>,
}

impl ShelterDirectory {
    pub fn new(shelters: Vec<Shelter>) -> Self {
        Self { shelters }
    }

    pub fn len(&self) -> usize {
        self.shelters.len()
    }

    pub fn is_empty(&self) -> bool {
        self.shelters.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Shelter> {
        self.shelters.iter()
    }

    /// Look a shelter up by name (case-insensitive)
    pub fn get(&self, name: &str) -> Option<&Shelter> {
        self.shelters.iter().find(|s| s.has_name(name))
    }

    pub fn get_mut(&mut self, name: &str) -> Option<&mut Shelter> {
        self.shelters.iter_mut().find(|s| s.has_name(name))
    }

    /// Shelters matching the selection filter
    ///
    /// With `open_yard_only` only shelters with an open yard are kept. With a
    /// kind, only shelters housing at least one animal of that kind are kept.
    pub fn select(&self, kind: impl Into<KindFilter>, open_yard_only: bool) -> Vec<&Shelter> {
        let kind = kind.into();
        let selected: Vec<&Shelter> = self
            .shelters
            .iter()
            .filter(|s| !open_yard_only || s.has_open_yard())
            .filter(|s| match kind {
                KindFilter::All => true,
                KindFilter::Only(_) => !s.filter(kind).is_empty(),
            })
            .collect();

        debug!(?kind, open_yard_only, selected = selected.len(), "shelters selected");
        selected
    }

    pub fn into_inner(self) -> Vec<Shelter> {
        self.shelters
    }
}

impl From<Vec<Shelter>> for ShelterDirectory {
    fn from(shelters: Vec<Shelter>) -> Self {
        Self::new(shelters)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::animal::Animal;
    use crate::model::kind::AnimalKind;

    fn directory() -> ShelterDirectory {
        let mut paws = Shelter::new("Добрые лапки", 15, true).unwrap();
        paws.add_pet(Animal::dog("Рекс", 3, 15.5, false, true, "Сухой корм").unwrap())
            .unwrap();

        let mut friend = Shelter::new("Верный друг", 10, false).unwrap();
        friend
            .add_pet(Animal::cat("Васька", 1, 3.0, false, false, "Готов к адопции").unwrap())
            .unwrap();

        let empty = Shelter::new("Любимец", 12, false).unwrap();

        ShelterDirectory::new(vec![paws, friend, empty])
    }

    #[test]
    fn test_select_all() {
        let dir = directory();
        assert_eq!(dir.select(KindFilter::All, false).len(), 3);
    }

    #[test]
    fn test_select_open_yard_only() {
        let dir = directory();
        let names: Vec<&str> = dir.select(KindFilter::All, true).iter().map(|s| s.name()).collect();
        assert_eq!(names, ["Добрые лапки"]);
    }

    #[test]
    fn test_select_by_kind() {
        let dir = directory();
        let names: Vec<&str> = dir.select(AnimalKind::Cat, false).iter().map(|s| s.name()).collect();
        assert_eq!(names, ["Верный друг"]);

        assert!(dir.select(AnimalKind::Cat, true).is_empty());
        assert!(dir.select(AnimalKind::Rabbit, false).is_empty());
    }

    #[test]
    fn test_lookup_by_name() {
        let mut dir = directory();
        assert!(dir.get("верный друг").is_some());
        assert!(dir.get("Надежда").is_none());

        let shelter = dir.get_mut("Любимец").unwrap();
        shelter
            .add_pet(Animal::rabbit("Попрыгун", 2, 2.5, false, "Вислоухий", false).unwrap())
            .unwrap();
        assert_eq!(dir.get("Любимец").unwrap().count(), 1);
    }

    #[test]
    fn test_lookup_ignores_padding() {
        let mut dir = ShelterDirectory::new(vec![Shelter::new(" Надежда ", 20, true).unwrap()]);

        assert_eq!(dir.get(" надежда ").unwrap().name(), "Надежда");
        assert!(dir.get("НАДЕЖДА").is_some());
        assert!(dir.get_mut("надежда  ").is_some());
    }
}
