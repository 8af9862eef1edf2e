//! ShelterStatistics - The numbers behind the statistics window

use crate::model::kind::AnimalKind;
use crate::model::shelter::Shelter;

/// Aggregate figures for one shelter
#[derive(Debug, Clone, PartialEq)]
pub struct ShelterStatistics {
    pub total: usize,
    pub dogs: usize,
    pub cats: usize,
    pub rabbits: usize,
    pub claustrophobic: usize,
    pub average_age: f64,
    pub average_weight: f64,
    pub available_space: usize,
    /// `total / capacity * 100`
    pub occupancy_percentage: f64,
}

impl ShelterStatistics {
    /// Compute statistics for a shelter
    pub fn of(shelter: &Shelter) -> Self {
        let animals = shelter.animals();
        let total = animals.len();

        let (average_age, average_weight) = if total == 0 {
            (0.0, 0.0)
        } else {
            let ages: f64 = animals.iter().map(|a| f64::from(a.age())).sum();
            let weights: f64 = animals.iter().map(|a| a.weight()).sum();
            (ages / total as f64, weights / total as f64)
        };

        Self {
            total,
            dogs: shelter.count_kind(AnimalKind::Dog),
            cats: shelter.count_kind(AnimalKind::Cat),
            rabbits: shelter.count_kind(AnimalKind::Rabbit),
            claustrophobic: animals.iter().filter(|a| a.claustrophobic()).count(),
            average_age,
            average_weight,
            available_space: shelter.available_space(),
            occupancy_percentage: total as f64 / shelter.capacity() as f64 * 100.0,
        }
    }

    pub fn count_of(&self, kind: AnimalKind) -> usize {
        match kind {
            AnimalKind::Dog => self.dogs,
            AnimalKind::Cat => self.cats,
            AnimalKind::Rabbit => self.rabbits,
        }
    }

    /// Fractional share of `count` in the total; 0 for an empty shelter
    pub fn share(&self, count: usize) -> f64 {
        if self.total == 0 {
            0.0
        } else {
            count as f64 / self.total as f64 * 100.0
        }
    }
}
