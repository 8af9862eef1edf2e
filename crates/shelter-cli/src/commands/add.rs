//! shelter add command

use clap::{Args, Subcommand};
use console::style;
use shelter_domain::Animal;

use crate::session::Session;

#[derive(Debug, Args)]
pub struct AddCommand {
    /// Shelter name
    pub shelter: String,

    /// Skip the duplicate check and the archive copy
    #[arg(long)]
    pub plain: bool,

    #[command(subcommand)]
    pub animal: AnimalSubcommand,
}

/// Fields every animal has
#[derive(Debug, Clone, Args)]
pub struct PetArgs {
    /// Name
    pub name: String,
    /// Age in years
    pub age: u32,
    /// Weight in kilograms
    pub weight: f64,
    /// Needs an open yard
    #[arg(long)]
    pub claustrophobic: bool,
}

#[derive(Debug, Subcommand)]
pub enum AnimalSubcommand {
    /// Admit a dog
    Dog {
        #[command(flatten)]
        pet: PetArgs,
        /// Has been trained
        #[arg(long)]
        trained: bool,
        /// Preferred food
        #[arg(long, default_value = "")]
        food: String,
    },
    /// Admit a cat
    Cat {
        #[command(flatten)]
        pet: PetArgs,
        /// Has been vaccinated
        #[arg(long)]
        vaccinated: bool,
        /// Adoption status
        #[arg(long, default_value = "")]
        status: String,
    },
    /// Admit a rabbit
    Rabbit {
        #[command(flatten)]
        pet: PetArgs,
        /// Ear type
        #[arg(long, default_value = "")]
        ears: String,
        /// Giant breed
        #[arg(long)]
        giant: bool,
    },
}

impl AnimalSubcommand {
    pub fn to_animal(&self) -> anyhow::Result<Animal> {
        let animal = match self {
            AnimalSubcommand::Dog { pet, trained, food } => Animal::dog(
                pet.name.as_str(),
                pet.age,
                pet.weight,
                pet.claustrophobic,
                *trained,
                food.as_str(),
            )?,
            AnimalSubcommand::Cat {
                pet,
                vaccinated,
                status,
            } => Animal::cat(
                pet.name.as_str(),
                pet.age,
                pet.weight,
                pet.claustrophobic,
                *vaccinated,
                status.as_str(),
            )?,
            AnimalSubcommand::Rabbit { pet, ears, giant } => Animal::rabbit(
                pet.name.as_str(),
                pet.age,
                pet.weight,
                pet.claustrophobic,
                ears.as_str(),
                *giant,
            )?,
        };
        Ok(animal)
    }
}

impl AddCommand {
    pub fn run(&self, session: &mut Session) -> anyhow::Result<()> {
        let animal = self.animal.to_animal()?;

        let message = if self.plain {
            let shelter = session.shelter_mut(&self.shelter)?;
            let added = shelter.add_pet(animal)?.to_string();
            format!("Added {} to {}", added, shelter.name())
        } else {
            let archive = session.archive()?;
            let shelter = session.shelter_mut(&self.shelter)?;
            let added = shelter.add(animal, &archive)?.to_string();
            format!("Added {} to {}", added, shelter.name())
        };

        session.save()?;
        println!("{} {}", style("✓").green(), message);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::session::tests::seeded_session;
    use crate::session::Session;
    use shelter_domain::{AnimalKind, ShelterError};
    use tempfile::TempDir;

    fn pet(name: &str, age: u32, weight: f64, claustrophobic: bool) -> PetArgs {
        PetArgs {
            name: name.to_string(),
            age,
            weight,
            claustrophobic,
        }
    }

    fn add_dog(shelter: &str, name: &str, plain: bool) -> AddCommand {
        AddCommand {
            shelter: shelter.to_string(),
            plain,
            animal: AnimalSubcommand::Dog {
                pet: pet(name, 3, 15.5, false),
                trained: true,
                food: "Сухой корм".to_string(),
            },
        }
    }

    #[test]
    fn test_add_is_persisted() {
        let tmp = TempDir::new().unwrap();
        let mut session = seeded_session(&tmp);

        add_dog("Надежда", "Рекс", false).run(&mut session).unwrap();

        let reopened = Session::open(session.config.clone()).unwrap();
        let hope = reopened.shelter("Надежда").unwrap();
        assert_eq!(hope.count(), 7);
        assert!(hope.find("рекс", AnimalKind::Dog).is_some());

        // archive copies next to the catalog
        let archived = std::fs::read_dir(tmp.path())
            .unwrap()
            .filter_map(|e| e.ok())
            .filter(|e| e.file_name().to_string_lossy().starts_with("pet_Dog_"))
            .count();
        assert_eq!(archived, 2);
    }

    #[test]
    fn test_add_rejects_duplicate() {
        let tmp = TempDir::new().unwrap();
        let mut session = seeded_session(&tmp);

        add_dog("Надежда", "Рекс", false).run(&mut session).unwrap();
        let err = add_dog("Надежда", "РЕКС", false)
            .run(&mut session)
            .unwrap_err();
        assert!(matches!(
            err.downcast_ref::<ShelterError>(),
            Some(ShelterError::DuplicateAnimal { .. })
        ));

        // the plain path does not look for duplicates
        add_dog("Надежда", "Рекс", true).run(&mut session).unwrap();
        assert_eq!(session.shelter("Надежда").unwrap().count(), 8);
    }

    #[test]
    fn test_add_claustrophobic_without_yard() {
        let tmp = TempDir::new().unwrap();
        let mut session = seeded_session(&tmp);

        let cmd = AddCommand {
            shelter: "Верный друг".to_string(),
            plain: true,
            animal: AnimalSubcommand::Cat {
                pet: pet("Тень", 2, 3.9, true),
                vaccinated: false,
                status: String::new(),
            },
        };
        let err = cmd.run(&mut session).unwrap_err();
        assert!(matches!(
            err.downcast_ref::<ShelterError>(),
            Some(ShelterError::IncompatibleHousing { .. })
        ));
    }

    #[test]
    fn test_invalid_animal() {
        let rabbit = AnimalSubcommand::Rabbit {
            pet: pet("Снежок", 0, 2.0, false),
            ears: "Вислоухий".to_string(),
            giant: false,
        };
        assert!(rabbit.to_animal().is_err());
    }
}
