//! Seed data - The shelters and animals a fresh installation starts with

use shelter_domain::{Animal, Shelter, ShelterDirectory};
use tracing::info;

use crate::error::Result;

/// Build the initial shelters and distribute the initial animals
///
/// The closed-yard "Любимец" only receives the animals that can live
/// without an open yard.
pub fn seed_directory() -> Result<ShelterDirectory> {
    let mut paws = Shelter::new("Добрые лапки", 15, true)?;
    let mut friend = Shelter::new("Верный друг", 10, false)?;
    let mut hope = Shelter::new("Надежда", 20, true)?;
    let mut favourite = Shelter::new("Любимец", 12, false)?;

    // Dogs
    let rex = Animal::dog("Рекс", 3, 15.5, false, true, "Сухой корм")?;
    let baron = Animal::dog("Барон", 5, 20.0, true, true, "Натуральный корм")?;
    let bobik = Animal::dog("Бобик", 2, 12.3, false, false, "Смешанный корм")?;
    let sharik = Animal::dog("Шарик", 4, 18.7, true, true, "Премиум корм")?;
    let alpha = Animal::dog("Альфа", 6, 25.0, false, true, "Диетический корм")?;

    // Cats
    let murka = Animal::cat("Мурка", 2, 4.5, false, true, "Ищет дом")?;
    let pushok = Animal::cat("Пушок", 3, 5.2, true, true, "На карантине")?;
    let vaska = Animal::cat("Васька", 1, 3.0, false, false, "Готов к адопции")?;
    let snezhok = Animal::cat("Снежок", 4, 4.8, true, true, "В семье")?;
    let ryzhik = Animal::cat("Рыжик", 2, 4.0, false, true, "На лечении")?;
    let bagira = Animal::cat("Багира", 5, 4.3, true, false, "Ищет дом")?;
    let lusya = Animal::cat("Люся", 1, 3.5, false, true, "Готов к адопции")?;

    // Rabbits
    let ushastik = Animal::rabbit("Ушастик", 1, 2.0, false, "Вислоухий", false)?;
    let pushistik = Animal::rabbit("Пушистик", 2, 3.5, true, "Прямоухий", true)?;
    let khlopok = Animal::rabbit("Хлопок", 1, 1.8, false, "Вислоухий", false)?;
    let morkovka = Animal::rabbit("Морковка", 3, 4.2, true, "Прямоухий", true)?;
    let poprygun = Animal::rabbit("Попрыгун", 2, 2.5, false, "Вислоухий", false)?;

    for animal in [rex, murka, ushastik, baron, pushok] {
        paws.add_pet(animal)?;
    }
    for animal in [bobik, vaska, khlopok, lusya] {
        friend.add_pet(animal)?;
    }
    for animal in [sharik, snezhok, pushistik, morkovka, ryzhik, alpha] {
        hope.add_pet(animal)?;
    }
    for animal in [bagira, poprygun] {
        if !animal.claustrophobic() {
            favourite.add_pet(animal)?;
        }
    }

    let directory = ShelterDirectory::new(vec![paws, friend, hope, favourite]);
    info!(shelters = directory.len(), "seed data generated");
    Ok(directory)
}
