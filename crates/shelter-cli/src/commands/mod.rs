//! CLI Commands

pub mod add;
pub mod convert;
pub mod pets;
pub mod remove;
pub mod seed;
pub mod shelters;
pub mod stats;

pub use add::AddCommand;
pub use convert::ConvertCommand;
pub use pets::PetsCommand;
pub use remove::RemoveCommand;
pub use seed::SeedCommand;
pub use shelters::SheltersCommand;
pub use stats::StatsCommand;

use anyhow::Context;
use dialoguer::{theme::ColorfulTheme, Confirm};

/// Ask a yes/no question, defaulting to no
pub(crate) fn confirm(prompt: &str) -> anyhow::Result<bool> {
    Confirm::with_theme(&ColorfulTheme::default())
        .with_prompt(prompt)
        .default(false)
        .interact()
        .context("Failed to read input")
}
