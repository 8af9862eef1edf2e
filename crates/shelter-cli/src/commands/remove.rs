//! shelter remove command

use clap::Args;
use console::style;

use crate::args::{kind_filter, KindArg};
use crate::commands::confirm;
use crate::session::Session;

#[derive(Debug, Args)]
pub struct RemoveCommand {
    /// Shelter name
    pub shelter: String,

    /// Animal name (case-insensitive)
    pub name: String,

    /// Only match an animal of this kind
    #[arg(short, long, value_enum)]
    pub kind: Option<KindArg>,

    /// Do not ask for confirmation
    #[arg(short, long)]
    pub yes: bool,
}

impl RemoveCommand {
    pub fn run(&self, session: &mut Session) -> anyhow::Result<()> {
        let shelter = session.shelter_mut(&self.shelter)?;
        let Some(animal) = shelter.find(&self.name, kind_filter(self.kind)).cloned() else {
            anyhow::bail!(
                "No animal named '{}' in shelter '{}'",
                self.name,
                shelter.name()
            );
        };

        if !self.yes && !confirm(&format!("Remove {} from {}?", animal, shelter.name()))? {
            println!("Cancelled.");
            return Ok(());
        }

        let removed = shelter.remove(&animal)?;
        let message = format!("Removed {} from {}", removed, shelter.name());

        session.save()?;
        println!("{} {}", style("✓").green(), message);
        Ok(())
    }
}
