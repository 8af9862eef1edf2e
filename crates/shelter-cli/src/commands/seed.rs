//! shelter seed command

use clap::Args;
use console::style;

use crate::commands::confirm;
use crate::session::Session;

#[derive(Debug, Args)]
pub struct SeedCommand {
    /// Do not ask for confirmation
    #[arg(short, long)]
    pub yes: bool,
}

impl SeedCommand {
    pub fn run(&self, session: &mut Session) -> anyhow::Result<()> {
        if !self.yes && !confirm("Replace every shelter with the initial data?")? {
            println!("Cancelled.");
            return Ok(());
        }

        session.directory = session.catalog.reseed()?;
        println!(
            "{} Restored {} shelters into {}",
            style("✓").green(),
            session.directory.len(),
            session.catalog.path().display()
        );
        Ok(())
    }
}
