//! shelter - Command-line front end of the pet shelter registry
//!
//! Usage:
//!   shelter                                   - Start interactive mode
//!   shelter shelters [--kind K] [--open-yard] - List shelters
//!   shelter pets <shelter> [--kind K] [--yard Y] [--save-report]
//!   shelter add <shelter> dog|cat|rabbit <name> <age> <weight> ...
//!   shelter remove <shelter> <name> [--kind K] [--yes]
//!   shelter stats <shelter>                   - Shelter statistics
//!   shelter convert [--from json|xml]         - Convert selection reports
//!   shelter seed [--yes]                      - Restore the initial data

use clap::{Parser, Subcommand};
use shelter_cli::args::GlobalArgs;
use shelter_cli::commands::{
    AddCommand, ConvertCommand, PetsCommand, RemoveCommand, SeedCommand, SheltersCommand,
    StatsCommand,
};
use shelter_cli::interactive::InteractiveCli;
use shelter_cli::session::Session;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "shelter")]
#[command(about = "Pet shelter registry")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    #[command(flatten)]
    global: GlobalArgs,
}

#[derive(Subcommand)]
enum Commands {
    /// List shelters
    Shelters(SheltersCommand),
    /// List the animals of a shelter
    Pets(PetsCommand),
    /// Admit an animal
    Add(AddCommand),
    /// Remove an animal
    Remove(RemoveCommand),
    /// Show shelter statistics
    Stats(StatsCommand),
    /// Convert selection reports to the other format
    Convert(ConvertCommand),
    /// Restore the initial shelters and animals
    Seed(SeedCommand),
}

fn main() -> anyhow::Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let config = cli.global.resolve(&std::env::current_dir()?)?;
    let mut session = Session::open(config)?;

    match cli.command {
        Some(Commands::Shelters(cmd)) => cmd.run(&session),
        Some(Commands::Pets(cmd)) => cmd.run(&session),
        Some(Commands::Add(cmd)) => cmd.run(&mut session),
        Some(Commands::Remove(cmd)) => cmd.run(&mut session),
        Some(Commands::Stats(cmd)) => cmd.run(&session),
        Some(Commands::Convert(cmd)) => cmd.run(&session).map(|_| ()),
        Some(Commands::Seed(cmd)) => cmd.run(&mut session),
        None => {
            // No subcommand - start interactive mode
            let mut interactive = InteractiveCli::new(session);
            interactive.run()
        }
    }
}
