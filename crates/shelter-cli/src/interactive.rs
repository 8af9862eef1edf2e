//! Interactive REPL mode

use std::io::{self, Write};

use console::style;
use shelter_domain::{AnimalKind, KindFilter, ShelterStatistics};

use crate::commands::{shelters, stats};
use crate::session::Session;

/// Interactive browser over the loaded shelters
pub struct InteractiveCli {
    session: Session,
    current_shelter: Option<String>,
    last_kind: KindFilter,
}

impl InteractiveCli {
    pub fn new(session: Session) -> Self {
        Self {
            session,
            current_shelter: None,
            last_kind: KindFilter::All,
        }
    }

    /// Run the interactive REPL
    pub fn run(&mut self) -> anyhow::Result<()> {
        println!("Pet shelter registry");
        println!("Type /help for commands, /quit to exit");
        println!();

        loop {
            let shelter = self.current_shelter.as_deref().unwrap_or("no shelter");
            print!("[{}] > ", shelter);
            io::stdout().flush()?;

            let mut input = String::new();
            if io::stdin().read_line(&mut input)? == 0 {
                break;
            }
            let input = input.trim();

            if input.is_empty() {
                continue;
            }

            if !input.starts_with('/') {
                println!("Commands start with '/'. Type /help for the list.");
                continue;
            }

            match self.handle_command(input) {
                Ok(true) => break,
                Ok(false) => {}
                Err(e) => println!("{} {}", style("Error:").red(), e),
            }
        }

        Ok(())
    }

    fn handle_command(&mut self, input: &str) -> anyhow::Result<bool> {
        let (cmd, rest) = match input.split_once(char::is_whitespace) {
            Some((cmd, rest)) => (cmd, rest.trim()),
            None => (input, ""),
        };

        match cmd {
            "/quit" | "/exit" | "/q" => {
                println!("Goodbye!");
                return Ok(true);
            }
            "/help" | "/h" => {
                println!("Commands:");
                println!("  /shelters        - List shelters");
                println!("  /use <shelter>   - Select a shelter");
                println!("  /pets [kind]     - List animals of the selected shelter");
                println!("  /stats           - Show statistics of the selected shelter");
                println!("  /save            - Export the last /pets listing as a selection");
                println!("  /quit            - Exit");
            }
            "/shelters" => {
                for shelter in self.session.directory.iter() {
                    println!("  {}", shelters::describe(shelter));
                }
            }
            "/use" => {
                if rest.is_empty() {
                    anyhow::bail!("Usage: /use <shelter>");
                }
                let name = self.session.shelter(rest)?.name().to_string();
                println!("Using {}", name);
                self.current_shelter = Some(name);
                self.last_kind = KindFilter::All;
            }
            "/pets" => {
                let kind = if rest.is_empty() {
                    KindFilter::All
                } else {
                    KindFilter::Only(rest.parse::<AnimalKind>()?)
                };
                let shelter = self.session.shelter(self.selected()?)?;
                let animals = shelter.filter(kind);
                if animals.is_empty() {
                    println!("No animals match.");
                }
                for animal in animals {
                    println!("  {}", animal);
                }
                self.last_kind = kind;
            }
            "/stats" => {
                let shelter = self.session.shelter(self.selected()?)?;
                for line in stats::render(&ShelterStatistics::of(shelter)) {
                    println!("  {}", line);
                }
            }
            "/save" => {
                let shelter = self.session.shelter(self.selected()?)?;
                let format = self.session.config.report_format;
                let key = self
                    .session
                    .reports()?
                    .save_selection(format, shelter.filter(self.last_kind))?;
                println!("Saved {}.{}", key, format.extension());
            }
            _ => {
                println!("Unknown command: {}", cmd);
            }
        }

        Ok(false)
    }

    fn selected(&self) -> anyhow::Result<&str> {
        self.current_shelter
            .as_deref()
            .ok_or_else(|| anyhow::anyhow!("No shelter selected. Use /use <shelter> first."))
    }
}
