//! shelter shelters command

use clap::Args;
use console::style;
use shelter_domain::Shelter;

use crate::args::{kind_filter, KindArg};
use crate::session::Session;

#[derive(Debug, Args)]
pub struct SheltersCommand {
    /// Only shelters housing at least one animal of this kind
    #[arg(short, long, value_enum)]
    pub kind: Option<KindArg>,

    /// Only shelters with an open yard
    #[arg(long)]
    pub open_yard: bool,
}

impl SheltersCommand {
    pub fn run(&self, session: &Session) -> anyhow::Result<()> {
        let selected = session
            .directory
            .select(kind_filter(self.kind), self.open_yard);

        if selected.is_empty() {
            println!("No shelters match the selected criteria.");
            return Ok(());
        }

        for shelter in selected {
            println!("{}", describe(shelter));
        }
        Ok(())
    }
}

pub fn describe(shelter: &Shelter) -> String {
    format!(
        "{} - {}/{} animals, {}",
        style(shelter.name()).bold(),
        shelter.count(),
        shelter.capacity(),
        if shelter.has_open_yard() {
            "open yard"
        } else {
            "no open yard"
        }
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::session::tests::seeded_session;
    use tempfile::TempDir;

    #[test]
    fn test_run_with_filters() {
        let tmp = TempDir::new().unwrap();
        let session = seeded_session(&tmp);

        let cmd = SheltersCommand {
            kind: Some(KindArg::Rabbit),
            open_yard: true,
        };
        assert!(cmd.run(&session).is_ok());
    }

    #[test]
    fn test_describe() {
        console::set_colors_enabled(false);
        let shelter = Shelter::new("Надежда", 20, true).unwrap();
        assert_eq!(describe(&shelter), "Надежда - 0/20 animals, open yard");
    }
}
