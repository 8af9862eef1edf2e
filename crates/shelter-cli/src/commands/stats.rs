//! shelter stats command

use clap::Args;
use console::style;
use shelter_domain::{AnimalKind, ShelterStatistics};

use crate::session::Session;

#[derive(Debug, Args)]
pub struct StatsCommand {
    /// Shelter name
    pub shelter: String,
}

impl StatsCommand {
    pub fn run(&self, session: &Session) -> anyhow::Result<()> {
        let shelter = session.shelter(&self.shelter)?;
        let stats = ShelterStatistics::of(shelter);

        println!("{}", style(shelter.name()).bold());
        for line in render(&stats) {
            println!("  {}", line);
        }
        Ok(())
    }
}

/// Statistics as display lines
pub fn render(stats: &ShelterStatistics) -> Vec<String> {
    let mut lines = vec![format!(
        "Animals: {} ({:.1}% occupied, {} places free)",
        stats.total, stats.occupancy_percentage, stats.available_space
    )];

    for kind in AnimalKind::ALL {
        let count = stats.count_of(kind);
        lines.push(format!("{}: {} ({:.1}%)", kind, count, stats.share(count)));
    }

    lines.push(format!(
        "Claustrophobic: {} ({:.1}%)",
        stats.claustrophobic,
        stats.share(stats.claustrophobic)
    ));
    lines.push(format!("Average age: {:.1} years", stats.average_age));
    lines.push(format!("Average weight: {:.1} kg", stats.average_weight));
    lines
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::session::tests::seeded_session;
    use tempfile::TempDir;

    #[test]
    fn test_render_seeded_shelter() {
        let tmp = TempDir::new().unwrap();
        let session = seeded_session(&tmp);
        let stats = ShelterStatistics::of(session.shelter("Верный друг").unwrap());

        let lines = render(&stats);
        assert_eq!(lines[0], "Animals: 4 (40.0% occupied, 6 places free)");
        assert_eq!(lines[1], "Dog: 1 (25.0%)");
        assert_eq!(lines[2], "Cat: 2 (50.0%)");
        assert_eq!(lines[3], "Rabbit: 1 (25.0%)");
        assert_eq!(lines[4], "Claustrophobic: 0 (0.0%)");
    }

    #[test]
    fn test_run_unknown_shelter() {
        let tmp = TempDir::new().unwrap();
        let session = seeded_session(&tmp);
        let cmd = StatsCommand {
            shelter: "Нет такого".to_string(),
        };
        assert!(cmd.run(&session).is_err());
    }
}
