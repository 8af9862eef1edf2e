//! shelter pets command

use clap::Args;
use console::style;
use shelter_domain::YardFilter;

use crate::args::{kind_filter, KindArg, YardArg};
use crate::session::Session;

#[derive(Debug, Args)]
pub struct PetsCommand {
    /// Shelter name
    pub shelter: String,

    /// Only animals of this kind
    #[arg(short, long, value_enum)]
    pub kind: Option<KindArg>,

    /// Yard predicate applied on top of the kind filter
    #[arg(long, value_enum, default_value_t = YardArg::Any)]
    pub yard: YardArg,

    /// Export the listed animals as the next numbered selection
    #[arg(long)]
    pub save_report: bool,

    /// Export the listed animals as a report named after the shelter
    #[arg(long)]
    pub shelter_report: bool,
}

impl PetsCommand {
    pub fn run(&self, session: &Session) -> anyhow::Result<()> {
        let shelter = session.shelter(&self.shelter)?;
        let animals = shelter.filter_with(kind_filter(self.kind), YardFilter::from(self.yard));

        if animals.is_empty() {
            println!("No animals match the selected criteria.");
        } else {
            println!(
                "{} ({} of {})",
                style(shelter.name()).bold(),
                animals.len(),
                shelter.count()
            );
            for animal in &animals {
                println!("  {}", animal);
            }
        }

        if self.save_report || self.shelter_report {
            let reports = session.reports()?;
            let format = session.config.report_format;

            if self.save_report {
                let key = reports.save_selection(format, animals.iter().copied())?;
                println!("{} Saved {}.{}", style("✓").green(), key, format.extension());
            }
            if self.shelter_report {
                let key =
                    reports.save_shelter_report(format, shelter.name(), animals.iter().copied())?;
                println!("{} Saved {}.{}", style("✓").green(), key, format.extension());
            }
        }
        Ok(())
    }
}
