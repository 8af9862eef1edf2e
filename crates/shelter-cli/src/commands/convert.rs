//! shelter convert command

use clap::Args;
use console::style;
use indicatif::{ProgressBar, ProgressStyle};
use shelter_adapter::ReportFormat;

use crate::args::FormatArg;
use crate::session::Session;

#[derive(Debug, Args)]
pub struct ConvertCommand {
    /// Format to convert selection reports from (defaults to the configured one)
    #[arg(long, value_enum)]
    pub from: Option<FormatArg>,
}

impl ConvertCommand {
    pub fn run(&self, session: &Session) -> anyhow::Result<usize> {
        let from = self
            .from
            .map(ReportFormat::from)
            .unwrap_or(session.config.report_format);
        let to = from.other();

        let reports = session.reports()?;
        let pending = reports.selection_keys(from)?.len();
        if pending == 0 {
            println!("No {} selection reports to convert.", from);
            return Ok(0);
        }

        let pb = ProgressBar::new(pending as u64);
        pb.set_style(
            ProgressStyle::with_template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} {msg}")?
                .progress_chars("#>-"),
        );

        let converted = reports.convert_all(from, to, |key| {
            pb.set_message(key.to_string());
            pb.inc(1);
        })?;
        pb.finish_and_clear();

        println!(
            "{} Converted {} report(s) from {} to {}",
            style("✓").green(),
            converted,
            from,
            to
        );
        Ok(converted)
    }
}
