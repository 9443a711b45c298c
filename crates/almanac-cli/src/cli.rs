//! Command-line surface.

use clap::Parser;

/// Render plain-text annual or single-month calendars.
#[derive(Debug, Parser)]
#[command(name = "almanac", version, about = "Plain-text annual calendar generator")]
pub struct Args {
    /// Print only the calendar for the selected month.
    #[arg(short = 'm', long)]
    pub month_only: bool,

    /// Dates selecting the calendars to print, e.g. `2008-08-24`.
    ///
    /// With no dates given, an interactive prompt is shown.
    pub dates: Vec<String>,
}
