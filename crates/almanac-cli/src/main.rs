//! Console front end: argument handling, the interactive prompt, and
//! printing.
//!
//! The engine itself never touches the platform clock; this binary supplies
//! the January 1 anchor from chrono and hands the rendered strings to the
//! terminal.

mod cli;
mod print;

use std::io::{self, BufRead, Write};
use std::time::Duration;

use anyhow::{anyhow, Result};
use chrono::{Datelike, Local, NaiveDate};
use clap::Parser;

use almanac_time::{Calendar, Month, Weekday};

use crate::cli::Args;
use crate::print::typewriter;

/// Date formats accepted on the command line and at the prompt.
const DATE_FORMATS: [&str; 3] = ["%Y-%m-%d", "%d.%m.%Y", "%m/%d/%Y"];

fn main() -> Result<()> {
    let args = Args::parse();

    print::welcome();

    let inputs = if args.dates.is_empty() {
        read_dates_from_prompt()?
    } else {
        args.dates
    };

    for input in inputs {
        let Some(date) = parse_date(&input) else {
            println!("[Warning!] Wrong date format: '{input}'");
            continue;
        };
        if let Err(err) = print_calendar(date, args.month_only) {
            println!("[Warning!] {err}");
        }
    }

    Ok(())
}

/// Offer the two interactive choices when no dates were passed.
fn read_dates_from_prompt() -> Result<Vec<String>> {
    println!("Select action:");
    println!("\t1 - use current date");
    println!("\t2 - enter date(s)");

    let stdin = io::stdin();
    let mut choice = String::new();
    stdin.lock().read_line(&mut choice)?;

    match choice.trim() {
        "1" => Ok(vec![Local::now()
            .date_naive()
            .format("%Y-%m-%d")
            .to_string()]),
        "2" => {
            print!("Input text: ");
            io::stdout().flush()?;
            let mut dates = String::new();
            stdin.lock().read_line(&mut dates)?;
            Ok(dates.split_whitespace().map(str::to_owned).collect())
        }
        _ => {
            println!("[Error!] Incorrect command selected.");
            Ok(Vec::new())
        }
    }
}

fn parse_date(input: &str) -> Option<NaiveDate> {
    DATE_FORMATS
        .iter()
        .find_map(|format| NaiveDate::parse_from_str(input, format).ok())
}

/// Build and print the calendars for one requested date.
fn print_calendar(date: NaiveDate, month_only: bool) -> Result<()> {
    let year = date.year();
    let january_first = NaiveDate::from_ymd_opt(year, 1, 1)
        .ok_or_else(|| anyhow!("no January 1 for year {year}"))?;
    let first_day_of_year =
        Weekday::from_platform(january_first.weekday().num_days_from_sunday() as u8)?;

    let mut calendar = Calendar::with_week_start(year, first_day_of_year, Weekday::Monday)?;
    calendar.create()?;

    if !month_only {
        println!("{}", calendar.render_annual());
    }

    println!();
    typewriter(
        " - - - Calendar for selected month - - - ",
        Duration::from_millis(80),
        true,
    );

    let month = Month::from_number(date.month() as u8)
        .ok_or_else(|| anyhow!("month {} out of range", date.month()))?;
    println!("{}", calendar.render_month(month)?);

    Ok(())
}
