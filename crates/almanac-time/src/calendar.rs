//! Annual calendar generation and fixed-width text rendering.

use std::collections::BTreeMap;

use almanac_core::{ensure, Error, Result, Year};

use crate::month::Month;
use crate::week::WeekOrder;
use crate::weekday::Weekday;
use crate::year::{days_in_month, MAX_YEAR, MIN_YEAR};

/// Indent preceding the month name line.
const MONTH_INDENT: &str = "        ";

/// Indent preceding the year title of the annual view.
const YEAR_INDENT: &str = "            ";

/// A blank day slot, as wide as a rendered day cell.
const EMPTY_CELL: &str = "      ";

/// Separator between the short day labels in the header row.
const LABEL_SEPARATOR: &str = "   ";

/// A year's weekday assignment per month, with plain-text rendering.
///
/// The engine is constructed with immutable parameters and populated by an
/// explicit [`create`](Calendar::create) call; until then the month table is
/// empty and per-month queries fail with [`Error::NotFound`].  Once
/// populated, the table is never mutated again.
///
/// Instances are single-threaded by contract: each one is owned by its
/// caller and nothing here is synchronised.
///
/// ```
/// use almanac_time::{Calendar, Month, Weekday};
///
/// let mut calendar = Calendar::new(2008, Weekday::Tuesday)?;
/// calendar.create()?;
/// assert_eq!(calendar.month(Month::August)?[23], Weekday::Sunday);
/// # Ok::<(), almanac_core::Error>(())
/// ```
#[derive(Debug, Clone)]
pub struct Calendar {
    year: Year,
    first_day_of_year: Weekday,
    week: WeekOrder,
    months: BTreeMap<Month, Vec<Weekday>>,
}

impl Calendar {
    /// Create an engine for `year` with a Sunday week start.
    ///
    /// `first_day_of_year` is the weekday January 1 falls on; the engine
    /// trusts the caller for this anchor and never derives it from the year
    /// itself.
    ///
    /// # Errors
    /// `Error::Validation` if `year` is outside [1, 9999].
    pub fn new(year: Year, first_day_of_year: Weekday) -> Result<Self> {
        Self::with_week_start(year, first_day_of_year, Weekday::Sunday)
    }

    /// Create an engine whose displayed weeks start on `first_day_of_week`.
    ///
    /// # Errors
    /// `Error::Validation` if `year` is outside [1, 9999].
    pub fn with_week_start(
        year: Year,
        first_day_of_year: Weekday,
        first_day_of_week: Weekday,
    ) -> Result<Self> {
        ensure!(
            (MIN_YEAR..=MAX_YEAR).contains(&year),
            "year",
            "{year} out of range [{MIN_YEAR}, {MAX_YEAR}]"
        );
        Ok(Calendar {
            year,
            first_day_of_year,
            week: WeekOrder::new(first_day_of_week),
            months: BTreeMap::new(),
        })
    }

    // ── Accessors ─────────────────────────────────────────────────────────────

    /// The year of the calendar.
    pub fn year(&self) -> Year {
        self.year
    }

    /// The weekday of January 1.
    pub fn first_day_of_year(&self) -> Weekday {
        self.first_day_of_year
    }

    /// The configured first day of the week.
    pub fn first_day_of_week(&self) -> Weekday {
        self.week.first()
    }

    /// The active week rotation.
    pub fn week_order(&self) -> &WeekOrder {
        &self.week
    }

    /// `true` once [`create`](Calendar::create) has populated the table.
    pub fn is_created(&self) -> bool {
        !self.months.is_empty()
    }

    // ── Generation ────────────────────────────────────────────────────────────

    /// Populate the month table.
    ///
    /// A rotating cursor starts at the first day of the year; each month in
    /// calendar order receives one cursor value per day, and the cursor
    /// carries across month boundaries without resetting.  Calling this on
    /// an already-populated calendar is a no-op, so repeated calls observe
    /// identical state.
    pub fn create(&mut self) -> Result<()> {
        if self.is_created() {
            return Ok(());
        }
        let mut cursor = self.first_day_of_year;
        for month in Month::ALL {
            let length = days_in_month(month, self.year)?;
            let mut days = Vec::with_capacity(length as usize);
            for _ in 0..length {
                days.push(cursor);
                cursor = self.week.next(cursor);
            }
            self.months.insert(month, days);
        }
        Ok(())
    }

    // ── Queries ───────────────────────────────────────────────────────────────

    /// The full year's table: one weekday per day of each month, keyed by
    /// month in calendar order.  Empty until [`create`](Calendar::create)
    /// has run.
    pub fn annual(&self) -> &BTreeMap<Month, Vec<Weekday>> {
        &self.months
    }

    /// The weekday sequence for `month`, one entry per day.
    ///
    /// # Errors
    /// `Error::NotFound` if the calendar has not been generated.
    pub fn month(&self, month: Month) -> Result<&[Weekday]> {
        self.months
            .get(&month)
            .map(Vec::as_slice)
            .ok_or_else(|| Error::NotFound(format!("no generated calendar for {month}")))
    }

    // ── Rendering ─────────────────────────────────────────────────────────────

    /// Render the fixed-width grid for `month`.
    ///
    /// The first line carries the indented month name, the second the seven
    /// short day labels in rotation order; day numbers follow in 6-character
    /// cells, one row per week, with trailing whitespace trimmed from the
    /// end of the result.
    ///
    /// # Errors
    /// `Error::NotFound` if the calendar has not been generated.
    pub fn render_month(&self, month: Month) -> Result<String> {
        let days = self.month(month)?;
        Ok(self.format_month(month, days))
    }

    /// Render the annual view: the indented year title, a blank line, then
    /// the twelve month grids separated by blank lines.
    ///
    /// Before [`create`](Calendar::create) has run this yields only the
    /// year title.
    pub fn render_annual(&self) -> String {
        let blocks: Vec<String> = self
            .months
            .iter()
            .map(|(month, days)| self.format_month(*month, days))
            .collect();
        format!("{YEAR_INDENT}{}\n\n{}", self.year, blocks.join("\n\n"))
    }

    fn format_month(&self, month: Month, days: &[Weekday]) -> String {
        let mut grid = String::new();
        grid.push_str(MONTH_INDENT);
        grid.push_str(month.long_name());
        grid.push('\n');

        let labels: Vec<&str> = self.week.days().iter().map(|d| d.short_name()).collect();
        grid.push_str(&labels.join(LABEL_SEPARATOR));
        grid.push('\n');

        // Blank cells up to the column day 1 falls in.
        for _ in 0..self.week.position(days[0]) {
            grid.push_str(EMPTY_CELL);
        }

        for (index, weekday) in days.iter().enumerate() {
            let number = index + 1;
            if number <= 9 {
                grid.push_str(&format!("  {number}   "));
            } else {
                grid.push_str(&format!("  {number}  "));
            }
            // Row break after the rotation's last column, final partial
            // week included.
            if *weekday == self.week.last() {
                grid.push('\n');
            }
        }

        grid.trim_end().to_string()
    }
}
