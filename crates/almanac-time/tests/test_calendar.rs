//! Integration tests for the annual calendar engine.
//!
//! The recurring fixture is the year 2008, whose January 1 fell on a
//! Tuesday; the week defaults to a Sunday start unless a test says
//! otherwise.

use std::collections::HashSet;

use almanac_core::Error;
use almanac_time::year::{days_in_month, is_leap_year};
use almanac_time::{Calendar, Month, Weekday};

fn calendar_2008() -> Calendar {
    Calendar::new(2008, Weekday::Tuesday).unwrap()
}

fn created_2008() -> Calendar {
    let mut calendar = calendar_2008();
    calendar.create().unwrap();
    calendar
}

// ─── Leap year rule ───────────────────────────────────────────────────────────

#[test]
fn leap_years() {
    for year in [1808, 1904, 2000, 2012, 2128] {
        assert!(is_leap_year(year).unwrap(), "{year} should be a leap year");
    }
    for year in [1800, 1991, 2027, 2100, 2345] {
        assert!(!is_leap_year(year).unwrap(), "{year} should not be a leap year");
    }
}

#[test]
fn leap_year_rejects_out_of_range() {
    for year in [0, -100, 10_000] {
        let err = is_leap_year(year).unwrap_err();
        assert!(
            matches!(err, Error::Validation { field: "year", .. }),
            "unexpected error for year {year}: {err}"
        );
    }
}

// ─── Month lengths ────────────────────────────────────────────────────────────

#[test]
fn month_lengths_sum_to_year_length() {
    for year in 1..=9999 {
        let total: u32 = Month::ALL
            .iter()
            .map(|m| u32::from(days_in_month(*m, year).unwrap()))
            .sum();
        let expected = if is_leap_year(year).unwrap() { 366 } else { 365 };
        assert_eq!(total, expected, "wrong day total for year {year}");
    }
}

// ─── Platform weekday boundary ────────────────────────────────────────────────

#[test]
fn platform_weekdays_map_one_to_one() {
    let mut seen = HashSet::new();
    for n in 0..=6u8 {
        let day = Weekday::from_platform(n).unwrap();
        assert_eq!(day.ordinal(), n + 1);
        assert!(seen.insert(day), "platform value {n} collided");
    }
    assert_eq!(seen.len(), 7);
}

#[test]
fn platform_weekdays_out_of_domain() {
    assert_eq!(Weekday::from_platform(7), Err(Error::InvalidWeekday(7)));
    assert_eq!(Weekday::from_platform(255), Err(Error::InvalidWeekday(255)));
}

// ─── Deferred generation ──────────────────────────────────────────────────────

#[test]
fn not_created_until_create_runs() {
    let calendar = calendar_2008();
    assert!(!calendar.is_created());
    assert!(calendar.annual().is_empty());
}

#[test]
fn month_query_before_create_fails() {
    let calendar = calendar_2008();
    let err = calendar.month(Month::April).unwrap_err();
    assert!(matches!(err, Error::NotFound(_)), "unexpected error: {err}");
    assert!(calendar.render_month(Month::April).is_err());
}

#[test]
fn annual_render_before_create_is_title_only() {
    let calendar = calendar_2008();
    assert_eq!(calendar.render_annual().trim(), "2008");
}

#[test]
fn create_populates_every_month() {
    let calendar = created_2008();
    assert!(calendar.is_created());
    for month in Month::ALL {
        let days = calendar.month(month).unwrap();
        assert_eq!(
            days.len() as u8,
            days_in_month(month, 2008).unwrap(),
            "wrong length for {month}"
        );
    }
}

#[test]
fn august_24_is_a_sunday() {
    let calendar = created_2008();

    let august = calendar.month(Month::August).unwrap();
    assert_eq!(august[24 - 1], Weekday::Sunday);

    let august = &calendar.annual()[&Month::August];
    assert_eq!(august[24 - 1], Weekday::Sunday);
}

#[test]
fn first_days_follow_the_anchor() {
    let calendar = created_2008();
    assert_eq!(calendar.month(Month::January).unwrap()[0], Weekday::Tuesday);
    assert_eq!(calendar.month(Month::February).unwrap()[0], Weekday::Friday);
    assert_eq!(calendar.month(Month::December).unwrap()[0], Weekday::Monday);
}

// ─── Rendering ────────────────────────────────────────────────────────────────

#[test]
fn january_grid_with_sunday_week_start() {
    let calendar = created_2008();
    let expected = [
        "        January",
        "Sun   Mon   Tue   Wed   Thu   Fri   Sat",
        "              1     2     3     4     5   ",
        "  6     7     8     9     10    11    12  ",
        "  13    14    15    16    17    18    19  ",
        "  20    21    22    23    24    25    26  ",
        "  27    28    29    30    31",
    ]
    .join("\n");
    assert_eq!(calendar.render_month(Month::January).unwrap(), expected);
}

#[test]
fn august_grid_with_monday_week_start() {
    let mut calendar =
        Calendar::with_week_start(2008, Weekday::Tuesday, Weekday::Monday).unwrap();
    calendar.create().unwrap();
    let expected = [
        "        August",
        "Mon   Tue   Wed   Thu   Fri   Sat   Sun",
        "                          1     2     3   ",
        "  4     5     6     7     8     9     10  ",
        "  11    12    13    14    15    16    17  ",
        "  18    19    20    21    22    23    24  ",
        "  25    26    27    28    29    30    31",
    ]
    .join("\n");
    assert_eq!(calendar.render_month(Month::August).unwrap(), expected);
}

#[test]
fn rendering_is_deterministic() {
    let calendar = created_2008();
    assert_eq!(
        calendar.render_month(Month::June).unwrap(),
        calendar.render_month(Month::June).unwrap()
    );
    assert_eq!(calendar.render_annual(), calendar.render_annual());
}

#[test]
fn day_cells_align_to_fixed_columns() {
    let calendar = created_2008();
    for month in Month::ALL {
        let grid = calendar.render_month(month).unwrap();
        let mut expected = 1usize;
        for row in grid.lines().skip(2) {
            let mut column = 0;
            while column < row.len() {
                let end = usize::min(column + 6, row.len());
                let cell = row[column..end].trim();
                if !cell.is_empty() {
                    assert_eq!(
                        cell.parse::<usize>().unwrap(),
                        expected,
                        "misaligned cell in {month}: {row:?}"
                    );
                    expected += 1;
                }
                column += 6;
            }
        }
        assert_eq!(expected - 1, calendar.month(month).unwrap().len());
    }
}

#[test]
fn annual_render_lists_all_months() {
    let calendar = created_2008();
    let annual = calendar.render_annual();
    assert!(annual.starts_with("            2008\n\n        January\n"));
    for month in Month::ALL {
        assert!(
            annual.contains(&format!("        {}\n", month.long_name())),
            "missing block for {month}"
        );
    }
    // Year title plus eleven separators between the twelve blocks.
    assert_eq!(annual.matches("\n\n").count(), 12);
}
