//! Leap-year and month-length primitives.

use almanac_core::{ensure, Result, Year};

use crate::month::Month;

/// Smallest year the engine accepts.
pub const MIN_YEAR: Year = 1;

/// Largest year the engine accepts.
pub const MAX_YEAR: Year = 9999;

/// Whether `year` is a Gregorian leap year: divisible by 4 and either not
/// divisible by 100 or divisible by 400.
///
/// The rule is applied proleptically; years before the 1582 reform get no
/// special treatment.
///
/// # Errors
/// `Error::Validation` if `year` is outside [1, 9999].
pub fn is_leap_year(year: Year) -> Result<bool> {
    ensure!(
        (MIN_YEAR..=MAX_YEAR).contains(&year),
        "year",
        "{year} out of range [{MIN_YEAR}, {MAX_YEAR}]"
    );
    Ok(year % 4 == 0 && (year % 100 != 0 || year % 400 == 0))
}

/// Number of days in `month` of `year`.
///
/// # Errors
/// `Error::Validation` if `year` is outside [1, 9999].
pub fn days_in_month(month: Month, year: Year) -> Result<u8> {
    let days = match month {
        Month::January
        | Month::March
        | Month::May
        | Month::July
        | Month::August
        | Month::October
        | Month::December => 31,
        Month::April | Month::June | Month::September | Month::November => 30,
        Month::February => {
            if is_leap_year(year)? {
                29
            } else {
                28
            }
        }
    };
    Ok(days)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn leap_years() {
        assert!(is_leap_year(2000).unwrap());
        assert!(is_leap_year(1904).unwrap());
        assert!(is_leap_year(2012).unwrap());
        assert!(!is_leap_year(1800).unwrap());
        assert!(!is_leap_year(2027).unwrap());
        assert!(!is_leap_year(2100).unwrap());
    }

    #[test]
    fn year_bounds() {
        assert!(is_leap_year(1).is_ok());
        assert!(is_leap_year(9999).is_ok());
        assert!(is_leap_year(0).is_err());
        assert!(is_leap_year(10_000).is_err());
        assert!(is_leap_year(-4).is_err());
    }

    #[test]
    fn february_follows_leap_rule() {
        assert_eq!(days_in_month(Month::February, 2008).unwrap(), 29);
        assert_eq!(days_in_month(Month::February, 2009).unwrap(), 28);
        assert_eq!(days_in_month(Month::February, 2100).unwrap(), 28);
        assert_eq!(days_in_month(Month::February, 2000).unwrap(), 29);
    }

    #[test]
    fn fixed_month_lengths() {
        assert_eq!(days_in_month(Month::January, 2023).unwrap(), 31);
        assert_eq!(days_in_month(Month::April, 2023).unwrap(), 30);
        assert_eq!(days_in_month(Month::December, 2023).unwrap(), 31);
    }
}
