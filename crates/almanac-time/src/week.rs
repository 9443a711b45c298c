//! Week-start rotation of the seven weekdays.

use crate::weekday::Weekday;

/// The ordering of the seven weekdays used for column layout and
/// week-boundary detection, anchored at a configured first day of the week.
///
/// Days at or after the anchor come first in natural order, followed by the
/// remaining days in natural order.  A Monday anchor yields
/// Mon Tue Wed Thu Fri Sat Sun; a Sunday anchor yields the natural order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WeekOrder {
    days: [Weekday; 7],
}

impl WeekOrder {
    /// Build the rotation anchored at `first_day_of_week`.
    pub fn new(first_day_of_week: Weekday) -> Self {
        let mut days = Weekday::ALL;
        days.rotate_left((first_day_of_week.ordinal() - 1) as usize);
        WeekOrder { days }
    }

    /// The seven weekdays in display order.
    pub fn days(&self) -> &[Weekday; 7] {
        &self.days
    }

    /// The first day of the week (the anchor).
    pub fn first(&self) -> Weekday {
        self.days[0]
    }

    /// The last day of the week, i.e. the weekday immediately preceding the
    /// anchor in natural order.  A row of the rendered grid ends after it.
    pub fn last(&self) -> Weekday {
        self.days[6]
    }

    /// Zero-based column of `day` within the rotation.
    pub fn position(&self, day: Weekday) -> usize {
        (day.ordinal() as usize + 7 - self.first().ordinal() as usize) % 7
    }

    /// The weekday following `day`, wrapping from the rotation's last entry
    /// back to the anchor.
    pub fn next(&self, day: Weekday) -> Weekday {
        self.days[(self.position(day) + 1) % 7]
    }
}

impl Default for WeekOrder {
    fn default() -> Self {
        WeekOrder::new(Weekday::Sunday)
    }
}
