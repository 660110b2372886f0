use std::collections::HashSet;

use chrono::{Datelike, NaiveDate, Weekday};

/// Weekend days as a bitmask: Mon(0), Tue(1), ..., Sun(6).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WeekendMask(u8);

impl WeekendMask {
    pub fn new(weekends: &HashSet<Weekday>) -> Self {
        let mut mask = 0u8;
        for &weekday in weekends {
            mask |= 1u8 << weekday.num_days_from_monday();
        }
        WeekendMask(mask)
    }

    /// ISO weekdays 6 and 7.
    pub const fn saturday_sunday() -> Self {
        WeekendMask((1u8 << 5) | (1u8 << 6))
    }

    /// No weekend at all; every day is a candidate working day.
    pub const fn none() -> Self {
        WeekendMask(0)
    }

    #[inline]
    pub fn is_weekend_day(&self, weekday: Weekday) -> bool {
        let bit = 1u8 << weekday.num_days_from_monday();
        (self.0 & bit) != 0
    }

    #[inline]
    pub fn is_weekend(&self, d: NaiveDate) -> bool {
        self.is_weekend_day(d.weekday())
    }

    pub fn to_hashset(&self) -> HashSet<Weekday> {
        (0..7u8)
            .filter(|day| (self.0 & (1u8 << day)) != 0)
            .filter_map(|day| Weekday::try_from(day).ok())
            .collect()
    }
}

impl Default for WeekendMask {
    fn default() -> Self {
        WeekendMask::saturday_sunday()
    }
}
