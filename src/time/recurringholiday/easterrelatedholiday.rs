use std::collections::HashSet;

use chrono::{Duration, NaiveDate};

use super::recurringholiday::RecurringHoliday;

/// Western (Gregorian) Easter Sunday, anonymous Gregorian algorithm.
/// Defined for 1583..=4099; `None` outside that range.
pub fn western_easter(year: i32) -> Option<NaiveDate> {
    if !(1583..=4099).contains(&year) {
        return None;
    }

    let a = year % 19;
    let b = year / 100;
    let c = year % 100;
    let d = b / 4;
    let e = b % 4;
    let f = (b + 8) / 25;
    let g = (b - f + 1) / 3;
    let h = (19 * a + b - d - g + 15) % 30;
    let i = c / 4;
    let k = c % 4;
    let l = (32 + 2 * e + 2 * i - h - k) % 7;
    let m = (a + 11 * h + 22 * l) / 451;
    let month = (h + l - 7 * m + 114) / 31;
    let day = (h + l - 7 * m + 114) % 31 + 1;

    NaiveDate::from_ymd_opt(year, month as u32, day as u32)
}

/// A holiday at a fixed offset from Easter Sunday (Easter Monday is +1,
/// Ascension +39, Whit Monday +50).
#[derive(Clone)]
pub struct EasterRelatedHoliday {
    shift_days: i32
}

impl EasterRelatedHoliday {
    pub fn new(shift_days: i32) -> EasterRelatedHoliday {
        EasterRelatedHoliday { shift_days }
    }

    pub fn shift_days(&self) -> i32 {
        self.shift_days
    }
}

impl RecurringHoliday for EasterRelatedHoliday {
    fn get_holiday(&self, year: i32) -> HashSet<NaiveDate> {
        let mut holiday_set = HashSet::new();

        if let Some(d) = western_easter(year)
            .and_then(|easter| easter.checked_add_signed(Duration::days(self.shift_days as i64))) {
            holiday_set.insert(d);
        }

        holiday_set
    }
}
