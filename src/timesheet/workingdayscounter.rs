use std::collections::HashSet;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::time::calendar::calendarclassifier::CalendarClassifier;
use crate::time::calendar::calendarerror::CalendarError;
use crate::timesheet::personcontext::PersonContext;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkingDays {
    pub full_days: usize,
    pub half_days: usize
}

pub struct WorkingDaysCounter<'a> {
    classifier: &'a CalendarClassifier
}

impl<'a> WorkingDaysCounter<'a> {
    pub fn new(classifier: &'a CalendarClassifier) -> WorkingDaysCounter<'a> {
        WorkingDaysCounter { classifier }
    }

    /// Counts days of `first_day..=last_day` that are worked.
    ///
    /// A day is dropped when it is a weekend, a national holiday, an
    /// institution holiday, a researcher holiday or a sick day, in that
    /// order; otherwise it is a half day if listed in `half_days`, else a
    /// full day.
    pub fn count_working_days(
        &self,
        year: i32,
        month: u32,
        first_day: u32,
        last_day: u32,
        researcher_holidays: &HashSet<NaiveDate>,
        half_days: Option<&HashSet<NaiveDate>>,
        sick_days: Option<&HashSet<NaiveDate>>
    ) -> Result<WorkingDays, CalendarError> {
        CalendarError::check_range(year, month, first_day, last_day)?;

        let partition = self.classifier.partition_for(year);
        let mut counts = WorkingDays::default();

        for day in first_day..=last_day {
            let Some(d) = NaiveDate::from_ymd_opt(year, month, day) else {
                return Err(CalendarError::InvalidRange { year, month, first_day, last_day });
            };

            if partition.is_weekend(d)
                || partition.is_national_holiday(d)
                || partition.is_institution_holiday(d)
                || researcher_holidays.contains(&d)
                || sick_days.is_some_and(|s| s.contains(&d)) {
                continue;
            }

            if half_days.is_some_and(|s| s.contains(&d)) {
                counts.half_days += 1;
                continue;
            }

            counts.full_days += 1;
        }

        Ok(counts)
    }

    pub fn count_for(
        &self,
        year: i32,
        month: u32,
        first_day: u32,
        last_day: u32,
        person: &PersonContext
    ) -> Result<WorkingDays, CalendarError> {
        self.count_working_days(
            year,
            month,
            first_day,
            last_day,
            &person.holidays,
            person.half_days.as_ref(),
            person.sick_days.as_ref()
        )
    }
}
