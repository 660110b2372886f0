use chrono::NaiveDate;
use rand::Rng;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::time::calendar::calendarclassifier::CalendarClassifier;
use crate::time::calendar::calendarerror::CalendarError;
use crate::time::utility::days_of_month;
use crate::timesheet::daylabels::DayLabels;
use crate::timesheet::descriptionresolver::DescriptionResolver;
use crate::timesheet::durationsampler::{DurationSampler, SamplerError};
use crate::timesheet::personcontext::PersonContext;
use crate::timesheet::workingdayscounter::{WorkingDays, WorkingDaysCounter};

#[derive(Debug, Clone, PartialEq, Error)]
pub enum TimesheetError {
    #[error(transparent)]
    Calendar(#[from] CalendarError),
    #[error(transparent)]
    Sampler(#[from] SamplerError)
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimesheetRow {
    pub date: NaiveDate,
    pub label: String,
    pub counts_as_weekend: bool,
    /// Worked hours; `None` on days that are not worked.
    pub hours: Option<f64>
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MonthSheet {
    pub year: i32,
    pub month: u32,
    pub working_days: WorkingDays,
    pub rows: Vec<TimesheetRow>
}

impl MonthSheet {
    pub fn total_hours(&self) -> f64 {
        self.rows.iter().filter_map(|r| r.hours).sum()
    }
}

/// Assembles a full month: one row per calendar day, labelled, with sampled
/// hours on the days that are worked.
pub struct MonthSheetBuilder<'a> {
    classifier: &'a CalendarClassifier,
    labels: &'a DayLabels,
    sampler: &'a DurationSampler
}

impl<'a> MonthSheetBuilder<'a> {
    pub fn new(
        classifier: &'a CalendarClassifier,
        labels: &'a DayLabels,
        sampler: &'a DurationSampler
    ) -> MonthSheetBuilder<'a> {
        MonthSheetBuilder { classifier, labels, sampler }
    }

    pub fn build<R: Rng + ?Sized>(
        &self,
        year: i32,
        month: u32,
        first_day: u32,
        last_day: u32,
        person: &PersonContext,
        rng: &mut R
    ) -> Result<MonthSheet, TimesheetError> {
        let working_days = WorkingDaysCounter::new(self.classifier)
            .count_for(year, month, first_day, last_day, person)?;
        let durations = self.sampler
            .sample_durations(rng, working_days.full_days, working_days.half_days)?;
        let resolver = DescriptionResolver::new(self.classifier, self.labels);
        let partition = self.classifier.partition_for(year);

        let mut full_hours = durations.full_days.into_iter();
        let mut half_hours = durations.half_days.into_iter();
        let mut rows = Vec::with_capacity(days_of_month(year, month) as usize);

        for day in 1..=days_of_month(year, month) {
            let Some(d) = NaiveDate::from_ymd_opt(year, month, day) else {
                break;
            };
            let description = resolver.describe_for(d, first_day, last_day, person);

            // Same exclusion order as the working days count.
            let worked = (first_day..=last_day).contains(&day)
                && !partition.is_weekend(d)
                && !partition.is_national_holiday(d)
                && !partition.is_institution_holiday(d)
                && !person.is_on_holiday(d)
                && !person.is_sick(d);
            let hours = match (worked, person.is_half_day(d)) {
                (false, _) => None,
                (true, true) => half_hours.next(),
                (true, false) => full_hours.next()
            };

            rows.push(TimesheetRow {
                date: d,
                label: description.label,
                counts_as_weekend: description.counts_as_weekend,
                hours
            });
        }

        Ok(MonthSheet { year, month, working_days, rows })
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use rand::SeedableRng;
    use rand::rngs::StdRng;

    use super::*;
    use crate::time::calendar::holidayprovider::RecurringHolidayProvider;
    use crate::time::calendar::institutionholidaytable::InstitutionHolidayTable;
    use crate::time::calendar::weekendmask::WeekendMask;
    use crate::timesheet::durationsampler::DurationSamplerSettings;

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_hours_follow_working_days() {
        let classifier = CalendarClassifier::new(
            Arc::new(RecurringHolidayProvider::belgium()),
            InstitutionHolidayTable::umons(),
            WeekendMask::default()
        );
        let labels = DayLabels::default();
        let sampler = DurationSampler::new(DurationSamplerSettings::new(6.0, 8.0)).unwrap();
        let person = PersonContext::new([ymd(2024, 5, 2)]).with_half_days([ymd(2024, 5, 3)]);
        let mut rng = StdRng::seed_from_u64(2024);

        let sheet = MonthSheetBuilder::new(&classifier, &labels, &sampler)
            .build(2024, 5, 1, 31, &person, &mut rng)
            .unwrap();

        assert_eq!(sheet.rows.len(), 31);
        let worked = sheet.rows.iter().filter(|r| r.hours.is_some()).count();
        assert_eq!(worked, sheet.working_days.full_days + sheet.working_days.half_days);
        assert_eq!(sheet.working_days.half_days, 1);

        let labour_day = &sheet.rows[0];
        assert_eq!(labour_day.label, "JF - Fête du travail");
        assert_eq!(labour_day.hours, None);
        assert_eq!(sheet.rows[1].label, "Congé chercheur");
        assert!(sheet.rows[2].hours.is_some_and(|h| h <= 4.0));
        assert!(sheet.total_hours() > 0.0);
    }

    #[test]
    fn test_invalid_range_is_reported() {
        let classifier = CalendarClassifier::new(
            Arc::new(RecurringHolidayProvider::default()),
            InstitutionHolidayTable::new(),
            WeekendMask::default()
        );
        let labels = DayLabels::default();
        let sampler = DurationSampler::new(DurationSamplerSettings::new(6.0, 8.0)).unwrap();
        let mut rng = StdRng::seed_from_u64(0);
        let result = MonthSheetBuilder::new(&classifier, &labels, &sampler)
            .build(2023, 2, 1, 30, &PersonContext::default(), &mut rng);
        assert!(matches!(result, Err(TimesheetError::Calendar(CalendarError::InvalidRange { .. }))));
    }
}
