use std::collections::HashSet;
use std::sync::Arc;

use chrono::{Datelike, NaiveDate};

use crate::time::calendar::holidayprovider::HolidayProvider;
use crate::time::calendar::institutionholidaytable::{InstitutionHoliday, InstitutionHolidayTable};
use crate::time::calendar::translation::translate;
use crate::time::calendar::weekendmask::WeekendMask;
use crate::time::calendar::yearindex::{YearIndex, YearPartition};

/// Answers "is this day special, and how" over national holidays,
/// institution holidays and the weekend rule.
pub struct CalendarClassifier {
    index: YearIndex
}

impl CalendarClassifier {
    pub fn new(
        provider: Arc<dyn HolidayProvider>,
        institution_table: InstitutionHolidayTable,
        weekend_mask: WeekendMask
    ) -> CalendarClassifier {
        CalendarClassifier { index: YearIndex::new(provider, institution_table, weekend_mask) }
    }

    pub fn from_index(index: YearIndex) -> CalendarClassifier {
        CalendarClassifier { index }
    }

    pub fn index(&self) -> &YearIndex {
        &self.index
    }

    pub fn partition_for(&self, year: i32) -> Arc<YearPartition> {
        self.index.partition_for(year)
    }

    pub fn is_institution_holiday(&self, d: NaiveDate) -> bool {
        self.partition_for(d.year()).is_institution_holiday(d)
    }

    pub fn is_holiday(&self, d: NaiveDate, include_institution: bool) -> bool {
        let partition = self.partition_for(d.year());
        partition.is_national_holiday(d)
            || (include_institution && partition.is_institution_holiday(d))
    }

    #[inline]
    pub fn is_weekend(&self, d: NaiveDate) -> bool {
        self.index.weekend_mask().is_weekend(d)
    }

    /// Holiday on a weekend day, i.e. one that may be compensated by a make-up day.
    pub fn is_holiday_falling_on_weekend(&self, d: NaiveDate) -> bool {
        self.is_holiday(d, true) && self.is_weekend(d)
    }

    pub fn is_holiday_to_recover(&self, d: NaiveDate) -> bool {
        self.is_holiday_falling_on_weekend(d)
    }

    pub fn institution_holiday(&self, d: NaiveDate) -> Option<&InstitutionHoliday> {
        self.index.institution_table().find(d)
    }

    /// Display name of the holiday on `d`: the translated national name
    /// first, then the institution label, else an empty string.
    pub fn holiday_name(&self, d: NaiveDate) -> String {
        let partition = self.partition_for(d.year());
        if let Some(entry) = partition.national_entries().iter().find(|e| e.date() == d) {
            return translate(entry.label()).to_owned();
        }

        self.institution_holiday(d)
            .map(|h| h.label().to_owned())
            .unwrap_or_default()
    }

    pub fn weekend_days_of_month(&self, year: i32, month: u32) -> HashSet<u32> {
        self.partition_for(year).weekend_days_of_month(month)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::time::calendar::holidayprovider::RecurringHolidayProvider;
    use crate::time::calendar::institutionholidaytable::InstitutionHolidayCategory;

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn classifier() -> CalendarClassifier {
        CalendarClassifier::new(
            Arc::new(RecurringHolidayProvider::belgium()),
            InstitutionHolidayTable::umons(),
            WeekendMask::default()
        )
    }

    #[test]
    fn test_institution_dates_are_not_national() {
        let c = classifier();
        let table = InstitutionHolidayTable::umons();
        for year in table.years() {
            for h in table.holidays(year) {
                assert!(c.is_institution_holiday(h.date()), "{}", h.date());
                assert!(c.is_holiday(h.date(), true));
                let national = c.partition_for(year).is_national_holiday(h.date());
                assert_eq!(c.is_holiday(h.date(), false), national, "{}", h.date());
            }
        }
    }

    #[test]
    fn test_is_holiday() {
        let c = classifier();
        assert!(c.is_holiday(ymd(2024, 7, 21), false));
        assert!(c.is_holiday(ymd(2024, 12, 24), true));
        assert!(!c.is_holiday(ymd(2024, 12, 24), false));
        assert!(!c.is_holiday(ymd(2024, 10, 15), true));
    }

    #[test]
    fn test_holiday_on_weekend() {
        let c = classifier();
        // National Day 2024 is a Sunday, 2025 a Monday.
        assert!(c.is_holiday_falling_on_weekend(ymd(2024, 7, 21)));
        assert!(c.is_holiday_to_recover(ymd(2024, 7, 21)));
        assert!(!c.is_holiday_falling_on_weekend(ymd(2025, 7, 21)));
        assert!(!c.is_holiday_falling_on_weekend(ymd(2024, 7, 20)));
    }

    #[test]
    fn test_holiday_name() {
        let c = classifier();
        assert_eq!(c.holiday_name(ymd(2024, 12, 25)), "Noël");
        assert_eq!(c.holiday_name(ymd(2024, 3, 31)), "Easter Sunday");
        assert_eq!(c.holiday_name(ymd(2024, 12, 24)), "Vacances d'hiver");
        assert_eq!(c.holiday_name(ymd(2024, 12, 23)), "Récupération du 21/07/2024");
        assert_eq!(c.holiday_name(ymd(2024, 10, 15)), "");
    }

    #[test]
    fn test_national_name_wins_over_institution_label() {
        let table = InstitutionHolidayTable::new().with(InstitutionHoliday::new(
            ymd(2024, 11, 1),
            "Congé de Toussaint",
            InstitutionHolidayCategory::Other
        ));
        let c = CalendarClassifier::new(
            Arc::new(RecurringHolidayProvider::belgium()),
            table,
            WeekendMask::default()
        );
        assert_eq!(c.holiday_name(ymd(2024, 11, 1)), "Toussaint");
        assert!(c.is_institution_holiday(ymd(2024, 11, 1)));
    }
}
