use std::sync::Arc;

use chrono::NaiveDate;

use crate::time::calendar::holidayentry::HolidayEntry;
use crate::time::recurringholiday::recurringholiday::RecurringHoliday;
use crate::time::recurringholiday::easterrelatedholiday::EasterRelatedHoliday;
use crate::time::recurringholiday::fixeddateholiday::FixedDateHoliday;

/// Source of official national holidays.
///
/// Entries carry the official (English) names; translation for display is
/// done by the consumer. Implementations may be expensive, callers are
/// expected to memoize per year.
pub trait HolidayProvider: Send + Sync {
    fn national_holidays(&self, year: i32) -> Vec<HolidayEntry>;
}

/// A recurring rule with the official name of the holiday it produces.
#[derive(Clone)]
pub struct NamedRecurringHoliday {
    name: String,
    rule: Arc<dyn RecurringHoliday>
}

impl NamedRecurringHoliday {
    pub fn new(name: impl Into<String>, rule: Arc<dyn RecurringHoliday>) -> NamedRecurringHoliday {
        NamedRecurringHoliday { name: name.into(), rule }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn rule(&self) -> &Arc<dyn RecurringHoliday> {
        &self.rule
    }
}

/// National calendar described by a list of recurring rules.
#[derive(Clone, Default)]
pub struct RecurringHolidayProvider {
    holidays: Vec<NamedRecurringHoliday>
}

impl RecurringHolidayProvider {
    pub fn new(holidays: Vec<NamedRecurringHoliday>) -> RecurringHolidayProvider {
        RecurringHolidayProvider { holidays }
    }

    /// Belgian public holidays.
    pub fn belgium() -> RecurringHolidayProvider {
        let fixed = |name: &str, month: u32, day: u32| {
            FixedDateHoliday::new(month, day)
                .map(|h| NamedRecurringHoliday::new(name, Arc::new(h)))
        };
        let easter = |name: &str, shift_days: i32| {
            Some(NamedRecurringHoliday::new(name, Arc::new(EasterRelatedHoliday::new(shift_days))))
        };

        let holidays = [
            fixed("New year", 1, 1),
            easter("Easter Sunday", 0),
            easter("Easter Monday", 1),
            fixed("Labour Day", 5, 1),
            easter("Ascension Thursday", 39),
            easter("Whit Sunday", 49),
            easter("Whit Monday", 50),
            fixed("National Day", 7, 21),
            fixed("Assumption of Mary to Heaven", 8, 15),
            fixed("All Saints Day", 11, 1),
            fixed("Armistice of 1918", 11, 11),
            fixed("Christmas Day", 12, 25),
        ];
        RecurringHolidayProvider::new(holidays.into_iter().flatten().collect())
    }

    pub fn holidays(&self) -> &[NamedRecurringHoliday] {
        &self.holidays
    }
}

impl HolidayProvider for RecurringHolidayProvider {
    fn national_holidays(&self, year: i32) -> Vec<HolidayEntry> {
        let mut entries: Vec<HolidayEntry> = self.holidays
            .iter()
            .flat_map(|h| {
                let mut dates: Vec<NaiveDate> = h.rule.get_holiday(year).into_iter().collect();
                dates.sort();
                dates.into_iter().map(move |d| HolidayEntry::new(d, h.name.as_str()))
            })
            .collect();
        entries.sort_by_key(|e| e.date());
        entries
    }
}
