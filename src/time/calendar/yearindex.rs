use std::collections::{HashMap, HashSet};
use std::sync::{Arc, PoisonError, RwLock};

use chrono::{Datelike, NaiveDate};
use tracing::debug;

use crate::time::calendar::holidayentry::HolidayEntry;
use crate::time::calendar::holidayprovider::HolidayProvider;
use crate::time::calendar::institutionholidaytable::InstitutionHolidayTable;
use crate::time::calendar::weekendmask::WeekendMask;

/// Special days of one year, split by source.
///
/// The three sets are not deduplicated against each other: a national
/// holiday on a Sunday is in both `weekends` and `national_holidays`.
#[derive(Debug, Clone, Default)]
pub struct YearPartition {
    year: i32,
    weekends: HashSet<NaiveDate>,
    national_holidays: HashSet<NaiveDate>,
    institution_holidays: HashSet<NaiveDate>,
    national_entries: Vec<HolidayEntry>
}

impl YearPartition {
    /// Walks every day of `year` month by month; a month ends at the first
    /// day number chrono refuses to build.
    pub fn build(
        year: i32,
        weekend_mask: &WeekendMask,
        national_entries: Vec<HolidayEntry>,
        institution_table: &InstitutionHolidayTable
    ) -> YearPartition {
        let national: HashSet<NaiveDate> = national_entries.iter().map(|e| e.date()).collect();
        let institution: HashSet<NaiveDate> = institution_table
            .holidays(year)
            .iter()
            .map(|h| h.date())
            .collect();

        let mut partition = YearPartition {
            year,
            national_entries,
            ..YearPartition::default()
        };

        for month in 1..=12 {
            for day in 1..=31 {
                let Some(d) = NaiveDate::from_ymd_opt(year, month, day) else {
                    break;
                };

                if weekend_mask.is_weekend(d) {
                    partition.weekends.insert(d);
                }
                if national.contains(&d) {
                    partition.national_holidays.insert(d);
                }
                if institution.contains(&d) {
                    partition.institution_holidays.insert(d);
                }
            }
        }

        partition
    }

    pub fn year(&self) -> i32 {
        self.year
    }

    pub fn weekends(&self) -> &HashSet<NaiveDate> {
        &self.weekends
    }

    pub fn national_holidays(&self) -> &HashSet<NaiveDate> {
        &self.national_holidays
    }

    pub fn institution_holidays(&self) -> &HashSet<NaiveDate> {
        &self.institution_holidays
    }

    /// Provider entries with their official names, in provider order.
    pub fn national_entries(&self) -> &[HolidayEntry] {
        &self.national_entries
    }

    pub fn is_weekend(&self, d: NaiveDate) -> bool {
        self.weekends.contains(&d)
    }

    pub fn is_national_holiday(&self, d: NaiveDate) -> bool {
        self.national_holidays.contains(&d)
    }

    pub fn is_institution_holiday(&self, d: NaiveDate) -> bool {
        self.institution_holidays.contains(&d)
    }

    /// Day numbers of the weekend days falling in `month`.
    pub fn weekend_days_of_month(&self, month: u32) -> HashSet<u32> {
        self.weekends
            .iter()
            .filter(|d| d.month() == month)
            .map(|d| d.day())
            .collect()
    }
}

/// Lazily built, never invalidated store of `YearPartition`s.
///
/// Two callers missing the same year at once may both build it; the
/// result is deterministic so the second insert is only wasted work.
pub struct YearIndex {
    provider: Arc<dyn HolidayProvider>,
    institution_table: InstitutionHolidayTable,
    weekend_mask: WeekendMask,
    cache: RwLock<HashMap<i32, Arc<YearPartition>>>
}

impl YearIndex {
    pub fn new(
        provider: Arc<dyn HolidayProvider>,
        institution_table: InstitutionHolidayTable,
        weekend_mask: WeekendMask
    ) -> YearIndex {
        YearIndex {
            provider,
            institution_table,
            weekend_mask,
            cache: RwLock::new(HashMap::new())
        }
    }

    pub fn institution_table(&self) -> &InstitutionHolidayTable {
        &self.institution_table
    }

    pub fn weekend_mask(&self) -> &WeekendMask {
        &self.weekend_mask
    }

    pub fn partition_for(&self, year: i32) -> Arc<YearPartition> {
        if let Some(partition) = self.cache
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(&year) {
            return Arc::clone(partition);
        }

        // Built outside the lock so readers of other years are not blocked.
        let partition = Arc::new(YearPartition::build(
            year,
            &self.weekend_mask,
            self.provider.national_holidays(year),
            &self.institution_table
        ));
        debug!(
            year,
            weekends = partition.weekends.len(),
            national = partition.national_holidays.len(),
            institution = partition.institution_holidays.len(),
            "built year partition"
        );

        let mut cache = self.cache.write().unwrap_or_else(PoisonError::into_inner);
        Arc::clone(cache.entry(year).or_insert(partition))
    }

    pub fn cached_years(&self) -> Vec<i32> {
        let mut years: Vec<i32> = self.cache
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .keys()
            .copied()
            .collect();
        years.sort();
        years
    }
}
