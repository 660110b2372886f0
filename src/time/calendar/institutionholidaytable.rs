use std::collections::HashMap;

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::time::calendar::holidayentry::HolidayEntry;

/// Kind of institution-specific day off.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum InstitutionHolidayCategory {
    /// Compensates a national holiday that fell on a weekend.
    MakeupDay,
    CommunityHoliday,
    WinterBreak,
    Other
}

impl InstitutionHolidayCategory {
    /// Categorizes a label by the two trigger phrases; everything else is `Other`.
    pub fn infer(label: &str, makeup_prefix: &str, community_prefix: &str) -> InstitutionHolidayCategory {
        if !makeup_prefix.is_empty() && label.starts_with(makeup_prefix) {
            InstitutionHolidayCategory::MakeupDay
        } else if !community_prefix.is_empty() && label.starts_with(community_prefix) {
            InstitutionHolidayCategory::CommunityHoliday
        } else {
            InstitutionHolidayCategory::Other
        }
    }

    /// Whether the raw label is displayed without the institution prefix.
    pub fn shows_raw_label(&self) -> bool {
        matches!(
            self,
            InstitutionHolidayCategory::MakeupDay | InstitutionHolidayCategory::CommunityHoliday
        )
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InstitutionHoliday {
    entry: HolidayEntry,
    category: InstitutionHolidayCategory
}

impl InstitutionHoliday {
    pub fn new(date: NaiveDate, label: impl Into<String>, category: InstitutionHolidayCategory) -> InstitutionHoliday {
        InstitutionHoliday { entry: HolidayEntry::new(date, label), category }
    }

    pub fn date(&self) -> NaiveDate {
        self.entry.date()
    }

    pub fn label(&self) -> &str {
        self.entry.label()
    }

    pub fn category(&self) -> InstitutionHolidayCategory {
        self.category
    }

    pub fn entry(&self) -> &HolidayEntry {
        &self.entry
    }
}

/// Hand-maintained institution days off, per year, in display language.
///
/// Entries keep their insertion order. The table is not checked against the
/// national calendar: a date may appear in both.
#[derive(Debug, Clone, Default)]
pub struct InstitutionHolidayTable {
    by_year: HashMap<i32, Vec<InstitutionHoliday>>
}

impl InstitutionHolidayTable {
    pub fn new() -> InstitutionHolidayTable {
        InstitutionHolidayTable::default()
    }

    /// Appends an entry under the year of its date.
    pub fn insert(&mut self, holiday: InstitutionHoliday) {
        self.by_year
            .entry(holiday.date().year())
            .or_default()
            .push(holiday);
    }

    pub fn with(mut self, holiday: InstitutionHoliday) -> InstitutionHolidayTable {
        self.insert(holiday);
        self
    }

    /// Entries for `year`, empty when the year is not maintained.
    pub fn holidays(&self, year: i32) -> &[InstitutionHoliday] {
        self.by_year.get(&year).map(|v| v.as_slice()).unwrap_or(&[])
    }

    pub fn find(&self, d: NaiveDate) -> Option<&InstitutionHoliday> {
        self.holidays(d.year())
            .iter()
            .find(|h| h.date() == d)
    }

    pub fn years(&self) -> Vec<i32> {
        let mut years: Vec<i32> = self.by_year.keys().copied().collect();
        years.sort();
        years
    }

    /// UMONS days off for 2023 to 2025.
    pub fn umons() -> InstitutionHolidayTable {
        use InstitutionHolidayCategory::*;

        const WINTER: &str = "Vacances d'hiver";
        const COMMUNITY: &str = "Fête de la Communauté française";
        const BOXING_DAY: &str = "Noël second jour";

        let rows: [(i32, u32, u32, &str, InstitutionHolidayCategory); 29] = [
            (2023, 1, 2, "Récupération du 01/01/2023", MakeupDay),
            (2023, 1, 3, WINTER, WinterBreak),
            (2023, 1, 4, WINTER, WinterBreak),
            (2023, 1, 5, WINTER, WinterBreak),
            (2023, 1, 6, WINTER, WinterBreak),
            (2023, 9, 27, COMMUNITY, CommunityHoliday),
            (2023, 12, 26, BOXING_DAY, Other),
            (2023, 12, 27, "Récupération du 11/11/2023", MakeupDay),
            (2023, 12, 28, WINTER, WinterBreak),
            (2023, 12, 29, WINTER, WinterBreak),
            (2024, 1, 2, WINTER, WinterBreak),
            (2024, 1, 3, WINTER, WinterBreak),
            (2024, 9, 27, COMMUNITY, CommunityHoliday),
            (2024, 12, 23, "Récupération du 21/07/2024", MakeupDay),
            (2024, 12, 24, WINTER, WinterBreak),
            (2024, 12, 26, BOXING_DAY, Other),
            (2024, 12, 27, WINTER, WinterBreak),
            (2024, 12, 30, WINTER, WinterBreak),
            (2024, 12, 31, WINTER, WinterBreak),
            (2025, 1, 2, WINTER, WinterBreak),
            (2025, 1, 3, WINTER, WinterBreak),
            (2025, 9, 27, COMMUNITY, CommunityHoliday),
            (2025, 12, 22, "Récupération du 27/09/2025", MakeupDay),
            (2025, 12, 23, "Récupération du 01/11/2025", MakeupDay),
            (2025, 12, 24, WINTER, WinterBreak),
            (2025, 12, 26, BOXING_DAY, Other),
            (2025, 12, 29, WINTER, WinterBreak),
            (2025, 12, 30, WINTER, WinterBreak),
            (2025, 12, 31, WINTER, WinterBreak),
        ];

        let mut table = InstitutionHolidayTable::new();
        for (year, month, day, label, category) in rows {
            if let Some(d) = NaiveDate::from_ymd_opt(year, month, day) {
                table.insert(InstitutionHoliday::new(d, label, category));
            }
        }
        table
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_umons_table() {
        let table = InstitutionHolidayTable::umons();
        assert_eq!(table.years(), vec![2023, 2024, 2025]);
        assert_eq!(table.holidays(2023).len(), 10);
        assert_eq!(table.holidays(2024).len(), 9);
        assert_eq!(table.holidays(2025).len(), 10);
        assert!(table.holidays(2026).is_empty());

        let community = table.find(ymd(2024, 9, 27)).unwrap();
        assert_eq!(community.label(), "Fête de la Communauté française");
        assert_eq!(community.category(), InstitutionHolidayCategory::CommunityHoliday);
        assert!(table.find(ymd(2024, 9, 26)).is_none());
    }

    #[test]
    fn test_infer_category() {
        let infer = |label| InstitutionHolidayCategory::infer(label, "Récupération", "Fête de la Communauté française");
        assert_eq!(infer("Récupération du 21/07/2024"), InstitutionHolidayCategory::MakeupDay);
        assert_eq!(infer("Fête de la Communauté française"), InstitutionHolidayCategory::CommunityHoliday);
        assert_eq!(infer("Vacances d'hiver"), InstitutionHolidayCategory::Other);
        assert!(!InstitutionHolidayCategory::WinterBreak.shows_raw_label());
        assert!(InstitutionHolidayCategory::MakeupDay.shows_raw_label());
    }

    #[test]
    fn test_insert_keeps_order() {
        let table = InstitutionHolidayTable::new()
            .with(InstitutionHoliday::new(ymd(2030, 5, 2), "b", InstitutionHolidayCategory::Other))
            .with(InstitutionHoliday::new(ymd(2030, 1, 2), "a", InstitutionHolidayCategory::Other));
        let labels: Vec<&str> = table.holidays(2030).iter().map(|h| h.label()).collect();
        assert_eq!(labels, vec!["b", "a"]);
    }
}
