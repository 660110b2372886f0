use std::collections::HashSet;

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::time::calendar::calendarclassifier::CalendarClassifier;
use crate::timesheet::daylabels::DayLabels;
use crate::timesheet::personcontext::PersonContext;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DayDescription {
    pub label: String,
    pub counts_as_weekend: bool
}

impl DayDescription {
    fn new(label: impl Into<String>, counts_as_weekend: bool) -> DayDescription {
        DayDescription { label: label.into(), counts_as_weekend }
    }
}

/// Turns a date into a timesheet label.
///
/// First match wins: out of range, weekend, national holiday, institution
/// holiday, researcher leave, sick leave, plain working day (empty label).
///
/// Except for the weekend branch, `counts_as_weekend` is whether the day
/// *number* is one of the weekend day numbers of the date's month in the
/// partition of `year`.
pub struct DescriptionResolver<'a> {
    classifier: &'a CalendarClassifier,
    labels: &'a DayLabels
}

impl<'a> DescriptionResolver<'a> {
    pub fn new(classifier: &'a CalendarClassifier, labels: &'a DayLabels) -> DescriptionResolver<'a> {
        DescriptionResolver { classifier, labels }
    }

    pub fn describe(
        &self,
        d: NaiveDate,
        first_day: u32,
        last_day: u32,
        year: i32,
        researcher_holidays: &HashSet<NaiveDate>,
        sick_days: Option<&HashSet<NaiveDate>>
    ) -> DayDescription {
        let partition = self.classifier.partition_for(year);
        let day = d.day();
        let weekend_day_number = partition.weekend_days_of_month(d.month()).contains(&day);

        if day < first_day || day > last_day {
            return DayDescription::new(self.labels.out_of_range.as_str(), weekend_day_number);
        }

        if partition.is_weekend(d) {
            return DayDescription::new(self.labels.weekend.as_str(), true);
        }

        let name = self.classifier.holiday_name(d);

        if partition.is_national_holiday(d) {
            return DayDescription::new(self.labels.national_holiday(&name), weekend_day_number);
        }

        if partition.is_institution_holiday(d) {
            let category = self.classifier
                .institution_holiday(d)
                .map_or_else(|| self.labels.infer_category(&name), |h| h.category());
            let label = if category.shows_raw_label() {
                name
            } else {
                self.labels.institution_holiday(&name)
            };
            return DayDescription::new(label, weekend_day_number);
        }

        if researcher_holidays.contains(&d) {
            return DayDescription::new(self.labels.researcher_leave.as_str(), weekend_day_number);
        }

        if sick_days.is_some_and(|s| s.contains(&d)) {
            return DayDescription::new(self.labels.sick_leave.as_str(), weekend_day_number);
        }

        DayDescription::new("", weekend_day_number)
    }

    pub fn describe_for(
        &self,
        d: NaiveDate,
        first_day: u32,
        last_day: u32,
        person: &PersonContext
    ) -> DayDescription {
        self.describe(d, first_day, last_day, d.year(), &person.holidays, person.sick_days.as_ref())
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use crate::time::calendar::holidayprovider::RecurringHolidayProvider;
    use crate::time::calendar::institutionholidaytable::InstitutionHolidayTable;
    use crate::time::calendar::weekendmask::WeekendMask;

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

    fn describe(d: NaiveDate, person: &PersonContext) -> DayDescription {
        let c = classifier();
        let labels = DayLabels::default();
        DescriptionResolver::new(&c, &labels).describe_for(d, 1, 31, person)
    }

    #[test]
    fn test_community_holiday_shows_raw_label() {
        let description = describe(ymd(2024, 9, 27), &PersonContext::default());
        assert_eq!(description.label, "Fête de la Communauté française");
        assert!(!description.counts_as_weekend);
    }

    #[test]
    fn test_makeup_day_shows_raw_label() {
        let description = describe(ymd(2024, 12, 23), &PersonContext::default());
        assert_eq!(description.label, "Récupération du 21/07/2024");
    }

    #[test]
    fn test_winter_break_is_prefixed() {
        let description = describe(ymd(2024, 12, 24), &PersonContext::default());
        assert_eq!(description.label, "Congé UMONS - Vacances d'hiver");
        let description = describe(ymd(2024, 12, 26), &PersonContext::default());
        assert_eq!(description.label, "Congé UMONS - Noël second jour");
    }

    #[test]
    fn test_national_holiday() {
        let description = describe(ymd(2024, 5, 9), &PersonContext::default());
        assert_eq!(description, DayDescription::new("JF - Jeudi de l'Ascension", false));
        let description = describe(ymd(2024, 5, 20), &PersonContext::default());
        assert_eq!(description.label, "JF - Lundi de Pentecôte");
    }

    #[test]
    fn test_weekend_before_holiday() {
        // National Day 2024 is a Sunday.
        let description = describe(ymd(2024, 7, 21), &PersonContext::default());
        assert_eq!(description, DayDescription::new("Weekend", true));
    }

    #[test]
    fn test_out_of_range() {
        let c = classifier();
        let labels = DayLabels::default();
        let resolver = DescriptionResolver::new(&c, &labels);
        let empty = HashSet::new();

        // 2024-10-05 is a Saturday.
        let description = resolver.describe(ymd(2024, 10, 5), 10, 20, 2024, &empty, None);
        assert_eq!(description, DayDescription::new("Hors convention", true));
        let description = resolver.describe(ymd(2024, 10, 21), 10, 20, 2024, &empty, None);
        assert_eq!(description, DayDescription::new("Hors convention", false));
    }

    #[test]
    fn test_person_absences() {
        let person = PersonContext::new([ymd(2024, 10, 14)]).with_sick_days([ymd(2024, 10, 15), ymd(2024, 10, 14)]);
        assert_eq!(describe(ymd(2024, 10, 14), &person).label, "Congé chercheur");
        assert_eq!(describe(ymd(2024, 10, 15), &person).label, "Congé maladie");
        assert_eq!(describe(ymd(2024, 10, 16), &person), DayDescription::new("", false));
    }

    #[test]
    fn test_sick_days_ignored_when_absent() {
        let person = PersonContext::default();
        assert_eq!(describe(ymd(2024, 10, 15), &person).label, "");
    }

    #[test]
    fn test_institution_category_drives_label_not_text() {
        use crate::time::calendar::institutionholidaytable::{InstitutionHoliday, InstitutionHolidayCategory};

        let table = InstitutionHolidayTable::new().with(InstitutionHoliday::new(
            ymd(2024, 10, 16),
            "Rentrée académique",
            InstitutionHolidayCategory::CommunityHoliday
        ));
        let c = CalendarClassifier::new(Arc::new(RecurringHolidayProvider::default()), table, WeekendMask::default());
        let labels = DayLabels::default();
        let description = DescriptionResolver::new(&c, &labels)
            .describe(ymd(2024, 10, 16), 1, 31, 2024, &HashSet::new(), None);
        assert_eq!(description.label, "Rentrée académique");
    }
}
