use std::collections::{HashMap, HashSet};
use std::fs::File;
use std::io::{BufReader, Read};
use std::sync::Arc;

use chrono::{Datelike, NaiveDate, Weekday};
use serde::Deserialize;
use tracing::info;

use crate::configurationerror::{ConfigurationError, parse_json_value};
use crate::time::calendar::calendarclassifier::CalendarClassifier;
use crate::time::calendar::holidayprovider::{HolidayProvider, NamedRecurringHoliday, RecurringHolidayProvider};
use crate::time::calendar::institutionholidaytable::{
    InstitutionHoliday,
    InstitutionHolidayCategory,
    InstitutionHolidayTable
};
use crate::time::calendar::weekendmask::WeekendMask;
use crate::time::recurringholiday::easterrelatedholiday::EasterRelatedHoliday;
use crate::time::recurringholiday::fixeddateholiday::FixedDateHoliday;
use crate::timesheet::daylabels::DayLabels;
use crate::timesheet::durationsampler::{DurationSampler, DurationSamplerSettings};

#[derive(Deserialize)]
enum HolidayType {
    EasterRelated,
    FixedDate
}

#[derive(Deserialize)]
struct HolidayTypedObject {
    name: String,
    holiday_type: HolidayType
}

#[derive(Deserialize)]
struct EasterRelatedHolidayJsonProp {
    shift_days: i32
}

#[derive(Deserialize)]
struct FixedDateHolidayJsonProp {
    month: u32,
    day: u32
}

fn get_named_holiday_from_json(json: serde_json::Value) -> Result<NamedRecurringHoliday, ConfigurationError> {
    let typed: HolidayTypedObject = parse_json_value(json.clone())?;
    match typed.holiday_type {
        HolidayType::EasterRelated => {
            let prop: EasterRelatedHolidayJsonProp = parse_json_value(json)?;
            Ok(NamedRecurringHoliday::new(typed.name, Arc::new(EasterRelatedHoliday::new(prop.shift_days))))
        },
        HolidayType::FixedDate => {
            let prop: FixedDateHolidayJsonProp = parse_json_value(json)?;
            let holiday = FixedDateHoliday::new(prop.month, prop.day).ok_or_else(|| {
                ConfigurationError::InvalidHolidayRule {
                    name: typed.name.clone(),
                    reason: format!("no such day {:02}-{:02}", prop.month, prop.day)
                }
            })?;
            Ok(NamedRecurringHoliday::new(typed.name, Arc::new(holiday)))
        }
    }
}

#[derive(Deserialize)]
struct InstitutionHolidayJsonProp {
    date: NaiveDate,
    label: String,
    #[serde(default)]
    category: Option<InstitutionHolidayCategory>
}

#[derive(Deserialize)]
struct ConfigurationJsonProp {
    #[serde(default)]
    weekends: Option<HashSet<Weekday>>,
    #[serde(default)]
    national_holidays: Option<Vec<serde_json::Value>>,
    #[serde(default)]
    institution_holidays: Option<HashMap<i32, Vec<InstitutionHolidayJsonProp>>>,
    #[serde(default)]
    labels: DayLabels,
    #[serde(default)]
    sampler: Option<DurationSamplerSettings>
}

/// Everything needed to classify days and synthesize hours.
///
/// Sections missing from the JSON document fall back to the built-in
/// Belgian calendar, the UMONS table, French labels and 6 to 8 hour days.
pub struct TimesheetConfiguration {
    weekend_mask: WeekendMask,
    provider: Arc<dyn HolidayProvider>,
    institution_table: InstitutionHolidayTable,
    labels: DayLabels,
    sampler_settings: DurationSamplerSettings
}

impl Default for TimesheetConfiguration {
    fn default() -> Self {
        TimesheetConfiguration {
            weekend_mask: WeekendMask::default(),
            provider: Arc::new(RecurringHolidayProvider::belgium()),
            institution_table: InstitutionHolidayTable::umons(),
            labels: DayLabels::default(),
            sampler_settings: DurationSamplerSettings::new(6.0, 8.0)
        }
    }
}

impl TimesheetConfiguration {
    pub fn new(
        weekend_mask: WeekendMask,
        provider: Arc<dyn HolidayProvider>,
        institution_table: InstitutionHolidayTable,
        labels: DayLabels,
        sampler_settings: DurationSamplerSettings
    ) -> TimesheetConfiguration {
        TimesheetConfiguration { weekend_mask, provider, institution_table, labels, sampler_settings }
    }

    pub fn from_reader(file_path: &str) -> Result<TimesheetConfiguration, ConfigurationError> {
        let file = File::open(file_path)?;
        let config = Self::from_json_reader(BufReader::new(file))?;
        info!(path = file_path, "loaded timesheet configuration");
        Ok(config)
    }

    pub fn from_json_reader<R: Read>(reader: R) -> Result<TimesheetConfiguration, ConfigurationError> {
        let json_value: serde_json::Value = serde_json::from_reader(reader)?;
        Self::from_json_value(json_value)
    }

    pub fn from_json_value(json_value: serde_json::Value) -> Result<TimesheetConfiguration, ConfigurationError> {
        let json_prop: ConfigurationJsonProp = parse_json_value(json_value)?;
        let defaults = TimesheetConfiguration::default();

        let weekend_mask = json_prop.weekends
            .map_or(defaults.weekend_mask, |w| WeekendMask::new(&w));

        let provider: Arc<dyn HolidayProvider> = match json_prop.national_holidays {
            Some(json_vec) => {
                let holidays = json_vec
                    .into_iter()
                    .map(get_named_holiday_from_json)
                    .collect::<Result<Vec<_>, _>>()?;
                Arc::new(RecurringHolidayProvider::new(holidays))
            },
            None => defaults.provider
        };

        let labels = json_prop.labels;

        let institution_table = match json_prop.institution_holidays {
            Some(by_year) => {
                let mut by_year: Vec<_> = by_year.into_iter().collect();
                by_year.sort_by_key(|(year, _)| *year);
                let mut table = InstitutionHolidayTable::new();
                for (year, props) in by_year {
                    for prop in props {
                        if prop.date.year() != year {
                            return Err(ConfigurationError::InvalidInstitutionDate { year, date: prop.date });
                        }
                        let category = prop.category
                            .unwrap_or_else(|| labels.infer_category(&prop.label));
                        table.insert(InstitutionHoliday::new(prop.date, prop.label, category));
                    }
                }
                table
            },
            None => defaults.institution_table
        };

        let sampler_settings = json_prop.sampler.unwrap_or(defaults.sampler_settings);
        sampler_settings.validate()?;

        Ok(TimesheetConfiguration::new(weekend_mask, provider, institution_table, labels, sampler_settings))
    }

    pub fn weekend_mask(&self) -> &WeekendMask {
        &self.weekend_mask
    }

    pub fn institution_table(&self) -> &InstitutionHolidayTable {
        &self.institution_table
    }

    pub fn labels(&self) -> &DayLabels {
        &self.labels
    }

    pub fn sampler_settings(&self) -> &DurationSamplerSettings {
        &self.sampler_settings
    }

    /// A classifier with an empty year cache.
    pub fn classifier(&self) -> CalendarClassifier {
        CalendarClassifier::new(
            Arc::clone(&self.provider),
            self.institution_table.clone(),
            self.weekend_mask
        )
    }

    pub fn sampler(&self) -> Result<DurationSampler, ConfigurationError> {
        Ok(DurationSampler::new(self.sampler_settings.clone())?)
    }
}
