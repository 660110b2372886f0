use std::collections::HashSet;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A researcher's declared absences. Only membership matters.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PersonContext {
    pub holidays: HashSet<NaiveDate>,
    pub sick_days: Option<HashSet<NaiveDate>>,
    pub half_days: Option<HashSet<NaiveDate>>
}

impl PersonContext {
    pub fn new(holidays: impl IntoIterator<Item = NaiveDate>) -> PersonContext {
        PersonContext {
            holidays: holidays.into_iter().collect(),
            ..PersonContext::default()
        }
    }

    pub fn with_sick_days(mut self, sick_days: impl IntoIterator<Item = NaiveDate>) -> PersonContext {
        self.sick_days = Some(sick_days.into_iter().collect());
        self
    }

    pub fn with_half_days(mut self, half_days: impl IntoIterator<Item = NaiveDate>) -> PersonContext {
        self.half_days = Some(half_days.into_iter().collect());
        self
    }

    pub fn is_on_holiday(&self, d: NaiveDate) -> bool {
        self.holidays.contains(&d)
    }

    pub fn is_sick(&self, d: NaiveDate) -> bool {
        self.sick_days.as_ref().is_some_and(|s| s.contains(&d))
    }

    pub fn is_half_day(&self, d: NaiveDate) -> bool {
        self.half_days.as_ref().is_some_and(|s| s.contains(&d))
    }
}
