use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A dated holiday and its display label.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HolidayEntry {
    date: NaiveDate,
    label: String
}

impl HolidayEntry {
    pub fn new(date: NaiveDate, label: impl Into<String>) -> HolidayEntry {
        HolidayEntry { date, label: label.into() }
    }

    pub fn date(&self) -> NaiveDate {
        self.date
    }

    pub fn label(&self) -> &str {
        &self.label
    }
}
