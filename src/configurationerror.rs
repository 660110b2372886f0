use chrono::NaiveDate;
use serde::Deserialize;
use thiserror::Error;

use crate::timesheet::durationsampler::SamplerError;

#[derive(Debug, Error)]
pub enum ConfigurationError {
    #[error(transparent)]
    IOError(#[from] std::io::Error),
    #[error(transparent)]
    JsonParseError(#[from] serde_json::Error),
    #[error("holiday rule '{name}': {reason}")]
    InvalidHolidayRule { name: String, reason: String },
    #[error("institution holiday {date} is listed under year {year}")]
    InvalidInstitutionDate { year: i32, date: NaiveDate },
    #[error(transparent)]
    SamplerError(#[from] SamplerError)
}

pub fn parse_json_value<T>(json_value: serde_json::Value) -> Result<T, ConfigurationError>
    where T: for<'a> Deserialize<'a> {
    Ok(serde_json::from_value(json_value)?)
}
