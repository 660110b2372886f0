use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CalendarError {
    #[error("invalid month {0}")]
    InvalidMonth(u32),
    #[error("invalid day range {first_day}..={last_day} for {year}-{month:02}")]
    InvalidRange {
        year: i32,
        month: u32,
        first_day: u32,
        last_day: u32
    }
}

impl CalendarError {
    /// Checks that `first_day..=last_day` is a non-empty range of real days in the month.
    pub fn check_range(year: i32, month: u32, first_day: u32, last_day: u32) -> Result<(), CalendarError> {
        if !(1..=12).contains(&month) {
            return Err(CalendarError::InvalidMonth(month));
        }

        let eom = crate::time::utility::days_of_month(year, month);
        if first_day < 1 || first_day > last_day || last_day > eom {
            return Err(CalendarError::InvalidRange { year, month, first_day, last_day });
        }
        Ok(())
    }
}
