use chrono::NaiveDate;

use crate::error::{LyraError, Result};

/// Date format used both for user input and for the task file.
pub const STORAGE_FORMAT: &str = "%Y-%m-%d";

/// Human-readable date, e.g. `Dec 25 2024`.
pub const DISPLAY_FORMAT: &str = "%b %-d %Y";

pub fn parse_date(input: &str) -> Result<NaiveDate> {
    let input = input.trim();
    NaiveDate::parse_from_str(input, STORAGE_FORMAT)
        .map_err(|_| LyraError::InvalidDate(input.to_string()))
}

pub fn format_storage_date(date: NaiveDate) -> String {
    date.format(STORAGE_FORMAT).to_string()
}

pub fn format_display_date(date: NaiveDate) -> String {
    date.format(DISPLAY_FORMAT).to_string()
}
