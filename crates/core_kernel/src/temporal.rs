//! Date helpers for invoice lifecycles
//!
//! Invoices carry date-level facts only: the issue date and a due date a
//! fixed number of calendar days later. Arithmetic is done on `NaiveDate`,
//! so daylight-saving shifts cannot move a due date.

use chrono::{Days, NaiveDate};

/// Display format for dates at presentation boundaries (DD-MM-YYYY)
pub const DISPLAY_DATE_FORMAT: &str = "%d-%m-%Y";

/// Adds `days` calendar days to a date.
///
/// Calendar-day arithmetic, not `days * 24h`: the result is the same wall
/// date regardless of timezone transitions in between.
pub fn add_calendar_days(date: NaiveDate, days: u32) -> NaiveDate {
    date + Days::new(u64::from(days))
}

/// Derives a payment due date from an issue date.
pub fn due_date(issue_date: NaiveDate, due_days: u32) -> NaiveDate {
    add_calendar_days(issue_date, due_days)
}

/// Renders a date as DD-MM-YYYY for display.
///
/// Presentation-boundary formatting only; stored dates stay `NaiveDate`.
pub fn format_display_date(date: NaiveDate) -> String {
    date.format(DISPLAY_DATE_FORMAT).to_string()
}
