//! Integration tests for date helpers

use chrono::NaiveDate;
use core_kernel::temporal::{add_calendar_days, due_date, format_display_date};

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

#[test]
fn fifteen_calendar_days_later() {
    assert_eq!(due_date(date(2025, 1, 20), 15), date(2025, 2, 4));
}

#[test]
fn leap_february_is_respected() {
    assert_eq!(add_calendar_days(date(2024, 2, 20), 15), date(2024, 3, 6));
    assert_eq!(add_calendar_days(date(2025, 2, 20), 15), date(2025, 3, 7));
}

#[test]
fn zero_days_is_identity() {
    assert_eq!(add_calendar_days(date(2025, 6, 1), 0), date(2025, 6, 1));
}

#[test]
fn display_date_is_day_month_year() {
    assert_eq!(format_display_date(date(2025, 1, 9)), "09-01-2025");
    assert_eq!(format_display_date(date(2025, 12, 31)), "31-12-2025");
}
