//! Relative date labels ("today", "next Tuesday", "last Monday at 14:30")
//!
//! Timestamps are local wall-clock times; no timezone conversion happens here.

use chrono::{NaiveDate, NaiveDateTime};

/// Times of day meaning "this timestamp is a date, not a moment"
const DATE_ONLY_SENTINELS: [&str; 2] = ["00:00:00", "23:59:59"];

/// Format a timestamp relative to a reference date
///
/// # Arguments
/// * `timestamp` - Local date and time to describe
/// * `reference` - The "current" date labels are relative to
///
/// # Returns
/// A day phrase, followed by ` at HH:MM` unless the time of day is one of the
/// date-only sentinels (`00:00:00`, `23:59:59`).
///
/// # Examples
/// ```
/// # use chrono::NaiveDate;
/// # use gtd_actions::relative_date::format_relative;
/// let thursday = NaiveDate::from_ymd_opt(2024, 3, 7).unwrap();
/// let friday = NaiveDate::from_ymd_opt(2024, 3, 8).unwrap();
/// assert_eq!(
///     format_relative(friday.and_hms_opt(14, 30, 0).unwrap(), thursday),
///     "tomorrow at 14:30"
/// );
/// ```
pub fn format_relative(timestamp: NaiveDateTime, reference: NaiveDate) -> String {
    let mut label = day_phrase(timestamp.date(), reference);

    let time_of_day = timestamp.format("%H:%M:%S").to_string();
    if !DATE_ONLY_SENTINELS.contains(&time_of_day.as_str()) {
        label.push_str(&format!(" at {}", timestamp.format("%H:%M")));
    }

    label
}

/// Describe `date` as a day relative to `reference`
///
/// Rules are checked in order and the first match wins. Days 2-6 ahead are
/// taken by the plain weekday rule, so `next <weekday>` only covers 7-13.
pub fn day_phrase(date: NaiveDate, reference: NaiveDate) -> String {
    let days = (date - reference).num_days();
    let weekday = date.format("%A");

    match days {
        0 => "today".to_string(),
        1 => "tomorrow".to_string(),
        -1 => "yesterday".to_string(),
        d if (2..7).contains(&d) => weekday.to_string(),
        d if (-6..0).contains(&d) => format!("last {}", weekday),
        d if (1..14).contains(&d) => format!("next {}", weekday),
        _ => format!("{} {}", weekday, date.format("%Y-%m-%d")),
    }
}
