pub mod agenda;
pub mod edit;
pub mod new;
pub mod rm;

use chrono::{Duration, NaiveTime};

/// Split a CLI date/time argument into the draft's separate date and
/// time-of-day strings. Accepts "2025-03-20T15:00" or "2025-03-20 15:00";
/// a bare date gets `fallback_time`. Validation happens later, when the
/// draft is composed.
pub(crate) fn split_datetime(input: &str, fallback_time: &str) -> (String, String) {
    match input.split_once(['T', ' ']) {
        Some((date, time)) => (date.to_string(), time.to_string()),
        None => (input.to_string(), fallback_time.to_string()),
    }
}

/// "HH:MM" one hour later, for defaulting an event's end from its start.
/// Returns None when the input is not a parseable time (the draft will
/// report that properly on submit).
pub(crate) fn plus_one_hour(time: &str) -> Option<String> {
    let parsed = NaiveTime::parse_from_str(time, "%H:%M").ok()?;
    Some((parsed + Duration::hours(1)).format("%H:%M").to_string())
}
