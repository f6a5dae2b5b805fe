//! Date windows derived from the active calendar view.

use chrono::{DateTime, Datelike, Duration, Months, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Calendar view granularity. Each view maps to one date window; changing
/// the view re-issues a List for the new window.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum View {
    Month,
    Week,
    Day,
    Agenda,
}

impl FromStr for View {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "month" => Ok(View::Month),
            "week" => Ok(View::Week),
            "day" => Ok(View::Day),
            "agenda" => Ok(View::Agenda),
            _ => Err(format!(
                "Unknown view '{}'. Expected one of: month, week, day, agenda",
                s
            )),
        }
    }
}

impl fmt::Display for View {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            View::Month => "month",
            View::Week => "week",
            View::Day => "day",
            View::Agenda => "agenda",
        };
        f.write_str(name)
    }
}

/// Date window sent to the backend as the List filter.
#[derive(Debug, Clone, PartialEq)]
pub struct DateRange {
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
}

impl DateRange {
    /// Compute the window for a view, relative to `now`:
    ///
    /// - month: first through last day of the current month
    /// - week: most recent Sunday on/before today, plus six days
    /// - day: today through tomorrow
    /// - agenda: one month back through two months ahead
    ///
    /// Boundaries are start-of-day UTC timestamps.
    pub fn for_view(view: View, now: DateTime<Utc>) -> DateRange {
        let today = now.date_naive();

        let (start, end) = match view {
            View::Month => {
                // Day 1 is valid for every month
                let first = today.with_day(1).unwrap();
                let last = first + Months::new(1) - Duration::days(1);
                (first, last)
            }
            View::Week => {
                let days_since_sunday = today.weekday().num_days_from_sunday() as i64;
                let sunday = today - Duration::days(days_since_sunday);
                (sunday, sunday + Duration::days(6))
            }
            View::Day => (today, today + Duration::days(1)),
            View::Agenda => (today - Months::new(1), today + Months::new(2)),
        };

        DateRange {
            start: start_of_day(start),
            end: start_of_day(end),
        }
    }

    /// `start` as an RFC 3339 string for the query string.
    pub fn start_rfc3339(&self) -> String {
        self.start.to_rfc3339()
    }

    /// `end` as an RFC 3339 string for the query string.
    pub fn end_rfc3339(&self) -> String {
        self.end.to_rfc3339()
    }

    /// Whether an event window intersects this range.
    pub fn intersects(&self, start: DateTime<Utc>, end: DateTime<Utc>) -> bool {
        start <= self.end && end >= self.start
    }
}

fn start_of_day(date: NaiveDate) -> DateTime<Utc> {
    // 00:00:00 is valid for every date
    date.and_hms_opt(0, 0, 0).unwrap().and_utc()
}
