//! The in-progress edit state backing the event editor form.

use crate::event::{Category, Event, EventPayload};
use chrono::{DateTime, Duration, NaiveDate, NaiveTime, Utc};
use thiserror::Error;

/// Validation failures raised when composing a draft into a payload.
/// These must be shown to the user; a draft that fails to compose is
/// never sent to the backend.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DraftError {
    #[error("Title must not be empty")]
    EmptyTitle,

    #[error("Invalid date '{0}'. Expected YYYY-MM-DD")]
    InvalidDate(String),

    #[error("Invalid time '{0}'. Expected HH:MM")]
    InvalidTime(String),

    #[error("End time must be after start time")]
    EndNotAfterStart,
}

/// Editable form state for one event.
///
/// Dates and times-of-day are kept as four separate strings to mirror the
/// form inputs; they are recombined into two timestamps only on submit.
/// A draft is created fresh every time the editor opens and discarded on
/// close, whether submitted or cancelled.
#[derive(Debug, Clone, PartialEq)]
pub struct Draft {
    pub title: String,
    pub description: String,
    pub category: Category,
    /// `YYYY-MM-DD`
    pub start_date: String,
    /// `HH:MM`
    pub start_time: String,
    pub end_date: String,
    pub end_time: String,
}

impl Draft {
    /// Draft seeded from a selected empty slot on the calendar surface.
    pub fn from_slot(start: DateTime<Utc>, end: DateTime<Utc>) -> Self {
        Draft {
            title: String::new(),
            description: String::new(),
            category: Category::Work,
            start_date: start.format("%Y-%m-%d").to_string(),
            start_time: start.format("%H:%M").to_string(),
            end_date: end.format("%Y-%m-%d").to_string(),
            end_time: end.format("%H:%M").to_string(),
        }
    }

    /// Draft seeded from an existing event selected for editing.
    /// Category falls back to Work only when the event has none.
    pub fn from_event(event: &Event) -> Self {
        Draft {
            title: event.title.clone(),
            description: event.description.clone().unwrap_or_default(),
            category: event.category.unwrap_or(Category::Work),
            start_date: event.start_time.format("%Y-%m-%d").to_string(),
            start_time: event.start_time.format("%H:%M").to_string(),
            end_date: event.end_time.format("%Y-%m-%d").to_string(),
            end_time: event.end_time.format("%H:%M").to_string(),
        }
    }

    /// Default draft when nothing was selected: now through one hour from
    /// now, category Work.
    pub fn from_now(now: DateTime<Utc>) -> Self {
        Self::from_slot(now, now + Duration::hours(1))
    }

    /// Display color for the current category. Derived, never stored:
    /// changing the category changes the color with it.
    pub fn color(&self) -> &'static str {
        self.category.color()
    }

    /// Recombine the four date/time fields into two timestamps and
    /// validate the result.
    pub fn compose(&self) -> Result<EventPayload, DraftError> {
        if self.title.trim().is_empty() {
            return Err(DraftError::EmptyTitle);
        }

        let start = compose_datetime(&self.start_date, &self.start_time)?;
        let end = compose_datetime(&self.end_date, &self.end_time)?;

        if start >= end {
            return Err(DraftError::EndNotAfterStart);
        }

        Ok(EventPayload {
            title: self.title.trim().to_string(),
            description: if self.description.is_empty() {
                None
            } else {
                Some(self.description.clone())
            },
            category: self.category,
            color: self.category.color().to_string(),
            start_time: start,
            end_time: end,
        })
    }
}

/// Parse a `YYYY-MM-DD` date and `HH:MM` time-of-day into one timestamp.
fn compose_datetime(date: &str, time: &str) -> Result<DateTime<Utc>, DraftError> {
    let date = NaiveDate::parse_from_str(date, "%Y-%m-%d")
        .map_err(|_| DraftError::InvalidDate(date.to_string()))?;
    let time = NaiveTime::parse_from_str(time, "%H:%M")
        .map_err(|_| DraftError::InvalidTime(time.to_string()))?;
    Ok(date.and_time(time).and_utc())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::event::EventId;
    use chrono::TimeZone;

    fn make_event() -> Event {
        Event {
            id: EventId(42),
            title: "Dentist".to_string(),
            description: Some("Bring insurance card".to_string()),
            category: Some(Category::Family),
            color: Some("#FF9800".to_string()),
            start_time: Utc.with_ymd_and_hms(2024, 6, 3, 14, 0, 0).unwrap(),
            end_time: Utc.with_ymd_and_hms(2024, 6, 3, 15, 0, 0).unwrap(),
            created_at: None,
            updated_at: None,
        }
    }

    #[test]
    fn from_slot_splits_dates_and_times() {
        let draft = Draft::from_slot(
            Utc.with_ymd_and_hms(2024, 6, 1, 7, 0, 0).unwrap(),
            Utc.with_ymd_and_hms(2024, 6, 1, 8, 30, 0).unwrap(),
        );
        assert_eq!(draft.start_date, "2024-06-01");
        assert_eq!(draft.start_time, "07:00");
        assert_eq!(draft.end_time, "08:30");
        assert_eq!(draft.category, Category::Work);
        assert!(draft.title.is_empty());
    }

    #[test]
    fn from_event_copies_all_fields() {
        let draft = Draft::from_event(&make_event());
        assert_eq!(draft.title, "Dentist");
        assert_eq!(draft.description, "Bring insurance card");
        assert_eq!(draft.category, Category::Family);
        assert_eq!(draft.start_date, "2024-06-03");
        assert_eq!(draft.end_time, "15:00");
    }

    #[test]
    fn from_event_defaults_missing_category_to_work() {
        let mut event = make_event();
        event.category = None;
        let draft = Draft::from_event(&event);
        assert_eq!(draft.category, Category::Work);
    }

    #[test]
    fn from_now_spans_one_hour() {
        let now = Utc.with_ymd_and_hms(2024, 6, 12, 9, 15, 0).unwrap();
        let draft = Draft::from_now(now);
        assert_eq!(draft.start_time, "09:15");
        assert_eq!(draft.end_time, "10:15");
        assert_eq!(draft.start_date, draft.end_date);
    }

    #[test]
    fn category_change_rederives_color() {
        let mut draft = Draft::from_now(Utc::now());
        assert_eq!(draft.color(), "#2196F3");
        draft.category = Category::Exercise;
        assert_eq!(draft.color(), "#FF4B4B");
    }

    #[test]
    fn compose_builds_payload() {
        let mut draft = Draft::from_slot(
            Utc.with_ymd_and_hms(2024, 6, 1, 7, 0, 0).unwrap(),
            Utc.with_ymd_and_hms(2024, 6, 1, 8, 0, 0).unwrap(),
        );
        draft.title = "Run".to_string();
        draft.category = Category::Exercise;

        let payload = draft.compose().unwrap();
        assert_eq!(payload.title, "Run");
        assert_eq!(payload.color, "#FF4B4B");
        assert_eq!(
            payload.start_time,
            Utc.with_ymd_and_hms(2024, 6, 1, 7, 0, 0).unwrap()
        );
        assert_eq!(payload.description, None);
    }

    #[test]
    fn compose_rejects_empty_title() {
        let mut draft = Draft::from_now(Utc::now());
        draft.title = "   ".to_string();
        assert_eq!(draft.compose(), Err(DraftError::EmptyTitle));
    }

    #[test]
    fn compose_rejects_unparseable_date() {
        let mut draft = Draft::from_now(Utc::now());
        draft.title = "Lunch".to_string();
        draft.start_date = "June 1st".to_string();
        assert_eq!(
            draft.compose(),
            Err(DraftError::InvalidDate("June 1st".to_string()))
        );
    }

    #[test]
    fn compose_rejects_unparseable_time() {
        let mut draft = Draft::from_now(Utc::now());
        draft.title = "Lunch".to_string();
        draft.end_time = "noon".to_string();
        assert_eq!(
            draft.compose(),
            Err(DraftError::InvalidTime("noon".to_string()))
        );
    }

    #[test]
    fn compose_rejects_inverted_range() {
        let mut draft = Draft::from_slot(
            Utc.with_ymd_and_hms(2024, 6, 1, 9, 0, 0).unwrap(),
            Utc.with_ymd_and_hms(2024, 6, 1, 8, 0, 0).unwrap(),
        );
        draft.title = "Backwards".to_string();
        assert_eq!(draft.compose(), Err(DraftError::EndNotAfterStart));
    }

    #[test]
    fn compose_rejects_zero_length_event() {
        let start = Utc.with_ymd_and_hms(2024, 6, 1, 9, 0, 0).unwrap();
        let mut draft = Draft::from_slot(start, start);
        draft.title = "Instant".to_string();
        assert_eq!(draft.compose(), Err(DraftError::EndNotAfterStart));
    }
}
