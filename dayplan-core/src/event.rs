//! Calendar event types as exchanged with the backend.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Server-assigned event identifier. Events only get one once persisted;
/// unsaved data travels as [`EventPayload`] instead.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EventId(pub i64);

impl fmt::Display for EventId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Fixed set of event categories. The category determines the display color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Exercise,
    Eating,
    Work,
    Relax,
    Family,
    Social,
}

impl Category {
    pub const ALL: [Category; 6] = [
        Category::Exercise,
        Category::Eating,
        Category::Work,
        Category::Relax,
        Category::Family,
        Category::Social,
    ];

    /// Display color for this category (hex, `#RRGGBB`).
    ///
    /// The color is always derived from the category; it is never stored
    /// on drafts. The backend contract still persists a denormalized copy,
    /// which [`EventPayload`] fills in from this table on submit.
    pub fn color(self) -> &'static str {
        match self {
            Category::Exercise => "#FF4B4B",
            Category::Eating => "#4CAF50",
            Category::Work => "#2196F3",
            Category::Relax => "#9C27B0",
            Category::Family => "#FF9800",
            Category::Social => "#00BCD4",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Category::Exercise => "Exercise",
            Category::Eating => "Eating",
            Category::Work => "Work",
            Category::Relax => "Relax",
            Category::Family => "Family",
            Category::Social => "Social",
        }
    }
}

impl FromStr for Category {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "exercise" => Ok(Category::Exercise),
            "eating" => Ok(Category::Eating),
            "work" => Ok(Category::Work),
            "relax" => Ok(Category::Relax),
            "family" => Ok(Category::Family),
            "social" => Ok(Category::Social),
            _ => Err(format!(
                "Unknown category '{}'. Expected one of: exercise, eating, work, relax, family, social",
                s
            )),
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A calendar event as returned by the backend.
///
/// The client never mutates an `Event` in place; it only replaces cached
/// copies wholesale with whatever the server returned.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Event {
    pub id: EventId,
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    /// Absent on rows created before categories existed.
    #[serde(default)]
    pub category: Option<Category>,
    /// Denormalized copy of the category color, persisted by the backend.
    #[serde(default)]
    pub color: Option<String>,
    pub start_time: DateTime<Utc>,
    pub end_time: DateTime<Utc>,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub updated_at: Option<DateTime<Utc>>,
}

impl Event {
    /// Color to render this event with: the stored copy when present,
    /// otherwise derived from the category (Work as the final fallback).
    pub fn display_color(&self) -> &str {
        match self.color.as_deref() {
            Some(c) => c,
            None => self.category.unwrap_or(Category::Work).color(),
        }
    }
}

/// The writable fields of an event: everything except the server-assigned
/// id. This is the body of both POST (create) and PATCH (update) calls.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EventPayload {
    pub title: String,
    pub description: Option<String>,
    pub category: Category,
    pub color: String,
    pub start_time: DateTime<Utc>,
    pub end_time: DateTime<Utc>,
}
