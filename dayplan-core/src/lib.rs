//! Core types for the dayplan calendar client.
//!
//! This crate holds the backend-neutral domain types shared by the CLI
//! and any other frontend:
//! - `Event` and friends for persisted calendar events
//! - `Draft` for the in-progress, unsaved edit state behind the editor
//! - `View` / `DateRange` for deriving the visible date window

pub mod draft;
pub mod event;
pub mod range;

pub use draft::{Draft, DraftError};
pub use event::{Category, Event, EventId, EventPayload};
pub use range::{DateRange, View};
