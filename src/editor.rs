//! The event editor: a modal form-state machine.
//!
//! The editor is either closed or holds one draft. Opening chooses the
//! draft's source by precedence: a selected empty slot, then a selected
//! existing event, then a default "now" draft. Submit composes the draft
//! and issues a Create or Update; drafts that fail validation never reach
//! the backend and the error is returned for display.

use crate::api::{ApiError, EventsApi};
use crate::planner::Planner;
use chrono::{DateTime, Utc};
use dayplan_core::{Draft, DraftError, Event, EventId};
use thiserror::Error;

/// A selected empty time region on the calendar surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Slot {
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
}

/// What a successful submit did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Submitted {
    Created(EventId),
    Updated(EventId),
}

#[derive(Debug, Error)]
pub enum SubmitError {
    /// The draft failed validation; the editor stays open so the user can
    /// correct it. Nothing was sent.
    #[error(transparent)]
    Draft(#[from] DraftError),

    /// The draft was valid but the backend round-trip failed.
    #[error(transparent)]
    Api(#[from] ApiError),

    #[error("The editor is not open")]
    NotOpen,
}

#[derive(Debug, Default)]
pub enum Editor {
    #[default]
    Closed,
    Open {
        draft: Draft,
        /// Set when editing an existing event; submit becomes an Update.
        editing: Option<EventId>,
    },
}

impl Editor {
    /// Open the editor with a fresh draft, choosing the source by
    /// precedence: slot, then event, then "now". Returns the draft for
    /// immediate field edits.
    pub fn open(
        &mut self,
        slot: Option<Slot>,
        event: Option<&Event>,
        now: DateTime<Utc>,
    ) -> &mut Draft {
        let (draft, editing) = if let Some(slot) = slot {
            (Draft::from_slot(slot.start, slot.end), None)
        } else if let Some(event) = event {
            (Draft::from_event(event), Some(event.id))
        } else {
            (Draft::from_now(now), None)
        };

        *self = Editor::Open { draft, editing };
        match self {
            Editor::Open { draft, .. } => draft,
            Editor::Closed => unreachable!(),
        }
    }

    pub fn is_open(&self) -> bool {
        matches!(self, Editor::Open { .. })
    }

    pub fn draft(&self) -> Option<&Draft> {
        match self {
            Editor::Open { draft, .. } => Some(draft),
            Editor::Closed => None,
        }
    }

    pub fn draft_mut(&mut self) -> Option<&mut Draft> {
        match self {
            Editor::Open { draft, .. } => Some(draft),
            Editor::Closed => None,
        }
    }

    /// Id of the event being edited, when the draft came from one.
    pub fn editing(&self) -> Option<EventId> {
        match self {
            Editor::Open { editing, .. } => *editing,
            Editor::Closed => None,
        }
    }

    /// Discard the draft without submitting.
    pub fn cancel(&mut self) {
        *self = Editor::Closed;
    }

    /// Compose the draft and submit it: Update when editing an existing
    /// event, Create otherwise.
    ///
    /// On a validation error the editor stays open and nothing is sent.
    /// Once a valid draft has been dispatched, the editor closes whatever
    /// the round-trip outcome; the result is still returned to the caller.
    pub async fn submit<A: EventsApi>(
        &mut self,
        planner: &mut Planner<A>,
    ) -> Result<Submitted, SubmitError> {
        let Editor::Open { draft, editing } = &*self else {
            return Err(SubmitError::NotOpen);
        };

        let payload = draft.compose()?;
        let editing = *editing;

        let outcome = match editing {
            Some(id) => planner
                .update(id, &payload)
                .await
                .map(|e| Submitted::Updated(e.id)),
            None => planner
                .create(&payload)
                .await
                .map(|e| Submitted::Created(e.id)),
        };

        *self = Editor::Closed;
        outcome.map_err(SubmitError::Api)
    }

    /// Delete the event being edited, if any, and close the editor
    /// unconditionally. A draft that was never persisted has nothing to
    /// delete, so closing is all that happens.
    pub async fn delete<A: EventsApi>(
        &mut self,
        planner: &mut Planner<A>,
    ) -> Result<(), ApiError> {
        let editing = self.editing();
        *self = Editor::Closed;

        match editing {
            Some(id) => planner.delete(id).await,
            None => Ok(()),
        }
    }
}
