//! Glue between the REST client and the event store.
//!
//! Every backend operation is awaited to completion and its reducer is
//! applied here, so callers always observe success or failure directly.
//! Nothing is dispatched fire-and-forget.

use crate::api::{ApiError, EventsApi};
use crate::store::EventStore;
use chrono::{DateTime, Utc};
use dayplan_core::{DateRange, Event, EventId, EventPayload, View};

pub struct Planner<A: EventsApi> {
    api: A,
    store: EventStore,
}

impl<A: EventsApi> Planner<A> {
    pub fn new(api: A) -> Self {
        Planner {
            api,
            store: EventStore::new(),
        }
    }

    pub fn store(&self) -> &EventStore {
        &self.store
    }

    pub fn events(&self) -> &[Event] {
        self.store.items()
    }

    /// Refresh the cache with the window for a view.
    pub async fn refresh(&mut self, view: View, now: DateTime<Utc>) -> Result<(), ApiError> {
        self.refresh_range(&DateRange::for_view(view, now)).await
    }

    /// Refresh the cache with an explicit window. Failures are recorded on
    /// the store (prior items untouched) and returned.
    pub async fn refresh_range(&mut self, range: &DateRange) -> Result<(), ApiError> {
        let seq = self.store.list_started();
        match self.api.list(range).await {
            Ok(events) => {
                self.store.list_succeeded(seq, events);
                Ok(())
            }
            Err(err) => {
                self.store.list_failed(seq, err.to_string());
                Err(err)
            }
        }
    }

    /// Create an event; on success the server-returned copy (with its
    /// assigned id) is appended to the cache.
    pub async fn create(&mut self, payload: &EventPayload) -> Result<Event, ApiError> {
        let event = self.api.create(payload).await?;
        self.store.created(event.clone());
        Ok(event)
    }

    /// Update an event; on success the cached copy is replaced by the
    /// server's response.
    pub async fn update(&mut self, id: EventId, payload: &EventPayload) -> Result<Event, ApiError> {
        let event = self.api.update(id, payload).await?;
        self.store.updated(event.clone());
        Ok(event)
    }

    /// Delete an event by id. Idempotent.
    pub async fn delete(&mut self, id: EventId) -> Result<(), ApiError> {
        self.api.delete(id).await?;
        self.store.deleted(id);
        Ok(())
    }
}
