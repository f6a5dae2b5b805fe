//! Client-side cache of events for the visible date range.
//!
//! An explicit state container rather than an ambient singleton: the
//! planner calls exactly one reducer method per backend action. Only List
//! participates in the loading-status lifecycle; Create/Update/Delete
//! mutate the cached items directly.

use dayplan_core::{Event, EventId};

/// Lifecycle of the most recent List request. Re-enters `Loading` on
/// every new List, regardless of the prior state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ListStatus {
    #[default]
    Idle,
    Loading,
    Succeeded,
    Failed,
}

/// Monotonic token identifying one List request. A response carrying a
/// token older than the latest issued one lost the race to a newer
/// request and gets dropped instead of overwriting fresher data.
pub type ListSeq = u64;

#[derive(Debug, Default)]
pub struct EventStore {
    items: Vec<Event>,
    status: ListStatus,
    error: Option<String>,
    latest_seq: ListSeq,
}

impl EventStore {
    pub fn new() -> Self {
        EventStore::default()
    }

    pub fn items(&self) -> &[Event] {
        &self.items
    }

    pub fn status(&self) -> ListStatus {
        self.status
    }

    /// Error message from the last failed List, if any.
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn get(&self, id: EventId) -> Option<&Event> {
        self.items.iter().find(|e| e.id == id)
    }

    /// A new List request was issued. Returns the sequence token the
    /// response must present.
    pub fn list_started(&mut self) -> ListSeq {
        self.latest_seq += 1;
        self.status = ListStatus::Loading;
        self.latest_seq
    }

    /// A List response arrived: replace the cache wholesale (no merge).
    /// Stale responses are dropped.
    pub fn list_succeeded(&mut self, seq: ListSeq, events: Vec<Event>) {
        if seq != self.latest_seq {
            return;
        }
        self.status = ListStatus::Succeeded;
        self.error = None;
        self.items = events;
    }

    /// A List request failed. Prior items stay untouched.
    pub fn list_failed(&mut self, seq: ListSeq, message: String) {
        if seq != self.latest_seq {
            return;
        }
        self.status = ListStatus::Failed;
        self.error = Some(message);
    }

    /// A Create round-trip succeeded: append the server-returned event,
    /// id included.
    pub fn created(&mut self, event: Event) {
        self.items.push(event);
    }

    /// An Update round-trip succeeded: replace the matching cached event.
    /// A response for an id that is no longer cached is silently dropped.
    pub fn updated(&mut self, event: Event) {
        if let Some(cached) = self.items.iter_mut().find(|e| e.id == event.id) {
            *cached = event;
        }
    }

    /// A Delete round-trip succeeded: remove by id. Idempotent.
    pub fn deleted(&mut self, id: EventId) {
        self.items.retain(|e| e.id != id);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};
    use dayplan_core::Category;

    fn make_event(id: i64, title: &str) -> Event {
        Event {
            id: EventId(id),
            title: title.to_string(),
            description: None,
            category: Some(Category::Work),
            color: Some(Category::Work.color().to_string()),
            start_time: Utc.with_ymd_and_hms(2024, 6, 1, 9, 0, 0).unwrap(),
            end_time: Utc.with_ymd_and_hms(2024, 6, 1, 10, 0, 0).unwrap(),
            created_at: None,
            updated_at: None,
        }
    }

    #[test]
    fn list_lifecycle() {
        let mut store = EventStore::new();
        assert_eq!(store.status(), ListStatus::Idle);

        let seq = store.list_started();
        assert_eq!(store.status(), ListStatus::Loading);

        store.list_succeeded(seq, vec![make_event(1, "Standup")]);
        assert_eq!(store.status(), ListStatus::Succeeded);
        assert_eq!(store.items().len(), 1);
        assert!(store.error().is_none());
    }

    #[test]
    fn list_failure_keeps_prior_items() {
        let mut store = EventStore::new();
        let seq = store.list_started();
        store.list_succeeded(seq, vec![make_event(1, "Standup")]);

        let seq = store.list_started();
        store.list_failed(seq, "server returned HTTP 500".to_string());

        assert_eq!(store.status(), ListStatus::Failed);
        assert_eq!(store.error(), Some("server returned HTTP 500"));
        assert_eq!(store.items().len(), 1);
    }

    #[test]
    fn relisting_reenters_loading_from_any_state() {
        let mut store = EventStore::new();
        let seq = store.list_started();
        store.list_failed(seq, "boom".to_string());

        store.list_started();
        assert_eq!(store.status(), ListStatus::Loading);
    }

    #[test]
    fn stale_list_response_is_dropped() {
        let mut store = EventStore::new();

        // Two Lists in flight: the older window resolves after the newer one
        let old_seq = store.list_started();
        let new_seq = store.list_started();

        store.list_succeeded(new_seq, vec![make_event(2, "New window")]);
        store.list_succeeded(old_seq, vec![make_event(1, "Old window")]);

        assert_eq!(store.items().len(), 1);
        assert_eq!(store.items()[0].title, "New window");
        assert_eq!(store.status(), ListStatus::Succeeded);
    }

    #[test]
    fn stale_list_failure_is_dropped() {
        let mut store = EventStore::new();
        let old_seq = store.list_started();
        let new_seq = store.list_started();

        store.list_succeeded(new_seq, vec![make_event(2, "Fresh")]);
        store.list_failed(old_seq, "timeout".to_string());

        assert_eq!(store.status(), ListStatus::Succeeded);
        assert!(store.error().is_none());
    }

    #[test]
    fn created_appends() {
        let mut store = EventStore::new();
        store.created(make_event(1, "Run"));
        store.created(make_event(2, "Lunch"));
        assert_eq!(store.items().len(), 2);
        assert!(store.get(EventId(2)).is_some());
    }

    #[test]
    fn create_does_not_touch_list_status() {
        let mut store = EventStore::new();
        store.created(make_event(1, "Run"));
        assert_eq!(store.status(), ListStatus::Idle);
    }

    #[test]
    fn updated_replaces_matching_event_only() {
        let mut store = EventStore::new();
        store.created(make_event(1, "Run"));
        store.created(make_event(2, "Lunch"));

        let mut patched = make_event(1, "Morning run");
        patched.category = Some(Category::Exercise);
        store.updated(patched);

        assert_eq!(store.get(EventId(1)).unwrap().title, "Morning run");
        assert_eq!(store.get(EventId(2)).unwrap().title, "Lunch");
    }

    #[test]
    fn update_for_unknown_id_is_a_noop() {
        let mut store = EventStore::new();
        store.created(make_event(1, "Run"));
        store.updated(make_event(99, "Ghost"));
        assert_eq!(store.items().len(), 1);
        assert!(store.get(EventId(99)).is_none());
    }

    #[test]
    fn deleted_is_idempotent() {
        let mut store = EventStore::new();
        store.created(make_event(1, "Run"));

        store.deleted(EventId(1));
        store.deleted(EventId(1));

        assert!(store.items().is_empty());
    }
}
