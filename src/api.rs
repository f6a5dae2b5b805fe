//! REST client for the dayplan backend.
//!
//! The backend exposes four operations over JSON:
//!
//! - `GET    {base}/api/events/?start_date=..&end_date=..` -> `[Event]`
//! - `POST   {base}/api/events/`                           -> `Event` (with id)
//! - `PATCH  {base}/api/events/<id>/`                      -> `Event`
//! - `DELETE {base}/api/events/<id>/`                      -> 2xx, no body
//!
//! Any non-2xx response is a failure. POST failures additionally carry the
//! server's JSON error payload so validation problems can be shown.

use dayplan_core::{DateRange, Event, EventId, EventPayload};
use std::fmt;
use thiserror::Error;
use url::Url;

/// Which backend operation an error came from. Kept distinct so callers
/// can report failures per operation instead of one generic message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ApiOp {
    List,
    Create,
    Update,
    Delete,
}

impl fmt::Display for ApiOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ApiOp::List => "list events",
            ApiOp::Create => "create event",
            ApiOp::Update => "update event",
            ApiOp::Delete => "delete event",
        };
        f.write_str(name)
    }
}

/// Failures talking to the backend.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Failed to {op}: {source}")]
    Transport {
        op: ApiOp,
        #[source]
        source: reqwest::Error,
    },

    #[error("Failed to {op}: server returned HTTP {status}")]
    Status {
        op: ApiOp,
        status: u16,
        /// JSON error payload, currently only read for Create.
        detail: Option<String>,
    },
}

impl ApiError {
    pub fn op(&self) -> ApiOp {
        match self {
            ApiError::Transport { op, .. } | ApiError::Status { op, .. } => *op,
        }
    }

    /// Server-provided error payload, when one was read.
    pub fn detail(&self) -> Option<&str> {
        match self {
            ApiError::Status { detail, .. } => detail.as_deref(),
            ApiError::Transport { .. } => None,
        }
    }
}

/// The four backend operations, abstracted so the planner and editor can
/// be driven by an in-memory backend in tests.
#[allow(async_fn_in_trait)]
pub trait EventsApi {
    async fn list(&self, range: &DateRange) -> Result<Vec<Event>, ApiError>;
    async fn create(&self, payload: &EventPayload) -> Result<Event, ApiError>;
    async fn update(&self, id: EventId, payload: &EventPayload) -> Result<Event, ApiError>;
    async fn delete(&self, id: EventId) -> Result<(), ApiError>;
}

/// reqwest-backed client for the real backend.
pub struct RestApi {
    client: reqwest::Client,
    events_url: Url,
}

impl RestApi {
    pub fn new(base_url: &str) -> Result<Self, url::ParseError> {
        let base = Url::parse(base_url)?;
        let events_url = base.join("api/events/")?;

        Ok(RestApi {
            client: reqwest::Client::new(),
            events_url,
        })
    }

    fn event_url(&self, id: EventId) -> Url {
        // Joining a numeric segment onto a valid collection URL cannot fail
        self.events_url.join(&format!("{}/", id)).unwrap()
    }
}

impl EventsApi for RestApi {
    async fn list(&self, range: &DateRange) -> Result<Vec<Event>, ApiError> {
        let mut url = self.events_url.clone();
        url.query_pairs_mut()
            .append_pair("start_date", &range.start_rfc3339())
            .append_pair("end_date", &range.end_rfc3339());

        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| transport(ApiOp::List, e))?;

        if !response.status().is_success() {
            return Err(status(ApiOp::List, response.status().as_u16(), None));
        }

        response.json().await.map_err(|e| transport(ApiOp::List, e))
    }

    async fn create(&self, payload: &EventPayload) -> Result<Event, ApiError> {
        let response = self
            .client
            .post(self.events_url.clone())
            .json(payload)
            .send()
            .await
            .map_err(|e| transport(ApiOp::Create, e))?;

        if !response.status().is_success() {
            // The backend answers invalid creates with a JSON error payload
            let code = response.status().as_u16();
            let detail = response
                .json::<serde_json::Value>()
                .await
                .ok()
                .map(|v| v.to_string());
            return Err(status(ApiOp::Create, code, detail));
        }

        response
            .json()
            .await
            .map_err(|e| transport(ApiOp::Create, e))
    }

    async fn update(&self, id: EventId, payload: &EventPayload) -> Result<Event, ApiError> {
        let response = self
            .client
            .patch(self.event_url(id))
            .json(payload)
            .send()
            .await
            .map_err(|e| transport(ApiOp::Update, e))?;

        if !response.status().is_success() {
            return Err(status(ApiOp::Update, response.status().as_u16(), None));
        }

        response
            .json()
            .await
            .map_err(|e| transport(ApiOp::Update, e))
    }

    async fn delete(&self, id: EventId) -> Result<(), ApiError> {
        let response = self
            .client
            .delete(self.event_url(id))
            .send()
            .await
            .map_err(|e| transport(ApiOp::Delete, e))?;

        let code = response.status();

        // Deleting an id the server no longer has counts as deleted
        if code.is_success() || code.as_u16() == 404 || code.as_u16() == 410 {
            return Ok(());
        }

        Err(status(ApiOp::Delete, code.as_u16(), None))
    }
}

fn transport(op: ApiOp, source: reqwest::Error) -> ApiError {
    ApiError::Transport { op, source }
}

fn status(op: ApiOp, status: u16, detail: Option<String>) -> ApiError {
    ApiError::Status { op, status, detail }
}
