//! # Status-change notifications.
//!
//! [`Event`] is the notification a polling engine emits for one tracked
//! resource: either an updated status or an error it hit while observing the
//! resource. The type is a closed two-variant sum so every consumer matches
//! exhaustively and the compiler flags unhandled variants if the contract ever
//! grows.
//!
//! ## Stream contract
//! Events travel over a bounded mpsc channel as `Result<Event, WatchError>`:
//!
//! - `Ok(event)` — one notification, delivered in arrival order. Ordering is
//!   only meaningful per identifier: a later event for the same resource
//!   reflects a more recent observation.
//! - `Err(error)` — the stream failed terminally; the session ends and the
//!   error becomes the session's return value.
//! - Closing the channel (dropping the sender) ends the watch cleanly.
//!
//! ## Example
//! ```rust
//! use statuswatch::{Event, ResourceId, Status, WatchError};
//!
//! let web = ResourceId::new("apps", "Deployment", "web");
//!
//! let update = Event::update(web.clone(), Status::InProgress, "rollout ongoing");
//! assert_eq!(update.resource_id(), &web);
//!
//! let failed = Event::error(web.clone(), WatchError::resource("connection reset"));
//! assert_eq!(failed.resource_id(), &web);
//! ```

use tokio::sync::mpsc;

use crate::error::WatchError;
use crate::resources::ResourceId;
use crate::status::Status;

/// Producer half of the event stream.
pub type EventSender = mpsc::Sender<Result<Event, WatchError>>;

/// Consumer half of the event stream; what a collector observes.
pub type EventReceiver = mpsc::Receiver<Result<Event, WatchError>>;

/// Creates the bounded event stream connecting a polling engine to a session.
///
/// Capacity is clamped to a minimum of 1.
pub fn channel(capacity: usize) -> (EventSender, EventReceiver) {
    mpsc::channel(capacity.max(1))
}

/// One notification about a tracked resource.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Event {
    /// The resource's computed status changed (or was re-observed).
    ResourceUpdate {
        /// Resource the status belongs to.
        id: ResourceId,
        /// The newly computed status.
        status: Status,
        /// Free-text detail accompanying the status.
        message: String,
    },

    /// The engine failed to observe the resource this cycle.
    ///
    /// Rendered as an output line; never terminal and never reflected in the
    /// aggregated status map.
    Error {
        /// Resource the failure belongs to.
        id: ResourceId,
        /// What went wrong.
        error: WatchError,
    },
}

impl Event {
    /// Creates a status-update event.
    pub fn update(id: ResourceId, status: Status, message: impl Into<String>) -> Self {
        Event::ResourceUpdate {
            id,
            status,
            message: message.into(),
        }
    }

    /// Creates a per-resource error event.
    pub fn error(id: ResourceId, error: WatchError) -> Self {
        Event::Error { id, error }
    }

    /// The resource this event is about.
    pub fn resource_id(&self) -> &ResourceId {
        match self {
            Event::ResourceUpdate { id, .. } => id,
            Event::Error { id, .. } => id,
        }
    }
}
