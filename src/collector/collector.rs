//! # StatusCollector: per-resource aggregation and the consume loop.
//!
//! The collector owns the latest known [`ResourceStatus`] for every tracked
//! identifier and drives one watch session: it reads the event stream on its
//! own task, applies each event to its state, then dispatches the event to an
//! ordered list of observers.
//!
//! ## Event flow
//! ```text
//! EventReceiver ──► consume loop (spawned task)
//!                      │  per Ok(event):
//!                      │    1. apply(event)            state update first
//!                      │    2. observers[0].on_event   e.g. render
//!                      │    3. observers[1].on_event   e.g. stop-decision
//!                      │    ... one event fully handled before the next
//!                      │  per Err(error):
//!                      │    record terminal error, stop reading
//!                      ▼
//!                  Completion ──► CompletionHandle::wait()
//! ```
//!
//! ## Rules
//! - Updates apply only to identifiers the collector was created with;
//!   an event for an unknown identifier is dispatched but not persisted.
//! - `Error` events never touch the status map.
//! - State is applied **before** dispatch, so an observer reading the
//!   collector always sees the event it is being handed.
//! - One collector, one session, one event source: [`StatusCollector::observe`]
//!   consumes the collector.

use std::collections::HashMap;

use tokio::sync::oneshot;

use crate::collector::{Completion, CompletionHandle, Observe};
use crate::error::WatchError;
use crate::events::{Event, EventReceiver};
use crate::resources::{ResourceId, ResourceIdSet};
use crate::status::{ResourceStatus, Status};

/// Aggregates per-resource status for one watch session.
pub struct StatusCollector {
    statuses: HashMap<ResourceId, ResourceStatus>,
    error: Option<WatchError>,
}

impl StatusCollector {
    /// Creates a collector tracking exactly the given identifiers, each
    /// seeded at [`Status::Unknown`].
    pub fn new(ids: &ResourceIdSet) -> Self {
        let statuses = ids
            .iter()
            .map(|id| (id.clone(), ResourceStatus::unknown()))
            .collect();
        Self {
            statuses,
            error: None,
        }
    }

    /// Latest record for a tracked resource; `None` for untracked ids.
    pub fn status_of(&self, id: &ResourceId) -> Option<&ResourceStatus> {
        self.statuses.get(id)
    }

    /// Iterates over all tracked resources and their latest records.
    pub fn statuses(&self) -> impl Iterator<Item = (&ResourceId, &ResourceStatus)> {
        self.statuses.iter()
    }

    /// True if every tracked resource is currently at `status`.
    ///
    /// Vacuously true for an empty tracking set.
    pub fn all_reached(&self, status: Status) -> bool {
        self.statuses.values().all(|record| record.status == status)
    }

    /// Terminal error recorded so far, if any.
    pub fn error(&self) -> Option<&WatchError> {
        self.error.as_ref()
    }

    /// Applies one event to the aggregated state.
    ///
    /// Only `ResourceUpdate` events for tracked identifiers mutate the map;
    /// everything else passes through untouched.
    fn apply(&mut self, event: &Event) {
        match event {
            Event::ResourceUpdate {
                id,
                status,
                message,
            } => match self.statuses.get_mut(id) {
                Some(record) => {
                    *record = ResourceStatus {
                        status: *status,
                        message: message.clone(),
                    };
                }
                None => {
                    tracing::trace!(id = %id, "ignoring update for untracked resource");
                }
            },
            Event::Error { .. } => {}
        }
    }

    /// Consumes the event stream on a spawned task, dispatching every event
    /// to the observers in list order.
    ///
    /// Each `Ok` event is applied to the collector and then handed to each
    /// observer in turn; an observer is awaited before the next one runs, and
    /// the whole list finishes before the next event is read. An `Err` item
    /// is the stream-terminal error: it is recorded and consumption stops.
    ///
    /// Returns immediately; the returned handle resolves once the stream is
    /// exhausted (closed or terminally failed).
    pub fn observe(
        mut self,
        mut events: EventReceiver,
        mut observers: Vec<Box<dyn Observe>>,
    ) -> CompletionHandle {
        let (done_tx, done_rx) = oneshot::channel();

        tokio::spawn(async move {
            while let Some(item) = events.recv().await {
                match item {
                    Ok(event) => {
                        tracing::trace!(id = %event.resource_id(), "dispatching status event");
                        self.apply(&event);
                        for observer in observers.iter_mut() {
                            observer.on_event(&self, &event).await;
                        }
                    }
                    Err(error) => {
                        tracing::debug!(%error, "event stream ended with terminal error");
                        self.error = Some(error);
                        break;
                    }
                }
            }
            let _ = done_tx.send(Completion { error: self.error });
        });

        CompletionHandle::new(done_rx)
    }
}
