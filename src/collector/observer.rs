//! # Per-event observer hook.
//!
//! [`Observe`] is the extension point the consume loop drives: one call per
//! event, after the collector has applied that event to its state. Observers
//! are held in an ordered list and awaited one at a time, so an earlier
//! observer always finishes before a later one starts, and both finish before
//! the next event is dispatched.
//!
//! [`ObserverFn`] adapts a plain closure, which is the usual shape for a
//! stop-decision: inspect the collector, signal the upstream producer when
//! the watch should end.
//!
//! ## Rules
//! - Called on the consume-loop task, never concurrently.
//! - Side-effecting only; there is no return value and no way to veto an
//!   event.
//! - Keep the work short; a slow observer delays every later event.
//!
//! ## Example
//! ```rust
//! use statuswatch::{Event, Observe, ObserverFn, Status, StatusCollector};
//!
//! let decide = ObserverFn::new(|collector: &StatusCollector, _event: &Event| {
//!     if collector.all_reached(Status::Current) {
//!         // tell the polling engine to stop, e.g. cancel its token
//!     }
//! });
//! let _boxed: Box<dyn Observe> = Box::new(decide);
//! ```

use async_trait::async_trait;

use crate::collector::StatusCollector;
use crate::events::Event;

/// Observer invoked once per event during consumption.
///
/// The collector reference reflects the event being observed: state is
/// applied before dispatch.
#[async_trait]
pub trait Observe: Send {
    /// Handles a single event.
    async fn on_event(&mut self, collector: &StatusCollector, event: &Event);
}

/// Function-backed observer.
///
/// Wraps a synchronous `FnMut(&StatusCollector, &Event)` closure, the typical
/// form of a caller-supplied stop-decision.
pub struct ObserverFn<F> {
    f: F,
}

impl<F> ObserverFn<F>
where
    F: FnMut(&StatusCollector, &Event) + Send,
{
    /// Creates a new function-backed observer.
    pub fn new(f: F) -> Self {
        Self { f }
    }

    /// Creates the observer and returns it boxed, ready for an observer list.
    pub fn boxed(f: F) -> Box<dyn Observe>
    where
        F: 'static,
    {
        Box::new(Self::new(f))
    }
}

#[async_trait]
impl<F> Observe for ObserverFn<F>
where
    F: FnMut(&StatusCollector, &Event) + Send,
{
    async fn on_event(&mut self, collector: &StatusCollector, event: &Event) {
        (self.f)(collector, event);
    }
}
