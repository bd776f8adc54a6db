//! # statuswatch
//!
//! **Statuswatch** is the terminal reporting layer for a resource-status
//! watcher: it consumes a live stream of status-change notifications for a
//! fixed set of tracked resources, prints each as a single human-readable
//! line, and lets a caller-supplied stop-decision halt the upstream watch.
//!
//! The crate deliberately covers only the consume/render/decide loop. The
//! polling engine that computes resource status, the policy that decides
//! "desired status reached", and the management of the output handle are the
//! caller's collaborators.
//!
//! ## Architecture
//! ```text
//!  polling engine (external)
//!        │  Ok(Event::ResourceUpdate | Event::Error)
//!        │  Err(WatchError)              terminal, ends the session
//!        ▼
//!  ┌───────────────────┐
//!  │   EventReceiver   │   bounded mpsc, closed by the producer
//!  └─────────┬─────────┘
//!            ▼
//!  ┌───────────────────────────────┐
//!  │ StatusCollector (own task)    │   latest Status per ResourceId,
//!  │   apply(event) ─► dispatch    │   state applied before dispatch
//!  └──────┬─────────────────┬──────┘
//!         ▼                 ▼            ordered, one event at a time
//!    LineWriter        stop-decision
//!    (render line)     (ObserverFn)
//!         │                 │
//!         ▼                 └──► may cancel the producer
//!    output sink
//!            ...
//!  Completion ──► Printer::print returns Result<(), WatchError>
//! ```
//!
//! ## Line format
//! One line per event, stable for downstream scraping:
//! ```text
//! deployment.apps/web is InProgress: rollout ongoing
//! deployment.apps/web error: connection reset
//! ```
//!
//! | Area            | Description                                         | Key types                          |
//! |-----------------|-----------------------------------------------------|------------------------------------|
//! | **Events**      | Two-variant notifications over a bounded channel.   | [`Event`], [`channel`]             |
//! | **Aggregation** | Latest status per tracked resource.                 | [`StatusCollector`], [`Status`]    |
//! | **Observers**   | Ordered per-event hooks (render, then decide).      | [`Observe`], [`ObserverFn`]        |
//! | **Reporting**   | Line rendering and session orchestration.           | [`Printer`], [`LineWriter`]        |
//! | **Errors**      | Per-resource vs stream-terminal failures.           | [`WatchError`], [`Completion`]     |
//!
//! ## Example
//! ```rust
//! use statuswatch::{channel, Event, Printer, ResourceId, ResourceIdSet, Status};
//!
//! #[tokio::main(flavor = "current_thread")]
//! async fn main() -> Result<(), statuswatch::WatchError> {
//!     let web = ResourceId::new("apps", "Deployment", "web");
//!     let ids = ResourceIdSet::from_iter([web.clone()]);
//!     let (tx, rx) = channel(16);
//!
//!     // Stand-in for the polling engine: emit two updates, then close.
//!     tokio::spawn(async move {
//!         let _ = tx
//!             .send(Ok(Event::update(web.clone(), Status::InProgress, "rollout ongoing")))
//!             .await;
//!         let _ = tx
//!             .send(Ok(Event::update(web, Status::Current, "rollout complete")))
//!             .await;
//!     });
//!
//!     Printer::new(std::io::stdout())
//!         .print(rx, &ids, |_collector, _event| {
//!             // Inspect the collector here and signal the engine to stop.
//!         })
//!         .await
//! }
//! ```

mod collector;
mod error;
mod events;
mod printer;
mod resources;
mod status;

// ---- Public re-exports ----

pub use collector::{Completion, CompletionHandle, Observe, ObserverFn, StatusCollector};
pub use error::WatchError;
pub use events::{channel, Event, EventReceiver, EventSender};
pub use printer::{render_line, LineWriter, Printer};
pub use resources::{ResourceId, ResourceIdSet};
pub use status::{ResourceStatus, Status};
