//! Aggregation and dispatch: the consume loop of a watch session.
//!
//! - [`StatusCollector`]: latest status per tracked resource, plus the loop
//!   that applies each event and hands it to the observers;
//! - [`Observe`] / [`ObserverFn`]: the per-event extension point;
//! - [`Completion`] / [`CompletionHandle`]: the terminal signal a session
//!   waits on.

mod collector;
mod completion;
mod observer;

pub use collector::StatusCollector;
pub use completion::{Completion, CompletionHandle};
pub use observer::{Observe, ObserverFn};
