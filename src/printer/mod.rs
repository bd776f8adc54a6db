//! Line-oriented rendering of a watch session.
//!
//! [`Printer`] orchestrates one session: render every event as a line on its
//! sink, then let the caller's stop-decision look at the collector.
//! [`LineWriter`] and [`render_line`] are the rendering pieces on their own,
//! for callers composing a custom observer list.

mod line;
mod printer;

pub use line::{render_line, LineWriter};
pub use printer::Printer;
