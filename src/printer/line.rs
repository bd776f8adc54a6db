//! One line of text per event: the stable output format.
//!
//! ```text
//! <id> is <STATUS>: <message>     resource update
//! <id> error: <error text>        per-resource error
//! ```
//!
//! `<id>` is the canonical [`ResourceId`](crate::ResourceId) display form.
//! Downstream scripts scrape these lines; treat the format as a wire format.

use std::io::Write;

use async_trait::async_trait;

use crate::collector::{Observe, StatusCollector};
use crate::events::Event;

/// Renders one event as its output line (without the trailing newline).
pub fn render_line(event: &Event) -> String {
    match event {
        Event::ResourceUpdate {
            id,
            status,
            message,
        } => format!("{id} is {status}: {message}"),
        Event::Error { id, error } => format!("{id} error: {error}"),
    }
}

/// Observer that writes one rendered line per event to a sink.
///
/// Write failures are logged and swallowed; reporting must never take the
/// session down.
pub struct LineWriter {
    out: Box<dyn Write + Send>,
}

impl LineWriter {
    /// Creates a writer over the given sink.
    pub fn new(out: impl Write + Send + 'static) -> Self {
        Self { out: Box::new(out) }
    }
}

#[async_trait]
impl Observe for LineWriter {
    async fn on_event(&mut self, _collector: &StatusCollector, event: &Event) {
        if let Err(error) = writeln!(self.out, "{}", render_line(event)) {
            tracing::warn!(%error, "could not write status line");
        }
    }
}
