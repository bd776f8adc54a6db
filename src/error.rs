//! Error types used by the status watch session.
//!
//! A single enum, [`WatchError`], covers both failure classes the session
//! distinguishes:
//!
//! - **Per-resource errors** ([`WatchError::Resource`]) travel inside
//!   [`Event::Error`](crate::Event::Error), are rendered as an output line,
//!   and never end the session.
//! - **Stream-terminal errors** ([`WatchError::Stream`], [`WatchError::Aborted`])
//!   are recorded on the completion signal and surface as the return value of
//!   [`Printer::print`](crate::Printer::print).
//!
//! The helpers (`as_label`, `as_message`) follow the same convention as the
//! rest of the stack: a short snake_case label for logs/metrics plus a
//! human-readable message.

use thiserror::Error;

/// # Errors reported by a watch session.
///
/// `Display` renders the bare reason text, which is what the line renderer
/// and the session return value expose to callers.
#[non_exhaustive]
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum WatchError {
    /// The polling engine failed to observe a single tracked resource.
    ///
    /// Reported inline as an output line; the session continues and the
    /// aggregated status map is left untouched.
    #[error("{reason}")]
    Resource {
        /// Human-readable description from the polling engine.
        reason: String,
    },

    /// The event stream itself failed; the session ends with this error.
    #[error("{reason}")]
    Stream {
        /// Human-readable description of the stream failure.
        reason: String,
    },

    /// The consume loop stopped before producing a completion signal.
    ///
    /// Surfaced by [`CompletionHandle::wait`](crate::CompletionHandle::wait)
    /// when the completion channel closes without a value, so a caller never
    /// hangs on a lost loop.
    #[error("status watch aborted before completion")]
    Aborted,
}

impl WatchError {
    /// Creates a per-resource observation error.
    pub fn resource(reason: impl Into<String>) -> Self {
        WatchError::Resource {
            reason: reason.into(),
        }
    }

    /// Creates a stream-terminal error.
    pub fn stream(reason: impl Into<String>) -> Self {
        WatchError::Stream {
            reason: reason.into(),
        }
    }

    /// Returns a short stable label (snake_case) for use in logs/metrics.
    ///
    /// # Example
    /// ```
    /// use statuswatch::WatchError;
    ///
    /// let err = WatchError::stream("watch expired");
    /// assert_eq!(err.as_label(), "stream_error");
    /// ```
    pub fn as_label(&self) -> &'static str {
        match self {
            WatchError::Resource { .. } => "resource_error",
            WatchError::Stream { .. } => "stream_error",
            WatchError::Aborted => "aborted",
        }
    }

    /// Returns a human-readable message with details about the error.
    pub fn as_message(&self) -> String {
        match self {
            WatchError::Resource { reason } => format!("resource error: {reason}"),
            WatchError::Stream { reason } => format!("stream error: {reason}"),
            WatchError::Aborted => "aborted before completion".to_string(),
        }
    }

    /// Indicates whether this error ends the session.
    ///
    /// Returns `false` only for [`WatchError::Resource`], which is recovered
    /// locally (rendered and discarded).
    pub fn is_terminal(&self) -> bool {
        !matches!(self, WatchError::Resource { .. })
    }
}
