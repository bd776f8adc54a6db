//! Terminal signal of a watch session.
//!
//! The consume loop runs on its own task and communicates its end through a
//! oneshot channel. [`CompletionHandle`] wraps the receiving half so the
//! channel itself never appears in the public interface: callers get exactly
//! one blocking point, [`CompletionHandle::wait`].

use tokio::sync::oneshot;

use crate::error::WatchError;

/// Terminal value of a session: emitted exactly once when the event stream
/// closes, carrying the stream-terminal error if there was one.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Completion {
    /// Terminal error recorded by the consume loop, if any.
    pub error: Option<WatchError>,
}

impl Completion {
    /// Completion of a stream that closed cleanly.
    pub fn clean() -> Self {
        Self { error: None }
    }

    /// Completion of a stream that failed terminally.
    pub fn failed(error: WatchError) -> Self {
        Self { error: Some(error) }
    }

    /// True if the stream closed without a terminal error.
    pub fn is_clean(&self) -> bool {
        self.error.is_none()
    }
}

/// Awaitable handle to a running consume loop.
pub struct CompletionHandle {
    rx: oneshot::Receiver<Completion>,
}

impl CompletionHandle {
    pub(crate) fn new(rx: oneshot::Receiver<Completion>) -> Self {
        Self { rx }
    }

    /// Suspends until the consume loop ends and returns its completion.
    ///
    /// If the loop died without reporting (its half of the channel dropped,
    /// e.g. an observer panicked), this resolves to a completion carrying
    /// [`WatchError::Aborted`] rather than hanging.
    pub async fn wait(self) -> Completion {
        self.rx
            .await
            .unwrap_or_else(|_| Completion::failed(WatchError::Aborted))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_wait_yields_sent_completion() {
        let (tx, rx) = oneshot::channel();
        tx.send(Completion::clean()).expect("receiver alive");
        let completion = CompletionHandle::new(rx).wait().await;
        assert!(completion.is_clean());
    }

    #[tokio::test]
    async fn test_lost_loop_surfaces_as_aborted() {
        let (tx, rx) = oneshot::channel::<Completion>();
        drop(tx);
        let completion = CompletionHandle::new(rx).wait().await;
        assert_eq!(completion.error, Some(WatchError::Aborted));
    }
}
