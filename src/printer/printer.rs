//! # Printer: one watch session from event stream to return value.
//!
//! [`Printer::print`] is the single entry point callers block on. It wires a
//! fresh [`StatusCollector`] to an ordered observer list (render first, then
//! the caller's stop-decision), starts the consume loop, and suspends until
//! the stream is drained.
//!
//! ## Session flow
//! ```text
//! print(events, ids, stop)
//!   ├─► StatusCollector::new(ids)
//!   ├─► observers = [LineWriter(sink), ObserverFn(stop)]
//!   ├─► collector.observe(events, observers)      consume loop, own task
//!   └─► CompletionHandle::wait().await            pure suspension, no polling
//!           │
//!           ├─ stream closed cleanly  ──► Ok(())
//!           └─ terminal error         ──► Err(error)
//! ```
//!
//! ## Rules
//! - Render always precedes the stop-decision for the same event, and both
//!   complete before the next event is dispatched.
//! - The stop-decision is the only thing that may halt the upstream
//!   producer; `print` itself never cancels. If the stream never closes and
//!   the decision never signals, `print` suspends forever by design.
//! - One pass over the given stream: no retries, no reconnection.

use std::io::Write;

use crate::collector::{Observe, ObserverFn, StatusCollector};
use crate::error::WatchError;
use crate::events::{Event, EventReceiver};
use crate::printer::LineWriter;
use crate::resources::ResourceIdSet;

/// Reports resource status events as lines of text as they happen.
pub struct Printer {
    writer: LineWriter,
}

impl Printer {
    /// Creates a printer writing to the given sink.
    pub fn new(out: impl Write + Send + 'static) -> Self {
        Self {
            writer: LineWriter::new(out),
        }
    }

    /// Runs one watch session to completion.
    ///
    /// Consumes events until the stream closes, rendering each as one line
    /// and then invoking `stop` with the collector and the event. `stop` is
    /// responsible for signalling the upstream producer when the watch
    /// should end; this function only returns once the producer closes the
    /// stream (or fails it terminally).
    ///
    /// Returns the stream's terminal error, or `Ok(())` on a clean close.
    pub async fn print<F>(
        self,
        events: EventReceiver,
        ids: &ResourceIdSet,
        stop: F,
    ) -> Result<(), WatchError>
    where
        F: FnMut(&StatusCollector, &Event) + Send + 'static,
    {
        let collector = StatusCollector::new(ids);
        let observers: Vec<Box<dyn Observe>> =
            vec![Box::new(self.writer), ObserverFn::boxed(stop)];

        let completion = collector.observe(events, observers).wait().await;
        match completion.error {
            Some(error) => Err(error),
            None => Ok(()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::events::channel;
    use crate::resources::ResourceId;
    use crate::status::Status;
    use std::io;
    use std::sync::{Arc, Mutex};
    use std::time::Duration;
    use tokio_util::sync::CancellationToken;

    /// Cloneable in-memory sink so tests can read what the session wrote.
    #[derive(Clone, Default)]
    struct SharedBuf(Arc<Mutex<Vec<u8>>>);

    impl SharedBuf {
        fn contents(&self) -> String {
            String::from_utf8(self.0.lock().unwrap().clone()).unwrap()
        }

        fn line_count(&self) -> usize {
            self.contents().lines().count()
        }
    }

    impl io::Write for SharedBuf {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    fn web() -> ResourceId {
        ResourceId::new("", "Deployment", "web")
    }

    fn tracked() -> ResourceIdSet {
        ResourceIdSet::from_iter([web()])
    }

    #[tokio::test]
    async fn test_renders_updates_in_stream_order() {
        let (tx, rx) = channel(8);
        tx.send(Ok(Event::update(web(), Status::InProgress, "rollout ongoing")))
            .await
            .unwrap();
        tx.send(Ok(Event::update(web(), Status::Current, "rollout complete")))
            .await
            .unwrap();
        drop(tx);

        let buf = SharedBuf::default();
        let result = Printer::new(buf.clone())
            .print(rx, &tracked(), |_, _| {})
            .await;

        assert!(result.is_ok());
        assert_eq!(
            buf.contents(),
            "deployment/web is InProgress: rollout ongoing\n\
             deployment/web is Current: rollout complete\n"
        );
    }

    #[tokio::test]
    async fn test_resource_error_renders_but_is_not_terminal() {
        let (tx, rx) = channel(8);
        tx.send(Ok(Event::error(web(), WatchError::resource("connection reset"))))
            .await
            .unwrap();
        drop(tx);

        let buf = SharedBuf::default();
        let result = Printer::new(buf.clone())
            .print(rx, &tracked(), |_, _| {})
            .await;

        assert!(result.is_ok());
        assert_eq!(buf.contents(), "deployment/web error: connection reset\n");
    }

    #[tokio::test]
    async fn test_terminal_error_returned_with_no_output() {
        let (tx, rx) = channel(8);
        tx.send(Err(WatchError::stream("watch expired")))
            .await
            .unwrap();
        drop(tx);

        let buf = SharedBuf::default();
        let result = Printer::new(buf.clone())
            .print(rx, &tracked(), |_, _| {})
            .await;

        assert_eq!(result, Err(WatchError::stream("watch expired")));
        assert_eq!(result.unwrap_err().to_string(), "watch expired");
        assert!(buf.contents().is_empty());
    }

    #[tokio::test]
    async fn test_decide_follows_every_render() {
        let (tx, rx) = channel(8);
        for (status, message) in [
            (Status::InProgress, "one"),
            (Status::InProgress, "two"),
            (Status::Current, "three"),
        ] {
            tx.send(Ok(Event::update(web(), status, message)))
                .await
                .unwrap();
        }
        drop(tx);

        let buf = SharedBuf::default();
        let lines_at_decide: Arc<Mutex<Vec<usize>>> = Arc::default();
        let stop = {
            let buf = buf.clone();
            let lines_at_decide = Arc::clone(&lines_at_decide);
            move |_: &StatusCollector, _: &Event| {
                lines_at_decide.lock().unwrap().push(buf.line_count());
            }
        };

        let result = Printer::new(buf.clone()).print(rx, &tracked(), stop).await;

        assert!(result.is_ok());
        // Decide k ran after exactly k renders: each event is rendered, then
        // decided, before the next event is dispatched.
        assert_eq!(*lines_at_decide.lock().unwrap(), vec![1, 2, 3]);
        assert_eq!(buf.line_count(), 3);
    }

    #[tokio::test]
    async fn test_untracked_event_renders_without_error() {
        let (tx, rx) = channel(8);
        let stray = ResourceId::new("", "Pod", "stray");
        tx.send(Ok(Event::update(stray, Status::Current, "running")))
            .await
            .unwrap();
        drop(tx);

        let buf = SharedBuf::default();
        let result = Printer::new(buf.clone())
            .print(rx, &tracked(), |collector: &StatusCollector, _: &Event| {
                // Rendered and dispatched, but never persisted.
                assert_eq!(collector.statuses().count(), 1);
            })
            .await;

        assert!(result.is_ok());
        assert_eq!(buf.contents(), "pod/stray is Current: running\n");
    }

    #[tokio::test(start_paused = true)]
    async fn test_print_blocks_while_stream_stays_open() {
        let (tx, rx) = channel(8);
        tx.send(Ok(Event::update(web(), Status::InProgress, "rollout ongoing")))
            .await
            .unwrap();

        let tracked = tracked();
        let print = Printer::new(io::sink()).print(rx, &tracked, |_, _| {});
        let outcome = tokio::time::timeout(Duration::from_secs(30), print).await;

        // Sender still alive, no stop signal: print must not have returned.
        assert!(outcome.is_err());
        drop(tx);
    }

    #[tokio::test]
    async fn test_stop_decision_halts_live_producer() {
        let ids = ResourceIdSet::from_iter([
            ResourceId::new("apps", "Deployment", "api"),
            ResourceId::new("apps", "Deployment", "web"),
        ]);
        let token = CancellationToken::new();
        let (tx, rx) = channel(8);

        let producer = tokio::spawn({
            let token = token.clone();
            let ids: Vec<ResourceId> = ids.iter().cloned().collect();
            async move {
                let mut round = 0u32;
                while !token.is_cancelled() {
                    let (status, message) = if round == 0 {
                        (Status::InProgress, "rollout ongoing")
                    } else {
                        (Status::Current, "rollout complete")
                    };
                    for id in &ids {
                        if tx.send(Ok(Event::update(id.clone(), status, message))).await.is_err() {
                            return;
                        }
                    }
                    round += 1;
                    tokio::task::yield_now().await;
                }
            }
        });

        let buf = SharedBuf::default();
        let stop = {
            let token = token.clone();
            move |collector: &StatusCollector, _: &Event| {
                if collector.all_reached(Status::Current) {
                    token.cancel();
                }
            }
        };

        let result = Printer::new(buf.clone()).print(rx, &ids, stop).await;

        assert!(result.is_ok());
        producer.await.unwrap();
        // Both resources went InProgress then Current before the stop fired.
        assert!(buf.line_count() >= 4);
        assert!(token.is_cancelled());
    }
}
