//! # Demo: watch_rollout
//!
//! Watches two deployments through a fake polling engine and stops the watch
//! once every tracked resource reports `Current`.
//!
//! Shows how to:
//! - Connect a producer to [`Printer::print`] via [`channel`].
//! - Write a stop-decision that inspects the [`StatusCollector`].
//! - Use a `CancellationToken` as the stop control the producer honors.
//!
//! ## Flow
//! ```text
//! fake_poller ── Ok(Event) ──► Printer::print
//!      ▲                          ├─► line per event on stdout
//!      │                          └─► stop-decision: all Current?
//!      └────────── token.cancel() ◄──────────┘
//! fake_poller observes the token, closes the channel, print returns Ok.
//! ```
//!
//! ## Run
//! ```bash
//! cargo run --example watch_rollout
//! ```

use std::time::Duration;

use statuswatch::{
    channel, Event, EventSender, Printer, ResourceId, ResourceIdSet, Status, StatusCollector,
};
use tokio_util::sync::CancellationToken;

/// Emits a round of `InProgress` updates, then `Current` rounds until the
/// token is cancelled. Closes the stream by dropping the sender.
async fn fake_poller(tx: EventSender, token: CancellationToken, ids: Vec<ResourceId>) {
    let mut round = 0u32;
    while !token.is_cancelled() {
        let (status, message) = if round == 0 {
            (Status::InProgress, "rollout ongoing")
        } else {
            (Status::Current, "all replicas ready")
        };
        for id in &ids {
            if tx.send(Ok(Event::update(id.clone(), status, message))).await.is_err() {
                return;
            }
        }
        round += 1;
        tokio::time::sleep(Duration::from_millis(200)).await;
    }
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<(), statuswatch::WatchError> {
    tracing_subscriber::fmt().init();

    let api = ResourceId::new("apps", "Deployment", "api");
    let web = ResourceId::new("apps", "Deployment", "web");
    let ids = ResourceIdSet::from_iter([api.clone(), web.clone()]);

    let token = CancellationToken::new();
    let (tx, rx) = channel(16);
    let poller = tokio::spawn(fake_poller(tx, token.clone(), vec![api, web]));

    let stop = {
        let token = token.clone();
        move |collector: &StatusCollector, _: &Event| {
            if collector.all_reached(Status::Current) {
                token.cancel();
            }
        }
    };

    let result = Printer::new(std::io::stdout()).print(rx, &ids, stop).await;
    let _ = poller.await;

    println!("watch finished: {result:?}");
    result
}
