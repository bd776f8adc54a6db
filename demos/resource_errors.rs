//! # Demo: resource_errors
//!
//! Shows the two failure classes side by side:
//! - a per-resource error event, rendered inline while the watch continues;
//! - a stream-terminal error, returned from [`Printer::print`].
//!
//! ## Run
//! ```bash
//! cargo run --example resource_errors
//! ```

use statuswatch::{channel, Event, Printer, ResourceId, ResourceIdSet, Status, WatchError};

#[tokio::main(flavor = "current_thread")]
async fn main() {
    tracing_subscriber::fmt().init();

    let web = ResourceId::new("apps", "Deployment", "web");
    let ids = ResourceIdSet::from_iter([web.clone()]);
    let (tx, rx) = channel(16);

    tokio::spawn(async move {
        let _ = tx
            .send(Ok(Event::update(web.clone(), Status::InProgress, "rollout ongoing")))
            .await;
        // Recovered locally: one line, the session keeps going.
        let _ = tx
            .send(Ok(Event::error(web.clone(), WatchError::resource("connection reset"))))
            .await;
        let _ = tx
            .send(Ok(Event::update(web, Status::Current, "rollout complete")))
            .await;
        // Terminal: ends the session and becomes the return value.
        let _ = tx.send(Err(WatchError::stream("watch expired"))).await;
    });

    let result = Printer::new(std::io::stdout()).print(rx, &ids, |_, _| {}).await;
    println!("watch finished: {result:?}");
}
