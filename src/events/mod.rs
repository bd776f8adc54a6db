//! Status events and the channel the polling engine delivers them on.

mod event;

pub use event::{channel, Event, EventReceiver, EventSender};
