//! The `Transport` trait and an in-process reference implementation.
//!
//! Which broker actually carries messages between worker processes is
//! explicitly out of scope for this crate (see the crate-level docs); this
//! module only fixes the shape every implementation must expose, plus one
//! implementation — [`InProcessBus`] — suitable for single-process test
//! harnesses and the bundled demo binaries.
//!
//! Every topic used by this system is either a literal string or has its
//! variable segment substituted before `publish`/`subscribe` (see
//! [`crate::topics`]); there is no MQTT-style `+`/`#` wildcard matching to
//! support, so `InProcessBus` keys subscriptions by exact topic string.

use std::collections::HashMap;
use std::sync::mpsc::{Receiver, Sender, TryRecvError, channel};
use std::sync::{Arc, Mutex};

use crate::error::{BusError, BusResult};

/// A single delivered message: the topic it was published on and its raw
/// payload bytes (JSON-encoded by convention, but this trait does not
/// enforce an encoding).
pub type Message = (String, Vec<u8>);

/// A pub/sub transport seam. Implementations may be backed by an MQTT
/// client, an in-memory channel, or anything else that can move bytes
/// between named topics — see the module docs for why none is specified.
pub trait Transport: Send + Sync {
    /// Publish `payload` on `topic`. Per the framework's error-handling
    /// design, a publish failure is fatal to the calling worker.
    fn publish(&self, topic: &str, payload: &[u8]) -> BusResult<()>;

    /// Subscribe to `topic`, returning a handle that yields every message
    /// published on it from this point on.
    fn subscribe(&self, topic: &str) -> BusResult<Subscription>;
}

/// A subscription handle. Poll with [`Subscription::try_recv`] from inside
/// a worker's step handler; `recv_blocking` is provided for the
/// coordinator's barrier wait, which is expected to suspend.
pub struct Subscription {
    topic: String,
    rx: Receiver<Vec<u8>>,
}

impl Subscription {
    /// Non-blocking poll. Returns `Ok(None)` if no message is currently
    /// queued, `Err` if every sender for this topic has been dropped.
    pub fn try_recv(&self) -> BusResult<Option<Vec<u8>>> {
        match self.rx.try_recv() {
            Ok(payload) => Ok(Some(payload)),
            Err(TryRecvError::Empty) => Ok(None),
            Err(TryRecvError::Disconnected) => Err(BusError::SubscriptionClosed(self.topic.clone())),
        }
    }

    /// Block until a message arrives. Used by the coordinator's barrier
    /// wait, which is defined to suspend on transport I/O (see §5).
    pub fn recv_blocking(&self) -> BusResult<Vec<u8>> {
        self.rx
            .recv()
            .map_err(|_| BusError::SubscriptionClosed(self.topic.clone()))
    }

    pub fn topic(&self) -> &str {
        &self.topic
    }
}

/// An in-memory fan-out bus keyed by exact topic string.
///
/// Every call to [`Transport::subscribe`] registers a fresh channel for that
/// topic; [`Transport::publish`] clones the payload to every currently
/// registered subscriber. A topic with no subscribers silently drops
/// published messages (there is no broker-side queueing to replay from).
#[derive(Default)]
pub struct InProcessBus {
    subscribers: Mutex<HashMap<String, Vec<Sender<Vec<u8>>>>>,
}

impl InProcessBus {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Transport for InProcessBus {
    fn publish(&self, topic: &str, payload: &[u8]) -> BusResult<()> {
        let mut subs = self.subscribers.lock().expect("bus mutex poisoned");
        if let Some(senders) = subs.get_mut(topic) {
            senders.retain(|tx| tx.send(payload.to_vec()).is_ok());
        }
        tracing::trace!(topic, bytes = payload.len(), "published");
        Ok(())
    }

    fn subscribe(&self, topic: &str) -> BusResult<Subscription> {
        let (tx, rx) = channel();
        self.subscribers
            .lock()
            .expect("bus mutex poisoned")
            .entry(topic.to_string())
            .or_default()
            .push(tx);
        Ok(Subscription {
            topic: topic.to_string(),
            rx,
        })
    }
}

/// A cheaply cloneable handle to a shared [`InProcessBus`], for wiring
/// multiple simulated "workers" into the same in-memory bus within a single
/// test process.
pub type SharedBus = Arc<InProcessBus>;
