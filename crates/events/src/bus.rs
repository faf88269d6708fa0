//! Publish/subscribe abstraction (mechanics only).
//!
//! Observers subscribe to a bus and drain messages at their own pace; each
//! subscriber gets a copy of every message published after it subscribed
//! (broadcast semantics). The bus distributes, it does not store: a message
//! published before `subscribe` is never seen by that subscription.

use std::sync::mpsc::{Receiver, TryRecvError};

/// A subscription to a message stream.
///
/// Intended for single-threaded, pull-based consumption: the owner polls
/// with [`try_next`](Subscription::try_next) or empties the backlog with
/// [`drain`](Subscription::drain) after being told the snapshot changed.
#[derive(Debug)]
pub struct Subscription<M> {
    receiver: Receiver<M>,
}

impl<M> Subscription<M> {
    pub fn new(receiver: Receiver<M>) -> Self {
        Self { receiver }
    }

    /// Next pending message, if any. `None` means the backlog is empty or
    /// the bus side has been dropped.
    pub fn try_next(&self) -> Option<M> {
        match self.receiver.try_recv() {
            Ok(message) => Some(message),
            Err(TryRecvError::Empty) | Err(TryRecvError::Disconnected) => None,
        }
    }

    /// All pending messages, in publication order.
    pub fn drain(&self) -> Vec<M> {
        let mut messages = Vec::new();
        while let Some(message) = self.try_next() {
            messages.push(message);
        }
        messages
    }
}

/// Pub/sub bus contract.
pub trait EventBus<M> {
    type Error: core::fmt::Debug;

    /// Broadcast a message to every live subscriber.
    fn publish(&self, message: M) -> Result<(), Self::Error>;

    /// Open a new subscription receiving all subsequent messages.
    fn subscribe(&self) -> Subscription<M>;
}
