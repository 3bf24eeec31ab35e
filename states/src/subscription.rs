//! Single-result subscriptions.
//!
//! [`Subscription::channel`] hands out a [`Publisher`] / [`Subscription`]
//! pair. The producing side (an HTTP completion callback, typically) calls
//! [`Publisher::publish`] exactly once; the owning view calls
//! [`Subscription::poll`] each frame until the result arrives.
//!
//! Cancellation discipline: a view releases every subscription it still holds
//! when it is torn down. Dropping a subscription cancels it, and both
//! `publish` and `poll` check the shared token, so a result produced after
//! teardown is never observable.

use std::any::TypeId;

use tokio_util::sync::CancellationToken;

use crate::{TaskHandle, TaskId};

/// Producing half of a single-result channel.
pub struct Publisher<T> {
    sender: flume::Sender<T>,
    handle: TaskHandle,
}

impl<T> Publisher<T> {
    /// Deliver the result, consuming the publisher.
    ///
    /// Returns `false` when the subscription was cancelled or already dropped;
    /// the value is discarded in that case.
    pub fn publish(self, value: T) -> bool {
        if self.handle.is_cancelled() {
            log::debug!("subscription {:?} cancelled, result dropped", self.handle.id());
            return false;
        }
        self.sender.send(value).is_ok()
    }

    pub fn is_cancelled(&self) -> bool {
        self.handle.is_cancelled()
    }
}

/// Receiving half: a cancellable handle to exactly one asynchronous result.
pub struct Subscription<T> {
    receiver: flume::Receiver<T>,
    handle: TaskHandle,
}

impl<T> Subscription<T> {
    /// Create a publisher/subscription pair owned by `owner`.
    pub fn channel(owner: TypeId) -> (Publisher<T>, Subscription<T>) {
        let (sender, receiver) = flume::bounded(1);
        let handle = TaskHandle::new(TaskId::next_for(owner), CancellationToken::new());

        (
            Publisher {
                sender,
                handle: handle.clone(),
            },
            Subscription { receiver, handle },
        )
    }

    /// Take the result if it has arrived. A cancelled subscription never
    /// yields, even when a value slipped into the channel before the cancel.
    pub fn poll(&self) -> Option<T> {
        if self.handle.is_cancelled() {
            return None;
        }
        self.receiver.try_recv().ok()
    }

    /// Release the subscription: any not-yet-delivered result is discarded.
    pub fn unsubscribe(&self) {
        self.handle.cancel();
    }

    pub fn is_cancelled(&self) -> bool {
        self.handle.is_cancelled()
    }

    pub fn id(&self) -> TaskId {
        self.handle.id()
    }
}

impl<T> Drop for Subscription<T> {
    fn drop(&mut self) {
        self.handle.cancel();
    }
}
