//! A cancellable single-value hand-off between a callback and an awaiting task.
//!
//! [`channel`] creates a [`Continuation`] for the producing side (usually a callback running on a
//! foreign thread) and a [`Suspension`] the consumer awaits. Delivery can be rejected when the
//! consumer is gone, and the rejected value is handed back so its owner can release it.
//!
//! At any point in time exactly one party owns the value: the continuation before delivery, the
//! slot after it, and whichever side observes the slot closing after that.

use std::future::Future;
use std::pin::Pin;
use std::task::{Context, Poll};

use futures_channel::oneshot;
use futures_core::future::FusedFuture;

pub use futures_channel::oneshot::Canceled;

/// Creates a linked continuation and suspension.
pub fn channel<T>() -> (Continuation<T>, Suspension<T>) {
    let (tx, rx) = oneshot::channel();
    (Continuation { tx }, Suspension { rx })
}

/// The producing half. Resumes the suspended side at most once.
#[derive(Debug)]
pub struct Continuation<T> {
    tx: oneshot::Sender<T>,
}

impl<T> Continuation<T> {
    /// Returns whether the suspended side is still waiting for a value.
    pub fn is_active(&self) -> bool {
        !self.tx.is_canceled()
    }

    /// Attempts to deliver `value`.
    ///
    /// Returns the value back if the suspension has been canceled or dropped, in which case
    /// nobody else will ever observe it.
    pub fn resume(self, value: T) -> Result<(), T> {
        self.tx.send(value)
    }

    /// Delivers `value`, or passes it to `on_cancellation` when delivery was rejected.
    pub fn resume_or_else(self, value: T, on_cancellation: impl FnOnce(T)) {
        if let Err(value) = self.resume(value) {
            on_cancellation(value);
        }
    }
}

/// The awaiting half.
///
/// Resolves to the delivered value, or to [`Canceled`] when the continuation was dropped
/// without resuming.
#[derive(Debug)]
#[must_use = "futures do nothing unless you `.await` or poll them"]
pub struct Suspension<T> {
    rx: oneshot::Receiver<T>,
}

impl<T> Suspension<T> {
    /// Stops accepting deliveries.
    ///
    /// Returns a value that was delivered but not yet taken. Any later
    /// [`Continuation::resume`] fails and hands its value back to the caller.
    pub fn cancel(&mut self) -> Option<T> {
        self.rx.close();
        self.rx.try_recv().ok().flatten()
    }
}

impl<T> Future for Suspension<T> {
    type Output = Result<T, Canceled>;

    fn poll(mut self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Self::Output> {
        Pin::new(&mut self.rx).poll(cx)
    }
}

impl<T> FusedFuture for Suspension<T> {
    fn is_terminated(&self) -> bool {
        self.rx.is_terminated()
    }
}
