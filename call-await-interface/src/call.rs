//! Core call traits.
//!
//! A call implementation provides a [`CallFactory`] producing [`Call`]s. Each call is started at
//! most once through [`Call::enqueue`] and reports its single outcome through a [`Callback`].

use std::fmt;
use std::io;

use crate::client::ClientOptions;
use crate::{Request, Response, Result};

/// Two-armed completion handler registered with [`Call::enqueue`].
///
/// Both arms consume the callback. Implementations may invoke either arm from any thread,
/// including while [`Call::cancel`] runs on another one.
pub trait Callback<R>: Send + 'static {
    /// Invoked once the call has produced a response.
    ///
    /// The callback takes ownership of the response and is responsible for releasing its body
    /// if nobody else will.
    fn on_response(self: Box<Self>, response: R);

    /// Invoked when the call failed at the I/O layer, including when it was canceled while in
    /// flight.
    fn on_failure(self: Box<Self>, error: io::Error);
}

impl<R, F> Callback<R> for F
where
    F: FnOnce(io::Result<R>) + Send + 'static,
{
    fn on_response(self: Box<Self>, response: R) {
        (*self)(Ok(response))
    }

    fn on_failure(self: Box<Self>, error: io::Error) {
        (*self)(Err(error))
    }
}

/// A single request-response operation, startable once.
pub trait Call: Send + Sync + 'static {
    /// The type of response this call produces.
    type Response: Response;

    /// Provides a textual description of this call.
    fn describe(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Call")
    }

    /// Starts the call without blocking and registers `callback` for its completion.
    ///
    /// Exactly one arm of `callback` is invoked for every enqueue, including a rejected one
    /// (already executed or already canceled), which is reported through
    /// [`Callback::on_failure`].
    fn enqueue(&self, callback: Box<dyn Callback<Self::Response>>);

    /// Requests cancellation of the call.
    ///
    /// Must be idempotent and thread-safe: it may be called before, during or after completion,
    /// any number of times. An error means the request could not be honored.
    fn cancel(&self) -> io::Result<()>;

    /// Returns whether the call has been enqueued.
    fn is_executed(&self) -> bool;

    /// Returns whether [`Call::cancel`] has been requested on this call.
    fn is_canceled(&self) -> bool;
}

/// Produces calls for requests.
pub trait CallFactory: Clone + Send + Sync + 'static {
    /// The type of call this factory creates.
    type Call: Call;

    /// Provides a textual description of this factory.
    fn describe(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "CallFactory")
    }

    /// Prepares a call for `request` without starting it.
    fn new_call(&self, request: Request) -> Self::Call;
}

/// A call implementation that can build factories from [`ClientOptions`].
pub trait Backend: Send + Sync + 'static {
    /// The type of factory this backend creates.
    type CallFactory: CallFactory;

    /// Creates a new call factory with the given options.
    fn create_call_factory(&self, options: ClientOptions) -> Result<Self::CallFactory>;
}
