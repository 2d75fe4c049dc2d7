use std::fmt::{self, Debug};
use std::future::Future;
use std::io;
use std::pin::Pin;
use std::task::{ready, Context, Poll};

use call_await_interface::{Call, CallFactory, Callback, Request, Response};
use futures_core::future::FusedFuture;

use crate::suspend::{self, Continuation, Suspension};

/// Awaits the outcome of a [`Call`].
///
/// The call is enqueued on first poll. Dropping this future before it resolves cancels the call
/// and releases any response that arrives for it afterwards.
///
/// Created by [`CallExt::await_response`].
#[must_use = "futures do nothing unless you `.await` or poll them"]
pub struct AwaitCall<C: Call> {
    call: C,
    state: State<C::Response>,
}

enum State<R> {
    Idle,
    Waiting(Suspension<io::Result<R>>),
    Done,
}

// The call is never pinned structurally.
impl<C: Call> Unpin for AwaitCall<C> {}

impl<C: Call> AwaitCall<C> {
    /// Wraps a call that has not been enqueued yet.
    pub fn new(call: C) -> Self {
        Self {
            call,
            state: State::Idle,
        }
    }

    /// Returns the underlying call.
    pub fn call(&self) -> &C {
        &self.call
    }
}

impl<C: Call> Future for AwaitCall<C> {
    type Output = io::Result<C::Response>;

    fn poll(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Self::Output> {
        let this = self.get_mut();
        loop {
            match &mut this.state {
                State::Idle => {
                    let (continuation, suspension) = suspend::channel();
                    this.state = State::Waiting(suspension);
                    this.call.enqueue(Box::new(Resumer { continuation }));
                }
                State::Waiting(suspension) => {
                    let outcome = ready!(Pin::new(suspension).poll(cx));
                    this.state = State::Done;
                    return Poll::Ready(outcome.unwrap_or_else(|_| {
                        Err(io::Error::new(
                            io::ErrorKind::BrokenPipe,
                            "call dropped its callback without completing",
                        ))
                    }));
                }
                State::Done => panic!("AwaitCall polled after completion"),
            }
        }
    }
}

impl<C: Call> FusedFuture for AwaitCall<C> {
    fn is_terminated(&self) -> bool {
        matches!(self.state, State::Done)
    }
}

impl<C: Call> Drop for AwaitCall<C> {
    fn drop(&mut self) {
        let unclaimed = match &mut self.state {
            State::Done => return,
            State::Idle => None,
            State::Waiting(suspension) => suspension.cancel(),
        };
        // Best effort. A call that already completed may refuse.
        self.call.cancel().ok();
        if let Some(Ok(response)) = unclaimed {
            close_quietly(response);
        }
    }
}

struct CallDebug<'a, C>(&'a C);

impl<C: Call> Debug for CallDebug<'_, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.describe(f)
    }
}

impl<C: Call> Debug for AwaitCall<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let state = match self.state {
            State::Idle => "idle",
            State::Waiting(_) => "waiting",
            State::Done => "done",
        };
        f.debug_struct("AwaitCall")
            .field("call", &CallDebug(&self.call))
            .field("state", &state)
            .finish()
    }
}

struct Resumer<R> {
    continuation: Continuation<io::Result<R>>,
}

impl<R: Response> Callback<R> for Resumer<R> {
    fn on_response(self: Box<Self>, response: R) {
        self.continuation
            .resume_or_else(Ok(response), |outcome| {
                if let Ok(response) = outcome {
                    close_quietly(response);
                }
            });
    }

    fn on_failure(self: Box<Self>, error: io::Error) {
        // Nobody to report to if the awaiting side is gone.
        self.continuation.resume(Err(error)).ok();
    }
}

fn close_quietly<R: Response>(response: R) {
    if response.has_body() {
        response.close().ok();
    }
}

/// Awaiting support for every [`Call`].
pub trait CallExt: Call + Sized {
    /// Turns this call into a future of its outcome.
    ///
    /// The future resolves to the response or the I/O error the call reported, unchanged.
    fn await_response(self) -> AwaitCall<Self> {
        AwaitCall::new(self)
    }
}

impl<C: Call> CallExt for C {}

/// Shortcut for creating and awaiting a call in one step.
pub trait CallFactoryExt: CallFactory {
    /// Creates a call for `request` and awaits it.
    fn fetch(&self, request: Request) -> AwaitCall<Self::Call> {
        self.new_call(request).await_response()
    }
}

impl<F: CallFactory> CallFactoryExt for F {}
