//! Await callback-based HTTP calls.
//!
//! ## Overview
//!
//! Many HTTP stacks expose asynchronous calls as "enqueue with a callback": the call runs on the
//! stack's own threads and reports back through a success arm or a failure arm. `call-await`
//! turns such a call into a single [`Future`](std::future::Future) that
//!
//! - resolves to the exact response, or the exact [`std::io::Error`], the callback reported,
//! - cancels the underlying call when it is dropped early (a timeout, a `select!`, an aborted
//!   task),
//! - releases the body of a response that arrives after nobody is waiting for it any more.
//!
//! The adapter is runtime-agnostic. It never spawns, blocks or requires an executor in the
//! current thread.
//!
//! ## Call implementations
//!
//! The adapter consumes the [`Call`] trait from [`call-await-interface`]. Any type implementing
//! it can be awaited through [`CallExt::await_response`]. A reqwest-based implementation is
//! available in `call-await-backend-reqwest`.
//!
//! ## Usage
//!
//! ```no_run
//! # async fn run<F: call_await::CallFactory>(factory: F) -> std::io::Result<()> {
//! use std::time::Duration;
//!
//! use call_await::{CallFactoryExt, Request, Response};
//!
//! let fetch = factory.fetch(Request::get("/feed.xml"));
//! // Dropping the future on timeout cancels the call.
//! match tokio::time::timeout(Duration::from_secs(10), fetch).await {
//!     Ok(response) => println!("status {}", response?.status()),
//!     Err(_) => println!("gave up"),
//! }
//! # Ok(())
//! # }
//! ```
//!
//! [`call-await-interface`]: https://docs.rs/call-await-interface

#![cfg_attr(docsrs, feature(doc_cfg))]
#![forbid(missing_docs)]

mod await_call;
pub mod client;
pub mod suspend;

pub use await_call::{AwaitCall, CallExt, CallFactoryExt};
pub use call_await_interface::{
    Backend, Body, Call, CallFactory, Callback, Error, Method, Request, Response, Result,
};
#[doc(inline)]
pub use client::ClientBuilder;
