//! Interface definitions for call-await call implementations.
//!
//! This crate provides the capability the await adapter in `call-await` consumes: a [`Call`]
//! that can be enqueued with a two-armed [`Callback`] and canceled from any thread, the
//! [`Response`] it produces, and the [`CallFactory`] that turns a [`Request`] into a call.
//!
//! Implementations only need to depend on this crate. The adapter never looks past these traits.
//!
//! ## Delivery contract
//!
//! Once a call has been enqueued, exactly one of [`Callback::on_response`] or
//! [`Callback::on_failure`] must eventually be invoked, from any thread. Both arms consume the
//! callback, so a second delivery cannot be expressed.

#![cfg_attr(docsrs, feature(doc_cfg))]
#![deny(missing_docs)]

pub mod body;
mod call;
pub mod client;
mod error;
mod request;
mod response;

pub use body::Body;
pub use call::{Backend, Call, CallFactory, Callback};
pub use error::{Error, Result};
pub use request::{Method, Request};
pub use response::Response;
