//! reqwest-based calls for `call-await`.
//!
//! [`ReqwestCallFactory`] produces [`ReqwestCall`]s that run on a small tokio runtime owned by
//! the factory and report back through [`Callback`](call_await_interface::Callback)s, so they
//! can be awaited from any executor.
//!
//! ```no_run
//! # async fn run() -> std::io::Result<()> {
//! use call_await::{ClientBuilder, CallFactoryExt, Request, Response};
//! use call_await_backend_reqwest::ReqwestBackend;
//!
//! let factory = ClientBuilder::default()
//!     .base_url("https://example.com")
//!     .build(&ReqwestBackend)
//!     .map_err(std::io::Error::other)?;
//! let response = factory.fetch(Request::get("/feed.xml")).await?;
//! println!("{}", response.status());
//! # Ok(())
//! # }
//! ```

mod call;
mod client;
mod error;
mod request;
mod response;
mod runtime;

use call_await_interface::client::ClientOptions;
use call_await_interface::{Backend, Result};

pub use call::ReqwestCall;
pub use client::ReqwestCallFactory;
pub use response::ReqwestCallResponse;

/// The backend implementation using reqwest.
pub struct ReqwestBackend;

impl Backend for ReqwestBackend {
    type CallFactory = ReqwestCallFactory;

    fn create_call_factory(&self, options: ClientOptions) -> Result<Self::CallFactory> {
        ReqwestCallFactory::new(options)
    }
}
