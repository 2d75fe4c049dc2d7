//! Error types for operations outside the call outcome itself.
//!
//! A call's own failure is always an [`std::io::Error`] delivered through
//! [`Callback::on_failure`](crate::Callback::on_failure). This type covers building factories and
//! reading response bodies.

use thiserror::Error;

/// Failure of a factory build or of a body read.
#[derive(Debug, Error)]
pub enum Error {
    /// [`Backend::create_call_factory`](crate::Backend::create_call_factory) got a
    /// [`ClientOptions::base_url`](crate::client::ClientOptions::base_url) it cannot parse.
    #[error("base URL is not a valid absolute URL")]
    InvalidUrl,
    /// The backend could not set up its resources, or a body read failed on the wire.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    /// A body read collected more than
    /// [`ClientOptions::max_response_buffer_size`](crate::client::ClientOptions::max_response_buffer_size)
    /// bytes.
    #[error("response body exceeds the configured buffer size")]
    ResponseTooLarge,
    /// A body read ran past
    /// [`ClientOptions::request_timeout`](crate::client::ClientOptions::request_timeout).
    ///
    /// A timeout before the response arrives is reported on the failure arm instead, as
    /// [`std::io::ErrorKind::TimedOut`].
    #[error("response body was not read within the request timeout")]
    RequestTimeout,
}

/// Result of a factory build or a body read.
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use std::io;

    use super::*;

    #[test]
    fn io_error_message_keeps_its_source() {
        let err = Error::from(io::Error::new(io::ErrorKind::ConnectionReset, "peer went away"));
        assert_eq!(err.to_string(), "I/O error: peer went away");
    }

    #[test]
    fn body_read_errors_name_the_limit_they_hit() {
        assert!(Error::ResponseTooLarge.to_string().contains("buffer size"));
        assert!(Error::RequestTimeout.to_string().contains("timeout"));
    }
}
