use std::error::Error as _;
use std::io;

use call_await_interface::Error as CallAwaitError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ReqwestBackendError {
    #[error("reqwest error: {0}")]
    Reqwest(#[from] reqwest::Error),
    #[error("response too large")]
    ResponseTooLarge,
    #[error("invalid header name: {0}")]
    InvalidHeaderName(String),
    #[error("invalid header value: {0}")]
    InvalidHeaderValue(String),
    #[error("invalid URL: {0}")]
    InvalidUrl(String),
    #[error("invalid HTTP method")]
    InvalidMethod,
    #[error("call canceled")]
    Canceled,
    #[error("IO error: {0}")]
    Io(#[from] io::Error),
}

impl From<ReqwestBackendError> for CallAwaitError {
    fn from(err: ReqwestBackendError) -> Self {
        match err {
            ReqwestBackendError::Reqwest(e) if e.is_timeout() => CallAwaitError::RequestTimeout,
            ReqwestBackendError::ResponseTooLarge => CallAwaitError::ResponseTooLarge,
            ReqwestBackendError::InvalidUrl(_) => CallAwaitError::InvalidUrl,
            other => CallAwaitError::Io(other.into()),
        }
    }
}

/// Shapes an error into what the failure arm of a callback reports.
impl From<ReqwestBackendError> for io::Error {
    fn from(err: ReqwestBackendError) -> Self {
        match err {
            ReqwestBackendError::Reqwest(e) if e.is_timeout() => {
                io::Error::new(io::ErrorKind::TimedOut, e)
            }
            ReqwestBackendError::Reqwest(e) if e.is_builder() => {
                io::Error::new(io::ErrorKind::InvalidInput, e)
            }
            ReqwestBackendError::Io(e) => e,
            e @ (ReqwestBackendError::InvalidHeaderName(_)
            | ReqwestBackendError::InvalidHeaderValue(_)
            | ReqwestBackendError::InvalidUrl(_)
            | ReqwestBackendError::InvalidMethod) => io::Error::new(io::ErrorKind::InvalidInput, e),
            e @ ReqwestBackendError::Canceled => io::Error::new(io::ErrorKind::Interrupted, e),
            ReqwestBackendError::Reqwest(e) => io::Error::new(source_io_kind(&e), e),
            other => io::Error::other(other),
        }
    }
}

/// Finds the kind of the innermost I/O error behind a reqwest error, e.g. a refused connection.
fn source_io_kind(err: &reqwest::Error) -> io::ErrorKind {
    let mut source = err.source();
    while let Some(err) = source {
        if let Some(io_err) = err.downcast_ref::<io::Error>() {
            return io_err.kind();
        }
        source = err.source();
    }
    io::ErrorKind::Other
}

pub type Result<T> = std::result::Result<T, ReqwestBackendError>;
