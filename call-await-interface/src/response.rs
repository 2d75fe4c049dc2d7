//! Response trait.

use std::fmt;
use std::io;

use crate::Result;

/// The result of a completed call.
///
/// A response may own a body resource (a pooled connection, a stream). Whoever ends up owning a
/// response that will not be read releases it through [`Response::close`].
pub trait Response: Send + 'static {
    /// Provides a textual description of this response.
    fn describe(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Response")
    }

    /// Returns the HTTP status code of this response.
    fn status(&self) -> u16;

    /// Returns the content-length of the response body, if known.
    fn content_length(&self) -> Option<u64>;

    /// Gets all values for the specified header.
    fn get_header(&self, header: &str) -> Result<Vec<String>>;

    /// Returns whether this response still owns an unreleased body.
    fn has_body(&self) -> bool;

    /// Releases the body without reading it.
    fn close(self) -> io::Result<()>
    where
        Self: Sized;
}
