use std::fmt;
use std::future::{poll_fn, Future};
use std::io;
use std::pin::pin;
use std::sync::Arc;

use bytes::Bytes;
use call_await_interface::{Response, Result as CallAwaitResult};

use crate::error::ReqwestBackendError;
use crate::runtime::ManagedRuntime;

/// A response whose body has not been read yet.
///
/// The body stays attached to its connection until it is read with [`bytes`](Self::bytes) or
/// [`text`](Self::text), released with [`Response::close`], or dropped.
pub struct ReqwestCallResponse {
    response: reqwest::Response,
    max_response_buffer_size: Option<u64>,
    // Keeps the connection tasks the body is read from alive.
    runtime: Arc<ManagedRuntime>,
}

impl ReqwestCallResponse {
    pub(crate) fn new(
        response: reqwest::Response,
        max_response_buffer_size: Option<u64>,
        runtime: Arc<ManagedRuntime>,
    ) -> Self {
        Self {
            response,
            max_response_buffer_size,
            runtime,
        }
    }

    /// Reads the whole body.
    pub async fn bytes(self) -> CallAwaitResult<Vec<u8>> {
        let Self {
            response,
            max_response_buffer_size,
            runtime,
        } = self;
        let handle = runtime.handle().clone();
        let mut task = pin!(collect_all_bytes(response, max_response_buffer_size));
        poll_fn(|cx| {
            let _enter = handle.enter();
            task.as_mut().poll(cx)
        })
        .await
    }

    /// Reads the whole body as UTF-8, replacing invalid sequences.
    pub async fn text(self) -> CallAwaitResult<String> {
        let bytes = self.bytes().await?;
        Ok(String::from_utf8_lossy(&bytes).into_owned())
    }
}

impl fmt::Debug for ReqwestCallResponse {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.describe(f)
    }
}

async fn collect_all_bytes(
    mut response: reqwest::Response,
    max_response_buffer_size: Option<u64>,
) -> CallAwaitResult<Vec<u8>> {
    let mut bufs: Vec<Bytes> = vec![];
    let mut collected_size = 0;
    while let Some(frame) = response.chunk().await.map_err(ReqwestBackendError::Reqwest)? {
        if max_response_buffer_size.is_some_and(|max| collected_size + frame.len() as u64 > max) {
            return Err(ReqwestBackendError::ResponseTooLarge.into());
        }
        collected_size += frame.len() as u64;
        bufs.push(frame);
    }
    Ok(bufs.concat())
}

impl Response for ReqwestCallResponse {
    fn describe(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "ReqwestCallResponse({} {})",
            self.response.status(),
            self.response.url()
        )
    }

    fn status(&self) -> u16 {
        self.response.status().as_u16()
    }

    fn content_length(&self) -> Option<u64> {
        self.response.content_length()
    }

    fn get_header(&self, header: &str) -> CallAwaitResult<Vec<String>> {
        Ok(self
            .response
            .headers()
            .get_all(header)
            .iter()
            .map(|v| v.to_str().unwrap_or_default().into())
            .collect())
    }

    fn has_body(&self) -> bool {
        self.response.content_length() != Some(0)
    }

    fn close(self) -> io::Result<()> {
        log::trace!("closing unread body of {}", self.response.url());
        drop(self.response);
        Ok(())
    }
}
