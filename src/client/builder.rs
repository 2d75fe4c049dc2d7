use std::time::Duration;

use call_await_interface::{Backend, Result};

use super::ClientOptions;

/// Builds a call factory from a [`Backend`] and a set of options.
#[derive(Debug, Clone, Default)]
pub struct ClientBuilder {
    pub(crate) options: ClientOptions,
}

impl ClientBuilder {
    /// Sets the base URL relative request URIs are resolved against.
    pub fn base_url(mut self, base_url: impl Into<String>) -> Self {
        self.options.base_url = Some(base_url.into());
        self
    }

    /// Sets the `User-Agent` header sent with every request.
    pub fn user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.options.user_agent = Some(user_agent.into());
        self
    }

    /// Adds a header sent with every request.
    pub fn with_header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.options
            .default_headers
            .push((name.into(), value.into()));
        self
    }

    /// Ignores the system proxy settings.
    pub fn no_proxy(mut self) -> Self {
        self.options.use_default_proxy = false;
        self
    }

    /// Returns redirect responses as-is instead of following them.
    pub fn no_redirects(mut self) -> Self {
        self.options.follow_redirects = false;
        self
    }

    /// Limits how many body bytes a response may buffer.
    pub fn max_response_buffer_size(mut self, size: u64) -> Self {
        self.options.max_response_buffer_size = Some(size);
        self
    }

    /// Limits how long a whole call may take, body included.
    pub fn request_timeout(mut self, timeout: Duration) -> Self {
        self.options.request_timeout = Some(timeout);
        self
    }

    /// Returns the options collected so far.
    pub fn options(&self) -> &ClientOptions {
        &self.options
    }

    /// Creates a call factory from `backend`.
    pub fn build<B: Backend>(self, backend: &B) -> Result<B::CallFactory> {
        backend.create_call_factory(self.options)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn setters_fill_options() {
        let builder = ClientBuilder::default()
            .base_url("http://localhost:8080")
            .user_agent("feed-fetcher/1.0")
            .with_header("Accept", "application/rss+xml")
            .no_redirects()
            .request_timeout(Duration::from_secs(5));
        let options = builder.options();
        assert_eq!(options.base_url.as_deref(), Some("http://localhost:8080"));
        assert_eq!(options.user_agent.as_deref(), Some("feed-fetcher/1.0"));
        assert_eq!(
            options.default_headers,
            vec![("Accept".to_owned(), "application/rss+xml".to_owned())]
        );
        assert!(!options.follow_redirects);
        assert!(options.use_default_proxy);
        assert_eq!(options.request_timeout, Some(Duration::from_secs(5)));
        assert_eq!(options.max_response_buffer_size, None);
    }
}
