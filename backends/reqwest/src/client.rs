use std::fmt;
use std::sync::Arc;

use call_await_interface::client::ClientOptions;
use call_await_interface::{CallFactory, Request, Result as CallAwaitResult};
use http::{HeaderMap, HeaderName, HeaderValue};
use reqwest::Client;
use url::Url;

use crate::call::ReqwestCall;
use crate::error::{ReqwestBackendError, Result};
use crate::runtime::ManagedRuntime;

/// Creates [`ReqwestCall`]s sharing one connection pool and one managed runtime.
#[derive(Clone)]
pub struct ReqwestCallFactory {
    pub(crate) client: Client,
    pub(crate) base_url: Option<Url>,
    pub(crate) max_response_buffer_size: Option<u64>,
    pub(crate) runtime: Arc<ManagedRuntime>,
}

impl ReqwestCallFactory {
    /// Builds a factory from `options`.
    pub fn new(options: ClientOptions) -> CallAwaitResult<Self> {
        let client = build_reqwest_client(&options)?;

        let base_url = match options.base_url {
            Some(ref base_url) => Some(
                Url::parse(base_url)
                    .map_err(|_| ReqwestBackendError::InvalidUrl(base_url.clone()))?,
            ),
            None => None,
        };

        Ok(Self {
            client,
            base_url,
            max_response_buffer_size: options.max_response_buffer_size,
            runtime: Arc::new(ManagedRuntime::new()?),
        })
    }
}

impl CallFactory for ReqwestCallFactory {
    type Call = ReqwestCall;

    fn describe(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.base_url {
            Some(base_url) => write!(f, "ReqwestCallFactory({base_url})"),
            None => write!(f, "ReqwestCallFactory"),
        }
    }

    fn new_call(&self, request: Request) -> ReqwestCall {
        ReqwestCall::new(self, request)
    }
}

pub(crate) fn build_reqwest_client(options: &ClientOptions) -> Result<Client> {
    let mut builder = Client::builder();

    if let Some(user_agent) = &options.user_agent {
        builder = builder.user_agent(user_agent);
    }
    let default_headers: Result<HeaderMap> = options
        .default_headers
        .iter()
        .map(|(k, v)| {
            Ok::<_, ReqwestBackendError>((
                HeaderName::from_bytes(k.as_bytes())
                    .map_err(|_| ReqwestBackendError::InvalidHeaderName(k.into()))?,
                HeaderValue::from_str(v)
                    .map_err(|_| ReqwestBackendError::InvalidHeaderValue(v.into()))?,
            ))
        })
        .collect();

    if !options.use_default_proxy {
        builder = builder.no_proxy();
    }
    builder = builder.redirect(if options.follow_redirects {
        reqwest::redirect::Policy::default()
    } else {
        reqwest::redirect::Policy::none()
    });
    if let Some(timeout) = options.request_timeout {
        builder = builder.timeout(timeout);
    }

    builder
        .default_headers(default_headers?)
        .build()
        .map_err(ReqwestBackendError::Reqwest)
}
