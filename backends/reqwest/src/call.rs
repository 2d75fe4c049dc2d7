use std::fmt;
use std::io;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};

use call_await_interface::{Call, Callback, Request};
use reqwest::Client;
use tokio::sync::Notify;

use crate::client::ReqwestCallFactory;
use crate::error::{ReqwestBackendError, Result};
use crate::request::build_request;
use crate::response::ReqwestCallResponse;
use crate::runtime::ManagedRuntime;

/// A single request executed on the factory's managed runtime.
///
/// Canceling an in-flight call makes its callback report [`io::ErrorKind::Interrupted`].
pub struct ReqwestCall {
    state: Arc<CallState>,
    prepared: Mutex<Option<Result<reqwest::Request>>>,
    client: Client,
    max_response_buffer_size: Option<u64>,
    runtime: Arc<ManagedRuntime>,
}

/// The part of a call its running task shares with the caller.
struct CallState {
    description: String,
    executed: AtomicBool,
    canceled: AtomicBool,
    cancel_signal: Notify,
}

impl ReqwestCall {
    pub(crate) fn new(factory: &ReqwestCallFactory, request: Request) -> Self {
        let relative_uri = request.relative_uri.clone();
        let prepared = build_request(&factory.client, factory.base_url.as_ref(), request);
        let description = match &prepared {
            Ok(req) => format!("{} {}", req.method(), req.url()),
            Err(_) => relative_uri.into_owned(),
        };
        Self {
            state: Arc::new(CallState {
                description,
                executed: AtomicBool::new(false),
                canceled: AtomicBool::new(false),
                cancel_signal: Notify::new(),
            }),
            prepared: Mutex::new(Some(prepared)),
            client: factory.client.clone(),
            max_response_buffer_size: factory.max_response_buffer_size,
            runtime: factory.runtime.clone(),
        }
    }
}

impl Call for ReqwestCall {
    type Response = ReqwestCallResponse;

    fn describe(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ReqwestCall({})", self.state.description)
    }

    fn enqueue(&self, callback: Box<dyn Callback<ReqwestCallResponse>>) {
        self.state.executed.store(true, Ordering::SeqCst);
        let Some(prepared) = self.prepared.lock().unwrap().take() else {
            return callback.on_failure(io::Error::other("already executed"));
        };
        if self.state.canceled.load(Ordering::SeqCst) {
            return callback.on_failure(ReqwestBackendError::Canceled.into());
        }
        let request = match prepared {
            Ok(request) => request,
            Err(e) => return callback.on_failure(e.into()),
        };

        log::debug!("enqueue {}", self.state.description);
        let state = self.state.clone();
        let client = self.client.clone();
        let runtime = self.runtime.clone();
        let max_response_buffer_size = self.max_response_buffer_size;
        self.runtime.handle().spawn(async move {
            let outcome = tokio::select! {
                biased;
                () = state.cancel_signal.notified() => Err(ReqwestBackendError::Canceled),
                res = client.execute(request) => res.map_err(ReqwestBackendError::Reqwest),
            };
            match outcome {
                Ok(response) => {
                    log::debug!("{} completed with {}", state.description, response.status());
                    callback.on_response(ReqwestCallResponse::new(
                        response,
                        max_response_buffer_size,
                        runtime,
                    ));
                }
                Err(e) => {
                    log::debug!("{} failed: {e}", state.description);
                    callback.on_failure(e.into());
                }
            }
        });
    }

    fn cancel(&self) -> io::Result<()> {
        if !self.state.canceled.swap(true, Ordering::SeqCst) {
            log::trace!("cancel {}", self.state.description);
            // Stores a permit if the task has not started waiting yet.
            self.state.cancel_signal.notify_one();
        }
        Ok(())
    }

    fn is_executed(&self) -> bool {
        self.state.executed.load(Ordering::SeqCst)
    }

    fn is_canceled(&self) -> bool {
        self.state.canceled.load(Ordering::SeqCst)
    }
}
