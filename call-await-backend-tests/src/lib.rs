#![cfg(test)]

//! End-to-end tests driving the reqwest backend through the await adapter against a local hyper
//! server. Each test registers a fixture under its own path and asserts on what the call reports.

use std::{
    collections::BTreeMap,
    convert::Infallible,
    future::Future,
    io,
    net::SocketAddr,
    pin::Pin,
    sync::{LazyLock, Mutex},
};

use call_await::ClientBuilder;
use call_await_backend_reqwest::{ReqwestBackend, ReqwestCallFactory};
use http_body_util::{BodyExt, Full};
use hyper::{
    body::{self, Bytes},
    server::conn::http1,
    service::service_fn,
    Request, Response, StatusCode,
};
use hyper_util::rt::TokioIo;
use tokio::net::TcpListener;

mod fixtures;

type BoxedBody = http_body_util::combinators::BoxBody<Bytes, hyper::Error>;

/// What a fixture produces: the response to send, and the request back if it failed a check.
type FixtureAssertionResult = (FixtureResponse, Result<(), Request<body::Incoming>>);

/// Accepts both buffered and streamed fixture bodies.
struct FixtureResponse(Response<BoxedBody>);

impl From<Response<Full<Bytes>>> for FixtureResponse {
    fn from(resp: Response<Full<Bytes>>) -> Self {
        FixtureResponse(resp.map(|body| body.map_err(|never| match never {}).boxed()))
    }
}

impl From<Response<BoxedBody>> for FixtureResponse {
    fn from(resp: Response<BoxedBody>) -> Self {
        FixtureResponse(resp)
    }
}

type FixtureService = Box<
    dyn Fn(Request<body::Incoming>) -> Pin<Box<dyn Future<Output = FixtureAssertionResult> + Send>>
        + Send
        + Sync,
>;

struct Fixture {
    svc: FixtureService,
    failed_request: Option<Request<body::Incoming>>,
}

static FIXTURES: Mutex<BTreeMap<String, Fixture>> = Mutex::new(BTreeMap::new());

/// Unregisters nothing, but fails the test if its fixture rejected a request.
#[must_use]
struct FixtureHandle(String);

impl Drop for FixtureHandle {
    fn drop(&mut self) {
        let failed_request = FIXTURES
            .lock()
            .unwrap()
            .get_mut(&*self.0)
            .and_then(|fixture| fixture.failed_request.take());
        if let Some(req) = failed_request {
            panic!("fixture {} rejected request: {:?}", self.0, req);
        }
    }
}

fn add_hyper_fixture<Fut, Resp>(
    path: impl Into<String>,
    svc_fn: impl Fn(Request<body::Incoming>) -> Fut + Send + Sync + 'static,
) -> FixtureHandle
where
    Fut: Future<Output = (Resp, Result<(), Request<body::Incoming>>)> + Send + 'static,
    Resp: Into<FixtureResponse>,
{
    let mut path: String = path.into();
    if !path.starts_with('/') {
        path.insert(0, '/');
    }
    let svc: FixtureService = Box::new(move |req| {
        let fut = svc_fn(req);
        Box::pin(async move {
            let (resp, result) = fut.await;
            (resp.into(), result)
        })
    });
    FIXTURES.lock().unwrap().insert(
        path.clone(),
        Fixture {
            svc,
            failed_request: None,
        },
    );
    FixtureHandle(path)
}

async fn handle_service(req: Request<body::Incoming>) -> Result<Response<BoxedBody>, Infallible> {
    let path = req.uri().path().to_owned();
    let fut = {
        let fixtures = FIXTURES.lock().unwrap();
        match fixtures.get(&*path) {
            Some(fixture) => (fixture.svc)(req),
            None => {
                let not_found = Response::builder()
                    .status(StatusCode::NOT_FOUND)
                    .body(Full::new(Bytes::new()))
                    .unwrap();
                return Ok(FixtureResponse::from(not_found).0);
            }
        }
    };
    let (response, result) = fut.await;

    if let Err(req) = result {
        if let Some(fixture) = FIXTURES.lock().unwrap().get_mut(&*path) {
            fixture.failed_request = Some(req);
        }
    }

    Ok(response.0)
}

async fn setup_hyper_impl() -> Result<String, io::Error> {
    let listener = TcpListener::bind(SocketAddr::from(([127, 0, 0, 1], 0))).await?;
    let port = listener.local_addr()?.port();

    tokio::spawn(async move {
        loop {
            let (stream, _) = listener.accept().await.expect("accept failed");
            tokio::task::spawn(async move {
                // Abandoned calls show up here as aborted connections.
                http1::Builder::new()
                    .serve_connection(TokioIo::new(stream), service_fn(handle_service))
                    .await
                    .ok();
            });
        }
    });

    Ok(format!("http://127.0.0.1:{port}"))
}

/// Runs the fixture server. Tests await calls on it too.
static TOKIO_RT: LazyLock<tokio::runtime::Runtime> = LazyLock::new(|| {
    tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()
        .unwrap()
});

/// Starts the fixture server once and returns a builder pointing at it.
async fn init_builder() -> io::Result<ClientBuilder> {
    use tokio::sync::OnceCell;

    static SERVER_URL: OnceCell<io::Result<String>> = OnceCell::const_new();
    match SERVER_URL.get_or_init(setup_hyper_impl).await {
        Ok(url) => Ok(ClientBuilder::default().base_url(url.clone())),
        Err(err) => Err(io::Error::new(err.kind(), err.to_string())),
    }
}

fn build_factory(builder: ClientBuilder) -> ReqwestCallFactory {
    builder
        .build(&ReqwestBackend)
        .expect("failed to build call factory")
}
