use std::time::Duration;

use call_await::{CallFactoryExt, ClientBuilder, Request, Response};
use call_await_backend_reqwest::ReqwestBackend;

#[tokio::main(flavor = "current_thread")]
async fn main() {
    let mut args = std::env::args().skip(1);
    let url = args
        .next()
        .unwrap_or_else(|| "https://feeds.simplecast.com/JGE3yC0V".into());
    let timeout = args
        .next()
        .map(|secs| secs.parse().expect("timeout must be a number of seconds"))
        .map(Duration::from_secs)
        .unwrap_or(Duration::from_secs(10));

    let factory = ClientBuilder::default()
        .user_agent("fetch-feed/0.1")
        .build(&ReqwestBackend)
        .expect("Failed to build call factory");

    // The call is canceled if the timeout fires first.
    let response = match tokio::time::timeout(timeout, factory.fetch(Request::get(url))).await {
        Ok(response) => response.expect("Failed to get response"),
        Err(_) => {
            eprintln!("gave up after {timeout:?}");
            std::process::exit(1);
        }
    };
    println!("status: {}", response.status());
    let text = response.text().await.expect("Failed to read body");
    println!("{text}");
}
