#[cfg(test)]
mod tests {
    use std::io;
    use std::net::TcpListener as StdTcpListener;

    use call_await::{CallFactoryExt, ClientBuilder, Request as CallRequest};

    use crate::*;

    #[test]
    fn test_connection_refused() {
        let port = {
            let listener = StdTcpListener::bind("127.0.0.1:0").unwrap();
            listener.local_addr().unwrap().port()
        };
        let err = TOKIO_RT.block_on(async {
            let factory = crate::build_factory(ClientBuilder::default());
            let url = format!("http://127.0.0.1:{port}/feed.xml");
            factory.fetch(CallRequest::get(url)).await.unwrap_err()
        });
        assert_eq!(err.kind(), io::ErrorKind::ConnectionRefused);
    }

    #[test]
    fn test_relative_uri_without_base_url() {
        let err = TOKIO_RT.block_on(async {
            let factory = crate::build_factory(ClientBuilder::default());
            factory
                .fetch(CallRequest::get("/feed.xml"))
                .await
                .unwrap_err()
        });
        assert_eq!(err.kind(), io::ErrorKind::InvalidInput);
    }
}
