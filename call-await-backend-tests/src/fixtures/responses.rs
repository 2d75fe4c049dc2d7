#[cfg(test)]
mod tests {
    use call_await::{CallFactoryExt, Request as CallRequest, Response as _};
    use hyper::{Method, StatusCode};

    use crate::*;

    #[test]
    fn test_get_text() {
        const PATH: &str = "responses/get_text";
        const BODY: &str = r#"<rss version="2.0"><channel><title>Now in Android</title></channel></rss>"#;
        let _handle = crate::add_hyper_fixture(PATH, |req| async move {
            let res = Response::new(Full::new(Bytes::from(BODY)));
            (res, (req.method() == Method::GET).then_some(()).ok_or(req))
        });
        let (status, content_len, content) = TOKIO_RT.block_on(async {
            let factory = crate::build_factory(crate::init_builder().await.unwrap());
            let res = factory.fetch(CallRequest::get(PATH)).await.unwrap();
            let status = res.status();
            let content_len = res.content_length();
            (status, content_len, res.text().await.unwrap())
        });
        assert_eq!(status, 200);
        assert_eq!(content_len, Some(BODY.len() as u64));
        assert_eq!(content, BODY);
    }

    #[test]
    fn test_get_bytes() {
        const PATH: &str = "responses/get_bytes";
        const BODY: &[u8] = b"\x01\x02\x03\x04";
        let _handle = crate::add_hyper_fixture(PATH, |req| async move {
            let res = Response::new(Full::new(Bytes::from(BODY)));
            (res, (req.method() == Method::GET).then_some(()).ok_or(req))
        });
        let content = TOKIO_RT.block_on(async {
            let factory = crate::build_factory(crate::init_builder().await.unwrap());
            let res = factory.fetch(CallRequest::get(PATH)).await.unwrap();
            res.bytes().await.unwrap()
        });
        assert_eq!(content, BODY);
    }

    #[test]
    fn test_status_and_headers() {
        const PATH: &str = "responses/status_and_headers";
        let _handle = crate::add_hyper_fixture(PATH, |_| async move {
            let res = Response::builder()
                .status(StatusCode::ACCEPTED)
                .header("x-episode", "1")
                .header("x-episode", "2")
                .body(Full::new(Bytes::new()))
                .unwrap();
            (res, Ok(()))
        });
        let (status, episodes, missing, has_body) = TOKIO_RT.block_on(async {
            let factory = crate::build_factory(crate::init_builder().await.unwrap());
            let res = factory.fetch(CallRequest::get(PATH)).await.unwrap();
            (
                res.status(),
                res.get_header("x-episode").unwrap(),
                res.get_header("x-missing").unwrap(),
                res.has_body(),
            )
        });
        assert_eq!(status, 202);
        assert_eq!(episodes, vec!["1".to_owned(), "2".to_owned()]);
        assert!(missing.is_empty());
        assert!(!has_body);
    }
}
