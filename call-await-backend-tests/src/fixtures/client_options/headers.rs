#[cfg(test)]
mod tests {
    use call_await::{Body as CallBody, CallFactoryExt, Request as CallRequest};
    use hyper::header::{ACCEPT, CONTENT_LANGUAGE};

    use crate::*;

    #[test]
    fn test_default_headers() {
        const PATH: &str = "client_options/default_headers";
        const ACCEPT_VALUE: &str = "application/rss+xml";
        const CONTENT_LANGUAGE_VALUE: &str = "en-US";

        let _handle = crate::add_hyper_fixture(PATH, {
            move |req| async move {
                let accept = req
                    .headers()
                    .get(ACCEPT)
                    .map(|v| v.to_str().unwrap_or_default().to_owned())
                    .unwrap_or_default();

                let content_lang = req
                    .headers()
                    .get(CONTENT_LANGUAGE)
                    .map(|v| v.to_str().unwrap_or_default().to_owned())
                    .unwrap_or_default();

                let header_values = format!("{accept}|{content_lang}");
                let response_body = Bytes::from(header_values.into_bytes());

                let res = Response::new(Full::new(response_body));
                (res, Ok(()))
            }
        });

        let res = TOKIO_RT.block_on(async {
            let builder = crate::init_builder()
                .await
                .unwrap()
                .with_header("Accept", ACCEPT_VALUE)
                .with_header("Content-Language", CONTENT_LANGUAGE_VALUE);
            let factory = crate::build_factory(builder);
            factory
                .fetch(CallRequest::post(PATH).with_body(CallBody::text("aa", "text/plain")))
                .await
                .unwrap()
                .text()
                .await
                .unwrap()
        });
        let values: Vec<&str> = res.split('|').collect();
        assert_eq!(values.first().copied().unwrap_or_default(), ACCEPT_VALUE);
        assert_eq!(
            values.get(1).copied().unwrap_or_default(),
            CONTENT_LANGUAGE_VALUE
        );
    }
}
