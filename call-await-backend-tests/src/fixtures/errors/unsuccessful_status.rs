#[cfg(test)]
mod tests {
    use call_await::{CallFactoryExt, Method as CallMethod, Request as CallRequest, Response as _};
    use hyper::{Method, StatusCode};

    use crate::*;

    #[test]
    fn test_unsuccessful_status_codes_are_responses() {
        const PATH: &str = "errors/unsuccessful_status_codes";

        let _handle = crate::add_hyper_fixture(PATH, |req| async move {
            let mut res = Response::builder();

            if req.method() == Method::GET {
                res = res.status(StatusCode::BAD_REQUEST);
            } else if req.method() == Method::POST {
                res = res.status(StatusCode::NOT_FOUND);
            } else if req.method() == Method::PUT {
                res = res.status(StatusCode::INTERNAL_SERVER_ERROR);
            }

            let response = res.body(Full::new(Bytes::from("Error response"))).unwrap();
            (response, Ok(()))
        });

        let results = TOKIO_RT.block_on(async {
            let factory = crate::build_factory(crate::init_builder().await.unwrap());
            let mut results = vec![];
            for method in [CallMethod::Get, CallMethod::Post, CallMethod::Put] {
                // Only I/O failures take the failure arm.
                let res = factory
                    .fetch(CallRequest::new(method, PATH))
                    .await
                    .unwrap();
                results.push((res.status(), res.text().await.unwrap()));
            }
            results
        });
        assert_eq!(
            results,
            vec![
                (400, "Error response".to_owned()),
                (404, "Error response".to_owned()),
                (500, "Error response".to_owned()),
            ]
        );
    }
}
