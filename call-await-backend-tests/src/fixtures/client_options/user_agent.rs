#[cfg(test)]
mod tests {
    use call_await::{CallFactoryExt, Request as CallRequest};
    use hyper::header::USER_AGENT;

    use crate::*;

    #[test]
    fn test_user_agent() {
        const PATH: &str = "client_options/user_agent";
        const USER_AGENT_VALUE: &str = "Jetcaster/1.0 (call-await)";
        let _handle = crate::add_hyper_fixture(PATH, {
            move |req| async move {
                let user_agent = req
                    .headers()
                    .get(USER_AGENT)
                    .map(|v| v.to_str().unwrap().to_owned());
                let user_agent = Bytes::from(user_agent.unwrap_or_default().into_bytes());

                let res = Response::new(Full::new(user_agent));
                (res, Ok(()))
            }
        });

        let res = TOKIO_RT.block_on(async {
            let builder = crate::init_builder()
                .await
                .unwrap()
                .user_agent(USER_AGENT_VALUE);
            let factory = crate::build_factory(builder);
            factory
                .fetch(CallRequest::get(PATH))
                .await
                .unwrap()
                .text()
                .await
                .unwrap()
        });
        assert_eq!(res, USER_AGENT_VALUE);
    }
}
