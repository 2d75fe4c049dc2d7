use std::borrow::Cow;

use call_await_interface::{Body, Method, Request};
use http::{header::CONTENT_TYPE, HeaderName, HeaderValue};
use reqwest::{Client, RequestBuilder};
use url::Url;

use crate::error::{ReqwestBackendError, Result};

pub(crate) fn convert_method(method: Method) -> Result<reqwest::Method> {
    Ok(match method {
        Method::Get => reqwest::Method::GET,
        Method::Post => reqwest::Method::POST,
        Method::Put => reqwest::Method::PUT,
        Method::Delete => reqwest::Method::DELETE,
        Method::Head => reqwest::Method::HEAD,
        Method::Patch => reqwest::Method::PATCH,
        Method::Other(other) => other
            .parse()
            .map_err(|_| ReqwestBackendError::InvalidMethod)?,
    })
}

pub(crate) fn build_url(base_url: Option<&Url>, url: &str) -> Result<Url> {
    match base_url {
        Some(base) => base.join(url),
        None => Url::parse(url),
    }
    .map_err(|_| ReqwestBackendError::InvalidUrl(url.to_string()))
}

fn convert_header_name(s: Cow<'static, str>) -> Result<HeaderName> {
    HeaderName::from_bytes(s.as_bytes())
        .map_err(|_| ReqwestBackendError::InvalidHeaderName(s.into_owned()))
}

fn convert_header_value(k: &str, v: Cow<'static, str>) -> Result<HeaderValue> {
    HeaderValue::from_str(&v).map_err(|_| ReqwestBackendError::InvalidHeaderValue(k.into()))
}

/// Translates `req` into a ready-to-send reqwest request.
pub(crate) fn build_request(
    client: &Client,
    base_url: Option<&Url>,
    req: Request,
) -> Result<reqwest::Request> {
    let url = build_url(base_url, &req.relative_uri)?;
    let method = convert_method(req.method)?;

    let mut request_builder: RequestBuilder = client.request(method, url);

    for (key, value) in req.additional_headers {
        let value = convert_header_value(&key, value)?;
        request_builder = request_builder.header(convert_header_name(key)?, value);
    }

    match req.body {
        None => {}
        Some(Body::Bytes {
            content,
            content_type,
        }) => {
            request_builder = request_builder
                .header(CONTENT_TYPE, convert_header_value("content-type", content_type)?)
                .body(content.into_owned());
        }
        Some(Body::Form { fields }) => {
            request_builder = request_builder.form(&fields);
        }
    }

    Ok(request_builder.build()?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn joins_relative_uri_onto_base() {
        let base = Url::parse("http://127.0.0.1:8080/api/").unwrap();
        let url = build_url(Some(&base), "feeds/1.xml").unwrap();
        assert_eq!(url.as_str(), "http://127.0.0.1:8080/api/feeds/1.xml");
    }

    #[test]
    fn relative_uri_without_base_is_invalid() {
        assert!(matches!(
            build_url(None, "/feed.xml"),
            Err(ReqwestBackendError::InvalidUrl(url)) if url == "/feed.xml"
        ));
    }

    #[test]
    fn custom_method_passes_through() {
        let method = convert_method(Method::Other("PROPFIND".into())).unwrap();
        assert_eq!(method.as_str(), "PROPFIND");
        assert!(matches!(
            convert_method(Method::Other("BAD METHOD".into())),
            Err(ReqwestBackendError::InvalidMethod)
        ));
    }

    #[test]
    fn builds_headers_and_body() {
        let client = Client::new();
        let req = Request::post("http://localhost/upload")
            .with_header("X-Feed", "jetcaster")
            .with_body(Body::text("hello", "text/plain"));
        let built = build_request(&client, None, req).unwrap();
        assert_eq!(built.method(), reqwest::Method::POST);
        assert_eq!(built.headers()["x-feed"], "jetcaster");
        assert_eq!(built.headers()[CONTENT_TYPE], "text/plain");
        assert_eq!(built.body().and_then(|b| b.as_bytes()), Some(&b"hello"[..]));
    }

    #[test]
    fn rejects_invalid_header_value() {
        let client = Client::new();
        let req = Request::get("http://localhost/").with_header("x-bad", "line\nbreak");
        assert!(matches!(
            build_request(&client, None, req),
            Err(ReqwestBackendError::InvalidHeaderValue(name)) if name == "x-bad"
        ));
    }
}
