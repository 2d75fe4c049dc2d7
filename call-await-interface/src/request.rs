//! Request types.

use std::borrow::Cow;

use crate::Body;

/// HTTP method of a request.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Method {
    /// `GET`
    Get,
    /// `POST`
    Post,
    /// `PUT`
    Put,
    /// `DELETE`
    Delete,
    /// `HEAD`
    Head,
    /// `PATCH`
    Patch,
    /// Any other method, passed through verbatim.
    Other(Cow<'static, str>),
}

/// A request to be turned into a call by a [`CallFactory`](crate::CallFactory).
#[derive(Debug, Clone)]
pub struct Request {
    /// The HTTP method.
    pub method: Method,
    /// The URI, absolute or relative to the factory's base URL.
    pub relative_uri: Cow<'static, str>,
    /// Headers added on top of the factory defaults.
    pub additional_headers: Vec<(Cow<'static, str>, Cow<'static, str>)>,
    /// Optional request body.
    pub body: Option<Body>,
}

impl Request {
    /// Creates a request with no headers and no body.
    pub fn new(method: Method, relative_uri: impl Into<Cow<'static, str>>) -> Self {
        Self {
            method,
            relative_uri: relative_uri.into(),
            additional_headers: vec![],
            body: None,
        }
    }

    /// Creates a `GET` request.
    pub fn get(uri: impl Into<Cow<'static, str>>) -> Self {
        Self::new(Method::Get, uri)
    }

    /// Creates a `POST` request.
    pub fn post(uri: impl Into<Cow<'static, str>>) -> Self {
        Self::new(Method::Post, uri)
    }

    /// Creates a `HEAD` request.
    pub fn head(uri: impl Into<Cow<'static, str>>) -> Self {
        Self::new(Method::Head, uri)
    }

    /// Adds a header to this request.
    pub fn with_header(
        mut self,
        name: impl Into<Cow<'static, str>>,
        value: impl Into<Cow<'static, str>>,
    ) -> Self {
        self.additional_headers.push((name.into(), value.into()));
        self
    }

    /// Sets the body of this request.
    pub fn with_body(mut self, body: Body) -> Self {
        self.body = Some(body);
        self
    }
}
