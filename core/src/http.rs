//! HTTP transport types and the `HttpTransport` seam.
//!
//! # Design
//! Requests and responses are plain data. `CommentApiClient` builds
//! `HttpRequest` values and classifies `HttpResponse` values; the only code
//! that touches the network is whatever implements `HttpTransport`. Tests
//! swap in a canned transport, production code uses `UreqTransport` or any
//! other adapter the caller provides.
//!
//! All fields use owned types (`String`, `Vec`) so values can be moved into a
//! transport or recorded by a test double without lifetime concerns.

/// HTTP method for a request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HttpMethod {
    Get,
    Post,
    Put,
}

impl HttpMethod {
    pub fn as_str(self) -> &'static str {
        match self {
            HttpMethod::Get => "GET",
            HttpMethod::Post => "POST",
            HttpMethod::Put => "PUT",
        }
    }
}

/// An HTTP request described as plain data.
///
/// Built with `HttpRequest::new` and the `with_*` methods, which take and
/// return `self` so a request reads as one expression.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpRequest {
    pub method: HttpMethod,
    pub url: String,
    pub headers: Vec<(String, String)>,
    pub body: Option<String>,
}

impl HttpRequest {
    pub fn new(method: HttpMethod, url: impl Into<String>) -> Self {
        Self {
            method,
            url: url.into(),
            headers: Vec::new(),
            body: None,
        }
    }

    pub fn with_header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.push((name.into(), value.into()));
        self
    }

    /// Attach a JSON body and the matching `Content-Type` header.
    pub fn with_json_body(self, body: impl Into<String>) -> Self {
        let mut request = self.with_header("Content-Type", "application/json");
        request.body = Some(body.into());
        request
    }

    /// First header value whose name matches `name`, ignoring ASCII case.
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(key, _)| key.eq_ignore_ascii_case(name))
            .map(|(_, value)| value.as_str())
    }
}

/// An HTTP response described as plain data.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpResponse {
    pub status: u16,
    pub headers: Vec<(String, String)>,
    pub body: String,
}

impl HttpResponse {
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        Self {
            status,
            headers: Vec::new(),
            body: body.into(),
        }
    }

    /// `true` for any status in `200..=299`.
    pub fn is_success(&self) -> bool {
        (200..=299).contains(&self.status)
    }
}

/// Executes a single HTTP exchange.
///
/// Implementations must return non-2xx responses as `Ok` data; only failures
/// to complete the exchange (DNS, connect, I/O) belong in `Self::Error`.
/// Errors are handed back to the caller of `CommentApiClient` untouched.
pub trait HttpTransport {
    type Error;

    fn send(&self, request: HttpRequest) -> Result<HttpResponse, Self::Error>;
}

impl<T: HttpTransport + ?Sized> HttpTransport for &T {
    type Error = T::Error;

    fn send(&self, request: HttpRequest) -> Result<HttpResponse, Self::Error> {
        (**self).send(request)
    }
}
