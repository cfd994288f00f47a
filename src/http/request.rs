use std::collections::HashMap;

/// HTTP request methods.
///
/// All common methods are parsed; the route table only distinguishes GET
/// and POST (for `/files`), everything else falls through to 404 there.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    GET,
    POST,
    PUT,
    DELETE,
    HEAD,
    OPTIONS,
    PATCH,
}

impl Method {
    /// Parses an HTTP method from its uppercase wire form.
    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "GET" => Some(Method::GET),
            "POST" => Some(Method::POST),
            "PUT" => Some(Method::PUT),
            "DELETE" => Some(Method::DELETE),
            "HEAD" => Some(Method::HEAD),
            "OPTIONS" => Some(Method::OPTIONS),
            "PATCH" => Some(Method::PATCH),
            _ => None,
        }
    }
}

/// A parsed HTTP request.
///
/// Immutable once parsed; lives for exactly one request/response cycle on
/// its connection and is discarded after the response is written.
#[derive(Debug, Clone)]
pub struct Request {
    pub method: Method,
    /// The request target as sent (e.g. "/echo/hello").
    pub path: String,
    /// HTTP version (typically "HTTP/1.1")
    pub version: String,
    pub headers: HashMap<String, String>,
    pub body: Vec<u8>,
}

impl Request {
    /// Retrieves a header value by name.
    pub fn header(&self, key: &str) -> Option<&str> {
        self.headers.get(key).map(|v| v.as_str())
    }

    /// Content-Length header parsed as a usize; 0 when missing or invalid.
    pub fn content_length(&self) -> usize {
        self.header("Content-Length")
            .and_then(|v| v.parse().ok())
            .unwrap_or(0)
    }

    /// Whether the connection should remain open after the response.
    ///
    /// HTTP/1.1 defaults to keep-alive; only an explicit
    /// `Connection: close` turns it off.
    pub fn keep_alive(&self) -> bool {
        self.header("Connection")
            .map(|v| !v.eq_ignore_ascii_case("close"))
            .unwrap_or(true)
    }

    /// Whether the client advertises gzip among its accepted encodings.
    ///
    /// Scans the comma-separated `Accept-Encoding` schemes for the exact
    /// token "gzip".
    pub fn accepts_gzip(&self) -> bool {
        self.header("Accept-Encoding")
            .map(|v| v.split(',').any(|scheme| scheme.trim() == "gzip"))
            .unwrap_or(false)
    }

    /// Path segments after stripping one leading '/'.
    ///
    /// Every request has at least one segment; the root path yields a
    /// single empty-string segment.
    pub fn segments(&self) -> Vec<&str> {
        self.path
            .strip_prefix('/')
            .unwrap_or(&self.path)
            .split('/')
            .collect()
    }

    /// The first path segment, used as the dispatch key ("" for root).
    pub fn route(&self) -> &str {
        self.segments()[0]
    }

    /// The nth path segment, if the request carries one.
    pub fn segment(&self, n: usize) -> Option<&str> {
        self.segments().get(n).copied()
    }
}

/// Builder for constructing Request objects, mainly for handler tests.
pub struct RequestBuilder {
    method: Method,
    path: String,
    headers: HashMap<String, String>,
    body: Vec<u8>,
}

impl RequestBuilder {
    pub fn new(method: Method, path: impl Into<String>) -> Self {
        Self {
            method,
            path: path.into(),
            headers: HashMap::new(),
            body: Vec::new(),
        }
    }

    pub fn header(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.insert(key.into(), value.into());
        self
    }

    pub fn body(mut self, body: Vec<u8>) -> Self {
        self.body = body;
        self
    }

    pub fn build(self) -> Request {
        Request {
            method: self.method,
            path: self.path,
            version: "HTTP/1.1".to_string(),
            headers: self.headers,
            body: self.body,
        }
    }
}
