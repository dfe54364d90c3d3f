//! Plain-data HTTP messages exchanged with the host.
//!
//! `TodoClient` only ever produces an `HttpRequest` and consumes an
//! `HttpResponse`; sending bytes over a socket is left to the caller.

const JSON_CONTENT_TYPE: (&str, &str) = ("content-type", "application/json");

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HttpMethod {
    Get,
    Post,
    Put,
    Delete,
}

#[derive(Debug, Clone)]
pub struct HttpRequest {
    pub method: HttpMethod,
    /// Absolute URL, base URL included.
    pub path: String,
    pub headers: Vec<(String, String)>,
    pub body: Option<String>,
}

impl HttpRequest {
    /// A request with no body and no headers.
    pub fn bodyless(method: HttpMethod, path: String) -> Self {
        Self {
            method,
            path,
            headers: Vec::new(),
            body: None,
        }
    }

    /// A request carrying a JSON body, with the matching content type.
    pub fn json(method: HttpMethod, path: String, body: String) -> Self {
        let (name, value) = JSON_CONTENT_TYPE;
        Self {
            method,
            path,
            headers: vec![(name.to_string(), value.to_string())],
            body: Some(body),
        }
    }

    /// Case-insensitive header lookup.
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(key, _)| key.eq_ignore_ascii_case(name))
            .map(|(_, value)| value.as_str())
    }
}

#[derive(Debug, Clone)]
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
}
