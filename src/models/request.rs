//! HTTP request descriptor models.
//!
//! This module defines the normalized input to the code generation engine:
//! the request method, target URL, and optional body. The engine treats the
//! URL and body as opaque text; neither is validated or parsed here.

use serde::{Deserialize, Serialize};

/// HTTP request method supported by the generators.
///
/// This is a closed set matching the methods the engine can emit client code
/// for. Methods outside this set (OPTIONS, HEAD, ...) are deliberately not
/// represented.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum HttpMethod {
    /// HTTP GET method - retrieve a resource
    GET,
    /// HTTP POST method - submit data to create a resource
    POST,
    /// HTTP PUT method - replace a resource
    PUT,
    /// HTTP DELETE method - remove a resource
    DELETE,
    /// HTTP PATCH method - partially modify a resource
    PATCH,
}

impl HttpMethod {
    /// Returns the canonical upper-case string representation of the method.
    pub fn as_str(&self) -> &'static str {
        match self {
            HttpMethod::GET => "GET",
            HttpMethod::POST => "POST",
            HttpMethod::PUT => "PUT",
            HttpMethod::DELETE => "DELETE",
            HttpMethod::PATCH => "PATCH",
        }
    }

    /// Parses a string into an HttpMethod, accepting any casing.
    ///
    /// # Arguments
    ///
    /// * `s` - A string slice representing the HTTP method
    ///
    /// # Returns
    ///
    /// `Some(HttpMethod)` if the string is a supported method, `None` otherwise.
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_uppercase().as_str() {
            "GET" => Some(HttpMethod::GET),
            "POST" => Some(HttpMethod::POST),
            "PUT" => Some(HttpMethod::PUT),
            "DELETE" => Some(HttpMethod::DELETE),
            "PATCH" => Some(HttpMethod::PATCH),
            _ => None,
        }
    }

    /// Returns all supported methods in a fixed order.
    pub fn all() -> &'static [HttpMethod] {
        &[
            HttpMethod::GET,
            HttpMethod::POST,
            HttpMethod::PUT,
            HttpMethod::DELETE,
            HttpMethod::PATCH,
        ]
    }
}

impl std::fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A normalized description of the HTTP request to generate code for.
///
/// This is the single input type shared by every language emitter. The URL is
/// carried as opaque text: malformed URLs are passed through to the generated
/// code unchanged. The body, when present, is expected to already be a
/// pre-formatted literal (typically JSON) and is spliced into the output
/// verbatim with no re-serialization.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RequestDescriptor {
    /// HTTP method (GET, POST, PUT, DELETE, PATCH).
    pub method: HttpMethod,

    /// Target URL for the request.
    ///
    /// Never validated. The engine does not check that this is a well-formed
    /// URI; garbage in, garbage out.
    pub url: String,

    /// Optional request body.
    ///
    /// An empty string is treated the same as `None`: emitters only render
    /// body-setting code for a non-empty body.
    pub body: Option<String>,
}

impl RequestDescriptor {
    /// Creates a new descriptor with no body.
    ///
    /// # Arguments
    ///
    /// * `method` - HTTP method
    /// * `url` - Target URL
    pub fn new(method: HttpMethod, url: impl Into<String>) -> Self {
        Self {
            method,
            url: url.into(),
            body: None,
        }
    }

    /// Sets the request body, consuming and returning the descriptor.
    ///
    /// # Arguments
    ///
    /// * `body` - The body content
    pub fn with_body(mut self, body: impl Into<String>) -> Self {
        self.body = Some(body.into());
        self
    }

    /// Sets the request body in place.
    pub fn set_body(&mut self, body: String) {
        self.body = Some(body);
    }

    /// Checks if the descriptor has a non-empty body.
    pub fn has_body(&self) -> bool {
        self.body.as_ref().map_or(false, |b| !b.is_empty())
    }

    /// Returns the body text if present and non-empty.
    ///
    /// Emitters use this accessor so they all agree on the empty-string case.
    pub fn body_text(&self) -> Option<&str> {
        self.body.as_deref().filter(|b| !b.is_empty())
    }
}
