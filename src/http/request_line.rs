use std::fmt;

use crate::http::error::ParseError;

const HTTP_VERSION: &str = "HTTP/1.1";

/// HTTP request methods accepted by the parser.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    /// GET - Retrieve a resource
    GET,
    /// POST - Create or submit data
    POST,
    /// PUT - Replace a resource
    PUT,
    /// DELETE - Delete a resource
    DELETE,
}

impl Method {
    /// Parses an HTTP method from a string.
    ///
    /// Matching is case-sensitive, as method tokens are.
    ///
    /// ```
    /// # use httpfromtcp::http::request_line::Method;
    /// assert_eq!(Method::from_str("GET"), Some(Method::GET));
    /// assert_eq!(Method::from_str("get"), None);
    /// assert_eq!(Method::from_str("PATCH"), None);
    /// ```
    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "GET" => Some(Method::GET),
            "POST" => Some(Method::POST),
            "PUT" => Some(Method::PUT),
            "DELETE" => Some(Method::DELETE),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Method::GET => "GET",
            Method::POST => "POST",
            Method::PUT => "PUT",
            Method::DELETE => "DELETE",
        }
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The first line of a request: `METHOD TARGET HTTP/1.1`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequestLine {
    pub method: Method,
    /// Request target exactly as received; no decoding or normalization.
    pub target: String,
    /// Numeric part of the protocol version, e.g. `1.1`.
    pub version: String,
}

impl RequestLine {
    /// Parses a request line without its trailing CRLF.
    pub fn parse(line: &str) -> Result<Self, ParseError> {
        let parts: Vec<&str> = line.split(' ').collect();
        let [method, target, version] = parts[..] else {
            return Err(ParseError::MalformedRequestLine(line.to_string()));
        };

        let method =
            Method::from_str(method).ok_or_else(|| ParseError::InvalidMethod(method.to_string()))?;

        if version != HTTP_VERSION {
            return Err(ParseError::UnsupportedVersion(version.to_string()));
        }

        if !is_valid_target(target) {
            return Err(ParseError::InvalidTarget(target.to_string()));
        }

        Ok(Self {
            method,
            target: target.to_string(),
            version: version.trim_start_matches("HTTP/").to_string(),
        })
    }
}

impl fmt::Display for RequestLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} HTTP/{}", self.method, self.target, self.version)
    }
}

fn is_valid_target(target: &str) -> bool {
    !target.is_empty()
        && (target.starts_with('/')
            || target.starts_with("http://")
            || target.starts_with("https://"))
}
