use std::io;

use thiserror::Error;

/// Errors produced while parsing a request off a byte stream.
///
/// Every variant is terminal: once returned, the request being parsed is
/// discarded and no partial [`Request`](crate::http::request::Request) is
/// handed back.
#[derive(Debug, Error)]
pub enum ParseError {
    #[error("malformed request line '{0}', expected METHOD TARGET VERSION")]
    MalformedRequestLine(String),

    #[error("invalid method '{0}', expected one of GET, POST, PUT, DELETE")]
    InvalidMethod(String),

    #[error("unsupported http version '{0}', only HTTP/1.1 is accepted")]
    UnsupportedVersion(String),

    #[error("invalid request target '{0}', must start with '/', 'http://' or 'https://'")]
    InvalidTarget(String),

    #[error("malformed header line '{0}'")]
    MalformedHeaderLine(String),

    #[error("field name '{0}' contains invalid characters")]
    InvalidFieldName(String),

    #[error("content length mismatch: {0}")]
    ContentLengthMismatch(String),

    #[error("request exceeded buffer capacity of {capacity} bytes")]
    BufferOverflow { capacity: usize },

    #[error("source exhausted before request completed ({buffered} bytes unparsed)")]
    IncompleteRequest { buffered: usize },

    #[error("failed to read from source after {read} bytes")]
    SourceReadFailure {
        read: usize,
        #[source]
        source: io::Error,
    },
}
