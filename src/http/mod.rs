//! HTTP/1.1 request parsing from raw byte streams.
//!
//! # Architecture
//!
//! - **`headers`**: Header map with field-line parsing and name canonicalization
//! - **`request_line`**: Parses and validates `METHOD TARGET HTTP/1.1`
//! - **`request`**: The resumable request state machine
//! - **`buffer`**: Fixed-capacity, front-compacting read buffer
//! - **`reader`**: Drives the state machine from a blocking or async source
//! - **`error`**: Parse error taxonomy
//! - **`response`**, **`writer`**: Canned responses and their serialization
//! - **`connection`**: One request, one response per client connection
//!
//! # Request State Machine
//!
//! ```text
//!        ┌──────────────────────┐
//!        │  ReadingRequestLine  │ ← Wait for the first CRLF
//!        └──────────┬───────────┘
//!                   │ Request line valid
//!                   ▼
//!        ┌──────────────────────┐
//!        │    ReadingHeaders    │ ← One field line per CRLF
//!        └──────────┬───────────┘
//!                   │ Empty line
//!                   ├─ Content-Length → ReadingBody
//!                   └─ otherwise      → Done
//!        ┌──────────────────────┐
//!        │     ReadingBody      │ ← Until Content-Length bytes
//!        └──────────┬───────────┘
//!                   ▼
//!                 Done
//! ```
//!
//! # Example
//!
//! ```
//! use httpfromtcp::http::reader::request_from_reader;
//!
//! let raw = b"GET / HTTP/1.1\r\nHost: localhost:42069\r\n\r\n";
//! let req = request_from_reader(&raw[..]).unwrap();
//! assert_eq!(req.target(), Some("/"));
//! assert_eq!(req.header("Host"), Some("localhost:42069"));
//! ```

pub mod buffer;
pub mod connection;
pub mod error;
pub mod headers;
pub mod reader;
pub mod request;
pub mod request_line;
pub mod response;
pub mod writer;
