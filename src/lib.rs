//! httpfromtcp - HTTP/1.1 from raw TCP
//!
//! Incremental request parsing over arbitrary byte streams, plus a minimal
//! server that parses one request per connection.

pub mod config;
pub mod http;
pub mod server;
