//! Drives a [`Request`] from a byte source.
//!
//! The loop is strictly sequential: read a chunk into the buffer, feed the
//! buffered bytes to the state machine, compact away what it consumed, and
//! repeat until the request is done or the source is exhausted.

use std::io::{self, Read};

use tokio::io::{AsyncRead, AsyncReadExt};
use tracing::{debug, trace};

use crate::http::buffer::{DEFAULT_CAPACITY, ReadBuffer};
use crate::http::error::ParseError;
use crate::http::request::Request;

/// Reads one request from a blocking source using the default buffer
/// capacity.
pub fn request_from_reader<R: Read>(reader: R) -> Result<Request, ParseError> {
    RequestReader::new().read_request(reader)
}

/// Buffered request reader with a fixed buffer capacity.
///
/// The request line and headers together, as well as any single read, must
/// fit in the buffer capacity; it is never grown. Body bytes are moved out
/// of the buffer as they arrive and are bounded only by `Content-Length`.
#[derive(Debug)]
pub struct RequestReader {
    buffer: ReadBuffer,
    read_total: usize,
}

impl Default for RequestReader {
    fn default() -> Self {
        Self::new()
    }
}

impl RequestReader {
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_CAPACITY)
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            buffer: ReadBuffer::new(capacity),
            read_total: 0,
        }
    }

    pub fn capacity(&self) -> usize {
        self.buffer.capacity()
    }

    /// Reads a complete request from a blocking source.
    pub fn read_request<R: Read>(mut self, mut reader: R) -> Result<Request, ParseError> {
        let mut request = Request::new();

        while !request.is_done() {
            let spare = self.buffer.spare_mut()?;
            let n = match reader.read(spare) {
                Ok(n) => n,
                Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
                Err(source) => {
                    return Err(ParseError::SourceReadFailure {
                        read: self.read_total,
                        source,
                    });
                }
            };

            self.feed(&mut request, n)?;
        }

        debug!(bytes = self.read_total, "request parsed");
        Ok(request)
    }

    /// Reads a complete request from an async source.
    pub async fn read_request_async<R>(mut self, mut reader: R) -> Result<Request, ParseError>
    where
        R: AsyncRead + Unpin,
    {
        let mut request = Request::new();

        while !request.is_done() {
            let spare = self.buffer.spare_mut()?;
            let n = match reader.read(spare).await {
                Ok(n) => n,
                Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
                Err(source) => {
                    return Err(ParseError::SourceReadFailure {
                        read: self.read_total,
                        source,
                    });
                }
            };

            self.feed(&mut request, n)?;
        }

        debug!(bytes = self.read_total, "request parsed");
        Ok(request)
    }

    /// Commits `n` freshly read bytes and runs the state machine over the
    /// buffered region. A zero-length read means the source is exhausted.
    fn feed(&mut self, request: &mut Request, n: usize) -> Result<(), ParseError> {
        self.buffer.commit(n);
        self.read_total += n;

        let consumed = request.parse(self.buffer.filled())?;
        self.buffer.consume(consumed);

        trace!(
            read = n,
            consumed,
            buffered = self.buffer.len(),
            state = ?request.state(),
            "fed chunk to parser"
        );

        let head_buffered = request.head_len() + self.buffer.len();
        if request.is_reading_head() && head_buffered >= self.capacity() {
            return Err(ParseError::BufferOverflow {
                capacity: self.capacity(),
            });
        }

        if n == 0 && !request.is_done() {
            return Err(ParseError::IncompleteRequest {
                buffered: self.buffer.len(),
            });
        }

        Ok(())
    }
}
