use crate::http::error::ParseError;
use crate::http::headers::Headers;
use crate::http::request_line::{Method, RequestLine};

const CRLF: &[u8] = b"\r\n";

/// Parse phase of a [`Request`].
///
/// ```text
/// ReadingRequestLine ──► ReadingHeaders ──► ReadingBody ──► Done
///                               │                            ▲
///                               └── no Content-Length ───────┘
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParseState {
    ReadingRequestLine,
    ReadingHeaders,
    ReadingBody { content_length: usize },
    Done,
}

impl ParseState {
    fn can_transition_to(&self, next: &ParseState) -> bool {
        matches!(
            (self, next),
            (ParseState::ReadingRequestLine, ParseState::ReadingHeaders)
                | (ParseState::ReadingHeaders, ParseState::ReadingBody { .. })
                | (ParseState::ReadingHeaders, ParseState::Done)
                | (ParseState::ReadingBody { .. }, ParseState::Done)
        )
    }
}

/// A request being parsed, or a fully parsed one once [`Request::is_done`].
///
/// The parser is push-based: callers hand it whatever bytes they have via
/// [`Request::parse`] and it reports how many it consumed. It never performs
/// I/O itself; see [`RequestReader`](crate::http::reader::RequestReader) for
/// the driver that pulls from a byte source.
#[derive(Debug, Clone)]
pub struct Request {
    state: ParseState,
    request_line: Option<RequestLine>,
    head_len: usize,
    /// Request headers keyed by canonical name
    pub headers: Headers,
    /// Request body, exactly `Content-Length` bytes once done
    pub body: Vec<u8>,
}

impl Default for Request {
    fn default() -> Self {
        Self::new()
    }
}

impl Request {
    pub fn new() -> Self {
        Self {
            state: ParseState::ReadingRequestLine,
            request_line: None,
            head_len: 0,
            headers: Headers::new(),
            body: Vec::new(),
        }
    }

    pub fn state(&self) -> ParseState {
        self.state
    }

    pub fn is_done(&self) -> bool {
        self.state == ParseState::Done
    }

    /// Whether the request line or headers are still being read.
    pub fn is_reading_head(&self) -> bool {
        matches!(
            self.state,
            ParseState::ReadingRequestLine | ParseState::ReadingHeaders
        )
    }

    /// Bytes of request line and header lines consumed so far, terminators
    /// included.
    pub fn head_len(&self) -> usize {
        self.head_len
    }

    /// Feeds `data` to the state machine and returns the number of bytes
    /// consumed from its front.
    ///
    /// As many complete lines (or body bytes) as are available are processed
    /// in one call. Unconsumed bytes must be presented again, followed by
    /// newly received data, on the next call. Once done, further calls
    /// consume nothing.
    pub fn parse(&mut self, data: &[u8]) -> Result<usize, ParseError> {
        let mut consumed = 0;

        while self.state != ParseState::Done {
            let before = self.state;
            let n = self.parse_single(&data[consumed..])?;
            consumed += n;

            if n == 0 && self.state == before {
                break;
            }
        }

        Ok(consumed)
    }

    fn parse_single(&mut self, data: &[u8]) -> Result<usize, ParseError> {
        match self.state {
            ParseState::ReadingRequestLine => {
                let Some((line, n)) = next_line(data) else {
                    return Ok(0);
                };
                let line = std::str::from_utf8(line).map_err(|_| {
                    ParseError::MalformedRequestLine(String::from_utf8_lossy(line).into_owned())
                })?;

                self.request_line = Some(RequestLine::parse(line)?);
                self.head_len += n;
                self.transition(ParseState::ReadingHeaders);
                Ok(n)
            }

            ParseState::ReadingHeaders => {
                let Some((line, n)) = next_line(data) else {
                    return Ok(0);
                };

                if line.is_empty() {
                    let next = match self.declared_content_length()? {
                        Some(content_length) => ParseState::ReadingBody { content_length },
                        None => ParseState::Done,
                    };
                    self.head_len += n;
                    self.transition(next);
                    return Ok(n);
                }

                let line = std::str::from_utf8(line).map_err(|_| {
                    ParseError::MalformedHeaderLine(String::from_utf8_lossy(line).into_owned())
                })?;
                self.headers.set_or_append(line)?;
                self.head_len += n;
                Ok(n)
            }

            ParseState::ReadingBody { content_length } => {
                let total = self.body.len() + data.len();
                if total > content_length {
                    return Err(ParseError::ContentLengthMismatch(format!(
                        "received {total} bytes of body, expected {content_length}"
                    )));
                }

                self.body.extend_from_slice(data);
                if total == content_length {
                    self.transition(ParseState::Done);
                }
                Ok(data.len())
            }

            ParseState::Done => Ok(0),
        }
    }

    fn transition(&mut self, next: ParseState) {
        debug_assert!(
            self.state.can_transition_to(&next),
            "illegal parse state transition {:?} -> {:?}",
            self.state,
            next
        );
        tracing::trace!(from = ?self.state, to = ?next, "request parse state");
        self.state = next;
    }

    fn declared_content_length(&self) -> Result<Option<usize>, ParseError> {
        self.headers
            .get("Content-Length")
            .map(|v| {
                v.parse::<usize>().map_err(|_| {
                    ParseError::ContentLengthMismatch(format!("invalid Content-Length '{v}'"))
                })
            })
            .transpose()
    }

    /// The parsed request line, available once past the first phase.
    pub fn request_line(&self) -> Option<&RequestLine> {
        self.request_line.as_ref()
    }

    pub fn method(&self) -> Option<Method> {
        self.request_line.as_ref().map(|rl| rl.method)
    }

    pub fn target(&self) -> Option<&str> {
        self.request_line.as_ref().map(|rl| rl.target.as_str())
    }

    pub fn version(&self) -> Option<&str> {
        self.request_line.as_ref().map(|rl| rl.version.as_str())
    }

    /// Retrieves a header value by canonical name.
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers.get(name)
    }
}

/// Splits off the next CRLF-terminated line, returning it without the
/// terminator together with the number of bytes it occupied.
fn next_line(data: &[u8]) -> Option<(&[u8], usize)> {
    data.windows(CRLF.len())
        .position(|w| w == CRLF)
        .map(|i| (&data[..i], i + CRLF.len()))
}
