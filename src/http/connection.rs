use std::time::Duration;

use anyhow::Context;
use tokio::io::{AsyncRead, AsyncWrite};
use tokio::time::timeout;
use tracing::{info, warn};

use crate::config::Config;
use crate::http::reader::RequestReader;
use crate::http::request::Request;
use crate::http::response::Response;
use crate::http::writer::ResponseWriter;

/// Handles a single client connection: one request in, one response out.
pub struct Connection<S> {
    stream: S,
    buffer_capacity: usize,
    read_timeout: Duration,
    state: ConnectionState,
}

pub enum ConnectionState {
    Reading,
    Processing(Request),
    Writing(ResponseWriter),
    Closed,
}

impl<S> Connection<S>
where
    S: AsyncRead + AsyncWrite + Unpin,
{
    pub fn new(stream: S, cfg: &Config) -> Self {
        Self {
            stream,
            buffer_capacity: cfg.buffer_capacity,
            read_timeout: cfg.read_timeout(),
            state: ConnectionState::Reading,
        }
    }

    pub async fn run(&mut self) -> anyhow::Result<()> {
        loop {
            match &mut self.state {
                ConnectionState::Reading => {
                    self.state = match self.read_request().await {
                        Ok(req) => ConnectionState::Processing(req),
                        Err(response) => ConnectionState::Writing(ResponseWriter::new(&response)),
                    };
                }

                ConnectionState::Processing(req) => {
                    let response = Self::handle_request(req);
                    self.state = ConnectionState::Writing(ResponseWriter::new(&response));
                }

                ConnectionState::Writing(writer) => {
                    writer
                        .write_to_stream(&mut self.stream)
                        .await
                        .context("failed to write response")?;
                    self.state = ConnectionState::Closed;
                }

                ConnectionState::Closed => {
                    break;
                }
            }
        }

        Ok(())
    }

    /// Reads one request, or returns the error response to send instead.
    async fn read_request(&mut self) -> Result<Request, Response> {
        let reader = RequestReader::with_capacity(self.buffer_capacity);

        match timeout(self.read_timeout, reader.read_request_async(&mut self.stream)).await {
            Ok(Ok(request)) => Ok(request),
            Ok(Err(e)) => {
                warn!(error = %e, "failed to parse request");
                Err(Response::bad_request())
            }
            Err(_) => {
                warn!(timeout = ?self.read_timeout, "timed out reading request");
                Err(Response::request_timeout())
            }
        }
    }

    fn handle_request(req: &Request) -> Response {
        if let Some(line) = req.request_line() {
            info!(
                method = %line.method,
                target = %line.target,
                version = %line.version,
                body_len = req.body.len(),
                "request received"
            );
        }
        for (name, value) in &req.headers {
            info!(name = %name, value = %value, "header");
        }

        Response::ok("Hello World!\r\n")
    }
}
