use std::sync::Arc;

use tokio::io::AsyncReadExt;
use tokio::net::TcpStream;
use tracing::debug;

use crate::config::Config;
use crate::http::parser::{ParseError, parse_http_request};
use crate::http::request::Request;
use crate::http::response::Response;
use crate::http::writer::ResponseWriter;
use crate::routes;

/// One accepted connection and its keep-alive request/response loop.
pub struct Connection {
    stream: TcpStream,
    buffer: Vec<u8>,
    config: Arc<Config>,
    state: ConnectionState,
}

pub enum ConnectionState {
    Reading,
    Processing(Request),
    Writing(ResponseWriter, bool), // bool = keep_alive?
    Closed,
}

enum ReadOutcome {
    Request(Request),
    PeerClosed,
    Malformed,
}

impl Connection {
    pub fn new(stream: TcpStream, config: Arc<Config>) -> Self {
        Self {
            stream,
            buffer: Vec::with_capacity(4096),
            config,
            state: ConnectionState::Reading,
        }
    }

    /// Drives the state machine until the connection closes.
    ///
    /// Strict request/response alternation: request N's response is fully
    /// written before request N+1 is read.
    pub async fn run(&mut self) -> anyhow::Result<()> {
        loop {
            match &mut self.state {
                ConnectionState::Reading => match self.read_request().await? {
                    ReadOutcome::Request(req) => {
                        self.state = ConnectionState::Processing(req);
                    }
                    ReadOutcome::PeerClosed => {
                        self.state = ConnectionState::Closed;
                    }
                    ReadOutcome::Malformed => {
                        let mut response = Response::bad_request();
                        response.set_header("Connection", "close");
                        response.finalize(false)?;
                        self.state =
                            ConnectionState::Writing(ResponseWriter::new(&response), false);
                    }
                },

                ConnectionState::Processing(req) => {
                    let keep_alive = req.keep_alive();
                    let gzip_requested = req.accepts_gzip();

                    let mut response = routes::dispatch(&self.config, req).await;
                    if !keep_alive {
                        response.set_header("Connection", "close");
                    }
                    response.finalize(gzip_requested)?;

                    let writer = ResponseWriter::new(&response);
                    self.state = ConnectionState::Writing(writer, keep_alive);
                }

                ConnectionState::Writing(writer, keep_alive) => {
                    writer.write_to_stream(&mut self.stream).await?;

                    if *keep_alive {
                        self.state = ConnectionState::Reading; // go back for next request
                    } else {
                        self.state = ConnectionState::Closed;
                    }
                }

                ConnectionState::Closed => {
                    break;
                }
            }
        }

        Ok(())
    }

    /// Reads until the buffer holds one full request.
    ///
    /// Each loop turn makes one receive call bounded at 1024 bytes, then
    /// re-attempts a parse. Bytes beyond the parsed request stay in the
    /// buffer for the next cycle.
    async fn read_request(&mut self) -> anyhow::Result<ReadOutcome> {
        loop {
            match parse_http_request(&self.buffer) {
                Ok((request, consumed)) => {
                    self.buffer.drain(..consumed);
                    return Ok(ReadOutcome::Request(request));
                }

                Err(ParseError::Incomplete) => {
                    // Need more data → fall through to read
                }

                Err(e) => {
                    debug!("rejecting malformed request: {:?}", e);
                    return Ok(ReadOutcome::Malformed);
                }
            }

            let mut temp = [0u8; 1024];
            let n = self.stream.read(&mut temp).await?;

            if n == 0 {
                // Client closed connection
                return Ok(ReadOutcome::PeerClosed);
            }

            self.buffer.extend_from_slice(&temp[..n]);
        }
    }
}
