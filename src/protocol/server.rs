//! Line-delimited request loop

use std::io::{BufRead, Write};

use anyhow::{Context, Result};

use super::request::Request;
use super::response::{encode_lines, Response, WireNode};
use crate::syntax::{HighlightError, LanguageRegistry, SyntaxParser};

/// Answers requests one at a time against a shared registry.
///
/// The registry is read-only; the parser is the only per-server mutable state
/// and is rebound to the requested grammar on every call.
pub struct Server<'a> {
    registry: &'a LanguageRegistry,
    parser: SyntaxParser,
}

impl<'a> Server<'a> {
    pub fn new(registry: &'a LanguageRegistry) -> Self {
        Self {
            registry,
            parser: SyntaxParser::new(),
        }
    }

    /// Answer a decoded request.
    ///
    /// `Ok(None)` means the request gets no response (unknown language).
    /// Grammar and parser failures are returned as errors; flattening
    /// failures are answered with an error response.
    pub fn handle(&mut self, request: Request) -> Result<Option<Response>> {
        match request {
            Request::Version => Ok(Some(Response::Version(crate::VERSION.to_string()))),
            Request::Invalid => Ok(Some(Response::invalid_command())),
            Request::Syntax { language, source } => {
                let Some(entry) = self.registry.get(&language) else {
                    tracing::debug!("Dropping syntax request for unknown language {:?}", language);
                    return Ok(None);
                };
                match self.parser.highlight(entry, &source) {
                    Ok(rendered) => Ok(Some(Response::Syntax(encode_lines(&rendered)))),
                    Err(e) => recover(e).map(Some),
                }
            }
            Request::TextObj {
                language,
                source,
                point,
            } => {
                let Some(entry) = self.registry.get(&language) else {
                    tracing::debug!("Dropping textobj request for unknown language {:?}", language);
                    return Ok(None);
                };
                match self.parser.node_at(entry, &source, point) {
                    Ok(node) => Ok(Some(Response::TextObj(node.map(WireNode::from)))),
                    Err(e) => recover(e).map(Some),
                }
            }
        }
    }

    /// Decode and answer one input line
    pub fn handle_line(&mut self, line: &str) -> Result<Option<Response>> {
        if line.trim().is_empty() {
            return Ok(None);
        }
        match Request::decode(line) {
            Some(request) => self.handle(request),
            None => {
                tracing::debug!("Ignoring malformed request line ({} bytes)", line.len());
                Ok(None)
            }
        }
    }

    /// Serve requests until `input` is exhausted.
    ///
    /// Each response is written as one line and flushed before the next
    /// request is read.
    pub fn serve<R: BufRead, W: Write>(&mut self, mut input: R, mut output: W) -> Result<()> {
        let mut buf = Vec::new();
        let mut served = 0usize;
        loop {
            buf.clear();
            let read = input
                .read_until(b'\n', &mut buf)
                .context("Failed to read request")?;
            if read == 0 {
                break;
            }

            let Ok(line) = std::str::from_utf8(&buf) else {
                tracing::debug!("Ignoring request line that is not valid UTF-8");
                continue;
            };

            if let Some(response) = self.handle_line(line)? {
                send(&mut output, &response)?;
                served += 1;
            }
        }
        tracing::info!("Input closed after {} responses", served);
        Ok(())
    }
}

fn recover(error: HighlightError) -> Result<Response> {
    if error.is_fatal() {
        return Err(anyhow::Error::new(error));
    }
    tracing::error!("Aborting request: {}", error);
    Ok(Response::Error(error.to_string()))
}

fn send<W: Write>(out: &mut W, response: &Response) -> Result<()> {
    let line = response
        .to_line()
        .with_context(|| format!("Failed to encode {} response", response.name()))?;
    out.write_all(line.as_bytes())?;
    out.write_all(b"\n")?;
    out.flush().context("Failed to flush response")?;
    Ok(())
}
