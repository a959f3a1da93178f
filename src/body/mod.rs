//! Message body framing.
//!
//! Request bodies are read through an [`InputStream`] selected from the
//! request headers, response bodies are written through an [`OutputStream`]
//! selected when the response head is committed.
use std::io;

use crate::error::Error;
use crate::io::{BufferedReader, BufferedWriter};

mod chunked;
mod length;

pub use self::chunked::{ChunkedReader, ChunkedWriter};
pub use self::length::{ContentLengthReader, ContentLengthWriter};

/// Request body reader.
#[derive(Debug, Clone)]
pub enum InputStream {
    /// Request without a body
    Null,
    ContentLength(ContentLengthReader),
    Chunked(ChunkedReader),
    /// Reading the body failed, the rest of the connection input is unusable
    Failed,
}

impl Default for InputStream {
    fn default() -> Self {
        InputStream::Null
    }
}

impl InputStream {
    /// Read body bytes into `dst`, `Ok(0)` at the end of body.
    pub fn read(&mut self, rd: &mut BufferedReader<'_>, dst: &mut [u8]) -> Result<usize, Error> {
        let result = match self {
            InputStream::Null => Ok(0),
            InputStream::ContentLength(r) => r.read(rd, dst),
            InputStream::Chunked(r) => r.read(rd, dst),
            InputStream::Failed => Err(Error::InvalidState("request body has failed")),
        };
        if let Err(ref e) = result {
            log::debug!("request body failed; err={e}");
            *self = InputStream::Failed;
        }
        result
    }

    /// Drain the unread part of the body.
    ///
    /// Returns `false` if more than `limit` bytes would have to be discarded,
    /// the connection can not be reused in that case.
    /// A failed stream is never drained.
    pub fn close(&mut self, rd: &mut BufferedReader<'_>, limit: u64) -> Result<bool, Error> {
        let drained = match self {
            InputStream::Null => Ok(true),
            InputStream::ContentLength(r) => r.drain(rd, limit),
            InputStream::Chunked(r) => r.drain(rd, limit),
            InputStream::Failed => return Ok(false),
        };
        let drained = match drained {
            Ok(drained) => drained,
            Err(e) => {
                *self = InputStream::Failed;
                return Err(e);
            }
        };
        if drained {
            *self = InputStream::Null;
        }
        Ok(drained)
    }

    /// Checks if request carries a body.
    pub fn has_body(&self) -> bool {
        match self {
            InputStream::Null => false,
            InputStream::ContentLength(r) => r.remaining() != 0,
            InputStream::Chunked(r) => !r.is_eof(),
            InputStream::Failed => false,
        }
    }

    /// Checks if reading or draining the body failed.
    pub fn is_failed(&self) -> bool {
        matches!(self, InputStream::Failed)
    }
}

/// Borrowed request body implementing [`io::Read`].
pub struct Body<'a, 's> {
    stream: &'a mut InputStream,
    reader: &'a mut BufferedReader<'s>,
}

impl<'a, 's> Body<'a, 's> {
    pub(crate) fn new(stream: &'a mut InputStream, reader: &'a mut BufferedReader<'s>) -> Self {
        Body { stream, reader }
    }

    /// Read the whole remaining body into memory, failing if it exceeds
    /// `limit` bytes.
    pub fn read_to_end_limited(&mut self, limit: usize) -> Result<Vec<u8>, Error> {
        let mut out = Vec::new();
        let mut buf = [0; 4096];
        loop {
            let n = self.stream.read(self.reader, &mut buf)?;
            if n == 0 {
                return Ok(out);
            }
            if out.len() + n > limit {
                return Err(Error::Client(
                    ntex_http::StatusCode::PAYLOAD_TOO_LARGE,
                    "request body is too large",
                ));
            }
            out.extend_from_slice(&buf[..n]);
        }
    }
}

impl io::Read for Body<'_, '_> {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        self.stream.read(self.reader, buf).map_err(io::Error::from)
    }
}

/// Response body writer.
#[derive(Debug, Clone)]
pub enum OutputStream {
    ContentLength(ContentLengthWriter),
    Chunked(ChunkedWriter),
    /// Body delimited by closing the connection
    Eof,
}

impl OutputStream {
    pub fn write(&mut self, wr: &mut BufferedWriter<'_>, data: &[u8]) -> Result<(), Error> {
        match self {
            OutputStream::ContentLength(w) => w.write(wr, data),
            OutputStream::Chunked(w) => w.write(wr, data),
            OutputStream::Eof => wr.write(data),
        }
    }

    /// Terminate the body.
    pub fn close(&mut self, wr: &mut BufferedWriter<'_>) -> Result<(), Error> {
        match self {
            OutputStream::ContentLength(w) => w.close(),
            OutputStream::Chunked(w) => w.close(wr),
            OutputStream::Eof => Ok(()),
        }
    }
}
