use std::{fmt, io};

use ntex_bytes::BytesMut;
use ntex_http::{StatusCode, Version};

use crate::body::{ChunkedWriter, ContentLengthWriter, OutputStream};
use crate::error::Error;
use crate::io::BufferedWriter;

bitflags::bitflags! {
    #[derive(Debug, Copy, Clone, PartialEq, Eq)]
    struct Flags: u8 {
        /// Response to a HEAD request
        const HEAD       = 0b0000_0001;
        /// Connection stays open after this response
        const KEEP_ALIVE = 0b0000_0010;
        /// Response head has been written
        const COMMITTED  = 0b0000_0100;
        /// Body writes are dropped
        const NO_BODY    = 0b0000_1000;
        const CLOSED     = 0b0001_0000;
    }
}

/// Response to an HTTP/1.x request.
///
/// Until [`Response::output_stream`] is called the body is buffered and the
/// head can still be changed. When the handler returns without streaming,
/// the connection completes the response with a matching `Content-Length`.
pub struct Response<'a, 's> {
    writer: &'a mut BufferedWriter<'s>,
    version: Version,
    status: StatusCode,
    reason: Option<String>,
    headers: Vec<(String, String)>,
    body: BytesMut,
    output: Option<OutputStream>,
    flags: Flags,
}

impl<'a, 's> Response<'a, 's> {
    pub(crate) fn new(
        writer: &'a mut BufferedWriter<'s>,
        version: Version,
        head: bool,
        keep_alive: bool,
    ) -> Self {
        let mut flags = Flags::empty();
        flags.set(Flags::HEAD, head);
        flags.set(Flags::KEEP_ALIVE, keep_alive);

        Response {
            writer,
            version,
            flags,
            status: StatusCode::OK,
            reason: None,
            headers: Vec::new(),
            body: BytesMut::new(),
            output: None,
        }
    }

    pub fn status(&self) -> StatusCode {
        self.status
    }

    pub fn set_status(&mut self, status: StatusCode) -> Result<(), Error> {
        self.check_pending()?;
        self.status = status;
        Ok(())
    }

    /// Override the reason phrase of the status line.
    pub fn set_reason(&mut self, reason: &str) -> Result<(), Error> {
        self.check_pending()?;
        if reason.bytes().any(|b| b == b'\r' || b == b'\n') {
            return Err(Error::InvalidHeader("reason phrase contains CR or LF"));
        }
        self.reason = Some(reason.to_string());
        Ok(())
    }

    /// Append a header field to the response head.
    pub fn add_header(&mut self, name: &str, value: &str) -> Result<(), Error> {
        self.check_pending()?;
        if !is_token(name) {
            return Err(Error::InvalidHeader("invalid header name"));
        }
        if value.bytes().any(|b| b == b'\r' || b == b'\n' || b == 0) {
            return Err(Error::InvalidHeader("header value contains CR, LF or NUL"));
        }
        self.headers.push((name.to_string(), value.to_string()));
        Ok(())
    }

    /// First value of the named response header.
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(n, _)| n.eq_ignore_ascii_case(name))
            .map(|(_, v)| v.as_str())
    }

    /// Checks if the response head has been written.
    pub fn is_committed(&self) -> bool {
        self.flags.contains(Flags::COMMITTED)
    }

    /// Checks if the connection is kept open after this response.
    pub fn is_keep_alive(&self) -> bool {
        self.flags.contains(Flags::KEEP_ALIVE)
    }

    /// Close the connection after this response.
    ///
    /// Before the head is written this also announces `Connection: close`.
    pub(crate) fn disable_keep_alive(&mut self) {
        self.flags.remove(Flags::KEEP_ALIVE);
    }

    /// Write body bytes.
    ///
    /// Before the output stream is obtained the data is buffered.
    pub fn write(&mut self, data: &[u8]) -> Result<(), Error> {
        if self.flags.contains(Flags::CLOSED) {
            return Err(Error::InvalidState("response is closed"));
        }
        match self.output {
            Some(ref mut output) => {
                if self.flags.contains(Flags::NO_BODY) {
                    Ok(())
                } else {
                    output.write(self.writer, data)
                }
            }
            None => {
                self.body.extend_from_slice(data);
                Ok(())
            }
        }
    }

    /// Commit the response head and switch to streaming the body.
    ///
    /// Framing follows the headers set so far: an explicit `Content-Length`
    /// is enforced, otherwise HTTP/1.1 uses chunked encoding and HTTP/1.0
    /// delimits the body by closing the connection. Buffered body bytes are
    /// written first.
    pub fn output_stream(&mut self) -> Result<BodyWriter<'_, 's>, Error> {
        if self.output.is_none() {
            if self.flags.contains(Flags::CLOSED) {
                return Err(Error::InvalidState("response is closed"));
            }
            let output = self.select_output()?;
            self.write_head()?;
            self.output = Some(output);

            if !self.body.is_empty() {
                let body = self.body.split();
                self.write(&body)?;
            }
        }

        match self.output {
            Some(ref mut stream) => Ok(BodyWriter {
                stream,
                writer: &mut *self.writer,
                discard: self.flags.contains(Flags::NO_BODY),
            }),
            None => Err(Error::InvalidState("response has no output stream")),
        }
    }

    /// Complete the response.
    ///
    /// A buffered response is written with a `Content-Length` matching the
    /// buffered body, a streamed one has its body terminated. Closing twice
    /// is a no-op.
    pub fn close(&mut self) -> Result<(), Error> {
        if self.flags.contains(Flags::CLOSED) {
            return Ok(());
        }

        if self.output.is_none() {
            if self.is_chunked() {
                // explicit transfer-encoding, stream the buffered body
                let _ = self.output_stream()?;
            } else {
                return self.close_buffered();
            }
        }

        self.flags.insert(Flags::CLOSED);
        if let Some(ref mut output) = self.output {
            if let Err(e) = output.close(self.writer) {
                self.flags.remove(Flags::KEEP_ALIVE);
                return Err(e);
            }
        }
        Ok(())
    }

    fn close_buffered(&mut self) -> Result<(), Error> {
        let len = self.body.len();
        let declared = self.header("content-length").map(parse_content_length);
        let with_body = self.allows_body() && !self.flags.contains(Flags::HEAD);

        match declared {
            Some(value) if with_body && value != Some(len as u64) => {
                return Err(Error::InvalidState(
                    "content-length does not match response body",
                ));
            }
            Some(_) => (),
            None if self.allows_body() => {
                self.headers
                    .push(("Content-Length".to_string(), len.to_string()));
            }
            None => (),
        }

        self.write_head()?;
        self.flags.insert(Flags::CLOSED);
        if with_body {
            let body = self.body.split().freeze();
            self.writer.write_bytes(body)?;
        }
        Ok(())
    }

    /// Complete the response and report whether the connection can be
    /// reused.
    pub(crate) fn finish(&mut self) -> Result<bool, Error> {
        self.close()?;
        Ok(self.is_keep_alive())
    }

    fn check_pending(&self) -> Result<(), Error> {
        if self.flags.contains(Flags::COMMITTED) {
            Err(Error::InvalidState("response headers are already sent"))
        } else {
            Ok(())
        }
    }

    fn is_chunked(&self) -> bool {
        self.header("transfer-encoding").is_some()
    }

    // the last transfer-coding applied must be chunked
    fn ends_with_chunked(&self) -> bool {
        self.headers
            .iter()
            .filter(|(n, _)| n.eq_ignore_ascii_case("transfer-encoding"))
            .last()
            .and_then(|(_, v)| v.rsplit(',').next())
            .is_some_and(|coding| coding.trim().eq_ignore_ascii_case("chunked"))
    }

    // 1xx, 204 and 304 responses never carry a body
    fn allows_body(&self) -> bool {
        !(self.status.is_informational()
            || self.status == StatusCode::NO_CONTENT
            || self.status == StatusCode::NOT_MODIFIED)
    }

    fn select_output(&mut self) -> Result<OutputStream, Error> {
        let length = self.header("content-length").map(parse_content_length);
        let chunked = self.is_chunked();

        if chunked && self.version != Version::HTTP_11 {
            return Err(Error::InvalidState(
                "transfer-encoding is not supported by HTTP/1.0",
            ));
        }
        if chunked && !self.ends_with_chunked() {
            return Err(Error::InvalidState(
                "final transfer-coding of the response is not chunked",
            ));
        }
        if chunked && length.is_some() {
            return Err(Error::InvalidState(
                "both content-length and transfer-encoding are set",
            ));
        }

        if !self.allows_body() || self.flags.contains(Flags::HEAD) {
            self.flags.insert(Flags::NO_BODY);
            return Ok(OutputStream::ContentLength(ContentLengthWriter::new(0)));
        }

        match length {
            Some(Some(len)) => Ok(OutputStream::ContentLength(ContentLengthWriter::new(len))),
            Some(None) => Err(Error::InvalidState("invalid content-length header")),
            None if chunked => Ok(OutputStream::Chunked(ChunkedWriter::new())),
            None if self.version == Version::HTTP_11 => {
                self.headers
                    .push(("Transfer-Encoding".to_string(), "chunked".to_string()));
                Ok(OutputStream::Chunked(ChunkedWriter::new()))
            }
            None => {
                // body ends when the connection is closed
                self.flags.remove(Flags::KEEP_ALIVE);
                Ok(OutputStream::Eof)
            }
        }
    }

    fn write_head(&mut self) -> Result<(), Error> {
        if self
            .headers
            .iter()
            .any(|(n, v)| n.eq_ignore_ascii_case("connection") && has_token(v, "close"))
        {
            self.flags.remove(Flags::KEEP_ALIVE);
        }

        let mut head = BytesMut::with_capacity(128 + self.headers.len() * 32);
        let version = if self.version == Version::HTTP_10 {
            "HTTP/1.0"
        } else {
            "HTTP/1.1"
        };
        let reason = match self.reason {
            Some(ref reason) => reason.as_str(),
            None => self.status.canonical_reason().unwrap_or("Unknown"),
        };
        head.extend_from_slice(
            format!("{} {} {}\r\n", version, self.status.as_u16(), reason).as_bytes(),
        );

        let keep_alive = self.flags.contains(Flags::KEEP_ALIVE);
        let mut announced = false;
        for (name, value) in &self.headers {
            if name.eq_ignore_ascii_case("connection") {
                if !keep_alive && has_token(value, "keep-alive") {
                    log::trace!("dropping connection header {value:?}, connection is closed");
                    continue;
                }
                announced |= has_token(value, if keep_alive { "keep-alive" } else { "close" });
            }
            head.extend_from_slice(name.as_bytes());
            head.extend_from_slice(b": ");
            head.extend_from_slice(value.as_bytes());
            head.extend_from_slice(b"\r\n");
        }

        if !announced {
            if !keep_alive {
                head.extend_from_slice(b"Connection: close\r\n");
            } else if self.version == Version::HTTP_10 {
                head.extend_from_slice(b"Connection: keep-alive\r\n");
            }
        }
        head.extend_from_slice(b"\r\n");

        log::trace!("writing response head; status={}", self.status);
        self.flags.insert(Flags::COMMITTED);
        self.writer.write(&head)
    }
}

impl fmt::Debug for Response<'_, '_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Response")
            .field("version", &self.version)
            .field("status", &self.status)
            .field("headers", &self.headers)
            .field("flags", &self.flags)
            .finish()
    }
}

/// Streaming body writer obtained from [`Response::output_stream`].
pub struct BodyWriter<'a, 's> {
    stream: &'a mut OutputStream,
    writer: &'a mut BufferedWriter<'s>,
    discard: bool,
}

impl BodyWriter<'_, '_> {
    pub fn write_all(&mut self, data: &[u8]) -> Result<(), Error> {
        if self.discard {
            Ok(())
        } else {
            self.stream.write(self.writer, data)
        }
    }

    pub fn flush(&mut self) -> Result<(), Error> {
        self.writer.flush()
    }
}

impl io::Write for BodyWriter<'_, '_> {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.write_all(buf)?;
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        BodyWriter::flush(self).map_err(io::Error::from)
    }
}

// RFC 7230 tchar
pub(crate) fn is_token(s: &str) -> bool {
    !s.is_empty()
        && s.bytes().all(|b| {
            b.is_ascii_alphanumeric()
                || matches!(
                    b,
                    b'!' | b'#'
                        | b'$'
                        | b'%'
                        | b'&'
                        | b'\''
                        | b'*'
                        | b'+'
                        | b'-'
                        | b'.'
                        | b'^'
                        | b'_'
                        | b'`'
                        | b'|'
                        | b'~'
                )
        })
}

fn has_token(value: &str, token: &str) -> bool {
    value
        .split(',')
        .any(|t| t.trim().eq_ignore_ascii_case(token))
}

/// Parse a decimal `Content-Length`, comma separated repeats must agree.
pub(crate) fn parse_content_length(value: &str) -> Option<u64> {
    let mut result = None;
    for item in value.split(',') {
        let item = item.trim_matches(|c| c == ' ' || c == '\t');
        if item.is_empty() || !item.bytes().all(|b| b.is_ascii_digit()) {
            return None;
        }
        let len = item.parse::<u64>().ok()?;
        match result {
            Some(prev) if prev != len => return None,
            _ => result = Some(len),
        }
    }
    result
}
