use ntex_bytes::{ByteString, Bytes};
use ntex_http::{Method, StatusCode, Version};

use crate::body::{Body, ChunkedReader, ContentLengthReader, InputStream};
use crate::config::Config;
use crate::error::Error;
use crate::handler::HandlerMap;
use crate::io::{BufferedReader, BufferedWriter, StreamSource};

use super::request::{Request, RequestData};
use super::response::{is_token, parse_content_length, Response};

bitflags::bitflags! {
    #[derive(Debug, Copy, Clone, PartialEq, Eq)]
    struct Flags: u8 {
        /// Current exchange may be followed by another request
        const KEEP_ALIVE = 0b0000_0001;
        /// Response bytes for the current request were written
        const RESPONDED  = 0b0000_0010;
        /// Client waits for `100 Continue`
        const EXPECT     = 0b0000_0100;
    }
}

/// Connection state.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum State {
    ReadRequestLine,
    ReadHeaders,
    Dispatch,
    WriteResponse,
    Closed,
}

/// HTTP/1.x server connection.
///
/// Requests are read, dispatched and answered one at a time; pipelined
/// requests wait in the read buffer until the previous exchange completed.
pub struct HttpConnection<'s, 'c> {
    reader: BufferedReader<'s>,
    writer: BufferedWriter<'s>,
    handlers: &'c HandlerMap,
    config: &'c Config,
    state: State,
    request: RequestData,
    input: InputStream,
    flags: Flags,
    requests: usize,
}

impl<'s, 'c> HttpConnection<'s, 'c> {
    pub fn new(io: &'s dyn StreamSource, handlers: &'c HandlerMap, config: &'c Config) -> Self {
        let reader = BufferedReader::with_capacity(io, config.read_buffer_size);
        HttpConnection::with_reader(io, reader, handlers, config)
    }

    /// Create a connection over a reader which may already hold input.
    pub(crate) fn with_reader(
        io: &'s dyn StreamSource,
        reader: BufferedReader<'s>,
        handlers: &'c HandlerMap,
        config: &'c Config,
    ) -> Self {
        HttpConnection {
            reader,
            handlers,
            config,
            writer: BufferedWriter::with_capacity(io, config.write_buffer_size),
            state: State::ReadRequestLine,
            request: RequestData::default(),
            input: InputStream::Null,
            flags: Flags::empty(),
            requests: 0,
        }
    }

    pub fn state(&self) -> State {
        self.state
    }

    /// Head of the request being processed.
    pub fn request(&self) -> &RequestData {
        &self.request
    }

    /// Drive the connection until it is closed.
    ///
    /// A client error is answered with an error response if nothing was
    /// written for the current request yet. The transport is closed in every
    /// case.
    pub fn run(&mut self) -> Result<(), Error> {
        let result = loop {
            match self.step() {
                Ok(State::Closed) => break Ok(()),
                Ok(_) => continue,
                Err(e) => break Err(e),
            }
        };

        if let Err(ref err) = result {
            log::debug!("closing connection; err={err}");
            if let Some(status) = err.status() {
                if !self.flags.contains(Flags::RESPONDED) {
                    self.write_error(status);
                }
            }
        }
        self.state = State::Closed;
        let _ = self.writer.close();
        result
    }

    /// Perform a single state transition.
    pub fn step(&mut self) -> Result<State, Error> {
        let next = match self.state {
            State::ReadRequestLine => self.read_request_line()?,
            State::ReadHeaders => self.read_headers()?,
            State::Dispatch => self.dispatch()?,
            State::WriteResponse => self.complete()?,
            State::Closed => State::Closed,
        };
        self.state = next;
        Ok(next)
    }

    fn read_request_line(&mut self) -> Result<State, Error> {
        self.request.clear();
        self.input = InputStream::Null;
        self.flags = Flags::empty();

        let max = self.config.max_line_length;
        let line = loop {
            let line = match self.reader.read_line(max) {
                Ok(line) => line,
                // clean close between requests
                Err(Error::Eof) => return Ok(State::Closed),
                Err(Error::LineTooLong) => {
                    return Err(Error::Client(
                        StatusCode::URI_TOO_LONG,
                        "request line is too long",
                    ))
                }
                Err(e) => return Err(e),
            };
            // empty lines before a request line are ignored
            if !line.is_empty() {
                break line;
            }
        };

        let (method, target, version) = parse_request_line(line)?;
        log::trace!("request line; method={method} target={target} version={version:?}");
        self.request.set_request_line(method, target, version);
        Ok(State::ReadHeaders)
    }

    fn read_headers(&mut self) -> Result<State, Error> {
        let max = self.config.max_line_length;
        let mut count = 0;

        loop {
            let line = self.reader.read_line(max).map_err(|e| match e {
                Error::LineTooLong => Error::Client(
                    StatusCode::REQUEST_HEADER_FIELDS_TOO_LARGE,
                    "header line is too long",
                ),
                e => e,
            })?;
            if line.is_empty() {
                break;
            }

            if line[0] == b' ' || line[0] == b'\t' {
                // obsolete line folding
                let cont = to_string(line)?;
                let cont = cont.trim_matches(|c| c == ' ' || c == '\t');
                if !self.request.extend_last_header(cont) {
                    return Err(Error::bad_request("folded line without a header"));
                }
                continue;
            }

            count += 1;
            if count > self.config.max_headers {
                return Err(Error::Client(
                    StatusCode::REQUEST_HEADER_FIELDS_TOO_LARGE,
                    "too many headers",
                ));
            }

            let (name, value) = parse_header(line)?;
            self.request.add_header(name, value);
        }

        self.fixup_headers()?;
        Ok(State::Dispatch)
    }

    /// Select body framing and keep-alive from the request head.
    fn fixup_headers(&mut self) -> Result<(), Error> {
        let req = &self.request;
        let version = req.version();
        let mut keep_alive = version == Version::HTTP_11;

        if version == Version::HTTP_11 && req.header_all("host").count() != 1 {
            return Err(Error::bad_request("request must carry exactly one host header"));
        }

        let has_length = req.header("content-length").is_some();
        let codings = req.header_all("transfer-encoding").fold(None, |_, v| Some(v));
        self.input = if let Some(codings) = codings {
            if version == Version::HTTP_10 {
                return Err(Error::bad_request("transfer-encoding in HTTP/1.0 request"));
            }
            let last = codings.rsplit(',').next().unwrap_or("").trim();
            if !last.eq_ignore_ascii_case("chunked") {
                return Err(Error::bad_request("final transfer-coding is not chunked"));
            }
            if has_length {
                log::debug!("request carries both transfer-encoding and content-length");
            }
            InputStream::Chunked(ChunkedReader::new(self.config.max_line_length))
        } else if has_length {
            let mut length = None;
            for value in req.header_all("content-length") {
                match (parse_content_length(value), length) {
                    (Some(len), None) => length = Some(len),
                    (Some(len), Some(prev)) if len == prev => (),
                    _ => return Err(Error::bad_request("invalid content-length")),
                }
            }
            match length {
                Some(0) | None => InputStream::Null,
                Some(len) => InputStream::ContentLength(ContentLengthReader::new(len)),
            }
        } else {
            InputStream::Null
        };

        if req.has_token("connection", "close") {
            keep_alive = false;
        } else if req.has_token("connection", "keep-alive") {
            keep_alive = true;
        }
        // a smuggling attempt, do not reuse the connection
        if has_length && matches!(self.input, InputStream::Chunked(_)) {
            keep_alive = false;
        }

        self.requests += 1;
        if !self.config.keep_alive
            || self.config.max_requests.is_some_and(|max| self.requests >= max)
        {
            keep_alive = false;
        }
        self.flags.set(Flags::KEEP_ALIVE, keep_alive);

        if version == Version::HTTP_11
            && self.input.has_body()
            && req.has_token("expect", "100-continue")
        {
            self.flags.insert(Flags::EXPECT);
        }
        Ok(())
    }

    fn dispatch(&mut self) -> Result<State, Error> {
        let Self {
            reader,
            writer,
            request,
            input,
            handlers,
            flags,
            ..
        } = self;

        let found = handlers.find(request.path());
        if flags.contains(Flags::EXPECT) {
            if found.is_some() {
                writer.write(b"HTTP/1.1 100 Continue\r\n\r\n")?;
                writer.flush()?;
            } else {
                // the client may or may not send the body it held back
                flags.remove(Flags::KEEP_ALIVE);
            }
        }

        let head = *request.method() == Method::HEAD;
        let mut res = Response::new(writer, request.version(), head, flags.contains(Flags::KEEP_ALIVE));

        match found {
            Some(m) => {
                log::trace!("dispatching {} {}", request.method(), request.target());
                let mut req = Request::new(request, m.suffix, Body::new(input, reader));
                m.handler.call(&mut req, &mut res);
            }
            None => {
                log::debug!("no handler for {}", request.path());
                res.set_status(StatusCode::NOT_FOUND)?;
            }
        }

        if input.is_failed() {
            log::debug!("request body failed, connection is not reused");
            res.disable_keep_alive();
        }

        let result = res.finish();
        if res.is_committed() {
            flags.insert(Flags::RESPONDED);
        }
        flags.set(Flags::KEEP_ALIVE, result?);
        Ok(State::WriteResponse)
    }

    fn complete(&mut self) -> Result<State, Error> {
        self.writer.flush()?;

        if self.flags.contains(Flags::KEEP_ALIVE)
            && !self.input.close(&mut self.reader, self.config.max_drain_size)?
        {
            log::debug!("unread request body can not be drained, closing connection");
            self.flags.remove(Flags::KEEP_ALIVE);
        }

        if self.flags.contains(Flags::KEEP_ALIVE) {
            Ok(State::ReadRequestLine)
        } else {
            Ok(State::Closed)
        }
    }

    fn write_error(&mut self, status: StatusCode) {
        let head = format!(
            "HTTP/1.1 {} {}\r\nContent-Length: 0\r\nConnection: close\r\n\r\n",
            status.as_u16(),
            status.canonical_reason().unwrap_or("Error")
        );
        if let Err(e) = self
            .writer
            .write(head.as_bytes())
            .and_then(|_| self.writer.flush())
        {
            log::trace!("failed to write error response; err={e}");
        }
    }
}

fn to_string(line: Bytes) -> Result<ByteString, Error> {
    ByteString::try_from(line).map_err(|_| Error::bad_request("request head is not valid UTF-8"))
}

fn parse_request_line(line: Bytes) -> Result<(Method, ByteString, Version), Error> {
    let mut parts = line.split(|b| *b == b' ');
    let (Some(method), Some(target), Some(version), None) =
        (parts.next(), parts.next(), parts.next(), parts.next())
    else {
        return Err(Error::bad_request("malformed request line"));
    };

    let method = match method {
        b"GET" => Method::GET,
        b"HEAD" => Method::HEAD,
        b"POST" => Method::POST,
        b"PUT" => Method::PUT,
        b"DELETE" => Method::DELETE,
        b"CONNECT" => Method::CONNECT,
        b"OPTIONS" => Method::OPTIONS,
        b"TRACE" => Method::TRACE,
        b"PATCH" => Method::PATCH,
        _ => return Err(Error::bad_request("unknown method")),
    };

    let version = match version {
        b"HTTP/1.1" => Version::HTTP_11,
        b"HTTP/1.0" => Version::HTTP_10,
        [b'H', b'T', b'T', b'P', b'/', major, b'.', minor]
            if major.is_ascii_digit() && minor.is_ascii_digit() =>
        {
            return Err(Error::Client(
                StatusCode::HTTP_VERSION_NOT_SUPPORTED,
                "http version is not supported",
            ))
        }
        _ => return Err(Error::bad_request("malformed http version")),
    };

    if target.is_empty() {
        return Err(Error::bad_request("empty request target"));
    }
    let target = std::str::from_utf8(target)
        .map_err(|_| Error::bad_request("request target is not valid UTF-8"))?;

    Ok((method, ByteString::from(target), version))
}

fn parse_header(line: Bytes) -> Result<(ByteString, ByteString), Error> {
    let line = to_string(line)?;
    let Some((name, value)) = line.split_once(':') else {
        return Err(Error::bad_request("header line without colon"));
    };
    if !is_token(name) {
        return Err(Error::bad_request("invalid header name"));
    }
    let value = value.trim_matches(|c| c == ' ' || c == '\t');
    Ok((ByteString::from(name), ByteString::from(value)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::io::testing::MockStream;

    fn serve(input: &[u8], handlers: &HandlerMap, config: &Config) -> (Result<(), Error>, String) {
        let io = MockStream::chunked(input, 7);
        let result = HttpConnection::new(&io, handlers, config).run();
        assert!(io.closed.get());
        (result, String::from_utf8(io.output()).unwrap())
    }

    fn echo() -> HandlerMap {
        let mut map = HandlerMap::new();
        map.add("/echo", |req: &mut Request<'_, '_>, res: &mut Response<'_, '_>| {
            let body = req.body().read_to_end_limited(1024).unwrap();
            res.write(&body).unwrap();
        })
        .unwrap();
        map
    }

    #[test]
    fn request_line() {
        let (m, t, v) = parse_request_line(Bytes::from_static(b"GET /a?b HTTP/1.1")).unwrap();
        assert_eq!(m, Method::GET);
        assert_eq!(&t[..], "/a?b");
        assert_eq!(v, Version::HTTP_11);

        let status = |line: &'static [u8]| {
            parse_request_line(Bytes::from_static(line))
                .err()
                .and_then(|e| e.status())
        };
        assert_eq!(status(b"GET / HTTP/2.0"), Some(StatusCode::HTTP_VERSION_NOT_SUPPORTED));
        assert_eq!(status(b"GET / HTTP/1.1x"), Some(StatusCode::BAD_REQUEST));
        assert_eq!(status(b"BREW / HTTP/1.1"), Some(StatusCode::BAD_REQUEST));
        assert_eq!(status(b"GET  / HTTP/1.1"), Some(StatusCode::BAD_REQUEST));
        assert_eq!(status(b"GET /"), Some(StatusCode::BAD_REQUEST));
    }

    #[test]
    fn header_line() {
        let (n, v) = parse_header(Bytes::from_static(b"Content-Type: \t text/plain \t")).unwrap();
        assert_eq!(&n[..], "Content-Type");
        assert_eq!(&v[..], "text/plain");

        let (_, v) = parse_header(Bytes::from_static(b"X-Empty:")).unwrap();
        assert_eq!(&v[..], "");

        assert!(parse_header(Bytes::from_static(b"Bad Name: x")).is_err());
        assert!(parse_header(Bytes::from_static(b"Name : x")).is_err());
        assert!(parse_header(Bytes::from_static(b": x")).is_err());
        assert!(parse_header(Bytes::from_static(b"no colon")).is_err());
    }

    #[test]
    fn content_length_body() {
        let (res, out) = serve(
            b"POST /echo HTTP/1.1\r\nHost: a\r\nContent-Length: 5\r\nConnection: close\r\n\r\nhello",
            &echo(),
            &Config::default(),
        );
        res.unwrap();
        assert_eq!(
            out,
            "HTTP/1.1 200 OK\r\nContent-Length: 5\r\nConnection: close\r\n\r\nhello"
        );
    }

    #[test]
    fn chunked_body() {
        let (res, out) = serve(
            b"POST /echo HTTP/1.1\r\nHost: a\r\nTransfer-Encoding: gzip, chunked\r\n\r\n\
              3;ext=1\r\nabc\r\n2\r\nde\r\n0\r\nX-Trailer: 1\r\n\r\n",
            &echo(),
            &Config::default(),
        );
        res.unwrap();
        assert_eq!(out, "HTTP/1.1 200 OK\r\nContent-Length: 5\r\n\r\nabcde");
    }

    #[test]
    fn folded_header() {
        let mut map = HandlerMap::new();
        map.add("/", |req: &mut Request<'_, '_>, res: &mut Response<'_, '_>| {
            let value = req.header("x-folded").unwrap_or("").to_string();
            res.write(value.as_bytes()).unwrap();
        })
        .unwrap();

        let (res, out) = serve(
            b"GET / HTTP/1.0\r\nX-Folded: one\r\n  two\r\n\ttwo-b\r\n\r\n",
            &map,
            &Config::default(),
        );
        res.unwrap();
        assert!(out.ends_with("\r\n\r\none two two-b"));
    }

    #[test]
    fn not_found() {
        let (res, out) = serve(
            b"\r\n\r\nGET /missing HTTP/1.1\r\nHost: a\r\n\r\n",
            &echo(),
            &Config::default(),
        );
        res.unwrap();
        assert_eq!(out, "HTTP/1.1 404 Not Found\r\nContent-Length: 0\r\n\r\n");
    }

    #[test]
    fn client_errors() {
        let check = |input: &[u8], status: &str| {
            let (res, out) = serve(input, &echo(), &Config::default());
            assert!(matches!(res, Err(Error::Client(..))), "{res:?}");
            assert_eq!(
                out,
                format!("HTTP/1.1 {status}\r\nContent-Length: 0\r\nConnection: close\r\n\r\n")
            );
        };

        check(b"GET /echo HTTP/1.1\r\n\r\n", "400 Bad Request");
        check(b"GET /echo HTTP/1.1\r\nHost: a\r\nHost: b\r\n\r\n", "400 Bad Request");
        check(
            b"POST /echo HTTP/1.0\r\nTransfer-Encoding: chunked\r\n\r\n",
            "400 Bad Request",
        );
        check(
            b"POST /echo HTTP/1.1\r\nHost: a\r\nTransfer-Encoding: chunked, gzip\r\n\r\n",
            "400 Bad Request",
        );
        check(
            b"POST /echo HTTP/1.1\r\nHost: a\r\nContent-Length: 1\r\nContent-Length: 2\r\n\r\n",
            "400 Bad Request",
        );
        check(b"GET /echo HTTP/3.0\r\n\r\n", "505 HTTP Version Not Supported");
        check(b" X: y\r\n", "400 Bad Request");
    }

    #[test]
    fn line_limits() {
        let config = Config::default().set_max_line_length(32).set_max_headers(2);

        let mut input = b"GET /".to_vec();
        input.extend_from_slice(&[b'a'; 40]);
        input.extend_from_slice(b" HTTP/1.1\r\n\r\n");
        let (_, out) = serve(&input, &echo(), &config);
        assert!(out.starts_with("HTTP/1.1 414 URI Too Long\r\n"));

        let (_, out) = serve(
            b"GET / HTTP/1.1\r\nHost: a\r\nA: 1\r\nB: 2\r\n\r\n",
            &echo(),
            &config,
        );
        assert!(out.starts_with("HTTP/1.1 431 Request Header Fields Too Large\r\n"));
    }

    #[test]
    fn expect_continue() {
        let (res, out) = serve(
            b"PUT /echo HTTP/1.1\r\nHost: a\r\nExpect: 100-continue\r\nContent-Length: 2\r\n\r\nok",
            &echo(),
            &Config::default(),
        );
        res.unwrap();
        assert_eq!(
            out,
            "HTTP/1.1 100 Continue\r\n\r\nHTTP/1.1 200 OK\r\nContent-Length: 2\r\n\r\nok"
        );

        // no interim response for requests without a handler
        let (res, out) = serve(
            b"PUT /missing HTTP/1.1\r\nHost: a\r\nExpect: 100-continue\r\nContent-Length: 2\r\n\r\n",
            &echo(),
            &Config::default(),
        );
        res.unwrap();
        assert_eq!(
            out,
            "HTTP/1.1 404 Not Found\r\nContent-Length: 0\r\nConnection: close\r\n\r\n"
        );
    }

    #[test]
    fn unread_body_is_drained() {
        let mut map = HandlerMap::new();
        map.add("/ignore", |_: &mut Request<'_, '_>, _: &mut Response<'_, '_>| {})
            .unwrap();

        let (res, out) = serve(
            b"POST /ignore HTTP/1.1\r\nHost: a\r\nContent-Length: 3\r\n\r\nxyz\
              GET /ignore HTTP/1.1\r\nHost: a\r\nConnection: close\r\n\r\n",
            &map,
            &Config::default(),
        );
        res.unwrap();
        assert_eq!(
            out,
            "HTTP/1.1 200 OK\r\nContent-Length: 0\r\n\r\n\
             HTTP/1.1 200 OK\r\nContent-Length: 0\r\nConnection: close\r\n\r\n"
        );
    }

    #[test]
    fn max_requests() {
        let config = Config::default().set_max_requests(1);
        let (res, out) = serve(
            b"GET /echo HTTP/1.1\r\nHost: a\r\n\r\nGET /echo HTTP/1.1\r\nHost: a\r\n\r\n",
            &echo(),
            &config,
        );
        res.unwrap();
        assert_eq!(
            out,
            "HTTP/1.1 200 OK\r\nContent-Length: 0\r\nConnection: close\r\n\r\n"
        );
    }
}
