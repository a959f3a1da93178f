use std::{io, sync::Arc, thread};

use crate::config::{Config, Protocol};
use crate::consts::PREFACE;
use crate::error::Error;
use crate::h1::HttpConnection;
use crate::h2::Http2Connection;
use crate::handler::HandlerMap;
use crate::io::{Acceptor, BufferedReader, StreamSource};

/// Blocking server, one thread per connection.
#[derive(Clone, Debug)]
pub struct Server {
    handlers: Arc<HandlerMap>,
    config: Arc<Config>,
}

impl Server {
    pub fn new(handlers: HandlerMap, config: Config) -> Self {
        Server {
            handlers: Arc::new(handlers),
            config: Arc::new(config),
        }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Drive a single connection to completion.
    ///
    /// The transport is closed when the connection ends, successfully or
    /// not.
    pub fn serve_connection(&self, io: &dyn StreamSource) -> Result<(), Error> {
        if let Err(e) = io.set_timeout(self.config.read_timeout) {
            let _ = io.close();
            return Err(e.into());
        }

        match self.config.protocol {
            Protocol::Http1 => HttpConnection::new(io, &self.handlers, &self.config).run(),
            Protocol::Http2 => Http2Connection::new(io, &self.config).run(),
            Protocol::Auto => {
                let mut reader = BufferedReader::with_capacity(io, self.config.read_buffer_size);
                match sniff_preface(&mut reader) {
                    Ok(true) => {
                        log::trace!("http/2 preface detected");
                        Http2Connection::with_reader(io, reader, &self.config).run()
                    }
                    Ok(false) => {
                        HttpConnection::with_reader(io, reader, &self.handlers, &self.config).run()
                    }
                    Err(e) => {
                        let _ = io.close();
                        Err(e)
                    }
                }
            }
        }
    }

    /// Accept connections until the acceptor fails.
    ///
    /// Transient accept errors are logged and skipped.
    pub fn run<A: Acceptor>(&self, acceptor: A) -> io::Result<()> {
        loop {
            let stream = match acceptor.accept() {
                Ok(stream) => stream,
                Err(e) if is_transient(&e) => {
                    log::warn!("accept failed: {e}");
                    continue;
                }
                Err(e) => {
                    log::error!("acceptor is broken: {e}");
                    return Err(e);
                }
            };

            let srv = self.clone();
            let spawned = thread::Builder::new()
                .name("httpd-conn".to_string())
                .spawn(move || {
                    if let Err(e) = srv.serve_connection(&stream) {
                        log::debug!("connection terminated with error: {e}");
                    }
                });
            if let Err(e) = spawned {
                log::error!("cannot spawn connection thread: {e}");
            }
        }
    }
}

fn is_transient(e: &io::Error) -> bool {
    matches!(
        e.kind(),
        io::ErrorKind::Interrupted
            | io::ErrorKind::WouldBlock
            | io::ErrorKind::ConnectionAborted
            | io::ErrorKind::ConnectionReset
    )
}

/// Checks if buffered input starts with the HTTP/2 connection preface.
///
/// Reads only as much as needed to tell, nothing is consumed.
fn sniff_preface(reader: &mut BufferedReader<'_>) -> Result<bool, Error> {
    loop {
        let buf = reader.buffer();
        let len = buf.len().min(PREFACE.len());
        if buf[..len] != PREFACE[..len] {
            return Ok(false);
        }
        if len == PREFACE.len() {
            return Ok(true);
        }
        if reader.fill()? == 0 {
            return Ok(false);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::io::testing::MockStream;

    fn sniff(input: &[u8], chunk: usize) -> (bool, usize) {
        let io = MockStream::chunked(input, chunk);
        let mut rd = BufferedReader::new(&io);
        let res = sniff_preface(&mut rd).unwrap();
        (res, rd.buffer().len())
    }

    #[test]
    fn preface_detection() {
        assert_eq!(sniff(&PREFACE, 1), (true, 24));
        assert_eq!(sniff(&PREFACE, 7), (true, 24));
        assert_eq!(sniff(b"GET / HTTP/1.1\r\n", 16), (false, 16));
        assert_eq!(sniff(b"PRIX", 1), (false, 4));
        // a prefix of the preface is not enough
        assert_eq!(sniff(b"PRI * HTTP/2", 64), (false, 12));
        assert_eq!(sniff(b"", 1), (false, 0));
    }

    #[test]
    fn auto_protocol() {
        let mut map = HandlerMap::new();
        map.add("/", |_: &mut crate::Request<'_, '_>, res: &mut crate::Response<'_, '_>| {
            res.write(b"hi").unwrap();
        })
        .unwrap();
        let srv = Server::new(map, Config::default());

        let io = MockStream::chunked(b"GET / HTTP/1.0\r\n\r\n", 3);
        srv.serve_connection(&io).unwrap();
        assert_eq!(
            io.output(),
            b"HTTP/1.0 200 OK\r\nContent-Length: 2\r\nConnection: close\r\n\r\nhi"
        );
        assert!(io.closed.get());

        let mut input = PREFACE.to_vec();
        input.extend_from_slice(&[0, 0, 0, 4, 0, 0, 0, 0, 0]);
        let io = MockStream::chunked(&input, 5);
        srv.serve_connection(&io).unwrap();
        let out = io.output();
        // SETTINGS then SETTINGS ACK
        assert_eq!(out[3], 4);
        assert_eq!(&out[out.len() - 9..], &[0, 0, 0, 4, 1, 0, 0, 0, 0]);
    }

    #[test]
    fn forced_protocol() {
        let srv = Server::new(HandlerMap::new(), Config::default().set_protocol(Protocol::Http2));
        let io = MockStream::new(b"GET / HTTP/1.1\r\nHost: a\r\n\r\n");
        assert!(srv.serve_connection(&io).is_err());
        assert!(io.output().is_empty());

        let srv = Server::new(HandlerMap::new(), Config::default().set_protocol(Protocol::Http1));
        let io = MockStream::new(&PREFACE);
        assert!(srv.serve_connection(&io).is_err());
        assert!(io.output().starts_with(b"HTTP/1.1 400 Bad Request\r\n"));
    }
}
