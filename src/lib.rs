//! An embeddable HTTP/1.x and HTTP/2 server protocol engine.
//!
//! This library implements the wire protocols of [HTTP/1.1], HTTP/1.0 and
//! [HTTP/2] (including [HPACK] header decoding) on top of an abstract,
//! blocking byte-stream transport. It is decoupled from sockets, TLS and task
//! scheduling: the transport is anything that implements [`StreamSource`],
//! and requests are answered by anything that implements [`Handler`].
//!
//! # Getting started
//!
//! Add the following to your `Cargo.toml` file:
//!
//! ```toml
//! [dependencies]
//! ntex-httpd = "0.1"
//! ```
//!
//! ```no_run
//! use std::net::TcpListener;
//! use ntex_httpd::{Config, HandlerMap, Request, Response, Server};
//!
//! let mut handlers = HandlerMap::new();
//! handlers
//!     .add("/hello", |_: &mut Request<'_, '_>, res: &mut Response<'_, '_>| {
//!         let _ = res.add_header("content-type", "text/plain");
//!         let _ = res.write(b"hello world");
//!     })
//!     .unwrap();
//!
//! let listener = TcpListener::bind("127.0.0.1:8080").unwrap();
//! Server::new(handlers, Config::default()).run(listener).unwrap();
//! ```
//!
//! # Layout
//!
//! * [`io`] buffered reader and writer over a [`StreamSource`].
//! * [`body`] message framing: content-length, chunked and empty bodies.
//! * [`h1`] the HTTP/1.x connection state machine.
//! * [`hpack`] HPACK decoder, header table and Huffman coding.
//! * [`frame`] HTTP/2 frame types, and [`Codec`] which decodes them.
//! * [`h2`] the HTTP/2 connection state machine.
//!
//! Each connection is driven by a single thread of control. Suspension
//! points are exactly the transport calls; parsing and HPACK decoding happen
//! synchronously in between.
//!
//! [HTTP/1.1]: https://www.rfc-editor.org/rfc/rfc7230
//! [HTTP/2]: https://www.rfc-editor.org/rfc/rfc7540
//! [HPACK]: https://www.rfc-editor.org/rfc/rfc7541
#![deny(rust_2018_idioms)]

macro_rules! proto_err {
    (conn: $($msg:tt)+) => {
        log::debug!("connection error PROTOCOL_ERROR -- {};", format_args!($($msg)+))
    };
    (stream: $($msg:tt)+) => {
        log::debug!("stream error PROTOCOL_ERROR -- {};", format_args!($($msg)+))
    };
}

mod codec;
mod config;
mod consts;
mod error;
mod handler;
mod server;

pub mod body;
pub mod frame;
pub mod h1;
pub mod h2;
pub mod hpack;
pub mod io;

pub use self::codec::{Codec, EncoderError};
pub use self::config::{Config, Protocol};
pub use self::error::Error;
pub use self::h1::{Request, RequestData, Response};
pub use self::handler::{Handler, HandlerMap, Match};
pub use self::io::{Acceptor, BufferedReader, BufferedWriter, StreamSource};
pub use self::server::Server;

pub use ntex_http::{Method, StatusCode, Version};
