//! HTTP/2 server side.
//!
//! Only the connection layer is implemented: the preface and SETTINGS
//! exchange, PING, GOAWAY and header block decoding. Streams opened by the
//! client are refused.
mod connection;

pub use self::connection::{Http2Connection, State};
