//! HTTP/1.0 and HTTP/1.1 server side.
mod connection;
mod request;
mod response;

pub use self::connection::{HttpConnection, State};
pub use self::request::{Request, RequestData};
pub use self::response::{BodyWriter, Response};
