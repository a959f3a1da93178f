use std::io;

use ntex_http::StatusCode;

use crate::frame::FrameError;

/// Errors produced while driving a connection.
///
/// Parsing and transport operations report failures through this type;
/// nothing is retried at the protocol layer.
#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// Operation is not valid in the current state, e.g. writing to a closed
    /// stream or adding headers after they were sent.
    #[error("Invalid state: {0}")]
    InvalidState(&'static str),

    /// Peer closed the connection.
    #[error("Connection closed")]
    Eof,

    /// Transport error, including read timeouts.
    #[error("Io error: {0}")]
    Io(#[from] io::Error),

    /// Malformed request, answered with the given status when possible.
    #[error("Client error ({0}): {1}")]
    Client(StatusCode, &'static str),

    /// A line exceeded the configured maximum length.
    #[error("Line is too long")]
    LineTooLong,

    /// Header name or value is not acceptable.
    #[error("Invalid header: {0}")]
    InvalidHeader(&'static str),

    /// Http/2 protocol error.
    #[error("Protocol error: {0}")]
    Protocol(#[from] FrameError),
}

impl Error {
    /// Status to send back to the peer for this error, if any.
    ///
    /// `LineTooLong` is reported as `431`; the request-line reader maps it to
    /// `414` itself.
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            Error::Client(status, _) => Some(*status),
            Error::LineTooLong => Some(StatusCode::REQUEST_HEADER_FIELDS_TOO_LARGE),
            Error::InvalidHeader(_) => Some(StatusCode::BAD_REQUEST),
            Error::InvalidState(_) => Some(StatusCode::INTERNAL_SERVER_ERROR),
            Error::Eof | Error::Io(_) | Error::Protocol(_) => None,
        }
    }

    pub(crate) fn bad_request(msg: &'static str) -> Self {
        Error::Client(StatusCode::BAD_REQUEST, msg)
    }
}

impl From<Error> for io::Error {
    fn from(err: Error) -> io::Error {
        match err {
            Error::Io(e) => e,
            Error::Eof => io::Error::new(io::ErrorKind::UnexpectedEof, err),
            err => io::Error::new(io::ErrorKind::InvalidData, err),
        }
    }
}
