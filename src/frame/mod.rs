//! HTTP/2 frame types.
//!
//! Frames are loaded from a 9-byte [`Head`] and the payload that follows it.
//! Loading validates everything that can be checked without connection
//! state; the connection decides how to react to the resulting
//! [`FrameError`].
use std::fmt;

use crate::hpack;

/// Unpacks a big-endian `u32` starting at `offset`.
macro_rules! unpack_octets_4 {
    ($buf:expr, $offset:expr, $tip:ty) => {
        (($buf[$offset] as $tip) << 24)
            | (($buf[$offset + 1] as $tip) << 16)
            | (($buf[$offset + 2] as $tip) << 8)
            | ($buf[$offset + 3] as $tip)
    };
}

mod data;
mod go_away;
mod head;
mod headers;
mod ping;
mod priority;
mod reason;
mod reset;
mod settings;
mod stream_id;
mod util;
mod window_update;

pub use self::data::Data;
pub use self::go_away::GoAway;
pub use self::head::{Head, Kind};
pub use self::headers::{Headers, PseudoHeaders};
pub use self::ping::Ping;
pub use self::priority::{Priority, StreamDependency};
pub use self::reason::Reason;
pub use self::reset::Reset;
pub use self::settings::Settings;
pub use self::stream_id::StreamId;
pub use self::window_update::WindowUpdate;

pub use self::settings::{
    DEFAULT_INITIAL_WINDOW_SIZE, DEFAULT_MAX_FRAME_SIZE, DEFAULT_SETTINGS_HEADER_TABLE_SIZE,
    MAX_INITIAL_WINDOW_SIZE, MAX_MAX_FRAME_SIZE,
};

pub type FrameSize = u32;

/// Length of the frame head
pub const HEADER_LEN: usize = 9;

pub enum Frame {
    Data(Data),
    Headers(Headers),
    Priority(Priority),
    Settings(Settings),
    Ping(Ping),
    GoAway(GoAway),
    WindowUpdate(WindowUpdate),
    Reset(Reset),
}

impl Frame {
    pub fn kind(&self) -> Kind {
        match self {
            Frame::Data(_) => Kind::Data,
            Frame::Headers(_) => Kind::Headers,
            Frame::Priority(_) => Kind::Priority,
            Frame::Settings(_) => Kind::Settings,
            Frame::Ping(_) => Kind::Ping,
            Frame::GoAway(_) => Kind::GoAway,
            Frame::WindowUpdate(_) => Kind::WindowUpdate,
            Frame::Reset(_) => Kind::Reset,
        }
    }
}

impl fmt::Debug for Frame {
    fn fmt(&self, fmt: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Frame::Data(frame) => fmt::Debug::fmt(frame, fmt),
            Frame::Headers(frame) => fmt::Debug::fmt(frame, fmt),
            Frame::Priority(frame) => fmt::Debug::fmt(frame, fmt),
            Frame::Settings(frame) => fmt::Debug::fmt(frame, fmt),
            Frame::Ping(frame) => fmt::Debug::fmt(frame, fmt),
            Frame::GoAway(frame) => fmt::Debug::fmt(frame, fmt),
            Frame::WindowUpdate(frame) => fmt::Debug::fmt(frame, fmt),
            Frame::Reset(frame) => fmt::Debug::fmt(frame, fmt),
        }
    }
}

/// Errors that can occur during parsing an HTTP/2 frame.
#[derive(thiserror::Error, Debug, Copy, Clone, PartialEq, Eq)]
pub enum FrameError {
    /// Frame payload length is not valid for the frame type.
    #[error("Invalid frame size")]
    BadFrameSize,

    /// Frame size exceeded
    #[error("Frame size exceeded")]
    MaxFrameSize,

    /// The padding length was larger than the frame-header-specified
    /// length of the payload.
    #[error("The padding length was larger than the frame-header-specified length of the payload")]
    TooMuchPadding,

    /// An invalid setting value was provided
    #[error("An invalid setting value was provided")]
    InvalidSettingValue,

    /// SETTINGS frame carries flags other than ACK
    #[error("Invalid SETTINGS flags")]
    InvalidSettingsFlags,

    /// An invalid window update value
    #[error("An invalid window update value")]
    InvalidWindowUpdateValue,

    /// The payload length specified by the frame header was not the
    /// value necessary for the specific frame type.
    #[error(
        "The payload length specified by the frame header was not the value necessary for the specific frame type"
    )]
    InvalidPayloadLength,

    /// Received a payload with an ACK settings frame
    #[error("Received a payload with an ACK settings frame")]
    InvalidPayloadAckSettings,

    /// An invalid stream identifier was provided.
    #[error("An invalid stream identifier was provided")]
    InvalidStreamId,

    /// Reserved bit of the stream identifier is set
    #[error("Reserved stream identifier bit is set")]
    ReservedBit,

    /// A request or response is malformed.
    #[error("A request or response is malformed")]
    MalformedMessage,

    /// An invalid stream dependency ID was provided
    #[error("An invalid stream dependency ID was provided")]
    InvalidDependencyId,

    /// An invalid preface
    #[error("An invalid preface")]
    InvalidPreface,

    /// First frame from the client is not SETTINGS
    #[error("SETTINGS frame is expected")]
    ExpectedSettings,

    /// SETTINGS acknowledgement without outstanding SETTINGS
    #[error("Unexpected SETTINGS acknowledgement")]
    UnexpectedSettingsAck,

    /// Unexpected push promise
    #[error("Unexpected push promise")]
    UnexpectedPushPromise,

    /// Frame type is not defined by RFC 7540
    #[error("Unknown frame type {0}")]
    UnknownFrameType(u8),

    /// Header block exceeds the advertised max header list size
    #[error("Header list size exceeded")]
    MaxHeaderListSize,

    /// Continuation related error
    #[error("{0}")]
    Continuation(#[from] ContinuationError),

    /// Failed to perform HPACK decoding
    #[error("{0}")]
    Hpack(#[from] hpack::DecoderError),
}

#[derive(thiserror::Error, Debug, Copy, Clone, PartialEq, Eq)]
pub enum ContinuationError {
    /// Continuation frame is expected
    #[error("Continuation frame is expected")]
    Expected,

    /// Continuation frame is unexpected
    #[error("Continuation frame is unexpected")]
    Unexpected,

    /// Continuation frame's stream id is unexpected
    #[error("Continuation frame's stream id is unexpected")]
    UnknownStreamId,
}

impl FrameError {
    /// Error code sent in GOAWAY for this error.
    pub fn reason(&self) -> Reason {
        match self {
            FrameError::Hpack(_) => Reason::COMPRESSION_ERROR,
            FrameError::BadFrameSize
            | FrameError::MaxFrameSize
            | FrameError::InvalidPayloadLength
            | FrameError::InvalidPayloadAckSettings => Reason::FRAME_SIZE_ERROR,
            _ => Reason::PROTOCOL_ERROR,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unpack_octets() {
        let buf: [u8; 5] = [0xff, 0, 0, 0, 1];
        assert_eq!(1u32, unpack_octets_4!(buf, 1, u32));
    }

    #[test]
    fn error_reasons() {
        assert_eq!(
            FrameError::from(hpack::DecoderError::InvalidTableIndex).reason(),
            Reason::COMPRESSION_ERROR
        );
        assert_eq!(FrameError::BadFrameSize.reason(), Reason::FRAME_SIZE_ERROR);
        assert_eq!(
            FrameError::from(ContinuationError::Expected).reason(),
            Reason::PROTOCOL_ERROR
        );
        assert_eq!(FrameError::UnknownFrameType(0x10).reason(), Reason::PROTOCOL_ERROR);
    }
}
