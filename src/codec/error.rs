use crate::frame::Kind;

#[derive(thiserror::Error, Copy, Clone, Debug, PartialEq, Eq)]
pub enum EncoderError {
    /// DATA payload is larger than the peer's max frame size
    #[error("Frame size exceeded")]
    MaxSizeExceeded,

    /// Frame type is never sent by the server
    #[error("Cannot encode {0:?} frame")]
    Unsupported(Kind),
}
