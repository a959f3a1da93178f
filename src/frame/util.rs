use std::fmt;

use ntex_bytes::Bytes;

use super::FrameError;

/// Strip padding from the given payload.
///
/// It is assumed that the frame had the padded flag set. This means that the
/// first byte is the length of the padding with that many padding bytes
/// following the payload.
///
/// Returns the length of the padding, including the length byte.
pub(super) fn strip_padding(payload: &mut Bytes) -> Result<u8, FrameError> {
    let payload_len = payload.len();
    if payload_len == 0 {
        // If this is the case, the frame is invalid as no padding length can be
        // extracted, even though the frame should be padded.
        return Err(FrameError::TooMuchPadding);
    }

    let pad_len = payload[0] as usize;

    if pad_len >= payload_len {
        // This is invalid: the padding length MUST be less than the
        // total frame size.
        return Err(FrameError::TooMuchPadding);
    }

    let _ = payload.split_to(1);
    payload.truncate(payload_len - pad_len - 1);

    Ok(pad_len as u8)
}

pub(super) fn debug_flags<'a, 'f>(
    fmt: &'a mut fmt::Formatter<'f>,
    bits: u8,
) -> DebugFlags<'a, 'f> {
    let result = write!(fmt, "({bits:#x}");
    DebugFlags {
        fmt,
        result,
        started: false,
    }
}

pub(super) struct DebugFlags<'a, 'f> {
    fmt: &'a mut fmt::Formatter<'f>,
    result: fmt::Result,
    started: bool,
}

impl DebugFlags<'_, '_> {
    pub(super) fn flag_if(mut self, enabled: bool, name: &str) -> Self {
        if enabled {
            self.result = self.result.and_then(|()| {
                let prefix = if self.started {
                    " | "
                } else {
                    self.started = true;
                    ": "
                };

                write!(self.fmt, "{prefix}{name}")
            });
        }
        self
    }

    pub(super) fn finish(self) -> fmt::Result {
        self.result.and_then(|()| write!(self.fmt, ")"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn padding() {
        let mut payload = Bytes::from_static(b"\x02hello\x00\x00");
        assert_eq!(strip_padding(&mut payload), Ok(2));
        assert_eq!(&payload[..], b"hello");

        let mut payload = Bytes::from_static(b"\x00");
        assert_eq!(strip_padding(&mut payload), Ok(0));
        assert!(payload.is_empty());
    }

    #[test]
    fn too_much_padding() {
        let mut payload = Bytes::from_static(b"\x05abc");
        assert_eq!(strip_padding(&mut payload), Err(FrameError::TooMuchPadding));

        let mut payload = Bytes::new();
        assert_eq!(strip_padding(&mut payload), Err(FrameError::TooMuchPadding));
    }
}
