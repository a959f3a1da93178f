use ntex_bytes::BufMut;

use super::{FrameError, StreamId, HEADER_LEN};

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct Head {
    kind: Kind,
    flag: u8,
    stream_id: StreamId,
}

#[repr(u8)]
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Kind {
    Data = 0,
    Headers = 1,
    Priority = 2,
    Reset = 3,
    Settings = 4,
    PushPromise = 5,
    Ping = 6,
    GoAway = 7,
    WindowUpdate = 8,
    Continuation = 9,
}

// ===== impl Head =====

impl Head {
    pub fn new(kind: Kind, flag: u8, stream_id: StreamId) -> Head {
        Head {
            kind,
            flag,
            stream_id,
        }
    }

    /// Parse an HTTP/2 frame header, returns the head and the payload length.
    pub fn parse(header: &[u8]) -> Result<(Head, usize), FrameError> {
        if header.len() < HEADER_LEN {
            return Err(FrameError::BadFrameSize);
        }

        let len = ((header[0] as usize) << 16) | ((header[1] as usize) << 8) | header[2] as usize;
        let kind = Kind::new(header[3]).ok_or(FrameError::UnknownFrameType(header[3]))?;
        let (stream_id, reserved) = StreamId::parse(&header[5..HEADER_LEN]);
        if reserved {
            return Err(FrameError::ReservedBit);
        }

        let head = Head {
            kind,
            stream_id,
            flag: header[4],
        };
        Ok((head, len))
    }

    pub fn stream_id(&self) -> StreamId {
        self.stream_id
    }

    pub fn kind(&self) -> Kind {
        self.kind
    }

    pub fn flag(&self) -> u8 {
        self.flag
    }

    pub fn encode<T: BufMut>(&self, payload_len: usize, dst: &mut T) {
        debug_assert!(payload_len < (1 << 24));
        dst.put_u8((payload_len >> 16) as u8);
        dst.put_u8((payload_len >> 8) as u8);
        dst.put_u8(payload_len as u8);
        dst.put_u8(self.kind as u8);
        dst.put_u8(self.flag);
        dst.put_u32(self.stream_id.into());
    }
}

// ===== impl Kind =====

impl Kind {
    /// Frame type for the given octet, `None` for extension types.
    pub fn new(byte: u8) -> Option<Kind> {
        Some(match byte {
            0 => Kind::Data,
            1 => Kind::Headers,
            2 => Kind::Priority,
            3 => Kind::Reset,
            4 => Kind::Settings,
            5 => Kind::PushPromise,
            6 => Kind::Ping,
            7 => Kind::GoAway,
            8 => Kind::WindowUpdate,
            9 => Kind::Continuation,
            _ => return None,
        })
    }
}

#[cfg(test)]
mod tests {
    use ntex_bytes::BytesMut;

    use super::*;

    #[test]
    fn parse_head() {
        let (head, len) = Head::parse(&[0, 0x01, 0x02, 1, 0x5, 0, 0, 0, 3]).unwrap();
        assert_eq!(len, 258);
        assert_eq!(head.kind(), Kind::Headers);
        assert_eq!(head.flag(), 0x5);
        assert_eq!(head.stream_id(), StreamId::from(3));

        let mut buf = BytesMut::new();
        head.encode(len, &mut buf);
        assert_eq!(&buf[..], &[0, 0x01, 0x02, 1, 0x5, 0, 0, 0, 3]);
    }

    #[test]
    fn parse_errors() {
        assert_eq!(
            Head::parse(&[0, 0, 0, 0x0a, 0, 0, 0, 0, 1]),
            Err(FrameError::UnknownFrameType(0x0a))
        );
        assert_eq!(
            Head::parse(&[0, 0, 0, 0, 0, 0x80, 0, 0, 1]),
            Err(FrameError::ReservedBit)
        );
        assert_eq!(Head::parse(&[0, 0, 0]), Err(FrameError::BadFrameSize));
    }
}
