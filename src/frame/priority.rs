use ntex_bytes::BufMut;

use crate::frame::{Frame, FrameError, Head, Kind, StreamId};

/// PRIORITY frame.
///
/// Prioritization is advisory; the server validates the frame and otherwise
/// ignores it.
#[derive(Debug, Eq, PartialEq)]
pub struct Priority {
    stream_id: StreamId,
    dependency: StreamDependency,
}

#[derive(Debug, Eq, PartialEq, Clone, Copy)]
pub struct StreamDependency {
    /// The ID of the stream dependency target
    dependency_id: StreamId,

    /// The weight for the stream. The value exposed (and set) here is always
    /// in the range [0, 255], instead of [1, 256] (as defined in section 5.3.2.)
    /// so that the value fits into a `u8`.
    weight: u8,

    /// True if the stream dependency is exclusive.
    is_exclusive: bool,
}

impl Priority {
    pub fn load(head: Head, payload: &[u8]) -> Result<Self, FrameError> {
        if head.stream_id().is_zero() {
            return Err(FrameError::InvalidStreamId);
        }
        if payload.len() != 5 {
            return Err(FrameError::InvalidPayloadLength);
        }

        let dependency = StreamDependency::load(payload)?;
        if dependency.dependency_id() == head.stream_id() {
            return Err(FrameError::InvalidDependencyId);
        }

        Ok(Priority {
            stream_id: head.stream_id(),
            dependency,
        })
    }

    pub fn stream_id(&self) -> StreamId {
        self.stream_id
    }

    pub fn dependency(&self) -> &StreamDependency {
        &self.dependency
    }

    pub fn encode<B: BufMut>(&self, dst: &mut B) {
        log::trace!("encoding PRIORITY; id={:?}", self.stream_id);
        Head::new(Kind::Priority, 0, self.stream_id).encode(5, dst);
        self.dependency.encode(dst);
    }
}

impl From<Priority> for Frame {
    fn from(src: Priority) -> Self {
        Frame::Priority(src)
    }
}

// ===== impl StreamDependency =====

impl StreamDependency {
    pub fn new(dependency_id: StreamId, weight: u8, is_exclusive: bool) -> Self {
        StreamDependency {
            dependency_id,
            weight,
            is_exclusive,
        }
    }

    /// Parse the 5 byte dependency block shared by PRIORITY and HEADERS.
    pub fn load(src: &[u8]) -> Result<Self, FrameError> {
        if src.len() != 5 {
            return Err(FrameError::InvalidPayloadLength);
        }

        // Parse the stream ID and exclusive flag
        let (dependency_id, is_exclusive) = StreamId::parse(&src[..4]);

        Ok(StreamDependency::new(dependency_id, src[4], is_exclusive))
    }

    pub fn dependency_id(&self) -> StreamId {
        self.dependency_id
    }

    pub fn weight(&self) -> u8 {
        self.weight
    }

    pub fn is_exclusive(&self) -> bool {
        self.is_exclusive
    }

    fn encode<B: BufMut>(&self, dst: &mut B) {
        let mut id = u32::from(self.dependency_id);
        if self.is_exclusive {
            id |= 1 << 31;
        }
        dst.put_u32(id);
        dst.put_u8(self.weight);
    }
}

#[cfg(test)]
mod tests {
    use ntex_bytes::BytesMut;

    use super::*;

    #[test]
    fn priority() {
        let head = Head::new(Kind::Priority, 0, 3.into());
        let prio = Priority::load(head, &[0x80, 0, 0, 1, 15]).unwrap();
        assert_eq!(prio.stream_id(), StreamId::from(3));
        assert_eq!(prio.dependency().dependency_id(), StreamId::from(1));
        assert_eq!(prio.dependency().weight(), 15);
        assert!(prio.dependency().is_exclusive());

        let mut buf = BytesMut::new();
        prio.encode(&mut buf);
        assert_eq!(&buf[9..], &[0x80, 0, 0, 1, 15]);
    }

    #[test]
    fn priority_errors() {
        let head = Head::new(Kind::Priority, 0, 3.into());
        assert_eq!(
            Priority::load(head, &[0, 0, 0, 3, 0]),
            Err(FrameError::InvalidDependencyId)
        );
        assert_eq!(
            Priority::load(head, &[0, 0, 0, 1]),
            Err(FrameError::InvalidPayloadLength)
        );
        let head = Head::new(Kind::Priority, 0, StreamId::zero());
        assert_eq!(
            Priority::load(head, &[0, 0, 0, 1, 0]),
            Err(FrameError::InvalidStreamId)
        );
    }
}
