use ntex_bytes::BytesMut;

use crate::frame;

/// Partially loaded headers frame
#[derive(Debug)]
pub(crate) struct Partial {
    /// Frame without decoded fields
    frame: frame::Headers,

    /// Compressed header block fragments received so far
    buf: BytesMut,
}

impl Partial {
    pub(crate) fn new(frame: frame::Headers, fragment: &[u8]) -> Self {
        let mut buf = BytesMut::with_capacity(fragment.len());
        buf.extend_from_slice(fragment);
        Partial { frame, buf }
    }

    pub(crate) fn stream_id(&self) -> frame::StreamId {
        self.frame.stream_id()
    }

    pub(crate) fn len(&self) -> usize {
        self.buf.len()
    }

    pub(crate) fn extend(&mut self, fragment: &[u8]) {
        self.buf.extend_from_slice(fragment);
    }

    pub(crate) fn into_parts(self) -> (frame::Headers, BytesMut) {
        (self.frame, self.buf)
    }
}
