use ntex_bytes::BufMut;

use crate::frame::{Frame, FrameError, Head, Kind, StreamId};

const ACK_FLAG: u8 = 0x1;

pub type Payload = [u8; 8];

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Ping {
    ack: bool,
    payload: Payload,
}

impl Ping {
    pub fn new(payload: Payload) -> Ping {
        Ping {
            ack: false,
            payload,
        }
    }

    /// Response to a received ping, echoes its payload.
    pub fn pong(payload: Payload) -> Ping {
        Ping { ack: true, payload }
    }

    pub fn is_ack(&self) -> bool {
        self.ack
    }

    pub fn payload(&self) -> &Payload {
        &self.payload
    }

    /// Builds a `Ping` frame from a raw frame.
    pub fn load(head: Head, bytes: &[u8]) -> Result<Ping, FrameError> {
        debug_assert_eq!(head.kind(), Kind::Ping);

        // PING is a connection level frame
        if !head.stream_id().is_zero() {
            return Err(FrameError::InvalidStreamId);
        }
        let payload: Payload = bytes.try_into().map_err(|_| FrameError::BadFrameSize)?;

        Ok(Ping {
            payload,
            ack: head.flag() & ACK_FLAG != 0,
        })
    }

    pub fn encode<B: BufMut>(&self, dst: &mut B) {
        log::trace!("encoding PING; ack={}", self.ack);

        let flags = if self.ack { ACK_FLAG } else { 0 };
        Head::new(Kind::Ping, flags, StreamId::zero()).encode(self.payload.len(), dst);
        dst.put_slice(&self.payload);
    }
}

impl From<Ping> for Frame {
    fn from(src: Ping) -> Frame {
        Frame::Ping(src)
    }
}
