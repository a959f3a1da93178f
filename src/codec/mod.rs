use std::cell::RefCell;

use ntex_bytes::{Bytes, BytesMut};
use ntex_codec::{Decoder, Encoder};

mod error;
mod partial;

pub use self::error::EncoderError;

use self::partial::Partial;
use crate::consts::DEFAULT_SETTINGS_MAX_HEADER_LIST_SIZE;
use crate::frame::{self, Frame, FrameError, Head, Kind};
use crate::hpack;

/// HTTP/2 frame codec.
///
/// Decodes frames received from the client, reassembling header blocks split
/// over CONTINUATION frames, and encodes the control frames the server sends.
#[derive(Debug)]
pub struct Codec(RefCell<CodecInner>);

#[derive(Debug)]
struct CodecInner {
    // encoder state
    encoder_max_frame_size: frame::FrameSize, // Max frame size, this is specified by the peer

    // decoder state
    decoder_max_frame_size: usize,
    decoder_hpack: hpack::Decoder,
    decoder_max_header_list_size: usize,
    partial: Option<Partial>, // Partially loaded headers frame
}

impl Default for Codec {
    #[inline]
    /// Returns a new `Codec` with the default max frame size
    fn default() -> Self {
        Codec(RefCell::new(CodecInner {
            decoder_max_frame_size: frame::DEFAULT_MAX_FRAME_SIZE as usize,
            decoder_hpack: hpack::Decoder::new(frame::DEFAULT_SETTINGS_HEADER_TABLE_SIZE),
            decoder_max_header_list_size: DEFAULT_SETTINGS_MAX_HEADER_LIST_SIZE as usize,
            partial: None,

            encoder_max_frame_size: frame::DEFAULT_MAX_FRAME_SIZE,
        }))
    }
}

impl Codec {
    /// Updates the max received frame size.
    ///
    /// The change takes effect the next time a frame is decoded.
    #[inline]
    pub fn set_recv_frame_size(&self, val: usize) {
        assert!(
            frame::DEFAULT_MAX_FRAME_SIZE as usize <= val
                && val <= frame::MAX_MAX_FRAME_SIZE as usize
        );
        self.0.borrow_mut().decoder_max_frame_size = val;
    }

    /// Set the max header list size that can be received.
    pub fn set_recv_header_list_size(&self, val: usize) {
        self.0.borrow_mut().decoder_max_header_list_size = val;
    }

    /// Set the HPACK dynamic table limit advertised to the peer.
    pub fn set_recv_header_table_size(&self, val: usize) {
        self.0.borrow_mut().decoder_hpack.queue_size_update(val);
    }

    /// Set the peer's max frame size.
    pub fn set_send_frame_size(&self, val: usize) {
        assert!(val <= frame::MAX_MAX_FRAME_SIZE as usize);
        self.0.borrow_mut().encoder_max_frame_size = val as frame::FrameSize;
    }

    /// Returns true while a header block waits for CONTINUATION frames.
    pub fn is_partial(&self) -> bool {
        self.0.borrow().partial.is_some()
    }

    /// Parse a frame head and check the payload length against the max
    /// received frame size.
    pub fn decode_head(&self, src: &[u8]) -> Result<(Head, usize), FrameError> {
        let (head, len) = frame::Head::parse(src).map_err(|e| {
            proto_err!(conn: "failed to parse frame head; err={:?}", e);
            e
        })?;

        if len > self.0.borrow().decoder_max_frame_size {
            proto_err!(conn: "frame size exceeded; len={}", len);
            return Err(FrameError::MaxFrameSize);
        }
        Ok((head, len))
    }

    /// Decode the payload of a frame.
    ///
    /// Returns `Ok(None)` for header blocks that are continued in following
    /// CONTINUATION frames.
    pub fn decode_frame(&self, head: Head, payload: Bytes) -> Result<Option<Frame>, FrameError> {
        let mut inner = self.0.borrow_mut();
        let kind = head.kind();

        if inner.partial.is_some() && kind != Kind::Continuation {
            proto_err!(conn: "expected CONTINUATION, got {:?}", kind);
            return Err(frame::ContinuationError::Expected.into());
        }

        let frame = match kind {
            Kind::Settings => frame::Settings::load(head, &payload)
                .map_err(|e| {
                    proto_err!(conn: "failed to load SETTINGS frame; err={:?}", e);
                    e
                })?
                .into(),
            Kind::Ping => frame::Ping::load(head, &payload)
                .map_err(|e| {
                    proto_err!(conn: "failed to load PING frame; err={:?}", e);
                    e
                })?
                .into(),
            Kind::WindowUpdate => frame::WindowUpdate::load(head, &payload)
                .map_err(|e| {
                    proto_err!(conn: "failed to load WINDOW_UPDATE frame; err={:?}", e);
                    e
                })?
                .into(),
            Kind::Data => frame::Data::load(head, payload)
                .map_err(|e| {
                    proto_err!(conn: "failed to load DATA frame; err={:?}", e);
                    e
                })?
                .into(),
            Kind::Reset => frame::Reset::load(head, &payload)
                .map_err(|e| {
                    proto_err!(conn: "failed to load RESET frame; err={:?}", e);
                    e
                })?
                .into(),
            Kind::GoAway => frame::GoAway::load(head, &payload)
                .map_err(|e| {
                    proto_err!(conn: "failed to load GO_AWAY frame; err={:?}", e);
                    e
                })?
                .into(),
            Kind::Priority => frame::Priority::load(head, &payload)
                .map_err(|e| {
                    proto_err!(conn: "failed to load PRIORITY frame; err={:?}", e);
                    e
                })?
                .into(),
            Kind::PushPromise => {
                proto_err!(conn: "received PUSH_PROMISE from client");
                return Err(FrameError::UnexpectedPushPromise);
            }
            Kind::Headers => {
                let mut payload = payload;
                let mut frame = frame::Headers::load(head, &mut payload).map_err(|e| {
                    proto_err!(conn: "failed to load HEADERS frame; err={:?}", e);
                    e
                })?;

                if frame.is_end_headers() {
                    inner.load_hpack(&mut frame, &payload)?;
                    frame.into()
                } else {
                    inner.check_block_size(payload.len())?;
                    log::trace!("loaded partial header block");
                    // Defer returning the frame
                    inner.partial = Some(Partial::new(frame, &payload));
                    return Ok(None);
                }
            }
            Kind::Continuation => {
                let is_end_headers = (head.flag() & 0x4) == 0x4;

                let mut partial = inner.partial.take().ok_or_else(|| {
                    proto_err!(conn: "received unexpected CONTINUATION frame");
                    FrameError::from(frame::ContinuationError::Unexpected)
                })?;

                // The stream identifiers must match
                if partial.stream_id() != head.stream_id() {
                    proto_err!(conn: "CONTINUATION frame stream ID does not match previous frame stream ID");
                    return Err(frame::ContinuationError::UnknownStreamId.into());
                }

                inner.check_block_size(partial.len() + payload.len())?;
                partial.extend(&payload);

                if is_end_headers {
                    let (mut frame, block) = partial.into_parts();
                    frame.set_end_headers();
                    inner.load_hpack(&mut frame, &block)?;
                    frame.into()
                } else {
                    inner.partial = Some(partial);
                    return Ok(None);
                }
            }
        };

        Ok(Some(frame))
    }
}

impl CodecInner {
    fn load_hpack(&mut self, frame: &mut frame::Headers, block: &[u8]) -> Result<(), FrameError> {
        frame
            .load_hpack(block, self.decoder_max_header_list_size, &mut self.decoder_hpack)
            .map_err(|e| {
                proto_err!(conn: "failed HPACK decoding; err={:?}", e);
                e
            })
    }

    fn check_block_size(&self, size: usize) -> Result<(), FrameError> {
        if size > self.decoder_max_header_list_size {
            proto_err!(conn: "header block size over limit; size={}", size);
            Err(FrameError::MaxHeaderListSize)
        } else {
            Ok(())
        }
    }
}

impl Decoder for Codec {
    type Item = Frame;
    type Error = FrameError;

    /// Decodes a frame.
    ///
    /// CONTINUATION frames are consumed as long as complete frames are
    /// buffered, `Ok(None)` always means more input is needed.
    fn decode(&self, src: &mut BytesMut) -> Result<Option<Frame>, FrameError> {
        loop {
            if src.len() < frame::HEADER_LEN {
                return Ok(None);
            }
            log::trace!("decoding frame from {}B", src.len());

            let (head, len) = self.decode_head(&src[..frame::HEADER_LEN])?;
            if src.len() < frame::HEADER_LEN + len {
                src.reserve(frame::HEADER_LEN + len - src.len());
                return Ok(None);
            }

            let _ = src.split_to(frame::HEADER_LEN);
            let payload = src.split_to(len).freeze();
            if let Some(frame) = self.decode_frame(head, payload)? {
                return Ok(Some(frame));
            }
        }
    }
}

impl Encoder for Codec {
    type Item = Frame;
    type Error = EncoderError;

    fn encode(&self, item: Frame, buf: &mut BytesMut) -> Result<(), EncoderError> {
        let inner = self.0.borrow();

        match item {
            Frame::Data(v) => {
                // Ensure that the payload is not greater than the max frame.
                let len = v.payload().len();
                if len > inner.encoder_max_frame_size as usize {
                    return Err(EncoderError::MaxSizeExceeded);
                }
                v.encode(buf);
            }
            Frame::Settings(v) => v.encode(buf),
            Frame::GoAway(v) => v.encode(buf),
            Frame::Ping(v) => v.encode(buf),
            Frame::WindowUpdate(v) => v.encode(buf),
            Frame::Priority(v) => v.encode(buf),
            Frame::Reset(v) => v.encode(buf),
            Frame::Headers(_) => return Err(EncoderError::Unsupported(Kind::Headers)),
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::frame::{Reason, StreamId};

    fn frame(kind: u8, flag: u8, id: u32, payload: &[u8]) -> Vec<u8> {
        let mut buf = BytesMut::new();
        Head::new(Kind::new(kind).unwrap(), flag, StreamId::from(id)).encode(payload.len(), &mut buf);
        buf.extend_from_slice(payload);
        buf.to_vec()
    }

    #[test]
    fn decode_incomplete() {
        let codec = Codec::default();
        let data = frame(6, 0, 0, b"12345678");

        let mut buf = BytesMut::new();
        buf.extend_from_slice(&data[..5]);
        assert!(codec.decode(&mut buf).unwrap().is_none());
        buf.extend_from_slice(&data[5..12]);
        assert!(codec.decode(&mut buf).unwrap().is_none());
        buf.extend_from_slice(&data[12..]);
        match codec.decode(&mut buf).unwrap() {
            Some(Frame::Ping(ping)) => assert_eq!(ping.payload(), b"12345678"),
            frm => panic!("unexpected frame {frm:?}"),
        }
        assert!(buf.is_empty());
    }

    #[test]
    fn continuation() {
        let codec = Codec::default();

        let mut buf = BytesMut::new();
        buf.extend_from_slice(&frame(1, 0x1, 1, &[0x82, 0x86]));
        buf.extend_from_slice(&frame(9, 0, 1, &[0x84]));
        buf.extend_from_slice(&frame(9, 0x4, 1, &[0x41, 0x01, b'a']));

        match codec.decode(&mut buf).unwrap() {
            Some(Frame::Headers(hdrs)) => {
                assert!(hdrs.is_end_headers());
                assert!(hdrs.is_end_stream());
                assert!(!hdrs.is_malformed());
                assert_eq!(hdrs.pseudo().authority.as_deref(), Some(&b"a"[..]));
            }
            frm => panic!("unexpected frame {frm:?}"),
        }
        assert!(!codec.is_partial());
    }

    #[test]
    fn continuation_errors() {
        let codec = Codec::default();
        let mut buf = BytesMut::new();
        buf.extend_from_slice(&frame(9, 0x4, 1, &[0x84]));
        assert_eq!(
            codec.decode(&mut buf).unwrap_err(),
            FrameError::Continuation(frame::ContinuationError::Unexpected)
        );

        let codec = Codec::default();
        let mut buf = BytesMut::new();
        buf.extend_from_slice(&frame(1, 0, 1, &[0x82]));
        buf.extend_from_slice(&frame(6, 0, 0, b"12345678"));
        assert_eq!(
            codec.decode(&mut buf).unwrap_err(),
            FrameError::Continuation(frame::ContinuationError::Expected)
        );

        let codec = Codec::default();
        let mut buf = BytesMut::new();
        buf.extend_from_slice(&frame(1, 0, 1, &[0x82]));
        buf.extend_from_slice(&frame(9, 0x4, 3, &[0x84]));
        assert_eq!(
            codec.decode(&mut buf).unwrap_err(),
            FrameError::Continuation(frame::ContinuationError::UnknownStreamId)
        );
    }

    #[test]
    fn header_block_limit() {
        let codec = Codec::default();
        codec.set_recv_header_list_size(16);

        let mut buf = BytesMut::new();
        buf.extend_from_slice(&frame(1, 0, 1, &[0; 10]));
        buf.extend_from_slice(&frame(9, 0, 1, &[0; 10]));
        assert_eq!(
            codec.decode(&mut buf).unwrap_err(),
            FrameError::MaxHeaderListSize
        );
    }

    #[test]
    fn frame_size_and_type() {
        let codec = Codec::default();
        let mut buf = BytesMut::new();
        buf.extend_from_slice(&[0, 0x40, 0x01, 0, 0, 0, 0, 0, 1]);
        assert_eq!(codec.decode(&mut buf).unwrap_err(), FrameError::MaxFrameSize);

        let mut buf = BytesMut::new();
        buf.extend_from_slice(&frame(5, 0x4, 1, &[0, 0, 0, 2]));
        assert_eq!(
            codec.decode(&mut buf).unwrap_err(),
            FrameError::UnexpectedPushPromise
        );

        let mut buf = BytesMut::new();
        buf.extend_from_slice(&[0, 0, 0, 0x20, 0, 0, 0, 0, 0]);
        assert_eq!(
            codec.decode(&mut buf).unwrap_err(),
            FrameError::UnknownFrameType(0x20)
        );
    }

    #[test]
    fn encode_frames() {
        let codec = Codec::default();
        let mut buf = BytesMut::new();
        codec
            .encode(frame::GoAway::new(Reason::NO_ERROR).into(), &mut buf)
            .unwrap();
        codec
            .encode(frame::Reset::new(1.into(), Reason::CANCEL).into(), &mut buf)
            .unwrap();
        assert_eq!(buf.len(), 17 + 13);

        let data = frame::Data::new(1.into(), Bytes::from(vec![0u8; 16_385]));
        assert_eq!(
            codec.encode(data.into(), &mut buf),
            Err(EncoderError::MaxSizeExceeded)
        );
    }
}
