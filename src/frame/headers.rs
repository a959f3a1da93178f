use std::fmt;

use ntex_bytes::Bytes;

use crate::hpack;

use super::priority::StreamDependency;
use super::{util, Frame, FrameError, Head, StreamId};

/// Header frame
///
/// Only requests are ever received, so the frame is decode-only.
#[derive(Clone)]
pub struct Headers {
    /// The ID of the stream with which this frame is associated.
    stream_id: StreamId,

    /// Priority block, if the PRIORITY flag was set
    stream_dep: Option<StreamDependency>,

    /// The decoded header fields
    header_block: HeaderBlock,

    /// The associated flags
    flags: HeadersFlag,
}

#[derive(Copy, Clone, Eq, PartialEq)]
pub struct HeadersFlag(u8);

/// Request pseudo-header fields.
#[derive(Clone, Debug, Default)]
pub struct PseudoHeaders {
    pub method: Option<Bytes>,
    pub scheme: Option<Bytes>,
    pub authority: Option<Bytes>,
    pub path: Option<Bytes>,
}

#[derive(Clone, Debug, Default)]
struct HeaderBlock {
    /// Regular fields, in arrival order
    fields: Vec<hpack::Header>,

    pseudo: PseudoHeaders,

    /// Block violates HTTP/2 message rules; a stream error
    malformed: bool,

    /// Decoded size exceeds the advertised header list size
    over_size: bool,
}

const END_STREAM: u8 = 0x1;
const END_HEADERS: u8 = 0x4;
const PADDED: u8 = 0x8;
const PRIORITY: u8 = 0x20;
const ALL: u8 = END_STREAM | END_HEADERS | PADDED | PRIORITY;

// ===== impl Headers =====

impl Headers {
    /// Loads the header frame but doesn't actually do HPACK decoding.
    ///
    /// Padding and the priority block are stripped from `src`, what remains
    /// is the first header block fragment. HPACK decoding is done in the
    /// `load_hpack` step once the block is complete.
    pub fn load(head: Head, src: &mut Bytes) -> Result<Self, FrameError> {
        let flags = HeadersFlag::load(head.flag());

        if head.stream_id().is_zero() {
            return Err(FrameError::InvalidStreamId);
        }

        if flags.is_padded() {
            util::strip_padding(src)?;
        }

        let stream_dep = if flags.is_priority() {
            if src.len() < 5 {
                return Err(FrameError::MalformedMessage);
            }
            let dep = StreamDependency::load(&src[..5])?;
            if dep.dependency_id() == head.stream_id() {
                return Err(FrameError::InvalidDependencyId);
            }
            let _ = src.split_to(5);
            Some(dep)
        } else {
            None
        };

        Ok(Headers {
            flags,
            stream_dep,
            stream_id: head.stream_id(),
            header_block: HeaderBlock::default(),
        })
    }

    /// Decode a complete header block.
    ///
    /// Decoding always runs to the end of the block since the HPACK state is
    /// shared by the whole connection. Message level problems only mark the
    /// frame as malformed or over-sized.
    pub fn load_hpack(
        &mut self,
        src: &[u8],
        max_header_list_size: usize,
        decoder: &mut hpack::Decoder,
    ) -> Result<(), FrameError> {
        self.header_block.load(src, max_header_list_size, decoder)
    }

    pub fn stream_id(&self) -> StreamId {
        self.stream_id
    }

    pub fn stream_dep(&self) -> Option<&StreamDependency> {
        self.stream_dep.as_ref()
    }

    pub fn is_end_headers(&self) -> bool {
        self.flags.is_end_headers()
    }

    pub fn set_end_headers(&mut self) {
        self.flags.set_end_headers();
    }

    pub fn is_end_stream(&self) -> bool {
        self.flags.is_end_stream()
    }

    pub fn is_malformed(&self) -> bool {
        self.header_block.malformed
    }

    pub fn is_over_size(&self) -> bool {
        self.header_block.over_size
    }

    pub fn pseudo(&self) -> &PseudoHeaders {
        &self.header_block.pseudo
    }

    pub fn fields(&self) -> &[hpack::Header] {
        &self.header_block.fields
    }

    pub fn into_parts(self) -> (PseudoHeaders, Vec<hpack::Header>) {
        (self.header_block.pseudo, self.header_block.fields)
    }
}

impl From<Headers> for Frame {
    fn from(src: Headers) -> Self {
        Frame::Headers(src)
    }
}

impl fmt::Debug for Headers {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut builder = f.debug_struct("Headers");
        builder
            .field("stream_id", &self.stream_id)
            .field("flags", &self.flags)
            .field("pseudo", &self.header_block.pseudo);

        if let Some(ref dep) = self.stream_dep {
            builder.field("stream_dep", dep);
        }

        // `fields` purposefully not included
        builder.finish()
    }
}

// ===== impl HeadersFlag =====

impl HeadersFlag {
    pub fn load(bits: u8) -> HeadersFlag {
        HeadersFlag(bits & ALL)
    }

    pub fn is_end_stream(&self) -> bool {
        self.0 & END_STREAM == END_STREAM
    }

    pub fn is_end_headers(&self) -> bool {
        self.0 & END_HEADERS == END_HEADERS
    }

    pub fn set_end_headers(&mut self) {
        self.0 |= END_HEADERS;
    }

    pub fn is_padded(&self) -> bool {
        self.0 & PADDED == PADDED
    }

    pub fn is_priority(&self) -> bool {
        self.0 & PRIORITY == PRIORITY
    }
}

impl From<HeadersFlag> for u8 {
    fn from(src: HeadersFlag) -> u8 {
        src.0
    }
}

impl fmt::Debug for HeadersFlag {
    fn fmt(&self, fmt: &mut fmt::Formatter<'_>) -> fmt::Result {
        util::debug_flags(fmt, self.0)
            .flag_if(self.is_end_headers(), "END_HEADERS")
            .flag_if(self.is_end_stream(), "END_STREAM")
            .flag_if(self.is_padded(), "PADDED")
            .flag_if(self.is_priority(), "PRIORITY")
            .finish()
    }
}

// ===== HeaderBlock =====

/// Fields that are meaningful only for a single HTTP/1.x hop.
const CONNECTION_HEADERS: [&[u8]; 5] = [
    b"connection",
    b"transfer-encoding",
    b"upgrade",
    b"keep-alive",
    b"proxy-connection",
];

impl HeaderBlock {
    fn load(
        &mut self,
        src: &[u8],
        max_header_list_size: usize,
        decoder: &mut hpack::Decoder,
    ) -> Result<(), FrameError> {
        let mut reg = false;
        let mut malformed = false;
        let mut size = 0;

        let pseudo = &mut self.pseudo;
        let fields = &mut self.fields;
        let over_size = &mut self.over_size;

        let res = decoder.decode(src, |header| {
            size += header.len();
            if size > max_header_list_size {
                if !*over_size {
                    log::trace!("load_hpack; header list size exceeded; size={size}");
                    *over_size = true;
                    fields.clear();
                }
                return;
            }

            if header.name.iter().any(|b| b.is_ascii_uppercase()) {
                log::trace!("load_hpack; uppercase header name; name={:?}", header.name);
                malformed = true;
                return;
            }

            if header.is_pseudo() {
                let value = header.value;
                let slot = match &header.name[..] {
                    b":method" => &mut pseudo.method,
                    b":scheme" => &mut pseudo.scheme,
                    b":authority" => &mut pseudo.authority,
                    b":path" => &mut pseudo.path,
                    _ => {
                        log::trace!("load_hpack; unknown pseudo header; name={:?}", header.name);
                        malformed = true;
                        return;
                    }
                };
                if reg {
                    log::trace!("load_hpack; header malformed -- pseudo not at head of block");
                    malformed = true;
                } else if slot.is_some() {
                    log::trace!("load_hpack; header malformed -- repeated pseudo");
                    malformed = true;
                } else {
                    *slot = Some(value);
                }
                return;
            }

            // Connection level header fields are not supported in HTTP/2
            if CONNECTION_HEADERS.iter().any(|name| *name == &header.name[..]) {
                log::trace!("load_hpack; connection level header");
                malformed = true;
            } else if &header.name[..] == b"te" && &header.value[..] != b"trailers" {
                log::trace!("load_hpack; TE header not set to trailers; val={:?}", header.value);
                malformed = true;
            } else {
                reg = true;
                fields.push(header);
            }
        });

        if let Err(e) = res {
            log::trace!("hpack decoding error; err={e:?}");
            return Err(e.into());
        }

        if !self.over_size {
            // :path may be omitted by CONNECT only
            let is_connect = self.pseudo.method.as_deref() == Some(&b"CONNECT"[..]);
            if self.pseudo.method.is_none()
                || (!is_connect && (self.pseudo.scheme.is_none() || self.pseudo.path.is_none()))
            {
                log::trace!("load_hpack; missing required pseudo header");
                malformed = true;
            }
            if matches!(self.pseudo.path.as_deref(), Some(b"")) {
                log::trace!("load_hpack; empty :path");
                malformed = true;
            }
        }

        if malformed {
            proto_err!(stream: "malformed header block");
            self.malformed = true;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::frame::Kind;

    fn headers(flag: u8) -> Headers {
        let mut src = Bytes::new();
        Headers::load(Head::new(Kind::Headers, flag, 1.into()), &mut src).unwrap()
    }

    // literal without indexing, literal name
    fn field(block: &mut Vec<u8>, name: &str, value: &str) {
        block.push(0);
        block.push(name.len() as u8);
        block.extend_from_slice(name.as_bytes());
        block.push(value.len() as u8);
        block.extend_from_slice(value.as_bytes());
    }

    fn request_block() -> Vec<u8> {
        // :method GET, :scheme http, :path /
        vec![0x82, 0x86, 0x84]
    }

    #[test]
    fn strip_padding_and_priority() {
        let head = Head::new(Kind::Headers, PADDED | PRIORITY | END_HEADERS, 3.into());
        let mut src = Bytes::from_static(b"\x02\x00\x00\x00\x01\x10\x82\x86\x84\x00\x00");
        let hdrs = Headers::load(head, &mut src).unwrap();
        assert_eq!(&src[..], b"\x82\x86\x84");
        assert!(hdrs.is_end_headers());
        assert!(!hdrs.is_end_stream());
        assert_eq!(hdrs.stream_dep().unwrap().weight(), 0x10);
    }

    #[test]
    fn load_errors() {
        let head = Head::new(Kind::Headers, 0, StreamId::zero());
        assert_eq!(
            Headers::load(head, &mut Bytes::new()).err(),
            Some(FrameError::InvalidStreamId)
        );

        let head = Head::new(Kind::Headers, PRIORITY, 3.into());
        let mut src = Bytes::from_static(b"\x00\x00\x00\x03\x10");
        assert_eq!(
            Headers::load(head, &mut src).err(),
            Some(FrameError::InvalidDependencyId)
        );

        let head = Head::new(Kind::Headers, PADDED, 3.into());
        let mut src = Bytes::from_static(b"\x05\x82");
        assert_eq!(
            Headers::load(head, &mut src).err(),
            Some(FrameError::TooMuchPadding)
        );
    }

    #[test]
    fn decode_request() {
        let mut block = request_block();
        field(&mut block, "user-agent", "test");
        field(&mut block, "te", "trailers");

        let mut decoder = hpack::Decoder::default();
        let mut hdrs = headers(END_HEADERS);
        hdrs.load_hpack(&block, 16 * 1024, &mut decoder).unwrap();

        assert!(!hdrs.is_malformed());
        assert!(!hdrs.is_over_size());
        assert_eq!(hdrs.pseudo().method.as_deref(), Some(&b"GET"[..]));
        assert_eq!(hdrs.pseudo().path.as_deref(), Some(&b"/"[..]));
        assert_eq!(hdrs.fields().len(), 2);
        assert_eq!(&hdrs.fields()[0].name[..], b"user-agent");
    }

    #[test]
    fn malformed_blocks() {
        let check = |block: Vec<u8>| {
            let mut decoder = hpack::Decoder::default();
            let mut hdrs = headers(END_HEADERS);
            hdrs.load_hpack(&block, 16 * 1024, &mut decoder).unwrap();
            hdrs.is_malformed()
        };

        // pseudo after regular
        let mut block = vec![0x82, 0x86];
        field(&mut block, "accept", "*/*");
        block.push(0x84);
        assert!(check(block));

        // repeated pseudo
        let mut block = request_block();
        block.push(0x82);
        assert!(check(block));

        // unknown pseudo
        let mut block = request_block();
        field(&mut block, ":status", "200");
        assert!(check(block));

        // connection specific
        let mut block = request_block();
        field(&mut block, "connection", "close");
        assert!(check(block));

        // te other than trailers
        let mut block = request_block();
        field(&mut block, "te", "gzip");
        assert!(check(block));

        // uppercase
        let mut block = request_block();
        field(&mut block, "Accept", "*/*");
        assert!(check(block));

        // missing :path
        assert!(check(vec![0x82, 0x86]));
    }

    #[test]
    fn over_size() {
        let mut block = request_block();
        field(&mut block, "x-large", &"a".repeat(100));

        let mut decoder = hpack::Decoder::default();
        let mut hdrs = headers(END_HEADERS);
        hdrs.load_hpack(&block, 128, &mut decoder).unwrap();
        assert!(hdrs.is_over_size());
        assert!(hdrs.fields().is_empty());
    }

    #[test]
    fn compression_error() {
        let mut decoder = hpack::Decoder::default();
        let mut hdrs = headers(END_HEADERS);
        assert_eq!(
            hdrs.load_hpack(&[0x80], 1024, &mut decoder),
            Err(FrameError::Hpack(hpack::DecoderError::InvalidTableIndex))
        );
    }
}
