use ntex_bytes::{ByteString, BytesMut};
use ntex_codec::Encoder;
use ntex_http::{Method, Version};

use crate::codec::Codec;
use crate::config::Config;
use crate::consts::PREFACE;
use crate::error::Error;
use crate::frame::{self, Frame, FrameError, GoAway, Headers, Ping, Reason, Reset, Settings, StreamId};
use crate::h1::RequestData;
use crate::io::{BufferedReader, BufferedWriter, StreamSource};

/// Connection state.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum State {
    CheckPreface,
    SendPrefaceAndSettings,
    AwaitClientSettings,
    Open,
    Closed,
}

/// HTTP/2 server connection.
///
/// Connection level frames are handled, header blocks are decoded to keep
/// the HPACK context in sync. Request streams are refused with
/// `HTTP_1_1_REQUIRED`.
pub struct Http2Connection<'s, 'c> {
    reader: BufferedReader<'s>,
    writer: BufferedWriter<'s>,
    codec: Codec,
    config: &'c Config,
    state: State,
    last_stream_id: StreamId,
    // our SETTINGS frames not yet acknowledged
    pending_acks: usize,
    request: RequestData,
}

impl<'s, 'c> Http2Connection<'s, 'c> {
    pub fn new(io: &'s dyn StreamSource, config: &'c Config) -> Self {
        let reader = BufferedReader::with_capacity(io, config.read_buffer_size);
        Http2Connection::with_reader(io, reader, config)
    }

    /// Create a connection over a reader which may already hold the preface.
    pub(crate) fn with_reader(
        io: &'s dyn StreamSource,
        reader: BufferedReader<'s>,
        config: &'c Config,
    ) -> Self {
        let codec = Codec::default();
        codec.set_recv_frame_size(config.max_frame_size() as usize);
        codec.set_recv_header_list_size(config.max_header_list_size());
        codec.set_recv_header_table_size(config.header_table_size());

        Http2Connection {
            reader,
            codec,
            config,
            writer: BufferedWriter::with_capacity(io, config.write_buffer_size),
            state: State::CheckPreface,
            last_stream_id: StreamId::zero(),
            pending_acks: 0,
            request: RequestData::default(),
        }
    }

    pub fn state(&self) -> State {
        self.state
    }

    /// Highest client stream id seen so far.
    pub fn last_stream_id(&self) -> StreamId {
        self.last_stream_id
    }

    /// Head of the last decoded request.
    pub fn request(&self) -> &RequestData {
        &self.request
    }

    /// Drive the connection until it is closed.
    ///
    /// Connection errors detected after the preface are reported to the
    /// peer with a GOAWAY frame. The transport is closed in every case.
    pub fn run(&mut self) -> Result<(), Error> {
        let result = loop {
            match self.step() {
                Ok(State::Closed) => break Ok(()),
                Ok(_) => continue,
                Err(e) => break Err(e),
            }
        };

        if let Err(ref err) = result {
            log::debug!("closing http/2 connection; err={err}");
            if let Error::Protocol(e) = err {
                if matches!(self.state, State::AwaitClientSettings | State::Open) {
                    self.go_away(e.reason());
                }
            }
        }
        self.state = State::Closed;
        let _ = self.writer.close();
        result
    }

    /// Perform a single state transition.
    pub fn step(&mut self) -> Result<State, Error> {
        let next = match self.state {
            State::CheckPreface => {
                let preface = self.reader.read_fixed_length(PREFACE.len())?;
                if preface[..] != PREFACE[..] {
                    proto_err!(conn: "invalid connection preface");
                    return Err(FrameError::InvalidPreface.into());
                }
                State::SendPrefaceAndSettings
            }
            State::SendPrefaceAndSettings => {
                let settings = self.config.settings().clone();
                log::trace!("sending server preface: {settings:?}");
                self.send(settings.into())?;
                self.pending_acks += 1;
                self.writer.flush()?;
                State::AwaitClientSettings
            }
            State::AwaitClientSettings => match self.read_frame()? {
                Some(Frame::Settings(settings)) if !settings.is_ack() => {
                    self.recv_settings(settings)?;
                    State::Open
                }
                Some(frm) => {
                    proto_err!(conn: "expected client SETTINGS, got {:?}", frm.kind());
                    return Err(FrameError::ExpectedSettings.into());
                }
                None => {
                    proto_err!(conn: "expected client SETTINGS, got header block");
                    return Err(FrameError::ExpectedSettings.into());
                }
            },
            State::Open => {
                // end of stream is clean only on a frame boundary
                if self.reader.buffer().is_empty()
                    && !self.codec.is_partial()
                    && self.reader.fill()? == 0
                {
                    log::trace!("peer closed http/2 connection");
                    State::Closed
                } else {
                    match self.read_frame()? {
                        Some(frm) => self.recv_frame(frm)?,
                        None => State::Open,
                    }
                }
            }
            State::Closed => State::Closed,
        };

        if self.writer.pending() > 0 {
            self.writer.flush()?;
        }
        self.state = next;
        Ok(next)
    }

    fn read_frame(&mut self) -> Result<Option<Frame>, Error> {
        let head = self.reader.read_fixed_length(frame::HEADER_LEN)?;
        let (head, len) = self.codec.decode_head(&head)?;
        let payload = self.reader.read_fixed_length(len)?;
        Ok(self.codec.decode_frame(head, payload)?)
    }

    fn recv_frame(&mut self, frm: Frame) -> Result<State, Error> {
        match frm {
            Frame::Settings(settings) => self.recv_settings(settings)?,
            Frame::Headers(headers) => self.recv_headers(headers)?,
            Frame::Ping(ping) => {
                if !ping.is_ack() {
                    self.send(Ping::pong(*ping.payload()).into())?;
                }
            }
            Frame::GoAway(frm) => {
                log::debug!(
                    "received GOAWAY; reason={:?} last_stream_id={:?}",
                    frm.reason(),
                    frm.last_stream_id()
                );
                return Ok(State::Closed);
            }
            Frame::Reset(frm) => {
                log::debug!("stream {:?} reset by peer: {:?}", frm.stream_id(), frm.reason());
            }
            Frame::Data(frm) => {
                log::trace!(
                    "discarding {}B of DATA for stream {:?}",
                    frm.payload().len(),
                    frm.stream_id()
                );
            }
            // flow control and prioritization are not implemented
            Frame::WindowUpdate(_) | Frame::Priority(_) => {}
        }
        Ok(State::Open)
    }

    fn recv_settings(&mut self, settings: Settings) -> Result<(), Error> {
        log::trace!("processing incoming SETTINGS: {settings:?}");

        if settings.is_ack() {
            if self.pending_acks == 0 {
                proto_err!(conn: "received unexpected settings ack");
                return Err(FrameError::UnexpectedSettingsAck.into());
            }
            self.pending_acks -= 1;
            return Ok(());
        }

        if let Some(size) = settings.max_frame_size() {
            self.codec.set_send_frame_size(size as usize);
        }
        self.send(Settings::ack().into())
    }

    fn recv_headers(&mut self, headers: Headers) -> Result<(), Error> {
        let id = headers.stream_id();
        if !id.is_client_initiated() || id <= self.last_stream_id {
            proto_err!(conn: "invalid stream id {:?}, last {:?}", id, self.last_stream_id);
            return Err(FrameError::InvalidStreamId.into());
        }
        self.last_stream_id = id;

        let reason = if headers.is_over_size() {
            Reason::REFUSED_STREAM
        } else if headers.is_malformed() {
            proto_err!(stream: "malformed header block on stream {:?}", id);
            Reason::PROTOCOL_ERROR
        } else if let Some(req) = request_head(headers) {
            log::debug!("refusing http/2 request {} {}", req.method(), req.target());
            self.request = req;
            Reason::HTTP_1_1_REQUIRED
        } else {
            proto_err!(stream: "invalid request head on stream {:?}", id);
            Reason::PROTOCOL_ERROR
        };
        self.send(Reset::new(id, reason).into())
    }

    fn send(&mut self, frm: Frame) -> Result<(), Error> {
        let mut buf = BytesMut::with_capacity(frame::HEADER_LEN + 64);
        self.codec.encode(frm, &mut buf).map_err(|e| {
            log::error!("cannot encode frame: {e}");
            Error::InvalidState("cannot encode frame")
        })?;
        self.writer.write_bytes(buf.freeze())
    }

    fn go_away(&mut self, reason: Reason) {
        let frm = GoAway::new(reason).set_last_stream_id(self.last_stream_id);
        if let Err(e) = self.send(frm.into()).and_then(|_| self.writer.flush()) {
            log::trace!("failed to send GOAWAY; err={e}");
        }
    }
}

// request head from a decoded header block, `None` if fields are not utf-8
fn request_head(headers: Headers) -> Option<RequestData> {
    let (pseudo, fields) = headers.into_parts();
    let method = Method::from_bytes(pseudo.method.as_deref()?).ok()?;
    let target = if method == Method::CONNECT {
        pseudo.authority.clone()?
    } else {
        pseudo.path?
    };

    let mut req = RequestData::new(method, ByteString::try_from(target).ok()?, Version::HTTP_2);
    if let Some(authority) = pseudo.authority {
        req.add_header(ByteString::from_static("host"), ByteString::try_from(authority).ok()?);
    }
    for field in fields {
        req.add_header(
            ByteString::try_from(field.name).ok()?,
            ByteString::try_from(field.value).ok()?,
        );
    }
    Some(req)
}
