mod support;

use ntex_bytes::BytesMut;
use ntex_codec::Decoder;
use ntex_httpd::frame::{Frame, Reason, StreamId};
use ntex_httpd::h2::Http2Connection;
use ntex_httpd::{Codec, Config, Error};

use support::{client_preface, frame, init_log, literal, request_block, MockStream};

fn serve(input: &[u8], config: &Config) -> (Result<(), Error>, Vec<Frame>) {
    init_log();
    let io = MockStream::chunked(input, 13);
    let result = Http2Connection::new(&io, config).run();
    let out = io.output();
    assert!(out.is_closed());

    // frames sent by the server, decoded with a permissive codec
    let codec = Codec::default();
    codec.set_recv_frame_size(16_777_215);
    let mut buf = BytesMut::from(&out.bytes()[..]);
    let mut frames = Vec::new();
    while let Some(frm) = codec.decode(&mut buf).unwrap() {
        frames.push(frm);
    }
    assert!(buf.is_empty());
    (result, frames)
}

fn resets(frames: &[Frame]) -> Vec<(StreamId, Reason)> {
    frames
        .iter()
        .filter_map(|frm| match frm {
            Frame::Reset(rst) => Some((rst.stream_id(), rst.reason())),
            _ => None,
        })
        .collect()
}

fn go_away(frames: &[Frame]) -> Option<(StreamId, Reason)> {
    frames.iter().find_map(|frm| match frm {
        Frame::GoAway(frm) => Some((frm.last_stream_id(), frm.reason())),
        _ => None,
    })
}

fn hex_block(wire: &str) -> Vec<u8> {
    hex::decode(wire).unwrap()
}

#[test]
fn server_preface() {
    let config = Config::default()
        .set_max_concurrent_streams(10)
        .set_max_frame_size(32_768);
    let (result, frames) = serve(&client_preface(), &config);
    result.unwrap();

    match frames[0] {
        Frame::Settings(ref settings) => {
            assert!(!settings.is_ack());
            assert_eq!(settings.max_concurrent_streams(), Some(10));
            assert_eq!(settings.max_frame_size(), Some(32_768));
            assert_eq!(settings.is_push_enabled(), Some(false));
            assert_eq!(settings.header_table_size(), Some(4096));
        }
        ref frm => panic!("unexpected frame {frm:?}"),
    }
    assert!(matches!(frames[1], Frame::Settings(ref s) if s.is_ack()));
    assert_eq!(frames.len(), 2);
}

#[test]
fn dynamic_table_across_streams() {
    // RFC 7541 C.4, each block refers to entries added by the previous one
    let mut input = client_preface();
    for (idx, wire) in [
        "828684418cf1e3c2e5f23a6ba0ab90f4ff",
        "828684be5886a8eb10649cbf",
        "828785bf408825a849e95ba97d7f8925a849e95bb8e8b4bf",
    ]
    .iter()
    .enumerate()
    {
        input.extend(frame(0x1, 0x5, 1 + 2 * idx as u32, &hex_block(wire)));
    }

    let config = Config::default();
    let io = MockStream::new(&input);
    let mut conn = Http2Connection::new(&io, &config);
    conn.run().unwrap();

    let req = conn.request();
    assert_eq!(req.target(), "/index.html");
    assert_eq!(req.header("host"), Some("www.example.com"));
    assert_eq!(req.header("custom-key"), Some("custom-value"));
    assert_eq!(conn.last_stream_id(), StreamId::from(5));

    let (result, frames) = serve(&input, &config);
    result.unwrap();
    assert_eq!(
        resets(&frames),
        vec![
            (StreamId::from(1), Reason::HTTP_1_1_REQUIRED),
            (StreamId::from(3), Reason::HTTP_1_1_REQUIRED),
            (StreamId::from(5), Reason::HTTP_1_1_REQUIRED),
        ]
    );
    assert!(go_away(&frames).is_none());
}

#[test]
fn oversized_header_list() {
    let mut block = request_block("/");
    literal("x-large", &"a".repeat(200), &mut block);

    let mut input = client_preface();
    input.extend(frame(0x1, 0x5, 1, &block));
    input.extend(frame(0x1, 0x5, 3, &request_block("/")));

    let config = Config::default().set_max_header_list_size(128);
    let (result, frames) = serve(&input, &config);
    result.unwrap();
    assert_eq!(
        resets(&frames),
        vec![
            (StreamId::from(1), Reason::REFUSED_STREAM),
            (StreamId::from(3), Reason::HTTP_1_1_REQUIRED),
        ]
    );
}

#[test]
fn malformed_header_blocks() {
    let mut upper = request_block("/");
    literal("X-Upper", "1", &mut upper);

    let mut connection = request_block("/");
    literal("connection", "keep-alive", &mut connection);

    let mut te = request_block("/");
    literal("te", "gzip", &mut te);

    let mut late_pseudo = BytesMut::new();
    literal("accept", "*/*", &mut late_pseudo);
    late_pseudo.extend_from_slice(&request_block("/"));

    let mut input = client_preface();
    for (idx, block) in [upper, connection, te, late_pseudo].iter().enumerate() {
        input.extend(frame(0x1, 0x5, 1 + 2 * idx as u32, block));
    }
    let mut trailers_ok = request_block("/");
    literal("te", "trailers", &mut trailers_ok);
    input.extend(frame(0x1, 0x5, 9, &trailers_ok));

    let (result, frames) = serve(&input, &Config::default());
    result.unwrap();
    assert_eq!(
        resets(&frames),
        vec![
            (StreamId::from(1), Reason::PROTOCOL_ERROR),
            (StreamId::from(3), Reason::PROTOCOL_ERROR),
            (StreamId::from(5), Reason::PROTOCOL_ERROR),
            (StreamId::from(7), Reason::PROTOCOL_ERROR),
            (StreamId::from(9), Reason::HTTP_1_1_REQUIRED),
        ]
    );
}

#[test]
fn control_frames() {
    let mut input = client_preface();
    input.extend(frame(0x4, 0x1, 0, &[]));
    input.extend(frame(0x8, 0, 0, &[0, 0, 0x10, 0]));
    input.extend(frame(0x2, 0, 1, &[0, 0, 0, 0, 16]));
    input.extend(frame(0x6, 0, 0, b"\x01\x02\x03\x04\x05\x06\x07\x08"));
    // PING acknowledgements are not answered
    input.extend(frame(0x6, 0x1, 0, b"\x01\x02\x03\x04\x05\x06\x07\x08"));
    input.extend(frame(0x3, 0, 1, &[0, 0, 0, 8]));
    input.extend(frame(0x4, 0, 0, &[0, 0x5, 0, 0, 0x40, 0]));

    let (result, frames) = serve(&input, &Config::default());
    result.unwrap();

    let kinds: Vec<_> = frames.iter().map(|frm| frm.kind()).collect();
    assert_eq!(kinds.len(), 4);
    match frames[2] {
        Frame::Ping(ref ping) => {
            assert!(ping.is_ack());
            assert_eq!(ping.payload(), b"\x01\x02\x03\x04\x05\x06\x07\x08");
        }
        ref frm => panic!("unexpected frame {frm:?}"),
    }
    assert!(matches!(frames[3], Frame::Settings(ref s) if s.is_ack()));
}

#[test]
fn frame_too_large() {
    let mut input = client_preface();
    input.extend(frame(0x0, 0, 1, &vec![0u8; 16_385]));

    let (result, frames) = serve(&input, &Config::default());
    assert!(result.is_err());
    assert_eq!(go_away(&frames), Some((StreamId::zero(), Reason::FRAME_SIZE_ERROR)));
}

#[test]
fn larger_frames_when_configured() {
    let mut input = client_preface();
    input.extend(frame(0x0, 0, 1, &vec![0u8; 20_000]));

    let config = Config::default().set_max_frame_size(32_768);
    let (result, frames) = serve(&input, &config);
    result.unwrap();
    assert!(go_away(&frames).is_none());
}

#[test]
fn push_promise_from_client() {
    let mut input = client_preface();
    input.extend(frame(0x5, 0x4, 1, &[0, 0, 0, 2, 0x82]));

    let (result, frames) = serve(&input, &Config::default());
    assert!(result.is_err());
    assert_eq!(go_away(&frames), Some((StreamId::zero(), Reason::PROTOCOL_ERROR)));
}

#[test]
fn interrupted_header_block() {
    let block = request_block("/");
    let mut input = client_preface();
    input.extend(frame(0x1, 0x1, 1, &block[..2]));
    input.extend(frame(0x6, 0, 0, b"12345678"));

    let (result, frames) = serve(&input, &Config::default());
    assert!(result.is_err());
    assert_eq!(go_away(&frames), Some((StreamId::zero(), Reason::PROTOCOL_ERROR)));

    // connection closed in the middle of a header block
    let mut input = client_preface();
    input.extend(frame(0x1, 0x1, 1, &block[..2]));
    let (result, _) = serve(&input, &Config::default());
    assert!(matches!(result, Err(Error::Eof)));
}
