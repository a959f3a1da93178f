use ntex_bytes::{BufMut, BytesMut};

pub const PREFACE: &[u8] = b"PRI * HTTP/2.0\r\n\r\nSM\r\n\r\n";

/// Raw HTTP/2 frame.
pub fn frame(kind: u8, flags: u8, stream_id: u32, payload: &[u8]) -> Vec<u8> {
    let mut buf = Vec::with_capacity(9 + payload.len());
    buf.extend_from_slice(&(payload.len() as u32).to_be_bytes()[1..]);
    buf.push(kind);
    buf.push(flags);
    buf.extend_from_slice(&stream_id.to_be_bytes());
    buf.extend_from_slice(payload);
    buf
}

/// Client preface followed by an empty SETTINGS frame.
pub fn client_preface() -> Vec<u8> {
    let mut buf = PREFACE.to_vec();
    buf.extend(frame(0x4, 0, 0, &[]));
    buf
}

/// HPACK integer with an N-bit prefix.
pub fn encode_int(mut value: usize, prefix_bits: u8, first_byte: u8, dst: &mut BytesMut) {
    let max = (1usize << prefix_bits) - 1;
    if value < max {
        dst.put_u8(first_byte | value as u8);
        return;
    }
    dst.put_u8(first_byte | max as u8);
    value -= max;
    while value >= 128 {
        dst.put_u8(0x80 | (value & 0x7f) as u8);
        value >>= 7;
    }
    dst.put_u8(value as u8);
}

/// HPACK literal header field without indexing, new name.
pub fn literal(name: &str, value: &str, dst: &mut BytesMut) {
    dst.put_u8(0);
    encode_int(name.len(), 7, 0, dst);
    dst.extend_from_slice(name.as_bytes());
    encode_int(value.len(), 7, 0, dst);
    dst.extend_from_slice(value.as_bytes());
}

/// `GET <path>` request header block, static table references only.
pub fn request_block(path: &str) -> BytesMut {
    let mut dst = BytesMut::new();
    // :method GET, :scheme http
    dst.extend_from_slice(&[0x82, 0x86]);
    // :path, name from the static table
    encode_int(4, 4, 0, &mut dst);
    encode_int(path.len(), 7, 0, &mut dst);
    dst.extend_from_slice(path.as_bytes());
    dst
}

pub fn build_large_headers() -> Vec<(&'static str, String)> {
    vec![
        ("one", "hello".to_string()),
        ("two", build_large_string('2', 4 * 1024)),
        ("three", "three".to_string()),
        ("four", build_large_string('4', 4 * 1024)),
        ("five", "five".to_string()),
        ("six", build_large_string('6', 4 * 1024)),
    ]
}

fn build_large_string(ch: char, len: usize) -> String {
    std::iter::repeat(ch).take(len).collect()
}
