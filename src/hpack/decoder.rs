use std::fmt;

use ntex_bytes::{Bytes, BytesMut};

use super::{huffman, Header, Table};

/// Decodes header blocks using the HPACK algorithm
pub struct Decoder {
    // Upper bound for dynamic table size updates, the value advertised with
    // SETTINGS_HEADER_TABLE_SIZE
    max_size_limit: usize,
    table: Table,
    buffer: BytesMut,
}

/// Represents all errors that can be encountered while performing the decoding
/// of an HPACK header set.
#[derive(thiserror::Error, Debug, Copy, Clone, PartialEq, Eq)]
pub enum DecoderError {
    #[error("Invalid table index")]
    InvalidTableIndex,
    #[error("Invalid huffman code")]
    InvalidHuffmanCode,
    #[error("Integer overflow")]
    IntegerOverflow,
    #[error("Integer is not minimally encoded")]
    IntegerOverlong,
    #[error("Header block is truncated")]
    Truncated,
    #[error("Dynamic table size update is not at the start of the block")]
    SizeUpdateNotAtStart,
    #[error("Invalid max dynamic table size")]
    InvalidMaxDynamicSize,
}

enum Representation {
    /// Indexed header field representation
    ///
    /// An indexed header field representation identifies an entry in either
    /// the static table or the dynamic table (see Section 2.3).
    ///
    /// # Header encoding
    ///
    /// ```text
    ///   0   1   2   3   4   5   6   7
    /// +---+---+---+---+---+---+---+---+
    /// | 1 |        Index (7+)         |
    /// +---+---------------------------+
    /// ```
    Indexed,

    /// Literal Header Field with Incremental Indexing
    ///
    /// A literal header field with incremental indexing representation
    /// results in appending a header field to the decoded header list and
    /// inserting it as a new entry into the dynamic table.
    ///
    /// # Header encoding
    ///
    /// ```text
    ///   0   1   2   3   4   5   6   7
    /// +---+---+---+---+---+---+---+---+
    /// | 0 | 1 |      Index (6+)       |
    /// +---+---+-----------------------+
    /// | H |     Value Length (7+)     |
    /// +---+---------------------------+
    /// | Value String (Length octets)  |
    /// +-------------------------------+
    /// ```
    LiteralWithIndexing,

    /// Literal Header Field without Indexing
    ///
    /// A literal header field without indexing representation results in
    /// appending a header field to the decoded header list without altering
    /// the dynamic table.
    LiteralWithoutIndexing,

    /// Literal Header Field Never Indexed
    ///
    /// The field must be encoded the same way by intermediaries forwarding
    /// it, it is surfaced as sensitive.
    LiteralNeverIndexed,

    /// Dynamic Table Size Update
    ///
    /// A dynamic table size update signals a change to the size of the
    /// dynamic table.
    ///
    /// # Header encoding
    ///
    /// ```text
    ///   0   1   2   3   4   5   6   7
    /// +---+---+---+---+---+---+---+---+
    /// | 0 | 0 | 1 |   Max size (5+)   |
    /// +---+---------------------------+
    /// ```
    SizeUpdate,
}

// ===== impl Decoder =====

impl Decoder {
    /// Creates a new `Decoder` with all settings set to default values.
    pub fn new(size: usize) -> Decoder {
        Decoder {
            max_size_limit: size,
            table: Table::new(size),
            buffer: BytesMut::with_capacity(4096),
        }
    }

    /// Record a new table size limit advertised to the peer.
    ///
    /// Subsequent size updates in header blocks are checked against it.
    pub fn queue_size_update(&mut self, size: usize) {
        self.max_size_limit = size;
    }

    pub fn max_size_limit(&self) -> usize {
        self.max_size_limit
    }

    pub fn table(&self) -> &Table {
        &self.table
    }

    /// Decodes the headers found in the given buffer.
    ///
    /// The buffer must hold a complete header block. On error the block is
    /// abandoned, the compression context can not be trusted afterwards.
    pub fn decode<F>(&mut self, src: &[u8], mut f: F) -> Result<(), DecoderError>
    where
        F: FnMut(Header),
    {
        let mut buf = src;
        let mut can_resize = true;

        while let Some(&first) = buf.first() {
            match Representation::load(first) {
                Representation::Indexed => {
                    can_resize = false;
                    let index = decode_int(&mut buf, 7)? as usize;
                    let (name, value) = self
                        .table
                        .get(index)
                        .ok_or(DecoderError::InvalidTableIndex)?;
                    f(Header::new(name, value));
                }
                Representation::LiteralWithIndexing => {
                    can_resize = false;
                    let header = self.decode_literal(&mut buf, 6)?;
                    self.table.add(header.name.clone(), header.value.clone());
                    f(header);
                }
                Representation::LiteralWithoutIndexing => {
                    can_resize = false;
                    f(self.decode_literal(&mut buf, 4)?);
                }
                Representation::LiteralNeverIndexed => {
                    can_resize = false;
                    let mut header = self.decode_literal(&mut buf, 4)?;
                    header.sensitive = true;
                    f(header);
                }
                Representation::SizeUpdate => {
                    if !can_resize {
                        return Err(DecoderError::SizeUpdateNotAtStart);
                    }
                    self.process_size_update(&mut buf)?;
                }
            }
        }

        Ok(())
    }

    fn process_size_update(&mut self, buf: &mut &[u8]) -> Result<(), DecoderError> {
        let new_size = decode_int(buf, 5)? as usize;

        if new_size > self.max_size_limit {
            proto_err!(conn: "hpack size update {} exceeds limit {}", new_size, self.max_size_limit);
            return Err(DecoderError::InvalidMaxDynamicSize);
        }

        log::trace!(
            "hpack table size update; old={} new={}",
            self.table.max_size(),
            new_size
        );
        self.table.resize(new_size);
        Ok(())
    }

    fn decode_literal(&mut self, buf: &mut &[u8], prefix: u8) -> Result<Header, DecoderError> {
        let index = decode_int(buf, prefix)? as usize;

        let name = if index == 0 {
            self.decode_string(buf)?
        } else {
            let (name, _) = self
                .table
                .get(index)
                .ok_or(DecoderError::InvalidTableIndex)?;
            name
        };
        let value = self.decode_string(buf)?;

        Ok(Header::new(name, value))
    }

    fn decode_string(&mut self, buf: &mut &[u8]) -> Result<Bytes, DecoderError> {
        const HUFF_FLAG: u8 = 0b1000_0000;

        let huff = match buf.first() {
            Some(b) => b & HUFF_FLAG == HUFF_FLAG,
            None => return Err(DecoderError::Truncated),
        };

        let len = decode_int(buf, 7)? as usize;
        if len > buf.len() {
            log::trace!("hpack string of {len}B, {}B left in block", buf.len());
            return Err(DecoderError::Truncated);
        }

        let src: &[u8] = *buf;
        let (data, rest) = src.split_at(len);
        *buf = rest;

        if huff {
            let res = huffman::decode(data, &mut self.buffer)?;
            Ok(res.freeze())
        } else {
            Ok(Bytes::copy_from_slice(data))
        }
    }
}

impl Default for Decoder {
    fn default() -> Decoder {
        Decoder::new(crate::frame::DEFAULT_SETTINGS_HEADER_TABLE_SIZE)
    }
}

impl fmt::Debug for Decoder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Decoder")
            .field("max_size_limit", &self.max_size_limit)
            .field("table", &self.table)
            .finish()
    }
}

// ===== impl Representation =====

impl Representation {
    fn load(byte: u8) -> Representation {
        const INDEXED: u8 = 0b1000_0000;
        const LITERAL_WITH_INDEXING: u8 = 0b0100_0000;
        const SIZE_UPDATE: u8 = 0b0010_0000;
        const LITERAL_NEVER_INDEXED: u8 = 0b0001_0000;

        if byte & INDEXED == INDEXED {
            Representation::Indexed
        } else if byte & LITERAL_WITH_INDEXING == LITERAL_WITH_INDEXING {
            Representation::LiteralWithIndexing
        } else if byte & SIZE_UPDATE == SIZE_UPDATE {
            Representation::SizeUpdate
        } else if byte & LITERAL_NEVER_INDEXED == LITERAL_NEVER_INDEXED {
            Representation::LiteralNeverIndexed
        } else {
            Representation::LiteralWithoutIndexing
        }
    }
}

/// Decode an integer with an N-bit prefix, advancing `buf` past it.
///
/// At most five continuation bytes are accepted and the value must fit into
/// `u32`. A trailing zero continuation byte means the value was not minimally
/// encoded.
pub fn decode_int(buf: &mut &[u8], prefix_size: u8) -> Result<u32, DecoderError> {
    // The octet limit is chosen such that the maximum allowed *value* can
    // never overflow an unsigned 32-bit integer.
    const MAX_BYTES: usize = 5;
    const VARINT_MASK: u8 = 0b0111_1111;
    const VARINT_FLAG: u8 = 0b1000_0000;

    debug_assert!((1..=8).contains(&prefix_size));

    let mask = (0xffu16 >> (8 - prefix_size)) as u8;

    let src: &[u8] = *buf;
    let (&first, rest) = src.split_first().ok_or(DecoderError::Truncated)?;
    let mut ret = u32::from(first & mask);

    if ret < u32::from(mask) {
        // Value fits in the prefix bits
        *buf = rest;
        return Ok(ret);
    }

    let mut shift = 0;
    for (i, &b) in rest.iter().enumerate() {
        if i == MAX_BYTES - 1 && b > 0x0f {
            // the last octet carries at most four significant bits
            return Err(DecoderError::IntegerOverflow);
        }
        if i > 0 && b == 0 {
            return Err(DecoderError::IntegerOverlong);
        }

        ret = ret
            .checked_add(u32::from(b & VARINT_MASK) << shift)
            .ok_or(DecoderError::IntegerOverflow)?;
        shift += 7;

        if b & VARINT_FLAG == 0 {
            *buf = &rest[i + 1..];
            return Ok(ret);
        }
    }

    Err(DecoderError::Truncated)
}

#[cfg(test)]
mod test {
    use super::*;

    fn decode_all(de: &mut Decoder, src: &[u8]) -> Result<Vec<Header>, DecoderError> {
        let mut res = vec![];
        de.decode(src, |h| res.push(h))?;
        Ok(res)
    }

    fn pairs(headers: &[Header]) -> Vec<(String, String)> {
        headers
            .iter()
            .map(|h| {
                (
                    String::from_utf8(h.name.to_vec()).unwrap(),
                    String::from_utf8(h.value.to_vec()).unwrap(),
                )
            })
            .collect()
    }

    fn int(src: &[u8], prefix: u8) -> Result<(u32, usize), DecoderError> {
        let mut buf = src;
        let v = decode_int(&mut buf, prefix)?;
        Ok((v, src.len() - buf.len()))
    }

    #[test]
    fn test_decode_int() {
        // RFC 7541 C.1
        assert_eq!(int(&[0b0000_1010], 5), Ok((10, 1)));
        assert_eq!(int(&[0b0001_1111, 0b1001_1010, 0b0000_1010], 5), Ok((1337, 3)));
        assert_eq!(int(&[42], 8), Ok((42, 1)));
        // prefix bits above the prefix are ignored
        assert_eq!(int(&[0b1110_1010], 5), Ok((10, 1)));
        // exactly the prefix maximum
        assert_eq!(int(&[0x1f, 0x00], 5), Ok((31, 2)));
        // five continuation bytes
        assert_eq!(
            int(&[0x1f, 0x80, 0x80, 0x80, 0x80, 0x01], 5),
            Ok((31 + (1 << 28), 6))
        );
    }

    #[test]
    fn test_decode_int_errors() {
        assert_eq!(int(&[], 5), Err(DecoderError::Truncated));
        assert_eq!(int(&[0x1f, 0x80], 5), Err(DecoderError::Truncated));
        // fifth continuation byte with more than four bits
        assert_eq!(
            int(&[0x1f, 0xff, 0xff, 0xff, 0xff, 0x1f], 5),
            Err(DecoderError::IntegerOverflow)
        );
        // sixth continuation byte
        assert_eq!(
            int(&[0x1f, 0x80, 0x80, 0x80, 0x80, 0x80, 0x01], 5),
            Err(DecoderError::IntegerOverflow)
        );
        // value past u32::MAX
        assert_eq!(
            int(&[0xff, 0xff, 0xff, 0xff, 0xff, 0x0f], 8),
            Err(DecoderError::IntegerOverflow)
        );
        // trailing zero byte
        assert_eq!(int(&[0x1f, 0x80, 0x00], 5), Err(DecoderError::IntegerOverlong));
    }

    #[test]
    fn test_indexed_static() {
        let mut de = Decoder::new(4096);
        let res = decode_all(&mut de, &[0x90]).unwrap();
        assert_eq!(
            pairs(&res),
            [("accept-encoding".to_string(), "gzip, deflate".to_string())]
        );
        assert!(!res[0].sensitive);
    }

    #[test]
    fn test_invalid_index() {
        let mut de = Decoder::new(4096);
        // index 124 on an empty dynamic table
        assert_eq!(
            decode_all(&mut de, &[0x80 | 124]),
            Err(DecoderError::InvalidTableIndex)
        );
        assert_eq!(decode_all(&mut de, &[0x80]), Err(DecoderError::InvalidTableIndex));
        // literal with a name reference past the table
        assert_eq!(
            decode_all(&mut de, &[0x40 | 62, 0x01, b'x']),
            Err(DecoderError::InvalidTableIndex)
        );
    }

    #[test]
    fn test_literal_forms() {
        let mut de = Decoder::new(4096);

        // without indexing, name reference :path
        let mut block = vec![0x04, 0x0c];
        block.extend_from_slice(b"/sample/path");
        let res = decode_all(&mut de, &block).unwrap();
        assert_eq!(pairs(&res), [(":path".to_string(), "/sample/path".to_string())]);
        assert!(de.table().is_empty());

        // never indexed, literal name
        let mut block = vec![0x10, 0x08];
        block.extend_from_slice(b"password");
        block.push(0x06);
        block.extend_from_slice(b"secret");
        let res = decode_all(&mut de, &block).unwrap();
        assert_eq!(pairs(&res), [("password".to_string(), "secret".to_string())]);
        assert!(res[0].sensitive);
        assert!(de.table().is_empty());

        // incremental indexing, literal name
        let mut block = vec![0x40, 0x0a];
        block.extend_from_slice(b"custom-key");
        block.push(0x0d);
        block.extend_from_slice(b"custom-header");
        let res = decode_all(&mut de, &block).unwrap();
        assert_eq!(
            pairs(&res),
            [("custom-key".to_string(), "custom-header".to_string())]
        );
        assert_eq!(de.table().len(), 1);
        assert_eq!(de.table().size(), 55);

        // and referenced from the dynamic table
        let res = decode_all(&mut de, &[0x80 | 62]).unwrap();
        assert_eq!(
            pairs(&res),
            [("custom-key".to_string(), "custom-header".to_string())]
        );
    }

    #[test]
    fn test_truncated_string() {
        let mut de = Decoder::new(4096);
        assert_eq!(
            decode_all(&mut de, &[0x40, 0x0a, b'c', b'u']),
            Err(DecoderError::Truncated)
        );
        assert_eq!(decode_all(&mut de, &[0x40]), Err(DecoderError::Truncated));
    }

    #[test]
    fn test_size_update() {
        let mut de = Decoder::new(4096);

        // two updates at the start are fine
        decode_all(&mut de, &[0x20, 0x3f, 0xe1, 0x1f, 0x82]).unwrap();
        assert_eq!(de.table().max_size(), 4096);

        // not at the start
        assert_eq!(
            decode_all(&mut de, &[0x82, 0x20]),
            Err(DecoderError::SizeUpdateNotAtStart)
        );

        // over the advertised limit
        assert_eq!(
            decode_all(&mut de, &[0x3f, 0xe2, 0x1f]),
            Err(DecoderError::InvalidMaxDynamicSize)
        );

        de.queue_size_update(8192);
        decode_all(&mut de, &[0x3f, 0xe1, 0x3f]).unwrap();
        assert_eq!(de.table().max_size(), 8192);
    }

    #[test]
    fn test_size_update_evicts() {
        let mut de = Decoder::new(4096);
        let mut block = vec![0x40, 0x0a];
        block.extend_from_slice(b"custom-key");
        block.push(0x0d);
        block.extend_from_slice(b"custom-header");
        decode_all(&mut de, &block).unwrap();
        assert_eq!(de.table().len(), 1);

        decode_all(&mut de, &[0x20]).unwrap();
        assert!(de.table().is_empty());
        assert_eq!(de.table().max_size(), 0);
    }

    #[test]
    fn test_huffman_literal() {
        let mut de = Decoder::new(4096);
        let block = hex::decode("828684418cf1e3c2e5f23a6ba0ab90f4ff").unwrap();
        let res = decode_all(&mut de, &block).unwrap();
        assert_eq!(
            pairs(&res),
            [
                (":method".to_string(), "GET".to_string()),
                (":scheme".to_string(), "http".to_string()),
                (":path".to_string(), "/".to_string()),
                (":authority".to_string(), "www.example.com".to_string()),
            ]
        );
        assert_eq!(de.table().size(), 57);

        // broken huffman padding
        assert_eq!(
            decode_all(&mut de, &[0x04, 0x81, 0x00]),
            Err(DecoderError::InvalidHuffmanCode)
        );
    }
}
