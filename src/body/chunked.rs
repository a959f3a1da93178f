use std::cmp;

use crate::error::Error;
use crate::io::{BufferedReader, BufferedWriter};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum State {
    Size,
    Data(u64),
    DataEnd,
    Trailers,
    Eof,
    /// Framing error, the body can not be resynchronized
    Error,
}

/// Decoder for `Transfer-Encoding: chunked` request bodies.
///
/// Chunk extensions are ignored and trailer fields are discarded.
#[derive(Debug, Clone)]
pub struct ChunkedReader {
    state: State,
    max_line_length: usize,
}

impl ChunkedReader {
    pub fn new(max_line_length: usize) -> Self {
        ChunkedReader {
            state: State::Size,
            max_line_length,
        }
    }

    pub fn is_eof(&self) -> bool {
        self.state == State::Eof
    }

    /// Checks if a framing error was seen.
    pub fn is_failed(&self) -> bool {
        self.state == State::Error
    }

    pub fn read(&mut self, rd: &mut BufferedReader<'_>, dst: &mut [u8]) -> Result<usize, Error> {
        let result = self.read_chunk(rd, dst);
        if result.is_err() {
            self.state = State::Error;
        }
        result
    }

    fn read_chunk(&mut self, rd: &mut BufferedReader<'_>, dst: &mut [u8]) -> Result<usize, Error> {
        self.advance(rd)?;

        match self.state {
            State::Data(remaining) if !dst.is_empty() => {
                let len = cmp::min(remaining, dst.len() as u64) as usize;
                let n = rd.read(&mut dst[..len])?;
                if n == 0 {
                    return Err(Error::Eof);
                }
                let remaining = remaining - n as u64;
                self.state = if remaining == 0 {
                    State::DataEnd
                } else {
                    State::Data(remaining)
                };
                Ok(n)
            }
            _ => Ok(0),
        }
    }

    /// Discard the rest of the body.
    ///
    /// Returns `false` without reading the data if the next chunk would
    /// exceed `limit` bytes of discarded data in total.
    pub fn drain(&mut self, rd: &mut BufferedReader<'_>, limit: u64) -> Result<bool, Error> {
        let result = self.drain_chunks(rd, limit);
        if result.is_err() {
            self.state = State::Error;
        }
        result
    }

    fn drain_chunks(&mut self, rd: &mut BufferedReader<'_>, limit: u64) -> Result<bool, Error> {
        let mut budget = limit;
        loop {
            self.advance(rd)?;
            match self.state {
                State::Data(remaining) if remaining <= budget => {
                    rd.skip(remaining)?;
                    budget -= remaining;
                    self.state = State::DataEnd;
                }
                State::Data(_) => return Ok(false),
                _ => return Ok(true),
            }
        }
    }

    // consume framing lines until chunk data or the end of body
    fn advance(&mut self, rd: &mut BufferedReader<'_>) -> Result<(), Error> {
        loop {
            match self.state {
                State::Data(_) | State::Eof => return Ok(()),
                State::Error => return Err(Error::bad_request("malformed chunked body")),
                State::Size => {
                    let line = rd.read_line(self.max_line_length)?;
                    let size = parse_chunk_size(&line)?;
                    log::trace!("chunk of {size}B");
                    self.state = if size == 0 {
                        State::Trailers
                    } else {
                        State::Data(size)
                    };
                }
                State::DataEnd => {
                    if !rd.read_line(self.max_line_length)?.is_empty() {
                        return Err(Error::bad_request("chunk data is not terminated by CRLF"));
                    }
                    self.state = State::Size;
                }
                State::Trailers => {
                    if rd.read_line(self.max_line_length)?.is_empty() {
                        self.state = State::Eof;
                    }
                }
            }
        }
    }
}

fn parse_chunk_size(line: &[u8]) -> Result<u64, Error> {
    let size = match line.iter().position(|b| *b == b';') {
        Some(pos) => &line[..pos],
        None => line,
    };
    let size = trim(size);
    if size.is_empty() {
        return Err(Error::bad_request("empty chunk size"));
    }

    size.iter().try_fold(0u64, |acc, b| {
        let digit = (*b as char)
            .to_digit(16)
            .ok_or(Error::bad_request("invalid chunk size"))?;
        acc.checked_mul(16)
            .and_then(|v| v.checked_add(u64::from(digit)))
            .ok_or(Error::bad_request("chunk size overflow"))
    })
}

fn trim(mut s: &[u8]) -> &[u8] {
    while let [b' ' | b'\t', rest @ ..] = s {
        s = rest;
    }
    while let [rest @ .., b' ' | b'\t'] = s {
        s = rest;
    }
    s
}

/// Encoder for chunked response bodies.
#[derive(Debug, Clone, Default)]
pub struct ChunkedWriter {
    closed: bool,
}

impl ChunkedWriter {
    pub fn new() -> Self {
        ChunkedWriter::default()
    }

    pub fn write(&mut self, wr: &mut BufferedWriter<'_>, data: &[u8]) -> Result<(), Error> {
        if self.closed {
            return Err(Error::InvalidState("chunked stream is closed"));
        }
        if data.is_empty() {
            return Ok(());
        }
        wr.write(format!("{:x}\r\n", data.len()).as_bytes())?;
        wr.write(data)?;
        wr.write(b"\r\n")
    }

    /// Write the last-chunk marker, once.
    pub fn close(&mut self, wr: &mut BufferedWriter<'_>) -> Result<(), Error> {
        if !self.closed {
            self.closed = true;
            wr.write(b"0\r\n\r\n")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use quickcheck::quickcheck;

    use super::*;
    use crate::io::testing::MockStream;

    fn decode(wire: &[u8], chunk: usize) -> Result<Vec<u8>, Error> {
        let io = MockStream::chunked(wire, chunk);
        let mut rd = BufferedReader::with_capacity(&io, 8);
        let mut reader = ChunkedReader::new(128);
        let mut out = Vec::new();
        let mut buf = [0; 5];
        loop {
            let n = reader.read(&mut rd, &mut buf)?;
            if n == 0 {
                return Ok(out);
            }
            out.extend_from_slice(&buf[..n]);
        }
    }

    #[test]
    fn chunk_size() {
        assert_eq!(parse_chunk_size(b"1a").unwrap(), 26);
        assert_eq!(parse_chunk_size(b"  FF ;name=value").unwrap(), 255);
        assert_eq!(parse_chunk_size(b"0").unwrap(), 0);
        assert!(parse_chunk_size(b"").is_err());
        assert!(parse_chunk_size(b" ;ext").is_err());
        assert!(parse_chunk_size(b"0x10").is_err());
        assert!(parse_chunk_size(b"-1").is_err());
        assert!(parse_chunk_size(b"10000000000000000").is_err());
    }

    #[test]
    fn decode_body() {
        let wire = b"5\r\nhello\r\n7;ext=1\r\n, world\r\n0\r\nExpires: never\r\n\r\nnext";
        for chunk in 1..wire.len() {
            assert_eq!(decode(wire, chunk).unwrap(), b"hello, world");
        }
    }

    #[test]
    fn decode_leaves_next_request() {
        let io = MockStream::new(b"3\r\nabc\r\n0\r\n\r\nGET / HTTP/1.1\r\n");
        let mut rd = BufferedReader::new(&io);
        let mut reader = ChunkedReader::new(128);
        assert!(reader.drain(&mut rd, 1024).unwrap());
        assert!(reader.is_eof());
        assert_eq!(&rd.read_line(128).unwrap()[..], b"GET / HTTP/1.1");
    }

    #[test]
    fn missing_data_crlf() {
        assert!(matches!(
            decode(b"3\r\nabcX\r\n0\r\n\r\n", 64),
            Err(Error::Client(_, _))
        ));
    }

    #[test]
    fn truncated_chunk() {
        assert!(matches!(decode(b"a\r\nabc", 64), Err(Error::Eof)));
        assert!(matches!(decode(b"3\r\nabc\r\n", 64), Err(Error::Eof)));
    }

    #[test]
    fn error_is_sticky() {
        let io = MockStream::new(b"zz\r\n3\r\nabc\r\n0\r\n\r\n");
        let mut rd = BufferedReader::new(&io);
        let mut reader = ChunkedReader::new(128);
        let mut buf = [0; 8];
        assert!(reader.read(&mut rd, &mut buf).is_err());
        assert!(reader.is_failed());

        // the following lines parse as valid framing, but are never used
        assert!(reader.read(&mut rd, &mut buf).is_err());
        assert!(reader.drain(&mut rd, 1024).is_err());
        assert!(!reader.is_eof());
    }

    #[test]
    fn drain_limit() {
        let io = MockStream::new(b"800\r\n");
        let mut rd = BufferedReader::new(&io);
        let mut reader = ChunkedReader::new(128);
        // the limit trips before the missing data is needed
        assert!(!reader.drain(&mut rd, 1024).unwrap());
    }

    #[test]
    fn writer_close_once() {
        let io = MockStream::default();
        let mut wr = BufferedWriter::new(&io);
        let mut writer = ChunkedWriter::new();
        writer.write(&mut wr, b"hello world, hello world").unwrap();
        writer.write(&mut wr, b"").unwrap();
        writer.close(&mut wr).unwrap();
        writer.close(&mut wr).unwrap();
        assert!(writer.write(&mut wr, b"x").is_err());
        wr.flush().unwrap();
        assert_eq!(io.output(), b"18\r\nhello world, hello world\r\n0\r\n\r\n");
    }

    #[test]
    fn chunked_round_trip() {
        fn prop(parts: Vec<Vec<u8>>, chunk: u8) -> bool {
            let io = MockStream::default();
            let mut wr = BufferedWriter::new(&io);
            let mut writer = ChunkedWriter::new();
            for part in &parts {
                writer.write(&mut wr, part).unwrap();
            }
            writer.close(&mut wr).unwrap();
            wr.flush().unwrap();

            let expected: Vec<u8> = parts.concat();
            decode(&io.output(), chunk as usize + 1).unwrap() == expected
        }
        quickcheck(prop as fn(Vec<Vec<u8>>, u8) -> bool);
    }
}
