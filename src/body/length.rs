use std::cmp;

use crate::error::Error;
use crate::io::{BufferedReader, BufferedWriter};

/// Request body delimited by `Content-Length`.
#[derive(Debug, Clone, Copy)]
pub struct ContentLengthReader {
    remaining: u64,
}

impl ContentLengthReader {
    pub fn new(length: u64) -> Self {
        ContentLengthReader { remaining: length }
    }

    pub fn remaining(&self) -> u64 {
        self.remaining
    }

    pub fn read(&mut self, rd: &mut BufferedReader<'_>, dst: &mut [u8]) -> Result<usize, Error> {
        if self.remaining == 0 || dst.is_empty() {
            return Ok(0);
        }

        let len = cmp::min(self.remaining, dst.len() as u64) as usize;
        let n = rd.read(&mut dst[..len])?;
        if n == 0 {
            log::debug!("peer closed with {} body bytes outstanding", self.remaining);
            return Err(Error::Eof);
        }
        self.remaining -= n as u64;
        Ok(n)
    }

    /// Discard the rest of the body if it is at most `limit` bytes.
    pub fn drain(&mut self, rd: &mut BufferedReader<'_>, limit: u64) -> Result<bool, Error> {
        if self.remaining > limit {
            return Ok(false);
        }
        rd.skip(self.remaining)?;
        self.remaining = 0;
        Ok(true)
    }
}

/// Response body with a declared `Content-Length`.
///
/// Exactly the declared number of bytes must be written.
#[derive(Debug, Clone, Copy)]
pub struct ContentLengthWriter {
    remaining: u64,
}

impl ContentLengthWriter {
    pub fn new(length: u64) -> Self {
        ContentLengthWriter { remaining: length }
    }

    pub fn remaining(&self) -> u64 {
        self.remaining
    }

    pub fn write(&mut self, wr: &mut BufferedWriter<'_>, data: &[u8]) -> Result<(), Error> {
        if data.len() as u64 > self.remaining {
            return Err(Error::InvalidState("response body exceeds content-length"));
        }
        wr.write(data)?;
        self.remaining -= data.len() as u64;
        Ok(())
    }

    pub fn close(&mut self) -> Result<(), Error> {
        if self.remaining != 0 {
            Err(Error::InvalidState("response body shorter than content-length"))
        } else {
            Ok(())
        }
    }
}

#[cfg(test)]
mod tests {
    use quickcheck::{quickcheck, TestResult};

    use super::*;
    use crate::io::testing::MockStream;

    fn read_all(body: &[u8], extra: &[u8], chunk: usize, buf_size: usize) -> Vec<u8> {
        let mut wire = body.to_vec();
        wire.extend_from_slice(extra);
        let io = MockStream::chunked(&wire, chunk);
        let mut rd = BufferedReader::with_capacity(&io, 16);
        let mut reader = ContentLengthReader::new(body.len() as u64);

        let mut out = Vec::new();
        let mut buf = vec![0; buf_size];
        loop {
            let n = reader.read(&mut rd, &mut buf).unwrap();
            if n == 0 {
                break;
            }
            out.extend_from_slice(&buf[..n]);
        }
        out
    }

    #[test]
    fn exact_length_then_eof() {
        assert_eq!(read_all(b"hello", b"GET / HTTP/1.1\r\n", 2, 3), b"hello");
        assert_eq!(read_all(b"", b"trailing", 4, 4), b"");
    }

    #[test]
    fn truncated_body() {
        let io = MockStream::new(b"abc");
        let mut rd = BufferedReader::new(&io);
        let mut reader = ContentLengthReader::new(10);
        let mut buf = [0; 16];
        assert_eq!(reader.read(&mut rd, &mut buf).unwrap(), 3);
        assert!(matches!(reader.read(&mut rd, &mut buf), Err(Error::Eof)));
    }

    #[test]
    fn drain_within_limit() {
        let io = MockStream::chunked(b"0123456789next", 3);
        let mut rd = BufferedReader::with_capacity(&io, 4);
        let mut reader = ContentLengthReader::new(10);
        assert!(!reader.drain(&mut rd, 5).unwrap());
        assert!(reader.drain(&mut rd, 10).unwrap());
        assert_eq!(&rd.read_fixed_length(4).unwrap()[..], b"next");
    }

    #[test]
    fn writer_enforces_length() {
        let io = MockStream::default();
        let mut wr = BufferedWriter::new(&io);
        let mut writer = ContentLengthWriter::new(5);
        writer.write(&mut wr, b"abc").unwrap();
        assert!(matches!(writer.close(), Err(Error::InvalidState(_))));
        assert!(matches!(
            writer.write(&mut wr, b"def"),
            Err(Error::InvalidState(_))
        ));
        writer.write(&mut wr, b"de").unwrap();
        writer.close().unwrap();
        wr.flush().unwrap();
        assert_eq!(io.output(), b"abcde");
    }

    #[test]
    fn length_reader_any_read_size() {
        fn prop(body: Vec<u8>, extra: Vec<u8>, chunk: u8, buf_size: u8) -> TestResult {
            if chunk == 0 || buf_size == 0 {
                return TestResult::discard();
            }
            let out = read_all(&body, &extra, chunk as usize, buf_size as usize);
            TestResult::from_bool(out == body)
        }
        quickcheck(prop as fn(Vec<u8>, Vec<u8>, u8, u8) -> TestResult);
    }
}
