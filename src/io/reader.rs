use std::{cmp, fmt, io::IoSliceMut};

use ntex_bytes::{Bytes, BytesMut};

use super::StreamSource;
use crate::error::Error;

/// Buffered reader over a [`StreamSource`].
///
/// Unconsumed input lives in a `BytesMut`; consumed bytes are split off the
/// front, so lines and fixed-length blocks are handed out as zero-copy
/// [`Bytes`]. The reader tracks a logical capacity which bounds how much is
/// requested from the transport at once. Capacity grows only when a line does
/// not fit.
pub struct BufferedReader<'s> {
    src: &'s dyn StreamSource,
    buf: BytesMut,
    capacity: usize,
    eof: bool,
}

impl<'s> BufferedReader<'s> {
    pub fn new(src: &'s dyn StreamSource) -> Self {
        Self::with_capacity(src, crate::consts::DEFAULT_READ_BUFFER_SIZE)
    }

    pub fn with_capacity(src: &'s dyn StreamSource, capacity: usize) -> Self {
        let capacity = cmp::max(capacity, 1);
        BufferedReader {
            src,
            capacity,
            buf: BytesMut::with_capacity(capacity),
            eof: false,
        }
    }

    /// Current logical buffer capacity.
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Buffered, not yet consumed bytes.
    pub fn buffer(&self) -> &[u8] {
        &self.buf
    }

    /// Returns true once the transport reported end of stream.
    pub fn is_eof(&self) -> bool {
        self.eof
    }

    /// Read up to `dst.len()` bytes.
    ///
    /// Buffered data is returned first. With an empty buffer a single
    /// vectored read fills `dst` and the internal buffer at once; anything
    /// that does not fit into `dst` is kept for subsequent calls. Returns
    /// `Ok(0)` at end of stream.
    pub fn read(&mut self, dst: &mut [u8]) -> Result<usize, Error> {
        if dst.is_empty() {
            return Ok(0);
        }

        if !self.buf.is_empty() {
            let n = cmp::min(dst.len(), self.buf.len());
            dst[..n].copy_from_slice(&self.buf[..n]);
            let _ = self.buf.split_to(n);
            return Ok(n);
        }

        if self.eof {
            return Ok(0);
        }

        let len = dst.len();
        self.buf.resize(self.capacity, 0);
        let res = {
            let mut bufs = [IoSliceMut::new(dst), IoSliceMut::new(&mut self.buf)];
            self.src.readv(&mut bufs)
        };
        match res {
            Ok(0) => {
                self.buf.clear();
                self.eof = true;
                Ok(0)
            }
            Ok(n) if n <= len => {
                self.buf.clear();
                Ok(n)
            }
            Ok(n) => {
                self.buf.truncate(n - len);
                Ok(len)
            }
            Err(e) => {
                self.buf.clear();
                Err(e.into())
            }
        }
    }

    /// Read one line terminated by `\n` or `\r\n`, without the terminator.
    ///
    /// A `\r` is stripped only when immediately followed by `\n`. If no
    /// terminator fits into the buffer, capacity doubles (or jumps to
    /// `max_length + 2`), and a line longer than `max_length` fails with
    /// [`Error::LineTooLong`]. At end of stream unterminated leftover data is
    /// returned as the final line; with nothing buffered the result is
    /// [`Error::Eof`].
    pub fn read_line(&mut self, max_length: usize) -> Result<Bytes, Error> {
        let limit = max_length.saturating_add(2);
        let mut scanned = 0;

        loop {
            if let Some(pos) = self.buf[scanned..].iter().position(|b| *b == b'\n') {
                let end = scanned + pos;
                let len = if end > 0 && self.buf[end - 1] == b'\r' {
                    end - 1
                } else {
                    end
                };
                if len > max_length {
                    return Err(Error::LineTooLong);
                }
                let mut line = self.buf.split_to(end + 1);
                line.truncate(len);
                return Ok(line.freeze());
            }
            scanned = self.buf.len();
            if scanned >= limit {
                return Err(Error::LineTooLong);
            }

            if self.eof {
                return if self.buf.is_empty() {
                    Err(Error::Eof)
                } else if self.buf.len() > max_length {
                    Err(Error::LineTooLong)
                } else {
                    Ok(self.buf.split().freeze())
                };
            }

            if self.buf.len() >= self.capacity {
                let grown = self.capacity.saturating_mul(2);
                self.capacity = if grown > max_length { limit } else { grown };
                log::trace!("line buffer grown to {}B", self.capacity);
            }

            self.fill()?;
        }
    }

    /// Read exactly `n` bytes, fails with [`Error::Eof`] if the stream ends
    /// first.
    pub fn read_fixed_length(&mut self, n: usize) -> Result<Bytes, Error> {
        while self.buf.len() < n {
            if self.fill_to(n)? == 0 {
                return Err(Error::Eof);
            }
        }
        Ok(self.buf.split_to(n).freeze())
    }

    /// Discard `n` bytes of input.
    pub fn skip(&mut self, mut n: u64) -> Result<(), Error> {
        loop {
            let len = cmp::min(n, self.buf.len() as u64) as usize;
            let _ = self.buf.split_to(len);
            n -= len as u64;
            if n == 0 {
                return Ok(());
            }
            if self.fill()? == 0 {
                return Err(Error::Eof);
            }
        }
    }

    /// Pull more data from the transport without consuming anything.
    ///
    /// Returns the number of bytes added, `0` at end of stream.
    pub fn fill(&mut self) -> Result<usize, Error> {
        let want = cmp::max(self.capacity.saturating_sub(self.buf.len()), 1);
        self.fill_to(self.buf.len() + want)
    }

    fn fill_to(&mut self, size: usize) -> Result<usize, Error> {
        if self.eof {
            return Ok(0);
        }

        let len = self.buf.len();
        let size = cmp::max(size, self.capacity);
        self.buf.resize(size, 0);
        match self.src.read(&mut self.buf[len..]) {
            Ok(n) => {
                self.buf.truncate(len + n);
                if n == 0 {
                    self.eof = true;
                }
                Ok(n)
            }
            Err(e) => {
                self.buf.truncate(len);
                Err(e.into())
            }
        }
    }
}

impl fmt::Debug for BufferedReader<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BufferedReader")
            .field("buffered", &self.buf.len())
            .field("capacity", &self.capacity)
            .field("eof", &self.eof)
            .finish()
    }
}
