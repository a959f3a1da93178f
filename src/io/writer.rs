use std::{collections::VecDeque, fmt, io::IoSlice};

use ntex_bytes::{Bytes, BytesMut};

use super::StreamSource;
use crate::error::Error;

// max number of slices passed to a single writev call
const MAX_IOVECS: usize = 16;

/// Buffered writer over a [`StreamSource`].
///
/// Small writes are coalesced into a staging buffer; large `Bytes` chunks are
/// queued as-is and written with vectored I/O on flush.
pub struct BufferedWriter<'s> {
    dst: &'s dyn StreamSource,
    buf: BytesMut,
    queue: VecDeque<Bytes>,
    queued: usize,
    capacity: usize,
}

impl<'s> BufferedWriter<'s> {
    pub fn new(dst: &'s dyn StreamSource) -> Self {
        Self::with_capacity(dst, crate::consts::DEFAULT_WRITE_BUFFER_SIZE)
    }

    pub fn with_capacity(dst: &'s dyn StreamSource, capacity: usize) -> Self {
        BufferedWriter {
            dst,
            capacity,
            buf: BytesMut::with_capacity(capacity),
            queue: VecDeque::new(),
            queued: 0,
        }
    }

    /// Number of bytes waiting to be flushed.
    pub fn pending(&self) -> usize {
        self.queued + self.buf.len()
    }

    /// Buffer `data`, flushing once the high watermark is reached.
    pub fn write(&mut self, data: &[u8]) -> Result<(), Error> {
        self.buf.extend_from_slice(data);
        self.flush_if_full()
    }

    /// Queue `data` without copying when it is large.
    pub fn write_bytes(&mut self, data: Bytes) -> Result<(), Error> {
        if data.len() < self.capacity / 2 {
            return self.write(&data);
        }
        self.stage();
        self.queued += data.len();
        self.queue.push_back(data);
        self.flush_if_full()
    }

    /// Write everything buffered to the transport.
    ///
    /// Short writes are retried until the queue is empty. A transport that
    /// accepts zero bytes is treated as closed.
    pub fn flush(&mut self) -> Result<(), Error> {
        self.stage();

        while !self.queue.is_empty() {
            let n = {
                let slices: Vec<IoSlice<'_>> = self
                    .queue
                    .iter()
                    .take(MAX_IOVECS)
                    .map(|b| IoSlice::new(b))
                    .collect();
                self.dst.writev(&slices)?
            };
            if n == 0 {
                log::debug!("transport accepted zero bytes, {} pending", self.queued);
                return Err(Error::Eof);
            }
            self.consume(n);
        }
        Ok(())
    }

    /// Flush pending output and shut the transport down.
    pub fn close(&mut self) -> Result<(), Error> {
        let res = self.flush();
        self.dst.close()?;
        res
    }

    fn flush_if_full(&mut self) -> Result<(), Error> {
        if self.pending() >= self.capacity {
            self.flush()
        } else {
            Ok(())
        }
    }

    // move staged bytes to the tail of the queue
    fn stage(&mut self) {
        if !self.buf.is_empty() {
            let chunk = self.buf.split().freeze();
            self.queued += chunk.len();
            self.queue.push_back(chunk);
        }
    }

    fn consume(&mut self, mut n: usize) {
        self.queued -= n;
        while n > 0 {
            let Some(front) = self.queue.front_mut() else {
                break;
            };
            if n < front.len() {
                let _ = front.split_to(n);
                break;
            }
            n -= front.len();
            self.queue.pop_front();
        }
    }
}

impl fmt::Debug for BufferedWriter<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BufferedWriter")
            .field("pending", &self.pending())
            .field("capacity", &self.capacity)
            .finish()
    }
}
