#![allow(dead_code)]
use std::collections::VecDeque;
use std::io::{self, IoSlice};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};

use ntex_httpd::StreamSource;

mod utils;

pub use self::utils::*;

pub fn init_log() {
    let _ = env_logger::try_init();
}

/// Output side of a [`MockStream`], shared with the test.
#[derive(Clone, Default)]
pub struct Output {
    data: Arc<Mutex<Vec<u8>>>,
    closed: Arc<AtomicBool>,
}

impl Output {
    pub fn bytes(&self) -> Vec<u8> {
        self.data.lock().unwrap().clone()
    }

    pub fn text(&self) -> String {
        String::from_utf8(self.bytes()).unwrap()
    }

    pub fn is_closed(&self) -> bool {
        self.closed.load(Ordering::Acquire)
    }
}

/// In-memory transport, input is delivered in fixed size chunks.
pub struct MockStream {
    input: Mutex<VecDeque<Vec<u8>>>,
    out: Output,
}

impl MockStream {
    pub fn new(input: &[u8]) -> Self {
        MockStream::chunked(input, input.len().max(1))
    }

    pub fn chunked(input: &[u8], size: usize) -> Self {
        MockStream::with_chunks(input.chunks(size.max(1)).map(|c| c.to_vec()))
    }

    pub fn with_chunks<I: IntoIterator<Item = Vec<u8>>>(chunks: I) -> Self {
        MockStream {
            input: Mutex::new(chunks.into_iter().collect()),
            out: Output::default(),
        }
    }

    pub fn output(&self) -> Output {
        self.out.clone()
    }
}

impl StreamSource for MockStream {
    fn read(&self, buf: &mut [u8]) -> io::Result<usize> {
        let mut input = self.input.lock().unwrap();
        let Some(mut chunk) = input.pop_front() else {
            return Ok(0);
        };
        let n = buf.len().min(chunk.len());
        buf[..n].copy_from_slice(&chunk[..n]);
        if n < chunk.len() {
            input.push_front(chunk.split_off(n));
        }
        Ok(n)
    }

    fn write(&self, buf: &[u8]) -> io::Result<usize> {
        self.out.data.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn writev(&self, bufs: &[IoSlice<'_>]) -> io::Result<usize> {
        let mut data = self.out.data.lock().unwrap();
        Ok(bufs.iter().fold(0, |n, buf| {
            data.extend_from_slice(buf);
            n + buf.len()
        }))
    }

    fn close(&self) -> io::Result<()> {
        self.out.closed.store(true, Ordering::Release);
        Ok(())
    }
}
