//! Transport abstraction and buffered I/O primitives.
//!
//! The protocol layer never touches sockets directly. It talks to a
//! [`StreamSource`], through a [`BufferedReader`] for input and a
//! [`BufferedWriter`] for output. Both hold a shared, non-owning reference to
//! the source, so the methods of the trait take `&self` the same way
//! `Read for &TcpStream` does.
use std::io::{self, IoSlice, IoSliceMut};
use std::time::Duration;

mod reader;
mod writer;

pub use self::reader::BufferedReader;
pub use self::writer::BufferedWriter;

/// Byte-stream transport consumed by the connection state machines.
pub trait StreamSource {
    /// Read into `buf`, `Ok(0)` signals end of stream.
    fn read(&self, buf: &mut [u8]) -> io::Result<usize>;

    /// Scatter read into `bufs`, filled in order.
    fn readv(&self, bufs: &mut [IoSliceMut<'_>]) -> io::Result<usize> {
        match bufs.iter_mut().find(|b| !b.is_empty()) {
            Some(buf) => self.read(buf),
            None => Ok(0),
        }
    }

    /// Write from `buf`, returns number of bytes accepted by the transport.
    fn write(&self, buf: &[u8]) -> io::Result<usize>;

    /// Gather write of `bufs`, in order.
    fn writev(&self, bufs: &[IoSlice<'_>]) -> io::Result<usize> {
        match bufs.iter().find(|b| !b.is_empty()) {
            Some(buf) => self.write(buf),
            None => Ok(0),
        }
    }

    /// Shut the transport down.
    fn close(&self) -> io::Result<()>;

    /// Bound every blocking read and write with a deadline.
    fn set_timeout(&self, timeout: Option<Duration>) -> io::Result<()> {
        let _ = timeout;
        Ok(())
    }
}

/// Source of incoming connections.
pub trait Acceptor {
    type Stream: StreamSource + Send + 'static;

    /// Wait for the next connection.
    fn accept(&self) -> io::Result<Self::Stream>;
}

macro_rules! socket_stream_source {
    ($ty:ty) => {
        impl StreamSource for $ty {
            fn read(&self, buf: &mut [u8]) -> io::Result<usize> {
                io::Read::read(&mut &*self, buf)
            }

            fn readv(&self, bufs: &mut [IoSliceMut<'_>]) -> io::Result<usize> {
                io::Read::read_vectored(&mut &*self, bufs)
            }

            fn write(&self, buf: &[u8]) -> io::Result<usize> {
                io::Write::write(&mut &*self, buf)
            }

            fn writev(&self, bufs: &[IoSlice<'_>]) -> io::Result<usize> {
                io::Write::write_vectored(&mut &*self, bufs)
            }

            fn close(&self) -> io::Result<()> {
                match self.shutdown(std::net::Shutdown::Both) {
                    Err(e) if e.kind() != io::ErrorKind::NotConnected => Err(e),
                    _ => Ok(()),
                }
            }

            fn set_timeout(&self, timeout: Option<Duration>) -> io::Result<()> {
                self.set_read_timeout(timeout)?;
                self.set_write_timeout(timeout)
            }
        }
    };
}

socket_stream_source!(std::net::TcpStream);
#[cfg(unix)]
socket_stream_source!(std::os::unix::net::UnixStream);

impl Acceptor for std::net::TcpListener {
    type Stream = std::net::TcpStream;

    fn accept(&self) -> io::Result<Self::Stream> {
        let (stream, peer) = std::net::TcpListener::accept(self)?;
        log::trace!("accepted connection from {peer}");
        let _ = stream.set_nodelay(true);
        Ok(stream)
    }
}

#[cfg(unix)]
impl Acceptor for std::os::unix::net::UnixListener {
    type Stream = std::os::unix::net::UnixStream;

    fn accept(&self) -> io::Result<Self::Stream> {
        let (stream, _) = std::os::unix::net::UnixListener::accept(self)?;
        Ok(stream)
    }
}

#[cfg(test)]
pub(crate) mod testing {
    use std::cell::{Cell, RefCell};
    use std::collections::VecDeque;

    use super::*;

    /// In-memory transport: input is delivered in chunks, output is captured.
    #[derive(Default)]
    pub(crate) struct MockStream {
        input: RefCell<VecDeque<Vec<u8>>>,
        output: RefCell<Vec<u8>>,
        // upper bound of bytes accepted per write call
        write_limit: Cell<Option<usize>>,
        pub(crate) reads: Cell<usize>,
        pub(crate) closed: Cell<bool>,
    }

    impl MockStream {
        pub(crate) fn new(input: &[u8]) -> Self {
            Self::chunked(input, input.len().max(1))
        }

        pub(crate) fn chunked(input: &[u8], size: usize) -> Self {
            let stream = MockStream::default();
            stream
                .input
                .borrow_mut()
                .extend(input.chunks(size).map(|c| c.to_vec()));
            stream
        }

        pub(crate) fn set_write_limit(&self, limit: usize) {
            self.write_limit.set(Some(limit));
        }

        pub(crate) fn output(&self) -> Vec<u8> {
            self.output.borrow().clone()
        }
    }

    impl StreamSource for MockStream {
        fn read(&self, buf: &mut [u8]) -> io::Result<usize> {
            self.readv(&mut [IoSliceMut::new(buf)])
        }

        fn readv(&self, bufs: &mut [IoSliceMut<'_>]) -> io::Result<usize> {
            self.reads.set(self.reads.get() + 1);
            let mut input = self.input.borrow_mut();
            let Some(mut chunk) = input.pop_front() else {
                return Ok(0);
            };
            let mut n = 0;
            for buf in bufs.iter_mut() {
                let len = buf.len().min(chunk.len() - n);
                buf[..len].copy_from_slice(&chunk[n..n + len]);
                n += len;
            }
            if n < chunk.len() {
                input.push_front(chunk.split_off(n));
            }
            Ok(n)
        }

        fn write(&self, buf: &[u8]) -> io::Result<usize> {
            let n = self.write_limit.get().map_or(buf.len(), |l| l.min(buf.len()));
            self.output.borrow_mut().extend_from_slice(&buf[..n]);
            Ok(n)
        }

        fn writev(&self, bufs: &[IoSlice<'_>]) -> io::Result<usize> {
            let mut limit = self.write_limit.get().unwrap_or(usize::MAX);
            let mut n = 0;
            for buf in bufs {
                let len = buf.len().min(limit);
                self.output.borrow_mut().extend_from_slice(&buf[..len]);
                n += len;
                limit -= len;
                if limit == 0 {
                    break;
                }
            }
            Ok(n)
        }

        fn close(&self) -> io::Result<()> {
            self.closed.set(true);
            Ok(())
        }
    }
}
