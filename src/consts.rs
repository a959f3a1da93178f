use std::time::Duration;

pub(crate) const PREFACE: [u8; 24] = *b"PRI * HTTP/2.0\r\n\r\nSM\r\n\r\n";

pub const DEFAULT_MAX_LINE_LENGTH: usize = 8 * 1024;
pub const DEFAULT_MAX_HEADERS: usize = 100;
pub const DEFAULT_READ_BUFFER_SIZE: usize = 4 * 1024;
pub const DEFAULT_WRITE_BUFFER_SIZE: usize = 8 * 1024;
pub const DEFAULT_MAX_DRAIN_SIZE: u64 = 64 * 1024;
pub const DEFAULT_READ_TIMEOUT: Duration = Duration::from_secs(30);

pub const DEFAULT_MAX_CONCURRENT_STREAMS: u32 = 256;
// 16 KiB of uncompressed header fields per block
pub const DEFAULT_SETTINGS_MAX_HEADER_LIST_SIZE: u32 = 16 * 1024;
