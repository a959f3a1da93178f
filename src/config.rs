use std::time::Duration;

use crate::{consts, frame, frame::Settings};

/// Protocol spoken on accepted connections.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Protocol {
    /// HTTP/1.0 and HTTP/1.1 only
    Http1,
    /// HTTP/2 with prior knowledge only
    Http2,
    /// Detect the HTTP/2 connection preface, fall back to HTTP/1.x
    Auto,
}

#[derive(Clone, Debug)]
/// Server connection configuration
pub struct Config {
    pub(crate) protocol: Protocol,
    pub(crate) max_line_length: usize,
    pub(crate) max_headers: usize,
    pub(crate) read_buffer_size: usize,
    pub(crate) write_buffer_size: usize,
    pub(crate) keep_alive: bool,
    pub(crate) max_requests: Option<usize>,
    pub(crate) max_drain_size: u64,
    pub(crate) read_timeout: Option<Duration>,
    /// Settings advertised in the server connection preface
    pub(crate) settings: Settings,
}

impl Default for Config {
    fn default() -> Self {
        Config::new()
    }
}

impl Config {
    /// Create configuration with default values
    pub fn new() -> Self {
        let mut settings = Settings::default();
        settings.set_header_table_size(Some(frame::DEFAULT_SETTINGS_HEADER_TABLE_SIZE as u32));
        settings.set_max_concurrent_streams(Some(consts::DEFAULT_MAX_CONCURRENT_STREAMS));
        settings.set_max_frame_size(Some(frame::DEFAULT_MAX_FRAME_SIZE));
        settings.set_max_header_list_size(Some(consts::DEFAULT_SETTINGS_MAX_HEADER_LIST_SIZE));
        settings.set_enable_push(false);

        Config {
            settings,
            protocol: Protocol::Auto,
            max_line_length: consts::DEFAULT_MAX_LINE_LENGTH,
            max_headers: consts::DEFAULT_MAX_HEADERS,
            read_buffer_size: consts::DEFAULT_READ_BUFFER_SIZE,
            write_buffer_size: consts::DEFAULT_WRITE_BUFFER_SIZE,
            keep_alive: true,
            max_requests: None,
            max_drain_size: consts::DEFAULT_MAX_DRAIN_SIZE,
            read_timeout: Some(consts::DEFAULT_READ_TIMEOUT),
        }
    }

    /// Select the protocol for accepted connections.
    ///
    /// By default the server sniffs for the HTTP/2 preface.
    pub fn set_protocol(mut self, protocol: Protocol) -> Self {
        self.protocol = protocol;
        self
    }

    /// Maximum length of a request line, header line or chunk-size line.
    ///
    /// By default value is set to 8Kb.
    pub fn set_max_line_length(mut self, max: usize) -> Self {
        self.max_line_length = max;
        self
    }

    /// Maximum number of header lines in a request.
    ///
    /// By default value is set to 100.
    pub fn set_max_headers(mut self, max: usize) -> Self {
        self.max_headers = max;
        self
    }

    /// Initial capacity of the per-connection read buffer.
    ///
    /// The buffer grows on demand up to the max line length. By default
    /// value is set to 4Kb.
    pub fn set_read_buffer_size(mut self, size: usize) -> Self {
        assert!(size > 0, "read buffer size must be positive");
        self.read_buffer_size = size;
        self
    }

    /// Amount of output buffered before it is written to the transport.
    ///
    /// By default value is set to 8Kb.
    pub fn set_write_buffer_size(mut self, size: usize) -> Self {
        self.write_buffer_size = size;
        self
    }

    /// Enable or disable HTTP/1.x keep-alive.
    pub fn set_keep_alive(mut self, enabled: bool) -> Self {
        self.keep_alive = enabled;
        self
    }

    /// Maximum number of requests served on one HTTP/1.x connection.
    pub fn set_max_requests(mut self, max: usize) -> Self {
        self.max_requests = Some(max);
        self
    }

    /// Maximum number of unread request body bytes the connection discards
    /// to stay reusable after a handler returns.
    ///
    /// Connections with larger unread bodies are closed instead. By default
    /// value is set to 64Kb.
    pub fn set_max_drain_size(mut self, size: u64) -> Self {
        self.max_drain_size = size;
        self
    }

    /// Read and write timeout applied to the transport.
    ///
    /// A stalled peer is disconnected once the timeout expires. `None`
    /// disables the timeout. By default value is set to 30 seconds.
    pub fn set_read_timeout(mut self, timeout: Option<Duration>) -> Self {
        self.read_timeout = timeout;
        self
    }

    /// Size of the HPACK dynamic table the peer may use.
    ///
    /// By default value is set to 4096.
    pub fn set_header_table_size(mut self, size: u32) -> Self {
        self.settings.set_header_table_size(Some(size));
        self
    }

    /// Indicates the size (in octets) of the largest HTTP/2 frame payload
    /// that the server is able to accept.
    ///
    /// The value **must** be between 16,384 and 16,777,215. The default value
    /// is 16,384.
    ///
    /// # Panics
    ///
    /// This function panics if `max` is not within the legal range specified
    /// above.
    pub fn set_max_frame_size(mut self, max: u32) -> Self {
        assert!(
            (frame::DEFAULT_MAX_FRAME_SIZE..=frame::MAX_MAX_FRAME_SIZE).contains(&max),
            "invalid max frame size"
        );
        self.settings.set_max_frame_size(Some(max));
        self
    }

    /// Sets the max size of received header lists.
    ///
    /// The value is based on the uncompressed size of header fields,
    /// including the length of the name and value in octets plus an overhead
    /// of 32 octets for each header field. It also bounds the amount of data
    /// buffered while CONTINUATION frames are reassembled.
    ///
    /// By default value is set to 16Kb.
    pub fn set_max_header_list_size(mut self, max: u32) -> Self {
        self.settings.set_max_header_list_size(Some(max));
        self
    }

    /// Sets the advertised maximum number of concurrent streams.
    pub fn set_max_concurrent_streams(mut self, max: u32) -> Self {
        self.settings.set_max_concurrent_streams(Some(max));
        self
    }

    /// Settings sent in the HTTP/2 server preface.
    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    pub fn protocol(&self) -> Protocol {
        self.protocol
    }

    pub fn max_line_length(&self) -> usize {
        self.max_line_length
    }

    pub(crate) fn max_header_list_size(&self) -> usize {
        self.settings
            .max_header_list_size()
            .unwrap_or(consts::DEFAULT_SETTINGS_MAX_HEADER_LIST_SIZE) as usize
    }

    pub(crate) fn max_frame_size(&self) -> u32 {
        self.settings
            .max_frame_size()
            .unwrap_or(frame::DEFAULT_MAX_FRAME_SIZE)
    }

    pub(crate) fn header_table_size(&self) -> usize {
        self.settings
            .header_table_size()
            .map(|v| v as usize)
            .unwrap_or(frame::DEFAULT_SETTINGS_HEADER_TABLE_SIZE)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_settings() {
        let cfg = Config::default();
        assert_eq!(cfg.protocol(), Protocol::Auto);
        assert_eq!(cfg.max_frame_size(), 16_384);
        assert_eq!(cfg.header_table_size(), 4096);
        assert_eq!(cfg.settings().is_push_enabled(), Some(false));
    }

    #[test]
    #[should_panic(expected = "invalid max frame size")]
    fn max_frame_size_range() {
        let _ = Config::new().set_max_frame_size(1024);
    }
}
