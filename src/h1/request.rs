use std::{fmt, ops};

use ntex_bytes::ByteString;
use ntex_http::{Method, Version};

use crate::body::Body;

/// Request head: request line and header fields.
///
/// Header fields are kept in arrival order, repeated fields stay separate
/// entries. Name lookups are ASCII case-insensitive.
#[derive(Clone)]
pub struct RequestData {
    version: Version,
    method: Method,
    target: ByteString,
    headers: Vec<(ByteString, ByteString)>,
}

impl Default for RequestData {
    fn default() -> Self {
        RequestData {
            version: Version::HTTP_11,
            method: Method::GET,
            target: ByteString::from_static(""),
            headers: Vec::new(),
        }
    }
}

impl RequestData {
    pub fn new(method: Method, target: ByteString, version: Version) -> Self {
        RequestData {
            method,
            target,
            version,
            headers: Vec::new(),
        }
    }

    #[inline]
    pub fn version(&self) -> Version {
        self.version
    }

    #[inline]
    pub fn method(&self) -> &Method {
        &self.method
    }

    /// Request target as sent by the client.
    #[inline]
    pub fn target(&self) -> &str {
        &self.target
    }

    /// Path part of the request target, up to `?`.
    pub fn path(&self) -> &str {
        match self.target.find('?') {
            Some(idx) => &self.target[..idx],
            None => &self.target,
        }
    }

    /// Query string without the leading `?`.
    pub fn query(&self) -> Option<&str> {
        self.target.find('?').map(|idx| &self.target[idx + 1..])
    }

    /// First value of the named header.
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(n, _)| n.eq_ignore_ascii_case(name))
            .map(|(_, v)| &v[..])
    }

    /// All values of the named header, in arrival order.
    pub fn header_all<'a>(&'a self, name: &'a str) -> impl Iterator<Item = &'a str> + 'a {
        self.headers
            .iter()
            .filter(move |(n, _)| n.eq_ignore_ascii_case(name))
            .map(|(_, v)| &v[..])
    }

    /// Checks if a comma separated header contains `token`.
    pub fn has_token(&self, name: &str, token: &str) -> bool {
        self.header_all(name)
            .flat_map(|v| v.split(','))
            .any(|t| t.trim().eq_ignore_ascii_case(token))
    }

    pub fn headers(&self) -> impl Iterator<Item = (&str, &str)> {
        self.headers.iter().map(|(n, v)| (&n[..], &v[..]))
    }

    pub fn headers_len(&self) -> usize {
        self.headers.len()
    }

    pub fn add_header(&mut self, name: ByteString, value: ByteString) {
        self.headers.push((name, value));
    }

    /// Append an obs-fold continuation to the last header value.
    pub(crate) fn extend_last_header(&mut self, cont: &str) -> bool {
        match self.headers.last_mut() {
            Some((_, value)) => {
                *value = ByteString::from(format!("{} {}", &value[..], cont));
                true
            }
            None => false,
        }
    }

    pub(crate) fn set_request_line(&mut self, method: Method, target: ByteString, version: Version) {
        self.method = method;
        self.target = target;
        self.version = version;
    }

    /// Reset for the next request on the connection.
    pub(crate) fn clear(&mut self) {
        self.headers.clear();
        self.target = ByteString::from_static("");
        self.method = Method::GET;
        self.version = Version::HTTP_11;
    }
}

impl fmt::Debug for RequestData {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "\nRequestData {:?} {}:{}", self.version, self.method, self.target)?;
        writeln!(f, "  headers:")?;
        for (key, val) in self.headers.iter() {
            writeln!(f, "    {key:?}: {val:?}")?;
        }
        Ok(())
    }
}

/// Request handed to a [`Handler`](crate::Handler).
///
/// Dereferences to the [`RequestData`] head; the body is read through
/// [`Request::body`].
pub struct Request<'a, 's> {
    data: &'a RequestData,
    suffix: &'a str,
    body: Body<'a, 's>,
}

impl<'a, 's> Request<'a, 's> {
    pub(crate) fn new(data: &'a RequestData, suffix: &'a str, body: Body<'a, 's>) -> Self {
        Request { data, suffix, body }
    }

    /// Part of the path matched by a trailing `*` handler pattern.
    ///
    /// Empty for exact matches.
    pub fn path_suffix(&self) -> &str {
        self.suffix
    }

    pub fn data(&self) -> &RequestData {
        self.data
    }

    /// Request body reader.
    pub fn body(&mut self) -> &mut Body<'a, 's> {
        &mut self.body
    }
}

impl ops::Deref for Request<'_, '_> {
    type Target = RequestData;

    fn deref(&self) -> &RequestData {
        self.data
    }
}

impl fmt::Debug for Request<'_, '_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Request")
            .field("method", &self.data.method)
            .field("target", &self.data.target)
            .field("suffix", &self.suffix)
            .finish()
    }
}
