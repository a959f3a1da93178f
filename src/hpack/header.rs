use std::fmt;

use ntex_bytes::Bytes;

use super::table::entry_size;

/// Decoded header field.
#[derive(Clone, PartialEq, Eq)]
pub struct Header {
    pub name: Bytes,
    pub value: Bytes,
    /// Field was sent as never-indexed, intermediaries must not compress it
    pub sensitive: bool,
}

impl Header {
    pub fn new(name: Bytes, value: Bytes) -> Header {
        Header {
            name,
            value,
            sensitive: false,
        }
    }

    /// Size of the field as accounted for the header list size limit.
    pub fn len(&self) -> usize {
        entry_size(&self.name, &self.value)
    }

    /// Returns true for `:`-prefixed pseudo header fields.
    pub fn is_pseudo(&self) -> bool {
        self.name.first() == Some(&b':')
    }
}

impl fmt::Debug for Header {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut builder = f.debug_struct("Header");
        builder.field("name", &self.name);
        if self.sensitive {
            builder.field("value", &"Sensitive");
        } else {
            builder.field("value", &self.value);
        }
        builder.finish()
    }
}
