use std::{collections::VecDeque, fmt};

use ntex_bytes::Bytes;

/// Per-entry overhead added to `name.len() + value.len()`.
pub const ENTRY_OVERHEAD: usize = 32;

/// Number of entries in the static table.
pub const STATIC_TABLE_LEN: usize = 61;

/// Predefined header fields, addressed by indices `1..=61`.
pub static STATIC_TABLE: [(&str, &str); STATIC_TABLE_LEN] = [
    (":authority", ""),
    (":method", "GET"),
    (":method", "POST"),
    (":path", "/"),
    (":path", "/index.html"),
    (":scheme", "http"),
    (":scheme", "https"),
    (":status", "200"),
    (":status", "204"),
    (":status", "206"),
    (":status", "304"),
    (":status", "400"),
    (":status", "404"),
    (":status", "500"),
    ("accept-charset", ""),
    ("accept-encoding", "gzip, deflate"),
    ("accept-language", ""),
    ("accept-ranges", ""),
    ("accept", ""),
    ("access-control-allow-origin", ""),
    ("age", ""),
    ("allow", ""),
    ("authorization", ""),
    ("cache-control", ""),
    ("content-disposition", ""),
    ("content-encoding", ""),
    ("content-language", ""),
    ("content-length", ""),
    ("content-location", ""),
    ("content-range", ""),
    ("content-type", ""),
    ("cookie", ""),
    ("date", ""),
    ("etag", ""),
    ("expect", ""),
    ("expires", ""),
    ("from", ""),
    ("host", ""),
    ("if-match", ""),
    ("if-modified-since", ""),
    ("if-none-match", ""),
    ("if-range", ""),
    ("if-unmodified-since", ""),
    ("last-modified", ""),
    ("link", ""),
    ("location", ""),
    ("max-forwards", ""),
    ("proxy-authenticate", ""),
    ("proxy-authorization", ""),
    ("range", ""),
    ("referer", ""),
    ("refresh", ""),
    ("retry-after", ""),
    ("server", ""),
    ("set-cookie", ""),
    ("strict-transport-security", ""),
    ("transfer-encoding", ""),
    ("user-agent", ""),
    ("vary", ""),
    ("via", ""),
    ("www-authenticate", ""),
];

/// Size of an entry as accounted against the table limit.
pub fn entry_size(name: &[u8], value: &[u8]) -> usize {
    name.len() + value.len() + ENTRY_OVERHEAD
}

/// HPACK header table, static entries followed by the dynamic ones.
///
/// The dynamic part keeps the newest entry at the front, so dynamic index
/// `62` always refers to the most recent insertion.
#[derive(Clone)]
pub struct Table {
    entries: VecDeque<(Bytes, Bytes)>,
    size: usize,
    max_size: usize,
}

impl Table {
    pub fn new(max_size: usize) -> Table {
        Table {
            max_size,
            size: 0,
            entries: VecDeque::new(),
        }
    }

    /// Number of dynamic entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Accounted size of the dynamic entries.
    pub fn size(&self) -> usize {
        self.size
    }

    pub fn max_size(&self) -> usize {
        self.max_size
    }

    /// Look up an entry by its HPACK index.
    ///
    /// Index `0` is never valid.
    pub fn get(&self, index: usize) -> Option<(Bytes, Bytes)> {
        match index {
            0 => None,
            1..=STATIC_TABLE_LEN => {
                let (name, value) = STATIC_TABLE[index - 1];
                Some((Bytes::from_static(name.as_bytes()), Bytes::from_static(value.as_bytes())))
            }
            _ => self.entries.get(index - STATIC_TABLE_LEN - 1).cloned(),
        }
    }

    /// Insert an entry, evicting the oldest ones until it fits.
    ///
    /// An entry larger than the whole table is rejected and the table is left
    /// untouched.
    pub fn add(&mut self, name: Bytes, value: Bytes) -> bool {
        let len = entry_size(&name, &value);
        if len > self.max_size {
            log::trace!("hpack entry of {len}B exceeds table size {}", self.max_size);
            return false;
        }

        self.evict(self.max_size - len);
        self.size += len;
        self.entries.push_front((name, value));
        true
    }

    /// Change the maximum size, evicting entries as needed.
    pub fn resize(&mut self, max_size: usize) {
        self.evict(max_size);
        self.max_size = max_size;
    }

    // evict oldest entries until the size is within `limit`
    fn evict(&mut self, limit: usize) {
        while self.size > limit {
            match self.entries.pop_back() {
                Some((name, value)) => self.size -= entry_size(&name, &value),
                None => break,
            }
        }
    }
}

impl fmt::Debug for Table {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Table")
            .field("entries", &self.entries.len())
            .field("size", &self.size)
            .field("max_size", &self.max_size)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use quickcheck::quickcheck;

    use super::*;

    fn entry(name: &'static str, value: &'static str) -> (Bytes, Bytes) {
        (Bytes::from_static(name.as_bytes()), Bytes::from_static(value.as_bytes()))
    }

    #[test]
    fn static_entries() {
        let table = Table::new(4096);
        assert!(table.get(0).is_none());
        assert_eq!(table.get(2).unwrap(), entry(":method", "GET"));
        assert_eq!(table.get(16).unwrap(), entry("accept-encoding", "gzip, deflate"));
        assert_eq!(table.get(61).unwrap(), entry("www-authenticate", ""));
        assert!(table.get(62).is_none());
    }

    #[test]
    fn dynamic_indices() {
        let mut table = Table::new(4096);
        let (n, v) = entry("first", "1");
        assert!(table.add(n, v));
        let (n, v) = entry("second", "2");
        assert!(table.add(n, v));

        assert_eq!(table.get(62).unwrap(), entry("second", "2"));
        assert_eq!(table.get(63).unwrap(), entry("first", "1"));
        assert!(table.get(64).is_none());
        assert_eq!(table.size(), 6 + 1 + 32 + 5 + 1 + 32);
    }

    #[test]
    fn evicts_oldest() {
        // room for two 40 byte entries
        let mut table = Table::new(80);
        for name in ["aaaa", "bbbb", "cccc"] {
            let (n, v) = entry(name, "1234");
            assert!(table.add(n, v));
        }
        assert_eq!(table.len(), 2);
        assert_eq!(&table.get(62).unwrap().0[..], b"cccc");
        assert_eq!(&table.get(63).unwrap().0[..], b"bbbb");

        table.resize(40);
        assert_eq!(table.len(), 1);
        assert_eq!(&table.get(62).unwrap().0[..], b"cccc");

        table.resize(0);
        assert!(table.is_empty());
        assert_eq!(table.size(), 0);
    }

    #[test]
    fn oversized_entry_rejected() {
        let mut table = Table::new(40);
        let (n, v) = entry("name", "1234");
        assert!(table.add(n, v));

        let (n, v) = entry("name", "12345");
        assert!(!table.add(n, v));
        // nothing evicted
        assert_eq!(table.len(), 1);
        assert_eq!(table.size(), 40);
    }

    #[test]
    fn size_invariant() {
        fn prop(max_size: u16, ops: Vec<(u8, u8)>) -> bool {
            let max_size = max_size as usize % 512;
            let mut table = Table::new(max_size);
            for (name_len, value_len) in ops {
                let name = Bytes::from(vec![b'n'; name_len as usize]);
                let value = Bytes::from(vec![b'v'; value_len as usize]);
                let before = table.len();
                let fits = entry_size(&name, &value) <= max_size;
                if table.add(name, value) != fits {
                    return false;
                }
                if !fits && table.len() != before {
                    return false;
                }
                let sum: usize = (62..62 + table.len())
                    .filter_map(|idx| table.get(idx))
                    .map(|(n, v)| entry_size(&n, &v))
                    .sum();
                if sum != table.size() || table.size() > table.max_size() {
                    return false;
                }
            }
            true
        }
        quickcheck(prop as fn(u16, Vec<(u8, u8)>) -> bool);
    }
}
