use std::fmt;

use fxhash::FxHashMap;

use crate::error::Error;
use crate::h1::{Request, Response};

/// Request handler.
///
/// Handlers are shared between connection threads. Anything written to the
/// response is completed by the connection once `call` returns.
pub trait Handler: Send + Sync {
    fn call(&self, req: &mut Request<'_, '_>, res: &mut Response<'_, '_>);
}

impl<F> Handler for F
where
    F: Fn(&mut Request<'_, '_>, &mut Response<'_, '_>) + Send + Sync,
{
    fn call(&self, req: &mut Request<'_, '_>, res: &mut Response<'_, '_>) {
        (self)(req, res)
    }
}

/// Result of a [`HandlerMap`] lookup.
pub struct Match<'a> {
    pub handler: &'a dyn Handler,
    /// Part of the path after a wildcard prefix, empty for exact matches
    pub suffix: &'a str,
}

impl fmt::Debug for Match<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Match").field("suffix", &self.suffix).finish()
    }
}

#[derive(Default)]
struct Node {
    children: FxHashMap<u8, Node>,
    exact: Option<Box<dyn Handler>>,
    wildcard: Option<Box<dyn Handler>>,
}

/// Path to handler routing table.
///
/// Paths are stored in a byte trie. A pattern ending with `*` matches any
/// path starting with the part before the `*`.
#[derive(Default)]
pub struct HandlerMap {
    root: Node,
    len: usize,
}

impl HandlerMap {
    pub fn new() -> Self {
        HandlerMap::default()
    }

    /// Register handler for a path pattern.
    ///
    /// Registering the same pattern twice fails with
    /// [`Error::InvalidState`].
    pub fn add<H>(&mut self, pattern: &str, handler: H) -> Result<(), Error>
    where
        H: Handler + 'static,
    {
        let (path, wildcard) = match pattern.strip_suffix('*') {
            Some(prefix) => (prefix, true),
            None => (pattern, false),
        };

        let node = path
            .bytes()
            .fold(&mut self.root, |node, b| node.children.entry(b).or_default());
        let slot = if wildcard {
            &mut node.wildcard
        } else {
            &mut node.exact
        };
        if slot.is_some() {
            return Err(Error::InvalidState("handler is already registered"));
        }

        log::trace!("registered handler for {pattern:?}");
        *slot = Some(Box::new(handler));
        self.len += 1;
        Ok(())
    }

    /// Find handler for a request path.
    ///
    /// An exact match wins, otherwise the longest wildcard prefix is used.
    pub fn find<'a>(&'a self, path: &'a str) -> Option<Match<'a>> {
        let mut node = &self.root;
        let mut prefix = node.wildcard.as_deref().map(|h| (h, 0));

        for (idx, b) in path.bytes().enumerate() {
            match node.children.get(&b) {
                Some(child) => node = child,
                None => return prefix.map(|(handler, len)| matched(handler, path, len)),
            }
            if let Some(ref h) = node.wildcard {
                prefix = Some((h.as_ref(), idx + 1));
            }
        }

        match node.exact {
            Some(ref handler) => Some(Match {
                handler: handler.as_ref(),
                suffix: "",
            }),
            None => prefix.map(|(handler, len)| matched(handler, path, len)),
        }
    }

    /// Number of registered patterns.
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }
}

fn matched<'a>(handler: &'a dyn Handler, path: &'a str, len: usize) -> Match<'a> {
    Match {
        handler,
        suffix: path.get(len..).unwrap_or(""),
    }
}

impl fmt::Debug for HandlerMap {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HandlerMap").field("len", &self.len).finish()
    }
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    use ntex_bytes::ByteString;
    use ntex_http::{Method, Version};

    use super::*;
    use crate::body::{Body, InputStream};
    use crate::h1::RequestData;
    use crate::io::{testing::MockStream, BufferedReader, BufferedWriter};

    struct Tagged(usize, Arc<AtomicUsize>);

    impl Handler for Tagged {
        fn call(&self, _: &mut Request<'_, '_>, _: &mut Response<'_, '_>) {
            self.1.store(self.0, Ordering::SeqCst);
        }
    }

    // invoke matched handler, returns its tag
    fn call(map: &HandlerMap, path: &str, hit: &Arc<AtomicUsize>) -> Option<(usize, String)> {
        let m = map.find(path)?;

        let io = MockStream::default();
        let mut rd = BufferedReader::new(&io);
        let mut wr = BufferedWriter::new(&io);
        let mut input = InputStream::Null;
        let data = RequestData::new(Method::GET, ByteString::from(path), Version::HTTP_11);
        let mut req = Request::new(&data, m.suffix, Body::new(&mut input, &mut rd));
        let mut res = Response::new(&mut wr, Version::HTTP_11, false, true);

        hit.store(0, Ordering::SeqCst);
        m.handler.call(&mut req, &mut res);
        Some((hit.load(Ordering::SeqCst), m.suffix.to_string()))
    }

    fn map(hit: &Arc<AtomicUsize>) -> HandlerMap {
        let mut map = HandlerMap::new();
        map.add("abc", Tagged(1, hit.clone())).unwrap();
        map.add("ab", Tagged(2, hit.clone())).unwrap();
        map.add("a", Tagged(3, hit.clone())).unwrap();
        map.add("abc*", Tagged(4, hit.clone())).unwrap();
        map
    }

    #[test]
    fn exact_and_wildcard() {
        let hit = Arc::new(AtomicUsize::new(0));
        let map = map(&hit);
        assert_eq!(map.len(), 4);

        assert_eq!(call(&map, "abc", &hit), Some((1, String::new())));
        assert_eq!(call(&map, "ab", &hit), Some((2, String::new())));
        assert_eq!(call(&map, "a", &hit), Some((3, String::new())));
        assert_eq!(call(&map, "abcxyz", &hit), Some((4, "xyz".to_string())));
        assert!(call(&map, "abd", &hit).is_none());
        assert!(call(&map, "", &hit).is_none());
    }

    #[test]
    fn longest_prefix() {
        let hit = Arc::new(AtomicUsize::new(0));
        let mut map = HandlerMap::new();
        map.add("/*", Tagged(1, hit.clone())).unwrap();
        map.add("/static/*", Tagged(2, hit.clone())).unwrap();
        map.add("/static/index.html", Tagged(3, hit.clone())).unwrap();

        assert_eq!(call(&map, "/", &hit), Some((1, String::new())));
        assert_eq!(call(&map, "/about", &hit), Some((1, "about".to_string())));
        assert_eq!(call(&map, "/static", &hit), Some((1, "static".to_string())));
        assert_eq!(call(&map, "/static/", &hit), Some((2, String::new())));
        assert_eq!(call(&map, "/static/a.css", &hit), Some((2, "a.css".to_string())));
        assert_eq!(call(&map, "/static/index.html", &hit), Some((3, String::new())));
        assert_eq!(
            call(&map, "/static/index.htm", &hit),
            Some((2, "index.htm".to_string()))
        );
    }

    #[test]
    fn catch_all() {
        let hit = Arc::new(AtomicUsize::new(0));
        let mut map = HandlerMap::new();
        map.add("*", Tagged(7, hit.clone())).unwrap();
        assert_eq!(call(&map, "/any/path", &hit), Some((7, "/any/path".to_string())));
        assert_eq!(call(&map, "", &hit), Some((7, String::new())));
    }

    #[test]
    fn duplicates() {
        let hit = Arc::new(AtomicUsize::new(0));
        let mut map = map(&hit);
        assert!(matches!(
            map.add("abc", Tagged(5, hit.clone())),
            Err(Error::InvalidState(_))
        ));
        assert!(matches!(
            map.add("abc*", Tagged(5, hit.clone())),
            Err(Error::InvalidState(_))
        ));
        map.add("ab*", Tagged(5, hit.clone())).unwrap();
        assert_eq!(call(&map, "abd", &hit), Some((5, "d".to_string())));
        assert_eq!(call(&map, "abc", &hit), Some((1, String::new())));
    }

    #[test]
    fn closures() {
        let mut map = HandlerMap::new();
        map.add("/", |_: &mut Request<'_, '_>, res: &mut Response<'_, '_>| {
            res.write(b"root").unwrap();
        })
        .unwrap();
        assert!(map.find("/").is_some());
        assert!(map.find("/x").is_none());
        assert!(!map.is_empty());
    }
}
