mod support;

use std::io::Read;

use ntex_httpd::h1::{HttpConnection, State};
use ntex_httpd::{Config, Error, HandlerMap, Request, Response, StatusCode};
use rand::Rng;

use support::{init_log, MockStream, Output};

fn handlers() -> HandlerMap {
    let mut map = HandlerMap::new();
    map.add("/hello", |_: &mut Request<'_, '_>, res: &mut Response<'_, '_>| {
        res.add_header("Content-Type", "text/plain").unwrap();
        res.write(b"hello").unwrap();
    })
    .unwrap();

    map.add("/echo", |req: &mut Request<'_, '_>, res: &mut Response<'_, '_>| {
        let mut body = Vec::new();
        if req.body().read_to_end(&mut body).is_err() {
            res.set_status(StatusCode::BAD_REQUEST).unwrap();
            return;
        }
        res.write(&body).unwrap();
    })
    .unwrap();

    map.add("/lenient", |req: &mut Request<'_, '_>, res: &mut Response<'_, '_>| {
        let mut body = Vec::new();
        let ok = req.body().read_to_end(&mut body).is_ok();
        res.write(format!("read:{ok}").as_bytes()).unwrap();
    })
    .unwrap();

    map.add("/stream", |req: &mut Request<'_, '_>, res: &mut Response<'_, '_>| {
        let parts: usize = req.query().and_then(|q| q.parse().ok()).unwrap_or(1);
        let mut out = res.output_stream().unwrap();
        for idx in 0..parts {
            out.write_all(format!("part{idx};").as_bytes()).unwrap();
        }
    })
    .unwrap();

    map.add("/files/*", |req: &mut Request<'_, '_>, res: &mut Response<'_, '_>| {
        let suffix = req.path_suffix().to_string();
        res.write(suffix.as_bytes()).unwrap();
    })
    .unwrap();

    map.add("/status", |_: &mut Request<'_, '_>, res: &mut Response<'_, '_>| {
        res.set_status(StatusCode::CREATED).unwrap();
        res.set_reason("Made It").unwrap();
        res.add_header("Content-Length", "2").unwrap();
        res.write(b"ok").unwrap();
    })
    .unwrap();
    map
}

fn serve_with(input: &[u8], chunk: usize, config: &Config) -> (Result<(), Error>, Output) {
    init_log();
    let map = handlers();
    let io = MockStream::chunked(input, chunk);
    let mut conn = HttpConnection::new(&io, &map, config);
    let result = conn.run();
    assert_eq!(conn.state(), State::Closed);
    let out = io.output();
    assert!(out.is_closed());
    (result, out)
}

fn serve(input: &[u8]) -> String {
    let (result, out) = serve_with(input, 11, &Config::default());
    result.unwrap();
    out.text()
}

const HELLO: &str = "HTTP/1.1 200 OK\r\nContent-Type: text/plain\r\nContent-Length: 5\r\n\r\nhello";

#[test]
fn pipelined_keep_alive() {
    let out = serve(
        b"GET /hello HTTP/1.1\r\nHost: a\r\n\r\n\
          GET /hello HTTP/1.1\r\nHost: a\r\n\r\n\
          GET /hello HTTP/1.1\r\nHost: a\r\n\r\n",
    );
    assert_eq!(out, HELLO.repeat(3));
}

#[test]
fn connection_close_mid_sequence() {
    let out = serve(
        b"GET /hello HTTP/1.1\r\nHost: a\r\n\r\n\
          GET /hello HTTP/1.1\r\nHost: a\r\nConnection: close\r\n\r\n\
          GET /hello HTTP/1.1\r\nHost: a\r\n\r\n",
    );
    assert_eq!(
        out,
        format!(
            "{HELLO}HTTP/1.1 200 OK\r\nContent-Type: text/plain\r\nContent-Length: 5\r\n\
             Connection: close\r\n\r\nhello"
        )
    );
}

#[test]
fn pipelined_random_chunks() {
    let mut input = Vec::new();
    let mut expected = String::new();
    for idx in 0..20 {
        let body = format!("body-{idx}");
        if idx % 2 == 0 {
            input.extend_from_slice(
                format!(
                    "POST /echo HTTP/1.1\r\nHost: a\r\nContent-Length: {}\r\n\r\n{body}",
                    body.len()
                )
                .as_bytes(),
            );
        } else {
            input.extend_from_slice(
                format!(
                    "POST /echo HTTP/1.1\r\nHost: a\r\nTransfer-Encoding: chunked\r\n\r\n\
                     {:x}\r\n{body}\r\n0\r\n\r\n",
                    body.len()
                )
                .as_bytes(),
            );
        }
        expected.push_str(&format!(
            "HTTP/1.1 200 OK\r\nContent-Length: {}\r\n\r\n{body}",
            body.len()
        ));
    }

    let mut rng = rand::thread_rng();
    for _ in 0..10 {
        let chunk = rng.gen_range(1..64);
        let config = Config::default().set_read_buffer_size(rng.gen_range(1..128));
        let (result, out) = serve_with(&input, chunk, &config);
        result.unwrap();
        assert_eq!(out.text(), expected, "chunk={chunk}");
    }
}

#[test]
fn streamed_chunked_response() {
    let out = serve(b"GET /stream?3 HTTP/1.1\r\nHost: a\r\nConnection: close\r\n\r\n");
    assert_eq!(
        out,
        "HTTP/1.1 200 OK\r\nTransfer-Encoding: chunked\r\nConnection: close\r\n\r\n\
         6\r\npart0;\r\n6\r\npart1;\r\n6\r\npart2;\r\n0\r\n\r\n"
    );
}

#[test]
fn streamed_http10_response() {
    let out = serve(b"GET /stream?2 HTTP/1.0\r\nConnection: keep-alive\r\n\r\nGET /hello HTTP/1.0\r\n\r\n");
    // body is delimited by closing the connection
    assert_eq!(
        out,
        "HTTP/1.0 200 OK\r\nConnection: close\r\n\r\npart0;part1;"
    );
}

#[test]
fn http10_keep_alive() {
    let out = serve(b"GET /hello HTTP/1.0\r\nConnection: keep-alive\r\n\r\nGET /hello HTTP/1.0\r\n\r\n");
    assert_eq!(
        out,
        "HTTP/1.0 200 OK\r\nContent-Type: text/plain\r\nContent-Length: 5\r\n\
         Connection: keep-alive\r\n\r\nhello\
         HTTP/1.0 200 OK\r\nContent-Type: text/plain\r\nContent-Length: 5\r\n\
         Connection: close\r\n\r\nhello"
    );
}

#[test]
fn head_request() {
    let out = serve(b"HEAD /hello HTTP/1.1\r\nHost: a\r\nConnection: close\r\n\r\n");
    assert_eq!(
        out,
        "HTTP/1.1 200 OK\r\nContent-Type: text/plain\r\nContent-Length: 5\r\n\
         Connection: close\r\n\r\n"
    );
}

#[test]
fn wildcard_suffix() {
    let out = serve(b"GET /files/css/site.css?v=2 HTTP/1.1\r\nHost: a\r\nConnection: close\r\n\r\n");
    assert!(out.ends_with("\r\n\r\ncss/site.css"), "{out}");
}

#[test]
fn custom_status() {
    let out = serve(b"GET /status HTTP/1.1\r\nHost: a\r\nConnection: close\r\n\r\n");
    assert_eq!(
        out,
        "HTTP/1.1 201 Made It\r\nContent-Length: 2\r\nConnection: close\r\n\r\nok"
    );
}

#[test]
fn large_unread_body_closes() {
    let mut input = b"POST /hello HTTP/1.1\r\nHost: a\r\nContent-Length: 100\r\n\r\n".to_vec();
    input.extend_from_slice(&[b'x'; 100]);
    input.extend_from_slice(b"GET /hello HTTP/1.1\r\nHost: a\r\n\r\n");

    let config = Config::default().set_max_drain_size(10);
    let (result, out) = serve_with(&input, 32, &config);
    result.unwrap();
    // the response was committed as keep-alive, the second request is not served
    assert_eq!(out.text(), HELLO);

    let (result, out) = serve_with(&input, 32, &Config::default());
    result.unwrap();
    assert_eq!(out.text(), HELLO.repeat(2));
}

#[test]
fn keep_alive_disabled() {
    let config = Config::default().set_keep_alive(false);
    let (result, out) = serve_with(
        b"GET /hello HTTP/1.1\r\nHost: a\r\n\r\nGET /hello HTTP/1.1\r\nHost: a\r\n\r\n",
        7,
        &config,
    );
    result.unwrap();
    assert_eq!(
        out.text(),
        "HTTP/1.1 200 OK\r\nContent-Type: text/plain\r\nContent-Length: 5\r\n\
         Connection: close\r\n\r\nhello"
    );
}

#[test]
fn smuggled_length_closes() {
    let (result, out) = serve_with(
        b"POST /echo HTTP/1.1\r\nHost: a\r\nContent-Length: 3\r\nTransfer-Encoding: chunked\r\n\r\n\
          2\r\nhi\r\n0\r\n\r\nGET /hello HTTP/1.1\r\nHost: a\r\n\r\n",
        64,
        &Config::default(),
    );
    result.unwrap();
    assert_eq!(
        out.text(),
        "HTTP/1.1 200 OK\r\nContent-Length: 2\r\nConnection: close\r\n\r\nhi"
    );
}

#[test]
fn malformed_chunked_body_closes() {
    // the handler swallows the framing error, the pipelined request is not served
    let (result, out) = serve_with(
        b"POST /lenient HTTP/1.1\r\nHost: a\r\nTransfer-Encoding: chunked\r\n\r\n\
          zz\r\n0\r\n\r\nGET /hello HTTP/1.1\r\nHost: a\r\n\r\n",
        16,
        &Config::default(),
    );
    result.unwrap();
    assert_eq!(
        out.text(),
        "HTTP/1.1 200 OK\r\nContent-Length: 10\r\nConnection: close\r\n\r\nread:false"
    );
}

#[test]
fn error_after_response() {
    // second request is malformed, the first response stays intact
    let (result, out) = serve_with(
        b"GET /hello HTTP/1.1\r\nHost: a\r\n\r\nGET /hello HTTP/1.1\r\nBad Header\r\n\r\n",
        64,
        &Config::default(),
    );
    assert!(matches!(result, Err(Error::Client(StatusCode::BAD_REQUEST, _))));
    assert_eq!(
        out.text(),
        format!(
            "{HELLO}HTTP/1.1 400 Bad Request\r\nContent-Length: 0\r\nConnection: close\r\n\r\n"
        )
    );
}

#[test]
fn truncated_body() {
    let (result, out) = serve_with(
        b"POST /echo HTTP/1.1\r\nHost: a\r\nContent-Length: 10\r\n\r\nshort",
        64,
        &Config::default(),
    );
    result.unwrap();
    assert_eq!(
        out.text(),
        "HTTP/1.1 400 Bad Request\r\nContent-Length: 0\r\nConnection: close\r\n\r\n"
    );
}
