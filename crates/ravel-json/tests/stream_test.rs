use std::io::{self, Read};
use std::net::{TcpListener, TcpStream};
use std::thread;

use ravel_http::context::ResponseContext;
use ravel_http::headers::HeaderMap;
use ravel_json::{Body, JsonBodyWriter};
use serde::Serialize;

#[derive(Serialize)]
struct Greeting {
    message: &'static str,
}

/// Exchange bound to a real TCP connection; the stream is created when the
/// connection is accepted, so get-or-create always hands back the same one.
struct TcpExchange {
    headers: HeaderMap,
    stream: TcpStream,
}

impl ResponseContext for TcpExchange {
    type Sink = TcpStream;

    fn headers_mut(&mut self) -> &mut HeaderMap {
        &mut self.headers
    }

    fn output_stream(&mut self) -> io::Result<&mut TcpStream> {
        Ok(&mut self.stream)
    }
}

// Spawns a peer that drains the connection until EOF. `read_to_end`
// returning at all proves the writer shut down its write half.
fn drain_peer(listener: TcpListener) -> thread::JoinHandle<Vec<u8>> {
    thread::spawn(move || {
        let (mut conn, _) = listener.accept().unwrap();
        let mut buf = Vec::new();
        conn.read_to_end(&mut buf).unwrap();
        buf
    })
}

#[test]
fn structured_response_over_tcp() {
    let listener = TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();
    let peer = drain_peer(listener);

    let mut ctx = TcpExchange {
        headers: HeaderMap::new(),
        stream: TcpStream::connect(addr).unwrap(),
    };
    let writer = JsonBodyWriter::default();
    writer
        .write_response(&Body::json(&Greeting { message: "hello" }), &mut ctx)
        .unwrap();

    let received = peer.join().unwrap();
    assert_eq!(received, br#"{"message":"hello"}"#);
}

#[test]
fn text_response_over_tcp() {
    let listener = TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();
    let peer = drain_peer(listener);

    let mut ctx = TcpExchange {
        headers: HeaderMap::new(),
        stream: TcpStream::connect(addr).unwrap(),
    };
    let writer = JsonBodyWriter::default();
    writer
        .write_response(&Body::text("plain text, no quotes"), &mut ctx)
        .unwrap();

    let received = peer.join().unwrap();
    assert_eq!(received, b"plain text, no quotes");
}
