use std::{io, net::SocketAddr};

use pacenet::transport::{Transport, TransportKind};

// Transport double that records calls instead of touching sockets.
#[derive(Debug)]
pub struct MockTransport {
    kind: TransportKind,
    pub bound: bool,
    pub connected: Option<SocketAddr>,
    pub closed: bool,
    pub sent: Vec<usize>,
}

impl MockTransport {
    pub fn new(kind: TransportKind) -> Self {
        Self {
            kind,
            bound: false,
            connected: None,
            closed: false,
            sent: Vec::new(),
        }
    }
}

impl Transport for MockTransport {
    fn bind(&mut self) -> io::Result<()> {
        self.bound = true;
        Ok(())
    }

    fn connect(&mut self, addr: SocketAddr) -> io::Result<()> {
        self.connected = Some(addr);
        Ok(())
    }

    fn send(&mut self, len: usize) -> io::Result<()> {
        self.sent.push(len);
        Ok(())
    }

    fn close(&mut self) {
        self.closed = true;
    }

    fn kind(&self) -> TransportKind {
        self.kind
    }
}

pub fn peer_addr() -> SocketAddr {
    "127.0.0.1:9".parse().unwrap()
}
