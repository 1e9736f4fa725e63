use std::{
    io::{self, Write},
    net::{Shutdown, SocketAddr, TcpStream, UdpSocket},
};

use bytes::{BufMut, BytesMut};

use crate::pacenet_debug;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransportKind {
    ConnectionOriented,
    Connectionless,
}

pub trait Transport {
    fn bind(&mut self) -> io::Result<()>;

    fn connect(&mut self, addr: SocketAddr) -> io::Result<()>;

    fn send(&mut self, len: usize) -> io::Result<()>;

    fn close(&mut self);

    fn kind(&self) -> TransportKind;
}

#[derive(Debug)]
pub struct DatagramTransport {
    local: SocketAddr,
    socket: Option<UdpSocket>,
    payload: BytesMut,
}

impl DatagramTransport {
    pub fn new(local: SocketAddr) -> Self {
        Self {
            local,
            socket: None,
            payload: BytesMut::new(),
        }
    }

    pub fn local_addr(&self) -> Option<SocketAddr> {
        self.socket.as_ref().and_then(|s| s.local_addr().ok())
    }
}

impl Transport for DatagramTransport {
    fn bind(&mut self) -> io::Result<()> {
        self.socket = Some(UdpSocket::bind(self.local)?);
        Ok(())
    }

    fn connect(&mut self, addr: SocketAddr) -> io::Result<()> {
        match &self.socket {
            Some(socket) => socket.connect(addr),
            None => Err(io::Error::new(
                io::ErrorKind::NotConnected,
                "socket is not bound",
            )),
        }
    }

    fn send(&mut self, len: usize) -> io::Result<()> {
        let socket = match &self.socket {
            Some(socket) => socket,
            None => {
                return Err(io::Error::new(
                    io::ErrorKind::NotConnected,
                    "socket is not bound",
                ))
            }
        };

        self.payload.clear();
        self.payload.put_bytes(0, len);
        socket.send(&self.payload)?;

        Ok(())
    }

    fn close(&mut self) {
        self.socket = None;
    }

    fn kind(&self) -> TransportKind {
        TransportKind::Connectionless
    }
}

#[derive(Debug)]
pub struct StreamTransport {
    stream: Option<TcpStream>,
    payload: BytesMut,
}

impl StreamTransport {
    pub fn new() -> Self {
        Self {
            stream: None,
            payload: BytesMut::new(),
        }
    }
}

impl Transport for StreamTransport {
    fn bind(&mut self) -> io::Result<()> {
        // The stream binds an ephemeral local address on connect.
        Ok(())
    }

    fn connect(&mut self, addr: SocketAddr) -> io::Result<()> {
        self.stream = Some(TcpStream::connect(addr)?);
        Ok(())
    }

    fn send(&mut self, len: usize) -> io::Result<()> {
        let stream = match &mut self.stream {
            Some(stream) => stream,
            None => {
                return Err(io::Error::new(
                    io::ErrorKind::NotConnected,
                    "stream is not connected",
                ))
            }
        };

        self.payload.clear();
        self.payload.put_bytes(0, len);
        stream.write_all(&self.payload)
    }

    fn close(&mut self) {
        if let Some(stream) = self.stream.take() {
            if let Err(e) = stream.shutdown(Shutdown::Both) {
                pacenet_debug!("Failed to shut down stream: {:?}", e);
            }
        }
    }

    fn kind(&self) -> TransportKind {
        TransportKind::ConnectionOriented
    }
}
