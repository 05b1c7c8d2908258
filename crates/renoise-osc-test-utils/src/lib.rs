//! Common test helpers for renoise-osc tests
//!
//! This crate provides:
//! - An in-memory [`RecordingSender`] that captures every datagram
//! - A [`FailingSender`] that simulates transport errors
//! - A real UDP listener ([`UdpListener`]) with bounded waits
//! - OSC decoding through `rosc` for assertions

use parking_lot::Mutex;
use renoise_osc_transport::{Destination, TransportError, TransportSender};
use rosc::{decoder, OscPacket, OscType};
use std::io;
use std::net::{SocketAddr, UdpSocket};
use std::time::Duration;

/// Default receive timeout
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(2);

// ============================================================================
// Port Allocation
// ============================================================================

/// Find an available UDP port for testing
pub fn find_available_udp_port() -> u16 {
    let socket = UdpSocket::bind("127.0.0.1:0").unwrap();
    socket.local_addr().unwrap().port()
}

// ============================================================================
// OSC Decoding
// ============================================================================

/// Decode a single OSC message, panicking on bundles or malformed input
pub fn decode_message(bytes: &[u8]) -> rosc::OscMessage {
    match decoder::decode_udp(bytes) {
        Ok((_, OscPacket::Message(msg))) => msg,
        Ok((_, OscPacket::Bundle(_))) => panic!("Expected message, got bundle"),
        Err(e) => panic!("OSC decode failed: {:?}", e),
    }
}

/// Extract a double argument, panicking with context otherwise
pub fn as_double(arg: &OscType) -> f64 {
    match arg {
        OscType::Double(d) => *d,
        other => panic!("Expected Double, got {:?}", other),
    }
}

// ============================================================================
// Recording Sender
// ============================================================================

/// A datagram captured by [`RecordingSender`]
#[derive(Debug, Clone)]
pub struct Sent {
    pub data: Vec<u8>,
    pub destination: Destination,
}

impl Sent {
    pub fn message(&self) -> rosc::OscMessage {
        decode_message(&self.data)
    }
}

/// In-memory sender that records instead of touching the network
#[derive(Debug, Default)]
pub struct RecordingSender {
    sent: Mutex<Vec<Sent>>,
}

impl RecordingSender {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of datagrams sent so far
    pub fn count(&self) -> usize {
        self.sent.lock().len()
    }

    /// Total bytes sent so far
    pub fn bytes(&self) -> usize {
        self.sent.lock().iter().map(|s| s.data.len()).sum()
    }

    pub fn last(&self) -> Option<Sent> {
        self.sent.lock().last().cloned()
    }

    /// Decoded last message
    pub fn last_message(&self) -> Option<rosc::OscMessage> {
        self.last().map(|s| s.message())
    }

    /// Drain everything recorded so far
    pub fn take(&self) -> Vec<Sent> {
        std::mem::take(&mut *self.sent.lock())
    }
}

impl TransportSender for RecordingSender {
    fn send_to(&self, data: &[u8], destination: Destination) -> renoise_osc_transport::Result<usize> {
        self.sent.lock().push(Sent {
            data: data.to_vec(),
            destination,
        });
        Ok(data.len())
    }
}

/// Sender whose every send fails like an unreachable network
#[derive(Debug, Default)]
pub struct FailingSender;

impl TransportSender for FailingSender {
    fn send_to(&self, _data: &[u8], _destination: Destination) -> renoise_osc_transport::Result<usize> {
        Err(TransportError::SendFailed(io::Error::other(
            "network unreachable",
        )))
    }
}

// ============================================================================
// UDP Listener
// ============================================================================

/// A loopback UDP listener standing in for Renoise
pub struct UdpListener {
    socket: UdpSocket,
}

impl UdpListener {
    pub fn bind() -> Self {
        let socket = UdpSocket::bind("127.0.0.1:0").expect("listener bind failed");
        socket
            .set_read_timeout(Some(DEFAULT_TIMEOUT))
            .expect("listener timeout failed");
        Self { socket }
    }

    pub fn addr(&self) -> SocketAddr {
        self.socket.local_addr().unwrap()
    }

    pub fn port(&self) -> u16 {
        self.addr().port()
    }

    /// Next datagram, or `None` after the timeout
    pub fn recv(&self) -> Option<(Vec<u8>, SocketAddr)> {
        let mut buf = vec![0u8; 65536];
        match self.socket.recv_from(&mut buf) {
            Ok((len, from)) => {
                buf.truncate(len);
                Some((buf, from))
            }
            Err(_) => None,
        }
    }

    /// Next datagram decoded as an OSC message
    pub fn recv_message(&self) -> Option<rosc::OscMessage> {
        self.recv().map(|(data, _)| decode_message(&data))
    }

    /// Wait `wait` for a datagram that should never arrive
    pub fn expect_silence(&self, wait: Duration) -> bool {
        self.socket.set_read_timeout(Some(wait)).unwrap();
        let silent = self.recv().is_none();
        self.socket.set_read_timeout(Some(DEFAULT_TIMEOUT)).unwrap();
        silent
    }
}
