//! Destination registry
//!
//! Holds the remote endpoint that Renoise listens on and the single outbound
//! UDP socket every send goes through. Host and port can be changed
//! independently; the socket is created on first use and then reused for the
//! life of the registry.
//!
//! Concurrent mutators are last-writer-wins: each setter is a single write to
//! the destination lock, and a send reads one consistent snapshot of it.

use parking_lot::{Mutex, RwLock};
use socket2::{Domain, Protocol, SockAddr, Socket, Type};
use std::fmt::Display;
use std::io;
use std::net::{IpAddr, Ipv4Addr, Ipv6Addr, SocketAddr, ToSocketAddrs, UdpSocket};
use std::sync::Arc;

use crate::error::{Result, TransportError};

/// Default remote host (loopback)
pub const DEFAULT_HOST: IpAddr = IpAddr::V4(Ipv4Addr::LOCALHOST);

/// Default remote port of the Renoise OSC server
pub const DEFAULT_PORT: u16 = 8000;

/// Default local bind address: dual-stack IPv6 wildcard
pub const DUAL_STACK_BIND_ADDR: SocketAddr =
    SocketAddr::new(IpAddr::V6(Ipv6Addr::UNSPECIFIED), 0);

/// Fallback local bind address when the host has no IPv6
pub const DEFAULT_BIND_ADDR: SocketAddr =
    SocketAddr::new(IpAddr::V4(Ipv4Addr::UNSPECIFIED), 0);

/// Remote OSC endpoint
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Destination {
    pub host: IpAddr,
    pub port: u16,
}

impl Destination {
    pub fn new(host: IpAddr, port: u16) -> Self {
        Self { host, port }
    }

    pub fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}

impl Default for Destination {
    fn default() -> Self {
        Self::new(DEFAULT_HOST, DEFAULT_PORT)
    }
}

impl From<SocketAddr> for Destination {
    fn from(addr: SocketAddr) -> Self {
        Self::new(addr.ip(), addr.port())
    }
}

impl std::fmt::Display for Destination {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.socket_addr())
    }
}

/// Resolve a hostname or IP literal to a single address, preferring IPv4
pub fn resolve_host(host: &str) -> Result<IpAddr> {
    let trimmed = host.trim().trim_start_matches('[').trim_end_matches(']');

    if let Ok(ip) = trimmed.parse::<IpAddr>() {
        return Ok(ip);
    }

    let addrs: Vec<SocketAddr> = (trimmed, 0)
        .to_socket_addrs()
        .map_err(|e| TransportError::Resolve {
            host: host.to_string(),
            reason: e.to_string(),
        })?
        .collect();

    addrs
        .iter()
        .find(|a| a.is_ipv4())
        .or_else(|| addrs.first())
        .map(|a| a.ip())
        .ok_or_else(|| TransportError::NoAddress(host.to_string()))
}

fn check_port<P>(port: P) -> Result<u16>
where
    P: TryInto<u16> + Copy + Display,
{
    port.try_into()
        .map_err(|_| TransportError::InvalidPort(port.to_string()))
}

/// Current destination plus the lazily created shared socket
#[derive(Debug)]
pub struct DestinationRegistry {
    destination: RwLock<Destination>,
    socket: Mutex<Option<Arc<UdpSocket>>>,
    bind_addr: Option<SocketAddr>,
}

impl DestinationRegistry {
    /// Registry pointing at `127.0.0.1:8000`
    pub fn new() -> Self {
        Self::with_destination(Destination::default())
    }

    pub fn with_destination(destination: Destination) -> Self {
        Self {
            destination: RwLock::new(destination),
            socket: Mutex::new(None),
            bind_addr: None,
        }
    }

    /// Local address the socket binds to when first created.
    ///
    /// Without one the socket is a dual-stack `[::]:0` that reaches both
    /// IPv4 and IPv6 hosts, or `0.0.0.0:0` when IPv6 is unavailable.
    pub fn with_bind_addr(mut self, bind_addr: SocketAddr) -> Self {
        self.bind_addr = Some(bind_addr);
        self
    }

    /// The explicit bind address, if any
    pub fn bind_addr(&self) -> Option<SocketAddr> {
        self.bind_addr
    }

    /// Replace the host, keeping the port
    pub fn set_host(&self, host: &str) -> Result<()> {
        let ip = resolve_host(host)?;
        self.set_ip(ip);
        Ok(())
    }

    /// Replace the host with an already resolved address, keeping the port
    pub fn set_ip(&self, ip: IpAddr) {
        self.destination.write().host = ip;
    }

    /// Replace the port, keeping the host
    pub fn set_port<P>(&self, port: P) -> Result<()>
    where
        P: TryInto<u16> + Copy + Display,
    {
        let port = check_port(port)?;
        self.destination.write().port = port;
        Ok(())
    }

    /// Replace host and port together. Nothing changes if either is invalid.
    pub fn set_address<P>(&self, host: &str, port: P) -> Result<()>
    where
        P: TryInto<u16> + Copy + Display,
    {
        let port = check_port(port)?;
        let ip = resolve_host(host)?;
        *self.destination.write() = Destination::new(ip, port);
        Ok(())
    }

    pub fn set_destination(&self, destination: Destination) {
        *self.destination.write() = destination;
    }

    pub fn current_destination(&self) -> Destination {
        *self.destination.read()
    }

    /// The shared outbound socket, bound on first call
    pub fn socket(&self) -> Result<Arc<UdpSocket>> {
        let mut slot = self.socket.lock();
        if let Some(socket) = slot.as_ref() {
            return Ok(socket.clone());
        }

        let socket = match self.bind_addr {
            Some(addr) => UdpSocket::bind(addr),
            None => bind_dual_stack().or_else(|_| UdpSocket::bind(DEFAULT_BIND_ADDR)),
        }
        .map_err(TransportError::Bind)?;
        let socket = Arc::new(socket);
        *slot = Some(socket.clone());
        Ok(socket)
    }

    /// Whether the socket has been created yet
    pub fn has_socket(&self) -> bool {
        self.socket.lock().is_some()
    }
}

fn bind_dual_stack() -> io::Result<UdpSocket> {
    let socket = Socket::new(Domain::IPV6, Type::DGRAM, Some(Protocol::UDP))?;
    socket.set_only_v6(false)?;
    socket.bind(&SockAddr::from(DUAL_STACK_BIND_ADDR))?;
    Ok(socket.into())
}

impl Default for DestinationRegistry {
    fn default() -> Self {
        Self::new()
    }
}
