//! UDP send primitive

use std::net::{IpAddr, SocketAddr, UdpSocket};
use std::sync::Arc;

use crate::destination::{Destination, DestinationRegistry};
use crate::error::{Result, TransportError};
use crate::traits::TransportSender;

/// UDP configuration
#[derive(Debug, Clone)]
pub struct UdpConfig {
    /// Maximum datagram payload
    pub max_packet_size: usize,
}

impl Default for UdpConfig {
    fn default() -> Self {
        Self {
            max_packet_size: 65507, // Max UDP payload
        }
    }
}

/// Send one datagram from `socket` to `destination`
pub fn send_datagram(socket: &UdpSocket, data: &[u8], destination: Destination) -> Result<usize> {
    let target = target_addr(socket, destination)?;
    let sent = socket
        .send_to(data, target)
        .map_err(TransportError::SendFailed)?;

    if sent != data.len() {
        return Err(TransportError::Truncated {
            sent,
            expected: data.len(),
        });
    }

    Ok(sent)
}

/// Address to pass the kernel for `destination` on `socket`.
/// IPv6 sockets reach IPv4 hosts through v4-mapped addresses.
fn target_addr(socket: &UdpSocket, destination: Destination) -> Result<SocketAddr> {
    let local = socket.local_addr().map_err(TransportError::SendFailed)?;
    match (local.ip(), destination.host) {
        (IpAddr::V6(_), IpAddr::V4(v4)) => Ok(SocketAddr::new(
            IpAddr::V6(v4.to_ipv6_mapped()),
            destination.port,
        )),
        (IpAddr::V4(_), IpAddr::V6(_)) => Err(TransportError::FamilyMismatch {
            local,
            destination: destination.socket_addr(),
        }),
        _ => Ok(destination.socket_addr()),
    }
}

/// Sends through the registry's shared socket (connectionless)
#[derive(Debug, Clone)]
pub struct UdpSender {
    registry: Arc<DestinationRegistry>,
    config: UdpConfig,
}

impl UdpSender {
    pub fn new(registry: Arc<DestinationRegistry>) -> Self {
        Self::with_config(registry, UdpConfig::default())
    }

    pub fn with_config(registry: Arc<DestinationRegistry>, config: UdpConfig) -> Self {
        Self { registry, config }
    }

    pub fn registry(&self) -> &Arc<DestinationRegistry> {
        &self.registry
    }

    /// Send to whatever the registry currently points at
    pub fn send(&self, data: &[u8]) -> Result<usize> {
        self.send_to(data, self.registry.current_destination())
    }
}

impl TransportSender for UdpSender {
    fn send_to(&self, data: &[u8], destination: Destination) -> Result<usize> {
        if data.len() > self.config.max_packet_size {
            return Err(TransportError::PayloadTooLarge {
                size: data.len(),
                max: self.config.max_packet_size,
            });
        }

        let socket = self.registry.socket()?;
        send_datagram(&socket, data, destination)
    }
}
