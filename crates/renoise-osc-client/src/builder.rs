//! Client builder pattern

use renoise_osc_transport::{
    Destination, DestinationRegistry, TransportSender, UdpConfig, UdpSender,
};
use std::net::SocketAddr;
use std::sync::Arc;

use crate::{Renoise, Result};

/// Builder for [`Renoise`]
pub struct RenoiseBuilder {
    host: Option<String>,
    port: u16,
    bind_addr: Option<SocketAddr>,
    max_packet_size: Option<usize>,
    sender: Option<Arc<dyn TransportSender>>,
}

impl RenoiseBuilder {
    /// Create a new builder
    pub fn new() -> Self {
        Self {
            host: None,
            port: Destination::default().port,
            bind_addr: None,
            max_packet_size: None,
            sender: None,
        }
    }

    /// Set the Renoise host (IP literal or hostname)
    pub fn host(mut self, host: &str) -> Self {
        self.host = Some(host.to_string());
        self
    }

    /// Set the Renoise OSC port
    pub fn port(mut self, port: u16) -> Self {
        self.port = port;
        self
    }

    /// Local address for the outbound socket
    pub fn bind_addr(mut self, addr: SocketAddr) -> Self {
        self.bind_addr = Some(addr);
        self
    }

    /// Largest datagram the UDP sender will attempt
    pub fn max_packet_size(mut self, size: usize) -> Self {
        self.max_packet_size = Some(size);
        self
    }

    /// Replace the UDP sender (bind address and packet size then do nothing)
    pub fn sender(mut self, sender: impl TransportSender + 'static) -> Self {
        self.sender = Some(Arc::new(sender));
        self
    }

    /// Resolve the host and build the client. No socket is opened yet.
    pub fn build(self) -> Result<Renoise> {
        let mut registry = DestinationRegistry::new();
        if let Some(addr) = self.bind_addr {
            registry = registry.with_bind_addr(addr);
        }
        match &self.host {
            Some(host) => registry.set_address(host, self.port)?,
            None => registry.set_port(self.port)?,
        }
        let registry = Arc::new(registry);

        let sender: Arc<dyn TransportSender> = match self.sender {
            Some(sender) => sender,
            None => {
                let mut config = UdpConfig::default();
                if let Some(size) = self.max_packet_size {
                    config.max_packet_size = size;
                }
                Arc::new(UdpSender::with_config(registry.clone(), config))
            }
        };

        Ok(Renoise::from_parts(registry, sender))
    }
}

impl Default for RenoiseBuilder {
    fn default() -> Self {
        Self::new()
    }
}
