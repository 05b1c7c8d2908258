//! Main Renoise client implementation

use renoise_osc_core::{codec, OscArg};
use renoise_osc_transport::{Destination, DestinationRegistry, TransportSender, UdpSender};
use std::net::{IpAddr, UdpSocket};
use std::sync::Arc;
use tracing::{debug, info, warn};

use crate::builder::RenoiseBuilder;
use crate::commands::Command;
use crate::error::Result;
use crate::outcome::SendOutcome;
use crate::validate::Rejection;

/// A Renoise remote control.
///
/// Owns the destination (host/port) and the sender that pushes datagrams.
/// Cheap to share behind an `Arc`; every method takes `&self`.
pub struct Renoise {
    registry: Arc<DestinationRegistry>,
    sender: Arc<dyn TransportSender>,
}

impl Renoise {
    /// Client targeting `127.0.0.1:8000` over UDP
    pub fn new() -> Self {
        let registry = Arc::new(DestinationRegistry::new());
        let sender = Arc::new(UdpSender::new(registry.clone()));
        Self::from_parts(registry, sender)
    }

    /// Create a builder
    pub fn builder() -> RenoiseBuilder {
        RenoiseBuilder::new()
    }

    /// Client with the default destination and a custom sender
    pub fn with_sender(sender: impl TransportSender + 'static) -> Self {
        Self::from_parts(Arc::new(DestinationRegistry::new()), Arc::new(sender))
    }

    pub(crate) fn from_parts(
        registry: Arc<DestinationRegistry>,
        sender: Arc<dyn TransportSender>,
    ) -> Self {
        Self { registry, sender }
    }

    pub fn registry(&self) -> &Arc<DestinationRegistry> {
        &self.registry
    }

    // ------------------------------------------------------------------
    // Destination
    // ------------------------------------------------------------------

    /// Change the host, keeping the port
    pub fn set_host(&self, host: &str) -> Result<()> {
        self.registry.set_host(host)?;
        info!("Renoise destination now {}", self.destination());
        Ok(())
    }

    /// Change the host to a resolved address, keeping the port
    pub fn set_ip(&self, ip: IpAddr) {
        self.registry.set_ip(ip);
        info!("Renoise destination now {}", self.destination());
    }

    /// Change the port, keeping the host
    pub fn set_port<P>(&self, port: P) -> Result<()>
    where
        P: TryInto<u16> + Copy + std::fmt::Display,
    {
        self.registry.set_port(port)?;
        info!("Renoise destination now {}", self.destination());
        Ok(())
    }

    /// Change host and port together
    pub fn set_address<P>(&self, host: &str, port: P) -> Result<()>
    where
        P: TryInto<u16> + Copy + std::fmt::Display,
    {
        self.registry.set_address(host, port)?;
        info!("Renoise destination now {}", self.destination());
        Ok(())
    }

    pub fn destination(&self) -> Destination {
        self.registry.current_destination()
    }

    /// The shared outbound socket (created on first call)
    pub fn socket(&self) -> Result<Arc<UdpSocket>> {
        Ok(self.registry.socket()?)
    }

    // ------------------------------------------------------------------
    // Sending
    // ------------------------------------------------------------------

    /// Encode one message and send it to the current destination.
    ///
    /// Returns the number of bytes sent. Encoding errors mean the caller
    /// built a bad message; transport errors are reported as-is and never
    /// retried.
    pub fn send_message(&self, address: &str, tags: &str, args: &[OscArg]) -> Result<usize> {
        let bytes = codec::encode(address, tags, args)?;
        let destination = self.destination();
        let sent = self.sender.send_to(&bytes, destination)?;
        debug!("Sent {} bytes to {}: {}", sent, destination, address);
        Ok(sent)
    }

    /// Send a validated command, or report why it was rejected
    pub(crate) fn submit(
        &self,
        command: std::result::Result<Command, Rejection>,
    ) -> Result<SendOutcome> {
        match command {
            Ok(command) => {
                let bytes = self.send_message(command.path(), &command.tags(), command.args())?;
                Ok(SendOutcome::Sent { bytes })
            }
            Err(rejection) => {
                warn!("Renoise command not sent: {}", rejection);
                Ok(SendOutcome::Rejected(rejection))
            }
        }
    }
}

impl Default for Renoise {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for Renoise {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Renoise")
            .field("destination", &self.destination())
            .finish_non_exhaustive()
    }
}
