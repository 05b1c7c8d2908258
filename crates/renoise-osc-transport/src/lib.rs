//! Renoise OSC Transport Layer
//!
//! This crate owns everything between an encoded OSC message and the wire:
//! - The destination registry (remote host/port plus the shared UDP socket)
//! - The [`TransportSender`] seam used by the client
//! - The UDP send primitive ([`UdpSender`])
//!
//! Sends are synchronous fire-and-forget datagrams. Nothing here retries,
//! waits for a reply, or logs.

pub mod destination;
pub mod error;
pub mod traits;
pub mod udp;

pub use destination::{resolve_host, Destination, DestinationRegistry};
pub use error::{Result, TransportError};
pub use traits::TransportSender;
pub use udp::{send_datagram, UdpConfig, UdpSender};
