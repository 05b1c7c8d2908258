//! Transport trait definitions

use std::sync::Arc;

use crate::destination::Destination;
use crate::error::Result;

/// Something that can push one encoded datagram to a destination.
///
/// The client talks to the network only through this trait, so tests can
/// substitute a recorder and applications can wrap the UDP sender.
pub trait TransportSender: Send + Sync {
    /// Send `data` as a single datagram, returning the number of bytes written
    fn send_to(&self, data: &[u8], destination: Destination) -> Result<usize>;
}

impl<T: TransportSender + ?Sized> TransportSender for Arc<T> {
    fn send_to(&self, data: &[u8], destination: Destination) -> Result<usize> {
        (**self).send_to(data, destination)
    }
}

impl<T: TransportSender + ?Sized> TransportSender for &T {
    fn send_to(&self, data: &[u8], destination: Destination) -> Result<usize> {
        (**self).send_to(data, destination)
    }
}
