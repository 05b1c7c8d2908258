//! Transport error types

use std::net::SocketAddr;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, TransportError>;

#[derive(Error, Debug)]
pub enum TransportError {
    #[error("could not resolve host {host:?}: {reason}")]
    Resolve { host: String, reason: String },

    #[error("host {0:?} resolved to no addresses")]
    NoAddress(String),

    #[error("invalid port: {0} (expected 0-65535)")]
    InvalidPort(String),

    #[error("failed to bind UDP socket: {0}")]
    Bind(#[source] std::io::Error),

    #[error("send failed: {0}")]
    SendFailed(#[source] std::io::Error),

    #[error("datagram truncated: sent {sent} of {expected} bytes")]
    Truncated { sent: usize, expected: usize },

    #[error("socket bound to {local} cannot reach {destination}")]
    FamilyMismatch {
        local: SocketAddr,
        destination: SocketAddr,
    },

    #[error("payload too large: {size} bytes (max {max})")]
    PayloadTooLarge { size: usize, max: usize },
}
