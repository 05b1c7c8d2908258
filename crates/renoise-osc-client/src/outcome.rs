//! Result of a catalog command

use crate::validate::Rejection;

/// What a catalog command did.
///
/// Transport and encoding failures are the `Err` side of the surrounding
/// `Result`; a rejection is not an error, it means nothing was sent because
/// the input was out of bounds.
#[derive(Debug, Clone, PartialEq)]
pub enum SendOutcome {
    /// One datagram of `bytes` bytes left the socket
    Sent { bytes: usize },
    /// Validation failed, nothing was sent
    Rejected(Rejection),
}

impl SendOutcome {
    pub fn is_sent(&self) -> bool {
        matches!(self, SendOutcome::Sent { .. })
    }

    pub fn is_rejected(&self) -> bool {
        matches!(self, SendOutcome::Rejected(_))
    }

    /// Bytes sent, zero when rejected
    pub fn bytes(&self) -> usize {
        match self {
            SendOutcome::Sent { bytes } => *bytes,
            SendOutcome::Rejected(_) => 0,
        }
    }

    pub fn rejection(&self) -> Option<&Rejection> {
        match self {
            SendOutcome::Rejected(r) => Some(r),
            SendOutcome::Sent { .. } => None,
        }
    }
}

impl std::fmt::Display for SendOutcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SendOutcome::Sent { bytes } => write!(f, "sent {} bytes", bytes),
            SendOutcome::Rejected(r) => write!(f, "rejected: {}", r),
        }
    }
}
