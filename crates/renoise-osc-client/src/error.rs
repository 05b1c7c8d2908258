//! Client error types

use thiserror::Error;

pub type Result<T> = std::result::Result<T, ClientError>;

#[derive(Error, Debug)]
pub enum ClientError {
    /// Malformed address, tags or arguments
    #[error("encode error: {0}")]
    Encode(#[from] renoise_osc_core::Error),

    /// Resolution, bind or send failure
    #[error("transport error: {0}")]
    Transport(#[from] renoise_osc_transport::TransportError),
}
