//! Renoise OSC Core
//!
//! Argument model and wire encoding for the OSC 1.0 messages that drive
//! Renoise's built-in OSC server.
//!
//! This crate provides:
//! - OSC argument values and type tags ([`OscArg`], [`MidiMessage`])
//! - Address pattern rules and path building ([`address`])
//! - The message encoder ([`OscMessage`], [`codec::encode`])
//!
//! Encoding is pure: nothing here touches the network or keeps state
//! between calls.

pub mod address;
pub mod codec;
pub mod error;
pub mod types;

pub use address::{validate_address, ROOT};
pub use codec::{encode, encoded_len, OscMessage};
pub use error::{Error, Result};
pub use types::*;
