//! Renoise OSC Client Library
//!
//! Remote control for Renoise through its built-in OSC server.
//!
//! # Example
//!
//! ```no_run
//! use renoise_osc_client::Renoise;
//!
//! fn main() -> renoise_osc_client::Result<()> {
//!     let renoise = Renoise::new();
//!     renoise.set_port(8000)?;
//!
//!     renoise.set_bpm(132)?;
//!     renoise.set_edit_mode(true)?;
//!     renoise.start()?;
//!
//!     // Out-of-range values are rejected without sending anything
//!     let outcome = renoise.set_octave(12)?;
//!     assert!(outcome.is_rejected());
//!
//!     Ok(())
//! }
//! ```

pub mod builder;
pub mod client;
pub mod commands;
pub mod error;
pub mod outcome;
pub mod validate;

pub use builder::RenoiseBuilder;
pub use client::Renoise;
pub use error::{ClientError, Result};
pub use outcome::SendOutcome;
pub use validate::{Limit, Rejection};

/// Prelude for convenient imports
pub mod prelude {
    pub use crate::builder::RenoiseBuilder;
    pub use crate::client::Renoise;
    pub use crate::error::{ClientError, Result};
    pub use crate::outcome::SendOutcome;
    pub use crate::validate::Rejection;
    pub use renoise_osc_core::{MidiMessage, OscArg};
    pub use renoise_osc_transport::Destination;
}
