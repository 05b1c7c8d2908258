//! Command catalog
//!
//! One method per Renoise OSC action, grouped by area. Every method
//! validates its parameters first and returns
//! [`SendOutcome::Rejected`](crate::SendOutcome::Rejected) without sending
//! when they are out of bounds. Volume parameters are clamped instead.
//!
//! Track, instrument and device indices follow Renoise: `-1` targets the
//! currently selected item, anything else is 1-based.

mod global;
mod instrument;
mod song;
mod track;
mod trigger;

pub mod limits;

use renoise_osc_core::address::{join, path, ROOT};
use renoise_osc_core::{type_tags, OscArg};
use std::fmt::Display;

use crate::validate::Rejection;
use crate::{Renoise, Result};

/// A command that passed validation, or why it did not
pub(crate) type Checked = std::result::Result<Command, Rejection>;

/// A path plus arguments, ready for [`Renoise::send_command`]
#[derive(Debug, Clone, PartialEq)]
pub struct Command {
    path: String,
    args: Vec<OscArg>,
}

impl Command {
    /// Command at `/renoise<suffix>`
    pub fn new(suffix: &str) -> Self {
        Self {
            path: path(suffix),
            args: Vec::new(),
        }
    }

    /// Command at `/renoise/<seg>/<seg>/...`
    pub fn at(segments: &[&dyn Display]) -> Self {
        Self {
            path: join(ROOT, segments),
            args: Vec::new(),
        }
    }

    /// Append an argument; its tag follows from the value
    pub fn arg(mut self, value: impl Into<OscArg>) -> Self {
        self.args.push(value.into());
        self
    }

    pub fn path(&self) -> &str {
        &self.path
    }

    pub fn args(&self) -> &[OscArg] {
        &self.args
    }

    pub fn tags(&self) -> String {
        type_tags(&self.args)
    }
}

impl Renoise {
    /// Send a prebuilt command, skipping catalog validation
    pub fn send_command(&self, command: &Command) -> Result<usize> {
        self.send_message(command.path(), &command.tags(), command.args())
    }
}
