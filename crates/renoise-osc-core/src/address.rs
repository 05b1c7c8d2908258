//! Address pattern rules and path building
//!
//! Every Renoise control lives under a fixed root:
//! ```text
//! /renoise/song/bpm
//! /renoise/transport/start
//! /renoise/song/track/2/prefx_volume
//! ```
//!
//! The encoder only accepts patterns that begin with `/` and consist of
//! printable-range ASCII without NUL bytes.

use crate::{Error, Result};
use std::fmt::Display;

/// Root path of the Renoise OSC namespace
pub const ROOT: &str = "/renoise";

/// Check an address pattern against the encoder's contract
pub fn validate_address(s: &str) -> Result<()> {
    if s.is_empty() {
        return Err(Error::InvalidAddress("empty address".to_string()));
    }

    if !s.starts_with('/') {
        return Err(Error::InvalidAddress(format!(
            "address must start with '/': {}",
            s
        )));
    }

    if let Some(pos) = s.bytes().position(|b| b == 0) {
        return Err(Error::InvalidAddress(format!(
            "NUL byte at offset {} in {:?}",
            pos, s
        )));
    }

    if let Some(c) = s.chars().find(|c| !c.is_ascii()) {
        return Err(Error::InvalidAddress(format!(
            "non-ASCII character {:?} in {:?}",
            c, s
        )));
    }

    Ok(())
}

/// Prefix `suffix` with [`ROOT`]. `suffix` is expected to start with '/'.
pub fn path(suffix: &str) -> String {
    format!("{}{}", ROOT, suffix)
}

/// Join segments under a root, e.g. `join(ROOT, &["song", "track", &2])`
pub fn join(root: &str, segments: &[&dyn Display]) -> String {
    let mut out = root.trim_end_matches('/').to_string();
    for seg in segments {
        out.push('/');
        out.push_str(&seg.to_string());
    }
    out
}
