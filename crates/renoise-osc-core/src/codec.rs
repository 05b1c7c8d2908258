//! OSC 1.0 message encoder
//!
//! Layout of an encoded message:
//!
//! ```text
//! +-----------------------------+---------------------------+-----------------+
//! | address pattern, NUL, pad4  | ',' tags, NUL, pad4       | payloads        |
//! +-----------------------------+---------------------------+-----------------+
//! ```
//!
//! Payloads follow the tag order: `i` 4 bytes, `h` 8 bytes, `d` 8 bytes,
//! `s` NUL-terminated and padded, `m` 4 raw bytes, `T`/`F` nothing.
//! All integers and floats are big-endian.

use crate::address::validate_address;
use crate::types::{OscArg, TypeTag};
use crate::{Error, Result};
use bytes::{BufMut, Bytes, BytesMut};

// ============================================================================
// PUBLIC API
// ============================================================================

/// A validated OSC message, ready to encode
#[derive(Debug, Clone, PartialEq)]
pub struct OscMessage {
    address: String,
    tags: Vec<TypeTag>,
    args: Vec<OscArg>,
}

impl OscMessage {
    /// Build a message from an explicit tag string
    pub fn new(address: impl Into<String>, tags: &str, args: Vec<OscArg>) -> Result<Self> {
        let address = address.into();
        let tags = check(&address, tags, &args)?;
        Ok(Self {
            address,
            tags,
            args,
        })
    }

    /// Build a message whose tags are derived from the arguments
    pub fn from_args(address: impl Into<String>, args: Vec<OscArg>) -> Result<Self> {
        let tags = crate::types::type_tags(&args);
        Self::new(address, &tags, args)
    }

    pub fn address(&self) -> &str {
        &self.address
    }

    /// Tag string without the leading ','
    pub fn tags(&self) -> String {
        self.tags.iter().map(TypeTag::as_char).collect()
    }

    pub fn args(&self) -> &[OscArg] {
        &self.args
    }

    /// Exact size of the encoded message
    pub fn encoded_len(&self) -> usize {
        message_len(&self.address, &self.tags, &self.args)
    }

    /// Encode to wire bytes
    pub fn encode(&self) -> Bytes {
        let mut buf = BytesMut::with_capacity(self.encoded_len());
        write_message(&mut buf, &self.address, &self.tags, &self.args);
        buf.freeze()
    }
}

/// Encode `(address, tags, args)` in one step
#[inline]
pub fn encode(address: &str, tags: &str, args: &[OscArg]) -> Result<Bytes> {
    let tags = check(address, tags, args)?;
    let mut buf = BytesMut::with_capacity(message_len(address, &tags, args));
    write_message(&mut buf, address, &tags, args);
    Ok(buf.freeze())
}

/// Size `encode` would produce, after the same validation
pub fn encoded_len(address: &str, tags: &str, args: &[OscArg]) -> Result<usize> {
    let tags = check(address, tags, args)?;
    Ok(message_len(address, &tags, args))
}

/// Length of a NUL-terminated string padded to a 4-byte boundary
#[inline]
pub fn padded_len(len: usize) -> usize {
    (len + 4) & !3
}

// ============================================================================
// VALIDATION
// ============================================================================

fn check(address: &str, tags: &str, args: &[OscArg]) -> Result<Vec<TypeTag>> {
    validate_address(address)?;

    let parsed = TypeTag::parse_all(tags)?;
    if parsed.len() != args.len() {
        return Err(Error::ArityMismatch {
            tags: parsed.len(),
            args: args.len(),
        });
    }

    for (index, (tag, arg)) in parsed.iter().zip(args).enumerate() {
        if !arg.fits(*tag) {
            return Err(Error::ArgumentMismatch {
                index,
                tag: tag.as_char(),
                found: arg.type_name(),
            });
        }
        match arg {
            OscArg::String(s) => check_string(index, s)?,
            OscArg::Blob(b) if b.len() != 4 => return Err(Error::InvalidMidi(b.len())),
            _ => {}
        }
    }

    Ok(parsed)
}

fn check_string(index: usize, s: &str) -> Result<()> {
    if s.bytes().any(|b| b == 0) {
        return Err(Error::InvalidString {
            index,
            reason: "contains NUL byte".to_string(),
        });
    }
    if !s.is_ascii() {
        return Err(Error::InvalidString {
            index,
            reason: "contains non-ASCII characters".to_string(),
        });
    }
    Ok(())
}

// ============================================================================
// ENCODING
// ============================================================================

fn message_len(address: &str, tags: &[TypeTag], args: &[OscArg]) -> usize {
    let payload: usize = tags
        .iter()
        .zip(args)
        .map(|(tag, arg)| match (tag.payload_size(), arg) {
            (Some(n), _) => n,
            (None, OscArg::String(s)) => padded_len(s.len()),
            (None, _) => 0,
        })
        .sum();
    padded_len(address.len()) + padded_len(tags.len() + 1) + payload
}

fn write_message(buf: &mut BytesMut, address: &str, tags: &[TypeTag], args: &[OscArg]) {
    write_str(buf, address.as_bytes());

    let mut tag_block = Vec::with_capacity(tags.len() + 1);
    tag_block.push(b',');
    tag_block.extend(tags.iter().map(|t| t.as_char() as u8));
    write_str(buf, &tag_block);

    for arg in args {
        write_arg(buf, arg);
    }
}

fn write_arg(buf: &mut BytesMut, arg: &OscArg) {
    match arg {
        OscArg::Int32(v) => buf.put_i32(*v),
        OscArg::Int64(v) => buf.put_i64(*v),
        OscArg::Float64(v) => buf.put_f64(*v),
        OscArg::String(s) => write_str(buf, s.as_bytes()),
        OscArg::Bool(_) => {}
        OscArg::Blob(b) => buf.put_slice(&b[..4]),
        OscArg::Midi(m) => buf.put_slice(&m.to_bytes()),
    }
}

/// Write bytes followed by 1-4 NULs so the block ends on a 4-byte boundary
#[inline]
fn write_str(buf: &mut BytesMut, s: &[u8]) {
    buf.put_slice(s);
    buf.put_bytes(0, padded_len(s.len()) - s.len());
}
