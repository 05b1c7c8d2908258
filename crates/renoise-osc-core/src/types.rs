//! OSC argument types and type tags

use crate::{Error, Result};

/// Supported type tag alphabet
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TypeTag {
    /// `i` - 32-bit big-endian two's complement
    Int32,
    /// `h` - 64-bit big-endian two's complement
    Int64,
    /// `d` - IEEE-754 double, big-endian
    Float64,
    /// `s` - NUL-terminated, 4-byte padded ASCII
    String,
    /// `T` - no payload
    True,
    /// `F` - no payload
    False,
    /// `m` - 4 raw MIDI bytes
    Midi,
}

impl TypeTag {
    pub fn from_char(c: char) -> Option<Self> {
        match c {
            'i' => Some(TypeTag::Int32),
            'h' => Some(TypeTag::Int64),
            'd' => Some(TypeTag::Float64),
            's' => Some(TypeTag::String),
            'T' => Some(TypeTag::True),
            'F' => Some(TypeTag::False),
            'm' => Some(TypeTag::Midi),
            _ => None,
        }
    }

    pub fn as_char(&self) -> char {
        match self {
            TypeTag::Int32 => 'i',
            TypeTag::Int64 => 'h',
            TypeTag::Float64 => 'd',
            TypeTag::String => 's',
            TypeTag::True => 'T',
            TypeTag::False => 'F',
            TypeTag::Midi => 'm',
        }
    }

    /// Number of payload bytes, `None` for strings (variable length)
    pub fn payload_size(&self) -> Option<usize> {
        match self {
            TypeTag::Int32 | TypeTag::Midi => Some(4),
            TypeTag::Int64 | TypeTag::Float64 => Some(8),
            TypeTag::True | TypeTag::False => Some(0),
            TypeTag::String => None,
        }
    }

    /// Parse a full tag string (without the leading ',')
    pub fn parse_all(tags: &str) -> Result<Vec<TypeTag>> {
        tags.chars()
            .map(|c| TypeTag::from_char(c).ok_or(Error::UnsupportedTag(c)))
            .collect()
    }
}

impl std::fmt::Display for TypeTag {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_char())
    }
}

/// A MIDI message packed as the OSC `m` quad: port id, status, data1, data2
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct MidiMessage {
    pub port: u8,
    pub status: u8,
    pub data1: u8,
    pub data2: u8,
}

impl MidiMessage {
    pub fn new(port: u8, status: u8, data1: u8, data2: u8) -> Self {
        Self {
            port,
            status,
            data1,
            data2,
        }
    }

    /// Build from exactly four raw bytes
    pub fn from_slice(bytes: &[u8]) -> Result<Self> {
        match *bytes {
            [port, status, data1, data2] => Ok(Self::new(port, status, data1, data2)),
            _ => Err(Error::InvalidMidi(bytes.len())),
        }
    }

    pub fn to_bytes(&self) -> [u8; 4] {
        [self.port, self.status, self.data1, self.data2]
    }
}

impl From<[u8; 4]> for MidiMessage {
    fn from(b: [u8; 4]) -> Self {
        Self::new(b[0], b[1], b[2], b[3])
    }
}

/// A single OSC argument value
#[derive(Debug, Clone, PartialEq)]
pub enum OscArg {
    Int32(i32),
    Int64(i64),
    Float64(f64),
    String(String),
    /// Truth value travels in the tag, never in the payload
    Bool(bool),
    /// Raw bytes; only accepted for the `m` tag and only when 4 bytes long
    Blob(Vec<u8>),
    Midi(MidiMessage),
}

impl OscArg {
    /// Canonical tag for this value
    pub fn tag(&self) -> TypeTag {
        match self {
            OscArg::Int32(_) => TypeTag::Int32,
            OscArg::Int64(_) => TypeTag::Int64,
            OscArg::Float64(_) => TypeTag::Float64,
            OscArg::String(_) => TypeTag::String,
            OscArg::Bool(true) => TypeTag::True,
            OscArg::Bool(false) => TypeTag::False,
            OscArg::Blob(_) | OscArg::Midi(_) => TypeTag::Midi,
        }
    }

    pub fn type_name(&self) -> &'static str {
        match self {
            OscArg::Int32(_) => "int32",
            OscArg::Int64(_) => "int64",
            OscArg::Float64(_) => "float64",
            OscArg::String(_) => "string",
            OscArg::Bool(_) => "bool",
            OscArg::Blob(_) => "blob",
            OscArg::Midi(_) => "midi",
        }
    }

    /// Whether this value may be encoded under `tag`
    pub fn fits(&self, tag: TypeTag) -> bool {
        matches!(
            (tag, self),
            (TypeTag::Int32, OscArg::Int32(_))
                | (TypeTag::Int64, OscArg::Int64(_))
                | (TypeTag::Float64, OscArg::Float64(_))
                | (TypeTag::String, OscArg::String(_))
                | (TypeTag::True | TypeTag::False, OscArg::Bool(_))
                | (TypeTag::Midi, OscArg::Midi(_) | OscArg::Blob(_))
        )
    }
}

/// Derive the tag string for an argument list
pub fn type_tags(args: &[OscArg]) -> String {
    args.iter().map(|a| a.tag().as_char()).collect()
}

impl From<i32> for OscArg {
    fn from(v: i32) -> Self {
        OscArg::Int32(v)
    }
}

impl From<i64> for OscArg {
    fn from(v: i64) -> Self {
        OscArg::Int64(v)
    }
}

impl From<f64> for OscArg {
    fn from(v: f64) -> Self {
        OscArg::Float64(v)
    }
}

impl From<bool> for OscArg {
    fn from(v: bool) -> Self {
        OscArg::Bool(v)
    }
}

impl From<&str> for OscArg {
    fn from(v: &str) -> Self {
        OscArg::String(v.to_string())
    }
}

impl From<String> for OscArg {
    fn from(v: String) -> Self {
        OscArg::String(v)
    }
}

impl From<MidiMessage> for OscArg {
    fn from(v: MidiMessage) -> Self {
        OscArg::Midi(v)
    }
}
