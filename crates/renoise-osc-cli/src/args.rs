//! Parsing raw `send` arguments against a tag string

use anyhow::{anyhow, bail, Context, Result};
use renoise_osc_core::{MidiMessage, OscArg, TypeTag};

/// One argument per tag; `T` and `F` consume no value
pub fn parse_args(tags: &str, values: &[String]) -> Result<Vec<OscArg>> {
    let tags = TypeTag::parse_all(tags.trim_start_matches(','))?;
    let mut values = values.iter();
    let mut args = Vec::with_capacity(tags.len());

    for (index, tag) in tags.into_iter().enumerate() {
        let arg = match tag {
            TypeTag::True => OscArg::Bool(true),
            TypeTag::False => OscArg::Bool(false),
            _ => {
                let raw = values
                    .next()
                    .ok_or_else(|| anyhow!("Missing value for argument {} ('{}')", index, tag))?;
                parse_value(tag, raw)
                    .with_context(|| format!("Argument {} ('{}'): {:?}", index, tag, raw))?
            }
        };
        args.push(arg);
    }

    let extra = values.count();
    if extra > 0 {
        bail!("{} value(s) left over after the tag string", extra);
    }
    Ok(args)
}

fn parse_value(tag: TypeTag, raw: &str) -> Result<OscArg> {
    Ok(match tag {
        TypeTag::Int32 => OscArg::Int32(raw.parse()?),
        TypeTag::Int64 => OscArg::Int64(raw.parse()?),
        TypeTag::Float64 => OscArg::Float64(raw.parse()?),
        TypeTag::String => OscArg::String(raw.to_string()),
        TypeTag::Midi => OscArg::Midi(parse_midi(raw)?),
        TypeTag::True => OscArg::Bool(true),
        TypeTag::False => OscArg::Bool(false),
    })
}

/// `port,status,data1,data2`, each decimal or `0x` hex
fn parse_midi(raw: &str) -> Result<MidiMessage> {
    let bytes = raw
        .split(',')
        .map(|part| parse_byte(part.trim()))
        .collect::<Result<Vec<u8>>>()?;
    Ok(MidiMessage::from_slice(&bytes)?)
}

fn parse_byte(part: &str) -> Result<u8> {
    match part.strip_prefix("0x").or_else(|| part.strip_prefix("0X")) {
        Some(hex) => u8::from_str_radix(hex, 16).context("Invalid hex byte"),
        None => part.parse().context("Invalid byte"),
    }
}
