//! Instrument commands

use super::limits::{
    GLIDE, INSTRUMENT_VOLUME, INSTRUMENT_VOLUME_DB, MACRO_NUMBER, MACRO_VALUE,
    PHRASE_PLAYBACK_MODES, PHRASE_PROGRAM, QUANTIZE_MODES, SCALE_KEYS, SCALE_MODES, TRANSPOSE,
};
use super::{Checked, Command};
use crate::validate::{check_choice, check_index};
use crate::{Renoise, Result, SendOutcome};

fn instrument(instrument: i32, name: &str) -> Checked {
    let instrument = check_index("instrument", instrument)?;
    Ok(Command::at(&[&"song", &"instrument", &instrument, &name]))
}

fn choice(
    index: i32,
    name: &str,
    parameter: &'static str,
    value: &str,
    choices: &'static [&'static str],
) -> Checked {
    let cmd = instrument(index, name)?;
    Ok(cmd.arg(check_choice(parameter, value, choices)?))
}

fn macro_value(index: i32, number: i32, value: f64) -> Checked {
    let number = MACRO_NUMBER.check(number)?;
    let value = MACRO_VALUE.check(value)?;
    Ok(instrument(index, &format!("macro{}", number))?.arg(value))
}

impl Renoise {
    /// Macro `number` (1-8) to `value` (0-1)
    pub fn set_instrument_macro(&self, index: i32, number: i32, value: f64) -> Result<SendOutcome> {
        self.submit(macro_value(index, number, value))
    }

    pub fn set_instrument_monophonic(&self, index: i32, enabled: bool) -> Result<SendOutcome> {
        self.submit(instrument(index, "monophonic").map(|cmd| cmd.arg(enabled)))
    }

    /// Glide amount, 0-255
    pub fn set_instrument_monophonic_glide(&self, index: i32, glide: i32) -> Result<SendOutcome> {
        self.submit(
            instrument(index, "monophonic_glide")
                .and_then(|cmd| Ok(cmd.arg(GLIDE.check(glide)?))),
        )
    }

    /// One of `Off`, `Program`, `Keymap`
    pub fn set_instrument_phrase_playback(&self, index: i32, mode: &str) -> Result<SendOutcome> {
        self.submit(choice(index, "phrase_playback", "phrase playback", mode, PHRASE_PLAYBACK_MODES))
    }

    /// Phrase program, 0-127
    pub fn set_instrument_phrase_program(&self, index: i32, program: i32) -> Result<SendOutcome> {
        self.submit(
            instrument(index, "phrase_program")
                .and_then(|cmd| Ok(cmd.arg(PHRASE_PROGRAM.check(program)?))),
        )
    }

    /// Note quantization: `None`, `Line`, `Beat` or `Bar`
    pub fn set_instrument_quantize(&self, index: i32, mode: &str) -> Result<SendOutcome> {
        self.submit(choice(index, "quantize", "quantize", mode, QUANTIZE_MODES))
    }

    /// Scale root note, `C` through `B` with sharps
    pub fn set_instrument_scale_key(&self, index: i32, key: &str) -> Result<SendOutcome> {
        self.submit(choice(index, "scale_key", "scale key", key, SCALE_KEYS))
    }

    /// Scale name as shown in Renoise, e.g. `Natural Minor`
    pub fn set_instrument_scale_mode(&self, index: i32, mode: &str) -> Result<SendOutcome> {
        self.submit(choice(index, "scale_mode", "scale mode", mode, SCALE_MODES))
    }

    /// Global transpose in semitones, -120 to 120
    pub fn set_instrument_transpose(&self, index: i32, semitones: i32) -> Result<SendOutcome> {
        self.submit(
            instrument(index, "transpose")
                .and_then(|cmd| Ok(cmd.arg(TRANSPOSE.check(semitones)?))),
        )
    }

    /// Linear volume, clamped to 0..=+6 dB
    pub fn set_instrument_volume(&self, index: i32, volume: f64) -> Result<SendOutcome> {
        self.submit(
            instrument(index, "volume")
                .and_then(|cmd| Ok(cmd.arg(INSTRUMENT_VOLUME.clamp(volume)?))),
        )
    }

    /// Volume in dB, clamped to -200..=6
    pub fn set_instrument_volume_db(&self, index: i32, db: f64) -> Result<SendOutcome> {
        self.submit(
            instrument(index, "volume_db")
                .and_then(|cmd| Ok(cmd.arg(INSTRUMENT_VOLUME_DB.clamp(db)?))),
        )
    }
}
