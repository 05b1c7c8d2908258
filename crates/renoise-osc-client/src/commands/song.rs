//! Song, edit, record and sequence commands

use super::limits::{BPM, EDIT_STEP, LPB, OCTAVE, QUANTIZATION_STEP, SEQUENCE_POS};
use super::{Checked, Command};
use crate::validate::Limit;
use crate::{Renoise, Result, SendOutcome};

fn single(suffix: &str, limit: Limit<i32>, value: i32) -> Checked {
    limit.check(value).map(|v| Command::new(suffix).arg(v))
}

impl Renoise {
    /// Tempo in beats per minute, 32-999
    pub fn set_bpm(&self, bpm: i32) -> Result<SendOutcome> {
        self.submit(single("/song/bpm", BPM, bpm))
    }

    /// Lines per beat, 1-256
    pub fn set_lpb(&self, lpb: i32) -> Result<SendOutcome> {
        self.submit(single("/song/lpb", LPB, lpb))
    }

    pub fn set_edit_mode(&self, enabled: bool) -> Result<SendOutcome> {
        self.submit(Ok(Command::new("/song/edit/mode").arg(enabled)))
    }

    /// Keyboard octave, 0-8
    pub fn set_octave(&self, octave: i32) -> Result<SendOutcome> {
        self.submit(single("/song/edit/octave", OCTAVE, octave))
    }

    /// Lines to advance after entering a note, 0-64
    pub fn set_edit_step(&self, step: i32) -> Result<SendOutcome> {
        self.submit(single("/song/edit/step", EDIT_STEP, step))
    }

    pub fn set_pattern_follow(&self, enabled: bool) -> Result<SendOutcome> {
        self.submit(Ok(Command::new("/song/edit/pattern_follow").arg(enabled)))
    }

    pub fn set_metronome(&self, enabled: bool) -> Result<SendOutcome> {
        self.submit(Ok(Command::new("/song/record/metronome").arg(enabled)))
    }

    pub fn set_metronome_precount(&self, enabled: bool) -> Result<SendOutcome> {
        self.submit(Ok(Command::new("/song/record/metronome_precount").arg(enabled)))
    }

    /// Record quantization on/off
    pub fn set_quantization(&self, enabled: bool) -> Result<SendOutcome> {
        self.submit(Ok(Command::new("/song/record/quantization").arg(enabled)))
    }

    /// Record quantization step in lines, 1-32. Sent as an integer.
    pub fn set_quantization_step(&self, step: i32) -> Result<SendOutcome> {
        self.submit(single("/song/record/quantization_step", QUANTIZATION_STEP, step))
    }

    pub fn set_chord_mode(&self, enabled: bool) -> Result<SendOutcome> {
        self.submit(Ok(Command::new("/song/record/chord_mode").arg(enabled)))
    }

    /// Jump to a sequence position immediately
    pub fn trigger_sequence(&self, position: i32) -> Result<SendOutcome> {
        self.submit(single("/song/sequence/trigger", SEQUENCE_POS, position))
    }

    /// Replace the playback schedule with one sequence position
    pub fn schedule_sequence(&self, position: i32) -> Result<SendOutcome> {
        self.submit(single("/song/sequence/schedule_set", SEQUENCE_POS, position))
    }

    /// Append a sequence position to the playback schedule
    pub fn add_scheduled_sequence(&self, position: i32) -> Result<SendOutcome> {
        self.submit(single("/song/sequence/schedule_add", SEQUENCE_POS, position))
    }

    pub fn mute_slot(&self, track: i32, position: i32) -> Result<SendOutcome> {
        self.submit(slot("/song/sequence/slot_mute", track, position))
    }

    pub fn unmute_slot(&self, track: i32, position: i32) -> Result<SendOutcome> {
        self.submit(slot("/song/sequence/slot_unmute", track, position))
    }
}

fn slot(suffix: &str, track: i32, position: i32) -> Checked {
    let track = Limit::new("track", 1, i32::MAX).check(track)?;
    let position = SEQUENCE_POS.check(position)?;
    Ok(Command::new(suffix).arg(track).arg(position))
}
