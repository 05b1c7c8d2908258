//! Live note and MIDI triggering

use renoise_osc_core::MidiMessage;

use super::limits::{NOTE, VELOCITY};
use super::{Checked, Command};
use crate::validate::check_index;
use crate::{Renoise, Result, SendOutcome};

fn note_on(instrument: i32, track: i32, note: i32, velocity: i32) -> Checked {
    let instrument = check_index("instrument", instrument)?;
    let track = check_index("track", track)?;
    let note = NOTE.check(note)?;
    let velocity = VELOCITY.check(velocity)?;
    Ok(Command::new("/trigger/note_on")
        .arg(instrument)
        .arg(track)
        .arg(note)
        .arg(velocity))
}

fn note_off(instrument: i32, track: i32, note: i32) -> Checked {
    let instrument = check_index("instrument", instrument)?;
    let track = check_index("track", track)?;
    let note = NOTE.check(note)?;
    Ok(Command::new("/trigger/note_off")
        .arg(instrument)
        .arg(track)
        .arg(note))
}

impl Renoise {
    /// Play `note` (0-119, C-0 to B-9) at `velocity` (0-127)
    pub fn note_on(&self, instrument: i32, track: i32, note: i32, velocity: i32) -> Result<SendOutcome> {
        self.submit(note_on(instrument, track, note, velocity))
    }

    pub fn note_off(&self, instrument: i32, track: i32, note: i32) -> Result<SendOutcome> {
        self.submit(note_off(instrument, track, note))
    }

    /// Feed a raw MIDI message into Renoise's MIDI input
    pub fn send_midi(&self, message: MidiMessage) -> Result<SendOutcome> {
        self.submit(Ok(Command::new("/trigger/midi").arg(message)))
    }
}
