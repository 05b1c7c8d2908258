//! Scripting and transport commands

use super::limits::{LOOP_START, SEQUENCE_POS};
use super::{Checked, Command};
use crate::validate::{check_non_empty, Rejection};
use crate::{Renoise, Result, SendOutcome};

impl Renoise {
    /// Run a Lua expression inside Renoise
    pub fn evaluate(&self, code: &str) -> Result<SendOutcome> {
        self.submit(check_non_empty("lua code", code).map(|code| Command::new("/evaluate").arg(code)))
    }

    pub fn start(&self) -> Result<SendOutcome> {
        self.submit(Ok(Command::new("/transport/start")))
    }

    pub fn stop(&self) -> Result<SendOutcome> {
        self.submit(Ok(Command::new("/transport/stop")))
    }

    /// Resume playback from the current position
    pub fn continue_playback(&self) -> Result<SendOutcome> {
        self.submit(Ok(Command::new("/transport/continue")))
    }

    /// Stop all playing notes
    pub fn panic(&self) -> Result<SendOutcome> {
        self.submit(Ok(Command::new("/transport/panic")))
    }

    pub fn loop_pattern(&self, enabled: bool) -> Result<SendOutcome> {
        self.submit(Ok(Command::new("/transport/loop/pattern").arg(enabled)))
    }

    pub fn loop_block(&self, enabled: bool) -> Result<SendOutcome> {
        self.submit(Ok(Command::new("/transport/loop/block").arg(enabled)))
    }

    pub fn loop_block_move_forwards(&self) -> Result<SendOutcome> {
        self.submit(Ok(Command::new("/transport/loop/block_move_forwards")))
    }

    pub fn loop_block_move_backwards(&self) -> Result<SendOutcome> {
        self.submit(Ok(Command::new("/transport/loop/block_move_backwards")))
    }

    /// Loop a range given in lines
    pub fn loop_range(&self, start: f64, end: f64) -> Result<SendOutcome> {
        self.submit(loop_span("/transport/loop/range", start, end))
    }

    /// Loop a range given in beats
    pub fn loop_range_beats(&self, start: f64, end: f64) -> Result<SendOutcome> {
        self.submit(loop_span("/transport/loop/range_beats", start, end))
    }

    /// Loop sequence positions `start..=end`
    pub fn loop_sequence(&self, start: i32, end: i32) -> Result<SendOutcome> {
        self.submit(loop_sequence(start, end))
    }
}

fn loop_span(suffix: &str, start: f64, end: f64) -> Checked {
    let start = LOOP_START.check(start)?;
    let end = LOOP_START.check(end)?;
    if end <= start {
        return Err(Rejection::OutOfRange {
            parameter: "loop end",
            value: end.to_string(),
            min: format!("more than {}", start),
            max: f64::MAX.to_string(),
        });
    }
    Ok(Command::new(suffix).arg(start).arg(end))
}

fn loop_sequence(start: i32, end: i32) -> Checked {
    let start = SEQUENCE_POS.check(start)?;
    let end = SEQUENCE_POS.check(end)?;
    if end < start {
        return Err(Rejection::OutOfRange {
            parameter: "sequence end",
            value: end.to_string(),
            min: start.to_string(),
            max: i32::MAX.to_string(),
        });
    }
    Ok(Command::new("/transport/loop/sequence").arg(start).arg(end))
}
