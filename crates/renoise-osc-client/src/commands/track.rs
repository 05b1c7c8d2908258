//! Track and track device commands

use super::limits::{
    OUTPUT_DELAY, PANNING, PARAMETER_INDEX, PARAMETER_VALUE, TRACK_VOLUME, TRACK_VOLUME_DB,
    WIDTH,
};
use super::{Checked, Command};
use crate::validate::{check_index, check_non_empty, Limit};
use crate::{Renoise, Result, SendOutcome};

/// Rejecting float parameter on `/song/track/<track>/<name>`
fn checked(track: i32, name: &str, limit: Limit<f64>, value: f64) -> Checked {
    let track = check_index("track", track)?;
    let value = limit.check(value)?;
    Ok(Command::at(&[&"song", &"track", &track, &name]).arg(value))
}

/// Clamping float parameter on `/song/track/<track>/<name>`
fn clamped(track: i32, name: &str, limit: Limit<f64>, value: f64) -> Checked {
    let track = check_index("track", track)?;
    let value = limit.clamp(value)?;
    Ok(Command::at(&[&"song", &"track", &track, &name]).arg(value))
}

fn action(track: i32, name: &str) -> Checked {
    let track = check_index("track", track)?;
    Ok(Command::at(&[&"song", &"track", &track, &name]))
}

fn device(track: i32, device: i32, name: &str) -> Checked {
    let track = check_index("track", track)?;
    let device = check_index("device", device)?;
    Ok(Command::at(&[&"song", &"track", &track, &"device", &device, &name]))
}

fn parameter_by_index(track: i32, device_index: i32, parameter: i32, value: f64) -> Checked {
    let cmd = device(track, device_index, "set_parameter_by_index")?;
    let parameter = PARAMETER_INDEX.check(parameter)?;
    let value = PARAMETER_VALUE.check(value)?;
    Ok(cmd.arg(parameter).arg(value))
}

fn parameter_by_name(track: i32, device_index: i32, name: &str, value: f64) -> Checked {
    let cmd = device(track, device_index, "set_parameter_by_name")?;
    let name = check_non_empty("parameter name", name)?;
    let value = PARAMETER_VALUE.check(value)?;
    Ok(cmd.arg(name).arg(value))
}

impl Renoise {
    pub fn mute_track(&self, track: i32) -> Result<SendOutcome> {
        self.submit(action(track, "mute"))
    }

    pub fn unmute_track(&self, track: i32) -> Result<SendOutcome> {
        self.submit(action(track, "unmute"))
    }

    pub fn solo_track(&self, track: i32) -> Result<SendOutcome> {
        self.submit(action(track, "solo"))
    }

    /// Output delay in milliseconds, -100 to 100
    pub fn set_track_output_delay(&self, track: i32, ms: f64) -> Result<SendOutcome> {
        self.submit(checked(track, "output_delay", OUTPUT_DELAY, ms))
    }

    /// Pre-FX panning, -50 (left) to 50 (right)
    pub fn set_track_prefx_panning(&self, track: i32, pan: f64) -> Result<SendOutcome> {
        self.submit(checked(track, "prefx_panning", PANNING, pan))
    }

    /// Post-FX panning, -50 (left) to 50 (right)
    pub fn set_track_postfx_panning(&self, track: i32, pan: f64) -> Result<SendOutcome> {
        self.submit(checked(track, "postfx_panning", PANNING, pan))
    }

    /// Pre-FX linear volume, clamped to 0..=+3 dB
    pub fn set_track_prefx_volume(&self, track: i32, volume: f64) -> Result<SendOutcome> {
        self.submit(clamped(track, "prefx_volume", TRACK_VOLUME, volume))
    }

    /// Post-FX linear volume, clamped to 0..=+3 dB
    pub fn set_track_postfx_volume(&self, track: i32, volume: f64) -> Result<SendOutcome> {
        self.submit(clamped(track, "postfx_volume", TRACK_VOLUME, volume))
    }

    /// Pre-FX volume in dB, clamped to -200..=3
    pub fn set_track_prefx_volume_db(&self, track: i32, db: f64) -> Result<SendOutcome> {
        self.submit(clamped(track, "prefx_volume_db", TRACK_VOLUME_DB, db))
    }

    /// Post-FX volume in dB, clamped to -200..=3
    pub fn set_track_postfx_volume_db(&self, track: i32, db: f64) -> Result<SendOutcome> {
        self.submit(clamped(track, "postfx_volume_db", TRACK_VOLUME_DB, db))
    }

    /// Pre-FX stereo width, 0 to 1
    pub fn set_track_prefx_width(&self, track: i32, width: f64) -> Result<SendOutcome> {
        self.submit(checked(track, "prefx_width", WIDTH, width))
    }

    pub fn bypass_device(&self, track: i32, device_index: i32, bypass: bool) -> Result<SendOutcome> {
        self.submit(device(track, device_index, "bypass").map(|cmd| cmd.arg(bypass)))
    }

    pub fn set_device_parameter_by_index(
        &self,
        track: i32,
        device_index: i32,
        parameter: i32,
        value: f64,
    ) -> Result<SendOutcome> {
        self.submit(parameter_by_index(track, device_index, parameter, value))
    }

    pub fn set_device_parameter_by_name(
        &self,
        track: i32,
        device_index: i32,
        name: &str,
        value: f64,
    ) -> Result<SendOutcome> {
        self.submit(parameter_by_name(track, device_index, name, value))
    }
}
