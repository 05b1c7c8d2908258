//! Parameter bounds and accepted values for every catalog command

use crate::validate::Limit;

pub const BPM: Limit<i32> = Limit::new("bpm", 32, 999);
pub const LPB: Limit<i32> = Limit::new("lpb", 1, 256);
pub const OCTAVE: Limit<i32> = Limit::new("octave", 0, 8);
pub const EDIT_STEP: Limit<i32> = Limit::new("edit step", 0, 64);
pub const QUANTIZATION_STEP: Limit<i32> = Limit::new("quantization step", 1, 32);

pub const SEQUENCE_POS: Limit<i32> = Limit::new("sequence position", 1, i32::MAX);
pub const LOOP_START: Limit<f64> = Limit::new("loop start", 0.0, f64::MAX);

pub const OUTPUT_DELAY: Limit<f64> = Limit::new("output delay", -100.0, 100.0);
pub const PANNING: Limit<f64> = Limit::new("panning", -50.0, 50.0);
pub const WIDTH: Limit<f64> = Limit::new("width", 0.0, 1.0);

/// +3 dB
pub const TRACK_VOLUME_MAX: f64 = 1.412_537_544_622_754_4;
pub const TRACK_VOLUME: Limit<f64> = Limit::new("track volume", 0.0, TRACK_VOLUME_MAX);
pub const TRACK_VOLUME_DB: Limit<f64> = Limit::new("track volume (dB)", -200.0, 3.0);

/// +6 dB
pub const INSTRUMENT_VOLUME_MAX: f64 = 1.995_262_314_968_879_5;
pub const INSTRUMENT_VOLUME: Limit<f64> =
    Limit::new("instrument volume", 0.0, INSTRUMENT_VOLUME_MAX);
pub const INSTRUMENT_VOLUME_DB: Limit<f64> =
    Limit::new("instrument volume (dB)", -200.0, 6.0);

pub const PARAMETER_INDEX: Limit<i32> = Limit::new("parameter index", 1, i32::MAX);
/// Any finite value
pub const PARAMETER_VALUE: Limit<f64> = Limit::new("parameter value", f64::MIN, f64::MAX);
pub const MACRO_NUMBER: Limit<i32> = Limit::new("macro", 1, 8);
pub const MACRO_VALUE: Limit<f64> = Limit::new("macro value", 0.0, 1.0);
pub const GLIDE: Limit<i32> = Limit::new("glide", 0, 255);
pub const PHRASE_PROGRAM: Limit<i32> = Limit::new("phrase program", 0, 127);
pub const TRANSPOSE: Limit<i32> = Limit::new("transpose", -120, 120);

pub const NOTE: Limit<i32> = Limit::new("note", 0, 119);
pub const VELOCITY: Limit<i32> = Limit::new("velocity", 0, 127);

pub const PHRASE_PLAYBACK_MODES: &[&str] = &["Off", "Program", "Keymap"];

pub const QUANTIZE_MODES: &[&str] = &["None", "Line", "Beat", "Bar"];

pub const SCALE_KEYS: &[&str] = &[
    "C", "C#", "D", "D#", "E", "F", "F#", "G", "G#", "A", "A#", "B",
];

pub const SCALE_MODES: &[&str] = &[
    "None",
    "Natural Major",
    "Natural Minor",
    "Pentatonic Major",
    "Pentatonic Minor",
    "Egyptian",
    "Blues Major",
    "Blues Minor",
    "Whole Tone",
    "Augmented",
    "Prometheus",
    "Tritone",
    "Harmonic Major",
    "Harmonic Minor",
    "Melodic Minor",
    "All Minor",
    "Dorian",
    "Phrygian",
    "Phrygian Dominant",
    "Lydian",
    "Lydian Augmented",
    "Mixolydian",
    "Locrian",
    "Locrian Major",
    "Super Locrian",
    "Neapolitan Major",
    "Neapolitan Minor",
    "Romanian Minor",
    "Spanish Gypsy",
    "Hungarian Gypsy",
    "Enigmatic",
    "Overtone",
    "Diminished Half",
    "Diminished Whole",
    "Spanish Eight-Tone",
    "Nine-Tone Scale",
];
