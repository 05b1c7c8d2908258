//! Parameter validation for catalog commands
//!
//! Two policies exist and they are not interchangeable: most parameters are
//! rejected when out of range ([`Limit::check`]), volume-style parameters are
//! clamped into range ([`Limit::clamp`]). NaN never passes either.

use std::fmt::Display;
use thiserror::Error;

/// Why a command was not sent
#[derive(Error, Debug, Clone, PartialEq)]
pub enum Rejection {
    #[error("{parameter} must be between {min} and {max}, got {value}")]
    OutOfRange {
        parameter: &'static str,
        value: String,
        min: String,
        max: String,
    },

    #[error("{parameter} must be one of [{}], got {value:?}", .choices.join(", "))]
    NotAChoice {
        parameter: &'static str,
        value: String,
        choices: &'static [&'static str],
    },

    #[error("{parameter} must be -1 (selected) or at least 1, got {value}")]
    InvalidIndex { parameter: &'static str, value: i32 },

    #[error("{parameter} must not be empty")]
    Empty { parameter: &'static str },

    #[error("{parameter} is not a number")]
    NotANumber { parameter: &'static str },
}

impl Rejection {
    pub fn parameter(&self) -> &'static str {
        match self {
            Rejection::OutOfRange { parameter, .. }
            | Rejection::NotAChoice { parameter, .. }
            | Rejection::InvalidIndex { parameter, .. }
            | Rejection::Empty { parameter }
            | Rejection::NotANumber { parameter } => *parameter,
        }
    }
}

/// An inclusive range attached to a parameter name
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Limit<T> {
    pub parameter: &'static str,
    pub min: T,
    pub max: T,
}

impl<T> Limit<T> {
    pub const fn new(parameter: &'static str, min: T, max: T) -> Self {
        Self {
            parameter,
            min,
            max,
        }
    }
}

impl<T: PartialOrd + Copy + Display> Limit<T> {
    /// Inclusive on both ends; NaN is never contained
    pub fn contains(&self, value: T) -> bool {
        value >= self.min && value <= self.max
    }

    /// Pass `value` through unchanged or reject it
    pub fn check(&self, value: T) -> Result<T, Rejection> {
        if self.contains(value) {
            Ok(value)
        } else if is_nan(value) {
            Err(Rejection::NotANumber {
                parameter: self.parameter,
            })
        } else {
            Err(self.out_of_range(value))
        }
    }

    /// Pull `value` into range; only NaN is rejected
    pub fn clamp(&self, value: T) -> Result<T, Rejection> {
        if is_nan(value) {
            Err(Rejection::NotANumber {
                parameter: self.parameter,
            })
        } else if value < self.min {
            Ok(self.min)
        } else if value > self.max {
            Ok(self.max)
        } else {
            Ok(value)
        }
    }

    fn out_of_range(&self, value: T) -> Rejection {
        Rejection::OutOfRange {
            parameter: self.parameter,
            value: value.to_string(),
            min: self.min.to_string(),
            max: self.max.to_string(),
        }
    }
}

fn is_nan<T: PartialOrd>(value: T) -> bool {
    value.partial_cmp(&value).is_none()
}

/// Match `value` against a fixed set, ignoring ASCII case; returns the
/// canonical spelling
pub fn check_choice(
    parameter: &'static str,
    value: &str,
    choices: &'static [&'static str],
) -> Result<&'static str, Rejection> {
    choices
        .iter()
        .find(|c| c.eq_ignore_ascii_case(value.trim()))
        .copied()
        .ok_or_else(|| Rejection::NotAChoice {
            parameter,
            value: value.to_string(),
            choices,
        })
}

/// Track, instrument and device indices: -1 means "selected"
pub fn check_index(parameter: &'static str, value: i32) -> Result<i32, Rejection> {
    if value == -1 || value >= 1 {
        Ok(value)
    } else {
        Err(Rejection::InvalidIndex { parameter, value })
    }
}

pub fn check_non_empty<'a>(parameter: &'static str, value: &'a str) -> Result<&'a str, Rejection> {
    if value.trim().is_empty() {
        Err(Rejection::Empty { parameter })
    } else {
        Ok(value)
    }
}

/// Decibels to linear gain
pub fn db_to_linear(db: f64) -> f64 {
    10f64.powf(db / 20.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    const BPM: Limit<i32> = Limit::new("bpm", 32, 999);
    const GAIN: Limit<f64> = Limit::new("gain", 0.0, 1.0);

    #[test]
    fn test_check_inclusive() {
        assert_eq!(BPM.check(32), Ok(32));
        assert_eq!(BPM.check(999), Ok(999));
        assert!(BPM.check(31).is_err());
        assert!(BPM.check(1000).is_err());
    }

    #[test]
    fn test_rejection_message() {
        let err = BPM.check(1000).unwrap_err();
        assert_eq!(err.to_string(), "bpm must be between 32 and 999, got 1000");
        assert_eq!(err.parameter(), "bpm");
    }

    #[test]
    fn test_clamp() {
        assert_eq!(GAIN.clamp(2.0), Ok(1.0));
        assert_eq!(GAIN.clamp(-1.0), Ok(0.0));
        assert_eq!(GAIN.clamp(0.5), Ok(0.5));
    }

    #[test]
    fn test_nan() {
        assert_eq!(
            GAIN.clamp(f64::NAN),
            Err(Rejection::NotANumber { parameter: "gain" })
        );
        assert_eq!(
            GAIN.check(f64::NAN),
            Err(Rejection::NotANumber { parameter: "gain" })
        );
    }

    #[test]
    fn test_choice() {
        const MODES: &[&str] = &["None", "Line", "Beat", "Bar"];
        assert_eq!(check_choice("quantize", "Beat", MODES), Ok("Beat"));
        assert_eq!(check_choice("quantize", "bar", MODES), Ok("Bar"));
        let err = check_choice("quantize", "Pattern", MODES).unwrap_err();
        assert_eq!(
            err.to_string(),
            "quantize must be one of [None, Line, Beat, Bar], got \"Pattern\""
        );
    }

    #[test]
    fn test_index() {
        assert_eq!(check_index("track", -1), Ok(-1));
        assert_eq!(check_index("track", 1), Ok(1));
        assert!(check_index("track", 0).is_err());
        assert!(check_index("track", -2).is_err());
    }

    #[test]
    fn test_db_to_linear() {
        assert!((db_to_linear(6.0) - 1.9952623149688795).abs() < 1e-12);
        assert!((db_to_linear(3.0) - 1.4125375446227544).abs() < 1e-12);
        assert_eq!(db_to_linear(0.0), 1.0);
    }
}
