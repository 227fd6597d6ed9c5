//! Note model — one sine-tone sound event.
//!
//! A note is either a bare frequency (duration multiplier 1, volume 1) or a
//! full note carrying its own duration multiplier and volume. Frequency 0 is
//! silence.

use serde::{Deserialize, Deserializer};
use serde_json::Value;

use crate::error::NoteError;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Note {
    /// A bare frequency in Hz.
    Bare(f64),
    Full {
        frequency: f64,
        /// Multiplier applied to the nominal time step.
        duration: f64,
        /// Linear gain; 0 renders silence.
        volume: f64,
    },
}

impl Note {
    pub fn new(frequency: f64) -> Self {
        Note::Bare(frequency)
    }

    pub fn full(frequency: f64, duration: f64, volume: f64) -> Self {
        Note::Full {
            frequency,
            duration,
            volume,
        }
    }

    pub fn with_duration(frequency: f64, duration: f64) -> Self {
        Note::full(frequency, duration, 1.0)
    }

    /// A zero-frequency rest lasting `duration` time steps.
    pub fn silent(duration: f64) -> Self {
        Note::full(0.0, duration, 0.0)
    }

    pub fn frequency(&self) -> f64 {
        match *self {
            Note::Bare(frequency) => frequency,
            Note::Full { frequency, .. } => frequency,
        }
    }

    pub fn duration(&self) -> f64 {
        match *self {
            Note::Bare(_) => 1.0,
            Note::Full { duration, .. } => duration,
        }
    }

    pub fn volume(&self) -> f64 {
        match *self {
            Note::Bare(_) => 1.0,
            Note::Full { volume, .. } => volume,
        }
    }

    /// Read a note from JSON: a number is a bare note, an object with a
    /// `frequency` key (and optional `duration`, `volume`) is a full note.
    pub fn from_json(value: &Value) -> Result<Note, NoteError> {
        match value {
            Value::Number(n) => {
                let frequency = n.as_f64().ok_or_else(|| not_a_note(value))?;
                check_frequency(frequency)?;
                Ok(Note::Bare(frequency))
            }
            Value::Object(map) => {
                let frequency = map
                    .get("frequency")
                    .and_then(Value::as_f64)
                    .ok_or_else(|| not_a_note(value))?;
                check_frequency(frequency)?;
                let duration = optional_number(value, map.get("duration"))?.unwrap_or(1.0);
                if !duration.is_finite() || duration <= 0.0 {
                    return Err(NoteError::InvalidDuration(duration));
                }
                let volume = optional_number(value, map.get("volume"))?.unwrap_or(1.0);
                Ok(Note::full(frequency, duration, volume))
            }
            _ => Err(not_a_note(value)),
        }
    }
}

fn check_frequency(frequency: f64) -> Result<(), NoteError> {
    if frequency.is_finite() && frequency >= 0.0 {
        Ok(())
    } else {
        Err(NoteError::InvalidFrequency(frequency))
    }
}

fn optional_number(note: &Value, field: Option<&Value>) -> Result<Option<f64>, NoteError> {
    match field {
        None | Some(Value::Null) => Ok(None),
        Some(v) => v.as_f64().map(Some).ok_or_else(|| not_a_note(note)),
    }
}

fn not_a_note(value: &Value) -> NoteError {
    NoteError::NotANote {
        found: value.to_string(),
    }
}

impl From<f64> for Note {
    fn from(frequency: f64) -> Self {
        Note::Bare(frequency)
    }
}

impl From<i32> for Note {
    fn from(frequency: i32) -> Self {
        Note::Bare(frequency as f64)
    }
}

impl<'de> Deserialize<'de> for Note {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = Value::deserialize(deserializer)?;
        Note::from_json(&value).map_err(serde::de::Error::custom)
    }
}
