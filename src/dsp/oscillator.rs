//! Sine oscillator and per-note sample synthesis.

use std::f64::consts::PI;

use crate::note::Note;

use super::quantizer::fuzzy_duration;

/// Output sample width in bits.
pub const BIT_DEPTH: i32 = 16;

/// A sine oscillator evaluated at absolute sample positions, so every note
/// starts at phase zero.
#[derive(Debug, Clone, Copy)]
pub struct Oscillator {
    pub frequency: f64,
    pub gain: f64,
    sample_rate: f64,
}

impl Oscillator {
    pub fn new(note: &Note, sample_rate: u32) -> Self {
        Oscillator {
            frequency: note.frequency(),
            gain: note.volume(),
            sample_rate: sample_rate as f64,
        }
    }

    /// Value in [-gain, gain] at sample index `s`.
    pub fn sample_at(&self, s: usize) -> f64 {
        let t = s as f64 / self.sample_rate;
        (2.0 * PI * self.frequency * t).sin() * self.gain
    }
}

/// Peak amplitude for a headroom level: `2^(BIT_DEPTH - 12 + volume_level) - 1`.
pub fn max_amplitude(volume_level: i32) -> f64 {
    2.0_f64.powi((BIT_DEPTH - 12).saturating_add(volume_level)) - 1.0
}

/// Number of samples `note` occupies once its duration is quantized.
pub fn sample_count(note: &Note, nominal_duration: f64, sample_rate: u32) -> usize {
    let seconds = fuzzy_duration(note, nominal_duration);
    (seconds * sample_rate as f64).round_ties_even() as usize
}

/// Render one note into 16-bit samples.
///
/// Out-of-range values wrap (two's complement) rather than clip.
pub fn sample_audio(note: &Note, nominal_duration: f64, volume_level: i32, sample_rate: u32) -> Vec<i16> {
    let n = sample_count(note, nominal_duration, sample_rate);
    let peak = max_amplitude(volume_level);
    let osc = Oscillator::new(note, sample_rate);

    (0..n)
        .map(|s| wrap_i16((peak * osc.sample_at(s)).round_ties_even()))
        .collect()
}

/// Truncate a rounded value to 16 bits the way a fixed-width store would.
fn wrap_i16(value: f64) -> i16 {
    value as i64 as i16
}
