//! DSP — note quantization, sine synthesis, mixing and WAV output.
//!
//! Data flows one way: a note's duration is quantized, the note is rendered
//! to 16-bit samples, notes are concatenated into tracks, tracks are summed
//! into channels, and channels are written as a PCM WAV container.

pub mod mixer;
pub mod oscillator;
pub mod quantizer;
pub mod renderer;
