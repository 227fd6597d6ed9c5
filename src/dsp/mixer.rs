//! Mixer — concatenates notes into tracks and sums tracks into a channel.

use tracing::{debug, warn};

use crate::note::Note;

use super::oscillator::sample_audio;

/// A summing mixer over 16-bit samples with wrapping addition.
#[derive(Debug, Clone, Default)]
pub struct Mixer {
    buffer: Vec<i16>,
    wrapped: usize,
}

impl Mixer {
    pub fn new() -> Self {
        Mixer::default()
    }

    /// Add `samples` starting at index 0, zero-extending the mix if needed.
    pub fn add(&mut self, samples: &[i16]) {
        if samples.len() > self.buffer.len() {
            self.buffer.resize(samples.len(), 0);
        }
        for (acc, &s) in self.buffer.iter_mut().zip(samples) {
            let (sum, overflowed) = acc.overflowing_add(s);
            if overflowed {
                self.wrapped += 1;
            }
            *acc = sum;
        }
    }

    /// Number of additions that wrapped so far.
    pub fn wrapped(&self) -> usize {
        self.wrapped
    }

    pub fn output(self) -> Vec<i16> {
        self.buffer
    }
}

/// Render every note of `track` back to back.
pub fn build_track(track: &[Note], time_step: f64, volume_level: i32, sample_rate: u32) -> Vec<i16> {
    let mut data = Vec::new();
    for note in track {
        data.extend(sample_audio(note, time_step, volume_level, sample_rate));
    }
    data
}

/// Headroom level each track of a channel is rendered at, saturating at
/// `i32::MIN`.
pub fn adjusted_volume(base_volume: i32, track_count: usize) -> i32 {
    let count = i32::try_from(track_count).unwrap_or(i32::MAX);
    base_volume.saturating_sub(count)
}

/// Render each track and sum them sample by sample.
///
/// The result is as long as the longest track; shorter tracks are padded
/// with silence.
pub fn build_channel<T: AsRef<[Note]>>(
    tracks: &[T],
    time_step: f64,
    base_volume: i32,
    sample_rate: u32,
) -> Vec<i16> {
    let volume = adjusted_volume(base_volume, tracks.len());
    debug!("Mixing {} tracks at volume level {}", tracks.len(), volume);

    let mut mixer = Mixer::new();
    for (i, track) in tracks.iter().enumerate() {
        let data = build_track(track.as_ref(), time_step, volume, sample_rate);
        debug!("Track {}: {} notes, {} samples", i, track.as_ref().len(), data.len());
        mixer.add(&data);
    }

    if mixer.wrapped() > 0 {
        warn!("{} mixed samples wrapped past the 16-bit range", mixer.wrapped());
    }
    mixer.output()
}

#[cfg(test)]
mod tests {
    use super::*;

    const STEP: f64 = 1.0 / 60.0;

    #[test]
    fn empty_mixer() {
        let m = Mixer::new();
        assert_eq!(m.wrapped(), 0);
        assert!(m.output().is_empty());
    }

    #[test]
    fn accumulates_and_pads() {
        let mut m = Mixer::new();
        m.add(&[1, 2, 3, 4, 5]);
        m.add(&[10; 12]);
        m.add(&[100, 100, 100]);
        assert_eq!(
            m.output(),
            vec![111, 112, 113, 14, 15, 10, 10, 10, 10, 10, 10, 10]
        );
    }

    #[test]
    fn addition_wraps() {
        let mut m = Mixer::new();
        m.add(&[i16::MAX, -5]);
        m.add(&[1, i16::MIN]);
        assert_eq!(m.wrapped(), 2);
        assert_eq!(m.output(), vec![i16::MIN, i16::MAX - 4]);
    }

    #[test]
    fn wrapping_sum_is_order_independent() {
        let a = [30000, -30000, 123];
        let b = [10000, -10000, 7];
        let c = [5000, 5000];
        let mut fwd = Mixer::new();
        for t in [&a[..], &b[..], &c[..]] {
            fwd.add(t);
        }
        let mut rev = Mixer::new();
        for t in [&c[..], &b[..], &a[..]] {
            rev.add(t);
        }
        assert_eq!(fwd.output(), rev.output());
    }

    #[test]
    fn empty_track() {
        assert!(build_track(&[], STEP, 9, 44100).is_empty());
    }

    #[test]
    fn single_note_track_matches_note() {
        let note = Note::with_duration(175.0, 3.0);
        assert_eq!(
            build_track(&[note], STEP, 8, 44100),
            sample_audio(&note, STEP, 8, 44100)
        );
    }

    #[test]
    fn track_concatenates_in_order() {
        let a = Note::new(170.0);
        let b = Note::new(175.0);
        let mut expected = sample_audio(&a, STEP, 9, 44100);
        expected.extend(sample_audio(&b, STEP, 9, 44100));
        assert_eq!(build_track(&[a, b], STEP, 9, 44100), expected);
    }

    #[test]
    fn channel_length_is_longest_track() {
        let short = vec![Note::new(440.0)];
        let long = vec![Note::new(440.0); 4];
        let mid = vec![Note::new(440.0); 2];
        let tracks = [short, long.clone(), mid];
        let channel = build_channel(&tracks, STEP, 10, 44100);
        assert_eq!(channel.len(), build_track(&long, STEP, 7, 44100).len());
    }

    #[test]
    fn channel_lowers_headroom_per_track() {
        let track = vec![Note::new(200.0)];
        let single = build_channel(&[track.clone()], STEP, 10, 44100);
        assert_eq!(single, build_track(&track, STEP, 9, 44100));

        let pair = build_channel(&[track.clone(), track.clone()], STEP, 10, 44100);
        let half = build_track(&track, STEP, 8, 44100);
        let doubled: Vec<i16> = half.iter().map(|s| s.wrapping_mul(2)).collect();
        assert_eq!(pair, doubled);
    }

    #[test]
    fn extreme_base_volume_saturates() {
        assert_eq!(adjusted_volume(i32::MIN, 3), i32::MIN);
        assert_eq!(adjusted_volume(10, usize::MAX), 10 - i32::MAX);

        let track = vec![Note::new(100.0)];
        let quiet = build_channel(&[track.clone()], STEP, i32::MIN, 44100);
        assert_eq!(quiet.len(), build_track(&track, STEP, 9, 44100).len());
        assert!(quiet.iter().all(|&s| s.abs() <= 1));

        let loud = build_channel(&[track.clone()], STEP, i32::MAX, 44100);
        assert_eq!(loud.len(), quiet.len());
    }

    #[test]
    fn empty_channel() {
        let tracks: [Vec<Note>; 0] = [];
        assert!(build_channel(&tracks, STEP, 10, 44100).is_empty());
    }
}
