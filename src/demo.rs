//! Demonstration track: two close test tones in sustained, gated,
//! alternating and swept patterns, each followed by a long rest.

use crate::compose::{Track, TrackTree};
use crate::note::Note;

const TONE_1: f64 = 170.0;
const TONE_2: f64 = 175.0;

fn tone1(duration: f64) -> TrackTree {
    Note::with_duration(TONE_1, duration).into()
}

fn tone2(duration: f64) -> TrackTree {
    Note::with_duration(TONE_2, duration).into()
}

/// A muted test tone, so rests quantize to the tone's period.
fn silent_tone(duration: f64) -> TrackTree {
    Note::full(TONE_1, duration, 0.0).into()
}

/// The full demonstration track, in playback order.
pub fn demo_track() -> Track {
    let sections = [
        tone1(60.0),
        tone2(60.0),
        TrackTree::seq([tone1(3.0), silent_tone(3.0), tone2(3.0), silent_tone(3.0)]).repeat(10),
        TrackTree::seq([tone1(3.0), silent_tone(1.0), tone2(3.0), silent_tone(1.0)]).repeat(10),
        TrackTree::seq([tone1(3.0), tone2(3.0)]).repeat(30),
        TrackTree::seq([tone1(1.0), tone2(1.0)]).repeat(50),
        TrackTree::seq((80..800).map(|f| TrackTree::from(f as f64))),
        Note::with_duration(25.0, 60.0).into(),
        Note::with_duration(35.0, 60.0).into(),
        Note::with_duration(45.0, 60.0).into(),
    ];

    let space = silent_tone(120.0);
    TrackTree::seq(sections.into_iter().flat_map(|s| [s, space.clone()])).flatten()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn section_layout() {
        let track = demo_track();
        // 2 + 40 + 40 + 60 + 100 + 720 + 3 notes, plus 10 rests.
        assert_eq!(track.len(), 975);
        assert_eq!(track[0], Note::with_duration(170.0, 60.0));
        assert_eq!(track[1], Note::full(170.0, 120.0, 0.0));
        assert_eq!(track.last(), Some(&Note::full(170.0, 120.0, 0.0)));
    }

    #[test]
    fn sweep_covers_range() {
        let track = demo_track();
        let sweep: Vec<f64> = track
            .iter()
            .filter(|n| matches!(n, Note::Bare(_)))
            .map(Note::frequency)
            .collect();
        assert_eq!(sweep.len(), 720);
        assert_eq!(sweep[0], 80.0);
        assert_eq!(sweep[719], 799.0);
    }
}
