//! Fuzzy duration quantizer — snaps note lengths to whole periods.
//!
//! A note that ends partway through a cycle leaves the waveform at a nonzero
//! phase, and the next note starts again from zero, which clicks. Rendering
//! every note as a whole number of its own periods keeps concatenated notes
//! continuous, at the cost of a small deviation from the requested length.

use crate::note::Note;

/// Length of one period of the note, or one second for silence.
pub fn sampling_atom(note: &Note) -> f64 {
    let frequency = note.frequency();
    if frequency > 0.0 { 1.0 / frequency } else { 1.0 }
}

/// The rendered duration for `note` at the given nominal step length.
///
/// Returns the multiple of the sampling atom nearest to
/// `nominal_duration * note.duration()`, never less than one atom. On a tie
/// the longer candidate wins.
pub fn fuzzy_duration(note: &Note, nominal_duration: f64) -> f64 {
    let atom = sampling_atom(note);
    let target = nominal_duration * note.duration();

    // Smallest factor >= 2 with factor * atom >= target. The division only
    // estimates it; the two loops correct float error by a step or so.
    let mut factor = ((target / atom).ceil() as u64).max(2);
    while (factor as f64) * atom < target {
        factor += 1;
    }
    while factor > 2 && ((factor - 1) as f64) * atom >= target {
        factor -= 1;
    }

    let shorter = (factor - 1) as f64 * atom;
    let longer = factor as f64 * atom;
    if (shorter - target).abs() < (longer - target).abs() {
        shorter
    } else {
        longer
    }
}
