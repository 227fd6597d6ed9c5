//! Track composition — nested note sequences flattened into playable tracks.

use serde::{Deserialize, Deserializer};
use serde_json::Value;

use crate::error::NoteError;
use crate::note::Note;

/// A playable track: notes in playback order.
pub type Track = Vec<Note>;

/// An arbitrarily nested grouping of notes.
#[derive(Debug, Clone, PartialEq)]
pub enum TrackTree {
    Leaf(Note),
    Sequence(Vec<TrackTree>),
}

impl TrackTree {
    pub fn seq(children: impl IntoIterator<Item = TrackTree>) -> Self {
        TrackTree::Sequence(children.into_iter().collect())
    }

    /// Depth-first, left-to-right list of every leaf note.
    pub fn flatten(&self) -> Track {
        let mut out = Vec::new();
        self.flatten_into(&mut out);
        out
    }

    fn flatten_into(&self, out: &mut Track) {
        match self {
            TrackTree::Leaf(note) => out.push(*note),
            TrackTree::Sequence(children) => {
                for child in children {
                    child.flatten_into(out);
                }
            }
        }
    }

    /// This tree repeated `times` times in sequence.
    pub fn repeat(&self, times: usize) -> TrackTree {
        TrackTree::Sequence(vec![self.clone(); times])
    }

    /// Arrays become sequences; every other value must be a note.
    pub fn from_json(value: &Value) -> Result<TrackTree, NoteError> {
        match value {
            Value::Array(items) => items
                .iter()
                .map(TrackTree::from_json)
                .collect::<Result<Vec<_>, _>>()
                .map(TrackTree::Sequence),
            other => Note::from_json(other).map(TrackTree::Leaf),
        }
    }
}

impl From<Note> for TrackTree {
    fn from(note: Note) -> Self {
        TrackTree::Leaf(note)
    }
}

impl From<f64> for TrackTree {
    fn from(frequency: f64) -> Self {
        TrackTree::Leaf(Note::from(frequency))
    }
}

impl<'de> Deserialize<'de> for TrackTree {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = Value::deserialize(deserializer)?;
        TrackTree::from_json(&value).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn flatten_preserves_order() {
        let tree = TrackTree::seq([
            TrackTree::from(100.0),
            TrackTree::seq([TrackTree::from(200.0), TrackTree::seq([TrackTree::from(300.0)])]),
            TrackTree::from(400.0),
        ]);
        let freqs: Vec<f64> = tree.flatten().iter().map(Note::frequency).collect();
        assert_eq!(freqs, vec![100.0, 200.0, 300.0, 400.0]);
    }

    #[test]
    fn flatten_empty_sequence() {
        assert!(TrackTree::seq([]).flatten().is_empty());
    }

    #[test]
    fn repeat_concatenates() {
        let pair = TrackTree::seq([TrackTree::from(1.0), TrackTree::from(2.0)]);
        let freqs: Vec<f64> = pair.repeat(3).flatten().iter().map(Note::frequency).collect();
        assert_eq!(freqs, vec![1.0, 2.0, 1.0, 2.0, 1.0, 2.0]);
    }

    #[test]
    fn from_json_nested() {
        let tree = TrackTree::from_json(&json!([100, [{ "frequency": 0, "duration": 3 }, 200]])).unwrap();
        let track = tree.flatten();
        assert_eq!(track.len(), 3);
        assert_eq!(track[1], Note::full(0.0, 3.0, 1.0));
    }

    #[test]
    fn from_json_type_error_inside_sequence() {
        let err = TrackTree::from_json(&json!([100, ["oops"]])).unwrap_err();
        assert!(matches!(err, NoteError::NotANote { .. }));
    }
}
