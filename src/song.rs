//! Song documents — render settings plus mono or stereo track sets, as JSON.
//!
//! ```json
//! {
//!   "config": { "sample_rate": 44100, "time_step": 0.0166, "base_volume": 10 },
//!   "left_tracks": [[100, 100, {"frequency": 200, "duration": 0.5}]],
//!   "right_tracks": [[[150, 0], 150]]
//! }
//! ```
//!
//! Each track may nest arbitrarily; it is flattened before rendering.

use serde::Deserialize;

use crate::compose::TrackTree;
use crate::config::RenderConfig;
use crate::dsp::renderer::TrackSets;
use crate::error::WaveError;

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct Song {
    pub config: RenderConfig,
    pub tracks: Option<Vec<TrackTree>>,
    pub left_tracks: Option<Vec<TrackTree>>,
    pub right_tracks: Option<Vec<TrackTree>>,
}

impl Song {
    pub fn from_json(source: &str) -> Result<Song, WaveError> {
        Ok(serde_json::from_str(source)?)
    }

    pub fn track_sets(&self) -> TrackSets {
        let flatten = |set: &Option<Vec<TrackTree>>| {
            set.as_ref()
                .map(|trees| trees.iter().map(TrackTree::flatten).collect())
        };
        TrackSets {
            tracks: flatten(&self.tracks),
            left_tracks: flatten(&self.left_tracks),
            right_tracks: flatten(&self.right_tracks),
        }
    }
}
