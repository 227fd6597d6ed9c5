pub mod compose;
pub mod config;
pub mod demo;
pub mod dsp;
pub mod error;
pub mod note;
pub mod song;

use std::path::{Path, PathBuf};

use crate::dsp::renderer::{assemble_channels, build_wave, encode_wav};
use crate::error::WaveError;
use crate::song::Song;
use wasm_bindgen::prelude::*;

pub use crate::compose::{Track, TrackTree};
pub use crate::config::RenderConfig;
pub use crate::dsp::renderer::{ChannelLayout, TrackSets};
pub use crate::note::Note;

/// The crate version, read from Cargo.toml at compile time.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// WASM-exposed: return the fuzzwave version string.
#[wasm_bindgen]
pub fn core_version() -> String {
    VERSION.to_string()
}

/// Render a song document to WAV bytes.
pub fn render_song_bytes(song: &Song) -> Result<Vec<u8>, WaveError> {
    let layout = assemble_channels(&song.track_sets(), &song.config)?;
    encode_wav(song.config.sample_rate, &layout)
}

/// Render a JSON song document to a WAV file.
pub fn render_song_json(source: &str, path: impl AsRef<Path>) -> Result<PathBuf, WaveError> {
    let song = Song::from_json(source)?;
    build_wave(path, &song.track_sets(), &song.config)
}

/// WASM-exposed: render a song object to a WAV byte array.
#[wasm_bindgen]
pub fn render_song_wav(song: JsValue) -> Result<Vec<u8>, JsValue> {
    let song: Song =
        serde_wasm_bindgen::from_value(song).map_err(|e| JsValue::from_str(&format!("{e}")))?;
    render_song_bytes(&song).map_err(|e| JsValue::from_str(&format!("{e}")))
}
