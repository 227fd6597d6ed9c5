//! WAV renderer — assembles mono or stereo channels and writes 16-bit PCM.

use std::fs::File;
use std::io::{BufWriter, Cursor, Seek, Write};
use std::path::{Path, PathBuf};

use tracing::info;

use crate::compose::Track;
use crate::config::RenderConfig;
use crate::error::{ConfigError, WaveError};

use super::mixer::build_channel;

/// The track sets for one file.
///
/// Only `None` stereo sides select mono output; an empty side still means
/// stereo and falls back to `tracks`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TrackSets {
    pub tracks: Option<Vec<Track>>,
    pub left_tracks: Option<Vec<Track>>,
    pub right_tracks: Option<Vec<Track>>,
}

impl TrackSets {
    pub fn mono(tracks: Vec<Track>) -> Self {
        TrackSets {
            tracks: Some(tracks),
            ..Default::default()
        }
    }

    pub fn stereo(left_tracks: Vec<Track>, right_tracks: Vec<Track>) -> Self {
        TrackSets {
            left_tracks: Some(left_tracks),
            right_tracks: Some(right_tracks),
            ..Default::default()
        }
    }
}

fn present(set: &Option<Vec<Track>>) -> Option<&[Track]> {
    set.as_deref().filter(|tracks| !tracks.is_empty())
}

/// Rendered channel data ready for the container writer.
#[derive(Debug, Clone, PartialEq)]
pub enum ChannelLayout {
    Mono(Vec<i16>),
    /// Both sides have the same length.
    Stereo { left: Vec<i16>, right: Vec<i16> },
}

impl ChannelLayout {
    pub fn channels(&self) -> u16 {
        match self {
            ChannelLayout::Mono(_) => 1,
            ChannelLayout::Stereo { .. } => 2,
        }
    }

    /// Sample frames per channel.
    pub fn frames(&self) -> usize {
        match self {
            ChannelLayout::Mono(data) => data.len(),
            ChannelLayout::Stereo { left, .. } => left.len(),
        }
    }

    /// Samples in file order, stereo interleaved left then right.
    pub fn interleaved(&self) -> Vec<i16> {
        match self {
            ChannelLayout::Mono(data) => data.clone(),
            ChannelLayout::Stereo { left, right } => left
                .iter()
                .zip(right)
                .flat_map(|(&l, &r)| [l, r])
                .collect(),
        }
    }
}

/// Mix the track sets into mono or stereo channel data.
///
/// Mono only when `tracks` is non-empty and neither stereo side is given.
/// Otherwise an empty or missing side falls back to `tracks` and must end
/// up non-empty.
pub fn assemble_channels(sets: &TrackSets, config: &RenderConfig) -> Result<ChannelLayout, WaveError> {
    config.validate()?;
    let RenderConfig {
        sample_rate,
        time_step,
        base_volume,
    } = *config;

    let tracks = present(&sets.tracks);

    if let (Some(tracks), None, None) = (tracks, &sets.left_tracks, &sets.right_tracks) {
        info!("Building mono channel from {} tracks", tracks.len());
        let data = build_channel(tracks, time_step, base_volume, sample_rate);
        return Ok(ChannelLayout::Mono(data));
    }

    let left = present(&sets.left_tracks).or(tracks);
    let right = present(&sets.right_tracks).or(tracks);
    let (Some(left), Some(right)) = (left, right) else {
        return Err(ConfigError::MissingTracks.into());
    };

    info!(
        "Building stereo channels from {} left and {} right tracks",
        left.len(),
        right.len()
    );
    let mut left = build_channel(left, time_step, base_volume, sample_rate);
    let mut right = build_channel(right, time_step, base_volume, sample_rate);
    let len = left.len().min(right.len());
    left.truncate(len);
    right.truncate(len);
    Ok(ChannelLayout::Stereo { left, right })
}

fn wav_spec(sample_rate: u32, layout: &ChannelLayout) -> hound::WavSpec {
    hound::WavSpec {
        channels: layout.channels(),
        sample_rate,
        bits_per_sample: 16,
        sample_format: hound::SampleFormat::Int,
    }
}

fn write_samples<W: Write + Seek>(
    writer: W,
    sample_rate: u32,
    layout: &ChannelLayout,
) -> Result<(), WaveError> {
    let mut wav = hound::WavWriter::new(writer, wav_spec(sample_rate, layout))?;
    for sample in layout.interleaved() {
        wav.write_sample(sample)?;
    }
    wav.finalize()?;
    Ok(())
}

/// Write a 16-bit PCM WAV file and return its path.
pub fn write_wav(path: impl AsRef<Path>, sample_rate: u32, layout: &ChannelLayout) -> Result<PathBuf, WaveError> {
    let path = path.as_ref();
    let file = BufWriter::new(File::create(path)?);
    write_samples(file, sample_rate, layout)?;
    info!(
        "Wrote {} frames x {} channels to {}",
        layout.frames(),
        layout.channels(),
        path.display()
    );
    Ok(path.to_path_buf())
}

/// Encode a 16-bit PCM WAV into memory.
pub fn encode_wav(sample_rate: u32, layout: &ChannelLayout) -> Result<Vec<u8>, WaveError> {
    let mut cursor = Cursor::new(Vec::new());
    write_samples(&mut cursor, sample_rate, layout)?;
    Ok(cursor.into_inner())
}

/// Render the track sets and write them to `path` as a WAV file.
pub fn build_wave(path: impl AsRef<Path>, sets: &TrackSets, config: &RenderConfig) -> Result<PathBuf, WaveError> {
    let layout = assemble_channels(sets, config)?;
    write_wav(path, config.sample_rate, &layout)
}
