use std::fmt;

#[derive(Debug)]
pub enum WaveError {
    Note(NoteError),
    Config(ConfigError),
    Io(std::io::Error),
    Wav(hound::Error),
    Json(serde_json::Error),
}

/// A value presented as a note could not be read as one.
#[derive(Debug, Clone, PartialEq)]
pub enum NoteError {
    NotANote { found: String },
    InvalidFrequency(f64),
    InvalidDuration(f64),
}

#[derive(Debug, Clone, PartialEq)]
pub enum ConfigError {
    MissingTracks,
    InvalidSampleRate(u32),
    InvalidTimeStep(f64),
}

impl fmt::Display for WaveError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            WaveError::Note(e) => write!(f, "Note error: {e}"),
            WaveError::Config(e) => write!(f, "Configuration error: {e}"),
            WaveError::Io(e) => write!(f, "I/O error: {e}"),
            WaveError::Wav(e) => write!(f, "WAV error: {e}"),
            WaveError::Json(e) => write!(f, "JSON error: {e}"),
        }
    }
}

impl std::error::Error for WaveError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            WaveError::Note(e) => Some(e),
            WaveError::Config(e) => Some(e),
            WaveError::Io(e) => Some(e),
            WaveError::Wav(e) => Some(e),
            WaveError::Json(e) => Some(e),
        }
    }
}

impl fmt::Display for NoteError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NoteError::NotANote { found } => {
                write!(f, "Notes must either be Notes or numbers, found {found}")
            }
            NoteError::InvalidFrequency(v) => write!(f, "Frequency must be >= 0, got {v}"),
            NoteError::InvalidDuration(v) => write!(f, "Duration must be > 0, got {v}"),
        }
    }
}

impl std::error::Error for NoteError {}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::MissingTracks => {
                write!(f, "must provide mono tracks or both stereo sides")
            }
            ConfigError::InvalidSampleRate(v) => write!(f, "Sample rate must be > 0, got {v}"),
            ConfigError::InvalidTimeStep(v) => write!(f, "Time step must be > 0, got {v}"),
        }
    }
}

impl std::error::Error for ConfigError {}

impl From<NoteError> for WaveError {
    fn from(e: NoteError) -> Self {
        WaveError::Note(e)
    }
}

impl From<ConfigError> for WaveError {
    fn from(e: ConfigError) -> Self {
        WaveError::Config(e)
    }
}

impl From<std::io::Error> for WaveError {
    fn from(e: std::io::Error) -> Self {
        WaveError::Io(e)
    }
}

impl From<hound::Error> for WaveError {
    fn from(e: hound::Error) -> Self {
        WaveError::Wav(e)
    }
}

impl From<serde_json::Error> for WaveError {
    fn from(e: serde_json::Error) -> Self {
        WaveError::Json(e)
    }
}
