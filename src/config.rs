use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

pub const DEFAULT_SAMPLE_RATE: u32 = 44100;
pub const DEFAULT_TIME_STEP: f64 = 1.0 / 60.0;
pub const DEFAULT_BASE_VOLUME: i32 = 10;

/// Render settings for one file build.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderConfig {
    /// Samples per second.
    pub sample_rate: u32,
    /// Nominal duration, in seconds, of a note with duration multiplier 1.
    pub time_step: f64,
    /// Amplitude headroom knob; each mixed track lowers it by one.
    pub base_volume: i32,
}

impl Default for RenderConfig {
    fn default() -> Self {
        RenderConfig {
            sample_rate: DEFAULT_SAMPLE_RATE,
            time_step: DEFAULT_TIME_STEP,
            base_volume: DEFAULT_BASE_VOLUME,
        }
    }
}

impl RenderConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.sample_rate == 0 {
            return Err(ConfigError::InvalidSampleRate(self.sample_rate));
        }
        if !self.time_step.is_finite() || self.time_step <= 0.0 {
            return Err(ConfigError::InvalidTimeStep(self.time_step));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let c = RenderConfig::default();
        assert_eq!(c.sample_rate, 44100);
        assert!((c.time_step - 1.0 / 60.0).abs() < 1e-15);
        assert_eq!(c.base_volume, 10);
        assert!(c.validate().is_ok());
    }

    #[test]
    fn partial_json_uses_defaults() {
        let c: RenderConfig = serde_json::from_str(r#"{ "sample_rate": 22050 }"#).unwrap();
        assert_eq!(c.sample_rate, 22050);
        assert_eq!(c.base_volume, 10);
    }

    #[test]
    fn rejects_bad_values() {
        let zero_rate = RenderConfig { sample_rate: 0, ..Default::default() };
        assert_eq!(zero_rate.validate(), Err(ConfigError::InvalidSampleRate(0)));

        let bad_step = RenderConfig { time_step: -0.5, ..Default::default() };
        assert_eq!(bad_step.validate(), Err(ConfigError::InvalidTimeStep(-0.5)));
    }
}
