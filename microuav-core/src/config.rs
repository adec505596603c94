use crate::coordinates::FovSpec;
use crate::error::ConfigError;
use crate::observation::BorderMode;
use serde::{Deserialize, Serialize};

pub const DEFAULT_FOV: u32 = 128;
pub const DEFAULT_STEP_SIZE: u32 = 8;

/// Simulator settings. Every field has a default so partial JSON files work.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimulatorConfig {
    pub fov_width: u32,
    pub fov_height: u32,
    pub step_size: u32,
    pub border_mode: BorderMode,
    /// `[x, y]`; the map centre when absent.
    pub start: Option<(i64, i64)>,
    pub resize_height: Option<u32>,
    pub resize_width: Option<u32>,
}

impl Default for SimulatorConfig {
    fn default() -> Self {
        Self {
            fov_width: DEFAULT_FOV,
            fov_height: DEFAULT_FOV,
            step_size: DEFAULT_STEP_SIZE,
            border_mode: BorderMode::Pad,
            start: None,
            resize_height: None,
            resize_width: None,
        }
    }
}

impl SimulatorConfig {
    pub fn from_json_str(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    pub fn to_json_string(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    pub fn fov(&self) -> FovSpec {
        FovSpec::new(self.fov_width, self.fov_height)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.fov_width == 0 || self.fov_height == 0 {
            return Err(ConfigError::InvalidFov {
                width: self.fov_width,
                height: self.fov_height,
            });
        }
        if self.step_size == 0 {
            return Err(ConfigError::InvalidStepSize);
        }
        self.resize_dims()?;
        Ok(())
    }

    /// `(height, width)` to resize the map to before the session starts.
    pub fn resize_dims(&self) -> Result<Option<(u32, u32)>, ConfigError> {
        match (self.resize_height, self.resize_width) {
            (None, None) => Ok(None),
            (Some(height), Some(width)) if height == 0 || width == 0 => {
                Err(ConfigError::InvalidResize { height, width })
            }
            (Some(height), Some(width)) => Ok(Some((height, width))),
            _ => Err(ConfigError::PartialResize),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_valid() {
        let config = SimulatorConfig::default();
        assert_eq!(config.fov(), FovSpec::square(128));
        assert_eq!(config.step_size, 8);
        assert_eq!(config.validate(), Ok(()));
    }

    #[test]
    fn rejects_zero_fov_and_step() {
        let config = SimulatorConfig {
            fov_height: 0,
            ..SimulatorConfig::default()
        };
        assert_eq!(
            config.validate(),
            Err(ConfigError::InvalidFov {
                width: 128,
                height: 0
            })
        );

        let config = SimulatorConfig {
            step_size: 0,
            ..SimulatorConfig::default()
        };
        assert_eq!(config.validate(), Err(ConfigError::InvalidStepSize));
    }

    #[test]
    fn resize_needs_both_dimensions() {
        let config = SimulatorConfig {
            resize_width: Some(64),
            ..SimulatorConfig::default()
        };
        assert_eq!(config.validate(), Err(ConfigError::PartialResize));

        let config = SimulatorConfig {
            resize_height: Some(32),
            resize_width: Some(64),
            ..SimulatorConfig::default()
        };
        assert_eq!(config.resize_dims(), Ok(Some((32, 64))));

        let config = SimulatorConfig {
            resize_height: Some(0),
            resize_width: Some(64),
            ..SimulatorConfig::default()
        };
        assert_eq!(
            config.validate(),
            Err(ConfigError::InvalidResize {
                height: 0,
                width: 64
            })
        );
    }

    #[test]
    fn partial_json_keeps_defaults() {
        let config =
            SimulatorConfig::from_json_str(r#"{"fov_width": 10, "border_mode": "clamp", "start": [2, 3]}"#)
                .unwrap();
        assert_eq!(config.fov(), FovSpec::new(10, 128));
        assert_eq!(config.border_mode, BorderMode::Clamp);
        assert_eq!(config.start, Some((2, 3)));
        assert_eq!(config.step_size, DEFAULT_STEP_SIZE);
    }

    #[test]
    fn unknown_border_mode_in_json_is_rejected() {
        assert!(SimulatorConfig::from_json_str(r#"{"border_mode": "wrap"}"#).is_err());
    }

    #[test]
    fn json_round_trip() {
        let config = SimulatorConfig {
            start: Some((-1, 4)),
            resize_height: Some(20),
            resize_width: Some(30),
            ..SimulatorConfig::default()
        };
        let json = config.to_json_string().unwrap();
        assert_eq!(SimulatorConfig::from_json_str(&json).unwrap(), config);
    }
}
