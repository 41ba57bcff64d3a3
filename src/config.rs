use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::types::{EngineConfig, QualityThresholds};

pub const MAX_SAMPLE_INTERVAL_MINUTES: i64 = 24 * 60;

/// Preset fishing regions and their representative latitudes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Region {
    North,
    #[default]
    Center,
    South,
}

impl Region {
    pub const ALL: [Region; 3] = [Self::North, Self::Center, Self::South];

    pub fn latitude(&self) -> f64 {
        match self {
            Self::North => 65.0,
            Self::Center => 55.0,
            Self::South => 45.0,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::North => "North",
            Self::Center => "Center",
            Self::South => "South",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            Self::North => "Arctic regions (65°N)",
            Self::Center => "Central regions (55°N)",
            Self::South => "Southern regions (45°N)",
        }
    }
}

impl fmt::Display for Region {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Region {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::ALL
            .into_iter()
            .find(|r| r.name().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| Error::UnknownRegion {
                name: s.to_string(),
            })
    }
}

/// Rejects latitudes outside [-90, 90] (and NaN) before they reach the engine.
pub fn validate_latitude(latitude: f64) -> Result<f64> {
    if !(-90.0..=90.0).contains(&latitude) {
        return Err(Error::InvalidLatitude { value: latitude });
    }
    Ok(latitude)
}

impl QualityThresholds {
    pub fn new(excellent_below: f64, okay_below: f64) -> Result<Self> {
        let thresholds = Self {
            excellent_below,
            okay_below,
        };
        thresholds.validate()?;
        Ok(thresholds)
    }

    pub fn validate(&self) -> Result<()> {
        let ordered = 0.0 <= self.excellent_below
            && self.excellent_below <= self.okay_below
            && self.okay_below <= 90.0;
        if !ordered {
            return Err(Error::InvalidThresholds {
                excellent_below: self.excellent_below,
                okay_below: self.okay_below,
            });
        }
        Ok(())
    }
}

impl EngineConfig {
    pub fn validate(&self) -> Result<()> {
        if !(1..=MAX_SAMPLE_INTERVAL_MINUTES).contains(&self.sample_interval_minutes) {
            return Err(Error::InvalidSampleInterval {
                minutes: self.sample_interval_minutes,
            });
        }
        self.thresholds.validate()
    }

    /// Parses and validates a JSON config; absent fields keep their defaults.
    pub fn from_json_str(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }
}
