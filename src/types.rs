use chrono::{Duration, NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

/// Ordered best to worst.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum FishingQuality {
    Excellent,
    Okay,
    Poor,
}

impl FishingQuality {
    pub const ALL: [FishingQuality; 3] = [Self::Excellent, Self::Okay, Self::Poor];

    pub fn from_angle(angle: f64) -> Self {
        QualityThresholds::default().classify(angle)
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Excellent => "Excellent",
            Self::Okay => "Okay",
            Self::Poor => "Poor",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            Self::Excellent => "Sun is low - minimal shadow, best time",
            Self::Okay => "Sun at angle - acceptable conditions",
            Self::Poor => "Sun high - light shines into hole",
        }
    }
}

/// `angle < excellent_below` is excellent, `angle < okay_below` is okay, the rest poor.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct QualityThresholds {
    pub excellent_below: f64,
    pub okay_below: f64,
}

impl Default for QualityThresholds {
    fn default() -> Self {
        Self {
            excellent_below: 20.0,
            okay_below: 45.0,
        }
    }
}

impl QualityThresholds {
    pub fn classify(&self, angle: f64) -> FishingQuality {
        if angle < self.excellent_below {
            FishingQuality::Excellent
        } else if angle < self.okay_below {
            FishingQuality::Okay
        } else {
            FishingQuality::Poor
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    pub sample_interval_minutes: i64,
    pub thresholds: QualityThresholds,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            sample_interval_minutes: 10,
            thresholds: QualityThresholds::default(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ElevationSample {
    pub time: NaiveDateTime,
    /// Degrees above the horizon, never negative.
    pub elevation: f64,
    pub quality: FishingQuality,
}

impl ElevationSample {
    pub fn new(time: NaiveDateTime, elevation: f64, thresholds: &QualityThresholds) -> Self {
        let elevation = elevation.max(0.0);
        Self {
            time,
            elevation,
            quality: thresholds.classify(elevation),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SunriseSunset {
    pub sunrise: NaiveDateTime,
    pub sunset: NaiveDateTime,
    /// Half the day length, in hours.
    pub hours_from_noon: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DaySolarProfile {
    pub date: NaiveDate,
    pub latitude: f64,
    pub day_of_year: u32,
    pub declination: f64,
    pub sample_interval_minutes: i64,
    pub sunrise: NaiveDateTime,
    pub sunset: NaiveDateTime,
    pub samples: Vec<ElevationSample>,
    pub max_elevation: f64,
}

impl DaySolarProfile {
    pub fn day_length(&self) -> Duration {
        self.sunset - self.sunrise
    }
}

/// `end` is the first sample of the following run, or the day's last sample
/// for the final window.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct QualityWindow {
    pub start: NaiveDateTime,
    pub end: NaiveDateTime,
    pub quality: FishingQuality,
    pub average_elevation: f64,
}

impl QualityWindow {
    pub fn duration(&self) -> Duration {
        self.end - self.start
    }

    /// Whole minutes, truncated.
    pub fn duration_minutes(&self) -> i64 {
        self.duration().num_minutes()
    }

    pub fn description(&self) -> &'static str {
        match self.quality {
            FishingQuality::Excellent if self.average_elevation < 10.0 => {
                "Sun very low on horizon"
            }
            FishingQuality::Excellent => "Sun low, minimal shadow",
            FishingQuality::Okay => "Sun at moderate angle",
            FishingQuality::Poor if self.average_elevation > 60.0 => "Sun near zenith",
            FishingQuality::Poor => "Sun shines into fishing hole",
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct QualitySummary {
    pub excellent_minutes: i64,
    pub okay_minutes: i64,
    pub poor_minutes: i64,
}

impl QualitySummary {
    pub fn minutes_for(&self, quality: FishingQuality) -> i64 {
        match quality {
            FishingQuality::Excellent => self.excellent_minutes,
            FishingQuality::Okay => self.okay_minutes,
            FishingQuality::Poor => self.poor_minutes,
        }
    }

    pub fn total_minutes(&self) -> i64 {
        self.excellent_minutes + self.okay_minutes + self.poor_minutes
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DailyOutlook {
    pub date: NaiveDate,
    pub sunrise: NaiveDateTime,
    pub sunset: NaiveDateTime,
    pub max_elevation: f64,
    pub summary: QualitySummary,
}
