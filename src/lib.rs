//! Solar elevation engine for ice fishing.
//!
//! Given a calendar day and a latitude, [`compute_day_profile`] samples the
//! sun's elevation from sunrise to sunset and [`find_quality_windows`] splits
//! that series into excellent / okay / poor fishing windows. Everything is a
//! pure function of its inputs.

pub mod angles;
pub mod config;
pub mod error;
pub mod outlook;
pub mod profile;
pub mod types;
pub mod windows;

pub use angles::{
    day_of_year, decimal_hour, deg_to_rad, elevation_at, hour_angle, rad_to_deg,
    solar_declination, solar_elevation, sunrise_hour_angle, DEGREES_PER_HOUR, EARTH_AXIAL_TILT,
    EQUINOX_DAY_OFFSET, SOLAR_NOON_HOUR,
};

pub use config::{validate_latitude, Region, MAX_SAMPLE_INTERVAL_MINUTES};

pub use error::{Error, Result};

pub use outlook::{
    compare_days, daily_outlook, date_window, MAX_COMPARED_DAYS, MAX_OUTLOOK_RADIUS_DAYS,
};

pub use profile::{
    compute_day_profile, compute_day_profile_for, compute_day_profile_with,
    estimate_sunrise_sunset, interpolate_elevation, solar_noon,
};

pub use types::{
    DailyOutlook, DaySolarProfile, ElevationSample, EngineConfig, FishingQuality, QualitySummary,
    QualityThresholds, QualityWindow, SunriseSunset,
};

pub use windows::{excellent_windows, find_quality_windows, rank_windows, summarize_durations};
