use chrono::{DateTime, Duration, NaiveDate, NaiveDateTime, NaiveTime, TimeZone};
use tracing::debug;

use crate::angles;
use crate::error::Result;
use crate::types::{DaySolarProfile, ElevationSample, EngineConfig, SunriseSunset};

const MICROSECONDS_PER_HOUR: f64 = 3_600_000_000.0;

const NOON: NaiveTime = match NaiveTime::from_hms_opt(12, 0, 0) {
    Some(time) => time,
    None => panic!("invalid noon"),
};

pub fn solar_noon(date: NaiveDate) -> NaiveDateTime {
    date.and_time(NOON)
}

/// Sunrise and sunset placed symmetrically around noon.
///
/// Always `sunrise <= sunset`; polar night collapses both to noon and polar
/// day stretches them to the surrounding midnights, saturating at the ends of
/// the representable range.
pub fn estimate_sunrise_sunset(date: NaiveDate, latitude: f64) -> SunriseSunset {
    let decl = angles::solar_declination(angles::day_of_year(date));
    let h_deg = angles::sunrise_hour_angle(latitude, decl);
    let hours_from_noon = h_deg / angles::DEGREES_PER_HOUR;
    let offset = Duration::microseconds((hours_from_noon * MICROSECONDS_PER_HOUR).round() as i64);
    let noon = solar_noon(date);
    SunriseSunset {
        sunrise: noon.checked_sub_signed(offset).unwrap_or(NaiveDateTime::MIN),
        sunset: noon.checked_add_signed(offset).unwrap_or(NaiveDateTime::MAX),
        hours_from_noon,
    }
}

pub fn compute_day_profile(date: NaiveDate, latitude: f64) -> DaySolarProfile {
    build_profile(date, latitude, &EngineConfig::default())
}

/// Like [`compute_day_profile`] but with a caller-supplied stride and thresholds.
pub fn compute_day_profile_with(
    date: NaiveDate,
    latitude: f64,
    config: &EngineConfig,
) -> Result<DaySolarProfile> {
    config.validate()?;
    Ok(build_profile(date, latitude, config))
}

/// Evaluates the local calendar day of `dt`; its time of day is ignored.
pub fn compute_day_profile_for<Tz: TimeZone>(dt: &DateTime<Tz>, latitude: f64) -> DaySolarProfile {
    compute_day_profile(dt.date_naive(), latitude)
}

fn build_profile(date: NaiveDate, latitude: f64, config: &EngineConfig) -> DaySolarProfile {
    let day_of_year = angles::day_of_year(date);
    let declination = angles::solar_declination(day_of_year);
    let ss = estimate_sunrise_sunset(date, latitude);
    let step = Duration::minutes(config.sample_interval_minutes);

    let span_minutes = (ss.sunset - ss.sunrise).num_minutes();
    let capacity = (span_minutes / config.sample_interval_minutes + 1) as usize;
    let mut samples = Vec::with_capacity(capacity);
    let mut max_elevation: f64 = 0.0;

    // No sample is forced at sunset; the last one lands within one stride of it.
    let mut current = ss.sunrise;
    while current <= ss.sunset {
        let elevation = angles::elevation_at(latitude, declination, current);
        let sample = ElevationSample::new(current, elevation, &config.thresholds);
        max_elevation = max_elevation.max(sample.elevation);
        samples.push(sample);
        match current.checked_add_signed(step) {
            Some(next) => current = next,
            None => break,
        }
    }

    debug!(
        %date,
        latitude,
        day_of_year,
        declination,
        samples = samples.len(),
        max_elevation,
        "computed day profile"
    );

    DaySolarProfile {
        date,
        latitude,
        day_of_year,
        declination,
        sample_interval_minutes: config.sample_interval_minutes,
        sunrise: ss.sunrise,
        sunset: ss.sunset,
        samples,
        max_elevation,
    }
}

/// Linear between bracketing samples; `None` outside `[first sample, last sample]`.
pub fn interpolate_elevation(profile: &DaySolarProfile, time: NaiveDateTime) -> Option<f64> {
    let samples = &profile.samples;
    let first = samples.first()?;
    let last = samples.last()?;
    if time < first.time || time > last.time {
        return None;
    }

    let interval_ms = (profile.sample_interval_minutes * 60_000).max(1);
    let elapsed_ms = (time - first.time).num_milliseconds();
    let idx_before = ((elapsed_ms / interval_ms) as usize).min(samples.len() - 1);
    let before = &samples[idx_before];

    let after = match samples.get(idx_before + 1) {
        Some(after) if time != before.time => after,
        _ => return Some(before.elevation),
    };

    let span = (after.time - before.time).num_milliseconds() as f64;
    let fraction = (time - before.time).num_milliseconds() as f64 / span;
    Some(before.elevation + fraction * (after.elevation - before.elevation))
}
