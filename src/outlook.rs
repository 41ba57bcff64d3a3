use chrono::{Days, NaiveDate};
use tracing::debug;

use crate::error::{Error, Result};
use crate::profile::compute_day_profile_with;
use crate::types::{DailyOutlook, DaySolarProfile, EngineConfig};
use crate::windows::{find_quality_windows, summarize_durations};

pub const MAX_COMPARED_DAYS: usize = 3;
pub const MAX_OUTLOOK_RADIUS_DAYS: u32 = 7;

/// `center` and up to [`MAX_OUTLOOK_RADIUS_DAYS`] days either side, in order.
pub fn date_window(center: NaiveDate, radius: u32) -> Vec<NaiveDate> {
    let radius = Days::new(radius.min(MAX_OUTLOOK_RADIUS_DAYS) as u64);
    let (Some(first), Some(last)) = (center.checked_sub_days(radius), center.checked_add_days(radius))
    else {
        return vec![center];
    };
    first.iter_days().take_while(|d| *d <= last).collect()
}

/// One profile per distinct day, sorted by date.
pub fn compare_days(
    dates: &[NaiveDate],
    latitude: f64,
    config: &EngineConfig,
) -> Result<Vec<DaySolarProfile>> {
    let mut distinct = dates.to_vec();
    distinct.sort_unstable();
    distinct.dedup();
    if distinct.len() > MAX_COMPARED_DAYS {
        return Err(Error::TooManyComparisonDays {
            requested: distinct.len(),
            max: MAX_COMPARED_DAYS,
        });
    }
    distinct
        .into_iter()
        .map(|date| compute_day_profile_with(date, latitude, config))
        .collect()
}

pub fn daily_outlook(
    dates: &[NaiveDate],
    latitude: f64,
    config: &EngineConfig,
) -> Result<Vec<DailyOutlook>> {
    let outlook = dates
        .iter()
        .map(|&date| {
            let profile = compute_day_profile_with(date, latitude, config)?;
            let windows = find_quality_windows(&profile);
            Ok(DailyOutlook {
                date,
                sunrise: profile.sunrise,
                sunset: profile.sunset,
                max_elevation: profile.max_elevation,
                summary: summarize_durations(&windows),
            })
        })
        .collect::<Result<Vec<_>>>()?;
    debug!(days = outlook.len(), latitude, "built daily outlook");
    Ok(outlook)
}
