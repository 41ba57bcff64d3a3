use chrono::NaiveDateTime;
use tracing::{debug, trace};

use crate::types::{DaySolarProfile, ElevationSample, FishingQuality, QualitySummary, QualityWindow};

#[derive(Debug, Clone, Copy)]
struct OpenRun {
    quality: FishingQuality,
    start: NaiveDateTime,
    elevation_sum: f64,
    count: u32,
}

impl OpenRun {
    fn open(sample: &ElevationSample) -> Self {
        Self {
            quality: sample.quality,
            start: sample.time,
            elevation_sum: sample.elevation,
            count: 1,
        }
    }

    fn extend(&mut self, sample: &ElevationSample) {
        self.elevation_sum += sample.elevation;
        self.count += 1;
    }

    fn close(&self, end: NaiveDateTime) -> QualityWindow {
        let window = QualityWindow {
            start: self.start,
            end,
            quality: self.quality,
            average_elevation: self.elevation_sum / self.count as f64,
        };
        trace!(?window, "closed quality window");
        window
    }
}

/// Splits the profile's samples into maximal runs of equal quality.
///
/// A run closed by a quality change ends at the first sample of the next run;
/// the final run ends at the day's last sample. Laid end to end the windows
/// cover `[first sample, last sample]` without gaps.
pub fn find_quality_windows(profile: &DaySolarProfile) -> Vec<QualityWindow> {
    let mut windows = Vec::new();
    let mut run: Option<OpenRun> = None;

    for sample in &profile.samples {
        if let Some(open) = run.as_mut() {
            if open.quality == sample.quality {
                open.extend(sample);
                continue;
            }
            windows.push(open.close(sample.time));
        }
        run = Some(OpenRun::open(sample));
    }

    if let (Some(open), Some(last)) = (run, profile.samples.last()) {
        windows.push(open.close(last.time));
    }

    debug!(date = %profile.date, windows = windows.len(), "segmented day profile");
    windows
}

/// Best quality first, then chronological.
pub fn rank_windows(windows: &[QualityWindow]) -> Vec<QualityWindow> {
    let mut ranked = windows.to_vec();
    ranked.sort_by(|a, b| a.quality.cmp(&b.quality).then(a.start.cmp(&b.start)));
    ranked
}

pub fn summarize_durations(windows: &[QualityWindow]) -> QualitySummary {
    windows
        .iter()
        .fold(QualitySummary::default(), |mut summary, window| {
            let minutes = window.duration_minutes();
            match window.quality {
                FishingQuality::Excellent => summary.excellent_minutes += minutes,
                FishingQuality::Okay => summary.okay_minutes += minutes,
                FishingQuality::Poor => summary.poor_minutes += minutes,
            }
            summary
        })
}

/// The first `limit` excellent windows of the day, in chronological order.
pub fn excellent_windows(windows: &[QualityWindow], limit: usize) -> Vec<QualityWindow> {
    windows
        .iter()
        .filter(|w| w.quality == FishingQuality::Excellent)
        .take(limit)
        .copied()
        .collect()
}
