use std::path::PathBuf;

use anyhow::{Context, Result};
use chrono::{Local, NaiveDate, NaiveDateTime};
use clap::{Parser, Subcommand};
use ice_sun_angle::{
    compare_days, compute_day_profile_with, daily_outlook, date_window, excellent_windows,
    find_quality_windows, rank_windows, summarize_durations, validate_latitude, DaySolarProfile,
    EngineConfig, FishingQuality, QualitySummary, QualityWindow, Region, MAX_OUTLOOK_RADIUS_DAYS,
};
use serde::Serialize;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "ice_sun_angle", about = "Sun elevation windows for ice fishing")]
struct Cli {
    /// Preset region (north, center, south)
    #[arg(long, global = true, env = "ICE_SUN_REGION", default_value = "center")]
    region: Region,
    /// Explicit latitude in degrees; overrides --region
    #[arg(long, global = true, allow_negative_numbers = true)]
    latitude: Option<f64>,
    /// JSON engine config (sample interval, quality thresholds)
    #[arg(long, global = true)]
    config: Option<PathBuf>,
    /// Emit JSON instead of text
    #[arg(long, global = true)]
    json: bool,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Sunrise, sunset and the elevation series for one day
    Day {
        /// Date (YYYY-MM-DD), defaults to today
        #[arg(long)]
        date: Option<NaiveDate>,
    },
    /// Ranked fishing windows for one day
    Windows {
        /// Date (YYYY-MM-DD), defaults to today
        #[arg(long)]
        date: Option<NaiveDate>,
    },
    /// Compare up to three days side by side
    Compare {
        /// Dates to compare (YYYY-MM-DD), repeatable
        #[arg(long = "date", required = true)]
        dates: Vec<NaiveDate>,
    },
    /// Per-day summary around a date
    Outlook {
        /// Center date (YYYY-MM-DD), defaults to today
        #[arg(long)]
        date: Option<NaiveDate>,
        /// Days either side of the center date (at most 7)
        #[arg(
            long,
            default_value_t = MAX_OUTLOOK_RADIUS_DAYS,
            value_parser = clap::value_parser!(u32).range(..=MAX_OUTLOOK_RADIUS_DAYS as i64)
        )]
        radius: u32,
    },
}

#[derive(Serialize)]
struct WindowsReport {
    date: NaiveDate,
    windows: Vec<QualityWindow>,
    summary: QualitySummary,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let latitude = validate_latitude(cli.latitude.unwrap_or_else(|| cli.region.latitude()))?;
    let config = load_config(cli.config.as_ref())?;
    let today = Local::now().date_naive();

    match cli.command {
        Commands::Day { date } => {
            let profile = compute_day_profile_with(date.unwrap_or(today), latitude, &config)?;
            if cli.json {
                print_json(&profile)?;
            } else {
                print_profile(&profile);
            }
        }

        Commands::Windows { date } => {
            let date = date.unwrap_or(today);
            let profile = compute_day_profile_with(date, latitude, &config)?;
            let windows = find_quality_windows(&profile);
            let report = WindowsReport {
                date,
                summary: summarize_durations(&windows),
                windows: rank_windows(&windows),
            };
            if cli.json {
                print_json(&report)?;
            } else {
                print_windows(&report, &windows);
            }
        }

        Commands::Compare { dates } => {
            let profiles = compare_days(&dates, latitude, &config)?;
            if cli.json {
                print_json(&profiles)?;
            } else {
                for profile in &profiles {
                    println!(
                        "{}  max {:>4.1}°  {} - {}",
                        profile.date.format("%b %-d"),
                        profile.max_elevation,
                        hhmm(profile.sunrise),
                        hhmm(profile.sunset)
                    );
                }
            }
        }

        Commands::Outlook { date, radius } => {
            let dates = date_window(date.unwrap_or(today), radius);
            let outlook = daily_outlook(&dates, latitude, &config)?;
            if cli.json {
                print_json(&outlook)?;
            } else {
                for day in &outlook {
                    println!(
                        "{}  {} - {}  max {:>4.1}°  best {:>7}  okay {:>7}  poor {:>7}",
                        day.date.format("%a %b %-d"),
                        hhmm(day.sunrise),
                        hhmm(day.sunset),
                        day.max_elevation,
                        format_duration(day.summary.excellent_minutes),
                        format_duration(day.summary.okay_minutes),
                        format_duration(day.summary.poor_minutes)
                    );
                }
            }
        }
    }

    Ok(())
}

fn load_config(path: Option<&PathBuf>) -> Result<EngineConfig> {
    let Some(path) = path else {
        return Ok(EngineConfig::default());
    };
    let json = std::fs::read_to_string(path)
        .with_context(|| format!("reading config {}", path.display()))?;
    let config = EngineConfig::from_json_str(&json)
        .with_context(|| format!("parsing config {}", path.display()))?;
    tracing::info!(path = %path.display(), ?config, "loaded engine config");
    Ok(config)
}

fn print_json<T: Serialize>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

fn print_profile(profile: &DaySolarProfile) {
    println!(
        "{} at {:.1}° (day {})",
        profile.date.format("%A, %b %-d"),
        profile.latitude,
        profile.day_of_year
    );
    println!("Sunrise:   {}", hhmm(profile.sunrise));
    println!("Sunset:    {}", hhmm(profile.sunset));
    println!("Max angle: {:.1}°", profile.max_elevation);
    println!();
    for sample in &profile.samples {
        println!(
            "{}  {:>5.1}°  {}",
            hhmm(sample.time),
            sample.elevation,
            sample.quality.label()
        );
    }
}

fn print_windows(report: &WindowsReport, chronological: &[QualityWindow]) {
    println!("Fishing times for {}", report.date.format("%A, %b %-d"));
    for (quality, label) in [
        (FishingQuality::Excellent, "Best"),
        (FishingQuality::Okay, "Okay"),
        (FishingQuality::Poor, "Poor"),
    ] {
        println!(
            "  {:<5} {}",
            label,
            format_duration(report.summary.minutes_for(quality))
        );
    }

    let quick = excellent_windows(chronological, 2);
    if quick.is_empty() {
        println!("\nNo excellent windows today. Check morning and evening hours.");
    } else {
        let spans: Vec<String> = quick
            .iter()
            .map(|w| format!("{} - {}", hhmm(w.start), hhmm(w.end)))
            .collect();
        println!("\nBest bets: {}", spans.join(", "));
    }

    println!();
    for window in &report.windows {
        println!(
            "{} - {}  {:<9} {:>4} min  avg {:>4.1}°  {}",
            hhmm(window.start),
            hhmm(window.end),
            window.quality.label(),
            window.duration_minutes(),
            window.average_elevation,
            window.description()
        );
    }
}

fn hhmm(time: NaiveDateTime) -> String {
    time.format("%H:%M").to_string()
}

fn format_duration(minutes: i64) -> String {
    match (minutes / 60, minutes % 60) {
        (0, m) => format!("{m}m"),
        (h, 0) => format!("{h}h"),
        (h, m) => format!("{h}h {m}m"),
    }
}
