use chrono::NaiveDate;

use ice_sun_angle::{
    compute_day_profile, find_quality_windows, rank_windows, summarize_durations, FishingQuality,
    Region,
};

fn main() {
    let date = NaiveDate::from_ymd_opt(2026, 2, 14).unwrap();

    println!("=== Ice Fishing Sun Angle Example ===");
    println!("Date: {}", date);

    for region in Region::ALL {
        let profile = compute_day_profile(date, region.latitude());
        let windows = find_quality_windows(&profile);
        let summary = summarize_durations(&windows);

        println!();
        println!("--- {} ---", region.description());
        println!("Day of year: {}", profile.day_of_year);
        println!("Declination: {:.2}°", profile.declination);
        println!("Sunrise: {}", profile.sunrise.format("%H:%M"));
        println!("Sunset: {}", profile.sunset.format("%H:%M"));
        println!("Max elevation: {:.2}°", profile.max_elevation);
        for quality in FishingQuality::ALL {
            println!("{:<9} {} min", quality.label(), summary.minutes_for(quality));
        }
        for window in rank_windows(&windows) {
            println!(
                "  {} - {}  {:<9} avg {:.1}°",
                window.start.format("%H:%M"),
                window.end.format("%H:%M"),
                window.quality.label(),
                window.average_elevation
            );
        }
    }
}
