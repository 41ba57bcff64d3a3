use chrono::{Datelike, NaiveDate, NaiveDateTime, Timelike};

pub const EARTH_AXIAL_TILT: f64 = 23.45;
pub const DEGREES_PER_HOUR: f64 = 15.0;
pub const SOLAR_NOON_HOUR: f64 = 12.0;
pub const EQUINOX_DAY_OFFSET: f64 = 81.0;

pub fn deg_to_rad(deg: f64) -> f64 {
    deg * (std::f64::consts::PI / 180.0)
}

pub fn rad_to_deg(rad: f64) -> f64 {
    rad * (180.0 / std::f64::consts::PI)
}

pub fn day_of_year(date: NaiveDate) -> u32 {
    date.ordinal()
}

/// Circular-orbit approximation, accurate to roughly a degree.
pub fn solar_declination(day_of_year: u32) -> f64 {
    EARTH_AXIAL_TILT
        * deg_to_rad((360.0 / 365.0) * (day_of_year as f64 - EQUINOX_DAY_OFFSET)).sin()
}

/// Hour of day from the hour and minute fields; seconds are dropped.
pub fn decimal_hour(time: NaiveDateTime) -> f64 {
    time.hour() as f64 + time.minute() as f64 / 60.0
}

pub fn hour_angle(decimal_hour: f64) -> f64 {
    DEGREES_PER_HOUR * (decimal_hour - SOLAR_NOON_HOUR)
}

/// Polar night yields 0° and polar day 180°.
pub fn sunrise_hour_angle(latitude: f64, declination: f64) -> f64 {
    let lat_rad = deg_to_rad(latitude);
    let dec_rad = deg_to_rad(declination);
    let cos_h = -lat_rad.tan() * dec_rad.tan();
    rad_to_deg(cos_h.clamp(-1.0, 1.0).acos())
}

/// Negative below the horizon.
pub fn solar_elevation(latitude: f64, declination: f64, hour_angle: f64) -> f64 {
    let lat_rad = deg_to_rad(latitude);
    let dec_rad = deg_to_rad(declination);
    let ha_rad = deg_to_rad(hour_angle);
    let sin_elevation =
        lat_rad.sin() * dec_rad.sin() + lat_rad.cos() * dec_rad.cos() * ha_rad.cos();
    rad_to_deg(sin_elevation.clamp(-1.0, 1.0).asin())
}

pub fn elevation_at(latitude: f64, declination: f64, time: NaiveDateTime) -> f64 {
    solar_elevation(latitude, declination, hour_angle(decimal_hour(time))).max(0.0)
}
