use chrono::NaiveDate;
use ice_sun_angle::angles::*;

macro_rules! assert_approx {
    ($left:expr, $right:expr, $tol:expr) => {
        let (l, r) = ($left as f64, $right as f64);
        assert!(
            (l - r).abs() <= $tol,
            "assert_approx failed: left={}, right={}, diff={}, tol={}",
            l, r, (l - r).abs(), $tol
        );
    };
}

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

// ── DayOfYear ──

#[test]
fn test_day_of_year_known_dates() {
    assert_eq!(day_of_year(date(2026, 1, 1)), 1);
    assert_eq!(day_of_year(date(2026, 3, 21)), 80);
    assert_eq!(day_of_year(date(2026, 12, 31)), 365);
}

#[test]
fn test_day_of_year_leap_year() {
    assert_eq!(day_of_year(date(2024, 2, 29)), 60);
    assert_eq!(day_of_year(date(2024, 3, 1)), 61);
    assert_eq!(day_of_year(date(2024, 12, 31)), 366);
}

#[test]
fn test_first_day_of_each_month_non_leap() {
    let expected = [1, 32, 60, 91, 121, 152, 182, 213, 244, 274, 305, 335];
    for (i, &exp) in expected.iter().enumerate() {
        let month = i as u32 + 1;
        assert_eq!(day_of_year(date(2026, month, 1)), exp, "Month {}", month);
    }
}

// ── SolarDeclination ──

#[test]
fn test_solar_declination_solstices_equinoxes() {
    assert_approx!(solar_declination(172), 23.45, 0.1);
    assert_approx!(solar_declination(355), -23.45, 0.1);
    assert_approx!(solar_declination(81), 0.0, 1e-12);
    assert_approx!(solar_declination(264), 0.0, 1.0);
}

#[test]
fn test_solar_declination_bounded_all_days() {
    for n in 1..=366 {
        let decl = solar_declination(n);
        assert!(
            (-EARTH_AXIAL_TILT..=EARTH_AXIAL_TILT).contains(&decl),
            "Day {}: {}",
            n, decl
        );
    }
}

#[test]
fn test_solar_declination_sign_follows_season() {
    assert!(solar_declination(day_of_year(date(2026, 5, 1))) > 0.0);
    assert!(solar_declination(day_of_year(date(2026, 1, 15))) < 0.0);
}

// ── DecimalHour / HourAngle ──

#[test]
fn test_decimal_hour_drops_seconds() {
    let t = date(2026, 1, 15).and_hms_opt(7, 45, 59).unwrap();
    assert_approx!(decimal_hour(t), 7.75, 1e-12);
}

#[test]
fn test_decimal_hour_midnight_and_noon() {
    assert_approx!(decimal_hour(date(2026, 1, 15).and_hms_opt(0, 0, 0).unwrap()), 0.0, 1e-12);
    assert_approx!(decimal_hour(date(2026, 1, 15).and_hms_opt(12, 0, 0).unwrap()), 12.0, 1e-12);
}

#[test]
fn test_hour_angle_solar_noon() {
    assert_approx!(hour_angle(12.0), 0.0, 1e-12);
}

#[test]
fn test_hour_angle_known_values() {
    assert_approx!(hour_angle(13.0), 15.0, 1e-12);
    assert_approx!(hour_angle(11.0), -15.0, 1e-12);
    assert_approx!(hour_angle(7.75), -63.75, 1e-12);
    assert_approx!(hour_angle(0.0), -180.0, 1e-12);
}

// ── SunriseHourAngle ──

#[test]
fn test_sunrise_hour_angle_equator_is_six_hours() {
    for &decl in &[-23.45, -10.0, 0.0, 10.0, 23.45] {
        assert_approx!(sunrise_hour_angle(0.0, decl), 90.0, 1e-9);
    }
}

#[test]
fn test_sunrise_hour_angle_equinox_any_latitude() {
    for &lat in &[-65.0, -45.0, 0.0, 45.0, 55.0, 65.0] {
        assert_approx!(sunrise_hour_angle(lat, 0.0), 90.0, 1e-9);
    }
}

#[test]
fn test_sunrise_hour_angle_clamped_at_poles() {
    assert_approx!(sunrise_hour_angle(80.0, 23.45), 180.0, 1e-9);
    assert_approx!(sunrise_hour_angle(80.0, -23.45), 0.0, 1e-9);
    assert_approx!(sunrise_hour_angle(-80.0, -23.45), 180.0, 1e-9);
}

#[test]
fn test_sunrise_hour_angle_never_nan() {
    for lat in (-90..=90).step_by(5) {
        for n in (1..=365).step_by(7) {
            let h = sunrise_hour_angle(lat as f64, solar_declination(n));
            assert!((0.0..=180.0).contains(&h), "lat={} day={} h={}", lat, n, h);
        }
    }
}

// ── SolarElevation ──

#[test]
fn test_elevation_overhead_at_equator_equinox() {
    assert_approx!(solar_elevation(0.0, 0.0, 0.0), 90.0, 1e-9);
}

#[test]
fn test_noon_elevation_is_complement_of_zenith_distance() {
    let cases: &[(f64, f64)] = &[(55.0, -23.45), (55.0, 23.45), (45.0, 0.0), (65.0, -10.0)];
    for &(lat, decl) in cases {
        assert_approx!(solar_elevation(lat, decl, 0.0), 90.0 - (lat - decl).abs(), 1e-6);
    }
}

#[test]
fn test_midnight_elevation_negative() {
    assert_approx!(solar_elevation(55.0, 0.0, -180.0), -35.0, 1e-6);
}

#[test]
fn test_elevation_never_nan_at_zenith() {
    for &lat in &[-23.45, 0.0, 10.0, 23.45] {
        let e = solar_elevation(lat, lat, 0.0);
        assert!(!e.is_nan());
        assert_approx!(e, 90.0, 1e-5);
    }
}

#[test]
fn test_morning_afternoon_symmetry() {
    assert_approx!(
        solar_elevation(55.0, 10.0, -45.0),
        solar_elevation(55.0, 10.0, 45.0),
        1e-12
    );
}

#[test]
fn test_elevation_at_clamps_to_horizon() {
    let midnight = date(2026, 3, 21).and_hms_opt(0, 0, 0).unwrap();
    assert_eq!(elevation_at(55.0, 0.0, midnight), 0.0);
    let noon = date(2026, 3, 21).and_hms_opt(12, 0, 0).unwrap();
    assert_approx!(elevation_at(55.0, 0.0, noon), 35.0, 1e-6);
}

// ── DegRad ──

#[test]
fn test_deg_rad_roundtrip() {
    for &deg in &[0.0, 45.0, 90.0, 180.0, -45.0, 123.456] {
        assert_approx!(rad_to_deg(deg_to_rad(deg)), deg, 1e-10);
    }
}

#[test]
fn test_known_conversions() {
    assert_approx!(deg_to_rad(180.0), std::f64::consts::PI, 1e-10);
    assert_approx!(deg_to_rad(90.0), std::f64::consts::FRAC_PI_2, 1e-10);
    assert_approx!(rad_to_deg(std::f64::consts::PI), 180.0, 1e-10);
}
