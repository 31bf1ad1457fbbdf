//! Feels-like temperature after the Korea Meteorological Administration formulas.
//!
//! May through September use the wet-bulb based summer formula; the rest of the
//! year uses wind chill, which only applies at or below 10 °C with at least
//! 1.3 m/s of wind.

use chrono::{DateTime, Datelike, FixedOffset, Utc};

use super::Sensitivity;

const KST_OFFSET_SECONDS: i32 = 9 * 3600;

/// Feels-like temperature in °C, rounded to one decimal
pub fn feels_like(
    temperature: f64,
    humidity: f64,
    wind_speed: f64,
    forecast_at: DateTime<Utc>,
) -> f64 {
    let month = match FixedOffset::east_opt(KST_OFFSET_SECONDS) {
        Some(kst) => forecast_at.with_timezone(&kst).month(),
        None => forecast_at.month(),
    };

    if (5..=9).contains(&month) {
        summer_feels_like(temperature, humidity)
    } else {
        winter_feels_like(temperature, wind_speed)
    }
}

/// Shifts a feels-like temperature by the user's sensitivity
pub fn personalize(feels_like: f64, sensitivity: Sensitivity) -> f64 {
    let bias = match sensitivity.value() {
        1 => 1.5,
        2 => 0.8,
        4 => -0.8,
        5 => -1.5,
        _ => 0.0,
    };
    round_tenths(feels_like + bias)
}

fn summer_feels_like(ta: f64, rh: f64) -> f64 {
    let tw = wet_bulb(ta, rh);
    let at = -0.2442 + 0.55399 * tw + 0.45535 * ta - 0.0022 * tw.powi(2)
        + 0.00278 * tw * ta
        + 3.0;
    round_tenths(at)
}

fn winter_feels_like(ta: f64, wind_speed: f64) -> f64 {
    if ta > 10.0 || wind_speed < 1.3 {
        return ta;
    }
    // km/h
    let v = (wind_speed * 3.6).powf(0.16);
    let at = 13.12 + 0.6215 * ta - 11.37 * v + 0.3965 * v * ta;
    round_tenths(at)
}

/// Stull (2011) wet-bulb estimate
fn wet_bulb(ta: f64, rh: f64) -> f64 {
    ta * (0.151977 * (rh + 8.313659).sqrt()).atan() + (ta + rh).atan() - (rh - 1.67633).atan()
        + 0.00391838 * rh.powf(1.5) * (0.023101 * rh).atan()
        - 4.686035
}

fn round_tenths(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn at(month: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, month, 15, 3, 0, 0).unwrap()
    }

    #[test]
    fn test_winter_without_wind_is_air_temperature() {
        assert_eq!(feels_like(3.0, 60.0, 1.0, at(1)), 3.0);
        assert_eq!(feels_like(12.0, 60.0, 8.0, at(1)), 12.0);
    }

    #[test]
    fn test_wind_chill_lowers_temperature() {
        let chilled = feels_like(0.0, 60.0, 5.0, at(1));
        assert!(chilled < 0.0);
        assert!(chilled > -10.0);
    }

    #[test]
    fn test_summer_humidity_raises_temperature() {
        let dry = feels_like(30.0, 30.0, 0.0, at(7));
        let humid = feels_like(30.0, 90.0, 0.0, at(7));
        assert!(humid > dry);
    }

    #[test]
    fn test_personalize_bias() {
        let cold = Sensitivity::new(1).unwrap();
        let hot = Sensitivity::new(5).unwrap();
        assert_eq!(personalize(10.0, cold), 11.5);
        assert_eq!(personalize(10.0, hot), 8.5);
        assert_eq!(personalize(10.0, Sensitivity::NEUTRAL), 10.0);
    }
}
