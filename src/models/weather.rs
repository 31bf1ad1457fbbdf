use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt::Display;

use super::apparent_temperature;

/// Precipitation reported by the forecast
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PrecipitationType {
    #[default]
    None,
    Rain,
    RainSnow,
    Snow,
    Shower,
}

impl PrecipitationType {
    pub fn is_clear(self) -> bool {
        self == PrecipitationType::None
    }

    pub fn is_rainy(self) -> bool {
        matches!(
            self,
            PrecipitationType::Rain | PrecipitationType::RainSnow | PrecipitationType::Shower
        )
    }

    pub fn is_snowy(self) -> bool {
        matches!(self, PrecipitationType::Snow | PrecipitationType::RainSnow)
    }

    pub fn is_precipitating(self) -> bool {
        !self.is_clear()
    }
}

/// Wind bucket
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum WindLevel {
    #[default]
    Weak,
    Moderate,
    Strong,
}

impl WindLevel {
    /// Buckets a wind speed in m/s
    pub fn from_speed(meters_per_second: f64) -> Self {
        if meters_per_second < 4.0 {
            WindLevel::Weak
        } else if meters_per_second < 9.0 {
            WindLevel::Moderate
        } else {
            WindLevel::Strong
        }
    }
}

/// Personal 1-5 rating: 1 feels the cold most, 5 feels the heat most
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct Sensitivity(u8);

impl Sensitivity {
    pub const NEUTRAL: Sensitivity = Sensitivity(3);

    pub fn new(value: u8) -> Option<Self> {
        (1..=5).contains(&value).then_some(Self(value))
    }

    pub fn value(self) -> u8 {
        self.0
    }

    pub fn is_cold_sensitive(self) -> bool {
        self.0 == 1
    }

    pub fn is_heat_sensitive(self) -> bool {
        self.0 == 5
    }
}

impl Default for Sensitivity {
    fn default() -> Self {
        Self::NEUTRAL
    }
}

impl TryFrom<u8> for Sensitivity {
    type Error = String;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::new(value).ok_or_else(|| format!("sensitivity must be 1-5, got {}", value))
    }
}

impl From<Sensitivity> for u8 {
    fn from(sensitivity: Sensitivity) -> Self {
        sensitivity.0
    }
}

impl Display for Sensitivity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Read-only forecast and sensitivity snapshot consumed by the core
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WeatherContext {
    /// Forecast air temperature in °C
    pub temperature: f64,
    /// Relative humidity, 0-100
    pub humidity: f64,
    pub wind: WindLevel,
    pub precipitation: PrecipitationType,
    /// 0.0-1.0
    pub precipitation_probability: f64,
    /// Feels-like temperature adjusted for the user's sensitivity, °C
    pub personal_feels_like: f64,
    pub sensitivity: Sensitivity,
    pub forecast_at: DateTime<Utc>,
}

/// Forecast as delivered by a weather provider
///
/// The personal feels-like temperature and wind bucket are optional; missing
/// values are derived when converting into a [`WeatherContext`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ForecastReport {
    pub temperature: f64,
    pub humidity: f64,
    /// m/s
    #[serde(default)]
    pub wind_speed: f64,
    #[serde(default)]
    pub wind: Option<WindLevel>,
    #[serde(default)]
    pub precipitation: PrecipitationType,
    #[serde(default)]
    pub precipitation_probability: f64,
    pub forecast_at: DateTime<Utc>,
    #[serde(default)]
    pub personal_feels_like: Option<f64>,
    #[serde(default)]
    pub sensitivity: Sensitivity,
}

impl ForecastReport {
    pub fn into_context(self) -> WeatherContext {
        let personal_feels_like = self.personal_feels_like.unwrap_or_else(|| {
            let feels_like = apparent_temperature::feels_like(
                self.temperature,
                self.humidity,
                self.wind_speed,
                self.forecast_at,
            );
            apparent_temperature::personalize(feels_like, self.sensitivity)
        });

        WeatherContext {
            temperature: self.temperature,
            humidity: self.humidity,
            wind: self
                .wind
                .unwrap_or_else(|| WindLevel::from_speed(self.wind_speed)),
            precipitation: self.precipitation,
            precipitation_probability: self.precipitation_probability,
            personal_feels_like,
            sensitivity: self.sensitivity,
            forecast_at: self.forecast_at,
        }
    }
}
