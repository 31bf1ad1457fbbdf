//! Upstream collaborators of the recommendation core.
//!
//! The core itself performs no I/O. Wardrobe storage and weather acquisition sit
//! behind these traits so the service can be driven by files or a forecast API
//! without touching the pipeline.

use uuid::Uuid;

use crate::{
    error::AppResult,
    models::{ForecastReport, WardrobeItem},
};

pub mod json_file;

pub use json_file::{JsonFileWardrobe, JsonFileWeather};

/// Source of a user's wardrobe
#[cfg_attr(test, mockall::automock)]
#[async_trait::async_trait]
pub trait WardrobeProvider: Send + Sync {
    /// Every garment of the user, including ones without a season attribute
    async fn wardrobe(&self, user_id: Uuid) -> AppResult<Vec<WardrobeItem>>;

    /// Provider name for logging and debugging
    fn name(&self) -> &'static str;
}

/// Source of the forecast for a user's location
#[cfg_attr(test, mockall::automock)]
#[async_trait::async_trait]
pub trait WeatherProvider: Send + Sync {
    /// Forecast for the user's next outing, with their sensitivity rating
    async fn forecast(&self, user_id: Uuid) -> AppResult<ForecastReport>;

    fn name(&self) -> &'static str;
}
