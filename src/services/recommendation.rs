use std::sync::Arc;
use uuid::Uuid;

use crate::{
    error::{AppError, AppResult},
    models::{ForecastReport, RecommendationResponse, WeatherContext},
    services::{
        assembler::{RandomTieBreaker, TieBreaker},
        pipeline,
        providers::{WardrobeProvider, WeatherProvider},
    },
};

/// Fetches a user's wardrobe and forecast and runs the recommendation core
#[derive(Clone)]
pub struct RecommendationService {
    wardrobe: Arc<dyn WardrobeProvider>,
    weather: Arc<dyn WeatherProvider>,
}

/// Rejects forecasts the scoring tables cannot interpret
fn validate_report(report: &ForecastReport) -> AppResult<()> {
    if !report.temperature.is_finite() {
        return Err(AppError::InvalidInput(format!(
            "temperature must be finite, got {}",
            report.temperature
        )));
    }
    if !(0.0..=100.0).contains(&report.humidity) {
        return Err(AppError::InvalidInput(format!(
            "humidity must be within 0-100, got {}",
            report.humidity
        )));
    }
    if !(0.0..=1.0).contains(&report.precipitation_probability) {
        return Err(AppError::InvalidInput(format!(
            "precipitation probability must be within 0-1, got {}",
            report.precipitation_probability
        )));
    }
    if report.wind_speed < 0.0 {
        return Err(AppError::InvalidInput(format!(
            "wind speed must not be negative, got {}",
            report.wind_speed
        )));
    }
    Ok(())
}

impl RecommendationService {
    pub fn new(wardrobe: Arc<dyn WardrobeProvider>, weather: Arc<dyn WeatherProvider>) -> Self {
        Self { wardrobe, weather }
    }

    /// Recommends outfits with a fresh random tie-breaker
    pub async fn recommend(&self, user_id: Uuid) -> AppResult<RecommendationResponse> {
        let mut tie_breaker = RandomTieBreaker::new();
        self.recommend_with(user_id, &mut tie_breaker).await
    }

    /// Recommends outfits, settling near-duplicate ties with `tie_breaker`
    pub async fn recommend_with(
        &self,
        user_id: Uuid,
        tie_breaker: &mut (dyn TieBreaker + Send),
    ) -> AppResult<RecommendationResponse> {
        let (items, report) = tokio::try_join!(
            async {
                self.wardrobe.wardrobe(user_id).await.map_err(|e| {
                    tracing::error!(provider = self.wardrobe.name(), error = %e, "Wardrobe fetch failed");
                    e
                })
            },
            async {
                self.weather.forecast(user_id).await.map_err(|e| {
                    tracing::error!(provider = self.weather.name(), error = %e, "Forecast fetch failed");
                    e
                })
            },
        )?;

        validate_report(&report)?;
        let ctx: WeatherContext = report.into_context();

        let response = pipeline::recommend(&items, &ctx, tie_breaker);

        tracing::info!(
            user_id = %user_id,
            wardrobe_size = items.len(),
            feels_like = ctx.personal_feels_like,
            outfit_count = response.outfits.len(),
            best_score = response.outfits.first().map(|o| o.score()),
            umbrella = response.advice.umbrella,
            "Recommendation complete"
        );

        if response.outfits.is_empty() {
            tracing::warn!(user_id = %user_id, "No eligible base garments for this forecast");
        }

        Ok(response)
    }
}
