use std::collections::BTreeSet;

use crate::models::{
    attr, GarmentCandidate, Season, SeasonTag, Sensitivity, WardrobeItem, WeatherContext,
};

/// Seasons whose garments may be worn for a forecast season
///
/// Cold-sensitive users (1) may reach into colder seasons, heat-sensitive
/// users (5) into warmer ones. Everyone else gets one adjacent season.
pub fn allowed_seasons(season: Season, sensitivity: Sensitivity) -> BTreeSet<Season> {
    use Season::*;

    let extra: &[Season] = if sensitivity.is_cold_sensitive() {
        match season {
            Winter => &[],
            Spring | Autumn => &[Winter],
            Summer => &[Spring, Autumn],
        }
    } else if sensitivity.is_heat_sensitive() {
        match season {
            Summer => &[],
            Spring | Autumn => &[Summer],
            Winter => &[Spring, Autumn],
        }
    } else {
        match season {
            Spring => &[Summer],
            Summer => &[Spring],
            Autumn => &[Winter],
            Winter => &[Autumn],
        }
    };

    std::iter::once(season).chain(extra.iter().copied()).collect()
}

/// Whether a season attribute value admits any of the allowed seasons
fn season_matches(value: &str, allowed: &BTreeSet<Season>) -> bool {
    SeasonTag::parse_all(value).into_iter().any(|tag| match tag {
        SeasonTag::Any => true,
        SeasonTag::Season(season) => allowed.contains(&season),
    })
}

/// Keeps the garments wearable in the forecast's season, classified for scoring
///
/// Garments without a season attribute are dropped.
pub fn filter_by_season(items: &[WardrobeItem], ctx: &WeatherContext) -> Vec<GarmentCandidate> {
    let season = Season::of(ctx.forecast_at);
    let allowed = allowed_seasons(season, ctx.sensitivity);

    let eligible: Vec<GarmentCandidate> = items
        .iter()
        .filter(|item| {
            item.attribute(attr::SEASON)
                .is_some_and(|value| season_matches(value, &allowed))
        })
        .cloned()
        .map(GarmentCandidate::classify)
        .collect();

    tracing::debug!(
        season = ?season,
        allowed = ?allowed,
        wardrobe = items.len(),
        eligible = eligible.len(),
        "Season filter applied"
    );

    eligible
}
