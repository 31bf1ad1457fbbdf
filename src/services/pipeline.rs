use crate::models::{Category, GarmentCandidate, RecommendationResponse, WardrobeItem, WeatherContext};

use super::{
    advisory::carry_advice,
    assembler::{OutfitAssembler, TieBreaker},
    scoring::score_and_retain,
    season_filter::filter_by_season,
};

/// Runs the full recommendation core for one request
///
/// Wardrobe → season filter → weather fit and top-K → beam search, with the
/// carry advice computed alongside. `ETC` items never enter an outfit; they are
/// only matched against the advice.
pub fn recommend(
    items: &[WardrobeItem],
    ctx: &WeatherContext,
    tie_breaker: &mut dyn TieBreaker,
) -> RecommendationResponse {
    let (carryable, wearable): (Vec<WardrobeItem>, Vec<WardrobeItem>) = items
        .iter()
        .cloned()
        .partition(|item| item.category == Category::Etc);

    let eligible = filter_by_season(&wearable, ctx);
    let retained = score_and_retain(eligible, ctx);
    let outfits = OutfitAssembler::new(&retained, tie_breaker).assemble();

    let advice = carry_advice(ctx);
    let carry_items = carryable
        .into_iter()
        .map(GarmentCandidate::classify)
        .filter(|c| c.advisory.is_some_and(|item| advice.includes(item)))
        .map(|c| c.id())
        .collect();

    RecommendationResponse {
        outfits,
        advice,
        carry_items,
    }
}
