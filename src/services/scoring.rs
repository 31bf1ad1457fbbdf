//! Per-garment weather fit and top-K retention.
//!
//! Each garment gets up to four rule groups: its kind (top, bottom, outer or
//! shoes), its material, its color and its category (outers and scarves only).
//! The score is the neutral 50 plus
//! the mean delta of the groups that apply, clamped to a narrow band so a
//! single rule can never dominate the outfit ranking.

use std::collections::BTreeMap;

use crate::models::{
    kinds::{BottomKind, OuterKind, ShoesKind, TopKind},
    Category, Color, ColorTone, GarmentCandidate, GarmentKind, Material, ScoredGarment,
    WeatherContext, WindLevel,
};

pub const NEUTRAL_SCORE: f64 = 50.0;
pub const MIN_SCORE: f64 = 45.0;
pub const MAX_SCORE: f64 = 60.0;
/// Garments kept per category after scoring
pub const TOP_K: usize = 5;

fn when(condition: bool, delta: f64) -> f64 {
    if condition {
        delta
    } else {
        0.0
    }
}

/// Weather readings the rule tables look at
struct Conditions {
    /// Personal feels-like temperature
    t: f64,
    /// Forecast air temperature
    air: f64,
    humidity: f64,
    probability: f64,
    strong_wind: bool,
    clear: bool,
    rainy: bool,
    snowy: bool,
    precipitating: bool,
}

impl Conditions {
    fn from_context(ctx: &WeatherContext) -> Self {
        Self {
            t: ctx.personal_feels_like,
            air: ctx.temperature,
            humidity: ctx.humidity,
            probability: ctx.precipitation_probability,
            strong_wind: ctx.wind == WindLevel::Strong,
            clear: ctx.precipitation.is_clear(),
            rainy: ctx.precipitation.is_rainy(),
            snowy: ctx.precipitation.is_snowy(),
            precipitating: ctx.precipitation.is_precipitating(),
        }
    }
}

fn top_delta(kind: TopKind, c: &Conditions) -> f64 {
    let t = c.t;
    match kind {
        TopKind::TShirt | TopKind::Blouse => when(t >= 23.0, 5.0) + when(t < 15.0, -3.0),
        TopKind::ShortSleeve | TopKind::Sleeveless => when(t >= 25.0, 5.0) + when(t < 18.0, -4.0),
        TopKind::Knit => when(t <= 15.0, 4.0) + when(c.humidity > 80.0, -1.0),
        TopKind::Hoodie | TopKind::Sweatshirt => {
            let band = if (10.0..=18.0).contains(&t) {
                3.0
            } else {
                when(t < 10.0, 1.0)
            };
            band + when(c.rainy, -1.0)
        }
        TopKind::Shirt => when((16.0..=25.0).contains(&t), 3.0) + when(t < 10.0, -2.0),
    }
}

fn bottom_delta(kind: BottomKind, c: &Conditions) -> f64 {
    let t = c.t;
    match kind {
        BottomKind::Shorts => {
            when(t >= 25.0, 6.0) + when(t < 20.0, -3.0) + when(c.probability > 0.5, -1.0)
        }
        BottomKind::Jeans => when((10.0..=20.0).contains(&t), 4.0) + when(c.humidity > 85.0, -1.0),
        BottomKind::Skirt => {
            when(t >= 22.0, 4.0) + when((18.0..22.0).contains(&t), 2.0) + when(t < 15.0, -3.0)
        }
        BottomKind::Slacks => {
            when((12.0..=24.0).contains(&t), 3.0) + when(c.probability > 0.5, -1.0)
        }
        BottomKind::Jogger => when((8.0..=18.0).contains(&t), 3.0) + when(c.humidity > 85.0, -1.0),
        BottomKind::WidePants => when((18.0..=28.0).contains(&t), 3.0) + when(c.strong_wind, -1.0),
        BottomKind::CottonPants => when((15.0..=25.0).contains(&t), 3.0),
    }
}

fn outer_delta(kind: OuterKind, c: &Conditions) -> f64 {
    let t = c.t;
    match kind {
        OuterKind::Cardigan => {
            when((14.0..=22.0).contains(&t), 4.0) + when(t < 8.0, -2.0) + when(c.strong_wind, -1.0)
        }
        OuterKind::Padding => {
            let band = if t < 5.0 {
                6.0
            } else if t <= 10.0 {
                3.0
            } else {
                when(t > 12.0, -3.0)
            };
            band + when(c.strong_wind, 2.0) + when(c.precipitating, 1.5)
        }
        OuterKind::Coat | OuterKind::Jumper => {
            when(t < 3.0, 5.0)
                + when((3.0..=10.0).contains(&t), 4.0)
                + when(t > 15.0, -2.0)
                + when(c.snowy, 2.0)
                + when(c.strong_wind, 1.0)
        }
        OuterKind::TrenchCoat => {
            when((9.0..=18.0).contains(&t), 4.5) + when(t > 22.0, -2.0) + when(c.rainy, 1.0)
        }
        OuterKind::Jacket | OuterKind::HoodZipup => {
            when((10.0..=18.0).contains(&t), 4.0) + when(t > 20.0, -1.5) + when(c.strong_wind, 0.5)
        }
        OuterKind::Blazer => when((12.0..=22.0).contains(&t), 3.0) + when(c.precipitating, -1.0),
        OuterKind::FurMustang => when(t <= 3.0, 5.0) + when(t > 12.0, -3.0),
    }
}

fn shoes_delta(kind: ShoesKind, c: &Conditions) -> f64 {
    let t = c.t;
    match kind {
        ShoesKind::RainBoots => when(c.rainy || c.snowy, 10.0) + when(t > 25.0, -3.0),
        ShoesKind::Boots => {
            when(t < 5.0, 6.0) + when((5.0..=10.0).contains(&t), 3.0) + when(t > 20.0, -3.0)
        }
        ShoesKind::Sandals => {
            when(t > 25.0, 5.0) + when(t < 20.0, -2.0) + when(c.precipitating || c.strong_wind, -3.0)
        }
        ShoesKind::Sneakers => when((12.0..=25.0).contains(&t), 4.0) + when(c.precipitating, -2.0),
        ShoesKind::Loafers => {
            when((15.0..=25.0).contains(&t), 2.0) + when(c.rainy || c.probability > 0.4, -2.0)
        }
        ShoesKind::Heels => {
            when((18.0..=25.0).contains(&t), 2.0)
                + when(c.precipitating, -3.0)
                + when(c.strong_wind, -1.0)
        }
    }
}

fn material_delta(material: Material, c: &Conditions) -> Option<f64> {
    let t = c.t;
    let delta = match material {
        Material::Linen | Material::Cotton | Material::Rayon => {
            if t >= 25.0 {
                5.0
            } else if t >= 15.0 {
                2.0
            } else {
                -2.0
            }
        }
        Material::Wool | Material::Fleece | Material::Knit => {
            if t <= 5.0 {
                6.0
            } else if t <= 10.0 {
                3.0
            } else {
                -2.0
            }
        }
        Material::Denim | Material::Poly => {
            if (10.0..=20.0).contains(&t) {
                3.0
            } else {
                -1.0
            }
        }
        Material::Nylon | Material::Leather => {
            when(t <= 10.0, 3.0)
                + when(t > 25.0, -3.0)
                + when(c.rainy || c.snowy, 5.0)
                + when(c.probability > 0.5, 3.0)
        }
        Material::Other => return None,
    };
    Some(delta)
}

/// `None` for a color whose tone is not recognised
fn color_delta(color: Color, c: &Conditions) -> Option<f64> {
    let tone = match color.tone {
        ColorTone::Other => return None,
        tone => tone,
    };
    let brightness = if color.bright {
        when(c.clear, 2.0) + when(c.probability > 0.5, -1.5)
    } else {
        0.0
    };
    let warmth = match tone {
        ColorTone::Warm => when(c.t < 10.0, 2.0),
        ColorTone::Cool => when(c.t > 25.0, 2.0),
        _ => 0.0,
    };
    Some(brightness + warmth)
}

/// Cover garments gain from cold, snow and wind; other categories have no group
fn category_delta(category: Category, c: &Conditions) -> Option<f64> {
    match category {
        Category::Outer | Category::Scarf => Some(
            when(c.snowy, 3.0)
                + when(c.air < 16.0, 2.0)
                + when(c.air < 4.0, 5.0)
                + when(c.strong_wind, 5.0),
        ),
        _ => None,
    }
}

fn kind_delta(kind: GarmentKind, c: &Conditions) -> Option<f64> {
    match kind {
        GarmentKind::Top(k) => Some(top_delta(k, c)),
        GarmentKind::Bottom(k) => Some(bottom_delta(k, c)),
        GarmentKind::Outer(k) => Some(outer_delta(k, c)),
        GarmentKind::Shoes(k) => Some(shoes_delta(k, c)),
        GarmentKind::Other => None,
    }
}

/// Weather fit of one garment, within [`MIN_SCORE`, `MAX_SCORE`]
pub fn weather_fit(candidate: &GarmentCandidate, ctx: &WeatherContext) -> f64 {
    let conditions = Conditions::from_context(ctx);
    let groups: Vec<f64> = [
        kind_delta(candidate.kind, &conditions),
        candidate
            .material
            .and_then(|m| material_delta(m, &conditions)),
        candidate.color.and_then(|c| color_delta(c, &conditions)),
        category_delta(candidate.category(), &conditions),
    ]
    .into_iter()
    .flatten()
    .collect();

    if groups.is_empty() {
        return NEUTRAL_SCORE;
    }
    let mean = groups.iter().sum::<f64>() / groups.len() as f64;
    (NEUTRAL_SCORE + mean).clamp(MIN_SCORE, MAX_SCORE)
}

/// Scores every candidate and keeps the best [`TOP_K`] of each category
pub fn score_and_retain(
    candidates: Vec<GarmentCandidate>,
    ctx: &WeatherContext,
) -> BTreeMap<Category, Vec<ScoredGarment>> {
    let mut by_category: BTreeMap<Category, Vec<ScoredGarment>> = BTreeMap::new();
    for candidate in candidates {
        let score = weather_fit(&candidate, ctx);
        by_category
            .entry(candidate.category())
            .or_default()
            .push(ScoredGarment::new(candidate, score));
    }

    for (category, garments) in by_category.iter_mut() {
        let eligible = garments.len();
        garments.sort_by(|a, b| b.score.total_cmp(&a.score).then_with(|| a.id().cmp(&b.id())));
        garments.truncate(TOP_K);
        tracing::debug!(
            category = %category,
            eligible,
            retained = garments.len(),
            "Retained best garments"
        );
    }

    by_category
}
