use serde::Serialize;
use std::{cmp::Ordering, collections::BTreeSet};
use uuid::Uuid;

use super::{harmony, Category, GarmentCandidate, Style};

/// A season-eligible garment with its weather-fit score
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScoredGarment {
    pub garment: GarmentCandidate,
    /// Weather fit, always within 45..=60
    pub score: f64,
    pub style: Style,
}

impl ScoredGarment {
    pub fn new(garment: GarmentCandidate, score: f64) -> Self {
        let style = garment.style.unwrap_or(Style::Other);
        Self {
            garment,
            score,
            style,
        }
    }

    pub fn id(&self) -> Uuid {
        self.garment.id()
    }

    pub fn category(&self) -> Category {
        self.garment.category()
    }
}

/// Pairwise compatibility bonus of an outfit, split by factor
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct HarmonyAdjustment {
    pub color: f64,
    pub material: f64,
    pub style: f64,
    pub structural: f64,
    pub total: f64,
}

impl HarmonyAdjustment {
    pub fn new(color: f64, material: f64, style: f64, structural: f64) -> Self {
        Self {
            color,
            material,
            style,
            structural,
            total: color + material + style + structural,
        }
    }
}

/// An outfit: either a top and a bottom or a single dress, plus at most one
/// garment from each optional category.
///
/// Values are immutable; [`OutfitComposition::with_garment`] returns a new
/// composition with its scores recomputed.
#[derive(Debug, Clone, Serialize)]
pub struct OutfitComposition {
    garments: Vec<ScoredGarment>,
    /// Mean weather fit of the member garments
    weather_score: f64,
    harmony: HarmonyAdjustment,
    /// `weather_score + harmony.total`
    score: f64,
    styles: BTreeSet<Style>,
    #[serde(skip)]
    ids: BTreeSet<Uuid>,
}

impl OutfitComposition {
    /// Base outfit from a top and a bottom
    pub fn top_and_bottom(top: ScoredGarment, bottom: ScoredGarment) -> Option<Self> {
        if top.category() != Category::Top || bottom.category() != Category::Bottom {
            return None;
        }
        Some(Self::from_garments(vec![top, bottom]))
    }

    /// Base outfit from a single dress
    pub fn dress(dress: ScoredGarment) -> Option<Self> {
        if dress.category() != Category::Dress {
            return None;
        }
        Some(Self::from_garments(vec![dress]))
    }

    /// Adds one optional-category garment
    ///
    /// Returns `None` for base categories and for categories already present.
    pub fn with_garment(&self, garment: ScoredGarment) -> Option<Self> {
        if garment.category().is_base() || self.has_category(garment.category()) {
            return None;
        }
        let mut garments = self.garments.clone();
        garments.push(garment);
        Some(Self::from_garments(garments))
    }

    fn from_garments(garments: Vec<ScoredGarment>) -> Self {
        let weather_score =
            garments.iter().map(|g| g.score).sum::<f64>() / garments.len().max(1) as f64;
        let harmony = harmony::evaluate(&garments);
        let styles = garments.iter().map(|g| g.style).collect();
        let ids = garments.iter().map(ScoredGarment::id).collect();

        Self {
            garments,
            weather_score,
            harmony,
            score: weather_score + harmony.total,
            styles,
            ids,
        }
    }

    pub fn garments(&self) -> &[ScoredGarment] {
        &self.garments
    }

    pub fn score(&self) -> f64 {
        self.score
    }

    pub fn weather_score(&self) -> f64 {
        self.weather_score
    }

    pub fn harmony(&self) -> HarmonyAdjustment {
        self.harmony
    }

    pub fn styles(&self) -> &BTreeSet<Style> {
        &self.styles
    }

    pub fn has_style(&self, style: Style) -> bool {
        self.styles.contains(&style)
    }

    pub fn has_category(&self, category: Category) -> bool {
        self.garments.iter().any(|g| g.category() == category)
    }

    pub fn ids(&self) -> &BTreeSet<Uuid> {
        &self.ids
    }

    /// Jaccard overlap of the two garment id sets
    pub fn overlap(&self, other: &OutfitComposition) -> f64 {
        let union = self.ids.union(&other.ids).count();
        if union == 0 {
            return 0.0;
        }
        self.ids.intersection(&other.ids).count() as f64 / union as f64
    }

    /// Ranking order: higher score first, ties broken by the sorted id list
    pub fn cmp_rank(&self, other: &OutfitComposition) -> Ordering {
        other
            .score
            .total_cmp(&self.score)
            .then_with(|| self.ids.cmp(&other.ids))
    }

    /// Exactly one of {top + bottom} or {dress}, and no repeated category
    pub fn is_well_formed(&self) -> bool {
        let count = |c: Category| self.garments.iter().filter(|g| g.category() == c).count();
        let pair = count(Category::Top) == 1 && count(Category::Bottom) == 1;
        let dress = count(Category::Dress) == 1;
        let categories: BTreeSet<Category> = self.garments.iter().map(|g| g.category()).collect();

        (pair != dress)
            && !(dress && (count(Category::Top) > 0 || count(Category::Bottom) > 0))
            && categories.len() == self.garments.len()
    }

    /// Short human-readable listing for logs
    pub fn summary(&self) -> String {
        self.garments
            .iter()
            .map(|g| format!("{}({})", g.garment.name(), g.category()))
            .collect::<Vec<_>>()
            .join(", ")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{attr, WardrobeItem};

    fn scored(name: &str, category: Category, score: f64) -> ScoredGarment {
        ScoredGarment::new(
            GarmentCandidate::classify(WardrobeItem::new(name, category)),
            score,
        )
    }

    #[test]
    fn test_base_constructors_check_categories() {
        let top = scored("tee", Category::Top, 50.0);
        let bottom = scored("jeans", Category::Bottom, 52.0);
        let dress = scored("slip dress", Category::Dress, 55.0);

        assert!(OutfitComposition::top_and_bottom(bottom.clone(), top.clone()).is_none());
        assert!(OutfitComposition::dress(top.clone()).is_none());

        let pair = OutfitComposition::top_and_bottom(top, bottom).unwrap();
        assert!(pair.is_well_formed());
        assert_eq!(pair.weather_score(), 51.0);

        let single = OutfitComposition::dress(dress).unwrap();
        assert!(single.is_well_formed());
        assert_eq!(single.weather_score(), 55.0);
        assert_eq!(single.harmony(), HarmonyAdjustment::default());
    }

    #[test]
    fn test_with_garment_returns_new_value() {
        let base = OutfitComposition::top_and_bottom(
            scored("tee", Category::Top, 50.0),
            scored("jeans", Category::Bottom, 50.0),
        )
        .unwrap();

        let extended = base
            .with_garment(scored("sneakers", Category::Shoes, 56.0))
            .unwrap();

        assert_eq!(base.garments().len(), 2);
        assert_eq!(extended.garments().len(), 3);
        assert_eq!(extended.weather_score(), 52.0);
        assert!(extended.is_well_formed());
    }

    #[test]
    fn test_with_garment_rejects_base_and_repeated_categories() {
        let base = OutfitComposition::top_and_bottom(
            scored("tee", Category::Top, 50.0),
            scored("jeans", Category::Bottom, 50.0),
        )
        .unwrap();

        assert!(base
            .with_garment(scored("dress", Category::Dress, 60.0))
            .is_none());
        assert!(base
            .with_garment(scored("second tee", Category::Top, 60.0))
            .is_none());

        let with_hat = base.with_garment(scored("cap", Category::Hat, 50.0)).unwrap();
        assert!(with_hat
            .with_garment(scored("beanie", Category::Hat, 50.0))
            .is_none());
    }

    #[test]
    fn test_overlap_is_jaccard() {
        let top = scored("tee", Category::Top, 50.0);
        let bottom = scored("jeans", Category::Bottom, 50.0);
        let other_bottom = scored("slacks", Category::Bottom, 50.0);

        let a = OutfitComposition::top_and_bottom(top.clone(), bottom).unwrap();
        let b = OutfitComposition::top_and_bottom(top, other_bottom).unwrap();

        // {t, j} vs {t, s}: 1 shared of 3
        assert!((a.overlap(&b) - 1.0 / 3.0).abs() < 1e-9);
        assert_eq!(a.overlap(&a), 1.0);
    }

    #[test]
    fn test_styles_collected_from_garments() {
        let formal_top = ScoredGarment::new(
            GarmentCandidate::classify(
                WardrobeItem::new("oxford shirt", Category::Top)
                    .with_attribute(attr::STYLE, "formal"),
            ),
            50.0,
        );
        let plain_bottom = scored("slacks", Category::Bottom, 50.0);

        let outfit = OutfitComposition::top_and_bottom(formal_top, plain_bottom).unwrap();
        assert!(outfit.has_style(Style::Formal));
        assert!(outfit.has_style(Style::Other));
        assert!(!outfit.has_style(Style::Sporty));
    }

    #[test]
    fn test_cmp_rank_orders_by_score_descending() {
        let low = OutfitComposition::dress(scored("a", Category::Dress, 48.0)).unwrap();
        let high = OutfitComposition::dress(scored("b", Category::Dress, 58.0)).unwrap();
        assert_eq!(high.cmp_rank(&low), Ordering::Less);
        assert_eq!(low.cmp_rank(&high), Ordering::Greater);
        assert_eq!(low.cmp_rank(&low), Ordering::Equal);
    }
}
