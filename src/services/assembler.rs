use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::collections::BTreeMap;

use crate::models::{Category, OutfitComposition, ScoredGarment, Style};

/// Top + bottom bases kept per round
pub const TOP_BOTTOM_CAP: usize = 10;
/// Dress bases kept per round
pub const DRESS_CAP: usize = 5;
/// Outfits returned after merging both branches
pub const OUTPUT_CAP: usize = 15;
/// An optional garment must raise the outfit score by more than this
pub const MIN_GAIN: f64 = 0.2;
/// Jaccard overlap at which two outfits count as near-duplicates
pub const DUPLICATE_OVERLAP: f64 = 0.5;
/// Near-duplicates closer than this in score are settled by the tie-breaker
pub const TIE_GAP: f64 = 0.2;

/// Optional categories, in extension order
pub const EXTENSION_ORDER: [Category; 8] = [
    Category::Outer,
    Category::Shoes,
    Category::Hat,
    Category::Scarf,
    Category::Bag,
    Category::Accessory,
    Category::Socks,
    Category::Underwear,
];

/// Decides near-duplicate ties during assembly
pub trait TieBreaker {
    /// Whether the newcomer replaces the outfit already kept
    fn replace_on_tie(&mut self) -> bool;
}

/// Fair coin backed by a request-local rng
pub struct RandomTieBreaker {
    rng: StdRng,
}

impl RandomTieBreaker {
    pub fn new() -> Self {
        Self {
            rng: StdRng::from_entropy(),
        }
    }

    /// Reproducible coin for a fixed seed
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl Default for RandomTieBreaker {
    fn default() -> Self {
        Self::new()
    }
}

impl TieBreaker for RandomTieBreaker {
    fn replace_on_tie(&mut self) -> bool {
        self.rng.gen_bool(0.5)
    }
}

/// Newcomer always wins a tie
#[derive(Debug, Default, Clone, Copy)]
pub struct AlwaysReplace;

impl TieBreaker for AlwaysReplace {
    fn replace_on_tie(&mut self) -> bool {
        true
    }
}

/// Incumbent always wins a tie
#[derive(Debug, Default, Clone, Copy)]
pub struct NeverReplace;

impl TieBreaker for NeverReplace {
    fn replace_on_tie(&mut self) -> bool {
        false
    }
}

/// Trials kept per base for an optional category
pub fn beam_width(category: Category) -> usize {
    match category {
        Category::Outer | Category::Shoes => 3,
        Category::Accessory | Category::Hat | Category::Bag | Category::Scarf | Category::Socks => 1,
        _ => 2,
    }
}

/// Hard compatibility rules, checked before a trial is scored
pub fn is_mismatch(base: &OutfitComposition, candidate: &ScoredGarment) -> bool {
    let category = candidate.category();

    let formal_base_accessory = base.has_style(Style::Formal)
        && matches!(category, Category::Hat | Category::Scarf | Category::Accessory);
    let formal_outer_on_casual_base = (base.has_style(Style::Sporty)
        || base.has_style(Style::Street))
        && category == Category::Outer
        && candidate.style == Style::Formal;
    let hat_with_dress = base.has_category(Category::Dress) && category == Category::Hat;
    let outer_over_shorts = category == Category::Outer
        && base.garments().iter().any(|g| g.garment.is_shorts());

    formal_base_accessory || formal_outer_on_casual_base || hat_with_dress || outer_over_shorts
}

/// Adds an outfit to a round, suppressing near-duplicates
///
/// The newcomer must beat every kept outfit it overlaps with; it then evicts
/// all of them. Losing to any one drops the newcomer.
fn insert_deduplicated(
    round: &mut Vec<OutfitComposition>,
    entry: OutfitComposition,
    tie_breaker: &mut dyn TieBreaker,
) {
    let mut evicted = Vec::new();
    for (index, kept) in round.iter().enumerate() {
        if entry.overlap(kept) < DUPLICATE_OVERLAP {
            continue;
        }
        let gap = entry.score() - kept.score();
        let wins = if gap.abs() < TIE_GAP {
            tie_breaker.replace_on_tie()
        } else {
            gap > 0.0
        };
        if !wins {
            tracing::trace!(
                dropped = %entry.summary(),
                kept = %kept.summary(),
                gap,
                "Near-duplicate outfit dropped"
            );
            return;
        }
        evicted.push(index);
    }

    for index in evicted.into_iter().rev() {
        let replaced = round.remove(index);
        tracing::trace!(
            replaced = %replaced.summary(),
            by = %entry.summary(),
            "Near-duplicate outfit replaced"
        );
    }
    round.push(entry);
}

fn rank(outfits: &mut Vec<OutfitComposition>, cap: usize) {
    outfits.sort_by(|a, b| a.cmp_rank(b));
    outfits.truncate(cap);
}

/// Beam search over the retained garments
pub struct OutfitAssembler<'a> {
    garments: &'a BTreeMap<Category, Vec<ScoredGarment>>,
    tie_breaker: &'a mut dyn TieBreaker,
}

impl<'a> OutfitAssembler<'a> {
    pub fn new(
        garments: &'a BTreeMap<Category, Vec<ScoredGarment>>,
        tie_breaker: &'a mut dyn TieBreaker,
    ) -> Self {
        Self {
            garments,
            tie_breaker,
        }
    }

    fn candidates(&self, category: Category) -> &'a [ScoredGarment] {
        self.garments
            .get(&category)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    /// Every top + bottom pair, best first
    fn top_bottom_bases(&self) -> Vec<OutfitComposition> {
        let bottoms = self.candidates(Category::Bottom);
        let mut bases: Vec<OutfitComposition> = self
            .candidates(Category::Top)
            .iter()
            .flat_map(|top| {
                bottoms.iter().filter_map(move |bottom| {
                    OutfitComposition::top_and_bottom(top.clone(), bottom.clone())
                })
            })
            .collect();
        rank(&mut bases, TOP_BOTTOM_CAP);
        bases
    }

    fn dress_bases(&self) -> Vec<OutfitComposition> {
        let mut bases: Vec<OutfitComposition> = self
            .candidates(Category::Dress)
            .iter()
            .filter_map(|dress| OutfitComposition::dress(dress.clone()))
            .collect();
        rank(&mut bases, DRESS_CAP);
        bases
    }

    /// One extension round for one category
    fn extend(
        &mut self,
        bases: Vec<OutfitComposition>,
        category: Category,
        cap: usize,
    ) -> Vec<OutfitComposition> {
        let candidates = self.candidates(category);
        let width = beam_width(category).min(candidates.len());
        let incoming = bases.len();
        let mut round = Vec::new();

        for base in bases {
            let mut accepted: Vec<OutfitComposition> = candidates
                .iter()
                .filter(|candidate| !is_mismatch(&base, candidate))
                .filter_map(|candidate| base.with_garment(candidate.clone()))
                .filter(|trial| trial.score() - base.score() > MIN_GAIN)
                .collect();
            rank(&mut accepted, width);

            if accepted.is_empty() {
                insert_deduplicated(&mut round, base, self.tie_breaker);
            } else {
                for trial in accepted {
                    insert_deduplicated(&mut round, trial, self.tie_breaker);
                }
            }
        }

        rank(&mut round, cap);
        tracing::debug!(
            category = %category,
            candidates = candidates.len(),
            incoming,
            outgoing = round.len(),
            "Extension round complete"
        );
        round
    }

    fn grow(&mut self, mut outfits: Vec<OutfitComposition>, cap: usize) -> Vec<OutfitComposition> {
        for category in EXTENSION_ORDER {
            if outfits.is_empty() {
                break;
            }
            outfits = self.extend(outfits, category, cap);
        }
        outfits
    }

    /// Ranked outfits, at most [`OUTPUT_CAP`]
    pub fn assemble(mut self) -> Vec<OutfitComposition> {
        let top_bottom = self.top_bottom_bases();
        let dresses = self.dress_bases();
        tracing::debug!(
            top_bottom_bases = top_bottom.len(),
            dress_bases = dresses.len(),
            "Base outfits generated"
        );

        let mut outfits = self.grow(top_bottom, TOP_BOTTOM_CAP);
        outfits.extend(self.grow(dresses, DRESS_CAP));
        rank(&mut outfits, OUTPUT_CAP);
        outfits
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{attr, GarmentCandidate, WardrobeItem};

    fn scored(name: &str, category: Category, score: f64) -> ScoredGarment {
        ScoredGarment::new(
            GarmentCandidate::classify(WardrobeItem::new(name, category)),
            score,
        )
    }

    fn styled(name: &str, category: Category, style: &str, score: f64) -> ScoredGarment {
        ScoredGarment::new(
            GarmentCandidate::classify(
                WardrobeItem::new(name, category).with_attribute(attr::STYLE, style),
            ),
            score,
        )
    }

    fn wardrobe(garments: Vec<ScoredGarment>) -> BTreeMap<Category, Vec<ScoredGarment>> {
        let mut map: BTreeMap<Category, Vec<ScoredGarment>> = BTreeMap::new();
        for g in garments {
            map.entry(g.category()).or_default().push(g);
        }
        map
    }

    fn assemble(garments: &BTreeMap<Category, Vec<ScoredGarment>>) -> Vec<OutfitComposition> {
        let mut coin = RandomTieBreaker::seeded(7);
        OutfitAssembler::new(garments, &mut coin).assemble()
    }

    #[test]
    fn test_beam_widths() {
        assert_eq!(beam_width(Category::Outer), 3);
        assert_eq!(beam_width(Category::Shoes), 3);
        assert_eq!(beam_width(Category::Hat), 1);
        assert_eq!(beam_width(Category::Socks), 1);
        assert_eq!(beam_width(Category::Underwear), 2);
    }

    #[test]
    fn test_empty_wardrobe_yields_nothing() {
        assert!(assemble(&BTreeMap::new()).is_empty());

        // tops without bottoms form no base
        let tops_only = wardrobe(vec![scored("tee", Category::Top, 55.0)]);
        assert!(assemble(&tops_only).is_empty());
    }

    #[test]
    fn test_base_caps_and_output_bound() {
        let mut garments = Vec::new();
        for i in 0..5 {
            garments.push(scored(&format!("top {}", i), Category::Top, 50.0 + i as f64));
            garments.push(scored(&format!("bottom {}", i), Category::Bottom, 50.0 + i as f64));
        }
        for i in 0..7 {
            garments.push(scored(&format!("dress {}", i), Category::Dress, 50.0 + i as f64));
        }

        let outfits = assemble(&wardrobe(garments));
        let dresses = outfits
            .iter()
            .filter(|o| o.has_category(Category::Dress))
            .count();

        assert_eq!(outfits.len(), OUTPUT_CAP);
        assert_eq!(dresses, DRESS_CAP);
        assert!(outfits.iter().all(OutfitComposition::is_well_formed));
        assert!(outfits.windows(2).all(|w| w[0].score() >= w[1].score()));
        // best pair and best dress survive
        assert_eq!(outfits[0].score(), 56.0);
        assert_eq!(outfits[0].garments()[0].garment.name(), "dress 6");
    }

    #[test]
    fn test_optional_garment_needs_more_than_min_gain() {
        let weak_hat = wardrobe(vec![
            scored("tee", Category::Top, 50.0),
            scored("jeans", Category::Bottom, 50.0),
            scored("cap", Category::Hat, 50.5),
        ]);
        let outfits = assemble(&weak_hat);
        assert_eq!(outfits.len(), 1);
        assert!(!outfits[0].has_category(Category::Hat));

        let strong_hat = wardrobe(vec![
            scored("tee", Category::Top, 50.0),
            scored("jeans", Category::Bottom, 50.0),
            scored("beanie", Category::Hat, 53.0),
        ]);
        let outfits = assemble(&strong_hat);
        assert_eq!(outfits.len(), 1);
        assert!(outfits[0].has_category(Category::Hat));
        assert_eq!(outfits[0].score(), 51.0);
    }

    #[test]
    fn test_formal_base_rejects_hat_scarf_accessory() {
        let garments = wardrobe(vec![
            styled("oxford shirt", Category::Top, "formal", 50.0),
            scored("slacks", Category::Bottom, 50.0),
            scored("fedora", Category::Hat, 60.0),
            scored("silk scarf", Category::Scarf, 60.0),
            scored("watch", Category::Accessory, 60.0),
            scored("tote", Category::Bag, 60.0),
        ]);
        let outfits = assemble(&garments);
        assert_eq!(outfits.len(), 1);
        let outfit = &outfits[0];
        assert!(!outfit.has_category(Category::Hat));
        assert!(!outfit.has_category(Category::Scarf));
        assert!(!outfit.has_category(Category::Accessory));
        assert!(outfit.has_category(Category::Bag));
    }

    #[test]
    fn test_sporty_base_rejects_formal_outer() {
        let base = OutfitComposition::top_and_bottom(
            styled("track top", Category::Top, "sporty", 50.0),
            scored("joggers", Category::Bottom, 50.0),
        )
        .unwrap();

        let blazer = styled("blazer", Category::Outer, "formal", 60.0);
        let windbreaker = styled("jacket", Category::Outer, "sporty", 60.0);
        assert!(is_mismatch(&base, &blazer));
        assert!(!is_mismatch(&base, &windbreaker));
    }

    #[test]
    fn test_street_base_rejects_formal_outer() {
        let tee = styled("graphic tee", Category::Top, "street", 50.0);
        let jeans = scored("wide jeans", Category::Bottom, 50.0);
        let base = OutfitComposition::top_and_bottom(tee.clone(), jeans.clone()).unwrap();

        let blazer = styled("blazer", Category::Outer, "formal", 60.0);
        assert!(is_mismatch(&base, &blazer));
        assert!(!is_mismatch(&base, &styled("jacket", Category::Outer, "casual", 60.0)));
        assert!(!is_mismatch(&base, &styled("jacket", Category::Outer, "street", 60.0)));
        assert!(!is_mismatch(&base, &scored("jacket", Category::Outer, 60.0)));

        let outfits = assemble(&wardrobe(vec![tee, jeans, blazer]));
        assert_eq!(outfits.len(), 1);
        assert!(!outfits[0].has_category(Category::Outer));
    }

    #[test]
    fn test_dress_base_rejects_hat() {
        let base = OutfitComposition::dress(scored("midi dress", Category::Dress, 50.0)).unwrap();
        assert!(is_mismatch(&base, &scored("beret", Category::Hat, 60.0)));
        assert!(!is_mismatch(&base, &scored("clutch", Category::Bag, 60.0)));
    }

    #[test]
    fn test_shorts_base_rejects_outer() {
        let garments = wardrobe(vec![
            scored("tee", Category::Top, 50.0),
            scored("cargo shorts", Category::Bottom, 50.0),
            scored("padding", Category::Outer, 60.0),
        ]);
        let outfits = assemble(&garments);
        assert_eq!(outfits.len(), 1);
        assert!(!outfits[0].has_category(Category::Outer));
    }

    #[test]
    fn test_beam_width_limits_trials_per_base() {
        let mut garments = vec![scored("slip dress", Category::Dress, 50.0)];
        for i in 0..5 {
            garments.push(scored(&format!("shoes {}", i), Category::Shoes, 55.0 + i as f64));
        }
        let outfits = assemble(&wardrobe(garments));

        // {dress, shoe a} vs {dress, shoe b} overlap 1/3, so all three survive
        assert_eq!(outfits.len(), 3);
        let shoe_names: Vec<_> = outfits
            .iter()
            .map(|o| o.garments()[1].garment.name().to_string())
            .collect();
        assert_eq!(shoe_names, vec!["shoes 4", "shoes 3", "shoes 2"]);
    }

    fn hat_outfits(first_hat: f64, second_hat: f64) -> (OutfitComposition, OutfitComposition) {
        let base = OutfitComposition::top_and_bottom(
            scored("tee", Category::Top, 50.0),
            scored("jeans", Category::Bottom, 50.0),
        )
        .unwrap();
        (
            base.with_garment(scored("cap", Category::Hat, first_hat)).unwrap(),
            base.with_garment(scored("beanie", Category::Hat, second_hat)).unwrap(),
        )
    }

    #[test]
    fn test_close_duplicates_follow_the_tie_breaker() {
        // overlap 2/4, score gap 0.1
        let (kept, newcomer) = hat_outfits(50.0, 50.3);
        assert!(kept.overlap(&newcomer) >= DUPLICATE_OVERLAP);

        let mut round = vec![kept.clone()];
        insert_deduplicated(&mut round, newcomer.clone(), &mut NeverReplace);
        assert_eq!(round.len(), 1);
        assert_eq!(round[0].ids(), kept.ids());

        let mut round = vec![kept];
        insert_deduplicated(&mut round, newcomer.clone(), &mut AlwaysReplace);
        assert_eq!(round.len(), 1);
        assert_eq!(round[0].ids(), newcomer.ids());
    }

    #[test]
    fn test_distant_duplicates_keep_the_higher_score() {
        let (low, high) = hat_outfits(50.0, 53.0);

        let mut round = vec![low.clone()];
        insert_deduplicated(&mut round, high.clone(), &mut NeverReplace);
        assert_eq!(round[0].ids(), high.ids());

        let mut round = vec![high.clone()];
        insert_deduplicated(&mut round, low, &mut AlwaysReplace);
        assert_eq!(round.len(), 1);
        assert_eq!(round[0].ids(), high.ids());
    }

    #[test]
    fn test_distinct_outfits_are_both_kept() {
        let a = OutfitComposition::dress(scored("a", Category::Dress, 50.0)).unwrap();
        let b = OutfitComposition::dress(scored("b", Category::Dress, 50.0)).unwrap();
        let mut round = vec![a];
        insert_deduplicated(&mut round, b, &mut NeverReplace);
        assert_eq!(round.len(), 2);
    }

    #[test]
    fn test_seeded_tie_breaker_is_reproducible() {
        let mut first = RandomTieBreaker::seeded(42);
        let mut second = RandomTieBreaker::seeded(42);
        let a: Vec<bool> = (0..32).map(|_| first.replace_on_tie()).collect();
        let b: Vec<bool> = (0..32).map(|_| second.replace_on_tie()).collect();
        assert_eq!(a, b);
    }
}
