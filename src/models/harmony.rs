//! Pairwise compatibility of the garments in one outfit.

use super::{Category, ColorTone, HarmonyAdjustment, Material, ScoredGarment, Style};

const COLOR_MATCH: f64 = 2.0;
const COLOR_CLASH: f64 = -3.0;
const MATERIAL_MATCH: f64 = 3.0;
const MATERIAL_CLASH: f64 = -5.0;
const STYLE_MATCH: f64 = 2.5;
const STYLE_CLASH: f64 = -4.0;
/// An outer worn over shorts
const OUTER_OVER_SHORTS: f64 = -10.0;

const MATERIAL_CLASHES: &[(Material, Material)] = &[
    (Material::Wool, Material::Linen),
    (Material::Leather, Material::Linen),
    (Material::Leather, Material::Fleece),
    (Material::Leather, Material::Poly),
    (Material::Fleece, Material::Linen),
];

const STYLE_CLASHES: &[(Style, Style)] = &[
    (Style::Formal, Style::Street),
    (Style::Formal, Style::Sporty),
    (Style::Classic, Style::Street),
];

/// Neutral goes with every tone; otherwise tones must agree
pub fn tones_harmonize(a: ColorTone, b: ColorTone) -> bool {
    a == ColorTone::Neutral || b == ColorTone::Neutral || a == b
}

pub fn materials_harmonize(a: Material, b: Material) -> bool {
    !MATERIAL_CLASHES
        .iter()
        .any(|&(x, y)| (x == a && y == b) || (x == b && y == a))
}

pub fn styles_harmonize(a: Style, b: Style) -> bool {
    !STYLE_CLASHES
        .iter()
        .any(|&(x, y)| (x == a && y == b) || (x == b && y == a))
}

/// Sums a pairwise compatibility over every unordered pair
///
/// Pairs where either garment lacks the attribute, or carries the
/// unrecognised `other` value, contribute nothing.
fn pairwise<T: Copy + PartialEq>(
    values: &[Option<T>],
    other: T,
    compatible: impl Fn(T, T) -> bool,
    matched: f64,
    clashed: f64,
) -> f64 {
    let known: Vec<T> = values.iter().flatten().copied().filter(|v| *v != other).collect();
    let mut total = 0.0;
    for (i, a) in known.iter().enumerate() {
        for b in &known[i + 1..] {
            total += if compatible(*a, *b) { matched } else { clashed };
        }
    }
    total
}

/// Harmony of an outfit's garment set
pub fn evaluate(garments: &[ScoredGarment]) -> HarmonyAdjustment {
    let colors: Vec<_> = garments.iter().map(|g| g.garment.color.map(|c| c.tone)).collect();
    let materials: Vec<_> = garments.iter().map(|g| g.garment.material).collect();
    let styles: Vec<_> = garments.iter().map(|g| g.garment.style).collect();

    let color = pairwise(
        &colors,
        ColorTone::Other,
        tones_harmonize,
        COLOR_MATCH,
        COLOR_CLASH,
    );
    let material = pairwise(
        &materials,
        Material::Other,
        materials_harmonize,
        MATERIAL_MATCH,
        MATERIAL_CLASH,
    );
    let style = pairwise(
        &styles,
        Style::Other,
        styles_harmonize,
        STYLE_MATCH,
        STYLE_CLASH,
    );

    let has_outer = garments.iter().any(|g| g.category() == Category::Outer);
    let has_shorts = garments.iter().any(|g| g.garment.is_shorts());
    let structural = if has_outer && has_shorts {
        OUTER_OVER_SHORTS
    } else {
        0.0
    };

    HarmonyAdjustment::new(color, material, style, structural)
}
