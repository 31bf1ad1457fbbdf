use serde::{Deserialize, Serialize};
use std::{collections::HashMap, fmt::Display};
use uuid::Uuid;

pub mod apparent_temperature;
pub mod harmony;
pub mod kinds;
pub mod outfit;
pub mod season;
pub mod weather;

pub use kinds::{AdvisoryItem, Color, ColorTone, GarmentKind, Material, Style};
pub use outfit::{HarmonyAdjustment, OutfitComposition, ScoredGarment};
pub use season::{Season, SeasonTag};
pub use weather::{ForecastReport, PrecipitationType, Sensitivity, WeatherContext, WindLevel};

/// Attribute keys understood by the recommendation core
pub mod attr {
    pub const SEASON: &str = "season";
    pub const COLOR: &str = "color";
    pub const MATERIAL: &str = "material";
    pub const STYLE: &str = "style";
    pub const LENGTH: &str = "length";
    pub const TOP_TYPE: &str = "top_type";
    pub const BOTTOM_TYPE: &str = "bottom_type";
    pub const OUTER_TYPE: &str = "outer_type";
    pub const SHOES_TYPE: &str = "shoes_type";
    pub const ITEM_TYPE: &str = "item_type";
}

/// Wardrobe category of a garment
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Category {
    Top,
    Bottom,
    Dress,
    Outer,
    Underwear,
    Accessory,
    Shoes,
    Socks,
    Hat,
    Bag,
    Scarf,
    Etc,
}

impl Category {
    /// Categories that make up the mandatory base of an outfit
    pub fn is_base(self) -> bool {
        matches!(self, Category::Top | Category::Bottom | Category::Dress)
    }

    /// Attribute holding the free text that decides the garment's kind
    pub fn kind_attribute(self) -> Option<&'static str> {
        match self {
            Category::Top => Some(attr::TOP_TYPE),
            Category::Bottom => Some(attr::BOTTOM_TYPE),
            Category::Outer => Some(attr::OUTER_TYPE),
            Category::Shoes => Some(attr::SHOES_TYPE),
            Category::Etc => Some(attr::ITEM_TYPE),
            _ => None,
        }
    }
}

impl Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Category::Top => "TOP",
            Category::Bottom => "BOTTOM",
            Category::Dress => "DRESS",
            Category::Outer => "OUTER",
            Category::Underwear => "UNDERWEAR",
            Category::Accessory => "ACCESSORY",
            Category::Shoes => "SHOES",
            Category::Socks => "SOCKS",
            Category::Hat => "HAT",
            Category::Bag => "BAG",
            Category::Scarf => "SCARF",
            Category::Etc => "ETC",
        };
        write!(f, "{}", name)
    }
}

/// A garment as returned by the wardrobe query, before any classification
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct WardrobeItem {
    pub id: Uuid,
    pub name: String,
    pub category: Category,
    #[serde(default)]
    pub attributes: HashMap<String, String>,
}

impl WardrobeItem {
    /// Creates a wardrobe item with a fresh id and no attributes
    pub fn new(name: impl Into<String>, category: Category) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            category,
            attributes: HashMap::new(),
        }
    }

    /// Builder-style attribute setter
    pub fn with_attribute(mut self, key: &str, value: impl Into<String>) -> Self {
        self.attributes.insert(key.to_string(), value.into());
        self
    }

    /// Returns a non-blank attribute value
    pub fn attribute(&self, key: &str) -> Option<&str> {
        self.attributes
            .get(key)
            .map(|v| v.trim())
            .filter(|v| !v.is_empty())
    }
}

/// Wardrobe garment that passed the season filter, with its derived classifications
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct GarmentCandidate {
    pub item: WardrobeItem,
    pub kind: GarmentKind,
    /// `None` when the garment has no material attribute
    pub material: Option<Material>,
    /// `None` when the garment has no color attribute
    pub color: Option<Color>,
    /// `None` when the garment has no style attribute
    pub style: Option<Style>,
    pub advisory: Option<AdvisoryItem>,
}

impl GarmentCandidate {
    /// Classifies a wardrobe item
    ///
    /// Kind text comes from the category's type attribute, falling back to the
    /// garment name when that attribute is blank.
    pub fn classify(item: WardrobeItem) -> Self {
        let kind_text = item
            .category
            .kind_attribute()
            .and_then(|key| item.attribute(key))
            .unwrap_or(item.name.as_str())
            .to_string();

        let kind = GarmentKind::classify(item.category, &kind_text);
        let advisory = match item.category {
            Category::Etc => AdvisoryItem::classify(&kind_text),
            _ => None,
        };
        let material = item.attribute(attr::MATERIAL).map(Material::classify);
        let color = item.attribute(attr::COLOR).map(Color::classify);
        let style = item.attribute(attr::STYLE).map(Style::classify);

        Self {
            item,
            kind,
            material,
            color,
            style,
            advisory,
        }
    }

    pub fn id(&self) -> Uuid {
        self.item.id
    }

    pub fn category(&self) -> Category {
        self.item.category
    }

    pub fn name(&self) -> &str {
        &self.item.name
    }

    pub fn attribute(&self, key: &str) -> Option<&str> {
        self.item.attribute(key)
    }

    /// Whether this is a bottom cut at shorts length
    ///
    /// The length attribute decides; without one the bottom kind does.
    pub fn is_shorts(&self) -> bool {
        if self.category() != Category::Bottom {
            return false;
        }
        match self.attribute(attr::LENGTH) {
            Some(length) => {
                let length = length.to_lowercase();
                length.contains("short") || length.contains("반바지")
            }
            None => self.kind == GarmentKind::Bottom(kinds::BottomKind::Shorts),
        }
    }
}

/// Boolean "carry this today" flags, independent of outfit assembly
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct CarryAdvice {
    pub umbrella: bool,
    pub sunshade: bool,
    pub fan: bool,
    pub handkerchief: bool,
    pub gloves: bool,
}

impl CarryAdvice {
    pub fn includes(&self, item: AdvisoryItem) -> bool {
        match item {
            AdvisoryItem::Umbrella => self.umbrella,
            AdvisoryItem::Sunshade => self.sunshade,
            AdvisoryItem::Fan => self.fan,
            AdvisoryItem::Handkerchief => self.handkerchief,
            AdvisoryItem::Gloves => self.gloves,
        }
    }
}

/// Ranked outfits plus carry advice for one request
#[derive(Debug, Clone, Serialize)]
pub struct RecommendationResponse {
    pub outfits: Vec<OutfitComposition>,
    pub advice: CarryAdvice,
    /// Wardrobe items matching an advised carry item
    pub carry_items: Vec<Uuid>,
}
