//! Keyword tables that turn free-text garment attributes into typed kinds.
//!
//! Every table is ordered: the first entry with a keyword contained in the
//! (lower-cased) text wins, and text matching nothing falls into the catch-all.
//! Keywords are stored lower-case.

use serde::Serialize;

use super::Category;

/// First-match resolver shared by all keyword tables
fn first_match<K: Copy>(table: &[(K, &[&str])], text: &str) -> Option<K> {
    let haystack = text.to_lowercase();
    table
        .iter()
        .find(|(_, keywords)| keywords.iter().any(|k| haystack.contains(k)))
        .map(|(kind, _)| *kind)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TopKind {
    Sleeveless,
    ShortSleeve,
    Knit,
    Hoodie,
    Sweatshirt,
    TShirt,
    Blouse,
    Shirt,
}

const TOP_KINDS: &[(TopKind, &[&str])] = &[
    (TopKind::Sleeveless, &["sleeveless", "tank", "민소매", "나시"]),
    (TopKind::ShortSleeve, &["short sleeve", "short-sleeve", "half sleeve", "반팔", "반소매"]),
    (TopKind::Knit, &["knit", "sweater", "니트", "스웨터"]),
    (TopKind::Hoodie, &["hood", "후드", "후디"]),
    (TopKind::Sweatshirt, &["sweat", "맨투맨", "스웨트", "스웻"]),
    (TopKind::TShirt, &["t-shirt", "tshirt", "tee", "티셔츠", "긴팔티"]),
    (TopKind::Blouse, &["blouse", "블라우스"]),
    (TopKind::Shirt, &["shirt", "셔츠", "남방"]),
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum BottomKind {
    Shorts,
    Skirt,
    Jogger,
    Jeans,
    Slacks,
    WidePants,
    CottonPants,
}

const BOTTOM_KINDS: &[(BottomKind, &[&str])] = &[
    (BottomKind::Shorts, &["short", "반바지", "숏", "쇼츠"]),
    (BottomKind::Skirt, &["skirt", "스커트", "치마"]),
    (BottomKind::Jogger, &["jogger", "training", "track", "sweatpants", "조거", "트레이닝", "트랙"]),
    (BottomKind::Jeans, &["jean", "denim", "데님", "청바지"]),
    (BottomKind::Slacks, &["slacks", "슬랙스"]),
    (BottomKind::WidePants, &["wide", "와이드"]),
    (BottomKind::CottonPants, &["cotton", "chino", "코튼", "치노"]),
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum OuterKind {
    TrenchCoat,
    Blazer,
    Cardigan,
    Padding,
    FurMustang,
    HoodZipup,
    Coat,
    Jumper,
    Jacket,
}

const OUTER_KINDS: &[(OuterKind, &[&str])] = &[
    (OuterKind::TrenchCoat, &["trench", "트렌치"]),
    (OuterKind::Blazer, &["blazer", "suit", "블레이저", "정장", "수트"]),
    (OuterKind::Cardigan, &["cardigan", "카디건", "가디건"]),
    (OuterKind::Padding, &["padding", "puffer", "down", "패딩", "다운"]),
    (OuterKind::FurMustang, &["mustang", "fleece", "shearling", "무스탕", "뽀글이", "플리스"]),
    (OuterKind::HoodZipup, &["zip-up", "zipup", "anorak", "후드집업", "아노락"]),
    (OuterKind::Coat, &["coat", "코트"]),
    (OuterKind::Jumper, &["jumper", "parka", "field", "점퍼", "야상", "파카"]),
    (OuterKind::Jacket, &["jacket", "blouson", "자켓", "재킷", "블루종"]),
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ShoesKind {
    RainBoots,
    Boots,
    Sandals,
    Sneakers,
    Loafers,
    Heels,
}

const SHOES_KINDS: &[(ShoesKind, &[&str])] = &[
    (ShoesKind::RainBoots, &["rain boot", "rainboot", "wellington", "장화", "레인부츠"]),
    (ShoesKind::Boots, &["boot", "부츠", "워커"]),
    (ShoesKind::Sandals, &["sandal", "slipper", "crocs", "샌들", "슬리퍼"]),
    (ShoesKind::Sneakers, &["sneaker", "trainer", "runner", "운동화", "스니커즈"]),
    (ShoesKind::Loafers, &["loafer", "로퍼"]),
    (ShoesKind::Heels, &["heel", "pump", "힐", "구두"]),
];

/// Category-specific kind of a garment
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(tag = "group", content = "kind", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum GarmentKind {
    Top(TopKind),
    Bottom(BottomKind),
    Outer(OuterKind),
    Shoes(ShoesKind),
    /// Catch-all, contributes nothing to weather fit
    Other,
}

impl GarmentKind {
    pub fn classify(category: Category, text: &str) -> Self {
        let kind = match category {
            Category::Top => first_match(TOP_KINDS, text).map(GarmentKind::Top),
            Category::Bottom => first_match(BOTTOM_KINDS, text).map(GarmentKind::Bottom),
            Category::Outer => first_match(OUTER_KINDS, text).map(GarmentKind::Outer),
            Category::Shoes => first_match(SHOES_KINDS, text).map(GarmentKind::Shoes),
            _ => None,
        };
        kind.unwrap_or(GarmentKind::Other)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Material {
    Cotton,
    Linen,
    Wool,
    Poly,
    Nylon,
    Rayon,
    Fleece,
    Knit,
    Leather,
    Denim,
    Other,
}

const MATERIALS: &[(Material, &[&str])] = &[
    (Material::Cotton, &["cotton", "코튼", "면"]),
    (Material::Linen, &["linen", "린넨"]),
    (Material::Wool, &["wool", "cashmere", "울", "캐시미어"]),
    (Material::Poly, &["poly", "폴리"]),
    (Material::Nylon, &["nylon", "나일론"]),
    (Material::Rayon, &["rayon", "레이온"]),
    (Material::Fleece, &["fleece", "기모"]),
    (Material::Knit, &["knit", "니트"]),
    (Material::Leather, &["leather", "가죽", "레더"]),
    (Material::Denim, &["denim", "데님"]),
];

impl Material {
    pub fn classify(text: &str) -> Self {
        first_match(MATERIALS, text).unwrap_or(Material::Other)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ColorTone {
    Warm,
    Cool,
    Neutral,
    Other,
}

const COLOR_TONES: &[(ColorTone, &[&str])] = &[
    (
        ColorTone::Neutral,
        &[
            "black", "white", "gray", "grey", "silver", "블랙", "화이트", "그레이", "실버", "검정",
            "흰색", "회색", "은색",
        ],
    ),
    (
        ColorTone::Cool,
        &[
            "navy", "sky", "blue", "mint", "lavender", "green", "purple", "네이비", "하늘", "블루",
            "민트", "라벤더", "그린", "퍼플", "파랑", "초록", "보라",
        ],
    ),
    (
        ColorTone::Warm,
        &[
            "orange", "khaki", "wine", "burgundy", "gold", "brown", "pink", "red", "beige",
            "yellow", "오렌지", "카키", "와인", "버건디", "골드", "브라운", "핑크", "레드", "베이지",
            "옐로우", "갈색", "분홍", "빨강", "노랑",
        ],
    ),
];

impl ColorTone {
    pub fn classify(text: &str) -> Self {
        first_match(COLOR_TONES, text).unwrap_or(ColorTone::Other)
    }
}

/// Light shades that read well in sunshine and show every raindrop
const BRIGHT_COLORS: &[&str] = &[
    "white", "beige", "sky", "silver", "pink", "yellow", "화이트", "흰색", "베이지", "하늘",
    "실버", "은색", "핑크", "분홍", "옐로우", "노랑",
];

/// A classified color attribute
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Color {
    pub tone: ColorTone,
    pub bright: bool,
}

impl Color {
    pub fn classify(text: &str) -> Self {
        let haystack = text.to_lowercase();
        Self {
            tone: ColorTone::classify(&haystack),
            bright: BRIGHT_COLORS.iter().any(|k| haystack.contains(k)),
        }
    }
}

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize,
)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Style {
    Casual,
    Formal,
    Street,
    Sporty,
    Classic,
    Other,
}

const STYLES: &[(Style, &[&str])] = &[
    (Style::Casual, &["casual", "캐주얼"]),
    (Style::Formal, &["formal", "포멀", "정장"]),
    (Style::Street, &["street", "스트릿"]),
    (Style::Sporty, &["sport", "athletic", "스포티"]),
    (Style::Classic, &["classic", "클래식"]),
];

impl Style {
    pub fn classify(text: &str) -> Self {
        first_match(STYLES, text).unwrap_or(Style::Other)
    }
}

/// Non-wearable item worth carrying, never part of an outfit
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AdvisoryItem {
    Umbrella,
    Sunshade,
    Fan,
    Handkerchief,
    Gloves,
}

const ADVISORY_ITEMS: &[(AdvisoryItem, &[&str])] = &[
    (AdvisoryItem::Sunshade, &["sunshade", "parasol", "양산"]),
    (AdvisoryItem::Umbrella, &["umbrella", "raincoat", "우산", "레인코트"]),
    (AdvisoryItem::Fan, &["handy fan", "handyfan", "fan", "부채", "휴대용선풍기"]),
    (AdvisoryItem::Handkerchief, &["handkerchief", "손수건", "땀수건"]),
    (AdvisoryItem::Gloves, &["glove", "mitten", "장갑"]),
];

impl AdvisoryItem {
    /// `None` when the text names no advisory item
    pub fn classify(text: &str) -> Option<Self> {
        first_match(ADVISORY_ITEMS, text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_match_wins_over_later_entries() {
        // "sweatshirt" also contains "tshirt" and "shirt"; the earlier entry must win
        assert_eq!(
            GarmentKind::classify(Category::Top, "Grey SweatShirt"),
            GarmentKind::Top(TopKind::Sweatshirt)
        );
        assert_eq!(
            GarmentKind::classify(Category::Top, "striped T-Shirt"),
            GarmentKind::Top(TopKind::TShirt)
        );
        assert_eq!(
            GarmentKind::classify(Category::Outer, "Beige trench coat"),
            GarmentKind::Outer(OuterKind::TrenchCoat)
        );
        assert_eq!(
            GarmentKind::classify(Category::Shoes, "Rain boots"),
            GarmentKind::Shoes(ShoesKind::RainBoots)
        );
    }

    #[test]
    fn test_korean_keywords() {
        assert_eq!(
            GarmentKind::classify(Category::Bottom, "흑청 청바지"),
            GarmentKind::Bottom(BottomKind::Jeans)
        );
        assert_eq!(
            GarmentKind::classify(Category::Outer, "롱패딩"),
            GarmentKind::Outer(OuterKind::Padding)
        );
    }

    #[test]
    fn test_unmatched_text_is_catch_all() {
        assert_eq!(
            GarmentKind::classify(Category::Top, "mystery garment"),
            GarmentKind::Other
        );
        assert_eq!(Material::classify("unobtainium"), Material::Other);
        assert_eq!(ColorTone::classify("chartreuse-ish"), ColorTone::Other);
        assert_eq!(Style::classify("avant-garde"), Style::Other);
        assert_eq!(AdvisoryItem::classify("keychain"), None);
    }

    #[test]
    fn test_categories_without_kind_table() {
        assert_eq!(
            GarmentKind::classify(Category::Hat, "wool beanie"),
            GarmentKind::Other
        );
        assert_eq!(
            GarmentKind::classify(Category::Dress, "summer t-shirt dress"),
            GarmentKind::Other
        );
    }

    #[test]
    fn test_color_tones() {
        assert_eq!(ColorTone::classify("Navy"), ColorTone::Cool);
        assert_eq!(ColorTone::classify("Burgundy"), ColorTone::Warm);
        assert_eq!(ColorTone::classify("off white"), ColorTone::Neutral);
        assert_eq!(ColorTone::classify("베이지"), ColorTone::Warm);
    }

    #[test]
    fn test_bright_colors() {
        let sky = Color::classify("Sky Blue");
        assert_eq!(sky.tone, ColorTone::Cool);
        assert!(sky.bright);
        assert!(Color::classify("off white").bright);
        assert!(Color::classify("노랑").bright);
        assert!(!Color::classify("navy").bright);
        assert!(!Color::classify("chartreuse-ish").bright);
    }

    #[test]
    fn test_materials_and_styles() {
        assert_eq!(Material::classify("100% Cotton"), Material::Cotton);
        assert_eq!(Material::classify("Polyester blend"), Material::Poly);
        assert_eq!(Style::classify("Sporty"), Style::Sporty);
        assert_eq!(Style::classify("business formal"), Style::Formal);
    }
}
