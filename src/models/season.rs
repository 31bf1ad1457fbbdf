use chrono::{DateTime, Datelike, FixedOffset, Utc};
use serde::Serialize;

/// Forecast dates are read on Korea Standard Time
const KST_OFFSET_SECONDS: i32 = 9 * 3600;

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize,
)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Season {
    Spring,
    Summer,
    Autumn,
    Winter,
}

impl Season {
    /// Calendar season of a forecast instant
    pub fn of(instant: DateTime<Utc>) -> Self {
        let month = match FixedOffset::east_opt(KST_OFFSET_SECONDS) {
            Some(kst) => instant.with_timezone(&kst).month(),
            None => instant.month(),
        };
        Self::of_month(month)
    }

    pub fn of_month(month: u32) -> Self {
        match month {
            3..=5 => Season::Spring,
            6..=8 => Season::Summer,
            9..=11 => Season::Autumn,
            _ => Season::Winter,
        }
    }
}

/// One token of a garment's season attribute
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SeasonTag {
    /// Wearable in every season
    Any,
    Season(Season),
}

impl SeasonTag {
    /// Parses a single token; unknown tokens yield `None`
    pub fn parse(token: &str) -> Option<Self> {
        let token = token.trim().to_lowercase();
        let tag = match token.as_str() {
            "spring" | "봄" => SeasonTag::Season(Season::Spring),
            "summer" | "여름" => SeasonTag::Season(Season::Summer),
            "autumn" | "fall" | "가을" => SeasonTag::Season(Season::Autumn),
            "winter" | "겨울" => SeasonTag::Season(Season::Winter),
            "any" | "all" | "all-season" | "사계절" | "전체" | "기타" => SeasonTag::Any,
            _ => return None,
        };
        Some(tag)
    }

    /// Splits a composite attribute such as `"spring/autumn"`
    pub fn parse_all(value: &str) -> Vec<Self> {
        value.split('/').filter_map(Self::parse).collect()
    }
}
