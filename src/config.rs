use serde::Deserialize;
use std::path::PathBuf;
use uuid::Uuid;

/// Application configuration loaded from environment variables
#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    /// Wardrobe export read by the file-backed wardrobe provider
    #[serde(default = "default_wardrobe_path")]
    pub wardrobe_path: PathBuf,

    /// Forecast snapshot read by the file-backed weather provider
    #[serde(default = "default_weather_path")]
    pub weather_path: PathBuf,

    /// User whose wardrobe is recommended from
    #[serde(default)]
    pub user_id: Uuid,

    /// Pretty-print the JSON response
    #[serde(default = "default_pretty_output")]
    pub pretty_output: bool,
}

fn default_wardrobe_path() -> PathBuf {
    PathBuf::from("wardrobe.json")
}

fn default_weather_path() -> PathBuf {
    PathBuf::from("weather.json")
}

fn default_pretty_output() -> bool {
    true
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();
        envy::from_env::<Config>().map_err(|e| anyhow::anyhow!("Failed to load config: {}", e))
    }
}
