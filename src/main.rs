use std::sync::Arc;

use outfit_recommender::{
    config::Config,
    services::{
        providers::{JsonFileWardrobe, JsonFileWeather},
        RecommendationService,
    },
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = Config::from_env()?;

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    tracing::info!(
        wardrobe = %config.wardrobe_path.display(),
        weather = %config.weather_path.display(),
        "Starting outfit recommendation"
    );

    let service = RecommendationService::new(
        Arc::new(JsonFileWardrobe::new(config.wardrobe_path.clone())),
        Arc::new(JsonFileWeather::new(config.weather_path.clone())),
    );

    let response = service.recommend(config.user_id).await?;

    let json = if config.pretty_output {
        serde_json::to_string_pretty(&response)?
    } else {
        serde_json::to_string(&response)?
    };
    println!("{}", json);

    Ok(())
}
