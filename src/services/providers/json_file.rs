//! File-backed providers.
//!
//! Read a wardrobe export and a forecast snapshot from JSON documents on disk.
//! Both files are re-read on every call so edits show up without a restart.

use serde::Deserialize;
use std::path::{Path, PathBuf};
use uuid::Uuid;

use crate::{
    error::{AppError, AppResult},
    models::{ForecastReport, WardrobeItem},
    services::providers::{WardrobeProvider, WeatherProvider},
};

/// Wardrobe export as written to disk
#[derive(Debug, Deserialize)]
struct WardrobeDocument {
    /// Owner of the export; `None` means any user
    #[serde(default)]
    owner: Option<Uuid>,
    items: Vec<WardrobeItem>,
}

async fn read_document<T: serde::de::DeserializeOwned>(path: &Path) -> AppResult<T> {
    let raw = tokio::fs::read_to_string(path).await?;
    Ok(serde_json::from_str(&raw)?)
}

#[derive(Debug, Clone)]
pub struct JsonFileWardrobe {
    path: PathBuf,
}

impl JsonFileWardrobe {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Unwraps the document, refusing exports that belong to another user
    fn convert_document(
        &self,
        document: WardrobeDocument,
        user_id: Uuid,
    ) -> AppResult<Vec<WardrobeItem>> {
        match document.owner {
            Some(owner) if owner != user_id => Err(AppError::Provider(format!(
                "wardrobe at {} belongs to {}, not {}",
                self.path.display(),
                owner,
                user_id
            ))),
            _ => Ok(document.items),
        }
    }
}

#[async_trait::async_trait]
impl WardrobeProvider for JsonFileWardrobe {
    async fn wardrobe(&self, user_id: Uuid) -> AppResult<Vec<WardrobeItem>> {
        let document: WardrobeDocument = read_document(&self.path).await?;
        let items = self.convert_document(document, user_id)?;
        tracing::debug!(
            path = %self.path.display(),
            item_count = items.len(),
            "Loaded wardrobe"
        );
        Ok(items)
    }

    fn name(&self) -> &'static str {
        "json-file-wardrobe"
    }
}

#[derive(Debug, Clone)]
pub struct JsonFileWeather {
    path: PathBuf,
}

impl JsonFileWeather {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

#[async_trait::async_trait]
impl WeatherProvider for JsonFileWeather {
    async fn forecast(&self, _user_id: Uuid) -> AppResult<ForecastReport> {
        let report: ForecastReport = read_document(&self.path).await?;
        tracing::debug!(
            path = %self.path.display(),
            temperature = report.temperature,
            forecast_at = %report.forecast_at,
            "Loaded forecast"
        );
        Ok(report)
    }

    fn name(&self) -> &'static str {
        "json-file-weather"
    }
}
