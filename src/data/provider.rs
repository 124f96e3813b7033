//! Data providers that populate the store at startup

use async_trait::async_trait;
use serde::Deserialize;
use std::path::{Path, PathBuf};
use tracing::debug;

use super::store::{AgricultureData, ClimateData};
use crate::error::{Error, Result};

/// Source of the two datasets.
///
/// Called once before any question is answered.
#[async_trait]
pub trait DataProvider: Send + Sync {
    /// Fetches production data by state
    async fn fetch_agriculture(&self) -> Result<AgricultureData>;

    /// Fetches rainfall and temperature data by state
    async fn fetch_climate(&self) -> Result<ClimateData>;

    /// Provider name for logging
    fn name(&self) -> &str;
}

/// Serves the built-in prototype dataset
#[derive(Debug, Clone, Default)]
pub struct StaticSeedProvider;

impl StaticSeedProvider {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl DataProvider for StaticSeedProvider {
    async fn fetch_agriculture(&self) -> Result<AgricultureData> {
        Ok(super::seed::agriculture())
    }

    async fn fetch_climate(&self) -> Result<ClimateData> {
        Ok(super::seed::climate())
    }

    fn name(&self) -> &str {
        "static-seed"
    }
}

/// On-disk document layout for [`JsonFileProvider`]
#[derive(Debug, Deserialize)]
struct DatasetDocument {
    #[serde(default)]
    agriculture: AgricultureData,
    #[serde(default)]
    climate: ClimateData,
}

/// Reads both datasets from a single JSON file
#[derive(Debug, Clone)]
pub struct JsonFileProvider {
    path: PathBuf,
}

impl JsonFileProvider {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    async fn read_document(&self) -> Result<DatasetDocument> {
        debug!(path = %self.path.display(), "Reading dataset file");

        let content = tokio::fs::read_to_string(&self.path).await.map_err(|e| {
            Error::DataLoad(format!("failed to read {}: {}", self.path.display(), e))
        })?;

        Ok(serde_json::from_str(&content)?)
    }
}

#[async_trait]
impl DataProvider for JsonFileProvider {
    async fn fetch_agriculture(&self) -> Result<AgricultureData> {
        Ok(self.read_document().await?.agriculture)
    }

    async fn fetch_climate(&self) -> Result<ClimateData> {
        Ok(self.read_document().await?.climate)
    }

    fn name(&self) -> &str {
        "json-file"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::DataStore;
    use std::io::Write;

    #[tokio::test]
    async fn test_static_seed_provider() {
        let store = DataStore::load(&StaticSeedProvider::new()).await.unwrap();
        assert_eq!(store.production("Maharashtra", "Cotton", 2023), Some(9100.0));
        assert_eq!(store.rainfall("Karnataka", 2022), Some(980.0));
    }

    #[tokio::test]
    async fn test_json_file_provider() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"{{
                "agriculture": {{
                    "Tamil Nadu": {{
                        "crops": {{"Sugarcane": {{"2022": 1500, "2023": 1600}}}},
                        "districts": {{"Erode": {{"Sugarcane": 210}}}}
                    }}
                }},
                "climate": {{
                    "Tamil Nadu": {{"rainfall": {{"2023": 940}}}}
                }}
            }}"#
        )
        .unwrap();

        let provider = JsonFileProvider::new(file.path());
        let store = DataStore::load(&provider).await.unwrap();

        assert_eq!(store.production("Tamil Nadu", "Sugarcane", 2023), Some(1600.0));
        assert_eq!(store.rainfall("Tamil Nadu", 2023), Some(940.0));
        assert_eq!(store.temperature("Tamil Nadu", 2023), None);
    }

    #[tokio::test]
    async fn test_json_file_provider_missing_file() {
        let provider = JsonFileProvider::new("/nonexistent/agri-qa/dataset.json");
        let result = DataStore::load(&provider).await;
        assert!(matches!(result, Err(Error::DataLoad(_))));
    }

    #[test]
    fn test_json_file_provider_malformed() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "not json").unwrap();

        let provider = JsonFileProvider::new(file.path());
        let result = tokio_test::block_on(provider.fetch_climate());
        assert!(matches!(result, Err(Error::Json(_))));
    }
}
