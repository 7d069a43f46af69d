use crate::models::Property;
use crate::sources::traits::ListingSource;
use anyhow::{Context, Result};
use async_trait::async_trait;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Listings stored as a JSON array on disk
pub struct JsonFileSource {
    path: PathBuf,
}

impl JsonFileSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

/// Parse a JSON array of listings
pub fn parse_listings(json: &str) -> Result<Vec<Property>> {
    serde_json::from_str(json).context("Failed to parse listings JSON")
}

#[async_trait]
impl ListingSource for JsonFileSource {
    async fn load(&self) -> Result<Vec<Property>> {
        debug!("Reading listings from {}", self.path.display());

        let json = tokio::fs::read_to_string(&self.path)
            .await
            .with_context(|| format!("Failed to read {}", self.path.display()))?;

        let properties = parse_listings(&json)
            .with_context(|| format!("Invalid listings file {}", self.path.display()))?;

        info!(
            "Loaded {} listings from {}",
            properties.len(),
            self.path.display()
        );
        Ok(properties)
    }

    fn source_name(&self) -> &'static str {
        "json-file"
    }
}
