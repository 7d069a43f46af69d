use crate::models::Property;
use crate::sources::json::parse_listings;
use crate::sources::traits::ListingSource;
use anyhow::{Context, Result};
use async_trait::async_trait;
use tracing::info;

/// Dataset shipped with the binary
pub const BUNDLED_DATASET: &str = include_str!("../../data/properties.json");

/// Parse the bundled dataset
pub fn bundled() -> Result<Vec<Property>> {
    parse_listings(BUNDLED_DATASET).context("Bundled dataset is invalid")
}

/// Listings already held in memory
#[derive(Debug, Clone, Default)]
pub struct StaticSource {
    records: Vec<Property>,
}

impl StaticSource {
    pub fn new(records: Vec<Property>) -> Self {
        Self { records }
    }

    /// Source backed by the bundled dataset
    pub fn bundled() -> Result<Self> {
        Ok(Self::new(bundled()?))
    }
}

#[async_trait]
impl ListingSource for StaticSource {
    async fn load(&self) -> Result<Vec<Property>> {
        info!("📋 Serving {} in-memory listings", self.records.len());
        Ok(self.records.clone())
    }

    fn source_name(&self) -> &'static str {
        "static"
    }
}
