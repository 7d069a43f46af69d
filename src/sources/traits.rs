use crate::models::Property;
use anyhow::Result;
use async_trait::async_trait;

/// Common trait for everything that can supply the listing screen with data.
/// Records are expected to be valid already; sources do no schema checks
/// beyond deserialization.
#[async_trait]
pub trait ListingSource: Send + Sync {
    /// Load every listing, in display order
    async fn load(&self) -> Result<Vec<Property>>;

    /// Get the name of the source, for logs
    fn source_name(&self) -> &'static str;
}
