// Repository trait for catalog data access
use crate::domain::stellar_object::RawObjectRow;
use async_trait::async_trait;

#[async_trait]
pub trait CatalogRepository: Send + Sync {
    /// Fetch every catalog row for one plate, preserving the server's result
    /// order. An empty result means the plate has no matching objects and is
    /// not an error.
    async fn fetch_plate_objects(&self, plate_number: &str) -> anyhow::Result<Vec<RawObjectRow>>;
}
