use crate::sbom_aggregation::domain::{Asset, Collection, CollectionId, CollectionSummary};
use crate::shared::Result;

/// CollectionRepository port for reading collection records
///
/// This port abstracts the remote inventory service that owns collections
/// and their member applications.
pub trait CollectionRepository {
    /// Finds collections whose name partially matches `text`
    ///
    /// # Returns
    /// Matching collections in the order the service returns them
    fn list_collections_by_name(&self, text: &str) -> Result<Vec<CollectionSummary>>;

    /// Fetches the full collection record
    fn get_collection(&self, id: &CollectionId) -> Result<Collection>;

    /// Lists the applications that belong to the collection
    fn get_collection_assets(&self, id: &CollectionId) -> Result<Vec<Asset>>;
}

impl<T: CollectionRepository + ?Sized> CollectionRepository for &T {
    fn list_collections_by_name(&self, text: &str) -> Result<Vec<CollectionSummary>> {
        (**self).list_collections_by_name(text)
    }

    fn get_collection(&self, id: &CollectionId) -> Result<Collection> {
        (**self).get_collection(id)
    }

    fn get_collection_assets(&self, id: &CollectionId) -> Result<Vec<Asset>> {
        (**self).get_collection_assets(id)
    }
}
