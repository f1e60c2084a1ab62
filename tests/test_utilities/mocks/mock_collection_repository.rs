use collection_sbom::prelude::*;
use std::cell::Cell;

/// Mock CollectionRepository serving one collection and a fixed search result
pub struct MockCollectionRepository {
    pub collection: Collection,
    pub applications: Vec<String>,
    pub search_results: Vec<CollectionSummary>,
    pub lookups: Cell<usize>,
}

impl MockCollectionRepository {
    pub fn new(collection: Collection) -> Self {
        Self {
            collection,
            applications: Vec::new(),
            search_results: Vec::new(),
            lookups: Cell::new(0),
        }
    }

    pub fn with_applications(mut self, applications: &[&str]) -> Self {
        self.applications = applications.iter().map(|a| a.to_string()).collect();
        self
    }

    pub fn with_search_results(mut self, results: &[(&str, &str)]) -> Self {
        self.search_results = results
            .iter()
            .map(|(guid, name)| CollectionSummary::new(*guid, *name))
            .collect();
        self
    }
}

impl CollectionRepository for MockCollectionRepository {
    fn list_collections_by_name(&self, text: &str) -> Result<Vec<CollectionSummary>> {
        Ok(self
            .search_results
            .iter()
            .filter(|c| c.name.contains(text))
            .cloned()
            .collect())
    }

    fn get_collection(&self, id: &CollectionId) -> Result<Collection> {
        self.lookups.set(self.lookups.get() + 1);
        if id.as_str() != self.collection.guid {
            anyhow::bail!("API returned status code 404 Not Found");
        }
        Ok(self.collection.clone())
    }

    fn get_collection_assets(&self, _id: &CollectionId) -> Result<Vec<Asset>> {
        Ok(self.applications.iter().map(Asset::new).collect())
    }
}
