use collection_sbom::prelude::*;
use collection_sbom::shared::error::SbomFetchError;
use std::collections::HashMap;

/// Mock SbomRepository returning raw documents by application GUID
///
/// Applications without a registered document are unavailable.
#[derive(Default)]
pub struct MockSbomRepository {
    pub documents: HashMap<String, String>,
}

impl MockSbomRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_document(mut self, application: &str, json: String) -> Self {
        self.documents.insert(application.to_string(), json);
        self
    }
}

impl SbomRepository for MockSbomRepository {
    fn get_sbom(&self, application_guid: &str) -> std::result::Result<SbomDocument, SbomFetchError> {
        let json = self
            .documents
            .get(application_guid)
            .ok_or_else(|| SbomFetchError::Unavailable {
                application: application_guid.to_string(),
                details: "API returned status code 404 Not Found".to_string(),
            })?;

        SbomDocument::from_json(json).map_err(|e| SbomFetchError::Malformed {
            application: application_guid.to_string(),
            details: e.to_string(),
        })
    }
}
