use crate::sbom_aggregation::domain::{Collection, ConsolidatedSbom};
use crate::shared::security::sanitize_file_name_component;
use crate::shared::Result;

/// ConsolidationResponse - Response DTO from the consolidation use case
#[derive(Debug, Clone)]
pub struct ConsolidationResponse {
    /// The collection that was consolidated
    pub collection: Collection,
    /// The merged document, ready to be serialized
    pub sbom: ConsolidatedSbom,
    /// Applications whose SBOM could not be retrieved
    pub skipped_applications: Vec<String>,
}

impl ConsolidationResponse {
    pub fn new(
        collection: Collection,
        sbom: ConsolidatedSbom,
        skipped_applications: Vec<String>,
    ) -> Self {
        Self {
            collection,
            sbom,
            skipped_applications,
        }
    }

    /// File name of the persisted artifact: `<collection_guid>-<collection_name>.json`
    pub fn output_file_name(&self) -> String {
        format!(
            "{}-{}.json",
            self.collection.guid,
            sanitize_file_name_component(&self.collection.name)
        )
    }

    /// Serializes the consolidated SBOM as pretty-printed JSON
    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string_pretty(&self.sbom).map_err(Into::into)
    }
}
