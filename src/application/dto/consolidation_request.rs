/// ConsolidationRequest - Request DTO for the consolidation use case
///
/// Carries the collection identifier exactly as supplied; validation is the
/// use case's first step.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConsolidationRequest {
    pub collection_id: String,
}

impl ConsolidationRequest {
    pub fn new(collection_id: impl Into<String>) -> Self {
        Self {
            collection_id: collection_id.into(),
        }
    }
}
