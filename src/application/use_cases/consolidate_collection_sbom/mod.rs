use crate::application::dto::{ConsolidationRequest, ConsolidationResponse};
use crate::application::use_cases::FetchSbomsUseCase;
use crate::ports::outbound::{CollectionRepository, ProgressReporter, SbomRepository};
use crate::sbom_aggregation::domain::{Asset, Collection, CollectionId};
use crate::sbom_aggregation::services::SbomAggregator;
use crate::shared::Result;

/// ConsolidateCollectionSbomUseCase - Core use case for collection SBOMs
///
/// This use case orchestrates the run after a collection has been chosen:
/// validate the identifier, read the collection and its assets, fetch each
/// application's SBOM and merge them. Every step is sequential.
///
/// # Type Parameters
/// * `CR` - CollectionRepository implementation
/// * `SR` - SbomRepository implementation
/// * `PR` - ProgressReporter implementation
pub struct ConsolidateCollectionSbomUseCase<CR, SR, PR> {
    collection_repository: CR,
    sbom_repository: SR,
    progress_reporter: PR,
}

impl<CR, SR, PR> ConsolidateCollectionSbomUseCase<CR, SR, PR>
where
    CR: CollectionRepository,
    SR: SbomRepository,
    PR: ProgressReporter,
{
    /// Creates a new ConsolidateCollectionSbomUseCase with injected dependencies
    pub fn new(collection_repository: CR, sbom_repository: SR, progress_reporter: PR) -> Self {
        Self {
            collection_repository,
            sbom_repository,
            progress_reporter,
        }
    }

    /// Executes the consolidation use case
    ///
    /// # Errors
    /// Returns an error if:
    /// - The collection identifier is not a canonical version-4 UUID
    /// - The collection or its assets cannot be read
    /// - A retrieved SBOM is malformed
    /// - No SBOM at all could be retrieved
    pub fn execute(&self, request: ConsolidationRequest) -> Result<ConsolidationResponse> {
        // Step 1: Gate the identifier before it reaches the service
        let collection_id = CollectionId::parse(&request.collection_id)?;

        // Step 2: Read the collection and its applications
        let (collection, assets) = self.load_collection(&collection_id)?;

        // Step 3: Fetch one SBOM per application, skipping unavailable ones
        self.progress_reporter
            .report("🔍 Getting SBOMs for collection assets...");
        let fetched = FetchSbomsUseCase::new(&self.sbom_repository, &self.progress_reporter)
            .execute(&assets)?;

        self.progress_reporter.report(&format!(
            "✅ Retrieved {} of {} SBOM(s)",
            fetched.documents.len(),
            assets.len()
        ));

        // Step 4: Merge
        self.progress_reporter
            .report("🧩 Generating consolidated SBOM...");
        let sbom = SbomAggregator::aggregate(&fetched.documents, &collection)?;

        Ok(ConsolidationResponse::new(collection, sbom, fetched.skipped))
    }

    fn load_collection(&self, collection_id: &CollectionId) -> Result<(Collection, Vec<Asset>)> {
        self.progress_reporter.report(&format!(
            "📦 Getting assets and info for collection {}...",
            collection_id
        ));

        let collection = self.collection_repository.get_collection(collection_id)?;
        let assets = self
            .collection_repository
            .get_collection_assets(collection_id)?;

        self.progress_reporter.report(&format!(
            "   - Collection: {} ({} application(s))",
            collection.name,
            assets.len()
        ));

        Ok((collection, assets))
    }
}
