/// Mock implementations for testing
mod mock_collection_repository;
mod mock_progress_reporter;
mod mock_sbom_repository;
mod mock_selection_provider;

pub use mock_collection_repository::MockCollectionRepository;
pub use mock_progress_reporter::{MockProgressReporter, ProgressStep};
pub use mock_sbom_repository::MockSbomRepository;
pub use mock_selection_provider::MockSelectionProvider;
