/// Outbound ports (Driven ports) - Infrastructure interfaces
///
/// These ports define the interfaces that the application core uses
/// to interact with the remote inventory service, the operator, the console
/// and the file system.
pub mod collection_repository;
pub mod credentials_repository;
pub mod output_presenter;
pub mod progress_reporter;
pub mod sbom_repository;
pub mod selection_provider;

pub use collection_repository::CollectionRepository;
pub use credentials_repository::CredentialsRepository;
pub use output_presenter::OutputPresenter;
pub use progress_reporter::ProgressReporter;
pub use sbom_repository::SbomRepository;
pub use selection_provider::SelectionProvider;
