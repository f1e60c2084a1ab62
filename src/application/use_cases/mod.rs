/// Use cases module containing application business logic orchestration
mod check_credentials_expiry;
mod consolidate_collection_sbom;
mod fetch_sboms;
mod resolve_collection;

pub use check_credentials_expiry::{CheckCredentialsExpiryUseCase, DEFAULT_WARNING_DAYS};
pub use consolidate_collection_sbom::ConsolidateCollectionSbomUseCase;
pub use fetch_sboms::{FetchSbomsUseCase, FetchedSboms};
pub use resolve_collection::ResolveCollectionUseCase;
