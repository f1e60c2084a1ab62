//! collection-sbom - consolidated SBOMs for Veracode application collections
//!
//! This library merges the CycloneDX SBOMs of every application in a
//! Veracode collection into a single document whose top-level component
//! is the collection itself, following hexagonal architecture and
//! Domain-Driven Design principles.
//!
//! # Architecture
//!
//! The library is organized into the following layers:
//!
//! - **Domain Layer** (`sbom_aggregation`): Pure business logic and domain models
//! - **Application Layer** (`application`): Use cases and application services
//! - **Ports** (`ports`): Interface definitions for infrastructure
//! - **Adapters** (`adapters`): Concrete implementations of ports
//! - **Shared** (`shared`): Common utilities and error types
//!
//! # Example
//!
//! ```no_run
//! use collection_sbom::prelude::*;
//!
//! # fn main() -> Result<()> {
//! // Create adapters
//! let client = VeracodeClient::new(&ApiCredentials::load()?, Region::Commercial)?;
//! let progress_reporter = StderrProgressReporter::new();
//!
//! // Create use case
//! let use_case = ConsolidateCollectionSbomUseCase::new(&client, &client, progress_reporter);
//!
//! // Execute
//! let request = ConsolidationRequest::new("9a0c3b52-6d1e-4f7a-b2c8-1e5d7f3a9b60");
//! let response = use_case.execute(request)?;
//!
//! // Persist output
//! let writer = FileSystemWriter::in_directory(std::path::Path::new("."), &response.output_file_name());
//! writer.present(&response.to_json()?)?;
//! # Ok(())
//! # }
//! ```

pub mod adapters;
pub mod application;
pub mod ports;
pub mod sbom_aggregation;
pub mod shared;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::adapters::outbound::console::{PromptSelectionProvider, StderrProgressReporter};
    pub use crate::adapters::outbound::filesystem::FileSystemWriter;
    pub use crate::adapters::outbound::network::{ApiCredentials, Region, VeracodeClient};
    pub use crate::application::dto::{ConsolidationRequest, ConsolidationResponse};
    pub use crate::application::use_cases::{
        CheckCredentialsExpiryUseCase, ConsolidateCollectionSbomUseCase, FetchSbomsUseCase,
        ResolveCollectionUseCase,
    };
    pub use crate::ports::outbound::{
        CollectionRepository, CredentialsRepository, OutputPresenter, ProgressReporter,
        SbomRepository, SelectionProvider,
    };
    pub use crate::sbom_aggregation::domain::{
        Asset, Collection, CollectionId, CollectionSummary, ConsolidatedSbom, SbomDocument,
    };
    pub use crate::sbom_aggregation::policies::CollectionSelectionPolicy;
    pub use crate::sbom_aggregation::services::{
        CollectionMetadataBuilder, IdentifierValidator, SbomAggregator,
    };
    pub use crate::shared::Result;
}
