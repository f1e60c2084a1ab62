mod collection_metadata_builder;
mod identifier_validator;
mod sbom_aggregator;

pub use collection_metadata_builder::CollectionMetadataBuilder;
pub use identifier_validator::IdentifierValidator;
pub use sbom_aggregator::SbomAggregator;
