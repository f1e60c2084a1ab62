pub mod collection;
pub mod consolidated_sbom;
pub mod sbom_document;

pub use collection::{Asset, AssetInfo, Collection, CollectionId, CollectionSummary};
pub use consolidated_sbom::{
    CollectionComponent, CollectionMetadata, ComponentEntry, ConsolidatedSbom, Property,
    ToolDescriptor,
};
pub use sbom_document::{SbomDocument, SourceMetadata};
