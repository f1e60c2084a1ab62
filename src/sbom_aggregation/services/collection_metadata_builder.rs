use crate::sbom_aggregation::domain::{
    Collection, CollectionComponent, CollectionMetadata, Property, SourceMetadata, ToolDescriptor,
};
use serde_json::Value;

/// Builds the `metadata` section of a consolidated SBOM
///
/// Authorship and supplier come from a single representative source
/// document; they are not merged across sources.
pub struct CollectionMetadataBuilder;

impl CollectionMetadataBuilder {
    pub const COMPONENT_TYPE: &'static str = "application";
    pub const PROPERTY_IDENTIFIER: &'static str = "Collection Identifier";
    pub const PROPERTY_DESCRIPTION: &'static str = "Description";
    pub const PROPERTY_TAGS: &'static str = "Tags";

    /// # Arguments
    /// * `representative` - Metadata of the first fetched source document
    /// * `collection` - The collection being consolidated
    pub fn build(representative: &SourceMetadata, collection: &Collection) -> CollectionMetadata {
        CollectionMetadata {
            timestamp: collection.modified.clone(),
            authors: representative.authors.clone(),
            supplier: representative.supplier.clone(),
            tools: vec![ToolDescriptor::aggregation_tool()],
            component: Self::collection_component(collection),
        }
    }

    /// Synthesizes the component describing the collection itself
    pub fn collection_component(collection: &Collection) -> CollectionComponent {
        CollectionComponent {
            component_type: Self::COMPONENT_TYPE.to_string(),
            group: None,
            bom_ref: collection.name.clone(),
            name: collection.name.clone(),
            version: None,
            purl: None,
            hashes: None,
            licenses: None,
            supplier: None,
            properties: Self::collection_properties(collection),
        }
    }

    // Property order is fixed: identifier, description, tags.
    fn collection_properties(collection: &Collection) -> Vec<Property> {
        let description = collection
            .description
            .clone()
            .map(Value::String)
            .unwrap_or(Value::Null);

        vec![
            Property::new(Self::PROPERTY_IDENTIFIER, collection.guid.clone()),
            Property::new(Self::PROPERTY_DESCRIPTION, description),
            Property::new(Self::PROPERTY_TAGS, collection.tags.clone()),
        ]
    }
}
