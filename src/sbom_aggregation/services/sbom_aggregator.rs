use crate::sbom_aggregation::domain::{Collection, ComponentEntry, ConsolidatedSbom, SbomDocument};
use crate::sbom_aggregation::services::CollectionMetadataBuilder;
use crate::shared::error::SbomError;
use crate::shared::Result;

/// SbomAggregator merges per-application SBOMs into one collection SBOM
///
/// Pure and deterministic. Sections are concatenated in input order with
/// their per-source grouping preserved; nothing is de-duplicated.
pub struct SbomAggregator;

impl SbomAggregator {
    /// Merges `sboms` into a consolidated SBOM for `collection`
    ///
    /// # Errors
    /// Returns [`SbomError::NoSbomsFetched`] when `sboms` is empty, since the
    /// metadata is taken from the first document.
    pub fn aggregate(sboms: &[SbomDocument], collection: &Collection) -> Result<ConsolidatedSbom> {
        let Some(representative) = sboms.first() else {
            return Err(SbomError::NoSbomsFetched {
                collection: collection.name.clone(),
            }
            .into());
        };

        let vulnerabilities = sboms
            .iter()
            .map(|sbom| sbom.vulnerabilities.clone())
            .collect();

        let mut components: Vec<ComponentEntry> = sboms
            .iter()
            .map(|sbom| ComponentEntry::Group(sbom.components.clone()))
            .collect();

        let dependencies = sboms
            .iter()
            .map(|sbom| sbom.dependencies.clone())
            .collect();

        // Application-level components follow the groups, one per source.
        components.extend(
            sboms
                .iter()
                .map(|sbom| ComponentEntry::Application(sbom.metadata.component.clone())),
        );

        let metadata = CollectionMetadataBuilder::build(&representative.metadata, collection);

        Ok(ConsolidatedSbom {
            vulnerabilities,
            components,
            dependencies,
            metadata,
        })
    }
}
