use crate::ports::outbound::{CollectionRepository, ProgressReporter, SelectionProvider};
use crate::sbom_aggregation::policies::{CollectionSelectionPolicy, SelectionOutcome};
use crate::shared::logging::escape_crlf;
use crate::shared::Result;

/// ResolveCollectionUseCase - narrows a partial name to one collection GUID
///
/// # Type Parameters
/// * `CR` - CollectionRepository implementation
/// * `SP` - SelectionProvider implementation
/// * `PR` - ProgressReporter implementation
pub struct ResolveCollectionUseCase<CR, SP, PR> {
    collection_repository: CR,
    selection_provider: SP,
    progress_reporter: PR,
}

impl<CR, SP, PR> ResolveCollectionUseCase<CR, SP, PR>
where
    CR: CollectionRepository,
    SP: SelectionProvider,
    PR: ProgressReporter,
{
    pub fn new(collection_repository: CR, selection_provider: SP, progress_reporter: PR) -> Self {
        Self {
            collection_repository,
            selection_provider,
            progress_reporter,
        }
    }

    /// Resolves `search_text` to a collection GUID
    ///
    /// # Returns
    /// `None` when nothing matched or the operator's selection was not
    /// valid; the caller stops the run in both cases.
    ///
    /// # Errors
    /// Returns an error if the search request or the prompt fails
    pub fn execute(&self, search_text: &str) -> Result<Option<String>> {
        let candidates = self
            .collection_repository
            .list_collections_by_name(search_text)?;

        let selected = match CollectionSelectionPolicy::classify(&candidates) {
            SelectionOutcome::NoMatch => {
                self.progress_reporter.report("No matches were found!");
                return Ok(None);
            }
            SelectionOutcome::Single(only) => only,
            SelectionOutcome::Ambiguous(all) => {
                let answer = self.selection_provider.prompt_selection(all)?;
                match CollectionSelectionPolicy::pick(all, &answer) {
                    Some(chosen) => chosen,
                    None => {
                        self.progress_reporter.report(&format!(
                            "No collection selected ('{}' is not between 1 and {})",
                            escape_crlf(answer.trim()),
                            all.len()
                        ));
                        return Ok(None);
                    }
                }
            }
        };

        self.progress_reporter
            .report(&format!("Selected collection {}", selected.name));
        Ok(Some(selected.guid.clone()))
    }
}
