use crate::sbom_aggregation::domain::CollectionSummary;
use crate::shared::Result;

/// SelectionProvider port for the single exchange with a human operator
///
/// Implementations only collect raw answers; interpreting them is left to
/// `CollectionSelectionPolicy`.
pub trait SelectionProvider {
    /// Asks for the (partial) collection name to search for
    fn prompt_search_text(&self, prompt: &str) -> Result<String>;

    /// Presents `candidates` as a 1-indexed list and returns the raw answer
    fn prompt_selection(&self, candidates: &[CollectionSummary]) -> Result<String>;
}

impl<T: SelectionProvider + ?Sized> SelectionProvider for &T {
    fn prompt_search_text(&self, prompt: &str) -> Result<String> {
        (**self).prompt_search_text(prompt)
    }

    fn prompt_selection(&self, candidates: &[CollectionSummary]) -> Result<String> {
        (**self).prompt_selection(candidates)
    }
}
