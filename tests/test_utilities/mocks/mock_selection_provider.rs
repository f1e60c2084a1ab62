use collection_sbom::prelude::*;
use std::cell::RefCell;

/// Mock SelectionProvider answering with a canned reply
pub struct MockSelectionProvider {
    pub answer: String,
    pub presented: RefCell<Vec<Vec<String>>>,
}

impl MockSelectionProvider {
    pub fn answering(answer: &str) -> Self {
        Self {
            answer: answer.to_string(),
            presented: RefCell::new(Vec::new()),
        }
    }
}

impl SelectionProvider for MockSelectionProvider {
    fn prompt_search_text(&self, _prompt: &str) -> Result<String> {
        Ok(self.answer.clone())
    }

    fn prompt_selection(&self, candidates: &[CollectionSummary]) -> Result<String> {
        self.presented
            .borrow_mut()
            .push(candidates.iter().map(|c| c.name.clone()).collect());
        Ok(self.answer.clone())
    }
}
