mod collection_selection;

pub use collection_selection::{CollectionSelectionPolicy, SelectionOutcome};
