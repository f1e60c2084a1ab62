/// Console adapters for the operator's terminal
mod progress_reporter;
mod selection_provider;

pub use progress_reporter::StderrProgressReporter;
pub use selection_provider::PromptSelectionProvider;
