use collection_sbom::prelude::*;
use std::sync::{Arc, Mutex};

/// Step recorded by [`MockProgressReporter::report_progress`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProgressStep {
    pub current: usize,
    pub total: usize,
    pub application: Option<String>,
}

/// ProgressReporter double keeping each kind of report apart
///
/// Plain reports and completions land in `messages`; errors and progress
/// steps have their own logs so a skipped application can be asserted
/// without matching on formatted text.
#[derive(Default, Clone)]
pub struct MockProgressReporter {
    messages: Arc<Mutex<Vec<String>>>,
    errors: Arc<Mutex<Vec<String>>>,
    steps: Arc<Mutex<Vec<ProgressStep>>>,
}

impl MockProgressReporter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get_messages(&self) -> Vec<String> {
        self.messages.lock().unwrap().clone()
    }

    pub fn errors(&self) -> Vec<String> {
        self.errors.lock().unwrap().clone()
    }

    pub fn steps(&self) -> Vec<ProgressStep> {
        self.steps.lock().unwrap().clone()
    }
}

impl ProgressReporter for MockProgressReporter {
    fn report(&self, message: &str) {
        self.messages.lock().unwrap().push(message.to_string());
    }

    fn report_progress(&self, current: usize, total: usize, message: Option<&str>) {
        self.steps.lock().unwrap().push(ProgressStep {
            current,
            total,
            application: message.map(str::to_string),
        });
    }

    fn report_error(&self, message: &str) {
        self.errors.lock().unwrap().push(message.to_string());
    }

    fn report_completion(&self, message: &str) {
        self.messages.lock().unwrap().push(message.to_string());
    }
}
