use crate::shared::Result;

/// OutputPresenter port for persisting the consolidated SBOM
///
/// This port abstracts the destination the serialized document is handed to.
pub trait OutputPresenter {
    /// Persists the serialized consolidated SBOM
    ///
    /// # Errors
    /// Returns an error if:
    /// - Writing to the output destination fails
    /// - The destination is a symbolic link
    fn present(&self, content: &str) -> Result<()>;
}
