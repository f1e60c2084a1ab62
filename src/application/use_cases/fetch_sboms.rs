use crate::ports::outbound::{ProgressReporter, SbomRepository};
use crate::sbom_aggregation::domain::{Asset, SbomDocument};
use crate::shared::Result;

/// Outcome of fetching the SBOMs of a collection's applications
#[derive(Debug, Clone, Default)]
pub struct FetchedSboms {
    /// Retrieved documents, in asset order
    pub documents: Vec<SbomDocument>,
    /// GUIDs of applications without a retrievable SBOM, in asset order
    pub skipped: Vec<String>,
}

/// FetchSbomsUseCase - retrieves one SBOM per application, one at a time
///
/// An application whose SBOM is unavailable is reported and skipped. A
/// malformed SBOM aborts the whole fetch.
///
/// # Type Parameters
/// * `SR` - SbomRepository implementation
/// * `PR` - ProgressReporter implementation
pub struct FetchSbomsUseCase<SR, PR> {
    sbom_repository: SR,
    progress_reporter: PR,
}

impl<SR, PR> FetchSbomsUseCase<SR, PR>
where
    SR: SbomRepository,
    PR: ProgressReporter,
{
    pub fn new(sbom_repository: SR, progress_reporter: PR) -> Self {
        Self {
            sbom_repository,
            progress_reporter,
        }
    }

    /// Fetches the SBOM of every asset, in order, with a single attempt each
    ///
    /// # Errors
    /// Returns an error only when a retrieved SBOM is malformed
    pub fn execute(&self, assets: &[Asset]) -> Result<FetchedSboms> {
        let total = assets.len();
        let mut fetched = FetchedSboms::default();

        for (index, asset) in assets.iter().enumerate() {
            let application = asset.application_guid();

            match self.sbom_repository.get_sbom(application) {
                Ok(document) => fetched.documents.push(document),
                Err(e) if e.is_unavailable() => {
                    self.progress_reporter.report_error(&format!(
                        "Could not get SBOM for application {}",
                        application
                    ));
                    fetched.skipped.push(application.to_string());
                }
                Err(e) => return Err(e.into()),
            }

            self.progress_reporter
                .report_progress(index + 1, total, Some(application));
        }

        Ok(fetched)
    }
}
