use crate::sbom_aggregation::domain::SbomDocument;
use crate::shared::error::SbomFetchError;

/// SbomRepository port for retrieving the SBOM of one application
pub trait SbomRepository {
    /// Fetches the SBOM for `application_guid`
    ///
    /// # Errors
    /// * [`SbomFetchError::Unavailable`] - the request failed at transport
    ///   level or the service has no SBOM for the application
    /// * [`SbomFetchError::Malformed`] - the body is not a valid SBOM document
    fn get_sbom(&self, application_guid: &str) -> Result<SbomDocument, SbomFetchError>;
}

impl<T: SbomRepository + ?Sized> SbomRepository for &T {
    fn get_sbom(&self, application_guid: &str) -> Result<SbomDocument, SbomFetchError> {
        (**self).get_sbom(application_guid)
    }
}
