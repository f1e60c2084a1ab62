use crate::ports::outbound::{CredentialsRepository, ProgressReporter};
use chrono::{DateTime, FixedOffset, Utc};

/// Default number of remaining days below which a warning is printed
pub const DEFAULT_WARNING_DAYS: i64 = 7;

/// CheckCredentialsExpiryUseCase - warns when the API credentials are about to expire
///
/// This check is advisory: a failed lookup is reported and the run continues.
pub struct CheckCredentialsExpiryUseCase<CR, PR> {
    credentials_repository: CR,
    progress_reporter: PR,
    warning_days: i64,
}

impl<CR, PR> CheckCredentialsExpiryUseCase<CR, PR>
where
    CR: CredentialsRepository,
    PR: ProgressReporter,
{
    pub fn new(credentials_repository: CR, progress_reporter: PR, warning_days: i64) -> Self {
        Self {
            credentials_repository,
            progress_reporter,
            warning_days,
        }
    }

    /// # Returns
    /// The expiration timestamp when a warning was issued
    pub fn execute(&self, now: DateTime<Utc>) -> Option<DateTime<FixedOffset>> {
        let expiration = match self.credentials_repository.credentials_expiration() {
            Ok(expiration) => expiration,
            Err(e) => {
                self.progress_reporter.report_error(&format!(
                    "⚠️  Warning: Could not check API credentials expiration: {}",
                    e
                ));
                return None;
            }
        };

        let remaining = expiration.with_timezone(&Utc) - now;
        if remaining.num_days() < self.warning_days {
            self.progress_reporter.report(&format!(
                "These API credentials expire {}",
                expiration.to_rfc3339()
            ));
            return Some(expiration);
        }

        None
    }
}
