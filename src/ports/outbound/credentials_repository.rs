use crate::shared::Result;
use chrono::{DateTime, FixedOffset};

/// CredentialsRepository port for inspecting the API credentials in use
pub trait CredentialsRepository {
    /// Returns when the current API credentials expire
    fn credentials_expiration(&self) -> Result<DateTime<FixedOffset>>;
}

impl<T: CredentialsRepository + ?Sized> CredentialsRepository for &T {
    fn credentials_expiration(&self) -> Result<DateTime<FixedOffset>> {
        (**self).credentials_expiration()
    }
}
