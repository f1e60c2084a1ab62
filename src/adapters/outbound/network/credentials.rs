use crate::shared::error::SbomError;
use crate::shared::security::read_regular_file;
use crate::shared::Result;
use std::path::{Path, PathBuf};

const ENV_API_KEY_ID: &str = "VERACODE_API_KEY_ID";
const ENV_API_KEY_SECRET: &str = "VERACODE_API_KEY_SECRET";
const ENV_API_PROFILE: &str = "VERACODE_API_PROFILE";
const DEFAULT_PROFILE: &str = "default";

/// API key pair used to sign requests
#[derive(Clone, PartialEq, Eq)]
pub struct ApiCredentials {
    api_key_id: String,
    api_key_secret: String,
}

impl std::fmt::Debug for ApiCredentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ApiCredentials")
            .field("api_key_id", &self.api_key_id)
            .field("api_key_secret", &"<redacted>")
            .finish()
    }
}

impl ApiCredentials {
    pub fn new(api_key_id: impl Into<String>, api_key_secret: impl Into<String>) -> Self {
        Self {
            api_key_id: api_key_id.into(),
            api_key_secret: api_key_secret.into(),
        }
    }

    pub fn api_key_id(&self) -> &str {
        &self.api_key_id
    }

    pub fn api_key_secret(&self) -> &str {
        &self.api_key_secret
    }

    /// Loads credentials from the environment, falling back to the
    /// credentials file in the user's home directory
    ///
    /// # Errors
    /// Returns [`SbomError::CredentialsError`] when neither source has a
    /// complete key pair for the selected profile
    pub fn load() -> Result<Self> {
        if let (Ok(id), Ok(secret)) = (
            std::env::var(ENV_API_KEY_ID),
            std::env::var(ENV_API_KEY_SECRET),
        ) {
            return Ok(Self::new(id, secret));
        }

        let profile =
            std::env::var(ENV_API_PROFILE).unwrap_or_else(|_| DEFAULT_PROFILE.to_string());
        let path = default_credentials_path().ok_or_else(|| SbomError::CredentialsError {
            details: "home directory could not be determined".to_string(),
        })?;

        Self::load_from_file(&path, &profile)
    }

    /// Loads the key pair of `profile` from an INI-style credentials file
    pub fn load_from_file(path: &Path, profile: &str) -> Result<Self> {
        if !path.exists() {
            return Err(SbomError::CredentialsError {
                details: format!("{} does not exist", path.display()),
            }
            .into());
        }

        let content = read_regular_file(path, "credentials file")?;
        parse_credentials_file(&content, profile).ok_or_else(|| {
            SbomError::CredentialsError {
                details: format!(
                    "profile [{}] in {} has no veracode_api_key_id/veracode_api_key_secret",
                    profile,
                    path.display()
                ),
            }
            .into()
        })
    }
}

fn default_credentials_path() -> Option<PathBuf> {
    std::env::var_os("HOME")
        .or_else(|| std::env::var_os("USERPROFILE"))
        .map(|home| PathBuf::from(home).join(".veracode").join("credentials"))
}

/// Reads one `[profile]` section of a credentials file
fn parse_credentials_file(content: &str, profile: &str) -> Option<ApiCredentials> {
    let mut in_profile = false;
    let mut id = None;
    let mut secret = None;

    for line in content.lines().map(str::trim) {
        if line.is_empty() || line.starts_with('#') || line.starts_with(';') {
            continue;
        }

        if let Some(section) = line.strip_prefix('[').and_then(|l| l.strip_suffix(']')) {
            in_profile = section.trim() == profile;
            continue;
        }

        if !in_profile {
            continue;
        }

        if let Some((key, value)) = line.split_once('=') {
            match key.trim() {
                "veracode_api_key_id" => id = Some(value.trim().to_string()),
                "veracode_api_key_secret" => secret = Some(value.trim().to_string()),
                _ => {}
            }
        }
    }

    match (id, secret) {
        (Some(id), Some(secret)) if !id.is_empty() && !secret.is_empty() => {
            Some(ApiCredentials::new(id, secret))
        }
        _ => None,
    }
}
