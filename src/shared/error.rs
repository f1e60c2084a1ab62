use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

/// Exit codes for the CLI application.
///
/// These codes allow scripts to distinguish between a run that was
/// abandoned by the operator and one that failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(i32)]
pub enum ExitCode {
    /// Consolidated SBOM written
    Success = 0,
    /// No collection matched, or the selection was not valid
    Aborted = 1,
    /// Invalid command-line arguments or collection identifier
    InvalidArguments = 2,
    /// Application error (API error, network error, file I/O error, etc.)
    ApplicationError = 3,
}

impl ExitCode {
    /// Convert to i32 for use with std::process::exit
    pub fn as_i32(self) -> i32 {
        self as i32
    }
}

impl fmt::Display for ExitCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExitCode::Success => write!(f, "Success (0)"),
            ExitCode::Aborted => write!(f, "Aborted (1)"),
            ExitCode::InvalidArguments => write!(f, "Invalid Arguments (2)"),
            ExitCode::ApplicationError => write!(f, "Application Error (3)"),
        }
    }
}

/// Application-specific errors for consolidated SBOM generation.
#[derive(Debug, Error)]
pub enum SbomError {
    #[error("{value} is an invalid collection guid. Please supply a valid UUID.")]
    InvalidCollectionId { value: String },

    #[error("No SBOMs could be retrieved for collection {collection}\n\n💡 Hint: Make sure the applications in this collection have been scanned with Software Composition Analysis")]
    NoSbomsFetched { collection: String },

    #[error("Failed to write to file: {path}\nDetails: {details}\n\n💡 Hint: Please verify that the directory exists and you have write permissions")]
    FileWriteError { path: PathBuf, details: String },

    #[error("Invalid configuration: {details}")]
    ConfigError { details: String },

    #[error("API credentials not available: {details}\n\n💡 Hint: Set VERACODE_API_KEY_ID and VERACODE_API_KEY_SECRET, or create ~/.veracode/credentials")]
    CredentialsError { details: String },

    #[error("Veracode API request failed: {endpoint}\nDetails: {details}")]
    ApiError { endpoint: String, details: String },
}

impl SbomError {
    /// Maps an error to the exit code the CLI should terminate with
    pub fn exit_code(&self) -> ExitCode {
        match self {
            SbomError::InvalidCollectionId { .. } => ExitCode::InvalidArguments,
            _ => ExitCode::ApplicationError,
        }
    }
}

/// Failure to obtain the SBOM of a single application.
///
/// `Unavailable` covers transport-level failures (including the service
/// answering with a non-success status when no SBOM exists) and is skipped
/// by the fetcher. `Malformed` means the body does not have the expected
/// SBOM shape and aborts the run.
#[derive(Debug, Error)]
pub enum SbomFetchError {
    #[error("Could not get SBOM for application {application}: {details}")]
    Unavailable {
        application: String,
        details: String,
    },

    #[error("SBOM for application {application} is malformed: {details}")]
    Malformed {
        application: String,
        details: String,
    },
}

impl SbomFetchError {
    pub fn is_unavailable(&self) -> bool {
        matches!(self, SbomFetchError::Unavailable { .. })
    }
}
