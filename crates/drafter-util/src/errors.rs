use miette::Diagnostic;
use thiserror::Error;

/// Unified error type for all drafter operations.
///
/// Two variants carry the publishing policy: [`DrafterError::ReleaseCreation`]
/// is always propagated to the entry point and ends the process, while
/// [`DrafterError::AssetUpload`] is caught per artifact and only reported.
#[derive(Debug, Error, Diagnostic)]
pub enum DrafterError {
    /// I/O operation failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Invalid configuration file, flag combination or credential.
    #[error("Configuration error: {message}")]
    #[diagnostic(help("Check Drafter.toml and the command-line flags"))]
    Config { message: String },

    /// The tag has no usable final path component.
    #[error("Invalid release tag '{raw}'")]
    #[diagnostic(help("Pass a tag such as `v1.2.0` or `refs/tags/v1.2.0`"))]
    InvalidTag { raw: String },

    /// The forge rejected or garbled the release creation call.
    #[error("Release creation failed: {message}")]
    ReleaseCreation { message: String },

    /// A single artifact could not be read or uploaded.
    #[error("Could not upload {artifact} to release: {message}")]
    AssetUpload { artifact: String, message: String },

    /// Strict mode summary when one or more uploads failed.
    #[error("{} artifact(s) failed to upload: {}", .failed.len(), .failed.join(", "))]
    #[diagnostic(help("The draft release exists; re-upload the missing assets manually"))]
    IncompleteUpload { failed: Vec<String> },

    /// HTTP client setup failed.
    #[error("Network error: {message}")]
    Network { message: String },
}

impl DrafterError {
    /// Name of the artifact this error belongs to, if it is an upload failure.
    pub fn artifact(&self) -> Option<&str> {
        match self {
            DrafterError::AssetUpload { artifact, .. } => Some(artifact),
            _ => None,
        }
    }
}

/// Convenience alias for `miette::Result<T>`.
pub type DrafterResult<T> = miette::Result<T>;
