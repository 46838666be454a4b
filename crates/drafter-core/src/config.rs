use serde::Deserialize;
use std::path::{Path, PathBuf};
use std::time::Duration;

use drafter_util::errors::DrafterError;

use crate::artifact::ArtifactSet;

/// File name looked up in the working directory when `--config` is not given.
pub const CONFIG_FILE_NAME: &str = "Drafter.toml";

pub const DEFAULT_API_URL: &str = "https://api.github.com";
pub const DEFAULT_UPLOADS_URL: &str = "https://uploads.github.com";
pub const DEFAULT_API_VERSION: &str = "2022-11-28";
pub const DEFAULT_ACCEPT: &str = "application/vnd.github+json";

/// Publishing configuration loaded from `Drafter.toml`.
///
/// Every table and key is optional; an absent file is equivalent to
/// [`PublishConfig::default`].
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PublishConfig {
    #[serde(default)]
    pub forge: ForgeConfig,

    #[serde(default)]
    pub release: ReleaseConfig,

    #[serde(default)]
    pub artifacts: ArtifactsConfig,

    #[serde(default)]
    pub network: NetworkConfig,
}

/// Forge endpoint and project coordinates from `[forge]`.
#[derive(Debug, Clone, Deserialize)]
pub struct ForgeConfig {
    #[serde(default = "default_api_url", rename = "api-url")]
    pub api_url: String,
    #[serde(default = "default_uploads_url", rename = "uploads-url")]
    pub uploads_url: String,
    #[serde(default = "default_api_version", rename = "api-version")]
    pub api_version: String,
    #[serde(default = "default_accept")]
    pub accept: String,
    #[serde(default = "default_owner")]
    pub owner: String,
    #[serde(default = "default_project")]
    pub project: String,
}

impl Default for ForgeConfig {
    fn default() -> Self {
        Self {
            api_url: default_api_url(),
            uploads_url: default_uploads_url(),
            api_version: default_api_version(),
            accept: default_accept(),
            owner: default_owner(),
            project: default_project(),
        }
    }
}

fn default_api_url() -> String {
    DEFAULT_API_URL.to_string()
}

fn default_uploads_url() -> String {
    DEFAULT_UPLOADS_URL.to_string()
}

fn default_api_version() -> String {
    DEFAULT_API_VERSION.to_string()
}

fn default_accept() -> String {
    DEFAULT_ACCEPT.to_string()
}

fn default_owner() -> String {
    "Assifar-Karim".to_string()
}

fn default_project() -> String {
    "apollo".to_string()
}

/// Naming of the release entry and exit-code policy from `[release]`.
#[derive(Debug, Clone, Deserialize)]
pub struct ReleaseConfig {
    #[serde(default = "default_title_prefix", rename = "title-prefix")]
    pub title_prefix: String,
    #[serde(default = "default_tag_prefix", rename = "tag-prefix")]
    pub tag_prefix: String,
    /// Exit non-zero when any upload fails.
    #[serde(default)]
    pub strict: bool,
}

impl Default for ReleaseConfig {
    fn default() -> Self {
        Self {
            title_prefix: default_title_prefix(),
            tag_prefix: default_tag_prefix(),
            strict: false,
        }
    }
}

fn default_title_prefix() -> String {
    "Apollo".to_string()
}

fn default_tag_prefix() -> String {
    "release/".to_string()
}

/// Where the archives live and which ones to attach, from `[artifacts]`.
///
/// `names` and `matrix` are mutually exclusive; with neither, the built-in
/// worker/coordinator list is used.
#[derive(Debug, Clone, Deserialize)]
pub struct ArtifactsConfig {
    #[serde(default = "default_artifacts_dir")]
    pub dir: PathBuf,
    #[serde(default)]
    pub names: Option<Vec<String>>,
    #[serde(default)]
    pub matrix: Option<MatrixConfig>,
}

impl Default for ArtifactsConfig {
    fn default() -> Self {
        Self {
            dir: default_artifacts_dir(),
            names: None,
            matrix: None,
        }
    }
}

fn default_artifacts_dir() -> PathBuf {
    PathBuf::from("bin")
}

/// `[artifacts.matrix]`: archive names as a cross product.
#[derive(Debug, Clone, Deserialize)]
pub struct MatrixConfig {
    pub components: Vec<String>,
    pub platforms: Vec<String>,
    pub archs: Vec<String>,
}

impl ArtifactsConfig {
    /// Resolve the configured artifact list.
    pub fn artifact_set(&self) -> miette::Result<ArtifactSet> {
        match (&self.names, &self.matrix) {
            (Some(_), Some(_)) => Err(DrafterError::Config {
                message: "[artifacts] sets both `names` and `matrix`; pick one".to_string(),
            }
            .into()),
            (Some(names), None) => ArtifactSet::from_names(names.iter().cloned()),
            (None, Some(m)) => ArtifactSet::from_matrix(&m.components, &m.platforms, &m.archs),
            (None, None) => Ok(ArtifactSet::default()),
        }
    }
}

/// Timeouts from `[network]`.
#[derive(Debug, Clone, Deserialize)]
pub struct NetworkConfig {
    #[serde(
        default = "default_request_timeout_secs",
        rename = "request-timeout-secs"
    )]
    pub request_timeout_secs: u64,
    #[serde(default = "default_deadline_secs", rename = "deadline-secs")]
    pub deadline_secs: u64,
}

impl Default for NetworkConfig {
    fn default() -> Self {
        Self {
            request_timeout_secs: default_request_timeout_secs(),
            deadline_secs: default_deadline_secs(),
        }
    }
}

fn default_request_timeout_secs() -> u64 {
    120
}

fn default_deadline_secs() -> u64 {
    900
}

impl NetworkConfig {
    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }

    pub fn deadline(&self) -> Duration {
        Duration::from_secs(self.deadline_secs)
    }
}

impl PublishConfig {
    /// Load `path` if given (it must exist), otherwise `Drafter.toml` in
    /// `dir` when present, otherwise the defaults.
    pub fn load(path: Option<&Path>, dir: &Path) -> miette::Result<Self> {
        match path {
            Some(p) => Self::load_from(p),
            None => {
                let candidate = dir.join(CONFIG_FILE_NAME);
                if candidate.is_file() {
                    Self::load_from(&candidate)
                } else {
                    tracing::debug!("No {CONFIG_FILE_NAME} in {}, using defaults", dir.display());
                    Ok(Self::default())
                }
            }
        }
    }

    /// Read and parse a specific config file.
    pub fn load_from(path: &Path) -> miette::Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| DrafterError::Config {
            message: format!("Failed to read {}: {e}", path.display()),
        })?;
        let config = Self::parse(&content).map_err(|e| DrafterError::Config {
            message: format!("Failed to parse {}: {e}", path.display()),
        })?;
        tracing::debug!("Loaded configuration from {}", path.display());
        Ok(config)
    }

    /// Parse and validate TOML text.
    pub fn parse(content: &str) -> Result<Self, String> {
        let config: Self = toml::from_str(content).map_err(|e| e.to_string())?;
        config.validate()?;
        Ok(config)
    }

    /// Check values that serde cannot: non-empty coordinates, non-zero timeouts.
    ///
    /// Run again after command-line overrides are applied.
    pub fn validate(&self) -> Result<(), String> {
        if self.forge.owner.is_empty() || self.forge.project.is_empty() {
            return Err("[forge] owner and project must not be empty".to_string());
        }
        if self.network.request_timeout_secs == 0 || self.network.deadline_secs == 0 {
            return Err("[network] timeouts must be greater than zero".to_string());
        }
        Ok(())
    }
}
