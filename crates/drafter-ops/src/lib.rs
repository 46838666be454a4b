pub mod ops_plan;
pub mod ops_publish;

use std::path::PathBuf;
use std::time::Duration;

use drafter_core::artifact::ArtifactSet;
use drafter_core::config::{PublishConfig, ReleaseConfig};
use drafter_forge::repository::ForgeRepository;

/// Everything a publish run needs besides the credential and the tag,
/// resolved from configuration and command-line overrides.
#[derive(Debug, Clone)]
pub struct PublishOptions {
    pub repo: ForgeRepository,
    pub release: ReleaseConfig,
    pub artifacts: ArtifactSet,
    pub artifacts_dir: PathBuf,
    pub request_timeout: Duration,
    pub deadline: Duration,
}

impl PublishOptions {
    pub fn from_config(config: &PublishConfig) -> miette::Result<Self> {
        Ok(Self {
            repo: ForgeRepository::from_config(&config.forge),
            release: config.release.clone(),
            artifacts: config.artifacts.artifact_set()?,
            artifacts_dir: config.artifacts.dir.clone(),
            request_timeout: config.network.request_timeout(),
            deadline: config.network.deadline(),
        })
    }
}
