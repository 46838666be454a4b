//! Forge project abstraction: endpoint URLs and request header values.

use drafter_core::config::{
    ForgeConfig, DEFAULT_ACCEPT, DEFAULT_API_URL, DEFAULT_API_VERSION, DEFAULT_UPLOADS_URL,
};

/// A forge project that releases are created in.
#[derive(Debug, Clone)]
pub struct ForgeRepository {
    pub api_url: String,
    pub uploads_url: String,
    pub owner: String,
    pub project: String,
    pub accept: String,
    pub api_version: String,
}

impl ForgeRepository {
    /// Build a `ForgeRepository` from the `[forge]` configuration table.
    pub fn from_config(config: &ForgeConfig) -> Self {
        Self {
            api_url: config.api_url.trim_end_matches('/').to_string(),
            uploads_url: config.uploads_url.trim_end_matches('/').to_string(),
            owner: config.owner.clone(),
            project: config.project.clone(),
            accept: config.accept.clone(),
            api_version: config.api_version.clone(),
        }
    }

    /// A project on github.com.
    pub fn github(owner: &str, project: &str) -> Self {
        Self {
            api_url: DEFAULT_API_URL.to_string(),
            uploads_url: DEFAULT_UPLOADS_URL.to_string(),
            owner: owner.to_string(),
            project: project.to_string(),
            accept: DEFAULT_ACCEPT.to_string(),
            api_version: DEFAULT_API_VERSION.to_string(),
        }
    }

    /// `repos/<owner>/<project>`
    pub fn repo_path(&self) -> String {
        format!("repos/{}/{}", self.owner, self.project)
    }

    /// Endpoint that creates a release.
    pub fn releases_url(&self) -> String {
        format!("{}/{}/releases", self.api_url, self.repo_path())
    }

    /// Upload endpoint for one release, without the `name` query parameter.
    pub fn assets_url(&self, release_id: &str) -> String {
        format!(
            "{}/{}/releases/{release_id}/assets",
            self.uploads_url,
            self.repo_path()
        )
    }

    /// `owner/project`, for messages.
    pub fn slug(&self) -> String {
        format!("{}/{}", self.owner, self.project)
    }
}
