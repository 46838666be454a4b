//! Draft release creation.
//!
//! Creation is all-or-nothing: any failure here is a
//! [`DrafterError::ReleaseCreation`] and the caller is expected to stop,
//! since no asset can be uploaded without the release id.

use std::fmt;

use reqwest::Client;
use serde::{Deserialize, Serialize};

use drafter_core::config::ReleaseConfig;
use drafter_core::credential::Credential;
use drafter_core::tag::ReleaseTag;
use drafter_util::errors::DrafterError;

use crate::auth;
use crate::repository::ForgeRepository;

/// Body of `POST /repos/<owner>/<project>/releases`.
///
/// The release is always a draft, never a prerelease, and never gets
/// generated notes; those flags are not settable.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CreateReleaseRequest {
    tag_name: String,
    name: String,
    draft: bool,
    prerelease: bool,
    generate_release_notes: bool,
}

impl CreateReleaseRequest {
    pub fn new(tag: &ReleaseTag, config: &ReleaseConfig) -> Self {
        Self {
            tag_name: tag.tag_name(&config.tag_prefix),
            name: tag.title(&config.title_prefix),
            draft: true,
            prerelease: false,
            generate_release_notes: false,
        }
    }

    pub fn tag_name(&self) -> &str {
        &self.tag_name
    }

    pub fn name(&self) -> &str {
        &self.name
    }
}

/// Server-assigned release handle. Numeric and string ids are both kept
/// as text and never interpreted.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(from = "RawReleaseId")]
pub struct ReleaseId(String);

#[derive(Deserialize)]
#[serde(untagged)]
enum RawReleaseId {
    Number(u64),
    Text(String),
}

impl From<RawReleaseId> for ReleaseId {
    fn from(raw: RawReleaseId) -> Self {
        match raw {
            RawReleaseId::Number(n) => Self(n.to_string()),
            RawReleaseId::Text(s) => Self(s),
        }
    }
}

impl ReleaseId {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ReleaseId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// The parts of the creation response drafter reads.
#[derive(Debug, Clone, Deserialize)]
pub struct ReleaseRecord {
    pub id: ReleaseId,
    #[serde(default)]
    pub html_url: Option<String>,
}

/// Submit the creation request and return the new release.
pub async fn create_release(
    client: &Client,
    repo: &ForgeRepository,
    credential: &Credential,
    request: &CreateReleaseRequest,
) -> miette::Result<ReleaseRecord> {
    let url = repo.releases_url();
    tracing::debug!(%url, tag_name = request.tag_name(), "creating draft release");

    let resp = auth::apply_auth(client.post(&url), repo, credential)
        .json(request)
        .send()
        .await
        .map_err(|e| DrafterError::ReleaseCreation {
            message: format!("Request to {url} failed: {e}"),
        })?;

    let status = resp.status();
    let body = resp.text().await.map_err(|e| DrafterError::ReleaseCreation {
        message: format!("Failed to read response from {url}: {e}"),
    })?;

    if !status.is_success() {
        return Err(DrafterError::ReleaseCreation {
            message: format!("HTTP {status} from {url}\n{body}"),
        }
        .into());
    }

    let record = parse_release_record(&body)?;
    tracing::info!(id = %record.id, "draft release created");
    Ok(record)
}

/// Parse a successful creation response. A missing or empty `id` is an error.
pub fn parse_release_record(body: &str) -> Result<ReleaseRecord, DrafterError> {
    let record: ReleaseRecord =
        serde_json::from_str(body).map_err(|e| DrafterError::ReleaseCreation {
            message: format!("Unexpected response body ({e}):\n{body}"),
        })?;
    if record.id.as_str().is_empty() {
        return Err(DrafterError::ReleaseCreation {
            message: "Response carries an empty release id".to_string(),
        });
    }
    Ok(record)
}
