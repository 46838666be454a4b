//! Release asset upload.
//!
//! Failures come back as [`DrafterError::AssetUpload`] rather than a
//! `miette::Report` so the caller can record them per artifact and keep going.

use reqwest::header::CONTENT_TYPE;
use reqwest::Client;

use drafter_core::credential::Credential;
use drafter_util::errors::DrafterError;

use crate::auth;
use crate::release::ReleaseId;
use crate::repository::ForgeRepository;

pub const OCTET_STREAM: &str = "application/octet-stream";

/// POST `bytes` as asset `name` of release `release_id`.
///
/// Returns the number of bytes sent.
pub async fn upload_asset(
    client: &Client,
    repo: &ForgeRepository,
    credential: &Credential,
    release_id: &ReleaseId,
    name: &str,
    bytes: Vec<u8>,
) -> Result<u64, DrafterError> {
    let url = repo.assets_url(release_id.as_str());
    let len = bytes.len() as u64;
    tracing::debug!(%url, asset = name, bytes = len, "uploading release asset");

    let resp = auth::apply_auth(client.post(&url), repo, credential)
        .query(&[("name", name)])
        .header(CONTENT_TYPE, OCTET_STREAM)
        .body(bytes)
        .send()
        .await
        .map_err(|e| DrafterError::AssetUpload {
            artifact: name.to_string(),
            message: format!("request failed: {e}"),
        })?;

    let status = resp.status();
    if !status.is_success() {
        let body = resp.text().await.unwrap_or_default();
        tracing::debug!(asset = name, %status, %body, "upload rejected");
        return Err(DrafterError::AssetUpload {
            artifact: name.to_string(),
            message: format!("HTTP {status}"),
        });
    }

    Ok(len)
}
