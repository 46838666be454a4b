//! Publish a draft release and attach the configured artifacts.
//!
//! The run has two phases. Release creation is fatal on any failure and
//! returns `Err` before a single upload is attempted. The upload phase never
//! returns `Err`: each artifact gets its own [`UploadOutcome`], failures are
//! reported on stderr, and the remaining artifacts are still attempted.

use std::time::Duration;

use reqwest::Client;
use tokio::time::Instant;

use drafter_core::artifact::Artifact;
use drafter_core::credential::Credential;
use drafter_core::tag::ReleaseTag;
use drafter_forge::client::build_client;
use drafter_forge::release::{create_release, CreateReleaseRequest, ReleaseId};
use drafter_forge::upload::upload_asset;
use drafter_util::errors::DrafterError;
use drafter_util::progress;

use crate::PublishOptions;

/// Result of one artifact's upload attempt.
#[derive(Debug)]
pub struct UploadOutcome {
    pub artifact: String,
    /// Bytes sent on success, or the recovered upload error.
    pub result: Result<u64, DrafterError>,
}

impl UploadOutcome {
    pub fn is_success(&self) -> bool {
        self.result.is_ok()
    }
}

/// What a completed run produced.
#[derive(Debug)]
pub struct PublishReport {
    pub release_id: ReleaseId,
    pub html_url: Option<String>,
    pub outcomes: Vec<UploadOutcome>,
}

impl PublishReport {
    /// Names of artifacts that did not make it onto the release.
    pub fn failed(&self) -> Vec<&str> {
        self.outcomes
            .iter()
            .filter(|o| !o.is_success())
            .map(|o| o.artifact.as_str())
            .collect()
    }

    pub fn is_complete(&self) -> bool {
        self.outcomes.iter().all(UploadOutcome::is_success)
    }

    pub fn uploaded_bytes(&self) -> u64 {
        self.outcomes
            .iter()
            .filter_map(|o| o.result.as_ref().ok())
            .sum()
    }

    /// Turn partial failure into an error, for callers that want it to count.
    pub fn require_complete(&self) -> Result<(), DrafterError> {
        if self.is_complete() {
            return Ok(());
        }
        Err(DrafterError::IncompleteUpload {
            failed: self.failed().into_iter().map(str::to_string).collect(),
        })
    }
}

/// Roughly 30 years; stands in for budgets too large to add to an `Instant`.
const FAR_FUTURE: Duration = Duration::from_secs(86400 * 365 * 30);

/// `now + budget`, capped at [`FAR_FUTURE`] so huge budgets cannot overflow.
fn deadline_after(now: Instant, budget: Duration) -> Instant {
    now + budget.min(FAR_FUTURE)
}

/// Create the draft release for `raw_tag`, then upload every artifact.
pub async fn publish(
    options: &PublishOptions,
    credential: &Credential,
    raw_tag: &str,
) -> miette::Result<PublishReport> {
    let tag = ReleaseTag::parse(raw_tag)?;
    let client = build_client(options.request_timeout)?;
    let deadline = deadline_after(Instant::now(), options.deadline);

    let request = CreateReleaseRequest::new(&tag, &options.release);
    progress::status_info(
        "Creating",
        &format!(
            "draft release {} ({}) on {}",
            request.name(),
            request.tag_name(),
            options.repo.slug()
        ),
    );

    let spinner = progress::spinner("Creating draft release...");
    let created = tokio::time::timeout_at(
        deadline,
        create_release(&client, &options.repo, credential, &request),
    )
    .await;
    spinner.finish_and_clear();

    let record = match created {
        Ok(result) => result?,
        Err(_) => {
            return Err(DrafterError::ReleaseCreation {
                message: format!(
                    "Overall deadline of {}s exceeded",
                    options.deadline.as_secs()
                ),
            }
            .into())
        }
    };
    progress::status("Created", &format!("draft release {}", record.id));

    let outcomes = upload_all(&client, options, credential, &record.id, deadline).await;

    Ok(PublishReport {
        release_id: record.id,
        html_url: record.html_url,
        outcomes,
    })
}

/// Attempt every configured artifact in order, recording each outcome.
pub async fn upload_all(
    client: &Client,
    options: &PublishOptions,
    credential: &Credential,
    release_id: &ReleaseId,
    deadline: Instant,
) -> Vec<UploadOutcome> {
    let pb = progress::upload_bar(options.artifacts.len() as u64);
    let mut outcomes = Vec::with_capacity(options.artifacts.len());

    for artifact in options.artifacts.iter() {
        let result = upload_one(client, options, credential, release_id, artifact, deadline).await;

        match &result {
            Ok(bytes) => pb.suspend(|| {
                progress::status(
                    "Uploaded",
                    &format!("{} ({})", artifact.name(), progress::format_bytes(*bytes)),
                )
            }),
            Err(e) => {
                tracing::warn!(asset = artifact.name(), error = %e, "asset upload failed");
                pb.suspend(|| progress::status_error("Failed", &e.to_string()));
            }
        }
        pb.inc(1);

        outcomes.push(UploadOutcome {
            artifact: artifact.name().to_string(),
            result,
        });
    }

    pb.finish_and_clear();
    outcomes
}

async fn upload_one(
    client: &Client,
    options: &PublishOptions,
    credential: &Credential,
    release_id: &ReleaseId,
    artifact: &Artifact,
    deadline: Instant,
) -> Result<u64, DrafterError> {
    let deadline_exceeded = || DrafterError::AssetUpload {
        artifact: artifact.name().to_string(),
        message: format!(
            "overall deadline of {}s exceeded",
            options.deadline.as_secs()
        ),
    };

    if Instant::now() >= deadline {
        return Err(deadline_exceeded());
    }

    let path = artifact.local_path(&options.artifacts_dir);
    let bytes = std::fs::read(&path).map_err(|e| DrafterError::AssetUpload {
        artifact: artifact.name().to_string(),
        message: format!("cannot read {}: {e}", path.display()),
    })?;

    tokio::time::timeout_at(
        deadline,
        upload_asset(
            client,
            &options.repo,
            credential,
            release_id,
            artifact.name(),
            bytes,
        ),
    )
    .await
    .map_err(|_| deadline_exceeded())?
}
