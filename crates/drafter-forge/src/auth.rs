//! Headers shared by every forge request.
//!
//! The credential goes into `Authorization: Bearer <token>` unmodified and
//! nowhere else.

use reqwest::header::ACCEPT;
use reqwest::RequestBuilder;

use drafter_core::credential::Credential;

use crate::repository::ForgeRepository;

/// Header carrying the REST API version the request is written against.
pub const API_VERSION_HEADER: &str = "X-GitHub-Api-Version";

/// Apply the media type, bearer token and API version headers.
pub fn apply_auth(
    request: RequestBuilder,
    repo: &ForgeRepository,
    credential: &Credential,
) -> RequestBuilder {
    request
        .header(ACCEPT, repo.accept.as_str())
        .bearer_auth(credential.expose())
        .header(API_VERSION_HEADER, repo.api_version.as_str())
}
