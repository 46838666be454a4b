use std::time::Duration;

use reqwest::Client;

use drafter_util::errors::DrafterError;

/// Build the HTTP client used for every call of one publish run.
///
/// `timeout` bounds each request individually, from connect to the end of
/// the response body.
pub fn build_client(timeout: Duration) -> miette::Result<Client> {
    Client::builder()
        .timeout(timeout)
        .user_agent(concat!("drafter/", env!("CARGO_PKG_VERSION")))
        .build()
        .map_err(|e| {
            DrafterError::Network {
                message: format!("Failed to create HTTP client: {e}"),
            }
            .into()
        })
}
