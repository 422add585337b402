//! Client side of `GET /v1/health`, run by the `healthcheck` subcommand.

use std::time::Duration;
use thiserror::Error;

use crate::handler::health::{HEALTH_PATH, HEALTHY};

const DEFAULT_HTTP_PORT: u16 = 9600;
const REQUEST_TIMEOUT: Duration = Duration::from_secs(2);

#[derive(Error, Debug)]
pub enum HealthcheckError {
    #[error("Healthcheck failed: could not build HTTP client: {0}")]
    Client(#[source] reqwest::Error),

    #[error("Healthcheck failed: request to {url} failed: {source}")]
    Unreachable {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("Healthcheck failed: health endpoint returned status {0}")]
    Status(reqwest::StatusCode),

    #[error("Healthcheck failed: unexpected health response {0:?}")]
    Body(String),
}

/// Check the service on the default port.
pub async fn healthcheck() -> Result<(), HealthcheckError> {
    healthcheck_with_port(DEFAULT_HTTP_PORT).await
}

/// Check the service on `port`. Succeeds only on a 2xx answer whose body is
/// the health handler's marker.
pub async fn healthcheck_with_port(port: u16) -> Result<(), HealthcheckError> {
    let client = reqwest::Client::builder()
        .timeout(REQUEST_TIMEOUT)
        .build()
        .map_err(HealthcheckError::Client)?;

    let url = format!("http://127.0.0.1:{port}{HEALTH_PATH}");
    let response = client
        .get(&url)
        .send()
        .await
        .map_err(|source| HealthcheckError::Unreachable {
            url: url.clone(),
            source,
        })?;

    let status = response.status();
    if !status.is_success() {
        return Err(HealthcheckError::Status(status));
    }

    let body = response.text().await.unwrap_or_default();
    if body.trim() != HEALTHY {
        return Err(HealthcheckError::Body(body));
    }
    Ok(())
}
