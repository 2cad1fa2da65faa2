//! Transport helpers shared by the provider clients.
use serde::de::DeserializeOwned;
use std::time::Duration;

use crate::modules::identity::application::ports::outgoing::ProviderError;

const DEFAULT_TIMEOUT: Duration = Duration::from_secs(15);
const DEFAULT_CONNECT_TIMEOUT: Duration = Duration::from_secs(5);

pub(super) fn build_client() -> reqwest::Client {
    reqwest::Client::builder()
        .timeout(DEFAULT_TIMEOUT)
        .connect_timeout(DEFAULT_CONNECT_TIMEOUT)
        .build()
        .unwrap_or_default()
}

pub(super) fn transport_error(e: reqwest::Error) -> ProviderError {
    if e.is_timeout() {
        ProviderError::Unreachable(format!("request timed out: {e}"))
    } else if e.is_connect() {
        ProviderError::Unreachable(format!("connection failed: {e}"))
    } else {
        ProviderError::RequestFailed(e.to_string())
    }
}

/// Sends the request and decodes a 2xx JSON body.
pub(super) async fn send_json<T: DeserializeOwned>(
    request: reqwest::RequestBuilder,
) -> Result<T, ProviderError> {
    let response = request.send().await.map_err(transport_error)?;
    let status = response.status();

    if !status.is_success() {
        let body = response.text().await.unwrap_or_default();
        return Err(ProviderError::RequestFailed(format!(
            "HTTP status {}: {}",
            status, body
        )));
    }

    response
        .json::<T>()
        .await
        .map_err(|e| ProviderError::InvalidResponse(e.to_string()))
}
