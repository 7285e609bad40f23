//! HTTP helpers for the directory API with a consistent timeout and error
//! mapping. Non-2xx responses become `FetchError::Status`; network, timeout
//! and decode failures become `FetchError::Transport`.

use super::config::AppConfig;
use gloo_net::http::{Request, Response};
use gloo_timers::callback::Timeout;
use serde::de::DeserializeOwned;
use userdir_directory::{api::join_url, FetchError, Resource};
use web_sys::{AbortController, AbortSignal};

/// Default request timeout (milliseconds) applied to all HTTP helpers.
const DEFAULT_TIMEOUT_MS: u32 = 10_000;

/// Fetches JSON from the configured API base URL.
pub async fn get_json<T: DeserializeOwned>(
    resource: Resource,
    path: &str,
) -> Result<T, FetchError> {
    let config = AppConfig::load();
    let url = join_url(&config.api_base_url, path);
    // The timer must outlive the body read, not just the headers.
    let (response, _timeout) = send_with_timeout(resource, |signal| {
        Request::get(&url)
            .abort_signal(Some(signal))
            .build()
            .map_err(|err| {
                FetchError::transport(resource, format!("Failed to build request: {err}"))
            })
    })
    .await?;

    handle_json_response(resource, response).await
}

/// Maps network errors into transport failures with timeout detection.
fn map_request_error(resource: Resource, err: &gloo_net::Error) -> FetchError {
    let message = err.to_string();
    let lowered = message.to_lowercase();

    if lowered.contains("timeout") || lowered.contains("abort") {
        FetchError::transport(resource, "Request timed out. Please try again.")
    } else {
        FetchError::transport(resource, format!("Unable to reach the server: {message}"))
    }
}

/// An abort while reading the body is the timeout firing; anything else is a
/// decode failure.
fn map_body_error(resource: Resource, err: &gloo_net::Error) -> FetchError {
    let message = err.to_string();
    if message.to_lowercase().contains("abort") {
        FetchError::transport(resource, "Request timed out. Please try again.")
    } else {
        FetchError::transport(resource, format!("Failed to decode response: {message}"))
    }
}

/// Sends a request with an abort timeout to avoid hanging in the loading state.
/// Dropping the returned `Timeout` cancels the abort, so callers hold it until
/// the body has been read.
async fn send_with_timeout(
    resource: Resource,
    build_request: impl FnOnce(&AbortSignal) -> Result<Request, FetchError>,
) -> Result<(Response, Timeout), FetchError> {
    let controller = AbortController::new().map_err(|_| {
        FetchError::transport(resource, "Failed to initialize request timeout.")
    })?;
    let signal = controller.signal();
    let timeout_controller = controller.clone();
    let timeout = Timeout::new(DEFAULT_TIMEOUT_MS, move || timeout_controller.abort());

    let request = build_request(&signal)?;
    let response = request
        .send()
        .await
        .map_err(|err| map_request_error(resource, &err))?;

    Ok((response, timeout))
}

/// Parses JSON responses and turns HTTP errors into status failures.
async fn handle_json_response<T: DeserializeOwned>(
    resource: Resource,
    response: Response,
) -> Result<T, FetchError> {
    if response.ok() {
        response
            .json::<T>()
            .await
            .map_err(|err| map_body_error(resource, &err))
    } else {
        Err(FetchError::Status {
            resource,
            status: response.status(),
        })
    }
}
