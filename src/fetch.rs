//! Generic HTTP fetching with typed error handling and response metadata.

use chrono::{DateTime, Utc};
use reqwest::Client;
use reqwest::header::HeaderMap;
use serde::de::DeserializeOwned;
use std::time::Duration;
use tracing::{debug, error, info, instrument};

use crate::constants::{
    COUNTER_RESET_HEADER, HTTP_POOL_MAX_IDLE_PER_HOST, REQUESTS_AVAILABLE_HEADER,
};
use crate::error::ApiError;

/// Metadata about one API response: what was requested, how it went, and
/// where the caller stands against the rate limit.
#[derive(Debug, Clone, PartialEq)]
pub struct ResponseMeta {
    /// Full URL of the request.
    pub endpoint: String,
    /// HTTP status code of the response.
    pub status: u16,
    /// Requests remaining in the current rate-limit window, when reported.
    pub requests_available: Option<u32>,
    /// Seconds until the rate-limit counter resets, when reported.
    pub counter_reset_seconds: Option<u32>,
    /// When the response was received.
    pub received_at: DateTime<Utc>,
}

impl ResponseMeta {
    fn from_response(url: &str, status: u16, headers: &HeaderMap) -> Self {
        ResponseMeta {
            endpoint: url.to_string(),
            status,
            requests_available: header_u32(headers, REQUESTS_AVAILABLE_HEADER),
            counter_reset_seconds: header_u32(headers, COUNTER_RESET_HEADER),
            received_at: Utc::now(),
        }
    }
}

fn header_u32(headers: &HeaderMap, name: &str) -> Option<u32> {
    headers
        .get(name)
        .and_then(|value| value.to_str().ok())
        .and_then(|value| value.parse::<u32>().ok())
}

/// Creates the pooled HTTP client used for all requests. The auth header is
/// installed as a default header so every request carries the API key.
pub(crate) fn create_http_client(
    api_key: &str,
    timeout_seconds: u64,
) -> Result<Client, ApiError> {
    let mut headers = HeaderMap::new();
    let mut auth_value = reqwest::header::HeaderValue::from_str(api_key)
        .map_err(|_| ApiError::InvalidApiKey)?;
    auth_value.set_sensitive(true);
    headers.insert(crate::constants::AUTH_HEADER, auth_value);

    Client::builder()
        .timeout(Duration::from_secs(timeout_seconds))
        .pool_max_idle_per_host(HTTP_POOL_MAX_IDLE_PER_HOST)
        .default_headers(headers)
        .build()
        .map_err(ApiError::ApiFetch)
}

/// Performs one GET request and decodes the JSON body into `T`.
///
/// Non-2xx statuses map to typed errors by status code; undecodable bodies
/// are classified as empty, malformed JSON, or unexpected structure. The
/// second element carries response metadata whenever a response was
/// received at all, including for error statuses, so the caller can record
/// it either way.
#[instrument(skip(client))]
pub(crate) async fn fetch<T: DeserializeOwned>(
    client: &Client,
    url: &str,
) -> (Result<T, ApiError>, Option<ResponseMeta>) {
    info!("Fetching data from URL: {url}");

    let response = match client.get(url).send().await {
        Ok(resp) => resp,
        Err(e) => {
            error!("Request failed for URL {}: {}", url, e);
            let err = if e.is_timeout() {
                ApiError::network_timeout(url)
            } else if e.is_connect() {
                ApiError::network_connection(url, e.to_string())
            } else {
                ApiError::ApiFetch(e)
            };
            return (Err(err), None);
        }
    };

    let status = response.status();
    let meta = ResponseMeta::from_response(url, status.as_u16(), response.headers());

    debug!("Response status: {status}");

    if !status.is_success() {
        let status_code = status.as_u16();
        let reason = status.canonical_reason().unwrap_or("Unknown error");

        error!("HTTP {} - {} (URL: {})", status_code, reason, url);

        let err = match status_code {
            404 => ApiError::api_not_found(url),
            429 => ApiError::api_rate_limit(reason, url),
            400..=499 => ApiError::api_client_error(status_code, reason, url),
            500..=599 => {
                if status_code == 502 || status_code == 503 {
                    ApiError::api_service_unavailable(status_code, reason, url)
                } else {
                    ApiError::api_server_error(status_code, reason, url)
                }
            }
            _ => ApiError::api_server_error(status_code, reason, url),
        };
        return (Err(err), Some(meta));
    }

    let response_text = match response.text().await {
        Ok(text) => text,
        Err(e) => {
            error!("Failed to read response text from URL {}: {}", url, e);
            return (Err(ApiError::ApiFetch(e)), Some(meta));
        }
    };

    debug!("Response length: {} bytes", response_text.len());

    match serde_json::from_str::<T>(&response_text) {
        Ok(parsed) => (Ok(parsed), Some(meta)),
        Err(e) => {
            error!("Failed to parse API response: {} (URL: {})", e, url);

            // Distinguish malformed JSON from a valid document with the
            // wrong shape
            let err = if response_text.trim().is_empty() {
                ApiError::api_no_data("Response body is empty", url)
            } else if !response_text.trim_start().starts_with('{')
                && !response_text.trim_start().starts_with('[')
            {
                ApiError::api_malformed_json("Response is not valid JSON", url)
            } else {
                ApiError::api_unexpected_structure(e.to_string(), url)
            };
            (Err(err), Some(meta))
        }
    }
}
