//! Raw HTTP fetching and listing decoding

use reqwest::Client;
use serde_json::Value;
use tracing::{debug, error, instrument};

use crate::data_fetcher::models::RawMatch;
use crate::error::AppError;

/// Fetches `url` and returns the response body on a 2xx status.
///
/// Transport failures and non-success statuses are mapped to specific
/// [`AppError`] variants. No retries: callers decide what a failure means.
#[instrument(skip(client))]
pub async fn fetch_text(client: &Client, url: &str) -> Result<String, AppError> {
    debug!("Fetching URL: {url}");

    let response = match client.get(url).send().await {
        Ok(resp) => resp,
        Err(e) => {
            error!("Request failed for URL {}: {}", url, e);
            return if e.is_timeout() {
                Err(AppError::network_timeout(url))
            } else if e.is_connect() {
                Err(AppError::network_connection(url, e.to_string()))
            } else {
                Err(AppError::ApiFetch(e))
            };
        }
    };

    let status = response.status();
    debug!("Response status: {status}");

    if !status.is_success() {
        let status_code = status.as_u16();
        let reason = status.canonical_reason().unwrap_or("Unknown error");

        error!("HTTP {} - {} (URL: {})", status_code, reason, url);

        return Err(match status_code {
            404 => AppError::api_not_found(url),
            429 => AppError::api_rate_limit(reason, url),
            400..=499 => AppError::api_client_error(status_code, reason, url),
            502 | 503 => AppError::api_service_unavailable(status_code, reason, url),
            _ => AppError::api_server_error(status_code, reason, url),
        });
    }

    let response_text = match response.text().await {
        Ok(text) => text,
        Err(e) => {
            error!("Failed to read response text from URL {}: {}", url, e);
            return Err(if e.is_timeout() {
                AppError::network_timeout(url)
            } else {
                AppError::ApiFetch(e)
            });
        }
    };

    debug!("Response length: {} bytes", response_text.len());
    let preview: String = response_text.chars().take(1024).collect();
    debug!("Response text (first 1024 chars): {preview}");

    Ok(response_text)
}

/// Decodes a day-listing body into its raw match entries.
///
/// The body must be a JSON object whose `data` field is a list. Entries that
/// are not JSON objects are dropped; everything else about an entry is
/// tolerated and sorted out during normalization.
pub fn parse_match_list(body: &str, url: &str) -> Result<Vec<RawMatch>, AppError> {
    let value: Value = match serde_json::from_str(body) {
        Ok(value) => value,
        Err(e) => {
            return Err(if body.trim().is_empty() {
                AppError::api_no_data("Response body is empty", url)
            } else {
                AppError::api_malformed_json(e.to_string(), url)
            });
        }
    };

    let entries = match value.get("data") {
        Some(Value::Array(entries)) => entries,
        Some(Value::Null) | None => {
            return Err(AppError::api_no_data("Missing 'data' field", url));
        }
        Some(other) => {
            return Err(AppError::api_unexpected_structure(
                format!("'data' is not a list: {other}"),
                url,
            ));
        }
    };

    let mut matches = Vec::with_capacity(entries.len());
    for entry in entries {
        if !entry.is_object() {
            debug!("Dropping non-object listing entry from {url}: {entry}");
            continue;
        }
        match serde_json::from_value::<RawMatch>(entry.clone()) {
            Ok(raw) => matches.push(raw),
            Err(e) => debug!("Dropping undecodable listing entry from {url}: {e}"),
        }
    }

    Ok(matches)
}
