//! JSON-over-HTTP calls to the analytics API

use gloo_net::http::{Request, Response};
use serde_json::Value;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ApiError {
    /// Non-2xx answer; rendered the way panels show it
    #[error("{label} request failed: {status_text}")]
    Status {
        label: String,
        status: u16,
        status_text: String,
    },
    #[error("Failed to send request: {0}")]
    Network(String),
    #[error("Failed to serialize request: {0}")]
    Encode(String),
    #[error("Failed to parse response: {0}")]
    Decode(String),
}

impl ApiError {
    pub fn status(label: &str, status: u16, status_text: &str) -> Self {
        ApiError::Status {
            label: label.to_string(),
            status,
            status_text: status_text_or_code(status, status_text),
        }
    }
}

/// HTTP/2 responses carry no reason phrase; fall back to the numeric code
fn status_text_or_code(status: u16, status_text: &str) -> String {
    if status_text.trim().is_empty() {
        format!("HTTP {}", status)
    } else {
        status_text.to_string()
    }
}

async fn post(url: &str, body: &Value, label: &str) -> Result<Response, ApiError> {
    let response = Request::post(url)
        .json(body)
        .map_err(|e| ApiError::Encode(e.to_string()))?
        .send()
        .await
        .map_err(|e| ApiError::Network(e.to_string()))?;

    if !response.ok() {
        return Err(ApiError::status(
            label,
            response.status(),
            &response.status_text(),
        ));
    }
    Ok(response)
}

/// POST a JSON body and parse the JSON answer
pub async fn post_json(url: &str, body: &Value, label: &str) -> Result<Value, ApiError> {
    post(url, body, label)
        .await?
        .json::<Value>()
        .await
        .map_err(|e| ApiError::Decode(e.to_string()))
}

/// POST a JSON body and return the raw answer (file downloads)
pub async fn post_binary(url: &str, body: &Value, label: &str) -> Result<Vec<u8>, ApiError> {
    post(url, body, label)
        .await?
        .binary()
        .await
        .map_err(|e| ApiError::Decode(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_error_message() {
        let error = ApiError::status("Options", 500, "Internal Server Error");
        assert_eq!(
            error.to_string(),
            "Options request failed: Internal Server Error"
        );
    }

    #[test]
    fn test_missing_status_text_falls_back_to_code() {
        let error = ApiError::status("Trend", 502, "");
        assert_eq!(error.to_string(), "Trend request failed: HTTP 502");
    }

    #[test]
    fn test_transport_error_messages() {
        assert_eq!(
            ApiError::Network("connection refused".to_string()).to_string(),
            "Failed to send request: connection refused"
        );
        assert_eq!(
            ApiError::Decode("expected value".to_string()).to_string(),
            "Failed to parse response: expected value"
        );
    }
}
