//! Turning non-success responses into user-facing failure messages.

use crate::error::BackendError;

/// Extract the backend's `detail` string from an error body.
///
/// Falls back to `fallback` when the body is empty, not JSON, has no
/// `detail`, or carries a non-string `detail` (such as a list of field
/// validation errors).
pub fn failure_message(body: &[u8], fallback: &str) -> String {
    serde_json::from_slice::<serde_json::Value>(body)
        .ok()
        .and_then(|value| {
            value
                .get("detail")
                .and_then(|d| d.as_str())
                .map(str::to_string)
        })
        .filter(|detail| !detail.is_empty())
        .unwrap_or_else(|| fallback.to_string())
}

/// Consume a non-success response into a [`BackendError::Rejected`].
pub(crate) async fn rejection(
    endpoint: &str,
    resp: reqwest::Response,
    fallback: &str,
) -> BackendError {
    let status = resp.status();
    let body = resp.bytes().await.unwrap_or_default();
    let message = failure_message(&body, fallback);
    tracing::warn!(
        endpoint,
        status = status.as_u16(),
        message = %message,
        "Backend rejected request"
    );
    BackendError::Rejected {
        endpoint: endpoint.to_string(),
        status: status.as_u16(),
        message,
    }
}
