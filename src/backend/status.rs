//! Read back the review state of a submitted profile.

use serde::Deserialize;

use crate::error::BackendError;
use crate::form::{AccountId, Role};

use super::HttpBackend;
use super::response::rejection;

const PROFILE_FALLBACK: &str = "Profile not found";

/// Review state of a submitted dossier.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct VerificationStatus {
    /// `pending`, `approved` or `rejected`.
    pub verification_status: String,
    #[serde(default)]
    pub rejection_reason: Option<String>,
}

impl VerificationStatus {
    pub fn is_pending(&self) -> bool {
        self.verification_status == "pending"
    }
}

impl HttpBackend {
    /// `GET /{role}/{user_id}`: the stored profile's verification state.
    pub async fn fetch_verification(
        &self,
        role: Role,
        account_id: &AccountId,
    ) -> Result<VerificationStatus, BackendError> {
        let path = role.profile_path(account_id);

        let resp = self
            .client
            .get(self.config.endpoint(&path))
            .send()
            .await
            .map_err(|e| BackendError::from_reqwest(&path, self.config.request_timeout, e))?;

        if !resp.status().is_success() {
            return Err(rejection(&path, resp, PROFILE_FALLBACK).await);
        }

        let status: VerificationStatus = resp
            .json()
            .await
            .map_err(|e| BackendError::InvalidResponse(format!("{path}: {e}")))?;
        tracing::debug!(
            role = %role,
            account_id = %account_id,
            status = %status.verification_status,
            "Fetched verification status"
        );
        Ok(status)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_stored_profile() {
        let body = r#"{
            "id": 3, "user_id": 17, "first_name": "Aigerim",
            "verification_status": "rejected",
            "rejection_reason": "Failed government verification"
        }"#;
        let status: VerificationStatus = serde_json::from_str(body).unwrap();
        assert_eq!(status.verification_status, "rejected");
        assert_eq!(
            status.rejection_reason.as_deref(),
            Some("Failed government verification")
        );
        assert!(!status.is_pending());
    }

    #[test]
    fn rejection_reason_is_optional() {
        let status: VerificationStatus =
            serde_json::from_str(r#"{"verification_status": "pending"}"#).unwrap();
        assert!(status.is_pending());
        assert_eq!(status.rejection_reason, None);
    }
}
