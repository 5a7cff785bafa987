//! Verification backend clients.
//!
//! Two calls make up a signup:
//! - **Provisioning**: `POST /register` with a JSON body, returns the new account id.
//! - **Profile submission**: multipart `POST /register/{role}` with the dossier.
//!
//! [`KycBackend`] is the seam the orchestrator talks to; [`HttpBackend`] is
//! the reqwest implementation.

pub mod provisioning;
pub mod response;
pub mod status;
pub mod submission;

pub use status::VerificationStatus;

use async_trait::async_trait;

use crate::config::BackendConfig;
use crate::error::BackendError;
use crate::form::{AccountId, Credentials, Dossier};

/// The two calls of a signup. Implementations make exactly one attempt per call.
#[async_trait]
pub trait KycBackend: Send + Sync {
    /// Create the base account.
    async fn create_account(&self, credentials: &Credentials) -> Result<AccountId, BackendError>;

    /// Attach a verification dossier to a freshly created account.
    async fn submit_profile(
        &self,
        account_id: &AccountId,
        dossier: &Dossier,
    ) -> Result<(), BackendError>;
}

/// HTTP client for the verification backend.
pub struct HttpBackend {
    client: reqwest::Client,
    config: BackendConfig,
}

impl HttpBackend {
    pub fn new(config: BackendConfig) -> Result<Self, BackendError> {
        let client = reqwest::Client::builder()
            .connect_timeout(config.connect_timeout)
            .timeout(config.request_timeout)
            .build()
            .map_err(|e| BackendError::Transport(format!("Failed to build HTTP client: {e}")))?;
        Ok(Self { client, config })
    }

    pub fn config(&self) -> &BackendConfig {
        &self.config
    }
}

#[async_trait]
impl KycBackend for HttpBackend {
    async fn create_account(&self, credentials: &Credentials) -> Result<AccountId, BackendError> {
        self.register_account(credentials).await
    }

    async fn submit_profile(
        &self,
        account_id: &AccountId,
        dossier: &Dossier,
    ) -> Result<(), BackendError> {
        self.register_profile(account_id, dossier).await
    }
}
