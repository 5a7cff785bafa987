//! Account provisioning: `POST /register`.

use secrecy::ExposeSecret;
use serde::Serialize;

use crate::error::BackendError;
use crate::form::{AccountId, Credentials, Role};

use super::HttpBackend;
use super::response::rejection;

pub const REGISTER_PATH: &str = "/register";

/// Message shown when account creation fails without a detail.
pub const REGISTER_FALLBACK: &str = "Registration failed";

#[derive(Serialize)]
struct RegisterRequest<'a> {
    email: &'a str,
    password: &'a str,
    user_type: Role,
}

/// Pull the account id out of a successful `/register` body.
///
/// The backend sends the id as a JSON number; strings are accepted too.
pub fn parse_account_id(body: &[u8]) -> Result<AccountId, BackendError> {
    let value: serde_json::Value = serde_json::from_slice(body)
        .map_err(|e| BackendError::InvalidResponse(format!("registration response: {e}")))?;

    let id = match value.get("id") {
        Some(serde_json::Value::String(s)) => s.trim().to_string(),
        Some(serde_json::Value::Number(n)) => n.to_string(),
        _ => String::new(),
    };

    if id.is_empty() {
        return Err(BackendError::InvalidResponse(
            "registration response did not contain an account id".to_string(),
        ));
    }
    Ok(AccountId::new(id))
}

impl HttpBackend {
    pub(crate) async fn register_account(
        &self,
        credentials: &Credentials,
    ) -> Result<AccountId, BackendError> {
        let body = RegisterRequest {
            email: &credentials.email,
            password: credentials.password.expose_secret(),
            user_type: credentials.role,
        };

        let resp = self
            .client
            .post(self.config.endpoint(REGISTER_PATH))
            .json(&body)
            .send()
            .await
            .map_err(|e| BackendError::from_reqwest(REGISTER_PATH, self.config.request_timeout, e))?;

        if !resp.status().is_success() {
            return Err(rejection(REGISTER_PATH, resp, REGISTER_FALLBACK).await);
        }

        let bytes = resp
            .bytes()
            .await
            .map_err(|e| BackendError::from_reqwest(REGISTER_PATH, self.config.request_timeout, e))?;
        let account_id = parse_account_id(&bytes)?;
        tracing::info!(role = %credentials.role, account_id = %account_id, "Account created");
        Ok(account_id)
    }
}
