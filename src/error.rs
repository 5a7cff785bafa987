//! Error types for the onboarding client.

use std::time::Duration;

use crate::onboarding::OnboardingPhase;

/// Top-level error type.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    #[error("Form error: {0}")]
    Form(#[from] FormError),

    #[error("Backend error: {0}")]
    Backend(#[from] BackendError),

    #[error("Onboarding error: {0}")]
    Onboarding(#[from] OnboardingError),
}

/// Configuration-related errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid configuration value for {key}: {message}")]
    InvalidValue { key: String, message: String },
}

/// Locally detected form problems. No network call is made when one occurs.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("Please fill in all required fields")]
    MissingRequiredFields,
}

/// Failures while reading form input (manifests and attached files).
#[derive(Debug, thiserror::Error)]
pub enum FormError {
    #[error("Failed to read {path}: {source}")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Malformed form manifest {path}: {source}")]
    Manifest {
        path: String,
        #[source]
        source: serde_json::Error,
    },
}

/// Failures talking to the verification backend.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BackendError {
    /// The backend answered with a non-success status.
    #[error("{endpoint} returned {status}: {message}")]
    Rejected {
        endpoint: String,
        status: u16,
        message: String,
    },

    /// No response at all (connection refused, DNS, TLS, ...).
    #[error("Transport error: {0}")]
    Transport(String),

    #[error("{endpoint} timed out after {timeout:?}")]
    Timeout { endpoint: String, timeout: Duration },

    /// A success status whose body could not be used.
    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    /// The request body could not be built.
    #[error("Failed to encode request: {0}")]
    Encoding(String),
}

impl BackendError {
    /// The text shown to the end user for this failure.
    pub fn user_message(&self) -> String {
        match self {
            Self::Rejected { message, .. } => message.clone(),
            Self::Transport(message) => message.clone(),
            Self::Timeout { timeout, .. } => {
                format!("Request timed out after {} seconds", timeout.as_secs())
            }
            Self::InvalidResponse(message) | Self::Encoding(message) => message.clone(),
        }
    }

    /// Map a reqwest failure that produced no usable response.
    pub(crate) fn from_reqwest(endpoint: &str, timeout: Duration, e: reqwest::Error) -> Self {
        if e.is_timeout() {
            Self::Timeout {
                endpoint: endpoint.to_string(),
                timeout,
            }
        } else {
            Self::Transport(e.to_string())
        }
    }
}

/// Orchestration-level errors that are not run outcomes.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum OnboardingError {
    #[error("A submission is already in progress")]
    RunInProgress,

    #[error("Cannot transition from {from} to {to}")]
    InvalidTransition {
        from: OnboardingPhase,
        to: OnboardingPhase,
    },
}

/// Result type alias for the crate.
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejected_user_message_is_backend_detail() {
        let err = BackendError::Rejected {
            endpoint: "/register".into(),
            status: 400,
            message: "Email already registered".into(),
        };
        assert_eq!(err.user_message(), "Email already registered");
        assert_eq!(
            err.to_string(),
            "/register returned 400: Email already registered"
        );
    }

    #[test]
    fn timeout_user_message_names_duration() {
        let err = BackendError::Timeout {
            endpoint: "/register".into(),
            timeout: Duration::from_secs(30),
        };
        assert_eq!(err.user_message(), "Request timed out after 30 seconds");
    }

    #[test]
    fn validation_error_message() {
        let err: Error = ValidationError::MissingRequiredFields.into();
        assert_eq!(
            err.to_string(),
            "Validation error: Please fill in all required fields"
        );
    }
}
