//! The single result of an onboarding run.

/// Shown after both calls succeed.
pub const SUCCESS_MESSAGE: &str = "Registration successful! Please wait for verification.";

/// How a submit action ended. Produced once per run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmissionOutcome {
    /// Account created and dossier accepted.
    Success,
    /// Email or password missing; nothing was sent.
    ValidationFailed(String),
    /// `POST /register` failed; no profile was submitted.
    AccountCreationFailed(String),
    /// The account exists but the dossier was not accepted.
    ProfileSubmissionFailed(String),
}

impl SubmissionOutcome {
    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success)
    }

    /// The failure message, if the run failed.
    pub fn message(&self) -> Option<&str> {
        match self {
            Self::Success => None,
            Self::ValidationFailed(m)
            | Self::AccountCreationFailed(m)
            | Self::ProfileSubmissionFailed(m) => Some(m),
        }
    }

    /// Text for the one blocking notification the UI shows.
    pub fn notification(&self) -> String {
        match self {
            Self::Success => SUCCESS_MESSAGE.to_string(),
            Self::ValidationFailed(m) => m.clone(),
            Self::AccountCreationFailed(m) | Self::ProfileSubmissionFailed(m) => {
                format!("Error: {m}")
            }
        }
    }
}

impl std::fmt::Display for SubmissionOutcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Success => write!(f, "success"),
            Self::ValidationFailed(m) => write!(f, "validation failed: {m}"),
            Self::AccountCreationFailed(m) => write!(f, "account creation failed: {m}"),
            Self::ProfileSubmissionFailed(m) => write!(f, "profile submission failed: {m}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn notifications() {
        assert_eq!(SubmissionOutcome::Success.notification(), SUCCESS_MESSAGE);
        assert_eq!(
            SubmissionOutcome::ValidationFailed("Please fill in all required fields".into())
                .notification(),
            "Please fill in all required fields"
        );
        assert_eq!(
            SubmissionOutcome::ProfileSubmissionFailed("invalid tax_number".into())
                .notification(),
            "Error: invalid tax_number"
        );
    }

    #[test]
    fn message_only_on_failure() {
        assert_eq!(SubmissionOutcome::Success.message(), None);
        assert!(SubmissionOutcome::Success.is_success());
        let failed = SubmissionOutcome::AccountCreationFailed("Email already registered".into());
        assert_eq!(failed.message(), Some("Email already registered"));
        assert!(!failed.is_success());
    }
}
