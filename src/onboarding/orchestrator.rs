//! Orchestrator — sequences account provisioning and profile submission for
//! one submit action and reports the outcome to the UI.

use std::future::Future;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use crate::backend::KycBackend;
use crate::backend::provisioning::REGISTER_PATH;
use crate::config::BackendConfig;
use crate::error::{BackendError, OnboardingError};
use crate::form::{FormSource, Role, collect};

use super::outcome::SubmissionOutcome;
use super::state::{OnboardingPhase, OnboardingRun};
use super::ui::OnboardingUi;

/// Runs the two-phase signup protocol.
///
/// At most one run is in flight per orchestrator; a submit that arrives while
/// another is running is refused rather than queued.
pub struct Orchestrator {
    backend: Arc<dyn KycBackend>,
    ui: Arc<dyn OnboardingUi>,
    config: BackendConfig,
    in_flight: AtomicBool,
}

impl Orchestrator {
    pub fn new(
        backend: Arc<dyn KycBackend>,
        ui: Arc<dyn OnboardingUi>,
        config: BackendConfig,
    ) -> Self {
        Self {
            backend,
            ui,
            config,
            in_flight: AtomicBool::new(false),
        }
    }

    /// Whether a run is currently in flight (the UI should disable submit).
    pub fn is_busy(&self) -> bool {
        self.in_flight.load(Ordering::Acquire)
    }

    /// Handle one submit action for `role`.
    ///
    /// Returns the run's outcome after the UI has been notified, or
    /// [`OnboardingError::RunInProgress`] without touching the network or the
    /// UI when another run has not finished yet.
    pub async fn submit(
        &self,
        role: Role,
        source: &dyn FormSource,
    ) -> Result<SubmissionOutcome, OnboardingError> {
        let Some(_guard) = InFlightGuard::acquire(&self.in_flight) else {
            tracing::warn!(role = %role, "Submit ignored: a run is already in flight");
            return Err(OnboardingError::RunInProgress);
        };

        let mut run = OnboardingRun::new(role);
        tracing::info!(run_id = %run.id(), role = %role, "Onboarding run started");

        let outcome = self.drive(&mut run, source).await?;
        self.report(&run, &outcome).await;
        Ok(outcome)
    }

    async fn drive(
        &self,
        run: &mut OnboardingRun,
        source: &dyn FormSource,
    ) -> Result<SubmissionOutcome, OnboardingError> {
        run.advance(OnboardingPhase::Collecting)?;
        let record = match collect(run.role(), source) {
            Ok(record) => record,
            Err(e) => return run.finish(SubmissionOutcome::ValidationFailed(e.to_string())),
        };
        let (credentials, dossier) = record.into_parts();

        run.advance(OnboardingPhase::Provisioning)?;
        let created = self
            .bounded(REGISTER_PATH, self.backend.create_account(&credentials))
            .await;
        drop(credentials);

        let account_id = match created {
            Ok(id) if !id.as_str().is_empty() => id,
            Ok(_) => {
                let e = BackendError::InvalidResponse(
                    "registration response did not contain an account id".to_string(),
                );
                return run.finish(SubmissionOutcome::AccountCreationFailed(e.user_message()));
            }
            Err(e) => {
                tracing::warn!(run_id = %run.id(), error = %e, "Account creation failed");
                return run.finish(SubmissionOutcome::AccountCreationFailed(e.user_message()));
            }
        };

        run.advance(OnboardingPhase::Submitting)?;
        let path = run.role().submission_path();
        match self
            .bounded(path, self.backend.submit_profile(&account_id, &dossier))
            .await
        {
            Ok(()) => run.finish(SubmissionOutcome::Success),
            Err(e) => {
                // The account stays behind without a profile; nothing client-side can undo it.
                tracing::warn!(
                    run_id = %run.id(),
                    account_id = %account_id,
                    error = %e,
                    "Profile submission failed after account creation"
                );
                run.finish(SubmissionOutcome::ProfileSubmissionFailed(e.user_message()))
            }
        }
    }

    /// Await one backend call, giving up after the configured request timeout.
    async fn bounded<T, F>(&self, endpoint: &str, call: F) -> Result<T, BackendError>
    where
        F: Future<Output = Result<T, BackendError>>,
    {
        let timeout = self.config.request_timeout;
        match tokio::time::timeout(timeout, call).await {
            Ok(result) => result,
            Err(_) => Err(BackendError::Timeout {
                endpoint: endpoint.to_string(),
                timeout,
            }),
        }
    }

    async fn report(&self, run: &OnboardingRun, outcome: &SubmissionOutcome) {
        tracing::info!(
            run_id = %run.id(),
            role = %run.role(),
            outcome = %outcome,
            "Onboarding run finished"
        );
        self.ui.notify(&outcome.notification()).await;
        if outcome.is_success() {
            self.ui.navigate(&self.config.login_destination).await;
        }
    }
}

/// Holds the in-flight flag for the duration of a run, including when the
/// run's future is dropped early.
struct InFlightGuard<'a>(&'a AtomicBool);

impl<'a> InFlightGuard<'a> {
    fn acquire(flag: &'a AtomicBool) -> Option<Self> {
        flag.compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .ok()
            .map(|_| Self(flag))
    }
}

impl Drop for InFlightGuard<'_> {
    fn drop(&mut self) {
        self.0.store(false, Ordering::Release);
    }
}
