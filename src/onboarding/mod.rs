//! Onboarding — the two-phase signup protocol.
//!
//! A submit action walks one [`OnboardingRun`] through collecting the form,
//! creating the account and submitting the verification dossier. The
//! [`Orchestrator`] drives the run and hands its single
//! [`SubmissionOutcome`] to the [`OnboardingUi`].

pub mod orchestrator;
pub mod outcome;
pub mod state;
pub mod ui;

pub use orchestrator::Orchestrator;
pub use outcome::{SUCCESS_MESSAGE, SubmissionOutcome};
pub use state::{OnboardingPhase, OnboardingRun};
pub use ui::{ConsoleUi, OnboardingUi};
