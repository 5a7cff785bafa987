//! Onboarding run state machine — tracks which phase a submit action is in.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::OnboardingError;
use crate::form::Role;

use super::outcome::SubmissionOutcome;

/// The phases of one submit action.
///
/// Progresses linearly: Idle → Collecting → Provisioning → Submitting → Done.
/// Collecting and Provisioning may also jump straight to Done on failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OnboardingPhase {
    Idle,
    Collecting,
    Provisioning,
    Submitting,
    Done,
}

impl OnboardingPhase {
    /// Check if a transition from `self` to `target` is valid.
    pub fn can_transition_to(&self, target: OnboardingPhase) -> bool {
        use OnboardingPhase::*;
        matches!(
            (self, target),
            (Idle, Collecting)
                | (Collecting, Provisioning)
                | (Collecting, Done)
                | (Provisioning, Submitting)
                | (Provisioning, Done)
                | (Submitting, Done)
        )
    }

    /// Whether this phase is terminal (the run is over).
    pub fn is_terminal(&self) -> bool {
        matches!(self, Self::Done)
    }
}

impl Default for OnboardingPhase {
    fn default() -> Self {
        Self::Idle
    }
}

impl std::fmt::Display for OnboardingPhase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Self::Idle => "idle",
            Self::Collecting => "collecting",
            Self::Provisioning => "provisioning",
            Self::Submitting => "submitting",
            Self::Done => "done",
        };
        write!(f, "{s}")
    }
}

/// One pass through the state machine. Never reused across submit actions.
#[derive(Debug)]
pub struct OnboardingRun {
    id: Uuid,
    role: Role,
    phase: OnboardingPhase,
    outcome: Option<SubmissionOutcome>,
}

impl OnboardingRun {
    pub fn new(role: Role) -> Self {
        Self {
            id: Uuid::new_v4(),
            role,
            phase: OnboardingPhase::Idle,
            outcome: None,
        }
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn role(&self) -> Role {
        self.role
    }

    pub fn phase(&self) -> OnboardingPhase {
        self.phase
    }

    pub fn outcome(&self) -> Option<&SubmissionOutcome> {
        self.outcome.as_ref()
    }

    /// Move to a non-terminal phase.
    pub fn advance(&mut self, target: OnboardingPhase) -> Result<(), OnboardingError> {
        if target.is_terminal() || !self.phase.can_transition_to(target) {
            return Err(OnboardingError::InvalidTransition {
                from: self.phase,
                to: target,
            });
        }
        tracing::debug!(run_id = %self.id, from = %self.phase, to = %target, "Onboarding phase change");
        self.phase = target;
        Ok(())
    }

    /// Enter `Done` with the run's single outcome.
    pub fn finish(
        &mut self,
        outcome: SubmissionOutcome,
    ) -> Result<SubmissionOutcome, OnboardingError> {
        if !self.phase.can_transition_to(OnboardingPhase::Done) {
            return Err(OnboardingError::InvalidTransition {
                from: self.phase,
                to: OnboardingPhase::Done,
            });
        }
        self.phase = OnboardingPhase::Done;
        self.outcome = Some(outcome.clone());
        Ok(outcome)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn valid_transitions() {
        use OnboardingPhase::*;
        let transitions = [
            (Idle, Collecting),
            (Collecting, Provisioning),
            (Collecting, Done),
            (Provisioning, Submitting),
            (Provisioning, Done),
            (Submitting, Done),
        ];
        for (from, to) in transitions {
            assert!(
                from.can_transition_to(to),
                "{from} should transition to {to}"
            );
        }
    }

    #[test]
    fn invalid_transitions() {
        use OnboardingPhase::*;
        // Skip phases
        assert!(!Idle.can_transition_to(Provisioning));
        assert!(!Collecting.can_transition_to(Submitting));
        assert!(!Idle.can_transition_to(Done));
        // Go backward
        assert!(!Submitting.can_transition_to(Provisioning));
        // Terminal
        assert!(!Done.can_transition_to(Idle));
        assert!(!Done.can_transition_to(Done));
        // Self-transition
        assert!(!Provisioning.can_transition_to(Provisioning));
    }

    #[test]
    fn display_matches_serde() {
        use OnboardingPhase::*;
        for phase in [Idle, Collecting, Provisioning, Submitting, Done] {
            let json = serde_json::to_string(&phase).unwrap();
            assert_eq!(format!("\"{phase}\""), json, "mismatch for {phase:?}");
        }
    }

    #[test]
    fn run_walks_happy_path() {
        let mut run = OnboardingRun::new(Role::Investor);
        assert_eq!(run.phase(), OnboardingPhase::Idle);
        run.advance(OnboardingPhase::Collecting).unwrap();
        run.advance(OnboardingPhase::Provisioning).unwrap();
        run.advance(OnboardingPhase::Submitting).unwrap();
        let outcome = run.finish(SubmissionOutcome::Success).unwrap();
        assert_eq!(outcome, SubmissionOutcome::Success);
        assert!(run.phase().is_terminal());
        assert_eq!(run.outcome(), Some(&SubmissionOutcome::Success));
    }

    #[test]
    fn run_refuses_to_leave_done() {
        let mut run = OnboardingRun::new(Role::Business);
        run.advance(OnboardingPhase::Collecting).unwrap();
        run.finish(SubmissionOutcome::ValidationFailed("missing".into()))
            .unwrap();

        let err = run.advance(OnboardingPhase::Provisioning).unwrap_err();
        assert_eq!(
            err,
            OnboardingError::InvalidTransition {
                from: OnboardingPhase::Done,
                to: OnboardingPhase::Provisioning,
            }
        );
        assert!(run.finish(SubmissionOutcome::Success).is_err());
        assert_eq!(
            run.outcome(),
            Some(&SubmissionOutcome::ValidationFailed("missing".into()))
        );
    }

    #[test]
    fn advance_cannot_reach_done() {
        let mut run = OnboardingRun::new(Role::Investor);
        run.advance(OnboardingPhase::Collecting).unwrap();
        assert!(run.advance(OnboardingPhase::Done).is_err());
        assert_eq!(run.phase(), OnboardingPhase::Collecting);
    }

    #[test]
    fn runs_get_distinct_ids() {
        let a = OnboardingRun::new(Role::Investor);
        let b = OnboardingRun::new(Role::Investor);
        assert_ne!(a.id(), b.id());
        assert_eq!(a.role(), Role::Investor);
    }
}
