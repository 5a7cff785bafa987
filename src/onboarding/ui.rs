//! The UI side of a run: one notification, optional navigation.

use async_trait::async_trait;

/// What the orchestrator needs from the surrounding UI.
#[async_trait]
pub trait OnboardingUi: Send + Sync {
    /// Show the run's blocking notification. Called exactly once per run.
    async fn notify(&self, message: &str);

    /// Leave the signup page. Called once, and only after a successful run.
    async fn navigate(&self, destination: &str);
}

/// Terminal UI: notifications and navigation go to stderr.
pub struct ConsoleUi;

impl ConsoleUi {
    pub fn new() -> Self {
        Self
    }
}

impl Default for ConsoleUi {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl OnboardingUi for ConsoleUi {
    async fn notify(&self, message: &str) {
        eprintln!("\n{message}\n");
    }

    async fn navigate(&self, destination: &str) {
        eprintln!("→ Continue at {destination}");
    }
}
