//! Simulated external identity provider.
//!
//! A stand-in for a real OAuth collaborator: a fixed sequence of labeled
//! steps the login view plays through before offering the identity picker.
//! The flow is a plain value; abandoning it (navigating away) just drops
//! the value. The session is only written after an identity is selected,
//! so an abandoned flow can never leave partial login state.

/// Steps of the simulated provider hand-off, in order.
pub const SIGN_IN_STEPS: [&str; 4] = [
    "Redirecting to identity provider...",
    "Authorizing with Google Workspace...",
    "Fetching account details...",
    "Checking TARCZA permissions...",
];

/// Cosmetic pause between steps, in milliseconds.
pub const STEP_DELAY_MS: u32 = 800;

/// Progress report after advancing the flow one step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SignInProgress {
    InProgress { percent: u8, label: &'static str },
    Complete,
}

/// The in-flight simulated authentication sequence.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SignInFlow {
    completed_steps: usize,
}

impl SignInFlow {
    pub fn new() -> Self {
        Self { completed_steps: 0 }
    }

    /// Completion percentage, 0–100.
    pub fn percent(&self) -> u8 {
        (self.completed_steps * 100 / SIGN_IN_STEPS.len()) as u8
    }

    pub fn is_complete(&self) -> bool {
        self.completed_steps >= SIGN_IN_STEPS.len()
    }

    /// Complete the next step. Returns the progress made, or `Complete`
    /// once every step has already run.
    pub fn advance(&mut self) -> SignInProgress {
        if self.is_complete() {
            return SignInProgress::Complete;
        }
        let label = SIGN_IN_STEPS[self.completed_steps];
        self.completed_steps += 1;
        if self.is_complete() {
            tracing::info!("simulated sign-in sequence complete");
            SignInProgress::Complete
        } else {
            SignInProgress::InProgress {
                percent: self.percent(),
                label,
            }
        }
    }
}
