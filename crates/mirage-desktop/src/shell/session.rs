//! Desktop session lifecycle

use serde::{Deserialize, Serialize};

/// Phase of the desktop session.
///
/// Pointer input only reaches the desktop in the `Desktop` phase; the
/// shutdown prompt keeps the desktop visible but inert behind the dialog,
/// and `Shutdown` is terminal.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SessionPhase {
    #[default]
    Boot,
    Desktop,
    ShutdownPrompt,
    Shutdown,
}

/// Session phase state machine
#[derive(Clone, Copy, Debug, Default, Serialize, Deserialize)]
pub struct Session {
    phase: SessionPhase,
}

impl Session {
    /// A fresh session in the boot phase
    pub fn new() -> Self {
        Self::default()
    }

    /// Current phase
    pub fn phase(&self) -> SessionPhase {
        self.phase
    }

    /// Whether desktop pointer input is live
    pub fn accepts_input(&self) -> bool {
        self.phase == SessionPhase::Desktop
    }

    /// Leave the boot screen for the desktop
    pub fn finish_boot(&mut self) {
        if self.phase == SessionPhase::Boot {
            self.phase = SessionPhase::Desktop;
        }
    }

    /// Raise the shutdown prompt over the desktop
    pub fn request_shutdown(&mut self) {
        if self.phase == SessionPhase::Desktop {
            self.phase = SessionPhase::ShutdownPrompt;
        }
    }

    /// Dismiss the prompt and return to the desktop
    pub fn cancel_shutdown(&mut self) {
        if self.phase == SessionPhase::ShutdownPrompt {
            self.phase = SessionPhase::Desktop;
        }
    }

    /// Confirm the prompt; the session ends
    pub fn confirm_shutdown(&mut self) {
        if self.phase == SessionPhase::ShutdownPrompt {
            self.phase = SessionPhase::Shutdown;
        }
    }
}
