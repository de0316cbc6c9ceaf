use std::time::Instant;

use crate::config::SessionConfig;
use crate::spinner::{SPINNER_INTERVAL, SpinnerState};

pub const LOADING_LABEL: &str = "Loading...";
pub const DONE_MESSAGE: &str = "Hello, cruel world!";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Phase {
    #[default]
    Running,
    Done,
}

/// How the session ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionOutcome {
    /// Completion timer fired and the final message was shown
    Completed,
    /// Interrupt key pressed while running
    Interrupted,
    /// Quit requested from outside the loop (termination signal)
    Terminated,
}

#[derive(Debug, Clone)]
pub struct SessionState {
    pub config: SessionConfig,
    pub spinner: SpinnerState,
    pub phase: Phase,
    pub started_at: Instant,
    pub deadline: Instant,
    pub next_tick_at: Instant,
    pub should_quit: bool,
    pub outcome: Option<SessionOutcome>,
    pub final_frame_rendered: bool,
}

impl SessionState {
    pub fn new(config: SessionConfig, now: Instant) -> Self {
        Self {
            config,
            spinner: SpinnerState::new(),
            phase: Phase::Running,
            started_at: now,
            deadline: now + config.timeout,
            next_tick_at: now + SPINNER_INTERVAL,
            should_quit: false,
            outcome: None,
            final_frame_rendered: false,
        }
    }

    pub fn is_running(&self) -> bool {
        self.phase == Phase::Running
    }

    pub fn is_done(&self) -> bool {
        self.phase == Phase::Done
    }

    /// Text for the current frame, newline-terminated.
    pub fn view(&self) -> String {
        match self.phase {
            Phase::Running => format!("{} {}\n", self.spinner.glyph(), LOADING_LABEL),
            Phase::Done => format!("{DONE_MESSAGE}\n"),
        }
    }
}
