//! Pure reducer: state transitions only, no I/O.
//!
//! # Purity Rules
//!
//! The reducer MUST NOT:
//! - Call `Instant::now()` (time is passed as `now` parameter)
//! - Perform I/O operations, including running the cleanup hook
//! - Spawn async tasks
//!
//! Anything with side effects is returned as an [`Effect`].

use std::time::Instant;

use crate::action::Action;
use crate::effect::Effect;
use crate::spinner::SPINNER_INTERVAL;
use crate::state::{Phase, SessionOutcome, SessionState};

pub fn reduce(state: &mut SessionState, action: Action, now: Instant) -> Vec<Effect> {
    match action {
        Action::None => vec![],
        Action::Tick => {
            if !accepts_events(state) {
                return vec![];
            }
            state.spinner.tick();
            state.next_tick_at = now + SPINNER_INTERVAL;
            vec![Effect::Render]
        }
        Action::Finished => {
            if !accepts_events(state) {
                return vec![];
            }
            state.phase = Phase::Done;
            state.should_quit = true;
            state.outcome = Some(SessionOutcome::Completed);
            vec![Effect::Render]
        }
        Action::Interrupt => {
            if !accepts_events(state) {
                return vec![];
            }
            state.should_quit = true;
            state.outcome = Some(SessionOutcome::Interrupted);
            vec![Effect::Cleanup]
        }
        // Cleanup already ran on the caller's side before asking the loop to quit
        Action::Quit => {
            state.should_quit = true;
            state.outcome.get_or_insert(SessionOutcome::Terminated);
            vec![]
        }
        Action::Render => {
            if state.final_frame_rendered {
                vec![]
            } else {
                vec![Effect::Render]
            }
        }
    }
}

/// Timer and key events only matter while running and before a quit was decided.
fn accepts_events(state: &SessionState) -> bool {
    state.is_running() && !state.should_quit
}
