//! Pure functions for calculating session wake-ups.
//!
//! These functions are I/O-free and deterministic, suitable for use in the app layer.
//! The UI layer sleeps until the returned deadline and dispatches the due action.

use std::time::Instant;

use crate::action::Action;
use crate::state::SessionState;

/// Calculates the next instant the event loop must wake up without input.
///
/// Returns `None` once the session is done (caller can wait for quit or input only).
///
/// # Wake-up sources:
/// 1. Completion deadline (fires once)
/// 2. Spinner tick (self-rescheduling via the reducer)
pub fn next_wakeup(state: &SessionState) -> Option<Instant> {
    if !state.is_running() {
        return None;
    }
    Some(state.deadline.min(state.next_tick_at))
}

/// Maps a wake-up at `now` to the action that is due.
///
/// The completion timer wins when both are due; it never fires before the deadline.
pub fn due_action(state: &SessionState, now: Instant) -> Action {
    if !state.is_running() {
        return Action::None;
    }
    if now >= state.deadline {
        Action::Finished
    } else if now >= state.next_tick_at {
        Action::Tick
    } else {
        Action::None
    }
}
