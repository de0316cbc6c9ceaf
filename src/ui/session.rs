//! Event loop hosting one spinner session.
//!
//! The loop owns [`SessionState`] and is the only place it is mutated. Three sources feed it:
//! terminal input, the action channel (quit requests from outside the loop) and the
//! wake-up deadline computed by [`next_wakeup`].

use std::future::Future;
use std::sync::Arc;
use std::time::Instant;

use color_eyre::eyre::Result;
use tokio::sync::mpsc;
use tokio::time::sleep_until;
use tracing::{debug, info};

use age_op_app::action::Action;
use age_op_app::cleanup::CleanupGuard;
use age_op_app::config::SessionConfig;
use age_op_app::effect_runner::EffectRunner;
use age_op_app::ports::Renderer;
use age_op_app::reducer::reduce;
use age_op_app::render_schedule::{due_action, next_wakeup};
use age_op_app::state::{SessionOutcome, SessionState};

use crate::event::Event;
use crate::event::handler::handle_event;
use crate::tui::TuiRunner;

const ACTION_CHANNEL_CAPACITY: usize = 16;

/// Where a session reads input from and draws its frames.
pub trait SessionTerminal: Send {
    /// Next input event. `None` once input is closed.
    fn next_event(&mut self) -> impl Future<Output = Option<Event>> + Send;

    fn renderer(&mut self) -> impl Renderer + '_;
}

/// Sends requests into a running session from outside its event loop.
#[derive(Debug, Clone)]
pub struct SessionHandle {
    action_tx: mpsc::Sender<Action>,
}

impl SessionHandle {
    /// Asks the loop to stop. No-op if the session already ended.
    pub async fn quit(&self) {
        if self.action_tx.send(Action::Quit).await.is_err() {
            debug!("quit requested after session ended");
        }
    }
}

pub struct SpinnerSession {
    config: SessionConfig,
    cleanup: Arc<CleanupGuard>,
    action_rx: mpsc::Receiver<Action>,
}

impl SpinnerSession {
    pub fn new(config: SessionConfig, cleanup: Arc<CleanupGuard>) -> (Self, SessionHandle) {
        let (action_tx, action_rx) = mpsc::channel(ACTION_CHANNEL_CAPACITY);
        let session = Self {
            config,
            cleanup,
            action_rx,
        };
        (session, SessionHandle { action_tx })
    }

    /// Runs the session on the real terminal. The terminal is restored even if the loop fails.
    pub async fn run(self) -> Result<SessionOutcome> {
        let mut tui = TuiRunner::new()?;
        tui.enter()?;

        let result = self.event_loop(&mut tui).await;
        let restored = tui.exit();

        let outcome = result?;
        restored?;
        Ok(outcome)
    }

    /// Runs the session on a terminal that is already prepared, then releases it.
    pub async fn run_on<T: SessionTerminal>(self, mut terminal: T) -> Result<SessionOutcome> {
        self.event_loop(&mut terminal).await
    }

    async fn event_loop<T: SessionTerminal>(mut self, terminal: &mut T) -> Result<SessionOutcome> {
        let mut state = SessionState::new(self.config, Instant::now());
        let effect_runner = EffectRunner::new(Arc::clone(&self.cleanup));

        info!(
            timeout_ms = self.config.timeout.as_millis(),
            "spinner session started"
        );

        loop {
            let wakeup = next_wakeup(&state);

            tokio::select! {
                // Input is reduced in place; the action channel only carries requests from
                // outside the loop
                Some(event) = terminal.next_event() => {
                    let action = handle_event(event);
                    if !action.is_none() {
                        dispatch(&mut state, action, &effect_runner, terminal)?;
                    }
                }
                Some(action) = self.action_rx.recv() => {
                    dispatch(&mut state, action, &effect_runner, terminal)?;
                }
                // Spinner tick or completion deadline reached
                () = async {
                    match wakeup {
                        Some(d) => sleep_until(d.into()).await,
                        None => std::future::pending::<()>().await,
                    }
                } => {
                    let action = due_action(&state, Instant::now());
                    dispatch(&mut state, action, &effect_runner, terminal)?;
                }
            }

            if state.should_quit {
                break;
            }
        }

        let outcome = state.outcome.unwrap_or(SessionOutcome::Terminated);
        info!(
            ?outcome,
            elapsed_ms = state.started_at.elapsed().as_millis(),
            "spinner session ended"
        );
        Ok(outcome)
    }
}

fn dispatch<T: SessionTerminal>(
    state: &mut SessionState,
    action: Action,
    effect_runner: &EffectRunner,
    terminal: &mut T,
) -> Result<()> {
    let effects = reduce(state, action, Instant::now());
    let mut renderer = terminal.renderer();
    effect_runner.run(effects, &mut renderer, state)
}
