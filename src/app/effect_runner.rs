//! Executes side effects returned by the reducer.

use std::sync::Arc;

use color_eyre::eyre::Result;
use tracing::{debug, info};

use crate::cleanup::CleanupGuard;
use crate::effect::Effect;
use crate::ports::Renderer;
use crate::state::SessionState;

pub struct EffectRunner {
    cleanup: Arc<CleanupGuard>,
}

impl EffectRunner {
    pub fn new(cleanup: Arc<CleanupGuard>) -> Self {
        Self { cleanup }
    }

    pub fn run(
        &self,
        effects: Vec<Effect>,
        renderer: &mut impl Renderer,
        state: &mut SessionState,
    ) -> Result<()> {
        for effect in effects {
            self.run_single(effect, renderer, state)?;
        }
        Ok(())
    }

    fn run_single(
        &self,
        effect: Effect,
        renderer: &mut impl Renderer,
        state: &mut SessionState,
    ) -> Result<()> {
        match effect {
            Effect::Render => {
                // The final message is drawn exactly once
                if state.final_frame_rendered {
                    return Ok(());
                }
                renderer.draw(state)?;
                if state.is_done() {
                    state.final_frame_rendered = true;
                    debug!("final frame rendered");
                }
                Ok(())
            }
            Effect::Cleanup => {
                if self.cleanup.run() {
                    info!("session cleanup ran");
                }
                Ok(())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use std::time::Instant;

    use color_eyre::eyre::eyre;
    use mockall::mock;

    use super::*;
    use crate::config::SessionConfig;
    use crate::ports::{CleanupError, SessionCleanup};
    use crate::state::Phase;

    mock! {
        pub Draw {}

        impl Renderer for Draw {
            fn draw(&mut self, state: &SessionState) -> Result<()>;
        }
    }

    mock! {
        pub Hook {}

        impl SessionCleanup for Hook {
            fn cleanup(&self) -> Result<(), CleanupError>;
        }
    }

    fn runner_with_hook(times: usize) -> EffectRunner {
        let mut hook = MockHook::new();
        hook.expect_cleanup().times(times).returning(|| Ok(()));
        EffectRunner::new(Arc::new(CleanupGuard::new(hook)))
    }

    fn create_test_state() -> SessionState {
        SessionState::new(SessionConfig::default(), Instant::now())
    }

    #[test]
    fn render_draws_running_frame() {
        let runner = runner_with_hook(0);
        let mut renderer = MockDraw::new();
        renderer
            .expect_draw()
            .withf(|state| state.view() == "⣾ Loading...\n")
            .times(1)
            .returning(|_| Ok(()));
        let mut state = create_test_state();

        runner
            .run(vec![Effect::Render], &mut renderer, &mut state)
            .unwrap();

        assert!(!state.final_frame_rendered);
    }

    #[test]
    fn final_frame_is_drawn_once() {
        let runner = runner_with_hook(0);
        let mut renderer = MockDraw::new();
        renderer.expect_draw().times(1).returning(|_| Ok(()));
        let mut state = create_test_state();
        state.phase = Phase::Done;

        runner
            .run(
                vec![Effect::Render, Effect::Render],
                &mut renderer,
                &mut state,
            )
            .unwrap();

        assert!(state.final_frame_rendered);
    }

    #[test]
    fn draw_error_is_propagated() {
        let runner = runner_with_hook(0);
        let mut renderer = MockDraw::new();
        renderer
            .expect_draw()
            .returning(|_| Err(eyre!("terminal gone")));
        let mut state = create_test_state();

        let result = runner.run(vec![Effect::Render], &mut renderer, &mut state);

        assert!(result.is_err());
    }

    #[test]
    fn cleanup_runs_hook_once_across_effects() {
        let runner = runner_with_hook(1);
        let mut renderer = MockDraw::new();
        renderer.expect_draw().never();
        let mut state = create_test_state();

        runner
            .run(
                vec![Effect::Cleanup, Effect::Cleanup],
                &mut renderer,
                &mut state,
            )
            .unwrap();
    }
}
