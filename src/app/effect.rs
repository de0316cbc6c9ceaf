//! Side effects returned by the reducer, executed by EffectRunner.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
    Render,

    /// Runs the session cleanup hook (at most once per process)
    Cleanup,
}
