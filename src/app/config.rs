use std::time::Duration;

pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(2);

/// Settings for one spinner session, fixed for its whole lifetime.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionConfig {
    pub timeout: Duration,
    pub verbose: bool,
}

impl SessionConfig {
    pub fn new(timeout: Duration, verbose: bool) -> Self {
        Self { timeout, verbose }
    }

    /// Negative timeouts are clamped to zero: the session completes at its first wake-up.
    pub fn from_secs(timeout_secs: i64, verbose: bool) -> Self {
        let secs = u64::try_from(timeout_secs).unwrap_or(0);
        Self::new(Duration::from_secs(secs), verbose)
    }
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self::new(DEFAULT_TIMEOUT, false)
    }
}
