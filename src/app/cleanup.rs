use std::sync::atomic::{AtomicBool, Ordering};

use tracing::{debug, warn};

use crate::ports::SessionCleanup;

/// Runs a [`SessionCleanup`] hook at most once, whichever shutdown path gets there first.
///
/// Shared between the event loop (interrupt key) and the signal watcher (SIGTERM).
pub struct CleanupGuard {
    hook: Box<dyn SessionCleanup>,
    done: AtomicBool,
}

impl CleanupGuard {
    pub fn new(hook: impl SessionCleanup + 'static) -> Self {
        Self {
            hook: Box::new(hook),
            done: AtomicBool::new(false),
        }
    }

    /// Returns true if this call ran the hook.
    ///
    /// A failing hook is logged; the session still shuts down.
    pub fn run(&self) -> bool {
        if self.done.swap(true, Ordering::AcqRel) {
            debug!("cleanup already ran, skipping");
            return false;
        }

        if let Err(e) = self.hook.cleanup() {
            warn!(error = %e, "session cleanup failed");
        }
        true
    }

    pub fn has_run(&self) -> bool {
        self.done.load(Ordering::Acquire)
    }
}

impl std::fmt::Debug for CleanupGuard {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CleanupGuard")
            .field("done", &self.has_run())
            .finish_non_exhaustive()
    }
}
