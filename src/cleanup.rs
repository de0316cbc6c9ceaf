use std::io::{self, Write};
use std::sync::atomic::{AtomicBool, Ordering};

use tracing::info;

use age_op_app::ports::{CleanupError, SessionCleanup};

pub const CLEANUP_NOTICE: &str = "cleanup: no session resources to release";

/// Default cleanup hook: releases nothing and says so.
///
/// The notice is held while the session owns the terminal and written by
/// [`report`](Self::report) once the terminal is restored.
#[derive(Debug, Default)]
pub struct DiagnosticCleanup {
    pending: AtomicBool,
}

impl DiagnosticCleanup {
    pub fn new() -> Self {
        Self::default()
    }

    /// Writes the notice if cleanup ran since the last report.
    pub fn report(&self, out: &mut impl Write) -> io::Result<()> {
        if self.pending.swap(false, Ordering::AcqRel) {
            writeln!(out, "{CLEANUP_NOTICE}")?;
        }
        Ok(())
    }
}

impl SessionCleanup for DiagnosticCleanup {
    fn cleanup(&self) -> Result<(), CleanupError> {
        self.pending.store(true, Ordering::Release);
        info!("{CLEANUP_NOTICE}");
        Ok(())
    }
}
