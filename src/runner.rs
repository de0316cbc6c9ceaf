//! Hosts the spinner session and races it against SIGTERM.

use std::future::Future;
use std::io::Write;
use std::sync::Arc;

use color_eyre::eyre::Result;
use tokio::task::JoinHandle;
use tracing::{info, warn};

use age_op_app::cleanup::CleanupGuard;
use age_op_app::config::SessionConfig;
use age_op_app::state::SessionOutcome;
use age_op_ui::session::{SessionHandle, SpinnerSession};

use crate::cleanup::DiagnosticCleanup;
use crate::signal::TerminateSignal;

/// How a supervised session came to an end.
#[derive(Debug, PartialEq, Eq)]
pub enum SessionExit {
    /// The session ended on its own (completion timer or interrupt key)
    Finished(SessionOutcome),
    /// The termination signal came first. Holds what the session reported once stopped,
    /// `None` if it failed while stopping.
    Signalled(Option<SessionOutcome>),
}

pub async fn run_spinner(config: SessionConfig, out: &mut impl Write) -> Result<()> {
    if config.verbose {
        writeln!(out, "Verbose mode enabled")?;
        writeln!(out, "Timeout: {} seconds", config.timeout.as_secs())?;
        out.flush()?;
    }

    let mut terminate = TerminateSignal::install()?;
    let diagnostics = Arc::new(DiagnosticCleanup::new());
    let cleanup = Arc::new(CleanupGuard::new(Arc::clone(&diagnostics)));
    let (session, handle) = SpinnerSession::new(config, Arc::clone(&cleanup));
    let task = tokio::spawn(session.run());

    // The session has released the terminal by the time supervise returns
    let exit = supervise(task, &handle, &cleanup, terminate.recv()).await;
    report_exit(exit.as_ref().ok(), config.verbose, &diagnostics, out)?;

    exit.map(|_| ())
}

/// Writes what happened after the session let go of the terminal.
fn report_exit(
    exit: Option<&SessionExit>,
    verbose: bool,
    diagnostics: &DiagnosticCleanup,
    out: &mut impl Write,
) -> std::io::Result<()> {
    if verbose && matches!(exit, Some(SessionExit::Signalled(_))) {
        writeln!(out, "\nReceived signal: {}", TerminateSignal::DESCRIPTION)?;
    }
    diagnostics.report(out)
}

/// Waits for the session task or `terminate`, whichever resolves first.
///
/// On termination the cleanup hook runs before the loop is asked to quit, and the task is
/// awaited so the terminal is restored before returning.
pub async fn supervise(
    mut task: JoinHandle<Result<SessionOutcome>>,
    handle: &SessionHandle,
    cleanup: &CleanupGuard,
    terminate: impl Future<Output = ()>,
) -> Result<SessionExit> {
    tokio::select! {
        joined = &mut task => {
            let outcome = joined??;
            info!(?outcome, "session finished");
            Ok(SessionExit::Finished(outcome))
        }
        () = terminate => {
            info!(signal = TerminateSignal::NAME, "termination signal received");
            cleanup.run();
            handle.quit().await;
            let outcome = match task.await {
                Ok(Ok(outcome)) => {
                    info!(?outcome, "session stopped after signal");
                    Some(outcome)
                }
                Ok(Err(e)) => {
                    warn!(error = %e, "session failed while stopping");
                    None
                }
                Err(e) => {
                    warn!(error = %e, "session task did not stop cleanly");
                    None
                }
            };
            Ok(SessionExit::Signalled(outcome))
        }
    }
}
