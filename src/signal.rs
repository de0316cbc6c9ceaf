//! Watches for process-level termination requests (SIGTERM).
//!
//! Ctrl+C is not handled here: the session keeps the terminal in raw mode and reads
//! it as a key.

use std::io;

#[cfg(unix)]
use tokio::signal::unix::{Signal, SignalKind, signal};

pub struct TerminateSignal {
    #[cfg(unix)]
    inner: Signal,
}

impl TerminateSignal {
    pub const NAME: &'static str = "SIGTERM";
    /// Human-readable description, as `strsignal(3)` prints it
    pub const DESCRIPTION: &'static str = "terminated";

    /// Registers the handler. Must be called before the session starts so an early
    /// signal is not lost.
    pub fn install() -> io::Result<Self> {
        #[cfg(unix)]
        {
            Ok(Self {
                inner: signal(SignalKind::terminate())?,
            })
        }
        #[cfg(not(unix))]
        {
            Ok(Self {})
        }
    }

    /// Resolves once SIGTERM is delivered. Never resolves on platforms without it.
    pub async fn recv(&mut self) {
        #[cfg(unix)]
        {
            if self.inner.recv().await.is_some() {
                return;
            }
        }
        std::future::pending::<()>().await;
    }
}
