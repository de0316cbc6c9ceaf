use std::sync::Arc;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum CleanupError {
    #[error("failed to release session resources: {0}")]
    Release(String),
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// Hook run once when a session is stopped early (interrupt key or termination signal).
///
/// No resources are held by the session today; implementations are the place to
/// release anything sensitive that a future session keeps in memory.
pub trait SessionCleanup: Send + Sync {
    fn cleanup(&self) -> Result<(), CleanupError>;
}

impl<T: SessionCleanup + ?Sized> SessionCleanup for Arc<T> {
    fn cleanup(&self) -> Result<(), CleanupError> {
        (**self).cleanup()
    }
}
