pub mod cleanup;
pub mod renderer;

pub use cleanup::{CleanupError, SessionCleanup};
pub use renderer::Renderer;
