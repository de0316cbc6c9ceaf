//! Terminal layer: crossterm input, ratatui rendering and the session event loop.

pub mod adapters;
pub mod components;
pub mod event;
pub mod session;
#[cfg(any(test, feature = "test-support"))]
pub mod testing;
pub mod theme;
pub mod tui;
