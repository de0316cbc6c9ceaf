pub mod cleanup;
pub mod cli;
pub mod commands;
pub mod error;
pub mod logging;
pub mod runner;
pub mod signal;

pub use age_op_app as app;
pub use age_op_ui as ui;
