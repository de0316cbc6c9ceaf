//! Application layer: spinner session state, pure transitions and ports.

pub mod action;
pub mod cleanup;
pub mod config;
pub mod effect;
pub mod effect_runner;
pub mod ports;
pub mod reducer;
pub mod render_schedule;
pub mod spinner;
pub mod state;
