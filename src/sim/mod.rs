// src/sim/mod.rs
pub mod engine;

pub use engine::{sample_forcing, simulate_sway, SwayConfig, Trajectory};
