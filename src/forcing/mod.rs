// src/forcing/mod.rs
pub mod forcing;
pub mod superposition;
pub mod wind;

pub use forcing::{FnForcing, Forcing};
pub use superposition::Superposition;
pub use wind::{CabinWind, WindComponents, WindParams};
