// src/analytics/mod.rs
pub mod harmonic;
