// src/solvers/mod.rs
pub mod recurrence;
