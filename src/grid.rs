// src/grid.rs
//! Uniform Time Grid
//!
//! # Discretization Convention
//!
//! The interval `[0, T)` is covered by `n` equally spaced samples:
//! ```text
//! t_k = k·ε,   ε = T / n,   k = 0 .. n-1
//! ```
//!
//! The spacing ε (the time quantum) is fixed before solving and shared by
//! the forcing sampler and the recurrence coefficients, so the grid is the
//! single source of truth for it.

use std::f64;

/// Uniform time grid over `[0, t_end)` with a fixed number of samples
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TimeGrid {
    t_end: f64,
    steps: usize,
}

impl TimeGrid {
    pub fn new(t_end: f64, steps: usize) -> Self {
        TimeGrid { t_end, steps }
    }

    /// Time quantum ε = T / n
    pub fn epsilon(&self) -> f64 {
        self.t_end / self.steps as f64
    }

    /// Number of grid samples
    pub fn len(&self) -> usize {
        self.steps
    }

    pub fn is_empty(&self) -> bool {
        self.steps == 0
    }

    /// End time T of the covered interval
    pub fn t_end(&self) -> f64 {
        self.t_end
    }

    /// Sample time t_k = k·ε
    pub fn time(&self, k: usize) -> f64 {
        k as f64 * self.epsilon()
    }

    /// All sample times, index-aligned with forcing and solution sequences
    pub fn times(&self) -> Vec<f64> {
        (0..self.steps).map(|k| self.time(k)).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_spacing_is_constant() {
        let grid = TimeGrid::new(120.0, 6000);
        assert_eq!(grid.epsilon(), 0.02);

        let times = grid.times();
        assert_eq!(times.len(), 6000);
        for w in times.windows(2) {
            assert!((w[1] - w[0] - grid.epsilon()).abs() < 1e-12);
        }
    }

    #[test]
    fn test_starts_at_zero() {
        let grid = TimeGrid::new(10.0, 100);
        assert_eq!(grid.time(0), 0.0);
        assert_eq!(grid.times()[0], 0.0);
    }

    #[test]
    fn test_last_sample_before_t_end() {
        let grid = TimeGrid::new(10.0, 100);
        let last = grid.time(grid.len() - 1);
        assert!(last < grid.t_end());
        assert!((last - 9.9).abs() < 1e-12);
    }
}
