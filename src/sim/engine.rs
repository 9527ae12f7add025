// src/sim/engine.rs
use crate::error::{validation::*, FdError, FdResult};
use crate::forcing::{CabinWind, Forcing, WindComponents, WindParams};
use crate::grid::TimeGrid;
use crate::solvers::recurrence::solve_recurrence;
use rayon::prelude::*;
use std::f64;

/// Configuration for a cabin-sway simulation run
#[derive(Clone)]
pub struct SwayConfig {
    /// Stiffness coefficient α of the restoring term, rad²/s² (g/L for a pendulum)
    pub alpha: f64,
    /// Simulated duration T, seconds
    pub t_end: f64,
    /// Number of grid samples n; the time quantum is ε = T / n
    pub steps: usize,
    /// Initial displacement y_0, rad
    pub theta0: f64,
    /// Displacement y_1 at the first step, rad (encodes the initial velocity)
    pub theta1: f64,
    /// Which wind load terms contribute to the forcing
    pub components: WindComponents,
    /// Physical wind parameters
    pub wind: WindParams,
}

impl SwayConfig {
    /// Validate the simulation configuration
    pub fn validate(&self) -> FdResult<()> {
        validate_positive("alpha", self.alpha)?;
        validate_positive("t_end", self.t_end)?;
        validate_steps(self.steps)?;
        validate_finite("theta0", self.theta0)?;
        validate_finite("theta1", self.theta1)?;
        validate_finite("mean_load", self.wind.mean_load)?;
        validate_finite("gust_amplitude", self.wind.gust_amplitude)?;
        validate_positive("gust_width", self.wind.gust_width)?;
        validate_finite("vortex_amplitude", self.wind.vortex_amplitude)?;
        validate_finite("vortex_omega", self.wind.vortex_omega)?;
        validate_finite("startup_amplitude", self.wind.startup_amplitude)?;
        validate_non_negative("startup_decay", self.wind.startup_decay)?;

        // Explicit central differencing of y'' + αy blows up once ε√α
        // reaches 2; reject the grid before burning time on garbage.
        let epsilon = self.grid().epsilon();
        if epsilon * self.alpha.sqrt() >= 2.0 {
            return Err(FdError::UnstableScheme {
                epsilon,
                alpha: self.alpha,
                limit: 2.0,
            });
        }

        Ok(())
    }

    /// The uniform time grid this configuration solves on
    pub fn grid(&self) -> TimeGrid {
        TimeGrid::new(self.t_end, self.steps)
    }

    /// Recurrence coefficients (a, b) = (2 − αε², −1)
    ///
    /// b = −1 comes from the y_{k-1} term of the central difference and is
    /// a structural constant of the scheme, not a tunable parameter.
    pub fn coefficients(&self) -> (f64, f64) {
        let epsilon = self.grid().epsilon();
        (2.0 - self.alpha * epsilon * epsilon, -1.0)
    }
}

impl Default for SwayConfig {
    fn default() -> Self {
        SwayConfig {
            // 8 m suspension arm: α = g/L
            alpha: 9.81 / 8.0,
            t_end: 120.0,
            steps: 6000,
            theta0: 0.0,
            theta1: 0.0,
            components: WindComponents::all(),
            wind: WindParams::default(),
        }
    }
}

/// Discretized solution trajectory, index-aligned with its time grid
#[derive(Debug, Clone)]
pub struct Trajectory {
    /// Sample times t_k
    pub time: Vec<f64>,
    /// Angular displacement y_k at each sample, rad
    pub theta: Vec<f64>,
}

impl Trajectory {
    pub fn len(&self) -> usize {
        self.theta.len()
    }

    pub fn is_empty(&self) -> bool {
        self.theta.is_empty()
    }

    /// Largest absolute displacement reached over the run
    pub fn max_abs_theta(&self) -> f64 {
        self.theta.iter().fold(0.0, |m, &y| m.max(y.abs()))
    }

    /// Displacement at the final sample
    pub fn final_theta(&self) -> f64 {
        self.theta.last().copied().unwrap_or(0.0)
    }
}

/// Sample a forcing term on the grid, scaled by ε²
///
/// Produces the sequence c_k = ε²·g(t_k) the recurrence consumes. Each
/// sample is independent of the others, so the grid points are evaluated
/// in parallel; the recurrence itself stays strictly sequential.
pub fn sample_forcing<F: Forcing + Sync>(grid: &TimeGrid, forcing: &F) -> Vec<f64> {
    let epsilon_sq = grid.epsilon() * grid.epsilon();
    (0..grid.len())
        .into_par_iter()
        .map(|k| epsilon_sq * forcing.eval(grid.time(k)))
        .collect()
}

/// Run a full cabin-sway simulation
///
/// # Pipeline
///
/// 1. Build the uniform grid from the configuration
/// 2. Sample the selected wind components on it, scaled by ε²
/// 3. Derive the recurrence coefficients a = 2 − αε², b = −1
/// 4. Evaluate the recurrence by forward substitution
///
/// # Returns
///
/// The [`Trajectory`] of angular displacements, one value per grid sample,
/// with `theta[0]` and `theta[1]` equal to the configured seeds.
///
/// # Errors
///
/// Returns `FdError` for invalid physical parameters, a degenerate grid,
/// or a grid too coarse for the explicit scheme to be stable.
pub fn simulate_sway(cfg: &SwayConfig) -> FdResult<Trajectory> {
    cfg.validate()?;

    let grid = cfg.grid();
    let wind = CabinWind::new(cfg.wind, cfg.components);
    let forcing = sample_forcing(&grid, &wind);
    let (a, b) = cfg.coefficients();

    let theta = solve_recurrence(a, b, &forcing, cfg.theta0, cfg.theta1);

    Ok(Trajectory {
        time: grid.times(),
        theta,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_coefficients_match_derivation() {
        let cfg = SwayConfig {
            alpha: 2.5,
            t_end: 10.0,
            steps: 1000,
            ..Default::default()
        };
        let epsilon = cfg.grid().epsilon();
        let (a, b) = cfg.coefficients();
        assert_eq!(a, 2.0 - 2.5 * epsilon * epsilon);
        assert_eq!(b, -1.0);
    }

    #[test]
    fn test_sampling_is_epsilon_squared_scaled() {
        use crate::forcing::FnForcing;

        let grid = TimeGrid::new(4.0, 8);
        let samples = sample_forcing(&grid, &FnForcing(|t: f64| t + 1.0));
        let epsilon_sq = grid.epsilon() * grid.epsilon();
        assert_eq!(samples.len(), 8);
        for (k, &c) in samples.iter().enumerate() {
            assert!((c - epsilon_sq * (grid.time(k) + 1.0)).abs() < 1e-15);
        }
    }

    #[test]
    fn test_validate_rejects_coarse_grid() {
        let cfg = SwayConfig {
            alpha: 100.0,
            t_end: 100.0,
            steps: 10, // ε = 10, ε√α = 100
            ..Default::default()
        };
        match cfg.validate() {
            Err(FdError::UnstableScheme { .. }) => {}
            other => panic!("expected UnstableScheme, got {:?}", other.err()),
        }
    }

    #[test]
    fn test_simulation_is_deterministic() {
        let cfg = SwayConfig::default();
        let first = simulate_sway(&cfg).expect("valid configuration");
        let second = simulate_sway(&cfg).expect("valid configuration");
        assert_eq!(first.theta, second.theta);
        assert_eq!(first.time, second.time);
    }
}
