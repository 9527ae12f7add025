// src/solvers/recurrence.rs
//! Three-Term Recurrence Solver
//!
//! # Mathematical Framework
//!
//! Discretizing the oscillator ODE
//! ```text
//! y'' + α y = g(t)
//! ```
//! with the central second difference
//! ```text
//! y''(t_k) ≈ (y_{k+1} - 2 y_k + y_{k-1}) / ε²
//! ```
//! yields, after solving for the newest value, the constant-coefficient
//! linear recurrence
//! ```text
//! y_k = a·y_{k-1} + b·y_{k-2} + c_{k-1}
//! ```
//! with `a = 2 - αε²`, `b = -1`, and `c_j = ε²·g(t_j)`. The solver takes
//! `a`, `b`, and the pre-scaled forcing sequence as given and is agnostic
//! to how they were derived; `b = -1` is a structural constant of the
//! central-difference scheme, fixed at the derivation site.
//!
//! # Properties
//!
//! - **Forward substitution**: each value comes purely from the two values
//!   already known, no system solve
//! - **Local truncation error**: O(ε⁴) per step, O(ε²) global
//! - **Stability**: conditionally stable, requires ε√α < 2
//!
//! The arithmetic is total: any finite `a`, `b`, seeds, and forcing are
//! accepted, and numerically unstable coefficient choices propagate whatever
//! IEEE-754 values they produce. Validation belongs to the caller.

use std::f64;

/// Evaluate the full recurrence by forward substitution
///
/// # Contract
///
/// Returns `y` of the same length as `forcing`, where
/// ```text
/// y[0] = v0
/// y[1] = v1
/// y[k] = a·y[k-1] + b·y[k-2] + forcing[k-1]   for k = 2 .. n-1
/// ```
///
/// Note the forcing index: step `k` consumes the sample at the interior
/// point `k-1` where the central difference was formed.
///
/// # Parameters
/// - `a`: multiplier of the newest known value y_{k-1}
/// - `b`: multiplier of y_{k-2}
/// - `forcing`: right-hand-side samples, already scaled by ε²
/// - `v0`, `v1`: the two seed values
///
/// # Degenerate lengths
/// Fewer than two forcing samples yields the truncated seed sequence:
/// empty input gives an empty output, a single sample gives `[v0]`.
pub fn solve_recurrence(a: f64, b: f64, forcing: &[f64], v0: f64, v1: f64) -> Vec<f64> {
    let n = forcing.len();
    if n == 0 {
        return Vec::new();
    }
    if n == 1 {
        return vec![v0];
    }

    let mut y = Vec::with_capacity(n);
    y.push(v0);
    y.push(v1);
    for k in 2..n {
        let next = a * y[k - 1] + b * y[k - 2] + forcing[k - 1];
        y.push(next);
    }
    y
}

/// Streaming form of the recurrence, retaining only the trailing two values
///
/// For callers that consume the trajectory as it is produced and do not
/// need the full sequence in memory. `step` advances one index and returns
/// the newly computed value.
pub struct RecurrenceState {
    a: f64,
    b: f64,
    prev: f64,
    curr: f64,
}

impl RecurrenceState {
    /// Seed the state with y_0 and y_1
    pub fn new(a: f64, b: f64, v0: f64, v1: f64) -> Self {
        RecurrenceState {
            a,
            b,
            prev: v0,
            curr: v1,
        }
    }

    /// Advance one step, consuming the forcing sample at the interior point
    ///
    /// The `k`-th call (1-based) returns y_{k+1} and must be fed the sample
    /// `c[k]`, matching `solve_recurrence`'s `forcing[k-1]` indexing.
    pub fn step(&mut self, forcing_sample: f64) -> f64 {
        let next = self.a * self.curr + self.b * self.prev + forcing_sample;
        self.prev = self.curr;
        self.curr = next;
        next
    }

    /// Most recently produced value
    pub fn current(&self) -> f64 {
        self.curr
    }
}
