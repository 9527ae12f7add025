// src/analytics/harmonic.rs
//! Closed-Form Reference Solutions
//!
//! # Mathematical Foundation
//!
//! The undamped oscillator
//! ```text
//! y'' + α y = 0,   y(0) = y₀,  y'(0) = v₀
//! ```
//! has the exact solution
//! ```text
//! y(t) = y₀ cos(ωt) + (v₀/ω) sin(ωt),   ω = √α
//! ```
//!
//! For a constant forcing g₀ the particular solution is the static offset
//! `y_p = g₀/α`, around which the homogeneous oscillation takes place.
//!
//! These closed forms serve as oracles when checking the finite-difference
//! trajectory, whose global error is O(ε²).

use std::f64;

/// Exact displacement of the unforced oscillator
///
/// # Parameters
/// - `alpha`: stiffness coefficient α (must be positive for a real ω)
/// - `y0`: initial displacement
/// - `v0`: initial velocity
/// - `t`: evaluation time
pub fn homogeneous_displacement(alpha: f64, y0: f64, v0: f64, t: f64) -> f64 {
    let omega = alpha.sqrt();
    y0 * (omega * t).cos() + (v0 / omega) * (omega * t).sin()
}

/// Static offset g₀/α produced by a constant forcing
pub fn static_offset(alpha: f64, g0: f64) -> f64 {
    g0 / alpha
}

/// Natural period 2π/√α of the free oscillation
pub fn natural_period(alpha: f64) -> f64 {
    2.0 * f64::consts::PI / alpha.sqrt()
}
