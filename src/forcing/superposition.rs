// src/forcing/superposition.rs
use super::forcing::Forcing;

/// Sum of two forcing terms
///
/// The recurrence is linear, so superposing forcings superposes the
/// resulting trajectories exactly (up to floating-point rounding).
pub struct Superposition<A, B> {
    pub first: A,
    pub second: B,
}

impl<A, B> Superposition<A, B> {
    pub fn new(first: A, second: B) -> Self {
        Superposition { first, second }
    }
}

impl<A: Forcing, B: Forcing> Forcing for Superposition<A, B> {
    fn eval(&self, t: f64) -> f64 {
        self.first.eval(t) + self.second.eval(t)
    }
}
