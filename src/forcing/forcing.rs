// src/forcing/forcing.rs

/// A right-hand-side forcing term, a pure function of time
pub trait Forcing {
    fn eval(&self, t: f64) -> f64;
}

/// Adapter lifting a plain closure into a [`Forcing`], convenient for
/// tests and one-off terms
pub struct FnForcing<F>(pub F);

impl<F: Fn(f64) -> f64> Forcing for FnForcing<F> {
    fn eval(&self, t: f64) -> f64 {
        (self.0)(t)
    }
}
