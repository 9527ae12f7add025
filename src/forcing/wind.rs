// src/forcing/wind.rs
//! Wind Load on a Suspended Cabin
//!
//! # Physical Model
//!
//! The angular forcing g(t) acting on the cabin is a sum of closed-form
//! load terms, each a pure function of time parameterized by the physical
//! configuration:
//!
//! - **Steady**: constant mean-wind load
//! - **Gust**: Gaussian-envelope pulse, `A·exp(-((t - t_c)/w)²)`
//! - **Vortex**: sinusoidal vortex-shedding load, `A·sin(Ω t)`
//! - **Startup**: exponentially decaying transient, `A·exp(-λ t)`
//!
//! The terms compose by addition; which ones contribute is selected with
//! the [`WindComponents`] flag set.

use super::forcing::Forcing;
use bitflags::bitflags;
use std::f64;

bitflags! {
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct WindComponents: u32 {
        const NONE    = 0;
        const STEADY  = 1 << 0;
        const GUST    = 1 << 1;
        const VORTEX  = 1 << 2;
        const STARTUP = 1 << 3;
    }
}

/// Physical parameters of the wind load, in angular-acceleration units (rad/s²)
#[derive(Debug, Clone, Copy)]
pub struct WindParams {
    /// Mean-wind load
    pub mean_load: f64,
    /// Peak gust load
    pub gust_amplitude: f64,
    /// Time at which the gust peaks, seconds
    pub gust_center: f64,
    /// Gust envelope width, seconds
    pub gust_width: f64,
    /// Vortex-shedding load amplitude
    pub vortex_amplitude: f64,
    /// Vortex-shedding angular frequency, rad/s
    pub vortex_omega: f64,
    /// Initial transient amplitude
    pub startup_amplitude: f64,
    /// Transient decay rate, 1/s
    pub startup_decay: f64,
}

impl Default for WindParams {
    fn default() -> Self {
        // A moderate crosswind on a mid-size gondola cabin
        WindParams {
            mean_load: 0.015,
            gust_amplitude: 0.08,
            gust_center: 40.0,
            gust_width: 5.0,
            vortex_amplitude: 0.02,
            vortex_omega: 0.9,
            startup_amplitude: 0.05,
            startup_decay: 0.12,
        }
    }
}

/// Constant mean-wind load
pub fn steady_load(params: &WindParams, _t: f64) -> f64 {
    params.mean_load
}

/// Gaussian-envelope gust pulse centered at `gust_center`
pub fn gust_load(params: &WindParams, t: f64) -> f64 {
    let u = (t - params.gust_center) / params.gust_width;
    params.gust_amplitude * (-u * u).exp()
}

/// Sinusoidal vortex-shedding load
pub fn vortex_load(params: &WindParams, t: f64) -> f64 {
    params.vortex_amplitude * (params.vortex_omega * t).sin()
}

/// Decaying transient from the moment the cabin leaves the station
pub fn startup_load(params: &WindParams, t: f64) -> f64 {
    params.startup_amplitude * (-params.startup_decay * t).exp()
}

/// Composite wind load with a selectable set of component terms
pub struct CabinWind {
    pub params: WindParams,
    pub components: WindComponents,
}

impl CabinWind {
    pub fn new(params: WindParams, components: WindComponents) -> Self {
        CabinWind { params, components }
    }
}

impl Forcing for CabinWind {
    fn eval(&self, t: f64) -> f64 {
        let mut g = 0.0;
        if self.components.contains(WindComponents::STEADY) {
            g += steady_load(&self.params, t);
        }
        if self.components.contains(WindComponents::GUST) {
            g += gust_load(&self.params, t);
        }
        if self.components.contains(WindComponents::VORTEX) {
            g += vortex_load(&self.params, t);
        }
        if self.components.contains(WindComponents::STARTUP) {
            g += startup_load(&self.params, t);
        }
        g
    }
}
