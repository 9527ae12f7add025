// tests/integration_test.rs
use cabin_sway::analytics::harmonic;
use cabin_sway::error::FdError;
use cabin_sway::forcing::{WindComponents, WindParams};
use cabin_sway::output;
use cabin_sway::sim::{simulate_sway, SwayConfig};
use std::f64;

#[test]
fn test_unforced_simulation_tracks_analytic_cosine() {
    let alpha = 1.5;
    let t_end = 20.0;
    let steps = 20_000;
    let y0 = 0.1;
    let v0 = 0.03;

    let epsilon = t_end / steps as f64;
    let cfg = SwayConfig {
        alpha,
        t_end,
        steps,
        theta0: y0,
        // Second seed taken from the exact solution one quantum in
        theta1: harmonic::homogeneous_displacement(alpha, y0, v0, epsilon),
        components: WindComponents::NONE,
        wind: WindParams::default(),
    };

    let trajectory = simulate_sway(&cfg).expect("Valid configuration");
    assert_eq!(trajectory.len(), steps);

    let mut max_error = 0.0f64;
    for (k, &theta) in trajectory.theta.iter().enumerate() {
        let exact = harmonic::homogeneous_displacement(alpha, y0, v0, trajectory.time[k]);
        max_error = max_error.max((theta - exact).abs());
    }

    println!("max |FD - analytic| over {} samples: {:e}", steps, max_error);
    assert!(
        max_error < 1e-4,
        "finite-difference trajectory deviates from analytic solution by {}",
        max_error
    );
}

#[test]
fn test_constant_forcing_static_offset_is_fixed_point() {
    let alpha = 1.2;
    let wind = WindParams {
        mean_load: 0.03,
        ..Default::default()
    };
    let offset = harmonic::static_offset(alpha, wind.mean_load);

    // Seeding both values at g0/α makes the offset an exact fixed point of
    // the recurrence.
    let cfg = SwayConfig {
        alpha,
        t_end: 60.0,
        steps: 6000,
        theta0: offset,
        theta1: offset,
        components: WindComponents::STEADY,
        wind,
    };

    let trajectory = simulate_sway(&cfg).expect("Valid configuration");
    let max_deviation = trajectory
        .theta
        .iter()
        .map(|&theta| (theta - offset).abs())
        .fold(0.0f64, |m, d| m.max(d));

    println!("max deviation from static offset: {:e}", max_deviation);
    assert!(
        max_deviation < 1e-10,
        "trajectory drifted off the static offset by {}",
        max_deviation
    );
}

#[test]
fn test_component_selection_superposes() {
    // Gust and vortex loads simulated together must equal the element-wise
    // sum of simulating each alone (zero seeds), by linearity.
    let base = SwayConfig {
        theta0: 0.0,
        theta1: 0.0,
        ..Default::default()
    };

    let gust = simulate_sway(&SwayConfig {
        components: WindComponents::GUST,
        ..base.clone()
    })
    .expect("Valid configuration");
    let vortex = simulate_sway(&SwayConfig {
        components: WindComponents::VORTEX,
        ..base.clone()
    })
    .expect("Valid configuration");
    let both = simulate_sway(&SwayConfig {
        components: WindComponents::GUST | WindComponents::VORTEX,
        ..base
    })
    .expect("Valid configuration");

    let max_diff = both
        .theta
        .iter()
        .zip(gust.theta.iter().zip(vortex.theta.iter()))
        .map(|(&b, (&g, &v))| (b - (g + v)).abs())
        .fold(0.0f64, |m, d| m.max(d));

    println!("component superposition max deviation: {:e}", max_diff);
    assert!(
        max_diff < 1e-9,
        "combined components deviate from superposed runs by {}",
        max_diff
    );
}

#[test]
fn test_seeds_survive_into_trajectory() {
    let cfg = SwayConfig {
        theta0: 0.017,
        theta1: 0.019,
        ..Default::default()
    };
    let trajectory = simulate_sway(&cfg).expect("Valid configuration");
    assert_eq!(trajectory.theta[0], 0.017);
    assert_eq!(trajectory.theta[1], 0.019);
    assert_eq!(trajectory.time.len(), trajectory.theta.len());
}

#[test]
fn test_invalid_configurations_are_rejected() {
    let negative_alpha = SwayConfig {
        alpha: -1.0,
        ..Default::default()
    };
    assert!(matches!(
        simulate_sway(&negative_alpha),
        Err(FdError::InvalidParameters { .. })
    ));

    let too_few_steps = SwayConfig {
        steps: 1,
        ..Default::default()
    };
    assert!(matches!(
        simulate_sway(&too_few_steps),
        Err(FdError::InvalidConfiguration { .. })
    ));

    let coarse_grid = SwayConfig {
        alpha: 400.0,
        t_end: 100.0,
        steps: 100, // ε√α = 20
        ..Default::default()
    };
    assert!(matches!(
        simulate_sway(&coarse_grid),
        Err(FdError::UnstableScheme { .. })
    ));
}

#[test]
fn test_trajectory_csv_export() {
    let cfg = SwayConfig {
        steps: 50,
        t_end: 1.0,
        ..Default::default()
    };
    let trajectory = simulate_sway(&cfg).expect("Valid configuration");

    let path = std::env::temp_dir().join("cabin_sway_trajectory_test.csv");
    let path_str = path.to_str().expect("temp path is valid UTF-8");
    output::write_trajectory_to_csv(path_str, &trajectory).expect("CSV write succeeds");

    let contents = std::fs::read_to_string(&path).expect("CSV file readable");
    let lines: Vec<&str> = contents.lines().collect();
    assert_eq!(lines[0], "t,theta");
    assert_eq!(lines.len(), trajectory.len() + 1);

    std::fs::remove_file(&path).ok();
}
