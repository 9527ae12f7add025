// demos/demo.rs
use cabin_sway::analytics::harmonic;
use cabin_sway::forcing::{WindComponents, WindParams};
use cabin_sway::math_utils::Timer;
use cabin_sway::output;
use cabin_sway::sim::{simulate_sway, SwayConfig};
use std::f64;

fn main() {
    println!("Running cabin-sway Finite-Difference Demo\n");

    let base_wind = WindParams::default();

    // Scenario 1: calm day, only the startup transient disturbs the cabin
    let cfg_calm = SwayConfig {
        components: WindComponents::STARTUP,
        wind: base_wind,
        ..Default::default()
    };

    // Scenario 2: steady crosswind with vortex shedding
    let cfg_steady = SwayConfig {
        components: WindComponents::STEADY | WindComponents::VORTEX,
        wind: base_wind,
        ..Default::default()
    };

    // Scenario 3: full wind load including a mid-ride gust
    let cfg_gusty = SwayConfig {
        components: WindComponents::all(),
        wind: base_wind,
        ..Default::default()
    };

    let scenarios = [
        ("calm (startup only)", cfg_calm),
        ("steady + vortex", cfg_steady),
        ("full load with gust", cfg_gusty),
    ];

    for (name, cfg) in &scenarios {
        let mut timer = Timer::new();
        timer.start();
        let trajectory = simulate_sway(cfg).expect("Valid configuration");
        let elapsed = timer.elapsed_ms();

        println!("Scenario: {}", name);
        println!("  grid: {} samples, ε = {:.4} s", trajectory.len(), cfg.grid().epsilon());
        println!("  max |θ|: {:.5} rad", trajectory.max_abs_theta());
        println!("  final θ: {:.5} rad", trajectory.final_theta());
        println!("  solve time: {:.3} ms", elapsed);

        if cfg.components.contains(WindComponents::STEADY) {
            let offset = harmonic::static_offset(cfg.alpha, cfg.wind.mean_load);
            println!("  static offset g₀/α: {:.5} rad", offset);
        }
        println!();
    }

    // Export the gusty trajectory for external plotting
    let (_, cfg_gusty) = &scenarios[2];
    let trajectory = simulate_sway(cfg_gusty).expect("Valid configuration");
    let filename = "cabin_sway_gusty.csv";
    match output::write_trajectory_to_csv(filename, &trajectory) {
        Ok(()) => println!("Gusty trajectory written to {}", filename),
        Err(e) => println!("Could not write {}: {}", filename, e),
    }

    let summary = [
        ("alpha", format!("{}", cfg_gusty.alpha)),
        ("t_end", format!("{}", cfg_gusty.t_end)),
        ("steps", format!("{}", cfg_gusty.steps)),
        ("max_abs_theta", format!("{:.6}", trajectory.max_abs_theta())),
        ("final_theta", format!("{:.6}", trajectory.final_theta())),
    ];
    let summary_refs: Vec<(&str, &str)> = summary
        .iter()
        .map(|(k, v)| (*k, v.as_str()))
        .collect();
    match output::write_summary_to_csv("cabin_sway_summary.csv", &summary_refs) {
        Ok(()) => println!("Run summary written to cabin_sway_summary.csv"),
        Err(e) => println!("Could not write summary: {}", e),
    }
}
