// scripts/benchmark.rs
use cabin_sway::forcing::WindComponents;
use cabin_sway::math_utils::Timer;
use cabin_sway::sim::{simulate_sway, SwayConfig};
use std::env;
use std::fs::File;
use std::io::Write;

#[derive(Debug)]
struct SystemInfo {
    os: String,
    cpu_cores: usize,
    rustc_flags: String,
    rayon_threads: usize,
}

impl SystemInfo {
    fn gather() -> Self {
        Self {
            os: env::consts::OS.to_string(),
            cpu_cores: num_cpus::get(),
            rustc_flags: env::var("RUSTFLAGS").unwrap_or_else(|_| "default".to_string()),
            rayon_threads: rayon::current_num_threads(),
        }
    }
}

#[derive(Debug)]
struct BenchResult {
    steps: usize,
    solve_ms: f64,
    samples_per_sec: f64,
    max_abs_theta: f64,
}

fn run_grid_scaling() -> Vec<BenchResult> {
    let mut results = Vec::new();

    for &steps in &[10_000usize, 100_000, 1_000_000, 10_000_000] {
        let cfg = SwayConfig {
            steps,
            components: WindComponents::all(),
            ..Default::default()
        };

        // Warm-up pass so the timed run sees hot caches
        let _ = simulate_sway(&cfg).expect("Valid configuration");

        let mut timer = Timer::new();
        timer.start();
        let trajectory = simulate_sway(&cfg).expect("Valid configuration");
        let solve_ms = timer.elapsed_ms();

        results.push(BenchResult {
            steps,
            solve_ms,
            samples_per_sec: steps as f64 / (solve_ms / 1000.0),
            max_abs_theta: trajectory.max_abs_theta(),
        });
    }

    results
}

fn write_results(system_info: &SystemInfo, results: &[BenchResult]) -> std::io::Result<()> {
    std::fs::create_dir_all("bench")?;
    let timestamp = chrono::Utc::now().format("%Y%m%d_%H%M%S");
    let filename = format!("bench/cabin_sway_benchmark_{}.csv", timestamp);
    let mut file = File::create(&filename)?;

    writeln!(file, "# cabin-sway grid scaling benchmark")?;
    writeln!(
        file,
        "# Generated: {}",
        chrono::Utc::now().format("%Y-%m-%d %H:%M:%S UTC")
    )?;
    writeln!(file, "# OS: {}", system_info.os)?;
    writeln!(file, "# CPU Cores: {}", system_info.cpu_cores)?;
    writeln!(file, "# Rayon Threads: {}", system_info.rayon_threads)?;
    writeln!(file, "# RUSTFLAGS: {}", system_info.rustc_flags)?;
    writeln!(file, "steps,solve_ms,samples_per_sec,max_abs_theta")?;

    for r in results {
        writeln!(
            file,
            "{},{:.3},{:.0},{:.8}",
            r.steps, r.solve_ms, r.samples_per_sec, r.max_abs_theta
        )?;
    }

    println!("Benchmark results written to {}", filename);
    Ok(())
}

fn main() {
    println!("cabin-sway Grid Scaling Benchmark");
    println!("=================================\n");

    let system_info = SystemInfo::gather();
    println!("System:");
    println!("  OS: {}", system_info.os);
    println!("  CPU Cores: {}", system_info.cpu_cores);
    println!("  Rayon Threads: {}", system_info.rayon_threads);
    println!("  RUSTFLAGS: {}\n", system_info.rustc_flags);

    let results = run_grid_scaling();

    println!("{:>12} {:>12} {:>16} {:>14}", "steps", "solve (ms)", "samples/sec", "max |θ| (rad)");
    for r in &results {
        println!(
            "{:>12} {:>12.3} {:>16.0} {:>14.6}",
            r.steps, r.solve_ms, r.samples_per_sec, r.max_abs_theta
        );
    }
    println!();

    if let Err(e) = write_results(&system_info, &results) {
        eprintln!("Could not write benchmark CSV: {}", e);
    }
}
