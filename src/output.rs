// src/output.rs
use crate::sim::engine::Trajectory;
use std::fs::File;
use std::io::{self, Write};

pub fn write_trajectory_to_csv(filename: &str, trajectory: &Trajectory) -> io::Result<()> {
    let mut file = File::create(filename)?;
    writeln!(file, "t,theta")?;
    for (t, theta) in trajectory.time.iter().zip(trajectory.theta.iter()) {
        writeln!(file, "{},{}", t, theta)?;
    }
    Ok(())
}

pub fn write_summary_to_csv(filename: &str, summary_data: &[(&str, &str)]) -> io::Result<()> {
    let mut file = File::create(filename)?;
    for (key, value) in summary_data {
        writeln!(file, "{},{}", key, value)?;
    }
    Ok(())
}
