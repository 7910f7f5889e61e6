//! Traffic Light State Machine
//!
//! Runs the light through two full cycles, showing the lit color before
//! every advance.
//!
//! Run with: cargo run --bin traffic_light

use statecraft::logging;
use statecraft::traffic_light::TrafficLight;
use statecraft::SnapshotError;
use std::thread;
use std::time::Duration;
use tracing::debug;

const CYCLES: usize = 2;
const TRANSITIONS_PER_CYCLE: usize = 3;
const PAUSE: Duration = Duration::from_secs(1);

fn main() -> Result<(), SnapshotError> {
    logging::init();

    println!("{}", "=".repeat(60));
    println!("STATE PATTERN DEMO - TRAFFIC LIGHT");
    println!("{}", "=".repeat(60));

    let mut light = TrafficLight::new();

    let total = CYCLES * TRANSITIONS_PER_CYCLE;
    println!("\nRunning {CYCLES} full cycles ({total} transitions)...");

    for i in 1..=total {
        println!("\n--- Transition {i}/{total} ---");
        light.show_color();
        light.advance();
        thread::sleep(PAUSE);
    }

    println!("\n--- Final State ---");
    light.show_color();
    println!("\nCurrent state: {}", light.state_name());

    let snapshot = light.snapshot().to_json()?;
    debug!(snapshot = %snapshot, "final snapshot");

    println!("\n{}", "=".repeat(60));
    println!("DEMO COMPLETE");
    println!("{}", "=".repeat(60));
    Ok(())
}
