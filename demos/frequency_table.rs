//! Writes 5- and 7-card hand category frequencies to `out.csv`.
//!
//! Set `RUST_LOG=handfreq=debug` to see simulation progress.

use std::process::ExitCode;
use std::time::{SystemTime, UNIX_EPOCH};

use handfreq::{Simulation, SimulationOptions};
use tracing_subscriber::EnvFilter;

const OUTPUT: &str = "out.csv";

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let seed = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_secs();
    let options = SimulationOptions::default();
    let mut simulation = Simulation::new(options, seed);

    let table = match simulation.run() {
        Ok(table) => table,
        Err(err) => {
            eprintln!("Simulation error: {err}");
            return ExitCode::FAILURE;
        }
    };

    print!("{table}");

    if let Err(err) = table.save(OUTPUT) {
        eprintln!("Could not write {OUTPUT}: {err}");
        return ExitCode::FAILURE;
    }

    println!("Wrote {OUTPUT} ({} trials, seed {seed}).", table.trials(0));
    ExitCode::SUCCESS
}
