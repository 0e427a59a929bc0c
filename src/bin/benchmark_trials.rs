//! Single-thread trial throughput, optionally appended to a log file for trend tracking.
//!
//! Usage:
//!   cargo run --release --bin benchmark_trials
//!   cargo run --release --bin benchmark_trials -- --log
//!
//! --log  Append one row to benchmark_log.csv (date, strategy, trials_per_sec, trials_per_min, prisoners).

use std::fs::OpenOptions;
use std::io::Write;
use std::time::Instant;

use prisoners::simulation::{run_trial, SimulationConfig, Strategy};

// Run each strategy for at least this long or this many trials
const MIN_DURATION_MS: u128 = 2000;
const MIN_TRIALS: u64 = 5_000;

fn main() {
    let log = std::env::args().any(|a| a == "--log");
    let mut rows = Vec::new();

    for strategy in [Strategy::Naive, Strategy::Efficient] {
        let config = SimulationConfig::default().with_strategy(strategy);

        let start = Instant::now();
        let mut trials: u64 = 0;
        let mut successes: u64 = 0;
        while start.elapsed().as_millis() < MIN_DURATION_MS || trials < MIN_TRIALS {
            if run_trial(&config, 7, trials) {
                successes += 1;
            }
            trials += 1;
        }
        let elapsed_secs = start.elapsed().as_secs_f64();

        let trials_per_sec = trials as f64 / elapsed_secs;
        let trials_per_min = trials_per_sec * 60.0;

        println!("Trial benchmark ({strategy}, {} prisoners):", config.prisoners);
        println!("  Trials:      {}", trials);
        println!("  Successes:   {}", successes);
        println!("  Duration:    {:.2} s", elapsed_secs);
        println!("  Trials/s:    {:.2}", trials_per_sec);
        println!("  Trials/min:  {:.2}", trials_per_min);

        rows.push((strategy, trials_per_sec, trials_per_min, config.prisoners));
    }

    if log {
        if let Err(err) = append_log(&rows) {
            eprintln!("failed to write benchmark_log.csv: {err}");
            std::process::exit(1);
        }
    }
}

fn append_log(rows: &[(Strategy, f64, f64, usize)]) -> std::io::Result<()> {
    let date = chrono::Utc::now().format("%Y-%m-%dT%H:%M:%SZ");
    let path = "benchmark_log.csv";
    let mut file = OpenOptions::new().create(true).append(true).open(path)?;
    if file.metadata().map(|m| m.len() == 0).unwrap_or(true) {
        file.write_all(b"date,strategy,trials_per_sec,trials_per_min,prisoners\n")?;
    }
    for (strategy, per_sec, per_min, prisoners) in rows {
        let line = format!("{date},{strategy},{per_sec:.4},{per_min:.4},{prisoners}\n");
        file.write_all(line.as_bytes())?;
    }
    file.flush()?;
    println!("Appended to {}", path);
    Ok(())
}
