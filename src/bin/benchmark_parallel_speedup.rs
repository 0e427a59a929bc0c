//! Run the simulation once sequentially and once in parallel, then print timings and speedup.
//!
//! Usage: cargo run --release --bin benchmark_parallel_speedup

use std::time::Instant;

use prisoners::simulation::{run_simulation, ExecutionMode, SimulationConfig, Strategy};

fn main() {
    prisoners::logging::init();

    let seed = 12345u64;
    let iterations = 200_000;
    let base = SimulationConfig::default()
        .with_strategy(Strategy::Efficient)
        .with_iterations(iterations)
        .with_seed(seed);

    println!(
        "Prisoners: {} trials (prisoners={}, boxes_to_check={}, strategy={})",
        iterations, base.prisoners, base.boxes_to_check, base.strategy
    );
    println!();

    // Sequential
    let t0 = Instant::now();
    let sequential = match run_simulation(&base.clone().with_execution(ExecutionMode::Sequential)) {
        Ok(report) => report,
        Err(err) => {
            eprintln!("sequential run failed: {err}");
            std::process::exit(err.exit_code());
        }
    };
    let elapsed_seq = t0.elapsed();
    let seq_ms = elapsed_seq.as_secs_f64() * 1000.0;
    println!(
        "Sequential:  {:.2} ms  ({:.1} trials/s)",
        seq_ms,
        iterations as f64 / elapsed_seq.as_secs_f64()
    );

    // Parallel
    let t0 = Instant::now();
    let parallel = match run_simulation(&base.with_execution(ExecutionMode::Parallel)) {
        Ok(report) => report,
        Err(err) => {
            eprintln!("parallel run failed: {err}");
            std::process::exit(err.exit_code());
        }
    };
    let elapsed_par = t0.elapsed();
    let par_ms = elapsed_par.as_secs_f64() * 1000.0;
    println!(
        "Parallel:    {:.2} ms  ({:.1} trials/s, {} workers)",
        par_ms,
        iterations as f64 / elapsed_par.as_secs_f64(),
        parallel.workers.unwrap_or(1)
    );

    println!();
    println!("Speedup:     {:.2}x faster (parallel vs sequential)", seq_ms / par_ms);

    assert_eq!(
        sequential.successes, parallel.successes,
        "success count mismatch between sequential and parallel"
    );
    println!(
        "(Results match sequential vs parallel: {} successes, p = {})",
        parallel.successes, parallel.probability
    );
}
