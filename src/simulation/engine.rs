use std::time::Instant;

use rayon::prelude::*;
use tracing::info;

use crate::parallel::{count_successes, run_trial_batches, WorkerPool, BATCHES_PER_WORKER};
use crate::simulation::config::{ExecutionMode, SimulationConfig};
use crate::simulation::error::SimulationError;
use crate::simulation::permutation::{is_permutation, random_permutation};
use crate::simulation::report::SimulationReport;
use crate::simulation::rng::Rng;

/// Successful trials out of total trials.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SimulationTally {
    pub successes: usize,
    pub iterations: usize,
}

impl SimulationTally {
    pub fn probability(&self) -> f64 {
        if self.iterations == 0 {
            0.0
        } else {
            self.successes as f64 / self.iterations as f64
        }
    }
}

/// Sum a fixed sequence of trial outcomes on the current thread.
pub fn tally(outcomes: &[bool]) -> SimulationTally {
    SimulationTally {
        successes: outcomes.iter().filter(|&&outcome| outcome).count(),
        iterations: outcomes.len(),
    }
}

/// Same as [tally] but reduced across the Rayon pool.
pub fn tally_parallel(outcomes: &[bool]) -> SimulationTally {
    SimulationTally {
        successes: outcomes.par_iter().filter(|&&outcome| outcome).count(),
        iterations: outcomes.len(),
    }
}

/// One full trial: fresh box assignment, fresh visitation order, strategy verdict.
/// Reproducible from `(base_seed, trial_index)` alone.
pub fn run_trial(config: &SimulationConfig, base_seed: u64, trial_index: u64) -> bool {
    let mut rng = Rng::for_trial(base_seed, trial_index);
    let boxes = random_permutation(config.prisoners, &mut rng);
    let order = random_permutation(config.prisoners, &mut rng);
    debug_assert!(is_permutation(&boxes) && is_permutation(&order));
    config
        .strategy
        .evaluate(&boxes, &order, config.boxes_to_check, &mut rng)
}

/// Evaluate trials `0..iterations` in order on the calling thread.
pub fn run_trials_sequential<F>(iterations: usize, trial: F) -> SimulationTally
where
    F: Fn(u64) -> bool,
{
    SimulationTally {
        successes: count_successes(0, iterations, &trial),
        iterations,
    }
}

/// Evaluate trials `0..iterations` on `pool`; partial counts per batch are summed.
pub fn run_trials_parallel<F>(
    iterations: usize,
    pool: &WorkerPool,
    trial: F,
) -> Result<SimulationTally, SimulationError>
where
    F: Fn(u64) -> bool + Sync,
{
    let successes = pool.install(|| {
        let batches = rayon::current_num_threads() * BATCHES_PER_WORKER;
        run_trial_batches(iterations, batches, &trial)
    })?;
    Ok(SimulationTally {
        successes,
        iterations,
    })
}

/// Run the configured simulation end to end and build its report.
pub fn run_simulation(config: &SimulationConfig) -> Result<SimulationReport, SimulationError> {
    let seed = match config.seed {
        Some(seed) => seed,
        None => Rng::entropy_seed()?,
    };
    let pool = WorkerPool::with_workers(config.workers);
    let workers = match config.execution {
        ExecutionMode::Sequential => None,
        ExecutionMode::Parallel => Some(pool.available_workers()),
    };

    info!(
        strategy = %config.strategy,
        execution = %config.execution,
        prisoners = config.prisoners,
        boxes_to_check = config.boxes_to_check,
        iterations = config.iterations,
        seed,
        workers = ?workers,
        "simulation started"
    );

    let started = Instant::now();
    let trial = |index: u64| run_trial(config, seed, index);
    let tally = match config.execution {
        ExecutionMode::Sequential => run_trials_sequential(config.iterations, trial),
        ExecutionMode::Parallel => run_trials_parallel(config.iterations, &pool, trial)?,
    };
    let elapsed = started.elapsed();

    info!(
        successes = tally.successes,
        probability = tally.probability(),
        elapsed_secs = elapsed.as_secs_f64(),
        "simulation finished"
    );

    Ok(SimulationReport::new(config, seed, tally, workers, elapsed))
}
