pub mod config;
pub mod engine;
pub mod error;
pub mod permutation;
pub mod report;
pub mod rng;
pub mod strategy;
pub mod theory;

pub use config::{
    ExecutionMode, SimulationConfig, NUMBER_OF_BOXES_TO_CHECK, NUMBER_OF_ITERATIONS,
    NUMBER_OF_PRISONERS,
};
pub use engine::{
    run_simulation, run_trial, run_trials_parallel, run_trials_sequential, tally,
    tally_parallel, SimulationTally,
};
pub use error::SimulationError;
pub use permutation::{cycle_lengths, is_permutation, longest_cycle, random_permutation};
pub use report::{SimulationReport, FINISH_BANNER, START_BANNER};
pub use rng::Rng;
pub use strategy::{
    efficient_strategy, naive_strategy, prisoner_follows_cycle, Strategy,
};
pub use theory::{
    efficient_success_probability, naive_success_probability, theoretical_success_probability,
};
